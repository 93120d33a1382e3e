use crate::interval::{Boundary, Interval};

use super::pruning_iter::PruningOracle;

/// Intervals containing a point.
#[derive(Debug)]
pub(crate) struct ContainingPoint<'a, T>(pub(crate) &'a T);

impl<T, B> PruningOracle<T, B> for ContainingPoint<'_, T>
where
    T: Ord,
    B: Boundary,
{
    fn visit_subtree(&self, subtree_max: &T) -> bool {
        B::below(self.0, subtree_max)
    }

    fn visit_right(&self, n: &Interval<T, B>) -> bool {
        self.0 >= n.low()
    }

    fn filter_yield(&self, n: &Interval<T, B>) -> bool {
        n.contains_point(self.0)
    }
}

/// Intervals that are a superset of the query.
#[derive(Debug)]
pub(crate) struct ContainingInterval<'a, T, B>(pub(crate) &'a Interval<T, B>);

impl<T, B> PruningOracle<T, B> for ContainingInterval<'_, T, B>
where
    T: Ord,
    B: Boundary,
{
    fn visit_subtree(&self, subtree_max: &T) -> bool {
        // Subset checks are independent of the boundary mode, so a degenerate
        // interval ending exactly at the subtree max may still match.
        self.0.high() <= subtree_max
    }

    fn visit_right(&self, n: &Interval<T, B>) -> bool {
        self.0.low() >= n.low()
    }

    fn filter_yield(&self, n: &Interval<T, B>) -> bool {
        n.contains(self.0)
    }
}

/// Intervals sharing at least one point with the query.
#[derive(Debug)]
pub(crate) struct Overlapping<'a, T, B>(pub(crate) &'a Interval<T, B>);

impl<T, B> PruningOracle<T, B> for Overlapping<'_, T, B>
where
    T: Ord,
    B: Boundary,
{
    fn visit_subtree(&self, subtree_max: &T) -> bool {
        B::below(self.0.low(), subtree_max)
    }

    fn visit_right(&self, n: &Interval<T, B>) -> bool {
        B::below(n.low(), self.0.high())
    }

    fn filter_yield(&self, n: &Interval<T, B>) -> bool {
        n.overlaps(self.0)
    }
}

/// Intervals that are a subset of the query.
#[derive(Debug)]
pub(crate) struct ContainedBy<'a, T, B>(pub(crate) &'a Interval<T, B>);

impl<T, B> PruningOracle<T, B> for ContainedBy<'_, T, B>
where
    T: Ord,
    B: Boundary,
{
    fn visit_subtree(&self, subtree_max: &T) -> bool {
        self.0.low() <= subtree_max
    }

    fn visit_right(&self, n: &Interval<T, B>) -> bool {
        n.low() <= self.0.high()
    }

    fn filter_yield(&self, n: &Interval<T, B>) -> bool {
        n.contained_by(self.0)
    }
}
