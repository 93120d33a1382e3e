use crate::{
    augment::{IntervalNode, SubtreeMax},
    interval::{Boundary, Interval},
    iter::{
        ContainedBy, ContainingInterval, ContainingPoint, OwnedIter, Overlapping, PruningIter,
        PruningOracle, RefIter,
    },
    node::{remove_recurse, Node, RemoveResult},
};

/// The interval-keyed AVL tree shared by [`IntervalTree`] and
/// [`IntervalMap`], mapping each [`Interval`] to a `V`.
///
/// [`IntervalTree`]: crate::IntervalTree
/// [`IntervalMap`]: crate::IntervalMap
#[derive(Debug, Clone)]
pub(crate) struct TreeBase<T, B, V> {
    root: Option<Box<IntervalNode<T, B, V>>>,
    len: usize,
}

impl<T, B, V> Default for TreeBase<T, B, V> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T, B, V> TreeBase<T, B, V> {
    pub(crate) fn root(&self) -> Option<&IntervalNode<T, B, V>> {
        self.root.as_deref()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn height(&self) -> usize {
        self.root().map(|v| v.height() as usize + 1).unwrap_or_default()
    }

    pub(crate) fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// The greatest upper bound of any stored interval.
    pub(crate) fn span_max(&self) -> Option<&T> {
        self.root().map(|v| v.aug().get())
    }

    pub(crate) fn into_owned_iter(self) -> OwnedIter<T, B, V> {
        OwnedIter::new(self.root)
    }
}

impl<T, B, V> TreeBase<T, B, V>
where
    T: Ord + Clone,
    B: Boundary,
{
    pub(crate) fn insert(&mut self, interval: Interval<T, B>, value: V) -> Option<V> {
        let old = match self.root {
            Some(ref mut v) => v.insert(interval, value),
            None => {
                self.root = Some(Box::new(Node::new(interval, value)));
                None
            }
        };

        if old.is_none() {
            self.len += 1;
        }

        old
    }

    pub(crate) fn get(&self, interval: &Interval<T, B>) -> Option<&IntervalNode<T, B, V>> {
        self.root()?.get(interval)
    }

    pub(crate) fn get_mut(&mut self, interval: &Interval<T, B>) -> Option<&mut V> {
        self.root.as_mut()?.get_mut(interval)
    }

    pub(crate) fn contains(&self, interval: &Interval<T, B>) -> bool {
        self.get(interval).is_some()
    }

    pub(crate) fn remove(&mut self, interval: &Interval<T, B>) -> Option<V> {
        match remove_recurse(&mut self.root, interval)? {
            RemoveResult::Removed(v) => {
                self.len -= 1;
                Some(v)
            }
            RemoveResult::ParentUnlink => unreachable!(),
        }
    }

    /// Returns true when `query` covers the whole span of the tree, from the
    /// lower bound of the minimum interval to the subtree max of the root.
    ///
    /// When `strict` is set, `B` decides whether touching the span's ends
    /// counts as covering them.
    fn dominates(&self, query: &Interval<T, B>, strict: bool) -> bool {
        let Some(root) = self.root() else {
            return false;
        };

        let (first, max) = (root.leftmost().key().low(), root.aug().get());
        if strict {
            B::below(query.low(), first) && B::below(max, query.high())
        } else {
            query.low() <= first && query.high() >= max
        }
    }

    fn walk<'a, P>(&'a self, pruner: P) -> Query<'a, T, B, V, P>
    where
        P: PruningOracle<T, B>,
    {
        Query::Pruned(PruningIter::new(self.root(), pruner))
    }

    /// All intervals containing `point`.
    pub(crate) fn containing_point<'a>(
        &'a self,
        point: &'a T,
    ) -> Query<'a, T, B, V, ContainingPoint<'a, T>> {
        self.walk(ContainingPoint(point))
    }

    /// All intervals that are a superset of `query`.
    pub(crate) fn containing_interval<'a>(
        &'a self,
        query: &'a Interval<T, B>,
    ) -> Query<'a, T, B, V, ContainingInterval<'a, T, B>> {
        self.walk(ContainingInterval(query))
    }

    /// All intervals overlapping `query`.
    pub(crate) fn overlapping_interval<'a>(
        &'a self,
        query: &'a Interval<T, B>,
    ) -> Query<'a, T, B, V, Overlapping<'a, T, B>> {
        // A query spanning the whole tree overlaps every interval in it.
        if self.dominates(query, true) {
            return Query::All(RefIter::new(self.root()));
        }
        self.walk(Overlapping(query))
    }

    /// All intervals that are a subset of `query`.
    pub(crate) fn contained_by_interval<'a>(
        &'a self,
        query: &'a Interval<T, B>,
    ) -> Query<'a, T, B, V, ContainedBy<'a, T, B>> {
        // A query spanning the whole tree contains every interval in it.
        if self.dominates(query, false) {
            return Query::All(RefIter::new(self.root()));
        }
        self.walk(ContainedBy(query))
    }
}

/// The matches of a spatial query, in ascending interval order.
pub(crate) enum Query<'a, T, B, V, P> {
    /// Every node in the tree matches.
    All(RefIter<'a, Interval<T, B>, V, SubtreeMax<T>>),
    /// Only nodes accepted by the pruning oracle `P` match.
    Pruned(PruningIter<'a, T, B, V, P>),
}

impl<'a, T, B, V, P> Iterator for Query<'a, T, B, V, P>
where
    P: PruningOracle<T, B>,
{
    type Item = (&'a Interval<T, B>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let v = match self {
            Self::All(iter) => iter.next(),
            Self::Pruned(iter) => iter.next(),
        }?;

        Some((v.key(), v.value()))
    }
}
