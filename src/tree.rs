//! [`IntervalTree`] and its iterators.

use std::collections::BTreeSet;

use crate::{
    augment::SubtreeMax,
    base::TreeBase,
    error::Error,
    interval::{Boundary, HalfOpen, Interval},
    iter::{OwnedIter, RefIter},
};

/// An [`IntervalTree`] stores a set of [`Interval`], enabling efficient
/// lookup of the intervals containing a point, containing an interval,
/// overlapping an interval, or contained by an interval.
///
/// The boundary mode `B` ([`Closed`] or [`HalfOpen`]) is fixed for the whole
/// tree and decides point containment and overlap semantics.
///
/// # Read Optimised
///
/// This [`IntervalTree`] is backed by an augmented AVL tree, and is optimised
/// for read / search performance.
///
/// The internal tree structure is modified during inserts and removals to
/// ensure the tree always remains balanced. Each node records the maximum
/// upper bound of its subtree, which is recomputed for every node touched by
/// an insert, removal or rotation, allowing queries to prune whole subtrees
/// that cannot hold a match.
///
/// ## `T: Clone`
///
/// The subtree maximum is a copy of an upper bound, requiring `T` to
/// implement [`Clone`] which may be invoked during insert and remove
/// operations. Spatial queries return owned copies of the matching
/// intervals.
///
/// [`Closed`]: crate::Closed
#[derive(Debug, Clone)]
pub struct IntervalTree<T, B = HalfOpen>(TreeBase<T, B, ()>);

impl<T, B> Default for IntervalTree<T, B> {
    fn default() -> Self {
        Self(TreeBase::default())
    }
}

impl<T, B> IntervalTree<T, B> {
    /// Construct an empty [`IntervalTree`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of intervals stored in the tree.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the tree contains no intervals.
    pub fn is_empty(&self) -> bool {
        self.0.len() == 0
    }

    /// The number of levels in the tree; 0 when empty.
    pub fn height(&self) -> usize {
        self.0.height()
    }

    /// The greatest upper bound of any interval in the tree, if any.
    pub fn span_max(&self) -> Option<&T> {
        self.0.span_max()
    }

    /// Remove all intervals from the tree.
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Iterate over references of all intervals stored in this tree.
    ///
    /// # Ordering
    ///
    /// The returned [`Iterator`] yields intervals from lowest to highest
    /// ordered by the lower bound, with ties broken by the upper bound.
    pub fn iter(&self) -> Iter<'_, T, B> {
        Iter(RefIter::new(self.0.root()))
    }

    #[cfg(test)]
    pub(crate) fn base(&self) -> &TreeBase<T, B, ()> {
        &self.0
    }
}

impl<T, B> IntervalTree<T, B>
where
    T: Ord + Clone,
    B: Boundary,
{
    /// Insert `interval` into the tree.
    ///
    /// Returns false if an equal interval was already present, leaving the
    /// tree unchanged.
    pub fn insert(&mut self, interval: Interval<T, B>) -> bool {
        self.0.insert(interval, ()).is_none()
    }

    /// Returns true if the tree contains exactly `interval`.
    pub fn contains(&self, interval: &Interval<T, B>) -> bool {
        self.0.contains(interval)
    }

    /// Return a reference to the stored interval equal to `interval`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `interval` is not in the tree.
    pub fn get(&self, interval: &Interval<T, B>) -> Result<&Interval<T, B>, Error> {
        self.0
            .get(interval)
            .map(|v| v.key())
            .ok_or(Error::KeyNotFound)
    }

    /// Remove `interval` from the tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `interval` is not in the tree, in
    /// which case the tree is not modified.
    pub fn remove(&mut self, interval: &Interval<T, B>) -> Result<(), Error> {
        match self.0.remove(interval) {
            Some(()) => Ok(()),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(len = self.len(), "remove of absent interval");
                Err(Error::KeyNotFound)
            }
        }
    }

    /// Return a copy of all stored intervals in ascending order.
    pub fn to_vec(&self) -> Vec<Interval<T, B>> {
        self.iter().cloned().collect()
    }

    /// Return all intervals that contain `point`.
    pub fn containing_point(&self, point: &T) -> BTreeSet<Interval<T, B>> {
        self.0.containing_point(point).map(|(k, _)| k.clone()).collect()
    }

    /// Return all intervals that are a superset of `query`.
    pub fn containing_interval(&self, query: &Interval<T, B>) -> BTreeSet<Interval<T, B>> {
        self.0
            .containing_interval(query)
            .map(|(k, _)| k.clone())
            .collect()
    }

    /// Return all intervals that overlap `query`.
    pub fn overlapping_interval(&self, query: &Interval<T, B>) -> BTreeSet<Interval<T, B>> {
        self.0
            .overlapping_interval(query)
            .map(|(k, _)| k.clone())
            .collect()
    }

    /// Return all intervals that are a subset of `query`.
    pub fn contained_by_interval(&self, query: &Interval<T, B>) -> BTreeSet<Interval<T, B>> {
        self.0
            .contained_by_interval(query)
            .map(|(k, _)| k.clone())
            .collect()
    }

    /// Insert `interval`, merging it with every stored interval it overlaps.
    ///
    /// All overlapping intervals are removed and replaced by a single
    /// interval covering them and `interval`, which is returned.
    pub fn insert_overlap(&mut self, interval: Interval<T, B>) -> Interval<T, B> {
        let overlaps = self.overlapping_interval(&interval);

        #[cfg(feature = "tracing")]
        let absorbed = overlaps.len();

        let merged = overlaps.into_iter().fold(interval, |acc, v| {
            let joined = acc.join(&v);
            let removed = self.0.remove(&v);
            debug_assert!(removed.is_some());
            joined
        });

        #[cfg(feature = "tracing")]
        tracing::trace!(absorbed, "inserted merged interval");

        self.insert(merged.clone());
        merged
    }

    /// Return a new tree containing the minimal set of non-overlapping
    /// intervals covering the same points as this tree.
    ///
    /// This tree is not modified.
    pub fn deoverlap(&self) -> Self {
        let mut out = Self::new();
        for v in self.to_vec() {
            out.insert_overlap(v);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            n_input = self.len(),
            n_output = out.len(),
            "deoverlapped interval tree"
        );

        out
    }
}

impl<T, B> FromIterator<Interval<T, B>> for IntervalTree<T, B>
where
    T: Ord + Clone,
    B: Boundary,
{
    fn from_iter<I: IntoIterator<Item = Interval<T, B>>>(iter: I) -> Self {
        let mut t = Self::new();
        t.extend(iter);
        t
    }
}

impl<T, B> Extend<Interval<T, B>> for IntervalTree<T, B>
where
    T: Ord + Clone,
    B: Boundary,
{
    fn extend<I: IntoIterator<Item = Interval<T, B>>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T, B> From<Vec<Interval<T, B>>> for IntervalTree<T, B>
where
    T: Ord + Clone,
    B: Boundary,
{
    fn from(value: Vec<Interval<T, B>>) -> Self {
        value.into_iter().collect()
    }
}

/// An owning iterator over the intervals of an [`IntervalTree`], in
/// ascending order.
#[derive(Debug)]
pub struct IntoIter<T, B>(OwnedIter<T, B, ()>);

impl<T, B> Iterator for IntoIter<T, B> {
    type Item = Interval<T, B>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }
}

impl<T, B> IntoIterator for IntervalTree<T, B> {
    type Item = Interval<T, B>;
    type IntoIter = IntoIter<T, B>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.0.into_owned_iter())
    }
}

/// An iterator over references to the intervals of an [`IntervalTree`], in
/// ascending order.
#[derive(Debug)]
pub struct Iter<'a, T, B>(RefIter<'a, Interval<T, B>, (), SubtreeMax<T>>);

impl<'a, T, B> Iterator for Iter<'a, T, B> {
    type Item = &'a Interval<T, B>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|v| v.key())
    }
}

impl<'a, T, B> IntoIterator for &'a IntervalTree<T, B> {
    type Item = &'a Interval<T, B>;
    type IntoIter = Iter<'a, T, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
