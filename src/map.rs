//! [`IntervalMap`] and its iterators.

use std::ops::Index;

use crate::{
    augment::SubtreeMax,
    base::TreeBase,
    entry::Entry,
    error::Error,
    interval::{Boundary, HalfOpen, Interval},
    iter::{OwnedIter, RefIter},
};

/// An [`IntervalMap`] stores `(interval, value)` tuple mappings, enabling
/// efficient lookup of the values whose intervals contain a point, contain an
/// interval, overlap an interval, or are contained by an interval.
///
/// It shares the augmented AVL tree of [`IntervalTree`], with each node
/// carrying a `V` alongside its interval key.
///
/// [`IntervalTree`]: crate::IntervalTree
#[derive(Debug, Clone)]
pub struct IntervalMap<T, V, B = HalfOpen>(TreeBase<T, B, V>);

impl<T, V, B> Default for IntervalMap<T, V, B> {
    fn default() -> Self {
        Self(TreeBase::default())
    }
}

impl<T, V, B> IntervalMap<T, V, B> {
    /// Construct an empty [`IntervalMap`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries in the map.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.0.len() == 0
    }

    /// The number of levels in the underlying tree; 0 when empty.
    pub fn height(&self) -> usize {
        self.0.height()
    }

    /// The greatest upper bound of any interval in the map, if any.
    pub fn span_max(&self) -> Option<&T> {
        self.0.span_max()
    }

    /// Remove all entries from the map.
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Iterate over references of all `(interval, value)` tuples stored in
    /// this map, in ascending interval order.
    pub fn iter(&self) -> Iter<'_, T, V, B> {
        Iter(RefIter::new(self.0.root()))
    }

    #[cfg(test)]
    pub(crate) fn base(&self) -> &TreeBase<T, B, V> {
        &self.0
    }
}

impl<T, V, B> IntervalMap<T, V, B>
where
    T: Ord + Clone,
    B: Boundary,
{
    /// Insert an `(interval, value)` tuple into the map.
    ///
    /// If the interval already existed in the map, [`Some`] is returned with
    /// the old value.
    pub fn insert(&mut self, interval: Interval<T, B>, value: V) -> Option<V> {
        self.0.insert(interval, value)
    }

    /// Return a reference to the value associated with `interval`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `interval` is not in the map.
    pub fn get(&self, interval: &Interval<T, B>) -> Result<&V, Error> {
        self.0
            .get(interval)
            .map(|v| v.value())
            .ok_or(Error::KeyNotFound)
    }

    /// Return a mutable reference to the value associated with `interval`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `interval` is not in the map.
    pub fn get_mut(&mut self, interval: &Interval<T, B>) -> Result<&mut V, Error> {
        self.0.get_mut(interval).ok_or(Error::KeyNotFound)
    }

    /// Returns true if the map contains a value for exactly `interval`.
    pub fn has_interval(&self, interval: &Interval<T, B>) -> bool {
        self.0.contains(interval)
    }

    /// Remove `interval` and its value from the map, returning the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `interval` is not in the map, in
    /// which case the map is not modified.
    pub fn remove(&mut self, interval: &Interval<T, B>) -> Result<V, Error> {
        self.0.remove(interval).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(len = self.0.len(), "remove of absent interval");
            Error::KeyNotFound
        })
    }

    /// Return a mutable reference to the value for `interval`, inserting
    /// [`V::default()`](Default::default) first if it is absent.
    pub fn get_or_insert_default(&mut self, interval: Interval<T, B>) -> &mut V
    where
        V: Default,
    {
        self.entry(interval).or_default()
    }

    /// Get the [`Entry`] for `interval` for in-place manipulation.
    pub fn entry(&mut self, interval: Interval<T, B>) -> Entry<'_, T, V, B> {
        Entry::new(interval, self)
    }

    /// Return a copy of all stored `(interval, value)` tuples in ascending
    /// interval order.
    pub fn to_vec(&self) -> Vec<(Interval<T, B>, V)>
    where
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Return all `(interval, value)` tuples with intervals containing
    /// `point`.
    pub fn containing_point<'a>(
        &'a self,
        point: &'a T,
    ) -> impl Iterator<Item = (&'a Interval<T, B>, &'a V)> + 'a {
        self.0.containing_point(point)
    }

    /// Return all `(interval, value)` tuples with intervals that are a
    /// superset of `query`.
    pub fn containing_interval<'a>(
        &'a self,
        query: &'a Interval<T, B>,
    ) -> impl Iterator<Item = (&'a Interval<T, B>, &'a V)> + 'a {
        self.0.containing_interval(query)
    }

    /// Return all `(interval, value)` tuples with intervals that overlap
    /// `query`.
    pub fn overlapping_interval<'a>(
        &'a self,
        query: &'a Interval<T, B>,
    ) -> impl Iterator<Item = (&'a Interval<T, B>, &'a V)> + 'a {
        self.0.overlapping_interval(query)
    }

    /// Return all `(interval, value)` tuples with intervals that are a subset
    /// of `query`.
    pub fn contained_by_interval<'a>(
        &'a self,
        query: &'a Interval<T, B>,
    ) -> impl Iterator<Item = (&'a Interval<T, B>, &'a V)> + 'a {
        self.0.contained_by_interval(query)
    }
}

impl<T, V, B> Index<&Interval<T, B>> for IntervalMap<T, V, B>
where
    T: Ord + Clone,
    B: Boundary,
{
    type Output = V;

    /// Returns a reference to the value for `interval`.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is not in the map.
    fn index(&self, interval: &Interval<T, B>) -> &Self::Output {
        match self.get(interval) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T, V, B> FromIterator<(Interval<T, B>, V)> for IntervalMap<T, V, B>
where
    T: Ord + Clone,
    B: Boundary,
{
    fn from_iter<I: IntoIterator<Item = (Interval<T, B>, V)>>(iter: I) -> Self {
        let mut t = Self::new();
        t.extend(iter);
        t
    }
}

impl<T, V, B> Extend<(Interval<T, B>, V)> for IntervalMap<T, V, B>
where
    T: Ord + Clone,
    B: Boundary,
{
    fn extend<I: IntoIterator<Item = (Interval<T, B>, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<T, V, B> From<Vec<(Interval<T, B>, V)>> for IntervalMap<T, V, B>
where
    T: Ord + Clone,
    B: Boundary,
{
    fn from(value: Vec<(Interval<T, B>, V)>) -> Self {
        value.into_iter().collect()
    }
}

/// An iterator over the `(interval, value)` tuples of an [`IntervalMap`], in
/// ascending interval order.
#[derive(Debug)]
pub struct Iter<'a, T, V, B>(RefIter<'a, Interval<T, B>, V, SubtreeMax<T>>);

impl<'a, T, V, B> Iterator for Iter<'a, T, V, B> {
    type Item = (&'a Interval<T, B>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|v| (v.key(), v.value()))
    }
}

impl<'a, T, V, B> IntoIterator for &'a IntervalMap<T, V, B> {
    type Item = (&'a Interval<T, B>, &'a V);
    type IntoIter = Iter<'a, T, V, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator over the `(interval, value)` tuples of an
/// [`IntervalMap`], in ascending interval order.
#[derive(Debug)]
pub struct IntoIter<T, V, B>(OwnedIter<T, B, V>);

impl<T, V, B> Iterator for IntoIter<T, V, B> {
    type Item = (Interval<T, B>, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl<T, V, B> IntoIterator for IntervalMap<T, V, B> {
    type Item = (Interval<T, B>, V);
    type IntoIter = IntoIter<T, V, B>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.0.into_owned_iter())
    }
}
