use crate::{interval::Interval, node::Node};

/// Derived per-node metadata maintained by the tree engine.
///
/// The engine calls [`Augment::recompute()`] on every node whose subtree was
/// modified: each node on an insert or remove path, and both nodes involved
/// in a rotation (the demoted node first, then its replacement). This is the
/// only hook; implementations never need to special-case removal.
pub(crate) trait Augment<K>: Sized {
    /// The metadata for a node holding `key` with no children.
    fn leaf(key: &K) -> Self;

    /// Derive the metadata for a node holding `key` from the metadata of its
    /// children, if any.
    fn recompute(key: &K, left: Option<&Self>, right: Option<&Self>) -> Self;
}

/// The maximum upper bound of all intervals in the subtree rooted at a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SubtreeMax<T>(T);

impl<T> SubtreeMax<T> {
    pub(crate) fn get(&self) -> &T {
        &self.0
    }
}

impl<T, B> Augment<Interval<T, B>> for SubtreeMax<T>
where
    T: Ord + Clone,
{
    fn leaf(key: &Interval<T, B>) -> Self {
        Self(key.high().clone())
    }

    fn recompute(key: &Interval<T, B>, left: Option<&Self>, right: Option<&Self>) -> Self {
        let max = [left, right]
            .into_iter()
            .flatten()
            .map(|v| &v.0)
            .fold(key.high(), Ord::max);

        Self(max.clone())
    }
}

/// A tree node keyed by an [`Interval`], augmented with the [`SubtreeMax`] of
/// upper bounds.
pub(crate) type IntervalNode<T, B, V> = Node<Interval<T, B>, V, SubtreeMax<T>>;
