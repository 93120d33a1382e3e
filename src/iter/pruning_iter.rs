use crate::{augment::IntervalNode, interval::Interval};

/// The per-query pruning rules driving a [`PruningIter`].
pub(crate) trait PruningOracle<T, B> {
    /// Returns true when the subtree with the given maximum upper bound may
    /// contain a match and should be descended into.
    fn visit_subtree(&self, subtree_max: &T) -> bool;

    /// Returns true when the node holding `n` and its right subtree should be
    /// evaluated.
    ///
    /// All intervals in the right subtree have a lower bound greater than or
    /// equal to that of `n`. When this returns false, `n` itself must not
    /// satisfy [`PruningOracle::filter_yield()`].
    fn visit_right(&self, n: &Interval<T, B>) -> bool;

    /// Returns true if `n` satisfies the query and should be yielded to the
    /// caller.
    fn filter_yield(&self, n: &Interval<T, B>) -> bool;
}

/// An [`Iterator`] that performs a depth-first, in-order walk of a subtree and
/// yields nodes that match a pruning predicate, in ascending interval order.
#[derive(Debug)]
pub(crate) struct PruningIter<'a, T, B, V, P> {
    stack: Vec<&'a IntervalNode<T, B, V>>,
    pruner: P,
}

impl<'a, T, B, V, P> PruningIter<'a, T, B, V, P>
where
    P: PruningOracle<T, B>,
{
    pub(crate) fn new(root: Option<&'a IntervalNode<T, B, V>>, pruner: P) -> Self {
        let mut this = Self {
            stack: vec![],
            pruner,
        };

        // Descend down the left side of the tree, pushing all the internal
        // nodes onto the stack until the left-most leaf is reached.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a IntervalNode<T, B, V>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            if !self.pruner.visit_subtree(v.aug().get()) {
                // Prune this subtree rooted at "v" from the search.
                //
                // No interval in this subtree has an upper bound that can
                // satisfy the query.
                break;
            }

            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, T, B, V, P> Iterator for PruningIter<'a, T, B, V, P>
where
    P: PruningOracle<T, B>,
{
    type Item = &'a IntervalNode<T, B, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = self.stack.pop()?;

            if !self.pruner.visit_right(v.key()) {
                // Prune this node and the right subtree from the search.
                continue;
            }

            // Push the right subtree to be visited next.
            if let Some(right) = v.right() {
                self.push_subtree(right);
            }

            // Yield this node if it satisfies the pruning predicate.
            if self.pruner.filter_yield(v.key()) {
                return Some(v);
            }
        }
    }
}
