use crate::{augment::IntervalNode, interval::Interval};

/// An iterator of owned `(interval, value)` tuples in ascending interval
/// order, consuming the tree.
#[derive(Debug)]
pub(crate) struct OwnedIter<T, B, V> {
    stack: Vec<Box<IntervalNode<T, B, V>>>,
}

impl<T, B, V> OwnedIter<T, B, V> {
    pub(crate) fn new(root: Option<Box<IntervalNode<T, B, V>>>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: Box<IntervalNode<T, B, V>>) {
        let mut ptr = Some(subtree_root);

        while let Some(mut v) = ptr {
            ptr = v.take_left();
            self.stack.push(v);
        }
    }
}

impl<T, B, V> Iterator for OwnedIter<T, B, V> {
    type Item = (Interval<T, B>, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.take_right() {
            self.push_subtree(right);
        }

        Some(v.into_tuple())
    }
}
