use crate::node::Node;

/// An in-order iterator of [`Node`] references, yielding nodes in ascending
/// key order.
#[derive(Debug)]
pub(crate) struct RefIter<'a, K, V, A> {
    stack: Vec<&'a Node<K, V, A>>,
}

impl<'a, K, V, A> RefIter<'a, K, V, A> {
    pub(crate) fn new(root: Option<&'a Node<K, V, A>>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<K, V, A>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, K, V, A> Iterator for RefIter<'a, K, V, A> {
    type Item = &'a Node<K, V, A>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        Some(v)
    }
}
