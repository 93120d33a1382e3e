use std::cmp::Ordering;

use crate::augment::Augment;

#[derive(Debug)]
pub(super) enum RemoveResult<V> {
    /// The value was removed from the tree.
    Removed(V),

    /// The direct descendent node contains the value, but contains no children
    /// and must be unlinked by the parent.
    ParentUnlink,
}

/// A node in an AVL tree ordered by `K`, holding a payload `V` and augmented
/// with the derived subtree metadata `A`.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V, A> {
    /// Child nodes pointers.
    left: Option<Box<Node<K, V, A>>>,
    right: Option<Box<Node<K, V, A>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    /// Metadata derived from this node and its subtree.
    aug: A,

    key: K,
    value: V,
}

impl<K, V, A> Node<K, V, A>
where
    A: Augment<K>,
{
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            aug: A::leaf(&key),
            key,
            value,
            left: None,
            right: None,
            height: 0,
        }
    }
}

impl<K, V, A> Node<K, V, A>
where
    K: Ord,
    A: Augment<K>,
{
    /// Insert `value` under `key` in the subtree rooted at `self`.
    ///
    /// If `key` already exists, the value is replaced and the old value
    /// returned, leaving the tree structure unchanged.
    pub(crate) fn insert(self: &mut Box<Self>, key: K, value: V) -> Option<V> {
        let child = match key.cmp(&self.key) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => {
                return Some(std::mem::replace(&mut self.value, value));
            }
            Ordering::Greater => &mut self.right,
        };

        let inserted = match child {
            Some(v) => v.insert(key, value),
            None => {
                // Insert the value as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(key, value)));

                // Inserting this new child node cannot skew the tree in the
                // direction of the new addition such that it requires the tree
                // be rebalanced as, at most, it creates an absolute difference
                // of 1 in this direction (from balanced, or slightly skewed in
                // the opposite direction).
                //
                // Update this node and skip the rebalancing checks.
                update(self);
                return None;
            }
        };

        if inserted.is_some() {
            // The tree structure has not been modified, so it does not require
            // rebalancing.
            return inserted;
        }

        // Refresh the height and metadata of this node now that the child
        // subtree has changed, before any rotation reads them.
        update(self);

        // Determine the balance factor of the subtree rooted at self and
        // correct it if the absolute difference in height between branches is
        // > 1.
        match (balance(self), self.left(), self.right()) {
            // Left-heavy
            (2, Some(l), _) if balance(l) >= 0 => {
                rotate_right(self);
            }
            (2, Some(_l), _) => {
                self.left.as_mut().map(rotate_left);
                rotate_right(self);
            }
            // Right-heavy
            (-2, _, Some(r)) if balance(r) <= 0 => {
                rotate_left(self);
            }
            (-2, _, Some(_r)) => {
                self.right.as_mut().map(rotate_right);
                rotate_left(self);
            }
            (-1..=1, _, _) => { /* The tree is well balanced */ }
            _ => unreachable!(),
        };

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(balance(self).abs() <= 1);

        None
    }

    /// Remove `key` from the subtree rooted at `self`.
    ///
    /// Must be driven by [`remove_recurse()`], which rebalances `self` and
    /// unlinks childless nodes.
    pub(super) fn remove(self: &mut Box<Self>, key: &K) -> Option<RemoveResult<V>> {
        // Recurse down the subtree rooted at `self`.
        //
        // If the value is not found, or successfully removed, the result is
        // returned. If the direct descendent node contains the value and no
        // children, it returns [`RemoveResult::ParentUnlink`] and the node is
        // unlinked here in the parent before returning the result to the
        // caller.
        match self.key.cmp(key) {
            Ordering::Greater => return remove_recurse(&mut self.left, key),
            Ordering::Less => return remove_recurse(&mut self.right, key),
            Ordering::Equal => { /* This node holds the value to remove */ }
        };

        // This node may have 0, 1 or 2 child node(s):
        //
        //                          +----------+
        //                          |  parent  |
        //                          +----------+
        //                                |
        //                                v
        //                          +----------+
        //                     +----|   self   |----+
        //                     |    +----------+    |
        //                     |                    |
        //                     v                    v
        //               +-----------+       +------------+
        //               | self.left |       | self.right |
        //               +-----------+       +------------+
        //
        // The in-order successor of "self" (the minimum of "self.right") moves
        // to replace it, with "self.left" moving up if there is no right
        // subtree.
        let old = if let Some(mut right) = self.right.take() {
            debug_assert_ne!(self.height, 0);

            match extract_subtree_min(&mut right) {
                Some(mut min) => {
                    // The extracted minimum has no left pointer as it is the
                    // left-most node in the subtree, and its right subtree
                    // was relinked to its old parent during extraction.
                    debug_assert!(min.left.is_none());
                    debug_assert!(min.right.is_none());

                    min.left = self.left.take();
                    min.right = Some(right);

                    std::mem::replace(self, min)
                }

                None => {
                    // "right" has no left child and is itself the successor.
                    debug_assert!(right.left.is_none());

                    right.left = self.left.take();
                    std::mem::replace(self, right)
                }
            }
        } else if let Some(left) = self.left.take() {
            // With only a left child, it replaces "self" directly.
            debug_assert!(self.right.is_none());
            debug_assert_ne!(self.height, 0);

            std::mem::replace(self, left)
        } else {
            debug_assert_eq!(self.height, 0);

            // Parent will unlink this "self" node.
            return Some(RemoveResult::ParentUnlink);
        };

        // Invariant: the node being unlinked contains no subtree.
        debug_assert!(old.right.is_none());
        debug_assert!(old.left.is_none());
        debug_assert!(old.key == *key);

        Some(RemoveResult::Removed(old.value))
    }

    pub(crate) fn get(&self, key: &K) -> Option<&Self> {
        let mut ptr = Some(self);
        while let Some(n) = ptr {
            ptr = match n.key.cmp(key) {
                Ordering::Greater => n.left(),
                Ordering::Equal => return Some(n),
                Ordering::Less => n.right(),
            };
        }
        None
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.key.cmp(key) {
            Ordering::Greater => self.left.as_mut()?.get_mut(key),
            Ordering::Equal => Some(&mut self.value),
            Ordering::Less => self.right.as_mut()?.get_mut(key),
        }
    }
}

impl<K, V, A> Node<K, V, A> {
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn aug(&self) -> &A {
        &self.aug
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// The left-most (minimum) node of the subtree rooted at `self`.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut n = self;
        while let Some(l) = n.left() {
            n = l;
        }
        n
    }

    /// Explode this [`Node`] into the key and value it contains.
    pub(crate) fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// The number of levels in the subtree rooted at `n`, distinguishing a leaf
/// (1) from an absent child (0).
fn levels<K, V, A>(n: Option<&Node<K, V, A>>) -> i16 {
    n.map(|v| i16::from(v.height()) + 1).unwrap_or_default()
}

/// Recompute the height and derived metadata of `n` from its children.
///
/// The children must already be up-to-date.
fn update<K, V, A>(n: &mut Node<K, V, A>)
where
    A: Augment<K>,
{
    n.height = n
        .left()
        .map(|v| v.height() + 1)
        .max(n.right().map(|v| v.height() + 1))
        .unwrap_or_default();

    n.aug = A::recompute(&n.key, n.left().map(|v| &v.aug), n.right().map(|v| &v.aug));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
fn balance<K, V, A>(n: &Node<K, V, A>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which (plus one)
    // fits in an i16 without truncation or sign inversion.
    (levels(n.left()) - levels(n.right())) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// Both `x` and `P` are updated before returning, `x` first as it becomes a
/// child of `P`.
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<K, V, A>(x: &mut Box<Node<K, V, A>>)
where
    A: Augment<K>,
{
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update(&mut p);

    x.left = Some(p);
    update(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// Both `y` and `P` are updated before returning, `y` first as it becomes a
/// child of `P`.
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<K, V, A>(y: &mut Box<Node<K, V, A>>)
where
    A: Augment<K>,
{
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update(&mut p);

    y.right = Some(p);
    update(y);
}

/// Extracts the node holding the minimum subtree value in a descendent of
/// `root`, if any, linking the right subtree of the extracted node to in its
/// place.
fn extract_subtree_min<K, V, A>(root: &mut Box<Node<K, V, A>>) -> Option<Box<Node<K, V, A>>>
where
    A: Augment<K>,
{
    // Descend left to the leaf.
    let v = match extract_subtree_min(root.left.as_mut()?) {
        Some(v) => Some(v),
        None => {
            // The left child is the end of the left edge.
            //
            // ```text
            //                 6
            //                / \
            //    here ->   <4>   7
            //              / \
            //             2   5
            //              \
            //               3
            // ```
            //
            // Unlink the right node of the left root, which will become the new
            // left node of "root" (if any).
            let left_right = root.left.as_mut().and_then(|v| v.right.take());

            std::mem::replace(&mut root.left, left_right)
        }
    };

    rebalance_after_remove(root);
    debug_assert!(balance(root).abs() <= 1);
    v
}

/// Recurse into `node`, calling [`Node::remove()`] to remove the provided
/// `key` from the subtree rooted at `node`, if it exists.
///
/// Returns [`None`] if the key is not found, in which case the tree is left
/// untouched.
///
/// Clears the `node` pointer if the [`Node::remove()`] call returns
/// [`RemoveResult::ParentUnlink`], returning the extracted value within a
/// [`RemoveResult::Removed`] variant.
pub(super) fn remove_recurse<K, V, A>(
    node: &mut Option<Box<Node<K, V, A>>>,
    key: &K,
) -> Option<RemoveResult<V>>
where
    K: Ord,
    A: Augment<K>,
{
    // Remove the value (if any) and rebalance the tree.
    let remove_ret = node.as_mut().and_then(|v| {
        let ret = v.remove(key)?;
        rebalance_after_remove(v);
        Some(ret)
    })?;

    let v = match remove_ret {
        RemoveResult::Removed(v) => v,
        RemoveResult::ParentUnlink => {
            let node = node.take()?;
            debug_assert!(node.key == *key);

            node.value
        }
    };

    Some(RemoveResult::Removed(v))
}

fn rebalance_after_remove<K, V, A>(v: &mut Box<Node<K, V, A>>)
where
    A: Augment<K>,
{
    // Recompute the height and metadata of the relocated node.
    update(v);

    // And rebalance the subtree.
    match balance(v) {
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(v);
        }
        (2..) => {
            v.left.as_mut().map(rotate_left);
            rotate_right(v);
        }
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(v);
        }
        (..=-2) => {
            v.right.as_mut().map(rotate_right);
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a value.
    debug_assert!(balance(v).abs() <= 1);
}
