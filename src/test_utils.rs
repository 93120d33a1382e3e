use std::fmt::{Debug, Display, Write};

use proptest::prelude::*;

use crate::{
    augment::IntervalNode,
    base::TreeBase,
    interval::{Boundary, Interval},
};

const BOUND_MAX: usize = 20;

/// The largest point generated by [`arbitrary_point()`].
pub(crate) const POINT_MAX: usize = BOUND_MAX + 1;

/// Generate arbitrary (possibly degenerate) intervals with bounds from
/// [0..[`BOUND_MAX`]).
///
/// A small value domain encourages multiple operations to act on the same
/// interval.
pub(crate) fn arbitrary_interval<B>() -> impl Strategy<Value = Interval<usize, B>>
where
    B: Boundary,
{
    (0..BOUND_MAX, 0..BOUND_MAX).prop_map(|(a, b)| Interval::new(a, b))
}

/// Generate an arbitrary point within the interval bound domain, including
/// points just outside it.
pub(crate) fn arbitrary_point() -> impl Strategy<Value = usize> {
    0..=POINT_MAX
}

/// Assert the BST, AVL and interval tree properties of tree nodes, ensuring
/// the tree is well-formed.
pub(crate) fn validate_tree_structure<T, B, V>(t: &TreeBase<T, B, V>)
where
    T: Ord + Debug + Clone,
    B: Boundary,
    V: Debug,
{
    let root = match t.root() {
        Some(v) => v,
        None => {
            assert_eq!(t.len(), 0);
            return;
        }
    };

    let mut n_nodes = 0;

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        n_nodes += 1;

        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        // Invariant 1: the left child always contains a value strictly
        // less than this node.
        assert!(n.left().map(|v| v.key() < n.key()).unwrap_or(true));

        // Invariant 2: the right child always contains a value strictly
        // greater than this node.
        assert!(n.right().map(|v| v.key() > n.key()).unwrap_or(true));

        // Invariant 3: the height of this node is always +1 of the
        // maximum child height.
        let left_height = n.left().map(|v| v.height());
        let right_height = n.right().map(|v| v.height());
        let want_height = left_height
            .max(right_height)
            .map(|v| v + 1) // This node is +1 of the child, if any
            .unwrap_or_default(); // Otherwise it is at height 0

        assert_eq!(
            n.height(),
            want_height,
            "expect node with interval {:?} to have height {}, has {}",
            n.key(),
            want_height,
            n.height(),
        );

        // Invariant 4: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot
        // exceed 1.
        let balance = (left_height.map(|v| v as i64 + 1).unwrap_or_default()
            - right_height.map(|v| v as i64 + 1).unwrap_or_default())
        .abs();
        assert!(balance <= 1, "balance={balance}, node={:?}", n.key());

        // Invariant 5: the subtree max of "n" is the greatest upper bound of
        // all intervals in the subtree, recomputed independently of the
        // stored child metadata.
        let want_max = subtree_intervals(n)
            .into_iter()
            .map(|v| v.high())
            .max()
            .unwrap();
        assert_eq!(want_max, n.aug().get(), "node={:?}", n.key());
    }

    assert_eq!(n_nodes, t.len());
}

fn subtree_intervals<T, B, V>(n: &IntervalNode<T, B, V>) -> Vec<&Interval<T, B>> {
    let mut out = vec![];
    let mut stack = vec![n];
    while let Some(n) = stack.pop() {
        out.push(n.key());
        stack.extend(n.left().iter().chain(n.right().iter()));
    }
    out
}

/// Render the subtree rooted at `n` in Graphviz DOT format, labelling each
/// node with its interval, subtree max and height.
#[allow(unused)]
pub(crate) fn print_dot<T, B, V>(n: &IntervalNode<T, B, V>) -> String
where
    T: Display + Ord,
    B: Boundary,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"bgcolor = "transparent";"#).unwrap();
    writeln!(
        buf,
        r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
    )
    .unwrap();
    recurse(n, &mut buf);
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<T, B, V, W>(n: &IntervalNode<T, B, V>, buf: &mut W)
where
    W: std::fmt::Write,
    T: Display + Ord,
    B: Boundary,
{
    writeln!(
        buf,
        r#""{}" [label="{} | {{ max={} | h={} }}"];"#,
        n.key(),
        n.key(),
        n.aug().get(),
        n.height(),
    )
    .unwrap();

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(
                    buf,
                    "\"{}\" -> \"{}\" [color = \"orange1\";];",
                    n.key(),
                    v.key()
                )
                .unwrap();
                recurse(v, buf);
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", n.key()).unwrap();
                writeln!(
                    buf,
                    "\"{}\" -> \"null_{}\" [style=invis];",
                    n.key(),
                    n.key()
                )
                .unwrap();
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::HalfOpen;

    #[test]
    fn test_print_dot() {
        let mut t = TreeBase::<usize, HalfOpen, ()>::default();
        for (low, high) in [(20, 36), (3, 41), (29, 99)] {
            t.insert(Interval::new(low, high), ());
        }

        let got = print_dot(t.root().unwrap());

        assert!(got.starts_with("digraph {"));
        assert!(got.contains(r#""[20, 36)" [label="[20, 36) | { max=99 | h=1 }"];"#));
        assert!(got.contains(r#""[20, 36)" -> "[3, 41)""#));
        assert!(got.contains(r#""[20, 36)" -> "[29, 99)""#));
    }
}
