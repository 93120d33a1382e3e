//! An augmented AVL interval tree.
//!
//! [`IntervalTree`] stores a set of [`Interval`] and [`IntervalMap`] maps each
//! stored [`Interval`] to a value. Both answer four spatial queries by pruning
//! whole subtrees using the maximum upper bound recorded at every node:
//!
//! * [`containing_point`](IntervalTree::containing_point): intervals
//!   containing a point.
//! * [`containing_interval`](IntervalTree::containing_interval): intervals
//!   that are a superset of the query.
//! * [`overlapping_interval`](IntervalTree::overlapping_interval): intervals
//!   sharing at least one point with the query.
//! * [`contained_by_interval`](IntervalTree::contained_by_interval):
//!   intervals that are a subset of the query.
//!
//! The tree additionally supports merging overlapping intervals on insert
//! ([`IntervalTree::insert_overlap()`]) and producing a fully merged copy
//! ([`IntervalTree::deoverlap()`]).
//!
//! Each tree is fixed to one boundary mode at the type level: [`HalfOpen`]
//! (`[low, high)`, the default) or [`Closed`] (`[low, high]`).
//!
//! ```
//! use interval_avl::{Closed, Interval, IntervalTree};
//!
//! let mut t = IntervalTree::<u32, Closed>::new();
//! t.insert(Interval::new(0, 5));
//! t.insert(Interval::new(5, 10));
//! t.insert(Interval::new(20, 30));
//!
//! // Closed intervals sharing an endpoint overlap.
//! let got = t.containing_point(&5);
//! assert_eq!(got.len(), 2);
//!
//! let merged = t.deoverlap();
//! assert_eq!(
//!     merged.to_vec(),
//!     [Interval::<u32, Closed>::new(0, 10), Interval::new(20, 30)]
//! );
//! ```
//!
//! # Features
//!
//! * `serde`: [`Interval`], [`IntervalTree`] and [`IntervalMap`] implement
//!   `Serialize` and `Deserialize`.
//! * `tracing`: emit [`tracing`](https://docs.rs/tracing) events for
//!   interval merges and failed removals.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod augment;
mod base;
mod entry;
mod error;
mod interval;
mod iter;
pub mod map;
mod node;
pub mod tree;

#[cfg(feature = "serde")]
mod serde_impls;

#[cfg(test)]
mod test_utils;

pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use error::Error;
pub use interval::{Boundary, Closed, HalfOpen, Interval};
pub use map::IntervalMap;
pub use tree::IntervalTree;
