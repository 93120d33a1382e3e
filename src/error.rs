use thiserror::Error;

/// Errors returned by exact-key operations on an
/// [`IntervalTree`](crate::IntervalTree) or
/// [`IntervalMap`](crate::IntervalMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested interval is not stored in the tree.
    #[error("interval not found in tree")]
    KeyNotFound,
}
