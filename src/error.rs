//! Error types returned by fallible [`Tree`](crate::Tree) operations.

use thiserror::Error;

/// The ways a tree operation can fail.
///
/// Note that not every miss is an error: [`contains`](crate::Tree::contains)
/// reports a missing element as `false` and [`depth`](crate::Tree::depth)
/// reports it as `-1`, while [`get`](crate::Tree::get) and
/// [`remove`](crate::Tree::remove) fail with [`NotFound`](Self::NotFound).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// An element was required but absent. Only bulk construction from
    /// optional slots can observe this - the single-element operations take
    /// their element by value or reference, so absence is unrepresentable.
    #[error("required element is absent")]
    InvalidArgument,

    /// No element in the tree compared equal to the one given.
    #[error("element not found in tree")]
    NotFound,
}
