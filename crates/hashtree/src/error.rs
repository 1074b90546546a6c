//! Errors returned by tree construction and comparison.

use thiserror::Error;

/// Marker used in errors in place of a hash when a tree has no root.
pub const EMPTY_TREE: &str = "<empty>";

/// Errors produced while building or comparing trees.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TreeError {
    /// No identifiers were supplied, so no root hash can be defined.
    #[error("cannot build a tree from an empty identifier sequence")]
    InvalidInput,

    /// The compared trees do not have the same shape.
    ///
    /// Raised as soon as a differing pair is found where one side is a leaf
    /// and the other an internal node, or when only one tree is empty.
    #[error("tree shapes diverge at depth {depth}: local `{local}`, remote `{remote}`")]
    ShapeMismatch {
        /// Depth of the offending pair (the root is at depth 0)
        depth: usize,
        /// Hash of the local node, or [`EMPTY_TREE`]
        local: String,
        /// Hash of the remote node, or [`EMPTY_TREE`]
        remote: String,
    },
}
