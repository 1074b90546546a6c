//! Binary hash trees over ordered content identifiers.
//!
//! A [`Tree`] is built bottom-up from an ordered list of identifiers, each of
//! which is assumed to already be a digest of some external payload. Leaves
//! keep the identifier verbatim; every internal node carries the SHA-256 of
//! its children's hashes concatenated left to right.
//!
//! Two trees built from sequences of the same length can be handed to
//! [`compare`], which walks both in lockstep and reports every pair of hashes
//! that differ along a divergent path, skipping subtrees whose hashes match.
//!
//! ## Core Concepts
//!
//! - **Node**: a leaf (no children) or an internal node (exactly two children)
//! - **Tree**: the root node plus the identifier→payload entries it was built from
//! - **Mismatch**: one pair of differing hashes found by [`compare`]
//!
//! ```
//! use hashtree::{compare, Tree};
//!
//! let before = Tree::build(["a", "b", "c", "d"])?;
//! let after = Tree::build(["a", "b", "c", "x"])?;
//!
//! let mismatches = compare(&before, &after)?;
//! let leaves: Vec<_> = mismatches.iter().filter(|m| m.is_leaf()).map(|m| m.pair()).collect();
//! assert_eq!(leaves, [("d", "x")]);
//! # Ok::<(), hashtree::TreeError>(())
//! ```

#![forbid(unreachable_pub, unsafe_code)]
#![deny(
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::panic,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]
#![warn(missing_docs, clippy::map_err_ignore, clippy::use_debug)]
//	Lints specifically disabled for unit tests
#![cfg_attr(
    test,
    allow(
        clippy::arithmetic_side_effects,
        clippy::default_numeric_fallback,
        clippy::expect_used,
        clippy::indexing_slicing,
        clippy::missing_assert_message,
        clippy::panic,
        clippy::unwrap_in_result,
        clippy::unwrap_used,
        reason = "Not useful in unit tests"
    )
)]

pub mod diff;
pub mod digest;
pub mod error;
pub mod levels;
pub mod node;
pub mod tree;

pub use diff::{compare, Mismatch, MismatchKind};
pub use digest::{digest, DIGEST_HEX_LEN};
pub use error::TreeError;
pub use levels::{LevelOrder, Levels};
pub use node::Node;
pub use tree::Tree;
