//! Lockstep comparison of two hash trees.

#[cfg(test)]
#[path = "tests/diff.rs"]
mod tests;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{TreeError, EMPTY_TREE};
use crate::node::Node;
use crate::tree::Tree;

/// Whether a mismatching pair sits inside the trees or at the leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    /// Both nodes are internal; their subtrees were descended into.
    Internal,
    /// Both nodes are leaves; the hashes are the differing identifiers.
    Leaf,
}

/// One pair of differing node hashes at the same position in both trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Mismatch<'a> {
    /// Depth of the pair (the root is at depth 0)
    pub depth: usize,
    /// Whether the pair is internal or at the leaves
    pub kind: MismatchKind,
    /// Hash in the local (first) tree
    pub local: &'a str,
    /// Hash in the remote (second) tree
    pub remote: &'a str,
}

impl<'a> Mismatch<'a> {
    /// The `(local, remote)` hash pair.
    #[must_use]
    pub const fn pair(&self) -> (&'a str, &'a str) {
        (self.local, self.remote)
    }

    /// Whether this pair is a pair of leaves.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.kind == MismatchKind::Leaf
    }
}

/// Compare two trees and list every pair of differing hashes.
///
/// The trees must have been built from sequences of the same length, so that
/// they share node count and height. This is not checked up front; a
/// violation is reported as [`TreeError::ShapeMismatch`] when the walk first
/// meets a differing pair where one side is a leaf and the other is not.
///
/// Matching subtrees are never entered. The result lists the root pair first
/// and then the divergent pairs depth-first, left before right, so its size
/// tracks the number of divergent paths rather than the tree size. Equal root
/// hashes yield an empty list.
///
/// # Errors
///
/// [`TreeError::ShapeMismatch`] as described above, or when exactly one of
/// the trees is empty. No partial result is returned.
pub fn compare<'a, P, Q>(
    local: &'a Tree<P>,
    remote: &'a Tree<Q>,
) -> Result<Vec<Mismatch<'a>>, TreeError> {
    let (local_root, remote_root) = match (local.root(), remote.root()) {
        (None, None) => return Ok(Vec::new()),
        (Some(local_root), Some(remote_root)) => (local_root, remote_root),
        (local_root, remote_root) => {
            return Err(TreeError::ShapeMismatch {
                depth: 0,
                local: local_root.map_or(EMPTY_TREE, Node::hash).to_owned(),
                remote: remote_root.map_or(EMPTY_TREE, Node::hash).to_owned(),
            });
        }
    };

    if local_root.hash() == remote_root.hash() {
        trace!(root = local_root.hash(), "Root hashes match, trees are identical");
        return Ok(Vec::new());
    }

    let mut mismatches = Vec::new();
    // Pairs on the stack are known to differ.
    let mut pending = vec![(0_usize, local_root, remote_root)];

    while let Some((depth, local_node, remote_node)) = pending.pop() {
        match (local_node.children(), remote_node.children()) {
            (None, None) => {
                // Differing leaves: record, nothing below to descend into.
                mismatches.push(Mismatch {
                    depth,
                    kind: MismatchKind::Leaf,
                    local: local_node.hash(),
                    remote: remote_node.hash(),
                });
            }
            (Some((local_left, local_right)), Some((remote_left, remote_right))) => {
                mismatches.push(Mismatch {
                    depth,
                    kind: MismatchKind::Internal,
                    local: local_node.hash(),
                    remote: remote_node.hash(),
                });

                // Right goes on the stack first so the left subtree is fully
                // reported before the right sibling.
                if local_right.hash() == remote_right.hash() {
                    trace!(depth = depth + 1, "Right subtrees match, pruning");
                } else {
                    pending.push((depth + 1, local_right, remote_right));
                }

                if local_left.hash() == remote_left.hash() {
                    trace!(depth = depth + 1, "Left subtrees match, pruning");
                } else {
                    pending.push((depth + 1, local_left, remote_left));
                }
            }
            _ => {
                return Err(TreeError::ShapeMismatch {
                    depth,
                    local: local_node.hash().to_owned(),
                    remote: remote_node.hash().to_owned(),
                });
            }
        }
    }

    debug!(
        mismatches = mismatches.len(),
        leaves = mismatches.iter().filter(|m| m.is_leaf()).count(),
        "Compared hash trees"
    );

    Ok(mismatches)
}
