//! Tree nodes and node hashing.

use std::fmt;

use crate::digest::digest;

/// A node of a binary hash tree.
///
/// A node is either a leaf, whose hash is the identifier it was built from,
/// or an internal node owning exactly two children, whose hash is
/// `digest(left.hash, right.hash)`. Nodes are never mutated after
/// construction and never shared between parents: a duplicated node is a
/// deep copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    hash: String,
    children: Option<Box<(Node, Node)>>,
}

impl Node {
    /// Create a leaf holding `identifier` as its hash.
    #[must_use]
    pub fn leaf(identifier: impl Into<String>) -> Self {
        Self {
            hash: identifier.into(),
            children: None,
        }
    }

    /// Create an internal node over two children, computing its hash.
    #[must_use]
    pub fn internal(left: Self, right: Self) -> Self {
        Self {
            hash: digest(&left.hash, &right.hash),
            children: Some(Box::new((left, right))),
        }
    }

    /// The hash stored in this node.
    #[must_use]
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Whether this node has no children.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Both children, or `None` for a leaf.
    #[must_use]
    pub fn children(&self) -> Option<(&Self, &Self)> {
        self.children.as_deref().map(|(left, right)| (left, right))
    }

    /// The left child, or `None` for a leaf.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.children().map(|(left, _)| left)
    }

    /// The right child, or `None` for a leaf.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.children().map(|(_, right)| right)
    }

    /// Number of levels from this node down to its leaves, counting itself.
    ///
    /// Every level of a built tree is complete, so following the left spine
    /// is enough.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut current = self;

        while let Some(left) = current.left() {
            height += 1;
            current = left;
        }

        height
    }

    /// Total number of nodes in this subtree, duplicates included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            count += 1;
            if let Some((left, right)) = node.children() {
                pending.push(right);
                pending.push(left);
            }
        }

        count
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.hash)
    }
}
