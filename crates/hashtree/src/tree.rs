//! Bottom-up tree construction.

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::diff::{compare, Mismatch};
use crate::error::TreeError;
use crate::levels::{LevelOrder, Levels};
use crate::node::Node;

/// A binary hash tree together with the entries it was built from.
///
/// The entries are the caller's ordered identifier→payload mapping. They are
/// kept for traceability only (e.g. to map a mismatching leaf back to a file
/// path) and play no part in hashing or comparison. Duplicate identifiers are
/// allowed and kept in their original position.
#[derive(Clone, Debug)]
pub struct Tree<P = ()> {
    root: Option<Node>,
    entries: Vec<(String, P)>,
}

impl Tree {
    /// Build a tree from an ordered sequence of identifiers.
    ///
    /// Order matters: it fixes the pairing and therefore the root hash.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidInput`] if `identifiers` is empty.
    pub fn build<I>(identifiers: I) -> Result<Self, TreeError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::build_with_payloads(identifiers.into_iter().map(|id| (id.into(), ())))
    }
}

impl<P> Tree<P> {
    /// A tree with no root.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            root: None,
            entries: Vec::new(),
        }
    }

    /// Build a tree from ordered `(identifier, payload)` entries.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidInput`] if `entries` is empty.
    pub fn build_with_payloads<I>(entries: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = (String, P)>,
    {
        let entries: Vec<(String, P)> = entries.into_iter().collect();
        let root = build_root(entries.iter().map(|(id, _)| id.as_str()).collect())?;

        debug!(
            leaves = entries.len(),
            root = root.hash(),
            "Built hash tree"
        );

        Ok(Self {
            root: Some(root),
            entries,
        })
    }

    /// The root node, or `None` for an empty tree.
    #[must_use]
    pub const fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// The root hash, or `None` for an empty tree.
    #[must_use]
    pub fn root_hash(&self) -> Option<&str> {
        self.root.as_ref().map(Node::hash)
    }

    /// Whether the tree has no root.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The identifier→payload entries the tree was built from, in order.
    #[must_use]
    pub fn entries(&self) -> &[(String, P)] {
        &self.entries
    }

    /// The identifiers the tree was built from, in order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Payload of the first entry with the given identifier.
    #[must_use]
    pub fn payload(&self, identifier: &str) -> Option<&P> {
        self.entries
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, payload)| payload)
    }

    /// Number of identifiers supplied, before any duplication.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of levels, 0 for an empty tree.
    #[must_use]
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, Node::height)
    }

    /// Number of nodes, duplicates included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, Node::node_count)
    }

    /// Hashes level by level, from the root down to the leaves.
    #[must_use]
    pub fn levels(&self) -> Levels<'_> {
        Levels::new(self.root.as_ref())
    }

    /// A printable level-order view of the tree.
    #[must_use]
    pub const fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder::new(self.root.as_ref())
    }

    /// Compare this tree against `other`; see [`compare`].
    ///
    /// # Errors
    ///
    /// [`TreeError::ShapeMismatch`] if the trees turn out to differ in shape.
    pub fn compare<'a, Q>(&'a self, other: &'a Tree<Q>) -> Result<Vec<Mismatch<'a>>, TreeError> {
        compare(self, other)
    }
}

impl<P> Default for Tree<P> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Build the node graph bottom-up, one level per iteration.
///
/// Two duplication rules apply at different phases and must stay separate:
/// an odd number of identifiers repeats the last identifier before leaves are
/// paired, and an odd number of internal nodes on any later level pairs the
/// last node with a copy of itself.
fn build_root(mut identifiers: Vec<&str>) -> Result<Node, TreeError> {
    let Some(&last) = identifiers.last() else {
        return Err(TreeError::InvalidInput);
    };

    if identifiers.len() == 1 {
        trace!(identifier = last, "Single identifier, leaf becomes the root");
        return Ok(Node::leaf(last));
    }

    if identifiers.len() % 2 != 0 {
        trace!(identifier = last, "Odd identifier count, duplicating last");
        identifiers.push(last);
    }

    let mut level: Vec<Node> = identifiers
        .into_iter()
        .tuples()
        .map(|(left, right)| Node::internal(Node::leaf(left), Node::leaf(right)))
        .collect();

    let mut depth = 1_usize;

    while level.len() > 1 {
        if level.len() % 2 != 0 {
            if let Some(last) = level.last().cloned() {
                trace!(depth, node = last.hash(), "Odd node count, pairing last with itself");
                level.push(last);
            }
        }

        trace!(depth, nodes = level.len(), "Combining level");

        level = level
            .into_iter()
            .tuples()
            .map(|(left, right)| Node::internal(left, right))
            .collect();
        depth += 1;
    }

    level.pop().ok_or(TreeError::InvalidInput)
}
