//! Level-order views of a tree, for display.

#[cfg(test)]
#[path = "tests/levels.rs"]
mod tests;

use std::fmt;
use std::iter::FusedIterator;

use crate::node::Node;

/// Separator printed after each level by [`LevelOrder`].
pub const LEVEL_SEPARATOR: &str = "--------------------";

/// Lazy iterator over the hashes of each level, root first.
///
/// Every item holds the hashes of one depth, left to right. The next level is
/// only gathered when the iterator is advanced.
#[derive(Clone, Debug)]
pub struct Levels<'a> {
    current: Vec<&'a Node>,
}

impl<'a> Levels<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            current: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for Levels<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_empty() {
            return None;
        }

        let hashes = self.current.iter().map(|&node| node.hash()).collect();

        self.current = self
            .current
            .iter()
            .filter_map(|&node| node.children())
            .flat_map(|(left, right)| [left, right])
            .collect();

        Some(hashes)
    }
}

impl FusedIterator for Levels<'_> {}

/// Renders a tree one level per line, each followed by [`LEVEL_SEPARATOR`].
///
/// ```text
/// 1
/// --------------------
/// 2 3
/// --------------------
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LevelOrder<'a> {
    root: Option<&'a Node>,
}

impl<'a> LevelOrder<'a> {
    pub(crate) const fn new(root: Option<&'a Node>) -> Self {
        Self { root }
    }
}

impl fmt::Display for LevelOrder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in Levels::new(self.root) {
            writeln!(f, "{}", level.join(" "))?;
            writeln!(f, "{LEVEL_SEPARATOR}")?;
        }

        Ok(())
    }
}
