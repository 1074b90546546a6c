use color_eyre::owo_colors::OwoColorize;
use hashtree::error::EMPTY_TREE;
use hashtree::{LevelOrder, Tree};
use serde::Serialize;

use super::Report;

#[derive(Debug, Serialize)]
pub struct TreeReport<'a> {
    root: Option<&'a str>,
    leaves: usize,
    height: usize,
    levels: Vec<Vec<&'a str>>,
    #[serde(skip)]
    level_order: LevelOrder<'a>,
}

impl<'a> TreeReport<'a> {
    pub fn new<P>(tree: &'a Tree<P>) -> Self {
        Self {
            root: tree.root_hash(),
            leaves: tree.leaf_count(),
            height: tree.height(),
            levels: tree.levels().collect(),
            level_order: tree.level_order(),
        }
    }
}

impl Report for TreeReport<'_> {
    fn report(&self) {
        println!("{} {}", "Root:".bold(), self.root.unwrap_or(EMPTY_TREE));
        println!(
            "{} {}  {} {}",
            "Leaves:".bold(),
            self.leaves,
            "Height:".bold(),
            self.height
        );
        println!();
        print!("{}", self.level_order);
    }
}

#[derive(Debug, Serialize)]
pub struct RootReport<'a> {
    root: &'a str,
}

impl<'a> RootReport<'a> {
    pub const fn new(root: &'a str) -> Self {
        Self { root }
    }
}

impl Report for RootReport<'_> {
    fn report(&self) {
        println!("{}", self.root);
    }
}
