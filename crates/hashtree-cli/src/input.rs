//! Loading identifier lists from the command line or from list files.

use std::fs::read_to_string;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use eyre::{Result as EyreResult, WrapErr};
use hashtree::Tree;
use tracing::debug;

/// An identifier with the payload reference it maps to, if any.
pub type Entry = (String, Option<String>);

#[derive(Debug, Args)]
pub struct IdentifierSource {
    /// Identifiers, in tree order
    #[arg(value_name = "ID", required_unless_present = "from")]
    pub identifiers: Vec<String>,

    /// Read identifiers from a file, one `identifier[<TAB>payload]` per line
    #[arg(long, value_name = "PATH", conflicts_with = "identifiers")]
    pub from: Option<Utf8PathBuf>,
}

impl IdentifierSource {
    pub fn build_tree(self) -> EyreResult<Tree<Option<String>>> {
        build_tree(self.identifiers, self.from.as_deref())
    }
}

/// Build a tree from either inline identifiers or a list file.
pub fn build_tree(
    identifiers: Vec<String>,
    from: Option<&Utf8Path>,
) -> EyreResult<Tree<Option<String>>> {
    let entries = match from {
        Some(path) => read_entries(path)?,
        None => identifiers.into_iter().map(|id| (id, None)).collect(),
    };

    Tree::build_with_payloads(entries).wrap_err("failed to build hash tree")
}

pub fn read_entries(path: &Utf8Path) -> EyreResult<Vec<Entry>> {
    let contents =
        read_to_string(path).wrap_err_with(|| format!("failed to read identifiers from {path}"))?;

    let entries = parse_entries(&contents);

    debug!(%path, entries = entries.len(), "Loaded identifier list");

    Ok(entries)
}

/// Parse a list file. Blank lines and lines starting with `#` are skipped.
pub fn parse_entries(contents: &str) -> Vec<Entry> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| match line.split_once('\t') {
            Some((identifier, payload)) => {
                (identifier.trim_end().to_owned(), Some(payload.trim_start().to_owned()))
            }
            None => (line.to_owned(), None),
        })
        .collect()
}
