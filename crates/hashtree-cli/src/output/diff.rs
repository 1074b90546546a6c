use color_eyre::owo_colors::OwoColorize;
use comfy_table::{Cell, Color, Table};
use hashtree::error::EMPTY_TREE;
use hashtree::{Mismatch, MismatchKind, Tree};
use serde::Serialize;

use super::Report;

#[derive(Debug, Serialize)]
struct MismatchEntry<'a> {
    #[serde(flatten)]
    mismatch: Mismatch<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_payload: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remote_payload: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct DiffReport<'a> {
    local_root: Option<&'a str>,
    remote_root: Option<&'a str>,
    mismatches: Vec<MismatchEntry<'a>>,
}

impl<'a> DiffReport<'a> {
    /// Pairs every leaf mismatch with the payloads its identifiers map to.
    pub fn new(
        local: &'a Tree<Option<String>>,
        remote: &'a Tree<Option<String>>,
        mismatches: Vec<Mismatch<'a>>,
    ) -> Self {
        let mismatches = mismatches
            .into_iter()
            .map(|mismatch| {
                let (local_payload, remote_payload) = if mismatch.is_leaf() {
                    (
                        local.payload(mismatch.local).and_then(Option::as_deref),
                        remote.payload(mismatch.remote).and_then(Option::as_deref),
                    )
                } else {
                    (None, None)
                };

                MismatchEntry {
                    mismatch,
                    local_payload,
                    remote_payload,
                }
            })
            .collect();

        Self {
            local_root: local.root_hash(),
            remote_root: remote.root_hash(),
            mismatches,
        }
    }
}

impl Report for DiffReport<'_> {
    fn report(&self) {
        if self.mismatches.is_empty() {
            println!(
                "{} root {}",
                "Trees are identical,".green(),
                self.local_root.unwrap_or(EMPTY_TREE)
            );
            return;
        }

        let mut table = Table::new();
        let _ = table.set_header(vec![
            Cell::new("Depth").fg(Color::Blue),
            Cell::new("Kind").fg(Color::Blue),
            Cell::new("Local").fg(Color::Blue),
            Cell::new("Remote").fg(Color::Blue),
            Cell::new("Payload").fg(Color::Blue),
        ]);

        for entry in &self.mismatches {
            let kind = match entry.mismatch.kind {
                MismatchKind::Internal => "internal",
                MismatchKind::Leaf => "leaf",
            };
            let payload = match (entry.local_payload, entry.remote_payload) {
                (Some(local), Some(remote)) if local != remote => format!("{local} -> {remote}"),
                (Some(payload), _) | (None, Some(payload)) => payload.to_owned(),
                (None, None) => String::new(),
            };

            let _ = table.add_row(vec![
                entry.mismatch.depth.to_string(),
                kind.to_owned(),
                entry.mismatch.local.to_owned(),
                entry.mismatch.remote.to_owned(),
                payload,
            ]);
        }

        println!("{table}");
        println!(
            "{} {} mismatching pairs, {} at the leaves",
            "Divergent:".bold(),
            self.mismatches.len(),
            self.mismatches
                .iter()
                .filter(|entry| entry.mismatch.is_leaf())
                .count()
        );
    }
}
