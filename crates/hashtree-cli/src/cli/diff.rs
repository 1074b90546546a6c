use camino::Utf8PathBuf;
use clap::Parser;
use eyre::{Result as EyreResult, WrapErr};
use hashtree::compare;
use tracing::{info, warn};

use crate::cli::RootArgs;
use crate::input::build_tree;
use crate::output::{DiffReport, Output};

#[derive(Debug, Parser)]
pub struct DiffCommand {
    /// Local identifiers, comma separated and in tree order
    #[arg(long, value_name = "IDS", value_delimiter = ',')]
    #[arg(required_unless_present = "local_from", conflicts_with = "local_from")]
    pub local: Vec<String>,

    /// Read local identifiers from a file
    #[arg(long, value_name = "PATH")]
    pub local_from: Option<Utf8PathBuf>,

    /// Remote identifiers, comma separated and in tree order
    #[arg(long, value_name = "IDS", value_delimiter = ',')]
    #[arg(required_unless_present = "remote_from", conflicts_with = "remote_from")]
    pub remote: Vec<String>,

    /// Read remote identifiers from a file
    #[arg(long, value_name = "PATH")]
    pub remote_from: Option<Utf8PathBuf>,
}

impl DiffCommand {
    pub fn run(self, args: &RootArgs) -> EyreResult<()> {
        let local = build_tree(self.local, self.local_from.as_deref())
            .wrap_err("failed to load local identifiers")?;
        let remote = build_tree(self.remote, self.remote_from.as_deref())
            .wrap_err("failed to load remote identifiers")?;

        if local.leaf_count() != remote.leaf_count() {
            warn!(
                local = local.leaf_count(),
                remote = remote.leaf_count(),
                "Identifier counts differ, trees may not share a shape"
            );
        }

        let mismatches = compare(&local, &remote).wrap_err("failed to compare hash trees")?;

        info!(
            local_root = local.root_hash(),
            remote_root = remote.root_hash(),
            mismatches = mismatches.len(),
            "Compared trees"
        );

        Output::new(args.output).write(&DiffReport::new(&local, &remote, mismatches));

        Ok(())
    }
}
