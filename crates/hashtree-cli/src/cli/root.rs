use clap::Parser;
use eyre::{OptionExt, Result as EyreResult};

use crate::cli::RootArgs;
use crate::input::IdentifierSource;
use crate::output::{Output, RootReport};

#[derive(Debug, Parser)]
pub struct RootHashCommand {
    #[command(flatten)]
    pub source: IdentifierSource,
}

impl RootHashCommand {
    pub fn run(self, args: &RootArgs) -> EyreResult<()> {
        let tree = self.source.build_tree()?;
        let root = tree.root_hash().ok_or_eyre("built tree has no root")?;

        Output::new(args.output).write(&RootReport::new(root));

        Ok(())
    }
}
