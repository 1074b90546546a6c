use clap::Parser;
use eyre::Result as EyreResult;

use crate::cli::RootArgs;
use crate::input::IdentifierSource;
use crate::output::{Output, TreeReport};

#[derive(Debug, Parser)]
pub struct BuildCommand {
    #[command(flatten)]
    pub source: IdentifierSource,
}

impl BuildCommand {
    pub fn run(self, args: &RootArgs) -> EyreResult<()> {
        let tree = self.source.build_tree()?;

        Output::new(args.output).write(&TreeReport::new(&tree));

        Ok(())
    }
}
