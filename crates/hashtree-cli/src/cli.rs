use clap::{Parser, Subcommand};
use const_format::concatcp;
use eyre::Result as EyreResult;

use crate::output::Format;

mod build;
mod diff;
mod root;

use build::BuildCommand;
use diff::DiffCommand;
use root::RootHashCommand;

pub const EXAMPLES: &str = r"
  # Print the root hash of four identifiers
  $ hashtree root f1 f2 f3 f4

  # Show every level of the tree, root first
  $ hashtree build f1 f2 f3 f4

  # Build from a list file, one `identifier[<TAB>payload]` per line
  $ hashtree build --from snapshot.txt

  # Locate the subtrees where two snapshots diverge
  $ hashtree diff --local f1,f2,f3,f4 --remote f1,f2,f3,f5
  $ hashtree --output json diff --local-from before.txt --remote-from after.txt
";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(after_help = concatcp!(
    "Environment variables:\n",
    "  HASHTREE_OUTPUT    Output format (plain-text or json)\n",
    "  RUST_LOG           Log filter directives\n\n",
    "Examples:",
    EXAMPLES
))]
pub struct RootCommand {
    #[command(flatten)]
    pub args: RootArgs,

    #[command(subcommand)]
    pub action: SubCommands,
}

#[derive(Debug, Subcommand)]
pub enum SubCommands {
    /// Build a tree and print every level
    Build(BuildCommand),
    /// Build a tree and print only its root hash
    Root(RootHashCommand),
    /// Compare two trees built from sequences of the same length
    #[command(alias = "compare")]
    Diff(DiffCommand),
}

#[derive(Debug, Parser)]
pub struct RootArgs {
    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t)]
    #[arg(env = "HASHTREE_OUTPUT", global = true)]
    pub output: Format,
}

impl RootCommand {
    pub fn run(self) -> EyreResult<()> {
        match self.action {
            SubCommands::Build(build) => build.run(&self.args),
            SubCommands::Root(root) => root.run(&self.args),
            SubCommands::Diff(diff) => diff.run(&self.args),
        }
    }
}
