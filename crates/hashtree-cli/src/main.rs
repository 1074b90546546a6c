use std::env::var;
use std::io::stderr;

use clap::Parser;
use eyre::Result as EyreResult;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{registry, EnvFilter};

mod cli;
mod input;
mod output;

use cli::RootCommand;

fn main() -> EyreResult<()> {
    setup()?;

    let command = RootCommand::parse();

    command.run()
}

fn setup() -> EyreResult<()> {
    let directives = match var("RUST_LOG") {
        Ok(value) if !value.trim().is_empty() => value,
        _ => "hashtree=info,hashtree_cli=info".to_owned(),
    };

    // Logs go to stderr so that JSON output on stdout stays parseable.
    registry()
        .with(EnvFilter::builder().parse(directives)?)
        .with(layer().with_writer(stderr))
        .init();

    color_eyre::install()?;

    Ok(())
}
