use anyhow::Result;
use clap::{Parser, Subcommand};
use hashchain_core::Chain;
use std::{io, path::PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

mod demo;
mod render;
mod script;

use render::Format;

#[derive(Parser, Debug)]
#[command(name = "hashchain")]
#[command(about = "Build, tamper with and verify a hash-linked record chain")]
struct Cli {
    /// Output format for chain listings
    #[arg(long, value_enum, global = true, default_value_t = Format::Table)]
    format: Format,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Append three linked records, change the middle one, then verify
    Demo,
    /// Replay a JSON list of operations against a fresh chain
    Replay {
        /// Path to the script file
        script: PathBuf,
    },
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let chain = Chain::new();
    let mut stdout = io::stdout().lock();
    match cli.cmd {
        Command::Demo => demo::run(&chain, cli.format, &mut stdout)?,
        Command::Replay { script } => {
            let ops = script::load(&script)?;
            script::run(&chain, ops, cli.format, &mut stdout)?;
        }
    }
    Ok(())
}
