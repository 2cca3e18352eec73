//! Binary crate for the `hyde-weather` Waybar module.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Routing diagnostics to stderr
//! - Printing exactly one JSON status line on stdout

use clap::Parser;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cmd = cli::Cli::parse();
    cmd.init_tracing();
    cmd.run().await
}
