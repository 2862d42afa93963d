//! Binary crate for the `weatherlookup` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive city/country form
//! - Human-friendly output formatting

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Diagnostics go to stderr; stdout is the form output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
