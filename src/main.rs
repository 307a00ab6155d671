//! # AOSP Merge CLI
//!
//! This is the binary entry point for the `aosp-merge` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging and terminal output.
//! - Handling top-level errors and translating them into a non-zero exit.
//!
//! The merge logic lives in the `aosp_merge` library crate; the binary is a
//! thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
