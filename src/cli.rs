//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::Parser;

use crate::commands;

/// AOSP Merge - Merge an upstream AOSP branch into a ROM checkout
#[derive(Parser, Debug)]
#[command(name = "aosp-merge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    merge: commands::merge::MergeArgs,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let level = if self.merge.quiet {
            "warn"
        } else {
            self.log_level.as_str()
        };
        init_logging(level);

        let output = aosp_merge::output::OutputConfig::from_env_and_flag(&self.color);
        commands::merge::execute(self.merge, &output)
    }
}

/// Send log records to stderr, filtered by `RUST_LOG` when set and by
/// `level` otherwise.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
