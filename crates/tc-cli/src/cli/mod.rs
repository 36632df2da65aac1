use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tcatch` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tcatch",
    version,
    about = "ThreadCatch - review Reddit reply opportunities"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress notices and non-error logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API base URL (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Customer (tenant) to act for (overrides config)
    #[arg(long, global = true)]
    pub customer: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            base_url: self.base_url.clone(),
            customer: self.customer.clone(),
        }
    }
}
