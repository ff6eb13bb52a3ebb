//! Command-line surface of the `gzt` binary.
//!
//! The report run takes no operational arguments; the database name and the
//! output format are fixed. The only flags tune logging.

use clap::Parser;

/// Top-level CLI parser for the `gzt` binary.
#[derive(Debug, Parser)]
#[command(
    name = "gzt",
    version,
    about = "Gazette - readership reports from the news database"
)]
pub struct Cli {
    /// Quiet mode (suppress non-essential output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
