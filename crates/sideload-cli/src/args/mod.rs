// NOTE: Command Organization
//
// Every command takes one response body (a file, or stdin via `-`) and
// renders it. Fetching is someone else's job, so the surface stays flat:
// `inspect`, `list`, `show`, `resolve`.

mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sideload")]
#[command(
    about = "Decode compound-document responses and resolve side-loaded relationships",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Output format (defaults to the config file's `format`, else plain)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Config file (overrides SIDELOAD_CONFIG and the default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
