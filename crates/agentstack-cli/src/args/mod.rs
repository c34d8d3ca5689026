// NOTE: Command Organization
//
// Read-only views of the directory are flat top-level commands (`list`,
// `show`, `compare`, ...). Anything with its own verbs gets a namespace
// (`site build`, `theme get|set|toggle`).

mod commands;
mod common;
pub mod hints;

pub use commands::*;
pub use common::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "agentstack")]
#[command(about = "Browse, search and compare the AgentStack directory of AI agents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (defaults to $AGENTSTACK_PATH or the XDG data dir)")]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Catalog JSON file to use instead of the built-in one")]
    pub catalog: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
