use super::common::{DirectoryArgs, ViewModeArgs};
use crate::types::{ThemeName, TierName};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List agents with filter, search and sort")]
    List {
        #[command(flatten)]
        directory: DirectoryArgs,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show one agent in detail")]
    Show {
        #[arg(help = "Agent id")]
        id: String,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Compare 2 to 4 agents side by side")]
    Compare {
        #[arg(required = true, help = "Agent ids, toggled in order")]
        ids: Vec<String>,
    },

    #[command(about = "List categories with agent counts")]
    Categories {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show the featured agents")]
    Featured {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Browse the directory interactively")]
    Browse {
        #[arg(long, help = "Turn off carousel, countdown, live counter, activity feed and confetti")]
        no_decorations: bool,
    },

    #[command(about = "Build the static site")]
    Site {
        #[command(subcommand)]
        command: SiteCommand,
    },

    #[command(about = "Show or change the persisted color theme")]
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },

    #[command(about = "Submit an agent for listing (simulated)")]
    Submit {
        #[arg(long)]
        name: String,

        #[arg(long)]
        company: String,

        #[arg(long)]
        tagline: String,

        #[arg(long)]
        description: String,

        #[arg(long, help = "Category id, or open-source")]
        category: String,

        #[arg(long)]
        pricing: String,

        #[arg(long)]
        website: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "free")]
        tier: TierName,
    },

    #[command(about = "Subscribe to the newsletter (simulated)")]
    Subscribe {
        #[arg(help = "Email address")]
        email: String,
    },
}

#[derive(Subcommand)]
pub enum SiteCommand {
    #[command(about = "Write the static HTML site to a directory")]
    Build {
        #[arg(long, help = "Output directory")]
        out: PathBuf,

        #[command(flatten)]
        directory: DirectoryArgs,

        #[arg(long, num_args = 1.., help = "Agent ids for compare.html")]
        compare: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    #[command(about = "Print the current theme")]
    Get,

    #[command(about = "Persist a theme")]
    Set {
        #[arg(help = "light or dark")]
        theme: ThemeName,
    },

    #[command(about = "Switch between light and dark")]
    Toggle,
}
