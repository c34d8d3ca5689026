use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(long, help = "Minimal output (IDs only, for scripting)", group = "view_mode")]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per item)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (all metadata)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        self.resolve_or(crate::presentation::ViewMode::default())
    }

    /// Like [`resolve`](Self::resolve) with a per-command default.
    pub fn resolve_or(&self, fallback: crate::presentation::ViewMode) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            fallback
        }
    }
}

/// Filter, sort and search flags shared by `list` and `site build`.
#[derive(Debug, Clone, Args)]
pub struct DirectoryArgs {
    #[arg(long, default_value = "all", help = "all, open-source, or a category id")]
    pub filter: String,

    #[arg(long, default_value = "default", help = "default, rating, reviews, name or newest")]
    pub sort: String,

    #[arg(long, help = "Case-insensitive text search")]
    pub search: Option<String>,
}
