// NOTE: AgentStack CLI layout
//
// One process, one controller. Every surface (console output, the static
// site and the interactive browser) goes through the same pipeline:
//
//   args -> handler -> runtime controller / engine -> presenter -> view model -> view
//
// - Handlers never format; presenters never print.
// - The catalog is read-only after load; the only thing written to disk is
//   the theme preference (and the site when asked to build one).
// - Decorations live in the runtime and only the browser drives them.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, SiteCommand, ThemeCommand};
pub use commands::run;
