//! # Presentation Layer
//!
//! Everything the user sees, for three surfaces: console text/JSON/CSV, the
//! static HTML site and the interactive terminal browser. It follows an
//! MVVM split so the same view models feed every surface.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON/CSV)==> serde --> stdout
//!                                                        (Driver)  ==(Text)======> [ View ] --> stdout
//!                                                                  ==(Site)======> [ html ] --> files
//!                                                                  ==(TUI)=======> [ Component ] --> [ Widget ]
//! ```
//!
//! ## Rules
//!
//! ### 1. View models hold raw data
//! `rating: 4.5` and `reviews: 1234`, never `"⭐ 4.5"` or `"1.2K"`. JSON output
//! is an API; formatting belongs to views.
//!
//! ### 2. `ViewMode` is density, not shape
//! * **Minimal:** agent ids only, for pipes.
//! * **Compact:** one line per agent (default).
//! * **Standard:** a short card per agent.
//! * **Verbose:** every field.
//!
//! `--format json` ignores `ViewMode` and always dumps the whole view model.
//!
//! ### 3. Views are pure
//! Text views implement `fmt::Display`, HTML views return `String`, TUI views
//! implement ratatui `Widget`. None of them read the clock, the catalog or the
//! terminal; whatever they need is in the view model.
//!
//! ### 4. TUI components own UI state only
//! The session state (filter, sort, query, compare selection, highlighted
//! card) belongs to the runtime controller. Components keep scroll state,
//! translate keys into actions and clamp indices before rendering.
//!
//! ## Directory guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to JSON output | `view_models/` |
//! | Decide when to show a tip | `presenters/` |
//! | Change console layout or colors | `views/` |
//! | Change the generated site markup | `views/html/` |
//! | Format a number, a rating or stars | `formatters/` |
//! | Handle a key in the browser | `renderers/tui/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, CsvRenderer, Renderer, SiteRenderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
