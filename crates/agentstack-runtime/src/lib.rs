pub mod config;
pub mod controller;
pub mod debounce;
pub mod decor;
pub mod error;
pub mod forms;
pub mod preferences;
pub mod reveal;
pub mod scheduler;
pub mod toast;
pub mod workspace;

pub use config::{Config, DecorationConfig, resolve_catalog_path, resolve_data_dir};
pub use controller::DirectoryController;
pub use debounce::Debouncer;
pub use decor::{DecorTask, Decorations};
pub use error::{Error, Result};
pub use forms::{FormError, ListingTier, SubmissionForm, SubmissionReceipt, Subscription, subscribe};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemeStore};
pub use reveal::RevealGuard;
pub use scheduler::{Cadence, Scheduler};
pub use toast::{Toast, Toasts};
pub use workspace::{AgentStack, CatalogSource};
