mod agent;
mod catalog;
mod category;
mod theme;

pub use agent::{AgentId, AgentRecord, FALLBACK_LAUNCH_DATE, OPEN_SOURCE_TAG, is_open_source_tag};
pub use catalog::Catalog;
pub use category::{CategoryRecord, FALLBACK_ICON};
pub use theme::{THEME_PREFERENCE_KEY, Theme};
