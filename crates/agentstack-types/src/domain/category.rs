use serde::{Deserialize, Serialize};

/// Icon shown for agents whose category is unknown.
pub const FALLBACK_ICON: &str = "🤖";

/// Grouping used for filtering and iconography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    /// Number of agents in the loaded catalog with this category
    pub count: usize,
}
