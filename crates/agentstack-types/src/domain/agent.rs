use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag marking an agent as open source (compared case-insensitively).
pub const OPEN_SOURCE_TAG: &str = "open source";

/// Launch date used for ordering when an agent has none.
pub const FALLBACK_LAUNCH_DATE: &str = "2020-01";

/// Unique agent identifier.
///
/// Raw catalogs may use strings or integers; both normalize to the string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AgentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Canonical agent listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: AgentId,
    pub name: String,
    pub category: String,
    pub tags: Vec<String>,
    /// Expected range [0, 5]
    pub rating: f64,
    pub reviews: u64,
    pub pricing: String,
    pub featured: bool,
    /// `YYYY-MM` or `YYYY`
    pub launch_date: Option<String>,
    pub description: String,
    pub tagline: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
}

impl AgentRecord {
    pub fn is_open_source(&self) -> bool {
        self.tags.iter().any(|t| is_open_source_tag(t))
    }

    /// Launch date for recency ordering, with the fallback for undated agents.
    pub fn launch_key(&self) -> &str {
        self.launch_date.as_deref().unwrap_or(FALLBACK_LAUNCH_DATE)
    }

    pub fn launch_year(&self) -> Option<&str> {
        self.launch_date
            .as_deref()
            .and_then(|d| d.get(..4))
            .filter(|y| y.chars().all(|c| c.is_ascii_digit()))
    }
}

pub fn is_open_source_tag(tag: &str) -> bool {
    tag.eq_ignore_ascii_case(OPEN_SOURCE_TAG)
}
