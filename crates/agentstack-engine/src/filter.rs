use agentstack_types::{AgentRecord, Catalog};
use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const FILTER_ALL: &str = "all";
pub const FILTER_OPEN_SOURCE: &str = "open-source";

/// Active directory filter.
///
/// Parsing never fails: any value other than `all` / `open-source` is taken
/// as a category id, and an id no agent carries simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    OpenSource,
    Category(String),
}

impl Filter {
    pub fn category(id: impl Into<String>) -> Self {
        Filter::Category(id.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => FILTER_ALL,
            Filter::OpenSource => FILTER_OPEN_SOURCE,
            Filter::Category(id) => id,
        }
    }

    pub fn matches(&self, agent: &AgentRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::OpenSource => agent.is_open_source(),
            Filter::Category(id) => agent.category == *id,
        }
    }

    /// True when the filter names neither a pseudo-filter nor a known category.
    pub fn is_unrecognized(&self, catalog: &Catalog) -> bool {
        match self {
            Filter::All | Filter::OpenSource => false,
            Filter::Category(id) => catalog.category(id).is_none(),
        }
    }
}

impl FromStr for Filter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            FILTER_ALL => Filter::All,
            FILTER_OPEN_SOURCE => Filter::OpenSource,
            other => Filter::Category(other.to_string()),
        })
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(filter) => filter,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Keep the agents matching `filter`, preserving order.
pub fn apply_filter<'a>(agents: &[&'a AgentRecord], filter: &Filter) -> Vec<&'a AgentRecord> {
    agents.iter().copied().filter(|a| filter.matches(a)).collect()
}

/// One entry of the filter bar: the filter and how many agents it keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCount {
    pub filter: Filter,
    pub label: String,
    pub count: usize,
}

/// Counts for `all`, `open-source`, then every category in catalog order.
pub fn filter_counts(catalog: &Catalog) -> Vec<FilterCount> {
    let agents = catalog.agents();
    let mut counts = vec![
        FilterCount {
            filter: Filter::All,
            label: "All".to_string(),
            count: agents.len(),
        },
        FilterCount {
            filter: Filter::OpenSource,
            label: "Open Source".to_string(),
            count: agents.iter().filter(|a| a.is_open_source()).count(),
        },
    ];

    counts.extend(catalog.categories().iter().map(|c| {
        let filter = Filter::category(c.id.clone());
        FilterCount {
            count: agents.iter().filter(|a| filter.matches(a)).count(),
            label: c.name.clone(),
            filter,
        }
    }));

    counts
}

/// Every selectable filter in filter-bar order.
pub fn filter_cycle(catalog: &Catalog) -> Vec<Filter> {
    filter_counts(catalog).into_iter().map(|c| c.filter).collect()
}
