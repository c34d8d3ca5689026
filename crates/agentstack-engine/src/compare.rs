use agentstack_types::{AgentId, AgentRecord, Catalog};
use serde::Serialize;
use std::fmt;

/// Most agents that can be compared side by side.
pub const MAX_COMPARE: usize = 4;

/// Fewest agents needed before the comparison table opens.
pub const MIN_COMPARE: usize = 2;

/// Transient, user-visible message produced by the compare state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompareNotice {
    LimitReached,
    NeedMoreAgents,
}

impl fmt::Display for CompareNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareNotice::LimitReached => write!(f, "Max {} agents for comparison", MAX_COMPARE),
            CompareNotice::NeedMoreAgents => {
                write!(f, "Select at least {} agents to compare", MIN_COMPARE)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Selection already full; nothing changed.
    Rejected(CompareNotice),
    /// Id not present in the catalog; nothing changed.
    UnknownAgent(AgentId),
}

impl ToggleOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, ToggleOutcome::Rejected(_) | ToggleOutcome::UnknownAgent(_))
    }
}

/// Insertion-ordered set of agent ids, at most [`MAX_COMPARE`] long.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompareSelection {
    ids: Vec<AgentId>,
}

impl CompareSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[AgentId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARE
    }

    pub fn contains(&self, id: &AgentId) -> bool {
        self.ids.contains(id)
    }

    pub fn toggle(&mut self, id: &AgentId, catalog: &Catalog) -> ToggleOutcome {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
            return ToggleOutcome::Removed;
        }
        if !catalog.contains(id) {
            tracing::debug!(agent = %id, "compare toggle for unknown agent ignored");
            return ToggleOutcome::UnknownAgent(id.clone());
        }
        if self.is_full() {
            tracing::debug!(agent = %id, "compare selection full");
            return ToggleOutcome::Rejected(CompareNotice::LimitReached);
        }
        self.ids.push(id.clone());
        ToggleOutcome::Added
    }

    pub fn remove(&mut self, id: &AgentId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|s| s != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Build the comparison table, or the notice explaining why it cannot open.
    pub fn open(&self, catalog: &Catalog) -> Result<ComparisonTable, CompareNotice> {
        if self.ids.len() < MIN_COMPARE {
            return Err(CompareNotice::NeedMoreAgents);
        }
        let agents: Vec<&AgentRecord> = self.ids.iter().filter_map(|id| catalog.agent(id)).collect();
        if agents.len() < MIN_COMPARE {
            return Err(CompareNotice::NeedMoreAgents);
        }
        Ok(ComparisonTable::build(&agents, catalog))
    }
}

/// Compared attributes, in row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompareField {
    Category,
    Rating,
    Reviews,
    Pricing,
    Launched,
    Company,
    Tags,
}

impl CompareField {
    pub const ALL: [CompareField; 7] = [
        CompareField::Category,
        CompareField::Rating,
        CompareField::Reviews,
        CompareField::Pricing,
        CompareField::Launched,
        CompareField::Company,
        CompareField::Tags,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CompareField::Category => "Category",
            CompareField::Rating => "Rating",
            CompareField::Reviews => "Reviews",
            CompareField::Pricing => "Pricing",
            CompareField::Launched => "Launched",
            CompareField::Company => "Company",
            CompareField::Tags => "Tags",
        }
    }

    fn cell(self, agent: &AgentRecord, catalog: &Catalog) -> CompareCell {
        match self {
            CompareField::Category => {
                CompareCell::Text(catalog.category_name(&agent.category).to_string())
            }
            CompareField::Rating => CompareCell::Rating(agent.rating),
            CompareField::Reviews => CompareCell::Count(agent.reviews),
            CompareField::Pricing => CompareCell::Text(agent.pricing.clone()),
            CompareField::Launched => agent
                .launch_date
                .clone()
                .map_or(CompareCell::Missing, CompareCell::Text),
            CompareField::Company => agent
                .company
                .clone()
                .map_or(CompareCell::Missing, CompareCell::Text),
            CompareField::Tags if agent.tags.is_empty() => CompareCell::Missing,
            CompareField::Tags => CompareCell::Text(agent.tags.join(", ")),
        }
    }
}

/// Raw typed value of one table cell; formatting belongs to the presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CompareCell {
    Text(String),
    Rating(f64),
    Count(u64),
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareColumn {
    pub id: AgentId,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareRow {
    pub field: CompareField,
    pub cells: Vec<CompareCell>,
}

/// One column per selected agent (selection order), one row per [`CompareField`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub columns: Vec<CompareColumn>,
    pub rows: Vec<CompareRow>,
}

impl ComparisonTable {
    pub fn build(agents: &[&AgentRecord], catalog: &Catalog) -> Self {
        let columns = agents
            .iter()
            .map(|a| CompareColumn {
                id: a.id.clone(),
                name: a.name.clone(),
                icon: catalog.category_icon(&a.category).to_string(),
            })
            .collect();

        let rows = CompareField::ALL
            .iter()
            .map(|&field| CompareRow {
                field,
                cells: agents.iter().map(|a| field.cell(a, catalog)).collect(),
            })
            .collect();

        Self { columns, rows }
    }
}
