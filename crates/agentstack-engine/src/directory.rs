use agentstack_types::{AgentRecord, Catalog};
use serde::Serialize;
use std::fmt;

use crate::filter::apply_filter;
use crate::search::apply_search;
use crate::sort::apply_sort;
use crate::state::ViewState;

/// Placeholder shown instead of an empty grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "query", rename_all = "snake_case")]
pub enum EmptyState {
    NoAgents,
    NoResults(String),
}

impl EmptyState {
    pub fn title(&self) -> &'static str {
        "No agents found"
    }
}

impl fmt::Display for EmptyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyState::NoAgents => write!(f, "No agents found"),
            EmptyState::NoResults(query) => write!(f, "No results for \"{}\"", query),
        }
    }
}

/// Output of the filter -> search -> sort pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryView<'a> {
    pub agents: Vec<&'a AgentRecord>,
    pub total: usize,
}

impl<'a> DirectoryView<'a> {
    pub fn shown(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn results_text(&self) -> String {
        results_count_text(self.shown(), self.total)
    }

    pub fn empty_state(&self, state: &ViewState) -> Option<EmptyState> {
        if !self.is_empty() {
            return None;
        }
        let query = state.search_query.trim();
        Some(if query.is_empty() {
            EmptyState::NoAgents
        } else {
            EmptyState::NoResults(query.to_string())
        })
    }
}

pub fn results_count_text(shown: usize, total: usize) -> String {
    format!("Showing {} of {} agents", shown, total)
}

/// Run the directory pipeline over `catalog` for `state`.
///
/// Pure: the catalog is never reordered; unknown filter and sort keys degrade
/// to an empty result and identity order respectively.
pub fn compute<'a>(catalog: &'a Catalog, state: &ViewState) -> DirectoryView<'a> {
    let all: Vec<&AgentRecord> = catalog.agents().iter().collect();
    let filtered = apply_filter(&all, &state.filter);
    let searched = apply_search(&filtered, &state.search_query, catalog);
    let agents = apply_sort(&searched, &state.sort);

    DirectoryView {
        agents,
        total: catalog.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;
    use crate::sort::SortMode;
    use crate::test_support::{agent, catalog_of};

    #[test]
    fn pipeline_filters_then_searches_then_sorts() {
        let mut zeta = agent("zeta", "coding");
        zeta.name = "Zeta".to_string();
        let mut alpha = agent("alpha", "coding");
        alpha.name = "Alpha".to_string();
        let mut other = agent("other", "sales");
        other.name = "Alphabet".to_string();
        let catalog = catalog_of(vec![zeta, alpha, other]);

        let state = ViewState::new()
            .with_filter(Filter::category("coding"))
            .with_sort(SortMode::Name);
        let view = compute(&catalog, &state);

        let names: Vec<&str> = view.agents.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
        assert_eq!(view.results_text(), "Showing 2 of 3 agents");
        assert_eq!(view.empty_state(&state), None);
    }

    #[test]
    fn empty_states_depend_on_query() {
        let catalog = catalog_of(vec![agent("a", "coding")]);

        let state = ViewState::new().with_filter(Filter::category("nope"));
        let view = compute(&catalog, &state);
        assert_eq!(view.empty_state(&state), Some(EmptyState::NoAgents));

        let state = ViewState::new().with_search("  zzzqqq123 ");
        let view = compute(&catalog, &state);
        let empty = view.empty_state(&state).unwrap();
        assert_eq!(empty.to_string(), "No results for \"zzzqqq123\"");
        assert_eq!(view.results_text(), "Showing 0 of 1 agents");
    }
}
