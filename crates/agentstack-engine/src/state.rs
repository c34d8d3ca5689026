use serde::Serialize;

use crate::compare::CompareSelection;
use crate::filter::Filter;
use crate::sort::SortMode;

/// Session view state: everything the directory pipeline and the renderer read.
///
/// Owned by a single controller and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub filter: Filter,
    pub sort: SortMode,
    pub search_query: String,
    pub compare: CompareSelection,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }
}
