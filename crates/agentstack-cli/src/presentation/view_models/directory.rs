use serde::Serialize;
use std::fmt;

use super::{AgentCardViewModel, CreateView, ViewMode};

#[derive(Debug, Clone, Serialize)]
pub struct EmptyStateViewModel {
    pub title: String,
    pub message: String,
}

/// Result of the filter, search and sort pipeline for one view state.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryViewModel {
    pub filter: String,
    pub filter_label: String,
    pub sort: String,
    pub sort_label: String,
    pub query: String,
    pub shown: usize,
    pub total: usize,
    pub agents: Vec<AgentCardViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<EmptyStateViewModel>,
    pub compare: Vec<String>,
}

impl CreateView for DirectoryViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::directory::DirectoryView;
        Box::new(DirectoryView::new(self, mode))
    }
}

impl fmt::Display for DirectoryViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
