use agentstack_engine::CompareCell;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Clone, Serialize)]
pub struct CompareColumnViewModel {
    pub id: String,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareRowViewModel {
    pub label: String,
    pub cells: Vec<CompareCell>,
}

/// A toggle that did not change the selection.
#[derive(Debug, Clone, Serialize)]
pub struct CompareNoticeViewModel {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareViewModel {
    pub columns: Vec<CompareColumnViewModel>,
    pub rows: Vec<CompareRowViewModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<CompareNoticeViewModel>,
}

impl CompareViewModel {
    pub fn is_open(&self) -> bool {
        !self.columns.is_empty()
    }
}

impl CreateView for CompareViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::compare::CompareView;
        Box::new(CompareView::new(self, mode))
    }
}
