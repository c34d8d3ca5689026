use serde::Serialize;
use std::fmt;

use super::{AgentCardViewModel, CreateView, ViewMode};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTileViewModel {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterCountViewModel {
    pub id: String,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SortOptionViewModel {
    pub id: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListViewModel {
    pub categories: Vec<CategoryTileViewModel>,
    pub filters: Vec<FilterCountViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroStatViewModel {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedViewModel {
    pub hero: Vec<HeroStatViewModel>,
    pub agents: Vec<AgentCardViewModel>,
}

impl CreateView for CategoryListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::catalog::CategoryListView;
        Box::new(CategoryListView::new(self, mode))
    }
}

impl CreateView for FeaturedViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::catalog::FeaturedView;
        Box::new(FeaturedView::new(self, mode))
    }
}
