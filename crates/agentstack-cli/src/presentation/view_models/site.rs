use serde::Serialize;
use std::fmt;

use super::{
    AgentCardViewModel, AgentDetailViewModel, CategoryTileViewModel, CompareViewModel, CreateView,
    DirectoryViewModel, FilterCountViewModel, HeroStatViewModel, SortOptionViewModel,
    TestimonialViewModel, ViewMode,
};

#[derive(Debug, Clone, Serialize)]
pub struct TierViewModel {
    pub id: String,
    pub label: String,
    pub price: String,
    pub perks: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectOptionViewModel {
    pub value: String,
    pub label: String,
}

/// One generated directory page, `path` relative to the site root.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryPageViewModel {
    pub path: String,
    pub directory: DirectoryViewModel,
}

/// Everything needed to write the static site.
#[derive(Debug, Clone, Serialize)]
pub struct SiteViewModel {
    pub theme: String,
    pub year: i32,
    pub hero: Vec<HeroStatViewModel>,
    pub featured: Vec<AgentCardViewModel>,
    pub categories: Vec<CategoryTileViewModel>,
    /// Filter bar entries; `active` is left false and decided per page.
    pub filters: Vec<FilterCountViewModel>,
    pub sorts: Vec<SortOptionViewModel>,
    pub testimonials: Vec<TestimonialViewModel>,
    pub tiers: Vec<TierViewModel>,
    pub submit_categories: Vec<SelectOptionViewModel>,
    pub index: DirectoryPageViewModel,
    pub pages: Vec<DirectoryPageViewModel>,
    pub agents: Vec<AgentDetailViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare: Option<CompareViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteBuildViewModel {
    pub out_dir: String,
    pub theme: String,
    pub directory_pages: usize,
    pub agent_pages: usize,
    pub compare_page: bool,
    pub files: Vec<String>,
}

impl CreateView for SiteBuildViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::settings::SiteBuildView;
        Box::new(SiteBuildView::new(self, mode))
    }
}
