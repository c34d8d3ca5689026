use agentstack_engine::{CardBadge, Star};
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// One directory card.
#[derive(Debug, Clone, Serialize)]
pub struct AgentCardViewModel {
    pub id: String,
    pub name: String,
    pub category: String,
    pub category_name: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Tagline, or the category name when the agent has none.
    pub subtitle: String,
    pub description: String,
    pub rating: f64,
    pub reviews: u64,
    pub pricing: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<CardBadge>,
    pub open_source: bool,
    pub popularity: u8,
    pub stars: [Star; 5],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_year: Option<String>,
    pub website: String,
    pub in_compare: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownRowViewModel {
    pub stars: u8,
    pub count: u64,
    pub width: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimilarAgentViewModel {
    pub id: String,
    pub name: String,
    pub category_name: String,
    pub rating: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentDetailViewModel {
    pub card: AgentCardViewModel,
    /// Every tag; the card only previews a few.
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub breakdown_total: u64,
    pub breakdown: Vec<BreakdownRowViewModel>,
    pub similar: Vec<SimilarAgentViewModel>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for AgentDetailViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::agent::AgentDetailView;
        Box::new(AgentDetailView::new(self, mode))
    }
}

impl fmt::Display for AgentDetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
