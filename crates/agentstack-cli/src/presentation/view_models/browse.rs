use serde::Serialize;

use super::{
    AgentDetailViewModel, CompareViewModel, DirectoryViewModel, FilterCountViewModel,
    HeroStatViewModel, SortOptionViewModel,
};

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialViewModel {
    pub name: String,
    pub role: String,
    pub text: String,
    pub stars: u8,
    pub color: String,
    pub initial: char,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityViewModel {
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfettiParticleViewModel {
    /// Horizontal position in percent of the width.
    pub x: f32,
    /// Fall progress in `[0, 1]`.
    pub progress: f32,
    pub color: String,
    pub round: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DecorViewModel {
    pub countdown: String,
    pub live_count: u32,
    pub testimonials: Vec<TestimonialViewModel>,
    pub page: usize,
    pub page_count: usize,
    pub activity: Vec<ActivityViewModel>,
    pub confetti: Vec<ConfettiParticleViewModel>,
}

/// Snapshot of the interactive browser for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct BrowseScreenViewModel {
    pub theme: String,
    pub hero: Vec<HeroStatViewModel>,
    pub filters: Vec<FilterCountViewModel>,
    pub sorts: Vec<SortOptionViewModel>,
    pub search_input: String,
    pub search_focused: bool,
    pub search_pending: bool,
    pub directory: DirectoryViewModel,
    pub selected: usize,
    pub compare_names: Vec<String>,
    pub detail: Option<AgentDetailViewModel>,
    pub comparison: Option<CompareViewModel>,
    pub newsletter: Option<String>,
    pub decorations: Option<DecorViewModel>,
    pub toast: Option<String>,
}
