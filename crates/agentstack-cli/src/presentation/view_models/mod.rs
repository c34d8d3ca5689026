use std::fmt;

pub mod agent;
pub mod browse;
pub mod catalog;
pub mod common;
pub mod compare;
pub mod directory;
pub mod forms;
pub mod result;
pub mod site;
pub mod theme;

pub use agent::{AgentCardViewModel, AgentDetailViewModel, BreakdownRowViewModel, SimilarAgentViewModel};
pub use browse::{
    ActivityViewModel, BrowseScreenViewModel, ConfettiParticleViewModel, DecorViewModel,
    TestimonialViewModel,
};
pub use catalog::{
    CategoryListViewModel, CategoryTileViewModel, FeaturedViewModel, FilterCountViewModel,
    HeroStatViewModel, SortOptionViewModel,
};
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use compare::{CompareColumnViewModel, CompareNoticeViewModel, CompareRowViewModel, CompareViewModel};
pub use directory::{DirectoryViewModel, EmptyStateViewModel};
pub use forms::{SubmissionViewModel, SubscriptionViewModel};
pub use result::CommandResultViewModel;
pub use site::{
    DirectoryPageViewModel, SelectOptionViewModel, SiteBuildViewModel, SiteViewModel, TierViewModel,
};
pub use theme::ThemeViewModel;

/// Bridge from a view model to its console view for a given density.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
