// Engine module - directory pipeline and compare selection
// This layer sits between the catalog (types) and the runtime/CLI presentation

pub mod compare;
pub mod detail;
pub mod directory;
pub mod filter;
pub mod insights;
pub mod search;
pub mod sort;
pub mod state;

pub use compare::{
    CompareCell, CompareColumn, CompareField, CompareNotice, CompareRow, CompareSelection,
    ComparisonTable, MAX_COMPARE, MIN_COMPARE, ToggleOutcome,
};
pub use detail::{AgentDetail, BreakdownRow, RatingBreakdown, agent_detail, similar_agents};
pub use directory::{DirectoryView, EmptyState, compute, results_count_text};
pub use filter::{Filter, FilterCount, filter_counts, filter_cycle};
pub use insights::{CardBadge, CardInsights, HeroStat, Star, hero_stats};
pub use sort::{SortMode, locale_compare};
pub use state::ViewState;

use agentstack_types::{AgentRecord, Catalog};

// Façade API - stable interface for the runtime and CLI layers

/// Filter, search and sort the catalog for the given state
pub fn compute_directory<'a>(catalog: &'a Catalog, state: &ViewState) -> DirectoryView<'a> {
    directory::compute(catalog, state)
}

/// Featured grid shown above the directory
pub fn featured_agents(catalog: &Catalog) -> Vec<&AgentRecord> {
    insights::featured(catalog)
}
