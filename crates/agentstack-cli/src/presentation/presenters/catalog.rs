use crate::args::hints::{cmd, fmt as hint};
use crate::presentation::presenters::directory::present_card;
use crate::presentation::view_models::{
    CategoryListViewModel, CategoryTileViewModel, CommandResultViewModel, FeaturedViewModel,
    FilterCountViewModel, Guidance, HeroStatViewModel, SortOptionViewModel, StatusBadge,
};
use agentstack_engine::{SortMode, ViewState, featured_agents, filter_counts, hero_stats};
use agentstack_types::Catalog;

pub fn present_filter_counts(catalog: &Catalog, state: &ViewState) -> Vec<FilterCountViewModel> {
    filter_counts(catalog)
        .into_iter()
        .map(|c| FilterCountViewModel {
            active: c.filter == state.filter,
            id: c.filter.as_str().to_string(),
            label: c.label,
            count: c.count,
        })
        .collect()
}

pub fn present_sort_options(state: &ViewState) -> Vec<SortOptionViewModel> {
    SortMode::ALL
        .iter()
        .map(|mode| SortOptionViewModel {
            id: mode.as_str().to_string(),
            label: mode.label().to_string(),
            active: *mode == state.sort,
        })
        .collect()
}

/// Hero stats with `values` in place of the final counts (the count-up
/// animation hands in intermediate values).
pub fn present_hero(catalog: &Catalog, values: Option<&[u64]>) -> Vec<HeroStatViewModel> {
    hero_stats(catalog)
        .into_iter()
        .enumerate()
        .map(|(i, stat)| HeroStatViewModel {
            label: stat.label.to_string(),
            value: values.and_then(|v| v.get(i).copied()).unwrap_or(stat.value),
        })
        .collect()
}

pub fn present_category_tiles(catalog: &Catalog) -> Vec<CategoryTileViewModel> {
    catalog
        .categories()
        .iter()
        .map(|c| CategoryTileViewModel {
            id: c.id.clone(),
            name: c.name.clone(),
            icon: c.icon.clone(),
            description: c.description.clone(),
            count: c.count,
        })
        .collect()
}

pub fn present_categories(catalog: &Catalog) -> CommandResultViewModel<CategoryListViewModel> {
    let content = CategoryListViewModel {
        categories: present_category_tiles(catalog),
        filters: present_filter_counts(catalog, &ViewState::new()),
    };

    let badge = StatusBadge::info(format!("{} categories", content.categories.len()));
    let mut result = CommandResultViewModel::new(content).with_badge(badge);
    if let Some(first) = result.content.categories.first() {
        let command = hint::list_category(&first.id);
        result = result.with_suggestion(Guidance::new("Browse a category").with_command(command));
    }
    result
}

pub fn present_featured(catalog: &Catalog) -> CommandResultViewModel<FeaturedViewModel> {
    let state = ViewState::new();
    let content = FeaturedViewModel {
        hero: present_hero(catalog, None),
        agents: featured_agents(catalog)
            .into_iter()
            .map(|a| present_card(catalog, a, &state))
            .collect(),
    };

    if content.agents.is_empty() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info("No featured agents"))
            .with_suggestion(Guidance::new("Browse the full directory").with_command(cmd::LIST));
    }

    let badge = StatusBadge::success(format!("{} featured agents", content.agents.len()));
    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestion(Guidance::new("Browse interactively").with_command(cmd::BROWSE))
}
