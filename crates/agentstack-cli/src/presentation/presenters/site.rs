use crate::presentation::presenters::browse::present_testimonial;
use crate::presentation::presenters::catalog::{
    present_category_tiles, present_filter_counts, present_hero, present_sort_options,
};
use crate::presentation::presenters::compare::present_comparison_table;
use crate::presentation::presenters::directory::{present_card, present_detail, present_directory};
use crate::presentation::view_models::{
    CommandResultViewModel, DirectoryPageViewModel, FilterCountViewModel,
    Guidance, SelectOptionViewModel, SiteBuildViewModel, SiteViewModel, StatusBadge, TierViewModel,
};
use agentstack_engine::{
    Filter, SortMode, ViewState, agent_detail, compute_directory, featured_agents, filter_cycle,
};
use agentstack_runtime::ListingTier;
use agentstack_runtime::decor::TESTIMONIALS;
use agentstack_runtime::forms::SUBMIT_CATEGORIES;
use agentstack_types::{Catalog, Theme};
use std::path::Path;

pub const INDEX_PAGE: &str = "index.html";
pub const COMPARE_PAGE: &str = "compare.html";

pub fn directory_page_path(filter: &Filter, sort: &SortMode) -> String {
    directory_page_path_str(filter.as_str(), sort.as_str())
}

pub fn directory_page_path_str(filter: &str, sort: &str) -> String {
    format!("directory/{}/{}.html", filter, sort)
}

pub fn agent_page_path(id: &str) -> String {
    format!("agents/{}.html", id)
}

/// Inputs of one site build.
pub struct SiteRequest {
    pub theme: Theme,
    pub year: i32,
    /// Filter and sort of `index.html`. The query applies to every page; the
    /// compare selection marks cards everywhere and feeds `compare.html`.
    pub state: ViewState,
}

fn present_page(catalog: &Catalog, state: &ViewState, path: String) -> DirectoryPageViewModel {
    let view = compute_directory(catalog, state);
    DirectoryPageViewModel {
        path,
        directory: present_directory(catalog, state, &view),
    }
}

pub fn present_site(catalog: &Catalog, request: &SiteRequest) -> SiteViewModel {
    let base = &request.state;

    let mut pages = Vec::new();
    for filter in filter_cycle(catalog) {
        for sort in SortMode::ALL {
            let state = base.clone().with_filter(filter.clone()).with_sort(sort.clone());
            pages.push(present_page(catalog, &state, directory_page_path(&filter, &sort)));
        }
    }

    let agents = catalog
        .agents()
        .iter()
        .map(|a| present_detail(catalog, &agent_detail(catalog, a), base))
        .collect();

    SiteViewModel {
        theme: request.theme.as_str().to_string(),
        year: request.year,
        hero: present_hero(catalog, None),
        featured: featured_agents(catalog)
            .into_iter()
            .map(|a| present_card(catalog, a, base))
            .collect(),
        categories: present_category_tiles(catalog),
        filters: present_filter_counts(catalog, base)
            .into_iter()
            .map(|f| FilterCountViewModel { active: false, ..f })
            .collect(),
        sorts: present_sort_options(base),
        testimonials: TESTIMONIALS.iter().map(present_testimonial).collect(),
        tiers: ListingTier::ALL
            .iter()
            .map(|tier| TierViewModel {
                id: tier.as_str().to_string(),
                label: tier.label().to_string(),
                price: tier.price().to_string(),
                perks: tier.perks().iter().map(|p| p.to_string()).collect(),
            })
            .collect(),
        submit_categories: SUBMIT_CATEGORIES
            .iter()
            .map(|(value, label)| SelectOptionViewModel {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect(),
        index: present_page(catalog, base, INDEX_PAGE.to_string()),
        pages,
        agents,
        compare: base.compare.open(catalog).ok().map(|t| present_comparison_table(&t)),
    }
}

pub fn present_site_build(
    out_dir: &Path,
    site: &SiteViewModel,
    files: Vec<String>,
) -> CommandResultViewModel<SiteBuildViewModel> {
    let content = SiteBuildViewModel {
        out_dir: out_dir.display().to_string(),
        theme: site.theme.clone(),
        directory_pages: site.pages.len(),
        agent_pages: site.agents.len(),
        compare_page: site.compare.is_some(),
        files,
    };
    let badge = StatusBadge::success(format!(
        "Site written to {} ({} files)",
        content.out_dir,
        content.files.len()
    ));
    CommandResultViewModel::new(content).with_badge(badge).with_suggestion(Guidance::new(format!(
        "Open {} in a browser",
        out_dir.join(INDEX_PAGE).display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentstack_types::AgentId;

    fn request(state: ViewState) -> SiteRequest {
        SiteRequest {
            theme: Theme::Light,
            year: 2026,
            state,
        }
    }

    #[test]
    fn test_site_has_page_per_filter_and_sort() {
        let catalog = Catalog::builtin().unwrap();
        let site = present_site(&catalog, &request(ViewState::new()));

        assert_eq!(site.pages.len(), 10 * 5);
        assert_eq!(site.pages[0].path, "directory/all/default.html");
        assert_eq!(site.agents.len(), 42);
        assert!(site.filters.iter().all(|f| !f.active));
        assert!(site.compare.is_none());
        assert_eq!(site.theme, "light");
    }

    #[test]
    fn test_site_compare_needs_two_agents() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = ViewState::new();
        state.compare.toggle(&AgentId::new("devin"), &catalog);
        assert!(present_site(&catalog, &request(state.clone())).compare.is_none());

        state.compare.toggle(&AgentId::new("cursor-agent"), &catalog);
        let site = present_site(&catalog, &request(state));
        assert_eq!(site.compare.map(|c| c.columns.len()), Some(2));
        assert!(site.index.directory.agents.iter().any(|a| a.in_compare));
    }

    #[test]
    fn test_search_applies_to_every_page() {
        let catalog = Catalog::builtin().unwrap();
        let site = present_site(&catalog, &request(ViewState::new().with_search("zzzqqq")));
        assert!(site.pages.iter().all(|p| p.directory.shown == 0));
        assert!(site.index.directory.empty.is_some());
    }
}
