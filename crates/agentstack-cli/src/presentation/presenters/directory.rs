use crate::args::hints::{cmd, fmt as hint};
use crate::presentation::view_models::{
    AgentCardViewModel, AgentDetailViewModel, BreakdownRowViewModel, CommandResultViewModel,
    DirectoryViewModel, EmptyStateViewModel, Guidance, SimilarAgentViewModel, StatusBadge,
};
use agentstack_engine::insights::tag_preview;
use agentstack_engine::{AgentDetail, CardInsights, DirectoryView, Filter, ViewState, filter_counts};
use agentstack_types::{AgentRecord, Catalog};

pub fn present_card(catalog: &Catalog, agent: &AgentRecord, state: &ViewState) -> AgentCardViewModel {
    let insights = CardInsights::of(agent);
    AgentCardViewModel {
        id: agent.id.to_string(),
        name: agent.name.clone(),
        category: agent.category.clone(),
        category_name: catalog.category_name(&agent.category).to_string(),
        icon: catalog.category_icon(&agent.category).to_string(),
        logo: agent.logo.clone(),
        subtitle: agent
            .tagline
            .clone()
            .unwrap_or_else(|| catalog.category_name(&agent.category).to_string()),
        description: agent.description.clone(),
        rating: agent.rating,
        reviews: agent.reviews,
        pricing: agent.pricing.clone(),
        tags: tag_preview(agent).to_vec(),
        badge: insights.badge,
        open_source: insights.open_source,
        popularity: insights.popularity,
        stars: insights.stars,
        launch_year: insights.launch_year,
        website: agent.website.clone().unwrap_or_else(|| "#".to_string()),
        in_compare: state.compare.contains(&agent.id),
    }
}

fn filter_label(catalog: &Catalog, filter: &Filter) -> String {
    filter_counts(catalog)
        .into_iter()
        .find(|c| c.filter == *filter)
        .map(|c| c.label)
        .unwrap_or_else(|| filter.as_str().to_string())
}

pub fn present_directory(
    catalog: &Catalog,
    state: &ViewState,
    view: &DirectoryView<'_>,
) -> DirectoryViewModel {
    DirectoryViewModel {
        filter: state.filter.as_str().to_string(),
        filter_label: filter_label(catalog, &state.filter),
        sort: state.sort.as_str().to_string(),
        sort_label: state.sort.label().to_string(),
        query: state.search_query.trim().to_string(),
        shown: view.shown(),
        total: view.total,
        agents: view
            .agents
            .iter()
            .map(|a| present_card(catalog, a, state))
            .collect(),
        empty: view.empty_state(state).map(|empty| EmptyStateViewModel {
            title: empty.title().to_string(),
            message: empty.to_string(),
        }),
        compare: state.compare.ids().iter().map(|id| id.to_string()).collect(),
    }
}

pub fn present_list(directory: DirectoryViewModel) -> CommandResultViewModel<DirectoryViewModel> {
    let badge_text = format!("Showing {} of {} agents", directory.shown, directory.total);

    if directory.agents.is_empty() {
        let mut result = CommandResultViewModel::new(directory)
            .with_badge(StatusBadge::warning(badge_text));
        if !result.content.query.is_empty() {
            result = result.with_suggestion(
                Guidance::new("Try different keywords or clear the search").with_command(cmd::LIST),
            );
        }
        if result.content.filter != "all" {
            result = result.with_suggestion(
                Guidance::new("See every category").with_command(cmd::CATEGORIES),
            );
        }
        return result;
    }

    let first = directory.agents[0].id.clone();
    CommandResultViewModel::new(directory)
        .with_badge(StatusBadge::info(badge_text))
        .with_suggestion(Guidance::new("Open an agent").with_command(hint::show(&first)))
}

pub fn present_detail(
    catalog: &Catalog,
    detail: &AgentDetail<'_>,
    state: &ViewState,
) -> AgentDetailViewModel {
    let agent = detail.agent;
    AgentDetailViewModel {
        card: present_card(catalog, agent, state),
        tags: agent.tags.clone(),
        launch_date: agent.launch_date.clone(),
        company: agent.company.clone(),
        breakdown_total: detail.breakdown.total,
        breakdown: detail
            .breakdown
            .rows
            .iter()
            .map(|row| BreakdownRowViewModel {
                stars: row.stars,
                count: row.count,
                width: row.width,
            })
            .collect(),
        similar: detail
            .similar
            .iter()
            .map(|s| SimilarAgentViewModel {
                id: s.id.to_string(),
                name: s.name.clone(),
                category_name: catalog.category_name(&s.category).to_string(),
                rating: s.rating,
            })
            .collect(),
    }
}

pub fn present_show(detail: AgentDetailViewModel) -> CommandResultViewModel<AgentDetailViewModel> {
    let mut result = CommandResultViewModel::new(detail);
    if !result.content.similar.is_empty() {
        let mut ids = vec![result.content.card.id.clone()];
        ids.extend(result.content.similar.iter().map(|s| s.id.clone()));
        result = result.with_suggestion(
            Guidance::new("Compare with similar agents").with_command(hint::compare(&ids)),
        );
    }
    let category = result.content.card.category.clone();
    result.with_suggestion(
        Guidance::new("More in this category").with_command(hint::list_category(&category)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentstack_engine::{SortMode, agent_detail, compute_directory};
    use agentstack_types::AgentId;

    #[test]
    fn test_card_falls_back_to_category_name_and_hash_link() {
        let catalog = Catalog::from_json_str(
            r#"{"categories":[{"id":"data","name":"Data","icon":"📊","description":""}],
                "agents":[{"id":"a","name":"A","category":"data","description":"d","rating":4.5,"reviews":600}]}"#,
        )
        .unwrap();
        let agent = &catalog.agents()[0];
        let card = present_card(&catalog, agent, &ViewState::new());

        assert_eq!(card.subtitle, "Data");
        assert_eq!(card.website, "#");
        assert_eq!(card.icon, "📊");
        assert_eq!(card.popularity, 40);
        assert!(!card.in_compare);
    }

    #[test]
    fn test_directory_reports_empty_state_for_query() {
        let catalog = Catalog::builtin().unwrap();
        let state = ViewState::new().with_search("zzzqqq");
        let view = compute_directory(&catalog, &state);
        let vm = present_directory(&catalog, &state, &view);

        assert_eq!(vm.shown, 0);
        assert_eq!(vm.total, 42);
        let empty = vm.empty.unwrap();
        assert_eq!(empty.title, "No agents found");
        assert_eq!(empty.message, "No results for \"zzzqqq\"");
    }

    #[test]
    fn test_directory_labels_filter_and_sort() {
        let catalog = Catalog::builtin().unwrap();
        let state = ViewState::new()
            .with_filter(Filter::category("sales"))
            .with_sort(SortMode::Name);
        let view = compute_directory(&catalog, &state);
        let vm = present_directory(&catalog, &state, &view);

        assert_eq!(vm.filter, "sales");
        assert_eq!(vm.filter_label, "Sales");
        assert_eq!(vm.sort, "name");
        assert_eq!(vm.shown, 3);
        assert!(vm.empty.is_none());
    }

    #[test]
    fn test_list_suggests_opening_first_agent() {
        let catalog = Catalog::builtin().unwrap();
        let state = ViewState::new();
        let view = compute_directory(&catalog, &state);
        let result = present_list(present_directory(&catalog, &state, &view));

        let first = view.agents[0].id.to_string();
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some(format!("agentstack show {}", first).as_str())
        );
    }

    #[test]
    fn test_detail_carries_breakdown_and_similar() {
        let catalog = Catalog::builtin().unwrap();
        let agent = catalog.agent(&AgentId::new("devin")).unwrap();
        let detail = agent_detail(&catalog, agent);
        let vm = present_detail(&catalog, &detail, &ViewState::new());

        assert_eq!(vm.breakdown.len(), 5);
        assert_eq!(vm.breakdown[0].stars, 5);
        assert!(vm.similar.len() <= 3);
        assert!(vm.similar.iter().all(|s| s.id != "devin"));
    }

    #[test]
    fn test_show_suggests_compare_then_category() {
        let catalog = Catalog::builtin().unwrap();
        let agent = catalog.agent(&AgentId::new("devin")).unwrap();
        let detail = agent_detail(&catalog, agent);
        let vm = present_detail(&catalog, &detail, &ViewState::new());
        let category = vm.card.category.clone();
        let has_similar = !vm.similar.is_empty();

        let result = present_show(vm);

        let commands: Vec<&str> = result
            .suggestions
            .iter()
            .filter_map(|g| g.command.as_deref())
            .collect();
        assert_eq!(commands.len(), if has_similar { 2 } else { 1 });
        if has_similar {
            assert!(commands[0].starts_with("agentstack compare devin "));
        }
        assert_eq!(
            commands.last().copied(),
            Some(format!("agentstack list --filter {}", category).as_str())
        );
    }
}
