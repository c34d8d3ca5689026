//! End-to-end directory scenarios against the built-in catalog.

use agentstack_engine::{
    CompareField, CompareNotice, CompareSelection, EmptyState, Filter, MAX_COMPARE, SortMode,
    ToggleOutcome, ViewState, compute_directory, featured_agents, filter_counts,
};
use agentstack_types::{AgentId, Catalog};
use pretty_assertions::assert_eq;

fn names(view: &agentstack_engine::DirectoryView<'_>) -> Vec<String> {
    view.agents.iter().map(|a| a.name.clone()).collect()
}

#[test]
fn open_source_filter_shows_eighteen_of_forty_two() {
    // Given: the built-in catalog
    let catalog = Catalog::builtin().unwrap();

    // When: selecting the open-source filter
    let state = ViewState::new().with_filter(Filter::from("open-source"));
    let view = compute_directory(&catalog, &state);

    // Then: exactly the open-source agents are shown
    assert_eq!(view.shown(), 18);
    assert_eq!(view.results_text(), "Showing 18 of 42 agents");
    assert!(view.agents.iter().all(|a| a.is_open_source()));
}

#[test]
fn search_is_case_insensitive() {
    let catalog = Catalog::builtin().unwrap();

    for query in ["autogpt", "AutoGPT", "  AUTOGPT "] {
        let state = ViewState::new().with_search(query);
        let view = compute_directory(&catalog, &state);
        assert_eq!(names(&view), vec!["AutoGPT".to_string()], "query {:?}", query);
    }
}

#[test]
fn name_sort_orders_alphabetically() {
    let json = r#"{
        "categories": [{"id": "x", "name": "X"}],
        "agents": [
            {"id": "z", "name": "Zeta", "category": "x", "description": "d"},
            {"id": "a", "name": "Alpha", "category": "x", "description": "d"},
            {"id": "m", "name": "Mid", "category": "x", "description": "d"}
        ]
    }"#;
    let catalog = Catalog::from_json_str(json).unwrap();

    let state = ViewState::new().with_sort(SortMode::from("name"));
    let view = compute_directory(&catalog, &state);

    assert_eq!(names(&view), vec!["Alpha", "Mid", "Zeta"]);
}

#[test]
fn fifth_compare_toggle_is_rejected() {
    let catalog = Catalog::builtin().unwrap();
    let mut selection = CompareSelection::new();

    // Given: four agents toggled one after another
    for (n, id) in ["devin", "aider", "autogpt", "langchain"].into_iter().enumerate() {
        let outcome = selection.toggle(&AgentId::new(id), &catalog);
        assert_eq!(outcome, ToggleOutcome::Added);
        assert_eq!(selection.len(), n + 1);
    }

    // When: a fifth is toggled
    let outcome = selection.toggle(&AgentId::new("dify"), &catalog);

    // Then: it is rejected with a notice and the count stays at four
    assert_eq!(outcome, ToggleOutcome::Rejected(CompareNotice::LimitReached));
    assert_eq!(selection.len(), MAX_COMPARE);
    assert_eq!(
        CompareNotice::LimitReached.to_string(),
        "Max 4 agents for comparison"
    );
}

#[test]
fn comparing_two_agents_builds_table_in_selection_order() {
    let catalog = Catalog::builtin().unwrap();
    let mut selection = CompareSelection::new();
    selection.toggle(&AgentId::new("langchain"), &catalog);
    selection.toggle(&AgentId::new("aider"), &catalog);

    let table = selection.open(&catalog).unwrap();

    let columns: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(columns, vec!["LangChain", "Aider"]);
    let fields: Vec<CompareField> = table.rows.iter().map(|r| r.field).collect();
    assert_eq!(fields, CompareField::ALL.to_vec());
    assert!(table.rows.iter().all(|r| r.cells.len() == 2));
}

#[test]
fn compare_with_one_agent_does_not_open() {
    let catalog = Catalog::builtin().unwrap();
    let mut selection = CompareSelection::new();
    selection.toggle(&AgentId::new("devin"), &catalog);

    assert_eq!(selection.open(&catalog), Err(CompareNotice::NeedMoreAgents));
}

#[test]
fn unmatched_search_yields_empty_state() {
    let catalog = Catalog::builtin().unwrap();
    let state = ViewState::new().with_search("zzzqqq123");

    let view = compute_directory(&catalog, &state);

    assert_eq!(view.shown(), 0);
    assert_eq!(view.results_text(), "Showing 0 of 42 agents");
    assert_eq!(
        view.empty_state(&state),
        Some(EmptyState::NoResults("zzzqqq123".to_string()))
    );
}

#[test]
fn default_sort_puts_featured_first() {
    let catalog = Catalog::builtin().unwrap();
    let view = compute_directory(&catalog, &ViewState::new());

    let featured_prefix: Vec<&str> = view.agents[..7].iter().map(|a| a.id.as_str()).collect();
    assert_eq!(
        featured_prefix,
        vec![
            "cursor-agent",
            "perplexity",
            "devin",
            "copilot-workspace",
            "jasper",
            "agentforce",
            "autogpt"
        ]
    );
    assert!(!view.agents[7].featured);
}

#[test]
fn featured_grid_and_filter_counts() {
    let catalog = Catalog::builtin().unwrap();

    let featured: Vec<&str> = featured_agents(&catalog)
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(
        featured,
        vec!["devin", "cursor-agent", "copilot-workspace", "perplexity", "jasper", "agentforce"]
    );

    let counts = filter_counts(&catalog);
    assert_eq!(counts[0].count, 42);
    assert_eq!(counts[1].count, 18);
    let coding = counts
        .iter()
        .find(|c| c.filter == Filter::category("coding"))
        .unwrap();
    assert_eq!(coding.count, 14);
}

#[test]
fn newest_sort_orders_by_launch_date() {
    let json = r#"{
        "categories": [{"id": "x", "name": "X"}],
        "agents": [
            {"id": "old", "name": "Old", "category": "x", "description": "d", "launchDate": "2021-03-01"},
            {"id": "new", "name": "New", "category": "x", "description": "d", "launchDate": "2024-08-15"},
            {"id": "mid", "name": "Mid", "category": "x", "description": "d", "launchDate": "2023-01-20"}
        ]
    }"#;
    let catalog = Catalog::from_json_str(json).unwrap();

    let state = ViewState::new().with_sort(SortMode::Newest);
    let view = compute_directory(&catalog, &state);

    insta::assert_snapshot!(names(&view).join("\n"), @r"
    New
    Mid
    Old
    ");
}
