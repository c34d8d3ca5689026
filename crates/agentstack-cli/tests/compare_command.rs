use agentstack_testing::{TestWorld, assertions};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn column_ids(json: &Value) -> Vec<&str> {
    json["content"]["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect()
}

#[test]
fn test_compare_two_agents_in_selection_order() {
    let world = TestWorld::new().with_small_catalog();
    let json = world.run_json(&["compare", "zed", "abacus"]).unwrap();

    assert_eq!(column_ids(&json), vec!["zed", "abacus"]);
    assertions::assert_badge(&json, "Comparing 2 agents").unwrap();
    assert_eq!(json["content"]["rows"][0]["label"], "Category");
}

#[test]
fn test_compare_needs_two_agents() {
    let world = TestWorld::new().with_small_catalog();
    let json = world.run_json(&["compare", "zed"]).unwrap();

    assert!(column_ids(&json).is_empty());
    assertions::assert_badge(&json, "Select at least 2 agents to compare").unwrap();
}

#[test]
fn test_compare_skips_unknown_and_duplicate_ids() {
    let world = TestWorld::new().with_small_catalog();
    let json = world
        .run_json(&["compare", "zed", "ghost", "mason", "abacus", "abacus"])
        .unwrap();

    assert_eq!(column_ids(&json), vec!["zed", "mason"]);
    let notices: Vec<(&str, &str)> = json["content"]["notices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| (n["id"].as_str().unwrap(), n["message"].as_str().unwrap()))
        .collect();
    assert_eq!(
        notices,
        vec![
            ("ghost", "unknown agent"),
            ("abacus", "listed twice, removed again"),
        ]
    );
    assertions::assert_badge(&json, "Comparing 2 agents (2 skipped)").unwrap();
}

#[test]
fn test_compare_caps_selection_at_four() {
    let world = TestWorld::new();
    let json = world
        .run_json(&["compare", "devin", "cursor-agent", "autogpt", "perplexity", "jasper"])
        .unwrap();

    assert_eq!(column_ids(&json), vec!["devin", "cursor-agent", "autogpt", "perplexity"]);
    assert_eq!(json["content"]["notices"][0]["id"], "jasper");
    assert_eq!(json["content"]["notices"][0]["message"], "Max 4 agents for comparison");
}

#[test]
fn test_compare_plain_prints_table() {
    let world = TestWorld::new().with_small_catalog();
    let result = world.run(&["compare", "zed", "mason"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Zed"));
    assert!(result.stdout().contains("Mason"));
    assert!(result.stdout().contains("Category"));
}
