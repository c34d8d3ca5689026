//! Where the catalog comes from: flag, environment, or config file.

use agentstack_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_config_file_names_the_catalog() {
    let world = TestWorld::new();
    let path = fixtures::write_catalog(world.temp_dir(), fixtures::SMALL_CATALOG).unwrap();
    world
        .write_config(&format!("catalog = {:?}\n", path.to_string_lossy()))
        .unwrap();

    let json = world.run_json(&["list", "--sort", "name"]).unwrap();
    assertions::assert_agent_ids(&json, &["abacus", "mason", "zed"]).unwrap();
}

#[test]
fn test_environment_names_the_catalog() {
    let world = TestWorld::new();
    let path = fixtures::write_catalog(world.temp_dir(), fixtures::SMALL_CATALOG).unwrap();
    let world = world.with_env("AGENTSTACK_CATALOG", path.to_string_lossy());

    let json = world.run_json(&["list"]).unwrap();
    assertions::assert_agent_count(&json, 3).unwrap();
}

#[test]
fn test_broken_catalog_is_reported() {
    let world = TestWorld::new();
    let path = world.temp_dir().join("agents.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = world.run(&["--catalog", path.to_str().unwrap(), "list"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Catalog parse error"));
}
