//! Catalog fixtures.
//!
//! The built-in catalog covers most tests; these small documents pin down
//! ordering and empty-state cases without depending on its content.

use agentstack_types::Catalog;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Three agents across two categories, one of them open source.
pub const SMALL_CATALOG: &str = r#"{
  "categories": [
    { "id": "coding", "name": "Coding", "icon": "💻", "description": "Agents that write code" },
    { "id": "data", "name": "Data", "icon": "📊", "description": "Agents that crunch numbers" }
  ],
  "agents": [
    { "id": "zed", "name": "Zed", "category": "coding", "description": "Pair programming in the editor",
      "rating": 4.2, "reviews": 90, "pricing": "Freemium", "launchDate": "2023-05-01" },
    { "id": "abacus", "name": "Abacus", "category": "data", "description": "Counts things carefully",
      "rating": 4.9, "reviews": 900, "pricing": "Free", "tags": ["Open Source", "Analytics"],
      "featured": true, "launchDate": "2024-02-10" },
    { "id": "mason", "name": "Mason", "category": "coding", "description": "Builds and ships services",
      "rating": 4.5, "reviews": 300, "pricing": "Paid", "launchDate": "2022-11-20" }
  ]
}"#;

/// Agent ids of [`SMALL_CATALOG`] in document order.
pub const SMALL_CATALOG_IDS: [&str; 3] = ["zed", "abacus", "mason"];

/// Write `content` as `agents.json` under `dir`, refusing documents the
/// catalog loader would reject.
pub fn write_catalog(dir: &Path, content: &str) -> Result<PathBuf> {
    Catalog::from_json_str(content).context("fixture catalog does not load")?;
    let path = dir.join("agents.json");
    std::fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_catalog_loads() {
        let catalog = Catalog::from_json_str(SMALL_CATALOG).unwrap();
        let ids: Vec<String> = catalog.agents().iter().map(|a| a.id.to_string()).collect();
        assert_eq!(ids, SMALL_CATALOG_IDS);
    }
}
