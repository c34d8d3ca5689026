//! Custom assertions over the JSON envelope (`badge`, `content`,
//! `suggestions`) that every console command prints with `--format json`.

use anyhow::{Context, Result};
use serde_json::Value;

fn agents(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["agents"]
        .as_array()
        .context("Expected 'content.agents' array in JSON")
}

/// Assert that the directory result lists `expected` agents.
pub fn assert_agent_count(json: &Value, expected: usize) -> Result<()> {
    let agents = agents(json)?;
    if agents.len() != expected {
        anyhow::bail!("Expected {} agents, got {}", expected, agents.len());
    }
    Ok(())
}

/// Assert the exact agent order of a directory result.
pub fn assert_agent_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let ids = agents(json)?
        .iter()
        .enumerate()
        .map(|(i, a)| {
            a["id"]
                .as_str()
                .with_context(|| format!("Agent {} missing id", i))
        })
        .collect::<Result<Vec<_>>>()?;

    if ids != expected {
        anyhow::bail!("Expected agents {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

/// Assert that every listed agent belongs to `category`.
pub fn assert_all_in_category(json: &Value, category: &str) -> Result<()> {
    for (i, agent) in agents(json)?.iter().enumerate() {
        let actual = agent["category"]
            .as_str()
            .with_context(|| format!("Agent {} missing category", i))?;
        if actual != category {
            anyhow::bail!("Agent {} is in {} but expected {}", i, actual, category);
        }
    }
    Ok(())
}

/// Assert the status badge label.
pub fn assert_badge(json: &Value, expected: &str) -> Result<()> {
    let label = json["badge"]["label"]
        .as_str()
        .context("Expected 'badge.label' in JSON")?;
    if label != expected {
        anyhow::bail!("Expected badge {:?}, got {:?}", expected, label);
    }
    Ok(())
}
