use agentstack_types::{AgentRecord, Catalog};

/// Normalized search needle: trimmed and lower-cased.
///
/// An empty needle means "no search".
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether `agent` matches an already-normalized `needle`.
///
/// Searched fields: name, description, tagline, category id, category display
/// name, company and every tag.
pub fn matches_query(agent: &AgentRecord, needle: &str, catalog: &Catalog) -> bool {
    if needle.is_empty() {
        return true;
    }

    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&agent.name)
        || contains(&agent.description)
        || agent.tagline.as_deref().is_some_and(contains)
        || contains(&agent.category)
        || contains(catalog.category_name(&agent.category))
        || agent.company.as_deref().is_some_and(contains)
        || agent.tags.iter().any(|t| contains(t))
}

/// Keep the agents matching `query`, preserving order.
pub fn apply_search<'a>(
    agents: &[&'a AgentRecord],
    query: &str,
    catalog: &Catalog,
) -> Vec<&'a AgentRecord> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return agents.to_vec();
    }
    agents
        .iter()
        .copied()
        .filter(|a| matches_query(a, &needle, catalog))
        .collect()
}
