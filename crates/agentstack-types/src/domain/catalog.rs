use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::{AgentId, AgentRecord, CategoryRecord, FALLBACK_ICON};
use crate::raw::RawCatalog;
use crate::{Error, Result};

/// Read-only store of agents and categories.
///
/// Construction validates the data contract; afterwards the catalog never
/// changes for the lifetime of the session.
#[derive(Debug, Clone)]
pub struct Catalog {
    agents: Vec<AgentRecord>,
    categories: Vec<CategoryRecord>,
    by_id: HashMap<AgentId, usize>,
}

impl Catalog {
    /// Build a catalog from canonical records.
    ///
    /// Category counts are recomputed from `agents`.
    pub fn new(mut categories: Vec<CategoryRecord>, agents: Vec<AgentRecord>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(agents.len());
        for (index, agent) in agents.iter().enumerate() {
            check_slug("agent", agent.id.as_str())?;
            if agent.name.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!(
                    "agent '{}' has an empty name",
                    agent.id
                )));
            }
            if by_id.insert(agent.id.clone(), index).is_some() {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate agent id '{}'",
                    agent.id
                )));
            }
        }

        let mut seen_categories = HashSet::new();
        for category in &mut categories {
            check_slug("category", &category.id)?;
            if !seen_categories.insert(category.id.clone()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }
            let derived = agents.iter().filter(|a| a.category == category.id).count();
            if category.count != derived {
                tracing::debug!(
                    category = %category.id,
                    declared = category.count,
                    derived,
                    "category count recomputed from agents"
                );
            }
            category.count = derived;
        }

        for agent in &agents {
            if !seen_categories.contains(&agent.category) {
                tracing::debug!(agent = %agent.id, category = %agent.category, "agent references unknown category");
            }
        }

        Ok(Self {
            agents,
            categories,
            by_id,
        })
    }

    /// Parse and normalize a JSON catalog document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        raw.normalize()
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            agents = catalog.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn agents(&self) -> &[AgentRecord] {
        &self.agents
    }

    pub fn categories(&self) -> &[CategoryRecord] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agent(&self, id: &AgentId) -> Option<&AgentRecord> {
        self.by_id.get(id).map(|&index| &self.agents[index])
    }

    pub fn contains(&self, id: &AgentId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn category(&self, id: &str) -> Option<&CategoryRecord> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Display name of a category, or the raw id when unknown.
    pub fn category_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.category(id).map(|c| c.name.as_str()).unwrap_or(id)
    }

    /// Icon of a category, or the generic robot glyph when unknown.
    pub fn category_icon(&self, id: &str) -> &str {
        self.category(id)
            .map(|c| c.icon.as_str())
            .unwrap_or(FALLBACK_ICON)
    }

    pub fn open_source_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_open_source()).count()
    }

    pub fn total_reviews(&self) -> u64 {
        self.agents.iter().map(|a| a.reviews).sum()
    }
}

/// Ids name pages of the static site, so they are limited to
/// `[A-Za-z0-9_-]`.
fn check_slug(kind: &str, id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidCatalog(format!(
            "{} id '{}' may only contain letters, digits, '-' and '_'",
            kind, id
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(id: &str, category: &str) -> AgentRecord {
        AgentRecord {
            id: AgentId::new(id),
            name: id.to_uppercase(),
            category: category.to_string(),
            tags: vec![],
            rating: 4.0,
            reviews: 100,
            pricing: "Free".to_string(),
            featured: false,
            launch_date: None,
            description: "desc".to_string(),
            tagline: None,
            company: None,
            website: None,
            logo: None,
        }
    }

    fn category(id: &str, declared: usize) -> CategoryRecord {
        CategoryRecord {
            id: id.to_string(),
            name: format!("{} name", id),
            icon: "💻".to_string(),
            description: String::new(),
            count: declared,
        }
    }

    #[test]
    fn derives_category_counts() {
        let catalog = Catalog::new(
            vec![category("coding", 99), category("sales", 0)],
            vec![agent("a", "coding"), agent("b", "coding"), agent("c", "sales")],
        )
        .unwrap();

        assert_eq!(catalog.category("coding").unwrap().count, 2);
        assert_eq!(catalog.category("sales").unwrap().count, 1);
    }

    #[test]
    fn rejects_duplicate_agent_ids() {
        let err = Catalog::new(vec![], vec![agent("a", "x"), agent("a", "y")]).unwrap_err();
        assert!(err.to_string().contains("duplicate agent id 'a'"));
    }

    #[test]
    fn rejects_empty_names() {
        let mut nameless = agent("a", "x");
        nameless.name = "  ".to_string();
        assert!(Catalog::new(vec![], vec![nameless]).is_err());
    }

    #[test]
    fn unknown_category_falls_back() {
        let catalog = Catalog::new(vec![category("coding", 0)], vec![agent("a", "mystery")]).unwrap();
        assert_eq!(catalog.category_name("mystery"), "mystery");
        assert_eq!(catalog.category_icon("mystery"), FALLBACK_ICON);
        assert_eq!(catalog.category_name("coding"), "coding name");
    }

    #[test]
    fn looks_up_agents_by_id() {
        let catalog = Catalog::new(vec![], vec![agent("a", "x"), agent("b", "x")]).unwrap();
        assert_eq!(catalog.agent(&AgentId::new("b")).unwrap().name, "B");
        assert!(catalog.agent(&AgentId::new("zzz")).is_none());
    }

    #[test]
    fn rejects_ids_that_are_not_slugs() {
        for id in ["", "../../escaped", "a/b", "a\\b", "two words", "dot.ted"] {
            let err = Catalog::new(vec![], vec![agent(id, "x")]).unwrap_err();
            assert!(err.to_string().contains("may only contain"), "{}", id);
        }
        let err = Catalog::new(vec![category("../up", 0)], vec![]).unwrap_err();
        assert!(err.to_string().contains("category id '../up'"));
        assert!(Catalog::new(vec![category("dev_ops-2", 0)], vec![agent("A-1_b", "x")]).is_ok());
    }
}
