//! Raw catalog documents and the single normalization step.
//!
//! Catalog sources drifted over time: popularity is stored as `reviews` or
//! `views`, recency as `launchDate` (string) or `year` (integer), the link as
//! `website` or `url`, and ids as strings or integers. Everything past this
//! module sees only the canonical [`AgentRecord`] shape.

use serde::Deserialize;

use crate::domain::{AgentId, AgentRecord, Catalog, CategoryRecord};
use crate::{Error, Result};

/// Pricing shown when a record carries none.
pub const MISSING_PRICING: &str = "—";

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for AgentId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => AgentId::new(s.trim()),
            RawId::Number(n) => AgentId::new(n.to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawYear {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub categories: Vec<RawCategoryRecord>,
    #[serde(default)]
    pub agents: Vec<RawAgentRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCategoryRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAgentRecord {
    pub id: RawId,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u64>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub pricing: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub launch_date: Option<String>,
    #[serde(default)]
    pub year: Option<RawYear>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl RawCatalog {
    pub fn normalize(self) -> Result<Catalog> {
        let categories = self
            .categories
            .into_iter()
            .map(RawCategoryRecord::normalize)
            .collect();
        let agents = self
            .agents
            .into_iter()
            .map(RawAgentRecord::normalize)
            .collect::<Result<Vec<_>>>()?;
        Catalog::new(categories, agents)
    }
}

impl RawCategoryRecord {
    pub fn normalize(self) -> CategoryRecord {
        CategoryRecord {
            id: self.id.trim().to_string(),
            name: self.name,
            icon: non_empty(self.icon).unwrap_or_else(|| crate::FALLBACK_ICON.to_string()),
            description: self.description.unwrap_or_default(),
            count: self.count.unwrap_or(0),
        }
    }
}

impl RawAgentRecord {
    pub fn normalize(self) -> Result<AgentRecord> {
        let id = AgentId::from(self.id);
        if id.as_str().is_empty() {
            return Err(Error::InvalidCatalog(format!(
                "agent '{}' has an empty id",
                self.name
            )));
        }

        let description = self.description.ok_or_else(|| {
            Error::InvalidCatalog(format!("agent '{}' is missing a description", id))
        })?;

        let rating = match self.rating {
            None => 0.0,
            Some(r) if !r.is_finite() => {
                return Err(Error::InvalidCatalog(format!(
                    "agent '{}' has a non-numeric rating",
                    id
                )));
            }
            Some(r) if !(0.0..=5.0).contains(&r) => {
                tracing::warn!(agent = %id, rating = r, "rating outside [0, 5], clamping");
                r.clamp(0.0, 5.0)
            }
            Some(r) => r,
        };

        let launch_date = non_empty(self.launch_date).or(match self.year {
            Some(RawYear::Number(y)) => Some(y.to_string()),
            Some(RawYear::Text(y)) => non_empty(Some(y)),
            None => None,
        });

        Ok(AgentRecord {
            id,
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            tags: self.tags.unwrap_or_default(),
            rating,
            reviews: self.reviews.or(self.views).unwrap_or(0),
            pricing: non_empty(self.pricing).unwrap_or_else(|| MISSING_PRICING.to_string()),
            featured: self.featured.unwrap_or(false),
            launch_date,
            description,
            tagline: non_empty(self.tagline),
            company: non_empty(self.company),
            website: non_empty(self.website).or(non_empty(self.url)),
            logo: non_empty(self.logo),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RawAgentRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn integer_ids_become_strings() {
        let agent = parse(r#"{"id": 7, "name": "Seven", "category": "x", "description": "d"}"#)
            .normalize()
            .unwrap();
        assert_eq!(agent.id.as_str(), "7");
    }

    #[test]
    fn views_and_year_and_url_are_folded_in() {
        let agent = parse(
            r#"{"id": "a", "name": "A", "category": "x", "description": "d",
                "views": 900, "year": 2022, "url": "https://a.dev"}"#,
        )
        .normalize()
        .unwrap();
        assert_eq!(agent.reviews, 900);
        assert_eq!(agent.launch_date.as_deref(), Some("2022"));
        assert_eq!(agent.website.as_deref(), Some("https://a.dev"));
    }

    #[test]
    fn canonical_fields_win_over_drifted_ones() {
        let agent = parse(
            r#"{"id": "a", "name": "A", "category": "x", "description": "d",
                "reviews": 10, "views": 900, "launchDate": "2024-01", "year": 2020,
                "website": "https://w", "url": "https://u"}"#,
        )
        .normalize()
        .unwrap();
        assert_eq!(agent.reviews, 10);
        assert_eq!(agent.launch_date.as_deref(), Some("2024-01"));
        assert_eq!(agent.website.as_deref(), Some("https://w"));
    }

    #[test]
    fn missing_optionals_get_neutral_defaults() {
        let agent = parse(r#"{"id": "a", "name": "A", "category": "x", "description": "d", "logo": ""}"#)
            .normalize()
            .unwrap();
        assert_eq!(agent.rating, 0.0);
        assert_eq!(agent.reviews, 0);
        assert_eq!(agent.pricing, MISSING_PRICING);
        assert!(!agent.featured);
        assert!(agent.tags.is_empty());
        assert!(agent.logo.is_none());
    }

    #[test]
    fn description_is_required() {
        let err = parse(r#"{"id": "a", "name": "A", "category": "x"}"#)
            .normalize()
            .unwrap_err();
        assert!(err.to_string().contains("missing a description"));
    }

    #[test]
    fn out_of_range_rating_is_clamped() {
        let agent = parse(r#"{"id": "a", "name": "A", "category": "x", "description": "d", "rating": 7.5}"#)
            .normalize()
            .unwrap();
        assert_eq!(agent.rating, 5.0);
    }
}
