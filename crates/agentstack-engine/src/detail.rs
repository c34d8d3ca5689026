use agentstack_types::{AgentRecord, Catalog};
use serde::Serialize;

use crate::insights::CardInsights;

/// Similar agents suggested on the detail view.
pub const SIMILAR_LIMIT: usize = 3;

/// Review base used for the breakdown when an agent has none.
pub const BREAKDOWN_FALLBACK_TOTAL: u64 = 100;

/// Share of reviews per star level, 5 stars first.
pub const BREAKDOWN_SHARES: [(u8, f64); 5] = [(5, 0.65), (4, 0.20), (3, 0.08), (2, 0.04), (1, 0.03)];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    pub stars: u8,
    pub count: u64,
    /// Bar fill in percent of `total`
    pub width: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingBreakdown {
    pub total: u64,
    pub rows: Vec<BreakdownRow>,
}

impl RatingBreakdown {
    pub fn for_reviews(reviews: u64) -> Self {
        let total = if reviews == 0 {
            BREAKDOWN_FALLBACK_TOTAL
        } else {
            reviews
        };

        let rows = BREAKDOWN_SHARES
            .iter()
            .map(|&(stars, share)| {
                let count = (total as f64 * share).round() as u64;
                let width = ((count as f64 / total as f64) * 100.0).round().min(100.0) as u8;
                BreakdownRow {
                    stars,
                    count,
                    width,
                }
            })
            .collect();

        Self { total, rows }
    }
}

/// Up to [`SIMILAR_LIMIT`] other agents from the same category, catalog order.
pub fn similar_agents<'a>(catalog: &'a Catalog, agent: &AgentRecord) -> Vec<&'a AgentRecord> {
    catalog
        .agents()
        .iter()
        .filter(|other| other.id != agent.id && other.category == agent.category)
        .take(SIMILAR_LIMIT)
        .collect()
}

/// Everything the agent detail view shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentDetail<'a> {
    pub agent: &'a AgentRecord,
    pub category_name: &'a str,
    pub icon: &'a str,
    /// Tagline, or the category name when the agent has none
    pub subtitle: &'a str,
    pub website: &'a str,
    pub insights: CardInsights,
    pub breakdown: RatingBreakdown,
    pub similar: Vec<&'a AgentRecord>,
}

pub fn agent_detail<'a>(catalog: &'a Catalog, agent: &'a AgentRecord) -> AgentDetail<'a> {
    let category_name = catalog.category_name(&agent.category);
    AgentDetail {
        agent,
        category_name,
        icon: catalog.category_icon(&agent.category),
        subtitle: agent.tagline.as_deref().unwrap_or(category_name),
        website: agent.website.as_deref().unwrap_or("#"),
        insights: CardInsights::of(agent),
        breakdown: RatingBreakdown::for_reviews(agent.reviews),
        similar: similar_agents(catalog, agent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{agent, catalog_of};
    use agentstack_types::AgentId;

    #[test]
    fn breakdown_uses_fixed_shares() {
        let breakdown = RatingBreakdown::for_reviews(1000);
        let counts: Vec<u64> = breakdown.rows.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![650, 200, 80, 40, 30]);
        let widths: Vec<u8> = breakdown.rows.iter().map(|r| r.width).collect();
        assert_eq!(widths, vec![65, 20, 8, 4, 3]);
    }

    #[test]
    fn breakdown_falls_back_to_hundred() {
        let breakdown = RatingBreakdown::for_reviews(0);
        assert_eq!(breakdown.total, 100);
        assert_eq!(breakdown.rows[0].count, 65);
    }

    #[test]
    fn similar_excludes_self_and_caps_at_three() {
        let catalog = catalog_of(vec![
            agent("a", "coding"),
            agent("b", "sales"),
            agent("c", "coding"),
            agent("d", "coding"),
            agent("e", "coding"),
            agent("f", "coding"),
        ]);
        let a = catalog.agent(&AgentId::new("a")).unwrap();
        let ids: Vec<&str> = similar_agents(&catalog, a).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "d", "e"]);

        let b = catalog.agent(&AgentId::new("b")).unwrap();
        assert!(similar_agents(&catalog, b).is_empty());
    }

    #[test]
    fn detail_falls_back_for_missing_fields() {
        let catalog = catalog_of(vec![agent("a", "coding")]);
        let a = catalog.agent(&AgentId::new("a")).unwrap();
        let detail = agent_detail(&catalog, a);
        assert_eq!(detail.subtitle, "coding name");
        assert_eq!(detail.website, "#");
    }
}
