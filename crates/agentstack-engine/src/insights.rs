//! Derived per-card facts: badges, popularity, star row, featured grid.

use agentstack_types::{AgentRecord, Catalog};
use serde::Serialize;

/// Reviews above this count earn the trending badge.
pub const TRENDING_REVIEWS: u64 = 500;

/// Review count that fills the popularity bar.
pub const POPULARITY_CEILING: u64 = 1500;

/// Size of the featured grid.
pub const FEATURED_LIMIT: usize = 6;

/// Tags previewed on a card before the open-source badge.
pub const CARD_TAG_PREVIEW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Star {
    Full,
    Half,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardBadge {
    Featured,
    Trending,
}

pub fn is_trending(agent: &AgentRecord) -> bool {
    agent.reviews > TRENDING_REVIEWS
}

/// Featured wins over trending; an agent shows at most one badge.
pub fn card_badge(agent: &AgentRecord) -> Option<CardBadge> {
    if agent.featured {
        Some(CardBadge::Featured)
    } else if is_trending(agent) {
        Some(CardBadge::Trending)
    } else {
        None
    }
}

/// Popularity bar fill in percent, saturating at 100.
pub fn popularity_percent(reviews: u64) -> u8 {
    let pct = (reviews as f64 / POPULARITY_CEILING as f64 * 100.0).round();
    pct.min(100.0) as u8
}

pub fn star_row(rating: f64) -> [Star; 5] {
    let mut stars = [Star::Empty; 5];
    for (i, star) in stars.iter_mut().enumerate() {
        let threshold = (i + 1) as f64;
        *star = if rating >= threshold {
            Star::Full
        } else if rating >= threshold - 0.5 {
            Star::Half
        } else {
            Star::Empty
        };
    }
    stars
}

pub fn tag_preview(agent: &AgentRecord) -> &[String] {
    let end = agent.tags.len().min(CARD_TAG_PREVIEW);
    &agent.tags[..end]
}

/// First [`FEATURED_LIMIT`] featured agents in catalog order.
pub fn featured(catalog: &Catalog) -> Vec<&AgentRecord> {
    catalog
        .agents()
        .iter()
        .filter(|a| a.featured)
        .take(FEATURED_LIMIT)
        .collect()
}

/// Headline numbers of the hero section, counted up on first sight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroStat {
    pub label: &'static str,
    pub value: u64,
}

pub fn hero_stats(catalog: &Catalog) -> Vec<HeroStat> {
    vec![
        HeroStat {
            label: "AI Agents",
            value: catalog.len() as u64,
        },
        HeroStat {
            label: "Categories",
            value: catalog.categories().len() as u64,
        },
        HeroStat {
            label: "Open Source",
            value: catalog.open_source_count() as u64,
        },
        HeroStat {
            label: "Reviews",
            value: catalog.total_reviews(),
        },
    ]
}

/// Everything a card needs beyond the raw record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardInsights {
    pub badge: Option<CardBadge>,
    pub trending: bool,
    pub open_source: bool,
    pub popularity: u8,
    pub stars: [Star; 5],
    pub launch_year: Option<String>,
}

impl CardInsights {
    pub fn of(agent: &AgentRecord) -> Self {
        Self {
            badge: card_badge(agent),
            trending: is_trending(agent),
            open_source: agent.is_open_source(),
            popularity: popularity_percent(agent.reviews),
            stars: star_row(agent.rating),
            launch_year: agent.launch_year().map(str::to_string),
        }
    }
}
