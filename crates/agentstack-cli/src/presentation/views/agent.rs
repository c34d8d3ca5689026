use std::fmt;

use crate::presentation::formatters::style::{accent, bold, dim, highlight, positive};
use crate::presentation::formatters::{format_number, format_rating_value, star_glyphs, truncate};
use crate::presentation::view_models::{AgentCardViewModel, AgentDetailViewModel, ViewMode};
use agentstack_engine::CardBadge;

pub fn badge_label(badge: CardBadge) -> &'static str {
    match badge {
        CardBadge::Featured => "⭐ Featured",
        CardBadge::Trending => "🔥 Trending",
    }
}

/// Card tags followed by the open-source marker.
pub fn card_tags(card: &AgentCardViewModel) -> Vec<String> {
    let mut tags = card.tags.clone();
    if card.open_source {
        tags.push("Open Source".to_string());
    }
    tags
}

/// `★★★★⯪ 4.5 (1.2K)`
pub fn rating_line(card: &AgentCardViewModel) -> String {
    format!(
        "{} {} ({})",
        star_glyphs(&card.stars),
        format_rating_value(card.rating),
        format_number(card.reviews)
    )
}

/// One line per agent, sized to `width` columns.
pub fn compact_line(card: &AgentCardViewModel, width: usize) -> String {
    let marker = if card.in_compare { "✓" } else { " " };
    let badge = card.badge.map(badge_label).unwrap_or("");
    let fixed = format!(
        "{} {} {:<24} {:<12} {:<18} {:<10}",
        marker,
        card.icon,
        truncate(&card.name, 24),
        truncate(&card.category_name, 12),
        rating_line(card),
        truncate(&card.pricing, 10),
    );
    let room = width.saturating_sub(fixed.chars().count() + 1);
    if badge.is_empty() || room < badge.chars().count() {
        fixed.trim_end().to_string()
    } else {
        format!("{} {}", fixed, badge)
    }
}

/// Short multi-line card.
pub fn write_card(f: &mut fmt::Formatter, card: &AgentCardViewModel, width: usize) -> fmt::Result {
    let mut title = format!("{} {}", card.icon, bold(&card.name));
    if let Some(badge) = card.badge {
        title.push_str("  ");
        title.push_str(&highlight(badge_label(badge)));
    }
    if card.in_compare {
        title.push_str("  ");
        title.push_str(&positive("✓ compare"));
    }
    writeln!(f, "{}", title)?;
    writeln!(f, "   {}", dim(&card.subtitle))?;
    writeln!(
        f,
        "   {} · {} · {}",
        rating_line(card),
        card.pricing,
        card.category_name
    )?;
    writeln!(f, "   {}", truncate(&card.description, width.saturating_sub(3)))?;
    let tags = card_tags(card);
    if !tags.is_empty() {
        writeln!(f, "   {}", accent(&tags.join(" · ")))?;
    }
    Ok(())
}

// --------------------------------------------------------
// Agent Detail View
// --------------------------------------------------------

pub struct AgentDetailView<'a> {
    data: &'a AgentDetailViewModel,
    mode: ViewMode,
}

impl<'a> AgentDetailView<'a> {
    pub fn new(data: &'a AgentDetailViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_breakdown(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const BAR: usize = 20;
        writeln!(
            f,
            "Rating {} · {} reviews",
            format_rating_value(self.data.card.rating),
            format_number(self.data.breakdown_total)
        )?;
        for row in &self.data.breakdown {
            let filled = (row.width as usize * BAR).div_ceil(100).min(BAR);
            writeln!(
                f,
                "  {}★ {}{} {}",
                row.stars,
                "█".repeat(filled),
                "░".repeat(BAR - filled),
                row.count
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for AgentDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let card = &self.data.card;

        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", card.id);
        }

        writeln!(f, "{} {}", card.icon, bold(&card.name))?;
        writeln!(f, "{}", dim(&card.subtitle))?;
        writeln!(f)?;

        let mut meta = vec![
            format!("⭐ {}/5", format_rating_value(card.rating)),
            format!("💰 {}", card.pricing),
            format!("📁 {}", card.category_name),
            format!("📝 {} reviews", format_number(self.data.breakdown_total)),
        ];
        if let Some(date) = &self.data.launch_date {
            meta.push(format!("📅 {}", date));
        }
        if let Some(company) = &self.data.company {
            meta.push(format!("🏢 {}", company));
        }
        writeln!(f, "{}", meta.join("  "))?;
        writeln!(f)?;

        if self.mode != ViewMode::Compact {
            self.render_breakdown(f)?;
            writeln!(f)?;
        }

        writeln!(f, "{}", card.description)?;
        if !self.data.tags.is_empty() {
            writeln!(f, "{}", accent(&self.data.tags.join(" · ")))?;
        }

        if !self.data.similar.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", bold("Similar Agents"))?;
            for similar in &self.data.similar {
                writeln!(
                    f,
                    "  {:<24} {} · ⭐ {}",
                    similar.name,
                    similar.category_name,
                    format_rating_value(similar.rating)
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "🚀 {}", accent(&card.website))?;

        if self.mode == ViewMode::Verbose {
            writeln!(f)?;
            writeln!(f, "id:         {}", card.id)?;
            writeln!(f, "category:   {}", card.category)?;
            writeln!(f, "popularity: {}%", card.popularity)?;
            if let Some(logo) = &card.logo {
                writeln!(f, "logo:       {}", logo)?;
            }
        }

        Ok(())
    }
}
