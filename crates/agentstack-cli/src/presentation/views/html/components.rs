//! Markup fragments shared by the site pages.

use super::escape::{escape, safe_url};
use crate::presentation::formatters::{format_cell, format_number, format_rating_value, star_glyphs};
use crate::presentation::presenters::site::{agent_page_path, directory_page_path_str};
use crate::presentation::view_models::{
    AgentCardViewModel, AgentDetailViewModel, CategoryTileViewModel, CompareViewModel,
    DirectoryViewModel, FilterCountViewModel, HeroStatViewModel, SortOptionViewModel,
};
use crate::presentation::views::agent::{badge_label, card_tags};

/// Relative prefix from a page at `path` back to the site root.
pub fn root_prefix(path: &str) -> String {
    "../".repeat(path.matches('/').count())
}

/// Logo with the category icon as fallback content when it fails to load.
pub fn logo(logo: Option<&str>, icon: &str, class: &str) -> String {
    match logo.map(safe_url) {
        Some(src) if src != "#" => format!(
            "<object class=\"{class}\" data=\"{}\" type=\"image/png\" aria-label=\"logo\"><span class=\"logo-fallback\">{}</span></object>",
            escape(src),
            escape(icon)
        ),
        _ => format!("<span class=\"{class} logo-fallback\">{}</span>", escape(icon)),
    }
}

pub fn hero(stats: &[HeroStatViewModel]) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"hero\">\n");
    html.push_str("<h1>Discover the best AI agents</h1>\n");
    html.push_str("<p class=\"hero-sub\">Browse, compare and pick the right agent for the job.</p>\n");
    html.push_str("<div class=\"hero-stats\">\n");
    for stat in stats {
        html.push_str(&format!(
            "<div class=\"hero-stat\"><strong>{}</strong><span>{}</span></div>\n",
            format_number(stat.value),
            escape(&stat.label)
        ));
    }
    html.push_str("</div>\n</section>\n");
    html
}

pub fn card(card: &AgentCardViewModel, root: &str) -> String {
    let mut html = String::new();
    let class = if card.in_compare {
        "agent-card in-compare"
    } else {
        "agent-card"
    };
    html.push_str(&format!(
        "<article class=\"{}\" id=\"agent-{}\">\n",
        class,
        escape(&card.id)
    ));
    html.push_str("<div class=\"card-header\">");
    html.push_str(&logo(card.logo.as_deref(), &card.icon, "card-logo"));
    html.push_str(&format!(
        "<div><h3><a href=\"{}{}\">{}</a></h3><p class=\"card-subtitle\">{}</p></div>",
        root,
        escape(&agent_page_path(&card.id)),
        escape(&card.name),
        escape(&card.subtitle)
    ));
    if let Some(badge) = card.badge {
        html.push_str(&format!("<span class=\"card-badge\">{}</span>", badge_label(badge)));
    }
    html.push_str("</div>\n");

    html.push_str(&format!(
        "<div class=\"card-rating\"><span class=\"stars\">{}</span> <span class=\"rating\">{}</span> <span class=\"reviews\">({})</span></div>\n",
        star_glyphs(&card.stars),
        format_rating_value(card.rating),
        format_number(card.reviews)
    ));
    html.push_str(&format!("<p class=\"card-desc\">{}</p>\n", escape(&card.description)));

    let tags = card_tags(card);
    if !tags.is_empty() {
        html.push_str("<div class=\"card-tags\">");
        for tag in &tags {
            html.push_str(&format!("<span class=\"tag\">{}</span>", escape(tag)));
        }
        html.push_str("</div>\n");
    }

    html.push_str(&format!(
        "<div class=\"card-meta\"><span class=\"pricing\">{}</span><span class=\"popularity\" title=\"{}% popularity\"><span class=\"bar\" style=\"width:{}%\"></span></span>",
        escape(&card.pricing),
        card.popularity,
        card.popularity
    ));
    if let Some(year) = &card.launch_year {
        html.push_str(&format!("<span class=\"launch\">Since {}</span>", escape(year)));
    }
    html.push_str("</div>\n");
    if card.in_compare {
        html.push_str("<span class=\"compare-flag\">✓ In compare</span>\n");
    }
    html.push_str("</article>\n");
    html
}

pub fn card_grid(cards: &[AgentCardViewModel], root: &str) -> String {
    let mut html = String::from("<div class=\"agent-grid\">\n");
    for c in cards {
        html.push_str(&card(c, root));
    }
    html.push_str("</div>\n");
    html
}

pub fn category_tiles(tiles: &[CategoryTileViewModel], root: &str) -> String {
    let mut html = String::from("<section class=\"categories\">\n<h2>Browse by category</h2>\n<div class=\"category-grid\">\n");
    for tile in tiles {
        let noun = if tile.count == 1 { "agent" } else { "agents" };
        html.push_str(&format!(
            "<a class=\"category-tile\" href=\"{}{}\"><span class=\"category-icon\">{}</span><h3>{}</h3><p>{}</p><span class=\"category-count\">{} {}</span></a>\n",
            root,
            escape(&directory_page_path_str(&tile.id, "default")),
            escape(&tile.icon),
            escape(&tile.name),
            escape(&tile.description),
            tile.count,
            noun
        ));
    }
    html.push_str("</div>\n</section>\n");
    html
}

/// Filter and sort bars linking to the other directory pages.
pub fn toolbar(
    filters: &[FilterCountViewModel],
    sorts: &[SortOptionViewModel],
    directory: &DirectoryViewModel,
    root: &str,
) -> String {
    // Unrecognized keys have no pages of their own; the first option
    // ("all", "default") stands in for them.
    let current_filter = filters
        .iter()
        .find(|f| f.id == directory.filter)
        .or_else(|| filters.first())
        .map_or("", |f| f.id.as_str());
    let current_sort = sorts
        .iter()
        .find(|s| s.id == directory.sort)
        .or_else(|| sorts.first())
        .map_or("", |s| s.id.as_str());

    let mut html = String::from("<nav class=\"filter-bar\" aria-label=\"Filters\">\n");
    for filter in filters {
        let active = filter.id == directory.filter;
        html.push_str(&format!(
            "<a class=\"filter-btn{}\" href=\"{}{}\">{} <span class=\"count\">{}</span></a>\n",
            if active { " active" } else { "" },
            root,
            escape(&directory_page_path_str(&filter.id, current_sort)),
            escape(&filter.label),
            filter.count
        ));
    }
    html.push_str("</nav>\n<nav class=\"sort-bar\" aria-label=\"Sort\">\n");
    for sort in sorts {
        let active = sort.id == directory.sort;
        html.push_str(&format!(
            "<a class=\"sort-btn{}\" href=\"{}{}\">{}</a>\n",
            if active { " active" } else { "" },
            root,
            escape(&directory_page_path_str(current_filter, &sort.id)),
            escape(&sort.label)
        ));
    }
    html.push_str("</nav>\n");
    html
}

pub fn directory(directory: &DirectoryViewModel, root: &str) -> String {
    let mut html = String::from("<section class=\"directory\" id=\"directory\">\n");
    if !directory.query.is_empty() {
        html.push_str(&format!(
            "<p class=\"search-query\">Search: <mark>{}</mark></p>\n",
            escape(&directory.query)
        ));
    }
    html.push_str(&format!(
        "<p class=\"results-count\">Showing {} of {} agents</p>\n",
        directory.shown, directory.total
    ));
    match &directory.empty {
        Some(empty) => html.push_str(&format!(
            "<div class=\"empty-state\"><span class=\"empty-icon\">🔍</span><h3>{}</h3><p>Try different keywords or clear filters</p></div>\n",
            escape(&empty.message)
        )),
        None => html.push_str(&card_grid(&directory.agents, root)),
    }
    html.push_str("</section>\n");
    html
}

pub fn detail(detail: &AgentDetailViewModel, root: &str) -> String {
    let card = &detail.card;
    let mut html = String::from("<article class=\"agent-detail\">\n<header class=\"detail-header\">");
    html.push_str(&logo(card.logo.as_deref(), &card.icon, "detail-logo"));
    html.push_str(&format!(
        "<div><h1>{}</h1><p class=\"detail-subtitle\">{}</p></div></header>\n",
        escape(&card.name),
        escape(&card.subtitle)
    ));

    html.push_str("<ul class=\"detail-meta\">\n");
    html.push_str(&format!("<li>⭐ {}/5</li>\n", format_rating_value(card.rating)));
    html.push_str(&format!("<li>💰 {}</li>\n", escape(&card.pricing)));
    html.push_str(&format!("<li>📁 {}</li>\n", escape(&card.category_name)));
    html.push_str(&format!(
        "<li>📝 {} reviews</li>\n",
        format_number(detail.breakdown_total)
    ));
    if let Some(date) = &detail.launch_date {
        html.push_str(&format!("<li>📅 {}</li>\n", escape(date)));
    }
    if let Some(company) = &detail.company {
        html.push_str(&format!("<li>🏢 {}</li>\n", escape(company)));
    }
    html.push_str("</ul>\n");

    html.push_str("<section class=\"rating-breakdown\">\n");
    for row in &detail.breakdown {
        html.push_str(&format!(
            "<div class=\"breakdown-row\"><span>{}★</span><span class=\"breakdown-bar\"><span class=\"fill\" style=\"width:{}%\"></span></span><span>{}</span></div>\n",
            row.stars, row.width, row.count
        ));
    }
    html.push_str("</section>\n");

    html.push_str(&format!("<p class=\"detail-desc\">{}</p>\n", escape(&card.description)));
    if !detail.tags.is_empty() {
        html.push_str("<div class=\"card-tags\">");
        for tag in &detail.tags {
            html.push_str(&format!("<span class=\"tag\">{}</span>", escape(tag)));
        }
        html.push_str("</div>\n");
    }

    if !detail.similar.is_empty() {
        html.push_str("<section class=\"similar\">\n<h2>Similar Agents</h2>\n<ul>\n");
        for similar in &detail.similar {
            html.push_str(&format!(
                "<li><a href=\"{}{}\">{}</a> <span>{}</span> <span>⭐ {}</span></li>\n",
                root,
                escape(&agent_page_path(&similar.id)),
                escape(&similar.name),
                escape(&similar.category_name),
                format_rating_value(similar.rating)
            ));
        }
        html.push_str("</ul>\n</section>\n");
    }

    html.push_str(&format!(
        "<p class=\"detail-actions\"><a class=\"btn-primary\" href=\"{}\" rel=\"noopener\">Visit website 🚀</a></p>\n",
        escape(safe_url(&card.website))
    ));
    html.push_str("</article>\n");
    html
}

pub fn compare_table(compare: &CompareViewModel, root: &str) -> String {
    let mut html = String::from("<table class=\"compare-table\">\n<thead><tr><th></th>");
    for column in &compare.columns {
        html.push_str(&format!(
            "<th><a href=\"{}{}\">{} {}</a></th>",
            root,
            escape(&agent_page_path(&column.id)),
            escape(&column.icon),
            escape(&column.name)
        ));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in &compare.rows {
        html.push_str(&format!("<tr><th>{}</th>", escape(&row.label)));
        for cell in &row.cells {
            html.push_str(&format!("<td>{}</td>", escape(&format_cell(cell))));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}
