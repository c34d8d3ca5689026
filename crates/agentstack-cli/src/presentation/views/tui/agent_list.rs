use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::Palette;
use crate::presentation::formatters::{format_number, format_rating_value, star_glyphs};
use crate::presentation::view_models::{AgentCardViewModel, DirectoryViewModel};
use crate::presentation::views::agent::badge_label;

/// Directory cards as a selectable list.
pub struct AgentListView<'a> {
    model: &'a DirectoryViewModel,
    palette: Palette,
}

impl<'a> AgentListView<'a> {
    pub fn new(model: &'a DirectoryViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }

    fn title(&self) -> String {
        format!(" Showing {} of {} agents ", self.model.shown, self.model.total)
    }

    fn item(&self, card: &'a AgentCardViewModel) -> ListItem<'a> {
        let mut first = vec![
            Span::raw(if card.in_compare { "✓ " } else { "  " }),
            Span::raw(format!("{} ", card.icon)),
            Span::styled(card.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", card.subtitle), self.palette.dim()),
        ];
        if let Some(badge) = card.badge {
            first.push(Span::styled(
                format!("  {}", badge_label(badge)),
                Style::default().fg(ratatui::style::Color::Yellow),
            ));
        }

        let second = Line::from(vec![
            Span::raw("     "),
            Span::styled(star_glyphs(&card.stars), Style::default().fg(ratatui::style::Color::Yellow)),
            Span::raw(format!(
                " {} ({}) · {} · {}",
                format_rating_value(card.rating),
                format_number(card.reviews),
                card.pricing,
                card.category_name
            )),
        ]);

        ListItem::new(vec![Line::from(first), second])
    }

    pub fn build_list(self) -> List<'a> {
        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border));
        let items: Vec<ListItem> = self.model.agents.iter().map(|c| self.item(c)).collect();
        List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(self.palette.highlight))
            .highlight_symbol("▶ ")
    }
}
