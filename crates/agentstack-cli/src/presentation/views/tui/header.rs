use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::Palette;
use crate::presentation::formatters::format_number;
use crate::presentation::view_models::BrowseScreenViewModel;

/// Title, hero counters and the countdown / live counter.
pub struct HeaderView<'a> {
    model: &'a BrowseScreenViewModel,
    palette: Palette,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a BrowseScreenViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme_icon = if self.model.theme == "light" { "☀️" } else { "🌙" };
        let block = Block::default()
            .title(Line::from(vec![
                Span::styled(" 🤖 AgentStack ", self.palette.title()),
                Span::styled(format!("{} ", theme_icon), self.palette.dim()),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border));
        let inner = block.inner(area);
        block.render(area, buf);

        let [stats_area, live_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(44)]).areas(inner);

        let mut spans = Vec::new();
        for stat in &self.model.hero {
            spans.push(Span::styled(
                format_number(stat.value),
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {}   ", stat.label), self.palette.dim()));
        }
        Paragraph::new(Line::from(spans)).render(stats_area, buf);

        if let Some(decor) = &self.model.decorations {
            let lines = vec![
                Line::from(vec![
                    Span::styled("⏰ Deal ends in ", self.palette.dim()),
                    Span::styled(
                        decor.countdown.clone(),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                ])
                .right_aligned(),
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(Color::Green)),
                    Span::raw(format!("{} people browsing now", format_number(decor.live_count.into()))),
                ])
                .right_aligned(),
            ];
            Paragraph::new(lines).render(live_area, buf);
        }
    }
}
