use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::Palette;
use crate::presentation::formatters::{format_number, format_rating_value};
use crate::presentation::view_models::AgentDetailViewModel;

const BAR: usize = 24;

/// Detail modal for one agent.
pub struct AgentDetailPanelView<'a> {
    model: &'a AgentDetailViewModel,
    palette: Palette,
}

impl<'a> AgentDetailPanelView<'a> {
    pub fn new(model: &'a AgentDetailViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let d = self.model;
        let card = &d.card;
        let label = |s: &'static str| Span::styled(s, self.palette.dim());

        let mut lines = vec![
            Line::from(vec![
                Span::raw(format!("{} ", card.icon)),
                Span::styled(card.name.as_str(), self.palette.title()),
            ]),
            Line::styled(card.subtitle.as_str(), self.palette.dim()),
            Line::raw(""),
        ];

        let mut meta = vec![
            label("⭐ "),
            Span::raw(format!("{}/5   ", format_rating_value(card.rating))),
            label("💰 "),
            Span::raw(format!("{}   ", card.pricing)),
            label("📁 "),
            Span::raw(format!("{}   ", card.category_name)),
            label("📝 "),
            Span::raw(format!("{} reviews", format_number(d.breakdown_total))),
        ];
        if let Some(date) = &d.launch_date {
            meta.push(label("   📅 "));
            meta.push(Span::raw(date.as_str()));
        }
        if let Some(company) = &d.company {
            meta.push(label("   🏢 "));
            meta.push(Span::raw(company.as_str()));
        }
        lines.push(Line::from(meta));
        lines.push(Line::raw(""));

        for row in &d.breakdown {
            let filled = (row.width as usize * BAR).div_ceil(100).min(BAR);
            lines.push(Line::from(vec![
                Span::raw(format!("{}★ ", row.stars)),
                Span::styled("█".repeat(filled), Style::default().fg(Color::Yellow)),
                Span::styled("░".repeat(BAR - filled), self.palette.dim()),
                Span::raw(format!(" {}", row.count)),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::raw(card.description.as_str()));

        if !d.tags.is_empty() {
            lines.push(Line::styled(
                d.tags.join(" · "),
                Style::default().fg(Color::Cyan),
            ));
        }

        if !d.similar.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                "Similar Agents",
                Style::default().add_modifier(Modifier::BOLD),
            ));
            for (i, similar) in d.similar.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), self.palette.title()),
                    Span::raw(similar.name.as_str()),
                    Span::styled(
                        format!("  {} · ⭐ {}", similar.category_name, format_rating_value(similar.rating)),
                        self.palette.dim(),
                    ),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            label("🚀 "),
            Span::styled(card.website.as_str(), Style::default().fg(Color::Cyan)),
        ]));

        let compare = if card.in_compare {
            "a remove from compare"
        } else {
            "a add to compare"
        };
        lines.push(Line::styled(
            format!("{}  ·  1-3 similar  ·  Esc close", compare),
            self.palette.dim(),
        ));
        lines
    }
}

impl<'a> Widget for AgentDetailPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .title(" Agent ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.accent))
            .style(self.palette.base());
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
