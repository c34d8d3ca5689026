use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::{Palette, hex_color};
use crate::presentation::view_models::DecorViewModel;

/// Testimonial carousel page and the live activity feed.
pub struct DecorPanelView<'a> {
    model: &'a DecorViewModel,
    palette: Palette,
}

impl<'a> DecorPanelView<'a> {
    pub fn new(model: &'a DecorViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }

    fn render_testimonials(&self, area: Rect, buf: &mut Buffer) {
        let dots: String = (0..self.model.page_count)
            .map(|i| if i == self.model.page { '●' } else { '○' })
            .collect();
        let block = Block::default()
            .title(" Loved by builders ")
            .title_bottom(Line::from(format!(" {} ", dots)).centered())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border));
        let inner = block.inner(area);
        block.render(area, buf);

        let count = self.model.testimonials.len().max(1) as u32;
        let slots = Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count))).split(inner);
        for (t, slot) in self.model.testimonials.iter().zip(slots.iter()) {
            let lines = vec![
                Line::styled("★".repeat(t.stars as usize), Style::default().fg(ratatui::style::Color::Yellow)),
                Line::raw(format!("\"{}\"", t.text)),
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", t.initial),
                        Style::default().bg(hex_color(&t.color)).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" {}", t.name)),
                    Span::styled(format!(" · {}", t.role), self.palette.dim()),
                ]),
            ];
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .render(*slot, buf);
        }
    }

    fn render_activity(&self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .model
            .activity
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(hex_color(&item.color))),
                    Span::raw(item.text.as_str()),
                ])
            })
            .collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" Live ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.border)),
            )
            .render(area, buf);
    }
}

impl<'a> Widget for DecorPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [testimonials, activity] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(42)]).areas(area);
        self.render_testimonials(testimonials, buf);
        self.render_activity(activity, buf);
    }
}
