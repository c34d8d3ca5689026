use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::Palette;
use crate::presentation::view_models::BrowseScreenViewModel;

/// Search box, filter chips and sort options.
pub struct FilterBarView<'a> {
    model: &'a BrowseScreenViewModel,
    palette: Palette,
}

impl<'a> FilterBarView<'a> {
    pub fn new(model: &'a BrowseScreenViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }

    fn search_line(&self) -> Line<'a> {
        let m = self.model;
        let mut spans = vec![Span::raw("🔍 ")];
        if m.search_input.is_empty() && !m.search_focused {
            spans.push(Span::styled("Search agents...  (/ or Ctrl+K)", self.palette.dim()));
        } else {
            let style = if m.search_focused {
                Style::default()
                    .fg(self.palette.text)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(self.palette.text)
            };
            spans.push(Span::styled(m.search_input.clone(), style));
            if m.search_focused {
                spans.push(Span::styled("▏", Style::default().fg(self.palette.accent)));
            }
        }
        if m.search_pending {
            spans.push(Span::styled("  …", self.palette.dim()));
        }
        Line::from(spans)
    }

    fn chip(&self, label: String, active: bool) -> Span<'a> {
        if active {
            Span::styled(
                label,
                Style::default()
                    .fg(Color::White)
                    .bg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, self.palette.dim())
        }
    }
}

impl<'a> Widget for FilterBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut filters = Vec::new();
        for filter in &self.model.filters {
            filters.push(self.chip(format!(" {} {} ", filter.label, filter.count), filter.active));
            filters.push(Span::raw(" "));
        }

        let mut sorts = vec![Span::styled("Sort: ", self.palette.dim())];
        for (i, sort) in self.model.sorts.iter().enumerate() {
            sorts.push(self.chip(format!(" {} {} ", i + 1, sort.label), sort.active));
            sorts.push(Span::raw(" "));
        }

        Paragraph::new(vec![self.search_line(), Line::from(filters), Line::from(sorts)])
            .render(area, buf);
    }
}
