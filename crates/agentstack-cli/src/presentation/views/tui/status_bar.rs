use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::Palette;
use crate::presentation::view_models::BrowseScreenViewModel;
use agentstack_engine::MAX_COMPARE;

/// Compare tray and key hints.
pub struct StatusBarView<'a> {
    model: &'a BrowseScreenViewModel,
    palette: Palette,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a BrowseScreenViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let names = &self.model.compare_names;
        let tray = if names.is_empty() {
            Line::styled("Compare: Space to add agents", self.palette.dim())
        } else {
            let chip = Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::REVERSED);
            let mut spans = vec![Span::styled(
                format!("Compare ({}/{}): ", names.len(), MAX_COMPARE),
                Style::default().fg(self.palette.accent).add_modifier(Modifier::BOLD),
            )];
            for (i, name) in names.iter().enumerate() {
                spans.push(Span::styled(format!(" {} {} ✕ ", i + 1, name), chip));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled("  c open (1-4 remove) · x clear", self.palette.dim()));
            Line::from(spans)
        };

        let hints = Line::styled(
            "/ search · Tab filter · 1-5 sort · j/k move · Enter open · Space compare · t theme · n newsletter · q quit",
            self.palette.dim(),
        );

        Paragraph::new(vec![tray, hints])
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(self.palette.border)),
            )
            .render(area, buf);
    }
}
