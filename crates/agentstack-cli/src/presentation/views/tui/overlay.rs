//! Widgets drawn over the main layout.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::{Palette, hex_color};
use crate::presentation::view_models::ConfettiParticleViewModel;

pub struct ToastView<'a> {
    message: &'a str,
    palette: Palette,
}

impl<'a> ToastView<'a> {
    pub fn new(message: &'a str, palette: Palette) -> Self {
        Self { message, palette }
    }

    /// Bottom-centered area sized to the message.
    pub fn area(&self, frame: Rect) -> Rect {
        let width = (self.message.chars().count() as u16 + 4).min(frame.width);
        let height = 3.min(frame.height);
        Rect {
            x: frame.x + (frame.width - width) / 2,
            y: frame.y + frame.height.saturating_sub(height + 3),
            width,
            height,
        }
    }
}

impl<'a> Widget for ToastView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Paragraph::new(Line::raw(self.message).centered())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.accent))
                    .style(self.palette.base().add_modifier(Modifier::BOLD)),
            )
            .render(area, buf);
    }
}

/// Newsletter prompt; `input` is the email typed so far.
pub struct NewsletterView<'a> {
    input: &'a str,
    palette: Palette,
}

impl<'a> NewsletterView<'a> {
    pub fn new(input: &'a str, palette: Palette) -> Self {
        Self { input, palette }
    }
}

impl<'a> Widget for NewsletterView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let lines = vec![
            Line::raw("Get the weekly agent digest"),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Email: ", self.palette.dim()),
                Span::raw(self.input),
                Span::styled("▏", Style::default().fg(self.palette.accent)),
            ]),
            Line::raw(""),
            Line::styled("Enter subscribe · Esc cancel", self.palette.dim()),
        ];
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" 📬 Newsletter ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.accent))
                    .style(self.palette.base()),
            )
            .render(area, buf);
    }
}

/// Falling particles; `x` is a percentage of the width and `progress`
/// the fraction of the fall.
pub struct ConfettiView<'a> {
    particles: &'a [ConfettiParticleViewModel],
}

impl<'a> ConfettiView<'a> {
    pub fn new(particles: &'a [ConfettiParticleViewModel]) -> Self {
        Self { particles }
    }
}

impl<'a> Widget for ConfettiView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for p in self.particles {
            let x = area.x + ((p.x / 100.0) * f32::from(area.width - 1)).round() as u16;
            let y = area.y + (p.progress.clamp(0.0, 1.0) * f32::from(area.height - 1)).round() as u16;
            if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                cell.set_symbol(if p.round { "●" } else { "■" })
                    .set_style(Style::default().fg(hex_color(&p.color)));
            }
        }
    }
}

/// A `percent_x` by `percent_y` rectangle centered in `area`.
pub fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
