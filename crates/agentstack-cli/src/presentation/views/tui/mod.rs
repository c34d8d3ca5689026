//! TUI Views and Stateful Components
//!
//! Views are stateless Ratatui widgets over a borrowed view model: they map
//! data to widgets and pick colors, nothing else. Components own widget
//! state (the list scroll position), handle keys, clamp indices and delegate
//! drawing to views.

pub mod agent_list;
pub mod compare;
pub mod components;
pub mod decor;
pub mod detail;
pub mod filter_bar;
pub mod header;
pub mod overlay;
pub mod status_bar;

pub use agent_list::AgentListView;
pub use compare::CompareTableView;
pub use components::{AgentListAction, AgentListComponent};
pub use decor::DecorPanelView;
pub use detail::AgentDetailPanelView;
pub use filter_bar::FilterBarView;
pub use header::HeaderView;
pub use overlay::{ConfettiView, NewsletterView, ToastView};
pub use status_bar::StatusBarView;

use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub border: Color,
    pub background: Color,
}

impl Palette {
    pub fn for_theme(theme: &str) -> Self {
        match theme {
            "light" => Self {
                text: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Rgb(92, 60, 230),
                highlight: Color::Rgb(230, 230, 245),
                border: Color::Gray,
                background: Color::White,
            },
            _ => Self {
                text: Color::White,
                muted: Color::Gray,
                accent: Color::Rgb(124, 92, 255),
                highlight: Color::Rgb(40, 40, 56),
                border: Color::DarkGray,
                background: Color::Reset,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}

/// `#rrggbb` to a terminal color; anything else falls back to gray.
pub(crate) fn hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Color::Gray;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Gray,
    }
}
