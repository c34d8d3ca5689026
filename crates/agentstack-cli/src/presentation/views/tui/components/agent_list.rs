//! Agent list component.
//!
//! The controller owns which agent is selected; the component owns the
//! scroll position and turns keys into actions.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, ListState, Paragraph, Wrap},
};

use crate::presentation::view_models::DirectoryViewModel;
use crate::presentation::views::tui::{AgentListView, Palette};

const PAGE: isize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentListAction {
    Move(isize),
    Open(usize),
    ToggleCompare(usize),
}

#[derive(Default)]
pub struct AgentListComponent {
    state: ListState,
}

impl AgentListComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_input(&self, key: KeyEvent, selected: usize, data_len: usize) -> Option<AgentListAction> {
        let last = data_len.saturating_sub(1) as isize;
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(AgentListAction::Move(1)),
            KeyCode::Char('k') | KeyCode::Up => Some(AgentListAction::Move(-1)),
            KeyCode::PageDown => Some(AgentListAction::Move(PAGE)),
            KeyCode::PageUp => Some(AgentListAction::Move(-PAGE)),
            KeyCode::Home => Some(AgentListAction::Move(-(selected as isize))),
            KeyCode::End => Some(AgentListAction::Move(last - selected as isize)),
            KeyCode::Enter if data_len > 0 => Some(AgentListAction::Open(selected)),
            KeyCode::Char(' ') if data_len > 0 => Some(AgentListAction::ToggleCompare(selected)),
            _ => None,
        }
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        data: &DirectoryViewModel,
        selected: usize,
        palette: Palette,
    ) {
        if data.agents.is_empty() {
            self.state.select(None);
            let message = data
                .empty
                .as_ref()
                .map(|e| e.message.clone())
                .unwrap_or_default();
            let empty = Paragraph::new(vec![
                Line::raw(""),
                Line::raw(format!("🔍 {}", message)).centered(),
                Line::styled("Try different keywords or clear filters", palette.dim()).centered(),
            ])
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" Showing 0 of {} agents ", data.total))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            );
            f.render_widget(empty, area);
            return;
        }

        self.state.select(Some(selected.min(data.agents.len() - 1)));
        let list = AgentListView::new(data, palette).build_list();
        f.render_stateful_widget(list, area, &mut self.state);
    }
}
