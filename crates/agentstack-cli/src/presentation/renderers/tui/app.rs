//! Browser state and key bindings.
//!
//! The directory state lives in the [`DirectoryController`]; the app keeps
//! only what the terminal adds on top of it: focus, the open modal and the
//! theme.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use agentstack_engine::{ComparisonTable, MAX_COMPARE, SortMode, ToggleOutcome};
use agentstack_runtime::decor::carousel::per_page_for_columns;
use agentstack_runtime::{Decorations, DirectoryController, PreferenceStore, ThemeStore, subscribe};
use agentstack_types::{AgentId, Theme};

use crate::presentation::presenters::{BrowseInput, present_browse_screen};
use crate::presentation::view_models::BrowseScreenViewModel;
use crate::presentation::views::tui::{AgentListAction, AgentListComponent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Search,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Detail(AgentId),
    Compare(ComparisonTable),
    /// Email typed so far.
    Newsletter(String),
}

pub struct App<S: PreferenceStore> {
    controller: DirectoryController,
    decorations: Decorations,
    themes: ThemeStore<S>,
    theme: Theme,
    focus: Focus,
    modal: Option<Modal>,
    list: AgentListComponent,
    should_quit: bool,
}

impl<S: PreferenceStore> App<S> {
    pub fn new(
        controller: DirectoryController,
        decorations: Decorations,
        themes: ThemeStore<S>,
    ) -> agentstack_runtime::Result<Self> {
        let theme = themes.load()?;
        Ok(Self {
            controller,
            decorations,
            themes,
            theme,
            focus: Focus::List,
            modal: None,
            list: AgentListComponent::new(),
            should_quit: false,
        })
    }

    /// Start the decorative tasks and the hero count-up.
    pub fn start(&mut self, now: Instant) {
        self.decorations.start(now);
        self.decorations.reveal_hero_stats(now);
    }

    pub fn stop(&mut self) {
        self.decorations.stop();
    }

    /// Apply a due search and run due decorations. True when anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let searched = self.controller.poll(now);
        let decorated = !self.decorations.tick(now).is_empty();
        searched || decorated
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.controller.next_deadline(), self.decorations.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn resize(&mut self, columns: u16) {
        self.decorations
            .carousel_mut()
            .resize(per_page_for_columns(columns));
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn controller(&self) -> &DirectoryController {
        &self.controller
    }

    pub fn list_mut(&mut self) -> &mut AgentListComponent {
        &mut self.list
    }

    pub fn screen(&mut self, now: Instant) -> BrowseScreenViewModel {
        let (detail, comparison, newsletter) = match &self.modal {
            Some(Modal::Detail(id)) => (Some(id), None, None),
            Some(Modal::Compare(table)) => (None, Some(table), None),
            Some(Modal::Newsletter(input)) => (None, None, Some(input.as_str())),
            None => (None, None, None),
        };
        let input = BrowseInput {
            theme: self.theme,
            search_focused: self.focus == Focus::Search,
            detail,
            comparison,
            newsletter,
        };
        present_browse_screen(&mut self.controller, &mut self.decorations, &input, now)
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.modal.take() {
            Some(Modal::Newsletter(input)) => self.newsletter_key(key, input, now),
            Some(Modal::Detail(id)) => self.detail_key(key, id, now),
            Some(Modal::Compare(table)) => self.compare_key(key, table, now),
            None if self.focus == Focus::Search => self.search_key(key, now),
            None => self.list_key(key, ctrl, now),
        }
    }

    fn search_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc | KeyCode::Down => self.focus = Focus::List,
            KeyCode::Enter => {
                self.controller.submit_search();
                self.focus = Focus::List;
            }
            KeyCode::Backspace => self.controller.pop_char(now),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.push_char(c, now)
            }
            _ => {}
        }
    }

    fn list_key(&mut self, key: KeyEvent, ctrl: bool, now: Instant) {
        match key.code {
            KeyCode::Char('k') if ctrl => self.focus = Focus::Search,
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::Char('f') => self.controller.cycle_filter(true),
            KeyCode::BackTab | KeyCode::Char('F') => self.controller.cycle_filter(false),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.controller.set_sort(SortMode::ALL[index].clone());
            }
            KeyCode::Char('c') => {
                if let Some(table) = self.controller.open_compare(now) {
                    self.modal = Some(Modal::Compare(table));
                }
            }
            KeyCode::Char('x') => {
                if !self.controller.state().compare.is_empty() {
                    self.controller.clear_compare();
                    self.controller.notify("Comparison cleared", now);
                }
            }
            KeyCode::Char('t') => self.toggle_theme(now),
            KeyCode::Char('n') => self.modal = Some(Modal::Newsletter(String::new())),
            KeyCode::Esc => {
                if !self.controller.state().search_query.is_empty() {
                    self.controller.clear_search();
                }
            }
            _ => {
                let shown = self.controller.view().shown();
                let selected = self.controller.selected_index();
                match self.list.handle_input(key, selected, shown) {
                    Some(AgentListAction::Move(delta)) => self.controller.move_selection(delta),
                    Some(AgentListAction::Open(_)) => {
                        if let Some(agent) = self.controller.selected_agent() {
                            self.modal = Some(Modal::Detail(agent.id.clone()));
                        }
                    }
                    Some(AgentListAction::ToggleCompare(_)) => {
                        if let Some(id) = self.controller.selected_agent().map(|a| a.id.clone()) {
                            self.toggle_compare(&id, now);
                        }
                    }
                    None => {}
                }
            }
        }
    }

    fn detail_key(&mut self, key: KeyEvent, id: AgentId, now: Instant) {
        match key.code {
            KeyCode::Esc => {}
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') => {
                self.toggle_compare(&id, now);
                self.modal = Some(Modal::Detail(id));
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                let next = self
                    .controller
                    .detail(&id)
                    .and_then(|d| d.similar.get(index).map(|a| a.id.clone()));
                self.modal = Some(Modal::Detail(next.unwrap_or(id)));
            }
            _ => self.modal = Some(Modal::Detail(id)),
        }
    }

    /// `1`-`4` remove that chip; the table closes once fewer than two remain.
    fn compare_key(&mut self, key: KeyEvent, table: ComparisonTable, now: Instant) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('c') => {}
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index >= MAX_COMPARE || self.controller.remove_compare(index).is_none() {
                    self.modal = Some(Modal::Compare(table));
                    return;
                }
                self.modal = self.controller.open_compare(now).map(Modal::Compare);
            }
            _ => self.modal = Some(Modal::Compare(table)),
        }
    }

    fn newsletter_key(&mut self, key: KeyEvent, mut input: String, now: Instant) {
        match key.code {
            KeyCode::Esc => {}
            KeyCode::Enter => match subscribe(&input) {
                Ok(subscription) => {
                    self.controller.notify(subscription.message, now);
                    self.decorations.celebrate(now);
                }
                Err(e) => {
                    self.controller.notify(e.to_string(), now);
                    self.modal = Some(Modal::Newsletter(input));
                }
            },
            KeyCode::Backspace => {
                input.pop();
                self.modal = Some(Modal::Newsletter(input));
            }
            KeyCode::Char(c) => {
                input.push(c);
                self.modal = Some(Modal::Newsletter(input));
            }
            _ => self.modal = Some(Modal::Newsletter(input)),
        }
    }

    fn toggle_compare(&mut self, id: &AgentId, now: Instant) {
        match self.controller.toggle_compare(id, now) {
            ToggleOutcome::Added => tracing::debug!(agent = %id, "added to compare"),
            ToggleOutcome::Removed => tracing::debug!(agent = %id, "removed from compare"),
            ToggleOutcome::Rejected(_) | ToggleOutcome::UnknownAgent(_) => {}
        }
    }

    fn toggle_theme(&mut self, now: Instant) {
        match self.themes.toggle() {
            Ok(theme) => self.theme = theme,
            Err(e) => {
                tracing::warn!(error = %e, "theme could not be saved");
                self.theme = self.theme.toggled();
                self.controller.notify(format!("Theme not saved: {}", e), now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentstack_engine::Filter;
    use agentstack_runtime::{DecorationConfig, MemoryPreferenceStore};
    use agentstack_types::Catalog;
    use std::sync::Arc;
    use std::time::Duration;

    fn app() -> App<MemoryPreferenceStore> {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let controller =
            DirectoryController::with_timing(catalog, Duration::from_millis(250), Duration::from_secs(3));
        let decorations = Decorations::new(DecorationConfig::disabled(), 3, &[42, 8, 18, 100]);
        App::new(controller, decorations, ThemeStore::new(MemoryPreferenceStore::new())).unwrap()
    }

    fn press(app: &mut App<MemoryPreferenceStore>, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_text(app: &mut App<MemoryPreferenceStore>, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    #[test]
    fn test_search_is_debounced_until_enter() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char('/'), now);
        assert_eq!(app.focus(), Focus::Search);

        type_text(&mut app, "research", now);
        assert_eq!(app.controller().state().search_query, "");
        press(&mut app, KeyCode::Enter, now);

        assert_eq!(app.controller().state().search_query, "research");
        assert_eq!(app.focus(), Focus::List);
    }

    #[test]
    fn test_typed_search_applies_after_delay() {
        let now = Instant::now();
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL), now);
        type_text(&mut app, "q", now);
        assert_eq!(app.focus(), Focus::Search);

        assert!(app.tick(now + Duration::from_millis(300)));
        assert_eq!(app.controller().state().search_query, "q");
    }

    #[test]
    fn test_filter_and_sort_keys() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Tab, now);
        assert_eq!(app.controller().state().filter, Filter::OpenSource);
        press(&mut app, KeyCode::BackTab, now);
        assert_eq!(app.controller().state().filter, Filter::All);

        press(&mut app, KeyCode::Char('4'), now);
        assert_eq!(app.controller().state().sort, SortMode::Name);
    }

    #[test]
    fn test_compare_flow_from_list_and_detail() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char(' '), now);
        press(&mut app, KeyCode::Char('c'), now);
        assert!(app.modal().is_none());
        assert_eq!(
            app.screen(now).toast.as_deref(),
            Some("Select at least 2 agents to compare")
        );

        press(&mut app, KeyCode::Char('j'), now);
        press(&mut app, KeyCode::Enter, now);
        assert!(matches!(app.modal(), Some(Modal::Detail(_))));
        press(&mut app, KeyCode::Char('a'), now);
        press(&mut app, KeyCode::Esc, now);

        press(&mut app, KeyCode::Char('c'), now);
        match app.modal() {
            Some(Modal::Compare(table)) => assert_eq!(table.columns.len(), 2),
            other => panic!("expected compare modal, got {:?}", other),
        }

        press(&mut app, KeyCode::Esc, now);
        press(&mut app, KeyCode::Char('x'), now);
        assert!(app.controller().state().compare.is_empty());
    }

    #[test]
    fn test_compare_chip_removal() {
        let now = Instant::now();
        let mut app = app();
        let mut picked = Vec::new();
        for _ in 0..3 {
            picked.push(app.controller().selected_agent().unwrap().id.clone());
            press(&mut app, KeyCode::Char(' '), now);
            press(&mut app, KeyCode::Char('j'), now);
        }
        press(&mut app, KeyCode::Char('c'), now);

        press(&mut app, KeyCode::Char('2'), now);
        assert_eq!(
            app.controller().state().compare.ids(),
            &[picked[0].clone(), picked[2].clone()]
        );
        match app.modal() {
            Some(Modal::Compare(table)) => assert_eq!(table.columns.len(), 2),
            other => panic!("expected compare modal, got {:?}", other),
        }

        press(&mut app, KeyCode::Char('4'), now);
        assert_eq!(app.controller().state().compare.len(), 2);

        press(&mut app, KeyCode::Char('1'), now);
        assert_eq!(app.controller().state().compare.ids(), &[picked[2].clone()]);
        assert!(app.modal().is_none());
        assert_eq!(
            app.screen(now).toast.as_deref(),
            Some("Select at least 2 agents to compare")
        );
    }

    #[test]
    fn test_detail_jumps_to_similar_agent() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Enter, now);
        let first = match app.modal() {
            Some(Modal::Detail(id)) => id.clone(),
            other => panic!("expected detail, got {:?}", other),
        };
        press(&mut app, KeyCode::Char('1'), now);
        match app.modal() {
            Some(Modal::Detail(id)) => assert_ne!(id, &first),
            other => panic!("expected detail, got {:?}", other),
        }
    }

    #[test]
    fn test_theme_toggle_persists() {
        let now = Instant::now();
        let mut app = app();
        assert_eq!(app.theme(), Theme::Dark);
        press(&mut app, KeyCode::Char('t'), now);
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.themes.load().unwrap(), Theme::Light);
    }

    #[test]
    fn test_newsletter_validates_then_closes() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char('n'), now);
        type_text(&mut app, "me@example", now);
        press(&mut app, KeyCode::Enter, now);
        assert!(matches!(app.modal(), Some(Modal::Newsletter(_))));

        type_text(&mut app, ".com", now);
        press(&mut app, KeyCode::Enter, now);
        assert!(app.modal().is_none());
        assert!(app.screen(now).toast.unwrap().starts_with("🎉 Welcome aboard"));
    }

    #[test]
    fn test_quit_keys() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char('/'), now);
        press(&mut app, KeyCode::Char('q'), now);
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Esc, now);
        press(&mut app, KeyCode::Char('q'), now);
        assert!(app.should_quit());
    }
}
