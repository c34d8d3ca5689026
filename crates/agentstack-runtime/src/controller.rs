//! Single owner of the session [`ViewState`].
//!
//! Every interaction (CLI flags, TUI key presses) goes through the controller,
//! which mutates the state and leaves recomputation to [`DirectoryController::view`].

use crate::config::Config;
use crate::debounce::Debouncer;
use crate::toast::{Toast, Toasts};
use agentstack_engine::{
    AgentDetail, ComparisonTable, DirectoryView, Filter, SortMode, ToggleOutcome, ViewState,
    agent_detail, compute_directory, filter_cycle,
};
use agentstack_types::{AgentId, AgentRecord, Catalog};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct DirectoryController {
    catalog: Arc<Catalog>,
    state: ViewState,
    search_input: String,
    debouncer: Debouncer<String>,
    toasts: Toasts,
    selected: usize,
}

impl DirectoryController {
    pub fn new(catalog: Arc<Catalog>, config: &Config) -> Self {
        Self::with_timing(catalog, config.search_debounce(), config.toast_duration())
    }

    pub fn with_timing(catalog: Arc<Catalog>, debounce: Duration, toast: Duration) -> Self {
        Self {
            catalog,
            state: ViewState::new(),
            search_input: String::new(),
            debouncer: Debouncer::new(debounce),
            toasts: Toasts::new(toast),
            selected: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Text in the search box, which may run ahead of the applied query.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn view(&self) -> DirectoryView<'_> {
        compute_directory(&self.catalog, &self.state)
    }

    // --- filter & sort ---

    pub fn set_filter(&mut self, filter: Filter) {
        if filter.is_unrecognized(&self.catalog) {
            tracing::warn!(filter = %filter, "unrecognized filter, no agents will match");
        }
        tracing::debug!(filter = %filter, "filter changed");
        self.state.filter = filter;
        self.selected = 0;
    }

    /// Step through the filter bar; an unrecognized filter restarts at `all`.
    pub fn cycle_filter(&mut self, forward: bool) {
        let cycle = filter_cycle(&self.catalog);
        let next = match cycle.iter().position(|f| *f == self.state.filter) {
            Some(i) if forward => (i + 1) % cycle.len(),
            Some(i) => (i + cycle.len() - 1) % cycle.len(),
            None => 0,
        };
        self.set_filter(cycle[next].clone());
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        if sort.is_unrecognized() {
            tracing::warn!(sort = %sort, "unrecognized sort mode, keeping catalog order");
        }
        tracing::debug!(sort = %sort, "sort changed");
        self.state.sort = sort;
        self.selected = 0;
    }

    // --- search ---

    /// Replace the search box text and (re)start the debounce delay.
    pub fn type_query(&mut self, text: impl Into<String>, now: Instant) {
        self.search_input = text.into();
        self.debouncer.schedule(self.search_input.clone(), now);
    }

    pub fn push_char(&mut self, c: char, now: Instant) {
        let mut text = std::mem::take(&mut self.search_input);
        text.push(c);
        self.type_query(text, now);
    }

    pub fn pop_char(&mut self, now: Instant) {
        let mut text = std::mem::take(&mut self.search_input);
        text.pop();
        self.type_query(text, now);
    }

    /// Apply a debounced query once its delay has passed. Returns true when
    /// the state changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(query) => self.apply_query(query),
            None => false,
        }
    }

    /// Apply the search box text immediately, dropping any pending delay.
    pub fn submit_search(&mut self) -> bool {
        let query = self
            .debouncer
            .flush()
            .unwrap_or_else(|| self.search_input.clone());
        self.apply_query(query)
    }

    pub fn clear_search(&mut self) -> bool {
        self.debouncer.cancel();
        self.search_input.clear();
        self.apply_query(String::new())
    }

    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    fn apply_query(&mut self, query: String) -> bool {
        if self.state.search_query == query {
            return false;
        }
        tracing::debug!(query = %query, "search applied");
        self.state.search_query = query;
        self.selected = 0;
        true
    }

    // --- compare ---

    /// Toggle an agent in the compare selection; rejections raise a toast.
    pub fn toggle_compare(&mut self, id: &AgentId, now: Instant) -> ToggleOutcome {
        let outcome = self.state.compare.toggle(id, &self.catalog);
        match &outcome {
            ToggleOutcome::Rejected(notice) => self.toasts.show(notice.to_string(), now),
            ToggleOutcome::UnknownAgent(id) => {
                tracing::warn!(agent = %id, "cannot compare unknown agent");
                self.toasts.show(format!("Unknown agent: {}", id), now);
            }
            ToggleOutcome::Added | ToggleOutcome::Removed => {}
        }
        outcome
    }

    /// Drop the `index`-th chip of the compare tray (selection order).
    pub fn remove_compare(&mut self, index: usize) -> Option<AgentId> {
        let id = self.state.compare.ids().get(index)?.clone();
        if self.state.compare.remove(&id) {
            tracing::debug!(agent = %id, "removed from compare");
        }
        Some(id)
    }

    pub fn clear_compare(&mut self) {
        self.state.compare.clear();
    }

    /// Comparison table for the current selection, or a toast when fewer
    /// than two agents are selected.
    pub fn open_compare(&mut self, now: Instant) -> Option<ComparisonTable> {
        match self.state.compare.open(&self.catalog) {
            Ok(table) => Some(table),
            Err(notice) => {
                self.toasts.show(notice.to_string(), now);
                None
            }
        }
    }

    // --- selection & detail ---

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Move the highlighted card, clamped to the visible list.
    pub fn move_selection(&mut self, delta: isize) {
        let shown = self.view().shown();
        if shown == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, shown as isize - 1) as usize;
    }

    pub fn selected_agent(&self) -> Option<&AgentRecord> {
        self.view().agents.get(self.selected).copied()
    }

    pub fn detail(&self, id: &AgentId) -> Option<AgentDetail<'_>> {
        let agent = self.catalog.agent(id)?;
        Some(agent_detail(&self.catalog, agent))
    }

    // --- toasts ---

    pub fn notify(&mut self, message: impl Into<String>, now: Instant) {
        self.toasts.show(message, now);
    }

    pub fn toast(&mut self, now: Instant) -> Option<&Toast> {
        self.toasts.current(now)
    }

    /// Earliest instant at which `poll` could change the state.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentstack_engine::CompareNotice;

    fn controller() -> DirectoryController {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        DirectoryController::with_timing(catalog, Duration::from_millis(250), Duration::from_secs(3))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn typing_is_debounced_and_last_write_wins() {
        let start = Instant::now();
        let mut c = controller();
        c.type_query("au", start);
        c.type_query("auto", start + ms(100));

        assert!(!c.poll(start + ms(300)));
        assert_eq!(c.state().search_query, "");
        assert!(c.poll(start + ms(350)));
        assert_eq!(c.state().search_query, "auto");
        assert!(!c.search_pending());
    }

    #[test]
    fn submit_applies_immediately() {
        let start = Instant::now();
        let mut c = controller();
        c.type_query("research", start);
        assert!(c.submit_search());
        assert_eq!(c.state().search_query, "research");
        assert!(!c.poll(start + ms(1000)));
    }

    #[test]
    fn clear_search_restores_full_list() {
        let start = Instant::now();
        let mut c = controller();
        c.type_query("zzzqqq", start);
        c.submit_search();
        assert!(c.view().is_empty());

        c.clear_search();
        assert_eq!(c.view().shown(), 42);
        assert_eq!(c.search_input(), "");
    }

    #[test]
    fn filter_cycle_wraps_both_ways() {
        let mut c = controller();
        c.cycle_filter(false);
        assert_eq!(c.state().filter, Filter::category("frameworks"));
        c.cycle_filter(true);
        assert_eq!(c.state().filter, Filter::All);
        c.cycle_filter(true);
        assert_eq!(c.state().filter, Filter::OpenSource);

        c.set_filter(Filter::category("nope"));
        c.cycle_filter(true);
        assert_eq!(c.state().filter, Filter::All);
    }

    #[test]
    fn fifth_compare_toggle_raises_toast() {
        let now = Instant::now();
        let mut c = controller();
        for id in ["devin", "cursor-agent", "autogpt", "perplexity"] {
            assert_eq!(c.toggle_compare(&AgentId::new(id), now), ToggleOutcome::Added);
        }
        let outcome = c.toggle_compare(&AgentId::new("jasper"), now);
        assert_eq!(outcome, ToggleOutcome::Rejected(CompareNotice::LimitReached));
        assert_eq!(c.state().compare.len(), 4);
        assert_eq!(
            c.toast(now).map(|t| t.message.as_str()),
            Some("Max 4 agents for comparison")
        );
    }

    #[test]
    fn opening_compare_needs_two() {
        let now = Instant::now();
        let mut c = controller();
        c.toggle_compare(&AgentId::new("devin"), now);
        assert!(c.open_compare(now).is_none());
        assert_eq!(
            c.toast(now).map(|t| t.message.as_str()),
            Some("Select at least 2 agents to compare")
        );

        c.toggle_compare(&AgentId::new("cursor-agent"), now);
        let table = c.open_compare(now).unwrap();
        assert_eq!(table.columns.len(), 2);
    }

    #[test]
    fn removing_a_chip_keeps_the_rest_in_order() {
        let now = Instant::now();
        let mut c = controller();
        for id in ["devin", "cursor-agent", "autogpt"] {
            c.toggle_compare(&AgentId::new(id), now);
        }

        assert_eq!(c.remove_compare(1), Some(AgentId::new("cursor-agent")));
        assert_eq!(
            c.state().compare.ids(),
            &[AgentId::new("devin"), AgentId::new("autogpt")]
        );
        assert_eq!(c.remove_compare(5), None);
        assert_eq!(c.state().compare.len(), 2);
    }

    #[test]
    fn selection_is_clamped_and_reset_on_filter_change() {
        let mut c = controller();
        c.move_selection(-3);
        assert_eq!(c.selected_index(), 0);
        c.move_selection(100);
        assert_eq!(c.selected_index(), 41);

        c.set_filter(Filter::category("sales"));
        assert_eq!(c.selected_index(), 0);
        assert_eq!(c.selected_agent().map(|a| a.category.as_str()), Some("sales"));
    }
}
