use agentstack_types::Theme;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Clone, Serialize)]
pub struct ThemeViewModel {
    pub theme: Theme,
    /// Previous value when the command wrote the preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Theme>,
}

impl CreateView for ThemeViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::settings::ThemeView;
        Box::new(ThemeView::new(self))
    }
}
