use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionViewModel {
    pub receipt: String,
    pub agent: String,
    pub tier: String,
    pub tier_label: String,
    pub price: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionViewModel {
    pub email: String,
    pub message: String,
}

impl CreateView for SubmissionViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::settings::SubmissionView;
        Box::new(SubmissionView::new(self, mode))
    }
}

impl CreateView for SubscriptionViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::settings::SubscriptionView;
        Box::new(SubscriptionView::new(self))
    }
}
