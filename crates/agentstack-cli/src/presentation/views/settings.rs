use std::fmt;

use crate::presentation::formatters::style::{accent, bold, dim};
use crate::presentation::view_models::{
    SiteBuildViewModel, SubmissionViewModel, SubscriptionViewModel, ThemeViewModel, ViewMode,
};

pub struct ThemeView<'a> {
    data: &'a ThemeViewModel,
}

impl<'a> ThemeView<'a> {
    pub fn new(data: &'a ThemeViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ThemeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let icon = match self.data.theme {
            agentstack_types::Theme::Light => "☀️",
            agentstack_types::Theme::Dark => "🌙",
        };
        match self.data.previous {
            Some(prev) if prev != self.data.theme => {
                writeln!(f, "{} {} → {}", icon, prev, bold(self.data.theme.as_str()))
            }
            _ => writeln!(f, "{} {}", icon, bold(self.data.theme.as_str())),
        }
    }
}

pub struct SubmissionView<'a> {
    data: &'a SubmissionViewModel,
    mode: ViewMode,
}

impl<'a> SubmissionView<'a> {
    pub fn new(data: &'a SubmissionViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for SubmissionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.receipt);
        }
        writeln!(f, "{}", self.data.message)?;
        writeln!(f)?;
        writeln!(f, "Agent:   {}", bold(&self.data.agent))?;
        writeln!(f, "Listing: {} ({})", self.data.tier_label, self.data.price)?;
        writeln!(f, "Receipt: {}", dim(&self.data.receipt))
    }
}

pub struct SubscriptionView<'a> {
    data: &'a SubscriptionViewModel,
}

impl<'a> SubscriptionView<'a> {
    pub fn new(data: &'a SubscriptionViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for SubscriptionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.message)?;
        writeln!(f, "{}", dim(&self.data.email))
    }
}

pub struct SiteBuildView<'a> {
    data: &'a SiteBuildViewModel,
    mode: ViewMode,
}

impl<'a> SiteBuildView<'a> {
    pub fn new(data: &'a SiteBuildViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for SiteBuildView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Theme:           {}", self.data.theme)?;
        writeln!(f, "Directory pages: {}", self.data.directory_pages)?;
        writeln!(f, "Agent pages:     {}", self.data.agent_pages)?;
        writeln!(
            f,
            "Compare page:    {}",
            if self.data.compare_page { "yes" } else { "no" }
        )?;
        if self.mode == ViewMode::Verbose {
            writeln!(f)?;
            for file in &self.data.files {
                writeln!(f, "  {}", accent(file))?;
            }
        }
        Ok(())
    }
}
