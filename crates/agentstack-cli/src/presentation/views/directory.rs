use std::fmt;

use super::agent::{card_tags, compact_line, rating_line, write_card};
use crate::presentation::formatters::style::{bold, dim};
use crate::presentation::formatters::{format_number, terminal_width};
use crate::presentation::view_models::{DirectoryViewModel, ViewMode};

// --------------------------------------------------------
// Directory View
// --------------------------------------------------------

pub struct DirectoryView<'a> {
    data: &'a DirectoryViewModel,
    mode: ViewMode,
}

impl<'a> DirectoryView<'a> {
    pub fn new(data: &'a DirectoryViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut parts = vec![
            format!("Filter: {}", self.data.filter_label),
            format!("Sort: {}", self.data.sort_label),
        ];
        if !self.data.query.is_empty() {
            parts.push(format!("Search: \"{}\"", self.data.query));
        }
        if !self.data.compare.is_empty() {
            parts.push(format!("Compare: {}", self.data.compare.len()));
        }
        writeln!(f, "{}", dim(&parts.join(" · ")))?;
        writeln!(f)
    }

    fn render_empty(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(empty) = &self.data.empty {
            writeln!(f, "🔍 {}", bold(&empty.message))?;
            writeln!(f, "{}", dim("Try different keywords or clear filters"))?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for card in &self.data.agents {
            writeln!(f, "{} {} [{}]", card.icon, bold(&card.name), card.id)?;
            writeln!(f, "  subtitle:    {}", card.subtitle)?;
            writeln!(f, "  category:    {} ({})", card.category_name, card.category)?;
            writeln!(f, "  rating:      {}", rating_line(card))?;
            writeln!(f, "  reviews:     {} ({}% popularity)", format_number(card.reviews), card.popularity)?;
            writeln!(f, "  pricing:     {}", card.pricing)?;
            if let Some(year) = &card.launch_year {
                writeln!(f, "  launched:    {}", year)?;
            }
            writeln!(f, "  tags:        {}", card_tags(card).join(", "))?;
            writeln!(f, "  website:     {}", card.website)?;
            writeln!(f, "  description: {}", card.description)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for DirectoryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for card in &self.data.agents {
                writeln!(f, "{}", card.id)?;
            }
            return Ok(());
        }

        self.render_header(f)?;

        if self.data.agents.is_empty() {
            return self.render_empty(f);
        }

        let width = terminal_width();
        match self.mode {
            ViewMode::Compact => {
                for card in &self.data.agents {
                    writeln!(f, "{}", compact_line(card, width))?;
                }
                Ok(())
            }
            ViewMode::Standard => {
                for card in &self.data.agents {
                    write_card(f, card, width)?;
                    writeln!(f)?;
                }
                Ok(())
            }
            ViewMode::Verbose => self.render_verbose(f),
            ViewMode::Minimal => Ok(()),
        }
    }
}
