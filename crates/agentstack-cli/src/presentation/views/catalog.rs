use std::fmt;

use super::agent::{compact_line, write_card};
use crate::presentation::formatters::style::{bold, dim};
use crate::presentation::formatters::{format_number, terminal_width};
use crate::presentation::view_models::{CategoryListViewModel, FeaturedViewModel, ViewMode};

fn agent_count(n: usize) -> String {
    if n == 1 {
        "1 agent".to_string()
    } else {
        format!("{} agents", n)
    }
}

// --------------------------------------------------------
// Category List View
// --------------------------------------------------------

pub struct CategoryListView<'a> {
    data: &'a CategoryListViewModel,
    mode: ViewMode,
}

impl<'a> CategoryListView<'a> {
    pub fn new(data: &'a CategoryListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for CategoryListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => {
                for tile in &self.data.categories {
                    writeln!(f, "{}", tile.id)?;
                }
            }
            ViewMode::Compact => {
                for tile in &self.data.categories {
                    writeln!(f, "{} {:<14} {:>10}", tile.icon, tile.name, agent_count(tile.count))?;
                }
            }
            ViewMode::Standard | ViewMode::Verbose => {
                for tile in &self.data.categories {
                    writeln!(f, "{} {}  {}", tile.icon, bold(&tile.name), dim(&agent_count(tile.count)))?;
                    writeln!(f, "   {}", tile.description)?;
                    if self.mode == ViewMode::Verbose {
                        writeln!(f, "   filter: {}", tile.id)?;
                    }
                }
                writeln!(f)?;
                writeln!(f, "{}", bold("Filters"))?;
                for filter in &self.data.filters {
                    writeln!(f, "  {:<14} {:>3}", filter.id, filter.count)?;
                }
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Featured View
// --------------------------------------------------------

pub struct FeaturedView<'a> {
    data: &'a FeaturedViewModel,
    mode: ViewMode,
}

impl<'a> FeaturedView<'a> {
    pub fn new(data: &'a FeaturedViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for FeaturedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for card in &self.data.agents {
                writeln!(f, "{}", card.id)?;
            }
            return Ok(());
        }

        let stats: Vec<String> = self
            .data
            .hero
            .iter()
            .map(|stat| format!("{} {}", bold(&format_number(stat.value)), stat.label))
            .collect();
        writeln!(f, "{}", stats.join("   "))?;
        writeln!(f)?;

        let width = terminal_width();
        for card in &self.data.agents {
            if self.mode == ViewMode::Compact {
                writeln!(f, "{}", compact_line(card, width))?;
            } else {
                write_card(f, card, width)?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
