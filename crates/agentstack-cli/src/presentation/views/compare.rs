use std::fmt;

use crate::presentation::formatters::style::{bold, dim};
use crate::presentation::formatters::{format_cell, terminal_width, truncate};
use crate::presentation::view_models::{CompareViewModel, ViewMode};

const LABEL_WIDTH: usize = 10;

pub struct CompareView<'a> {
    data: &'a CompareViewModel,
    mode: ViewMode,
}

impl<'a> CompareView<'a> {
    pub fn new(data: &'a CompareViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn column_width(&self) -> usize {
        let columns = self.data.columns.len().max(1);
        let room = terminal_width().saturating_sub(LABEL_WIDTH + 1);
        (room / columns).clamp(12, 32)
    }
}

impl<'a> fmt::Display for CompareView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for notice in &self.data.notices {
            writeln!(f, "{}", dim(&format!("skipped {}: {}", notice.id, notice.message)))?;
        }
        if !self.data.notices.is_empty() {
            writeln!(f)?;
        }

        if !self.data.is_open() {
            return Ok(());
        }

        if self.mode == ViewMode::Minimal {
            for column in &self.data.columns {
                writeln!(f, "{}", column.id)?;
            }
            return Ok(());
        }

        let width = self.column_width();
        let cell = |text: &str| format!("{:<width$}", truncate(text, width - 1), width = width);

        let mut header = format!("{:<LABEL_WIDTH$} ", "");
        for column in &self.data.columns {
            header.push_str(&cell(&format!("{} {}", column.icon, column.name)));
        }
        writeln!(f, "{}", bold(header.trim_end()))?;
        writeln!(f, "{}", "-".repeat(LABEL_WIDTH + 1 + width * self.data.columns.len()))?;

        for row in &self.data.rows {
            let mut line = format!("{:<LABEL_WIDTH$} ", row.label);
            for value in &row.cells {
                line.push_str(&cell(&format_cell(value)));
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
