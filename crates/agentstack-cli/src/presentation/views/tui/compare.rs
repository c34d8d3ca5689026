use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Row, Table, Widget},
};

use super::Palette;
use crate::presentation::formatters::format_cell;
use crate::presentation::view_models::CompareViewModel;

/// Comparison modal: one column per agent.
pub struct CompareTableView<'a> {
    model: &'a CompareViewModel,
    palette: Palette,
}

impl<'a> CompareTableView<'a> {
    pub fn new(model: &'a CompareViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }
}

impl<'a> Widget for CompareTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let header = Row::new(
            std::iter::once(Cell::from(""))
                .chain(
                    self.model
                        .columns
                        .iter()
                        .enumerate()
                        .map(|(i, c)| Cell::from(format!("{} {} {}", i + 1, c.icon, c.name))),
                ),
        )
        .style(Style::default().add_modifier(Modifier::BOLD).fg(self.palette.accent));

        let rows = self.model.rows.iter().map(|row| {
            Row::new(
                std::iter::once(Cell::from(row.label.clone()).style(self.palette.dim()))
                    .chain(row.cells.iter().map(|c| Cell::from(format_cell(c)))),
            )
        });

        let columns = self.model.columns.len().max(1) as u32;
        let widths = std::iter::once(Constraint::Length(10))
            .chain((0..columns).map(|_| Constraint::Ratio(1, columns)));

        Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .block(
                Block::default()
                    .title(" Compare · 1-4 remove · Esc close ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.accent))
                    .style(self.palette.base()),
            )
            .render(area, buf);
    }
}
