use crate::args::hints::fmt as hint;
use crate::presentation::view_models::{
    CommandResultViewModel, CompareColumnViewModel, CompareNoticeViewModel, CompareRowViewModel,
    CompareViewModel, Guidance, StatusBadge,
};
use agentstack_engine::{CompareNotice, ComparisonTable};

pub fn present_comparison_table(table: &ComparisonTable) -> CompareViewModel {
    CompareViewModel {
        columns: table
            .columns
            .iter()
            .map(|c| CompareColumnViewModel {
                id: c.id.to_string(),
                name: c.name.clone(),
                icon: c.icon.clone(),
            })
            .collect(),
        rows: table
            .rows
            .iter()
            .map(|r| CompareRowViewModel {
                label: r.field.label().to_string(),
                cells: r.cells.clone(),
            })
            .collect(),
        notices: Vec::new(),
    }
}

/// `opened` is the table, or the notice explaining why it did not open.
pub fn present_compare(
    opened: Result<ComparisonTable, CompareNotice>,
    notices: Vec<CompareNoticeViewModel>,
) -> CommandResultViewModel<CompareViewModel> {
    match opened {
        Ok(table) => {
            let mut content = present_comparison_table(&table);
            content.notices = notices;
            let badge = if content.notices.is_empty() {
                StatusBadge::success(format!("Comparing {} agents", content.columns.len()))
            } else {
                StatusBadge::warning(format!(
                    "Comparing {} agents ({} skipped)",
                    content.columns.len(),
                    content.notices.len()
                ))
            };
            CommandResultViewModel::new(content).with_badge(badge)
        }
        Err(notice) => {
            let content = CompareViewModel {
                columns: Vec::new(),
                rows: Vec::new(),
                notices,
            };
            CommandResultViewModel::new(content)
                .with_badge(StatusBadge::warning(notice.to_string()))
                .with_suggestion(
                    Guidance::new("Pass two to four agent ids")
                        .with_command(hint::compare(&["<ID>".to_string(), "<ID>".to_string()])),
                )
        }
    }
}
