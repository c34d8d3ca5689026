use agentstack_engine::CompareCell;

use super::number::{format_number, format_rating};

pub const MISSING: &str = "—";

pub fn format_cell(cell: &CompareCell) -> String {
    match cell {
        CompareCell::Text(text) => text.clone(),
        CompareCell::Rating(rating) => format_rating(*rating),
        CompareCell::Count(count) => format_number(*count),
        CompareCell::Missing => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&CompareCell::Rating(4.7)), "⭐ 4.7");
        assert_eq!(format_cell(&CompareCell::Count(1_234)), "1.2K");
        assert_eq!(format_cell(&CompareCell::Missing), "—");
        assert_eq!(format_cell(&CompareCell::Text("Free".into())), "Free");
    }
}
