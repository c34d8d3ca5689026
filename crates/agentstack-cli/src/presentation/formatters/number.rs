/// Round half away from zero to one decimal.
fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Review counts: `1.2M`, `15K`, `1.5K`, `999`.
pub fn format_number(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", one_decimal(count as f64 / 1_000_000.0))
    } else if count >= 10_000 {
        format!("{}K", (count as f64 / 1_000.0).round() as u64)
    } else if count >= 1_000 {
        format!("{:.1}K", one_decimal(count as f64 / 1_000.0))
    } else {
        count.to_string()
    }
}

/// Rating as written in the catalog: `4.5`, `4`.
pub fn format_rating_value(rating: f64) -> String {
    format!("{}", rating)
}

pub fn format_rating(rating: f64) -> String {
    format!("⭐ {}", format_rating_value(rating))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_thresholds() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1.0K");
        assert_eq!(format_number(1_250), "1.3K");
        assert_eq!(format_number(9_999), "10.0K");
        assert_eq!(format_number(10_000), "10K");
        assert_eq!(format_number(15_500), "16K");
        assert_eq!(format_number(1_000_000), "1.0M");
        assert_eq!(format_number(2_345_678), "2.3M");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.5), "⭐ 4.5");
        assert_eq!(format_rating(4.0), "⭐ 4");
    }
}
