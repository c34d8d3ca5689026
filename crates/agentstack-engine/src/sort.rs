use agentstack_types::AgentRecord;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Ordering applied after filter and search.
///
/// Unknown keys are kept as [`SortMode::Unrecognized`] and leave the order
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    #[default]
    Featured,
    Rating,
    Reviews,
    Name,
    Newest,
    Unrecognized(String),
}

impl SortMode {
    /// The five selectable modes, in sort-bar order.
    pub const ALL: [SortMode; 5] = [
        SortMode::Featured,
        SortMode::Rating,
        SortMode::Reviews,
        SortMode::Name,
        SortMode::Newest,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SortMode::Featured => "default",
            SortMode::Rating => "rating",
            SortMode::Reviews => "reviews",
            SortMode::Name => "name",
            SortMode::Newest => "newest",
            SortMode::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SortMode::Featured => "Featured",
            SortMode::Rating => "Top Rated",
            SortMode::Reviews => "Most Reviewed",
            SortMode::Name => "A-Z",
            SortMode::Newest => "Newest",
            SortMode::Unrecognized(raw) => raw,
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, SortMode::Unrecognized(_))
    }

    /// Compare two agents under this mode. Unrecognized modes treat every pair as equal.
    pub fn compare(&self, a: &AgentRecord, b: &AgentRecord) -> Ordering {
        match self {
            SortMode::Featured => b
                .featured
                .cmp(&a.featured)
                .then_with(|| b.rating.total_cmp(&a.rating)),
            SortMode::Rating => b.rating.total_cmp(&a.rating),
            SortMode::Reviews => b.reviews.cmp(&a.reviews),
            SortMode::Name => locale_compare(&a.name, &b.name),
            SortMode::Newest => b.launch_key().cmp(a.launch_key()),
            SortMode::Unrecognized(_) => Ordering::Equal,
        }
    }
}

impl FromStr for SortMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "default" | "featured" => SortMode::Featured,
            "rating" => SortMode::Rating,
            "reviews" | "views" => SortMode::Reviews,
            "name" => SortMode::Name,
            "newest" => SortMode::Newest,
            other => SortMode::Unrecognized(other.to_string()),
        })
    }
}

impl From<&str> for SortMode {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(mode) => mode,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SortMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Case-insensitive name comparison with the raw strings as tie-break.
///
/// `"alpha" < "Beta" < "beta2"`, and `"Beta" < "beta"`.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Stable sort of a working copy. The input slice is never reordered.
pub fn apply_sort<'a>(agents: &[&'a AgentRecord], mode: &SortMode) -> Vec<&'a AgentRecord> {
    let mut sorted = agents.to_vec();
    if !mode.is_unrecognized() {
        sorted.sort_by(|a, b| mode.compare(a, b));
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{agent, catalog_of};

    fn ids(list: &[&AgentRecord]) -> Vec<String> {
        list.iter().map(|a| a.id.to_string()).collect()
    }

    #[test]
    fn parses_aliases() {
        assert_eq!(SortMode::from("default"), SortMode::Featured);
        assert_eq!(SortMode::from("featured"), SortMode::Featured);
        assert_eq!(SortMode::from("views"), SortMode::Reviews);
        assert_eq!(
            SortMode::from("popularity"),
            SortMode::Unrecognized("popularity".to_string())
        );
    }

    #[test]
    fn featured_first_then_rating() {
        let mut a = agent("a", "x");
        a.rating = 4.9;
        let mut b = agent("b", "x");
        b.featured = true;
        b.rating = 4.1;
        let mut c = agent("c", "x");
        c.featured = true;
        c.rating = 4.6;
        let catalog = catalog_of(vec![a, b, c]);
        let refs: Vec<_> = catalog.agents().iter().collect();

        assert_eq!(ids(&apply_sort(&refs, &SortMode::Featured)), vec!["c", "b", "a"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let catalog = catalog_of(vec![agent("a", "x"), agent("b", "x"), agent("c", "x")]);
        let refs: Vec<_> = catalog.agents().iter().collect();
        assert_eq!(ids(&apply_sort(&refs, &SortMode::Rating)), vec!["a", "b", "c"]);
        assert_eq!(ids(&apply_sort(&refs, &SortMode::Reviews)), vec!["a", "b", "c"]);
    }

    #[test]
    fn newest_treats_missing_date_as_fallback() {
        let mut old = agent("old", "x");
        old.launch_date = Some("2019-05".to_string());
        let undated = agent("undated", "x");
        let mut new = agent("new", "x");
        new.launch_date = Some("2024-02".to_string());
        let catalog = catalog_of(vec![old, undated, new]);
        let refs: Vec<_> = catalog.agents().iter().collect();

        assert_eq!(
            ids(&apply_sort(&refs, &SortMode::Newest)),
            vec!["new", "undated", "old"]
        );
    }

    #[test]
    fn unrecognized_mode_is_identity() {
        let mut b = agent("b", "x");
        b.rating = 5.0;
        let catalog = catalog_of(vec![agent("a", "x"), b]);
        let refs: Vec<_> = catalog.agents().iter().collect();
        let mode = SortMode::from("bogus");
        assert_eq!(ids(&apply_sort(&refs, &mode)), vec!["a", "b"]);
    }

    #[test]
    fn locale_compare_folds_case() {
        assert_eq!(locale_compare("alpha", "Beta"), Ordering::Less);
        assert_eq!(locale_compare("Beta", "beta2"), Ordering::Less);
        assert_eq!(locale_compare("Beta", "beta"), Ordering::Less);
        assert_eq!(locale_compare("zeta", "Alpha"), Ordering::Greater);
    }
}
