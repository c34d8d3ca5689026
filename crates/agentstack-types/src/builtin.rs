//! Catalog embedded in the binary, used when no catalog file is configured.

use crate::{Catalog, Result};

pub const BUILTIN_CATALOG_JSON: &str = include_str!("../data/catalog.json");

impl Catalog {
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 42);
        assert_eq!(catalog.categories().len(), 8);
        assert_eq!(catalog.open_source_count(), 18);
    }

    #[test]
    fn builtin_category_counts_cover_every_agent() {
        let catalog = Catalog::builtin().unwrap();
        let total: usize = catalog.categories().iter().map(|c| c.count).sum();
        assert_eq!(total, catalog.len());
    }
}
