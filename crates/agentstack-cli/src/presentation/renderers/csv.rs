use anyhow::Result;
use std::io::Write;

use crate::presentation::view_models::DirectoryViewModel;

const HEADER: [&str; 11] = [
    "id",
    "name",
    "category",
    "rating",
    "reviews",
    "pricing",
    "featured",
    "open_source",
    "launch_year",
    "tags",
    "website",
];

/// One row per agent of a directory listing.
pub struct CsvRenderer<W: Write> {
    writer: W,
}

impl CsvRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> CsvRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn render_directory(&mut self, directory: &DirectoryViewModel) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(&mut self.writer);
        wtr.write_record(HEADER)?;

        for card in &directory.agents {
            let featured = matches!(card.badge, Some(agentstack_engine::CardBadge::Featured));
            wtr.write_record([
                card.id.as_str(),
                card.name.as_str(),
                card.category.as_str(),
                &card.rating.to_string(),
                &card.reviews.to_string(),
                card.pricing.as_str(),
                &featured.to_string(),
                &card.open_source.to_string(),
                card.launch_year.as_deref().unwrap_or(""),
                &card.tags.join(";"),
                card.website.as_str(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_directory;
    use agentstack_engine::{Filter, ViewState, compute_directory};
    use agentstack_types::Catalog;

    #[test]
    fn test_csv_has_header_and_row_per_agent() {
        let catalog = Catalog::builtin().unwrap();
        let state = ViewState::new().with_filter(Filter::category("sales"));
        let view = compute_directory(&catalog, &state);
        let vm = present_directory(&catalog, &state, &view);

        let mut renderer = CsvRenderer::new(Vec::new());
        renderer.render_directory(&vm).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], HEADER.join(","));
        assert_eq!(lines.len(), vm.shown + 1);
        assert!(lines[1..].iter().all(|l| l.contains(",sales,")));
    }

    #[test]
    fn test_empty_listing_is_header_only() {
        let catalog = Catalog::builtin().unwrap();
        let state = ViewState::new().with_search("zzzqqq");
        let view = compute_directory(&catalog, &state);
        let vm = present_directory(&catalog, &state, &view);

        let mut renderer = CsvRenderer::new(Vec::new());
        renderer.render_directory(&vm).unwrap();
        assert_eq!(String::from_utf8(renderer.into_inner()).unwrap().lines().count(), 1);
    }
}
