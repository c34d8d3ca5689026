//! Writes the static site to disk.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::presentation::presenters::site::{COMPARE_PAGE, agent_page_path};
use crate::presentation::view_models::SiteViewModel;
use crate::presentation::views::html;

pub struct SiteRenderer {
    out_dir: PathBuf,
}

impl SiteRenderer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Write every page and the stylesheet; returns the written paths
    /// relative to the output directory.
    pub fn render(&self, site: &SiteViewModel) -> Result<Vec<String>> {
        let mut files = Vec::new();

        self.write(&site.index.path, &html::index(site), &mut files)?;
        for page in &site.pages {
            self.write(&page.path, &html::directory_page(site, page), &mut files)?;
        }
        for agent in &site.agents {
            let path = agent_page_path(&agent.card.id);
            self.write(&path, &html::agent_page(site, &path, agent), &mut files)?;
        }
        if let Some(compare) = html::compare_page(site) {
            self.write(COMPARE_PAGE, &compare, &mut files)?;
        }
        self.write(html::STYLESHEET, html::SITE_CSS, &mut files)?;

        tracing::info!(out_dir = %self.out_dir.display(), files = files.len(), "site written");
        Ok(files)
    }

    fn write(&self, relative: &str, contents: &str, files: &mut Vec<String>) -> Result<()> {
        let inside = Path::new(relative)
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !inside {
            bail!("Refusing to write {} outside the output directory", relative);
        }
        let path = self.out_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "page written");
        files.push(relative.to_string());
        Ok(())
    }
}
