use crate::config::{Config, resolve_catalog_path};
use crate::controller::DirectoryController;
use crate::decor::Decorations;
use crate::preferences::{FilePreferenceStore, ThemeStore};
use crate::Result;
use agentstack_engine::hero_stats;
use agentstack_types::{Catalog, Theme};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the loaded catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

/// Entry point of the runtime: configuration, catalog and preferences for
/// one data directory.
pub struct AgentStack {
    data_dir: PathBuf,
    config: Arc<Config>,
    catalog: Arc<Catalog>,
    source: CatalogSource,
}

impl AgentStack {
    /// Load `config.toml` from `data_dir` (defaults when absent) and the
    /// catalog it points at, unless `catalog_override` names another file.
    pub fn open(data_dir: PathBuf, catalog_override: Option<&str>) -> Result<Self> {
        let config = Config::load_from(&Config::path_in(&data_dir))?;
        Self::with_config(data_dir, config, catalog_override)
    }

    pub fn with_config(
        data_dir: PathBuf,
        config: Config,
        catalog_override: Option<&str>,
    ) -> Result<Self> {
        let (catalog, source) = match resolve_catalog_path(catalog_override, &config) {
            Some(path) => (Catalog::load(&path)?, CatalogSource::File(path)),
            None => (Catalog::builtin()?, CatalogSource::Builtin),
        };
        tracing::info!(
            agents = catalog.len(),
            categories = catalog.categories().len(),
            source = ?source,
            "catalog loaded"
        );

        Ok(Self {
            data_dir,
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            source,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn themes(&self) -> ThemeStore<FilePreferenceStore> {
        ThemeStore::new(FilePreferenceStore::in_dir(&self.data_dir))
    }

    pub fn theme(&self) -> Result<Theme> {
        self.themes().load()
    }

    pub fn controller(&self) -> DirectoryController {
        DirectoryController::new(self.catalog.clone(), &self.config)
    }

    /// Decorations sized for `per_page` testimonials, with hero counters
    /// targeting the catalog's headline numbers.
    pub fn decorations(&self, per_page: usize, enabled: bool) -> Decorations {
        let mut config = self.config.decorations.clone();
        config.enabled &= enabled;
        let targets: Vec<u64> = hero_stats(&self.catalog).iter().map(|s| s.value).collect();
        Decorations::new(config, per_page, &targets)
    }
}
