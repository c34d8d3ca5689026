use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DATA_DIR_ENV: &str = "AGENTSTACK_PATH";
pub const CATALOG_ENV: &str = "AGENTSTACK_CATALOG";
pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. AGENTSTACK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.agentstack (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(DATA_DIR_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("agentstack"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".agentstack"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Timing of the decorative subsystems, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationConfig {
    pub enabled: bool,
    pub carousel_interval_ms: u64,
    pub countdown_tick_ms: u64,
    pub live_counter_interval_ms: u64,
    pub activity_first_delay_ms: u64,
    pub activity_min_interval_ms: u64,
    pub activity_max_interval_ms: u64,
    pub activity_lifetime_ms: u64,
    pub confetti_lifetime_ms: u64,
    pub counter_animation_ms: u64,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            carousel_interval_ms: 5000,
            countdown_tick_ms: 1000,
            live_counter_interval_ms: 4000,
            activity_first_delay_ms: 3000,
            activity_min_interval_ms: 7000,
            activity_max_interval_ms: 10000,
            activity_lifetime_ms: 5500,
            confetti_lifetime_ms: 3000,
            counter_animation_ms: 1800,
        }
    }
}

impl DecorationConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    pub fn countdown_tick(&self) -> Duration {
        Duration::from_millis(self.countdown_tick_ms)
    }

    pub fn live_counter_interval(&self) -> Duration {
        Duration::from_millis(self.live_counter_interval_ms)
    }

    pub fn activity_first_delay(&self) -> Duration {
        Duration::from_millis(self.activity_first_delay_ms)
    }

    /// Bounds of the randomized activity interval; an inverted range collapses to its minimum.
    pub fn activity_interval(&self) -> (Duration, Duration) {
        let min = self.activity_min_interval_ms;
        let max = self.activity_max_interval_ms.max(min);
        (Duration::from_millis(min), Duration::from_millis(max))
    }

    pub fn activity_lifetime(&self) -> Duration {
        Duration::from_millis(self.activity_lifetime_ms)
    }

    pub fn confetti_lifetime(&self) -> Duration {
        Duration::from_millis(self.confetti_lifetime_ms)
    }

    pub fn counter_animation(&self) -> Duration {
        Duration::from_millis(self.counter_animation_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog file used instead of the built-in catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    pub search_debounce_ms: u64,
    pub toast_ms: u64,
    pub decorations: DecorationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            search_debounce_ms: 250,
            toast_ms: 3000,
            decorations: DecorationConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

/// Pick the catalog file: explicit flag, then AGENTSTACK_CATALOG, then config.
///
/// `None` means the built-in catalog.
pub fn resolve_catalog_path(explicit: Option<&str>, config: &Config) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(expand_tilde(path));
    }
    if let Ok(env_path) = std::env::var(CATALOG_ENV)
        && !env_path.trim().is_empty()
    {
        return Some(expand_tilde(&env_path));
    }
    config.catalog.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.search_debounce_ms, 250);
        assert!(config.decorations.enabled);
        assert_eq!(config.decorations.carousel_interval_ms, 5000);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let config = Config {
            catalog: Some(PathBuf::from("/tmp/agents.json")),
            search_debounce_ms: 100,
            decorations: DecorationConfig::disabled(),
            ..Config::default()
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[decorations]\nenabled = false\n")?;

        let config = Config::load_from(&config_path)?;
        assert!(!config.decorations.enabled);
        assert_eq!(config.decorations.live_counter_interval_ms, 4000);
        assert_eq!(config.search_debounce_ms, 250);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_malformed_config_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "search_debounce_ms = \"soon\"")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_explicit_data_dir_wins() -> Result<()> {
        assert_eq!(resolve_data_dir(Some("/opt/agentstack"))?, PathBuf::from("/opt/agentstack"));
        Ok(())
    }

    #[test]
    fn test_explicit_catalog_wins_over_config() {
        let config = Config {
            catalog: Some(PathBuf::from("/from/config.json")),
            ..Config::default()
        };
        assert_eq!(
            resolve_catalog_path(Some("/from/flag.json"), &config),
            Some(PathBuf::from("/from/flag.json"))
        );
    }
}
