//! Key-value preference storage and the persisted theme.
//!
//! The only persisted state is the theme, stored under
//! [`THEME_PREFERENCE_KEY`] in `preferences.toml` inside the data directory.

use crate::{Error, Result};
use agentstack_types::{THEME_PREFERENCE_KEY, Theme};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const PREFERENCES_FILE: &str = "preferences.toml";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept in a flat TOML table on disk.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| {
            Error::Preference(format!("{}: {}", self.path.display(), e.message()))
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the theme through any [`PreferenceStore`].
pub struct ThemeStore<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme, or the default when nothing valid is stored.
    pub fn load(&self) -> Result<Theme> {
        match self.store.get(THEME_PREFERENCE_KEY)? {
            None => Ok(Theme::default()),
            Some(raw) => Ok(raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "ignoring unknown stored theme");
                Theme::default()
            })),
        }
    }

    pub fn save(&mut self, theme: Theme) -> Result<()> {
        self.store.set(THEME_PREFERENCE_KEY, theme.as_str())?;
        tracing::info!(theme = %theme, "theme saved");
        Ok(())
    }

    /// Flip the stored theme and persist the result.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.load()?.toggled();
        self.save(next)?;
        Ok(next)
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_to_dark_when_empty() -> Result<()> {
        let themes = ThemeStore::new(MemoryPreferenceStore::new());
        assert_eq!(themes.load()?, Theme::Dark);
        Ok(())
    }

    #[test]
    fn toggle_persists() -> Result<()> {
        let mut themes = ThemeStore::new(MemoryPreferenceStore::new());
        assert_eq!(themes.toggle()?, Theme::Light);
        assert_eq!(themes.load()?, Theme::Light);
        assert_eq!(themes.toggle()?, Theme::Dark);

        let store = themes.into_inner();
        assert_eq!(store.get(THEME_PREFERENCE_KEY)?.as_deref(), Some("dark"));
        Ok(())
    }

    #[test]
    fn unknown_stored_value_falls_back() -> Result<()> {
        let mut store = MemoryPreferenceStore::new();
        store.set(THEME_PREFERENCE_KEY, "sepia")?;
        assert_eq!(ThemeStore::new(store).load()?, Theme::Dark);
        Ok(())
    }

    #[test]
    fn file_store_round_trips_and_keeps_other_keys() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut store = FilePreferenceStore::in_dir(temp_dir.path());
        store.set("other", "kept")?;

        let mut themes = ThemeStore::new(store);
        themes.save(Theme::Light)?;

        let reopened = FilePreferenceStore::in_dir(temp_dir.path());
        assert_eq!(reopened.get(THEME_PREFERENCE_KEY)?.as_deref(), Some("light"));
        assert_eq!(reopened.get("other")?.as_deref(), Some("kept"));

        let content = std::fs::read_to_string(reopened.path())?;
        assert!(content.contains("agentstack-theme = \"light\""));
        Ok(())
    }

    #[test]
    fn corrupt_file_is_preference_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join(PREFERENCES_FILE), "not = [valid")?;
        let store = FilePreferenceStore::in_dir(temp_dir.path());
        assert!(matches!(store.get(THEME_PREFERENCE_KEY), Err(Error::Preference(_))));
        Ok(())
    }
}
