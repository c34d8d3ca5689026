//! TestWorld pattern for declarative integration test setup.
//!
//! Every world owns a temporary data directory, so theme preferences and
//! config files never leak between tests or into the user's real data dir.

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Isolated environment for running the `agentstack` binary.
///
/// # Example
/// ```no_run
/// use agentstack_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["list", "--quiet"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    catalog: Option<PathBuf>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".agentstack");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            catalog: None,
            env_vars: HashMap::new(),
        }
    }

    /// Point every command at a catalog file written from `content`.
    pub fn with_catalog(mut self, content: &str) -> Self {
        let path = fixtures::write_catalog(self.temp_dir.path(), content)
            .expect("Failed to write catalog fixture");
        self.catalog = Some(path);
        self
    }

    /// Shorthand for [`fixtures::SMALL_CATALOG`].
    pub fn with_small_catalog(self) -> Self {
        self.with_catalog(fixtures::SMALL_CATALOG)
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `config.toml` into the data directory.
    pub fn write_config(&self, content: &str) -> Result<()> {
        let path = self.data_dir.join("config.toml");
        std::fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Apply the world's data dir, catalog and environment to a command.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.temp_dir.path())
            .env_remove("AGENTSTACK_PATH")
            .env_remove("AGENTSTACK_CATALOG")
            .env("NO_COLOR", "1")
            .arg("--data-dir")
            .arg(&self.data_dir);

        if let Some(catalog) = &self.catalog {
            cmd.arg("--catalog").arg(catalog);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run `agentstack` with `args` inside this world.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("agentstack").context("agentstack binary not built")?;
        self.configure_command(&mut cmd);
        let output = cmd.args(args).output().context("failed to run agentstack")?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Run with `--format json` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        let result = self.run(&full)?;
        if !result.success() {
            anyhow::bail!("agentstack {:?} failed: {}", args, result.stderr());
        }
        result.json()
    }
}

/// Captured outcome of one CLI invocation.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.stdout)
            .with_context(|| format!("stdout is not JSON:\n{}", self.stdout))
    }

    /// Non-empty stdout lines, trimmed.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect()
    }
}
