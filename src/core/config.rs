//! Configuration system: TOML file + env var overrides + smart defaults.

#![allow(missing_docs)]

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{ConsoleError, Result};
use crate::core::paths;

/// Full console shell configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
#[derive(Default)]
pub struct ConsoleConfig {
    pub console: ConsoleSection,
    pub paths: PathsSection,
    /// Feature flag seeds. Environment variables (`NBC_FLAG_*`) override
    /// these at lookup time, not at load time.
    pub flags: BTreeMap<String, bool>,
}

/// Shell behavior knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleSection {
    /// Brand string used as the last-resort page title.
    pub brand: String,
    /// Snapshot poll interval in milliseconds.
    pub refresh_ms: u64,
    /// Snapshot age beyond which the shell treats data as stale.
    pub snapshot_stale_secs: u64,
    /// Route to open the shell on.
    pub start_route: String,
}

impl Default for ConsoleSection {
    fn default() -> Self {
        Self {
            brand: "Nimbus Console".to_owned(),
            refresh_ms: 1000,
            snapshot_stale_secs: 30,
            start_route: "/".to_owned(),
        }
    }
}

/// File locations consumed by the shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsSection {
    /// Console snapshot written by the external status fetcher.
    pub snapshot_file: PathBuf,
    /// JSONL event log. Empty disables event logging.
    pub log_file: PathBuf,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            snapshot_file: paths::default_snapshot_path(),
            log_file: paths::default_log_path(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from an explicit path.
    ///
    /// # Errors
    /// Returns [`ConsoleError::MissingConfig`] when the file does not exist
    /// and a parse/validation error when it is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConsoleError::MissingConfig {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path).map_err(|e| ConsoleError::io(path, e))?;
        let mut config: Self = toml::from_str(&raw)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load from the given path when present, otherwise fall back to defaults.
    ///
    /// A malformed file is still an error: silently ignoring a bad config
    /// hides operator mistakes.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let path = path.map_or_else(paths::default_config_path, Path::to_path_buf);
        match Self::load(&path) {
            Ok(config) => Ok(config),
            Err(ConsoleError::MissingConfig { .. }) => {
                let mut config = Self::default();
                config.apply_env_overrides();
                config.validate()?;
                Ok(config)
            }
            Err(e) => Err(e),
        }
    }

    /// Persist atomically: serialize → temp file → rename over target.
    pub fn save(&self, path: &Path) -> Result<()> {
        let serialized =
            toml::to_string_pretty(self).map_err(|e| ConsoleError::Serialization {
                context: "toml",
                details: e.to_string(),
            })?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConsoleError::io(parent, e))?;
        }
        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, serialized).map_err(|e| ConsoleError::io(&tmp, e))?;
        fs::rename(&tmp, path).map_err(|e| ConsoleError::io(path, e))?;
        Ok(())
    }

    /// Environment overrides: `NBC_SNAPSHOT_FILE`, `NBC_REFRESH_MS`,
    /// `NBC_BRAND`, `NBC_LOG_FILE`. Invalid values are ignored in favor of
    /// the file/default value.
    fn apply_env_overrides(&mut self) {
        if let Some(path) = env::var_os("NBC_SNAPSHOT_FILE") {
            self.paths.snapshot_file = PathBuf::from(path);
        }
        if let Some(path) = env::var_os("NBC_LOG_FILE") {
            self.paths.log_file = PathBuf::from(path);
        }
        if let Ok(brand) = env::var("NBC_BRAND") {
            if !brand.trim().is_empty() {
                self.console.brand = brand;
            }
        }
        if let Ok(raw) = env::var("NBC_REFRESH_MS") {
            if let Ok(ms) = raw.parse::<u64>() {
                self.console.refresh_ms = ms;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.console.refresh_ms == 0 {
            return Err(ConsoleError::InvalidConfig {
                details: "console.refresh_ms must be greater than zero".into(),
            });
        }
        if self.console.brand.trim().is_empty() {
            return Err(ConsoleError::InvalidConfig {
                details: "console.brand must not be empty".into(),
            });
        }
        Ok(())
    }
}
