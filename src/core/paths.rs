//! Well-known file locations and path normalization helpers.

use std::env;
use std::path::{Component, Path, PathBuf};

/// Directory name used under the XDG config/state roots.
const APP_DIR: &str = "nbc";

/// Resolve the configuration directory: `$XDG_CONFIG_HOME/nbc` or
/// `$HOME/.config/nbc`. Falls back to the current directory when neither
/// variable is set (e.g. stripped-down containers).
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(base) = env::var_os("XDG_CONFIG_HOME") {
        return PathBuf::from(base).join(APP_DIR);
    }
    if let Some(home) = env::var_os("HOME") {
        return PathBuf::from(home).join(".config").join(APP_DIR);
    }
    PathBuf::from(".").join(APP_DIR)
}

/// Resolve the state directory: `$XDG_STATE_HOME/nbc` or
/// `$HOME/.local/state/nbc`, with the same fallback chain as [`config_dir`].
#[must_use]
pub fn state_dir() -> PathBuf {
    if let Some(base) = env::var_os("XDG_STATE_HOME") {
        return PathBuf::from(base).join(APP_DIR);
    }
    if let Some(home) = env::var_os("HOME") {
        return PathBuf::from(home).join(".local").join("state").join(APP_DIR);
    }
    PathBuf::from(".").join(APP_DIR)
}

/// Default configuration file path.
#[must_use]
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Default console snapshot path (written by the external status fetcher).
#[must_use]
pub fn default_snapshot_path() -> PathBuf {
    state_dir().join("console_snapshot.json")
}

/// Default JSONL event-log path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    state_dir().join("nbc.jsonl")
}

/// Resolve a path to an absolute, normalized path.
///
/// Existing paths are canonicalized (resolving symlinks). Nonexistent paths
/// are made absolute relative to CWD with `..`/`.` resolved syntactically, so
/// a snapshot path can be configured before the fetcher first writes it.
#[must_use]
pub fn resolve_absolute_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    };

    if let Ok(canonical) = std::fs::canonicalize(&absolute) {
        return canonical;
    }

    normalize_syntactic(&absolute)
}

fn normalize_syntactic(path: &Path) -> PathBuf {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir | Component::Normal(_) => {
                components.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if let Some(Component::Normal(_)) = components.last() {
                    components.pop();
                }
            }
        }
    }
    components.into_iter().collect()
}
