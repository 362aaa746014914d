//! NBC-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Top-level error type for the Nimbus console shell.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("[NBC-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[NBC-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[NBC-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[NBC-2001] snapshot read failure for {path}: {details}")]
    SnapshotRead { path: PathBuf, details: String },

    #[error("[NBC-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[NBC-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConsoleError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "NBC-1001",
            Self::MissingConfig { .. } => "NBC-1002",
            Self::ConfigParse { .. } => "NBC-1003",
            Self::SnapshotRead { .. } => "NBC-2001",
            Self::Serialization { .. } => "NBC-2101",
            Self::Io { .. } => "NBC-3002",
        }
    }

    /// Whether retrying might resolve the failure.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::SnapshotRead { .. } | Self::Io { .. })
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for ConsoleError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
