//! Records deserialized from the console snapshot file.
//!
//! The snapshot is written by the external status fetcher; this shell only
//! reads it. Every field carries `#[serde(default)]` tolerance so a fetcher
//! running a newer or older schema still yields a usable snapshot.

#![allow(missing_docs)]

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::errors::{ConsoleError, Result};
use crate::project::status::{GatewayStatus, ProjectStatus};

/// A project as seen by the console.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    /// Short unique reference, as used in routes (`/project/{ref}`).
    #[serde(rename = "ref")]
    pub ref_id: String,
    /// Display name.
    pub name: String,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Data-access gateway reachability.
    pub gateway_status: GatewayStatus,
    /// Hosting region identifier, when known.
    pub region: Option<String>,
    /// Database engine version string, when known.
    pub database_version: Option<String>,
}

/// The organization owning the selected project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationRecord {
    /// URL-safe slug.
    pub slug: String,
    /// Display name.
    pub name: String,
}

/// Full console snapshot as written by the external fetcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSnapshot {
    pub version: u32,
    /// RFC 3339 UTC timestamp of the fetch.
    pub generated_at: String,
    /// Currently selected project, absent while the fetcher is still loading.
    pub project: Option<ProjectRecord>,
    /// Currently selected organization.
    pub organization: Option<OrganizationRecord>,
    /// Table currently open in the table editor, used for title building.
    pub selected_table: Option<String>,
}

impl ConsoleSnapshot {
    /// Strict loader with typed errors, for tooling that must distinguish
    /// "missing" from "malformed". The shell's render path uses the lenient
    /// adapter instead.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConsoleError::SnapshotRead {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Age of this snapshot relative to `now`.
    ///
    /// Returns `None` when `generated_at` is absent or unparseable; callers
    /// treat that as "age unknown", not as fresh.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        let generated = DateTime::parse_from_rfc3339(&self.generated_at).ok()?;
        Some(now.signed_duration_since(generated.with_timezone(&Utc)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot_json() -> &'static str {
        r#"{
            "version": 1,
            "generated_at": "2026-03-01T12:00:00Z",
            "project": {
                "ref": "abcdefghij",
                "name": "orders-prod",
                "status": "ACTIVE_HEALTHY",
                "gateway_status": "ONLINE",
                "region": "eu-central-1"
            },
            "organization": { "slug": "acme", "name": "Acme Inc" },
            "selected_table": "invoices"
        }"#
    }

    #[test]
    fn decodes_full_snapshot() {
        let snapshot: ConsoleSnapshot = serde_json::from_str(sample_snapshot_json()).unwrap();
        let project = snapshot.project.as_ref().unwrap();
        assert_eq!(project.ref_id, "abcdefghij");
        assert_eq!(project.status, ProjectStatus::ActiveHealthy);
        assert_eq!(project.gateway_status, GatewayStatus::Online);
        assert_eq!(snapshot.selected_table.as_deref(), Some("invoices"));
    }

    #[test]
    fn tolerates_missing_fields() {
        let snapshot: ConsoleSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.project.is_none());
        assert!(snapshot.organization.is_none());
        assert_eq!(snapshot.version, 0);
    }

    #[test]
    fn strict_load_reports_missing_file_with_code() {
        let err =
            ConsoleSnapshot::load(Path::new("/nonexistent/console_snapshot.json")).unwrap_err();
        assert_eq!(err.code(), "NBC-2001");
    }

    #[test]
    fn age_is_none_for_unparseable_timestamp() {
        let snapshot = ConsoleSnapshot {
            generated_at: "yesterday-ish".to_owned(),
            ..ConsoleSnapshot::default()
        };
        assert!(snapshot.age(Utc::now()).is_none());
    }

    #[test]
    fn age_reflects_generated_at() {
        let snapshot = ConsoleSnapshot {
            generated_at: "2026-03-01T12:00:00Z".to_owned(),
            ..ConsoleSnapshot::default()
        };
        let now = DateTime::parse_from_rfc3339("2026-03-01T12:00:45Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(snapshot.age(now).unwrap().num_seconds(), 45);
    }
}
