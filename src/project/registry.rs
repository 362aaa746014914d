//! Read-mostly registries for the externally-owned selection state.
//!
//! The shell never mutates platform state: the fetcher (or test harness)
//! pushes records in, render paths take value snapshots out. Keeping reads
//! as cheap clones means the classifier always works on plain values and
//! stays pure (stale-then-fresh interleavings are safe by construction).

use std::collections::HashMap;
use std::env;

use parking_lot::RwLock;

use crate::project::record::{OrganizationRecord, ProjectRecord};

/// Holds the currently selected project, if any.
#[derive(Debug, Default)]
pub struct ProjectRegistry {
    selected: RwLock<Option<ProjectRecord>>,
}

impl ProjectRegistry {
    /// Empty registry (nothing selected).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selected project.
    pub fn set_selected(&self, record: Option<ProjectRecord>) {
        *self.selected.write() = record;
    }

    /// Value snapshot of the selected project.
    #[must_use]
    pub fn selected(&self) -> Option<ProjectRecord> {
        self.selected.read().clone()
    }
}

/// Holds the currently selected organization, if any.
#[derive(Debug, Default)]
pub struct OrganizationRegistry {
    selected: RwLock<Option<OrganizationRecord>>,
}

impl OrganizationRegistry {
    /// Empty registry (nothing selected).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selected organization.
    pub fn set_selected(&self, record: Option<OrganizationRecord>) {
        *self.selected.write() = record;
    }

    /// Value snapshot of the selected organization.
    #[must_use]
    pub fn selected(&self) -> Option<OrganizationRecord> {
        self.selected.read().clone()
    }
}

// ──────────────────── feature flags ────────────────────

/// Env var prefix for per-flag overrides, e.g. `NBC_FLAG_CONSOLE_INCIDENT_BANNER=1`.
const FLAG_ENV_PREFIX: &str = "NBC_FLAG_";

/// Config-seeded feature flags with environment overrides.
///
/// Lookup order: env override → seeded value → `false`. Flags gate chrome
/// details (e.g. the incident banner height), never the classification core.
#[derive(Debug, Default)]
pub struct FeatureFlags {
    seeds: RwLock<HashMap<String, bool>>,
}

impl FeatureFlags {
    /// Flags with no seeds (everything defaults to off).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from configuration.
    pub fn from_seeds<I>(seeds: I) -> Self
    where
        I: IntoIterator<Item = (String, bool)>,
    {
        Self {
            seeds: RwLock::new(seeds.into_iter().collect()),
        }
    }

    /// Set or replace a seed at runtime.
    pub fn set(&self, name: &str, enabled: bool) {
        self.seeds.write().insert(name.to_owned(), enabled);
    }

    /// Whether `name` is enabled.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        if let Some(forced) = env_override(name) {
            return forced;
        }
        self.seeds.read().get(name).copied().unwrap_or(false)
    }
}

fn env_override(name: &str) -> Option<bool> {
    let key = format!("{FLAG_ENV_PREFIX}{}", name.to_ascii_uppercase());
    let raw = env::var(key).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::status::ProjectStatus;

    #[test]
    fn project_registry_round_trips_selection() {
        let registry = ProjectRegistry::new();
        assert!(registry.selected().is_none());

        let record = ProjectRecord {
            ref_id: "abc".into(),
            name: "orders".into(),
            status: ProjectStatus::ComingUp,
            ..ProjectRecord::default()
        };
        registry.set_selected(Some(record.clone()));
        assert_eq!(registry.selected(), Some(record));

        registry.set_selected(None);
        assert!(registry.selected().is_none());
    }

    #[test]
    fn snapshot_reads_are_detached_from_later_writes() {
        let registry = OrganizationRegistry::new();
        registry.set_selected(Some(OrganizationRecord {
            slug: "acme".into(),
            name: "Acme Inc".into(),
        }));
        let before = registry.selected().unwrap();
        registry.set_selected(None);
        assert_eq!(before.slug, "acme");
    }

    #[test]
    fn unseeded_flags_default_off() {
        let flags = FeatureFlags::new();
        assert!(!flags.is_enabled("console_incident_banner"));
    }

    #[test]
    fn seeds_and_runtime_sets_are_visible() {
        let flags =
            FeatureFlags::from_seeds([("console_incident_banner".to_owned(), true)]);
        assert!(flags.is_enabled("console_incident_banner"));

        flags.set("console_incident_banner", false);
        assert!(!flags.is_enabled("console_incident_banner"));
    }
}
