//! Project lifecycle and gateway reachability states.
//!
//! Both enums are decoded from externally-owned wire values. Unknown strings
//! map to the catch-all variants (fail-open for display purposes): a value
//! this shell has never seen must select the ordinary content view, never a
//! takeover screen.

use serde::{Deserialize, Serialize};

// ──────────────────── project status ────────────────────

/// Lifecycle status of a project, as reported by the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    /// Paused: compute released, data retained.
    Inactive,
    /// Infrastructure upgrade in progress.
    Upgrading,
    /// Restore from backup in progress.
    Restoring,
    /// Project is being provisioned or resumed.
    ComingUp,
    /// Shutdown in progress.
    GoingDown,
    /// Pause requested, still winding down.
    Pausing,
    /// Normal running state.
    #[default]
    ActiveHealthy,
    /// Forward-compatibility catch-all for wire values this build predates.
    Unknown,
}

impl ProjectStatus {
    /// Decode a SCREAMING_SNAKE wire value. Unknown strings map to
    /// [`Self::Unknown`].
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "INACTIVE" => Self::Inactive,
            "UPGRADING" => Self::Upgrading,
            "RESTORING" => Self::Restoring,
            "COMING_UP" => Self::ComingUp,
            "GOING_DOWN" => Self::GoingDown,
            "PAUSING" => Self::Pausing,
            "ACTIVE_HEALTHY" => Self::ActiveHealthy,
            _ => Self::Unknown,
        }
    }

    /// Canonical wire value for serialization.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Inactive => "INACTIVE",
            Self::Upgrading => "UPGRADING",
            Self::Restoring => "RESTORING",
            Self::ComingUp => "COMING_UP",
            Self::GoingDown => "GOING_DOWN",
            Self::Pausing => "PAUSING",
            Self::ActiveHealthy => "ACTIVE_HEALTHY",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Human-readable label for status display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inactive => "paused",
            Self::Upgrading => "upgrading",
            Self::Restoring => "restoring",
            Self::ComingUp => "coming up",
            Self::GoingDown => "going down",
            Self::Pausing => "pausing",
            Self::ActiveHealthy => "healthy",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the project is in the middle of winding down.
    #[must_use]
    pub const fn is_winding_down(self) -> bool {
        matches!(self, Self::GoingDown | Self::Pausing)
    }
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        Self::from_wire(&value)
    }
}

impl From<ProjectStatus> for String {
    fn from(value: ProjectStatus) -> Self {
        value.as_wire().to_owned()
    }
}

// ──────────────────── gateway reachability ────────────────────

/// Reachability of the project's data-access gateway.
///
/// `Unknown` is treated as reachable: a missing signal must not take over the
/// screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GatewayStatus {
    /// Gateway answered its last health probe.
    Online,
    /// Gateway is unreachable.
    Offline,
    /// No probe result available yet.
    #[default]
    Unknown,
}

impl GatewayStatus {
    /// Decode a wire value. Unknown strings map to [`Self::Unknown`].
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "ONLINE" => Self::Online,
            "OFFLINE" => Self::Offline,
            _ => Self::Unknown,
        }
    }

    /// Canonical wire value for serialization.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Whether the gateway should be treated as unreachable.
    #[must_use]
    pub const fn is_offline(self) -> bool {
        matches!(self, Self::Offline)
    }
}

impl From<String> for GatewayStatus {
    fn from(value: String) -> Self {
        Self::from_wire(&value)
    }
}

impl From<GatewayStatus> for String {
    fn from(value: GatewayStatus) -> Self {
        value.as_wire().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_statuses_case_insensitively() {
        assert_eq!(ProjectStatus::from_wire("coming_up"), ProjectStatus::ComingUp);
        assert_eq!(
            ProjectStatus::from_wire(" ACTIVE_HEALTHY "),
            ProjectStatus::ActiveHealthy
        );
    }

    #[test]
    fn unknown_wire_values_fail_open() {
        assert_eq!(
            ProjectStatus::from_wire("RESIZING_DISK"),
            ProjectStatus::Unknown
        );
        assert_eq!(GatewayStatus::from_wire("DEGRADED"), GatewayStatus::Unknown);
        assert!(!GatewayStatus::from_wire("DEGRADED").is_offline());
    }

    #[test]
    fn status_serde_uses_wire_strings() {
        let encoded = serde_json::to_string(&ProjectStatus::GoingDown).unwrap();
        assert_eq!(encoded, "\"GOING_DOWN\"");
        let decoded: ProjectStatus = serde_json::from_str("\"PAUSING\"").unwrap();
        assert_eq!(decoded, ProjectStatus::Pausing);
    }

    #[test]
    fn future_status_deserializes_to_unknown() {
        let decoded: ProjectStatus = serde_json::from_str("\"INIT_READ_REPLICA\"").unwrap();
        assert_eq!(decoded, ProjectStatus::Unknown);
    }
}
