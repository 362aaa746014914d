//! Display-mode classifier: the decision core of the console shell.
//!
//! Given the loading flag, the (possibly absent) project record, and the
//! current route, select exactly one [`DisplayMode`]. The rules form an
//! ordered decision table, first match wins with the most disruptive state first,
//! rather than a nested conditional tree, so priority order stays auditable
//! and each rule is testable in isolation from rendering.
//!
//! **Design invariant:** both functions here are pure. No hidden state, no
//! memoization, no I/O; repeated evaluation with stale-then-fresh inputs is
//! always safe.

use crate::project::record::ProjectRecord;
use crate::project::status::ProjectStatus;
use crate::route::Route;

/// The single screen selected for a frame. Exactly one mode is active per
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Project record not loaded yet.
    Connecting,
    /// Infrastructure upgrade in progress.
    Upgrading,
    /// Project is winding down (pause or shutdown requested).
    Pausing,
    /// Data-access gateway unreachable on a page that needs it.
    OfflineGateway,
    /// Restore from backup in progress.
    Restoring,
    /// Project is being provisioned or resumed.
    Building,
    /// Paused project on a non-exempt page: full-screen takeover.
    PausedFullScreen,
    /// No special state: render the page content.
    Content,
}

impl DisplayMode {
    /// Wire-style identifier, used by `nbc status --json` and the event log.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Connecting => "CONNECTING",
            Self::Upgrading => "UPGRADING",
            Self::Pausing => "PAUSING",
            Self::OfflineGateway => "OFFLINE_GATEWAY",
            Self::Restoring => "RESTORING",
            Self::Building => "BUILDING",
            Self::PausedFullScreen => "PAUSED_FULL_SCREEN",
            Self::Content => "CONTENT",
        }
    }

    /// Headline shown on the takeover screen for this mode.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Connecting => "Connecting to project",
            Self::Upgrading => "Upgrading project",
            Self::Pausing => "Pausing project",
            Self::OfflineGateway => "Project API is unreachable",
            Self::Restoring => "Restoring project",
            Self::Building => "Setting up project",
            Self::PausedFullScreen => "Project is paused",
            Self::Content => "",
        }
    }

    /// Whether this mode renders the ordinary page content.
    #[must_use]
    pub const fn is_content(self) -> bool {
        matches!(self, Self::Content)
    }
}

/// Ordered status classification, without the paused gate.
///
/// Rules, first match wins:
/// 1. loading or absent record → [`DisplayMode::Connecting`]
/// 2. `Upgrading` → [`DisplayMode::Upgrading`]
/// 3. `GoingDown` or `Pausing` → [`DisplayMode::Pausing`]
/// 4. gateway check applies to the route and gateway offline →
///    [`DisplayMode::OfflineGateway`]
/// 5. db check applies and `Restoring` → [`DisplayMode::Restoring`]
/// 6. db check applies and `ComingUp` → [`DisplayMode::Building`]
/// 7. otherwise → [`DisplayMode::Content`]
///
/// Unknown/future statuses fall through to `Content`; a deliberate
/// fallback, not an error.
#[must_use]
pub fn classify(loading: bool, project: Option<&ProjectRecord>, route: &Route) -> DisplayMode {
    let record = if loading { None } else { project };
    let Some(record) = record else {
        return DisplayMode::Connecting;
    };

    match record.status {
        ProjectStatus::Upgrading => return DisplayMode::Upgrading,
        ProjectStatus::GoingDown | ProjectStatus::Pausing => return DisplayMode::Pausing,
        _ => {}
    }

    if route.gateway_check_applies() && record.gateway_status.is_offline() {
        return DisplayMode::OfflineGateway;
    }

    if route.db_check_applies() {
        match record.status {
            ProjectStatus::Restoring => return DisplayMode::Restoring,
            ProjectStatus::ComingUp => return DisplayMode::Building,
            _ => {}
        }
    }

    DisplayMode::Content
}

/// Full resolution: the paused gate wraps [`classify`].
///
/// An `Inactive` project on a non-exempt page takes over the whole screen
/// before any other rule is consulted. The gate never fires while the record
/// is still loading: there is no status to gate on, and `Connecting` must
/// win.
#[must_use]
pub fn resolve_display(
    loading: bool,
    project: Option<&ProjectRecord>,
    route: &Route,
) -> DisplayMode {
    if !loading {
        if let Some(record) = project {
            if record.status == ProjectStatus::Inactive && !route.paused_exempt() {
                return DisplayMode::PausedFullScreen;
            }
        }
    }
    classify(loading, project, route)
}
