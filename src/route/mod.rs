//! Route model: parsed console paths and per-page check exemptions.
//!
//! Routes look like `/project/{ref}`, `/project/{ref}/sql`, or
//! `/project/{ref}/settings/general`. The route influences classification
//! only through the exemption predicates below: certain pages are rendered
//! without requiring a live gateway or database connection.
//!
//! Exemption sets:
//! - **paused**: the project home (`/project/{ref}` exactly) and the whole
//!   settings subtree stay reachable while a project is paused.
//! - **gateway reachability**: same pages: they contain no data-backed
//!   panes, so an offline gateway must not take over the screen.
//! - **database connection**: only `/project/{ref}/settings/general`
//!   (exact), the page used to resume/diagnose a project mid-build.
//!
//! Paths outside `/project/{ref}` carry no exemption: every check applies.

use std::fmt;

// ──────────────────── route ────────────────────

/// A parsed console navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    raw: String,
    project_ref: Option<String>,
    /// Path segments after the project ref (empty for the project home).
    sections: Vec<String>,
}

impl Route {
    /// Parse a navigation path. Parsing never fails: anything that does not
    /// match `/project/{ref}/...` is kept verbatim as a non-project route.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let raw = normalize(path);
        let mut segments = raw.split('/').filter(|s| !s.is_empty());

        if segments.next() == Some("project") {
            if let Some(ref_id) = segments.next() {
                return Self {
                    raw: raw.clone(),
                    project_ref: Some(ref_id.to_owned()),
                    sections: segments.map(str::to_owned).collect(),
                };
            }
        }

        Self {
            raw,
            project_ref: None,
            sections: Vec::new(),
        }
    }

    /// Route for a project's home page.
    #[must_use]
    pub fn project_home(ref_id: &str) -> Self {
        Self::parse(&format!("/project/{ref_id}"))
    }

    /// The original (normalized) path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Project ref embedded in the path, when this is a project route.
    #[must_use]
    pub fn project_ref(&self) -> Option<&str> {
        self.project_ref.as_deref()
    }

    /// Section segments after the ref (empty for the project home).
    #[must_use]
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// `/project/{ref}` with no further segments.
    #[must_use]
    pub fn is_project_home(&self) -> bool {
        self.project_ref.is_some() && self.sections.is_empty()
    }

    /// Anywhere under `/project/{ref}/settings` (prefix match).
    #[must_use]
    pub fn is_in_settings(&self) -> bool {
        self.project_ref.is_some() && self.sections.first().is_some_and(|s| s == "settings")
    }

    /// Exactly `/project/{ref}/settings/general`.
    #[must_use]
    pub fn is_settings_general(&self) -> bool {
        self.project_ref.is_some()
            && self.sections.len() == 2
            && self.sections[0] == "settings"
            && self.sections[1] == "general"
    }

    // ──────────────────── exemption predicates ────────────────────

    /// Whether the paused full-screen takeover is suppressed for this page.
    #[must_use]
    pub fn paused_exempt(&self) -> bool {
        self.is_project_home() || self.is_in_settings()
    }

    /// Whether the gateway reachability check applies to this page.
    #[must_use]
    pub fn gateway_check_applies(&self) -> bool {
        !(self.is_project_home() || self.is_in_settings())
    }

    /// Whether the database-connection check applies to this page.
    #[must_use]
    pub fn db_check_applies(&self) -> bool {
        !self.is_settings_general()
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::parse("/")
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Collapse duplicate slashes and trailing slash; guarantee a leading slash.
fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    out.push('/');
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if !out.ends_with('/') {
            out.push('/');
        }
        out.push_str(segment);
    }
    out
}
