//! Display title construction.
//!
//! Priority: explicit title > `"{table} | {project} | {org}"` >
//! `"{project} | {org}"` > `"{org}"` > brand string. Pure string formatting;
//! priority order is the only invariant.

use crate::project::record::{OrganizationRecord, ProjectRecord};

/// Inputs for [`build_title`]. All fields optional except the brand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleContext<'a> {
    /// Explicit page title; wins over everything else when present.
    pub explicit: Option<&'a str>,
    /// Table open in the editor.
    pub table_name: Option<&'a str>,
    /// Selected project.
    pub project: Option<&'a ProjectRecord>,
    /// Selected organization.
    pub organization: Option<&'a OrganizationRecord>,
}

/// Build the display title for the current frame.
#[must_use]
pub fn build_title(context: &TitleContext<'_>, brand: &str) -> String {
    if let Some(explicit) = non_empty(context.explicit) {
        return explicit.to_owned();
    }

    let project = context.project.map(|p| p.name.as_str()).and_then(|n| non_empty(Some(n)));
    let org = context
        .organization
        .map(|o| o.name.as_str())
        .and_then(|n| non_empty(Some(n)));

    match (non_empty(context.table_name), project, org) {
        (Some(table), Some(project), Some(org)) => format!("{table} | {project} | {org}"),
        (_, Some(project), Some(org)) => format!("{project} | {org}"),
        (_, _, Some(org)) => org.to_owned(),
        _ => brand.to_owned(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRAND: &str = "Nimbus Console";

    fn project(name: &str) -> ProjectRecord {
        ProjectRecord {
            name: name.to_owned(),
            ..ProjectRecord::default()
        }
    }

    fn org(name: &str) -> OrganizationRecord {
        OrganizationRecord {
            slug: name.to_ascii_lowercase(),
            name: name.to_owned(),
        }
    }

    #[test]
    fn explicit_title_wins_over_everything() {
        let p = project("orders-prod");
        let o = org("Acme");
        let context = TitleContext {
            explicit: Some("X"),
            table_name: Some("invoices"),
            project: Some(&p),
            organization: Some(&o),
        };
        assert_eq!(build_title(&context, BRAND), "X");
    }

    #[test]
    fn table_project_org_chain() {
        let p = project("orders-prod");
        let o = org("Acme");
        let context = TitleContext {
            explicit: None,
            table_name: Some("invoices"),
            project: Some(&p),
            organization: Some(&o),
        };
        assert_eq!(build_title(&context, BRAND), "invoices | orders-prod | Acme");
    }

    #[test]
    fn project_org_without_table() {
        let p = project("orders-prod");
        let o = org("Acme");
        let context = TitleContext {
            project: Some(&p),
            organization: Some(&o),
            ..TitleContext::default()
        };
        assert_eq!(build_title(&context, BRAND), "orders-prod | Acme");
    }

    #[test]
    fn org_only_then_brand() {
        let o = org("Acme");
        let context = TitleContext {
            organization: Some(&o),
            ..TitleContext::default()
        };
        assert_eq!(build_title(&context, BRAND), "Acme");
        assert_eq!(build_title(&TitleContext::default(), BRAND), BRAND);
    }

    #[test]
    fn table_without_project_does_not_leak_into_title() {
        let o = org("Acme");
        let context = TitleContext {
            table_name: Some("invoices"),
            organization: Some(&o),
            ..TitleContext::default()
        };
        assert_eq!(build_title(&context, BRAND), "Acme");
    }

    #[test]
    fn whitespace_only_explicit_title_is_ignored() {
        let context = TitleContext {
            explicit: Some("   "),
            ..TitleContext::default()
        };
        assert_eq!(build_title(&context, BRAND), BRAND);
    }
}
