//! Cross-module decision-plane tests: the full status × route × gateway
//! matrix, resolved end-to-end through records parsed from wire JSON.
//!
//! The unit tests in `tui::classifier` cover each rule in isolation; this
//! module pins the complete table so a priority reordering anywhere in the
//! chain shows up as a diff against the expected matrix.

use crate::project::record::ProjectRecord;
use crate::project::status::{GatewayStatus, ProjectStatus};
use crate::route::Route;
use crate::tui::classifier::{DisplayMode, resolve_display};

fn record(status: ProjectStatus, gateway: GatewayStatus) -> ProjectRecord {
    ProjectRecord {
        ref_id: "abc123".into(),
        name: "orders-prod".into(),
        status,
        gateway_status: gateway,
        ..ProjectRecord::default()
    }
}

const ROUTES: [&str; 5] = [
    "/project/abc123",
    "/project/abc123/sql",
    "/project/abc123/settings/general",
    "/project/abc123/settings/database",
    "/organizations",
];

#[test]
fn full_matrix_with_gateway_online() {
    use DisplayMode::{Building, Content, PausedFullScreen, Pausing, Restoring, Upgrading};

    // Rows: status; columns follow ROUTES order.
    let expected: [(ProjectStatus, [DisplayMode; 5]); 8] = [
        (
            ProjectStatus::Inactive,
            [Content, PausedFullScreen, Content, Content, PausedFullScreen],
        ),
        (
            ProjectStatus::Upgrading,
            [Upgrading, Upgrading, Upgrading, Upgrading, Upgrading],
        ),
        (
            ProjectStatus::Restoring,
            [Restoring, Restoring, Content, Restoring, Restoring],
        ),
        (
            ProjectStatus::ComingUp,
            [Building, Building, Content, Building, Building],
        ),
        (
            ProjectStatus::GoingDown,
            [Pausing, Pausing, Pausing, Pausing, Pausing],
        ),
        (
            ProjectStatus::Pausing,
            [Pausing, Pausing, Pausing, Pausing, Pausing],
        ),
        (
            ProjectStatus::ActiveHealthy,
            [Content, Content, Content, Content, Content],
        ),
        (
            ProjectStatus::Unknown,
            [Content, Content, Content, Content, Content],
        ),
    ];

    for (status, row) in expected {
        let project = record(status, GatewayStatus::Online);
        for (path, want) in ROUTES.iter().zip(row) {
            let got = resolve_display(false, Some(&project), &Route::parse(path));
            assert_eq!(got, want, "status={status:?} route={path}");
        }
    }
}

#[test]
fn full_matrix_with_gateway_offline() {
    use DisplayMode::{
        Content, OfflineGateway, PausedFullScreen, Pausing, Upgrading,
    };

    // An offline gateway converts every route where the reachability check
    // applies, unless a higher-priority status already took the screen.
    let expected: [(ProjectStatus, [DisplayMode; 5]); 5] = [
        (
            ProjectStatus::Inactive,
            [
                Content,
                PausedFullScreen,
                Content,
                Content,
                PausedFullScreen,
            ],
        ),
        (
            ProjectStatus::Upgrading,
            [Upgrading, Upgrading, Upgrading, Upgrading, Upgrading],
        ),
        (
            ProjectStatus::Pausing,
            [Pausing, Pausing, Pausing, Pausing, Pausing],
        ),
        // Restoring on an exempt-from-gateway route still restores; on a
        // checked route the offline gateway wins (priority 4 over 5).
        (
            ProjectStatus::Restoring,
            [
                DisplayMode::Restoring,
                OfflineGateway,
                Content,
                DisplayMode::Restoring,
                OfflineGateway,
            ],
        ),
        (
            ProjectStatus::ActiveHealthy,
            [Content, OfflineGateway, Content, Content, OfflineGateway],
        ),
    ];

    for (status, row) in expected {
        let project = record(status, GatewayStatus::Offline);
        for (path, want) in ROUTES.iter().zip(row) {
            let got = resolve_display(false, Some(&project), &Route::parse(path));
            assert_eq!(got, want, "status={status:?} route={path}");
        }
    }
}

#[test]
fn loading_column_is_connecting_for_every_status() {
    for status in [
        ProjectStatus::Inactive,
        ProjectStatus::Upgrading,
        ProjectStatus::Restoring,
        ProjectStatus::ComingUp,
        ProjectStatus::GoingDown,
        ProjectStatus::Pausing,
        ProjectStatus::ActiveHealthy,
        ProjectStatus::Unknown,
    ] {
        let project = record(status, GatewayStatus::Offline);
        for path in ROUTES {
            assert_eq!(
                resolve_display(true, Some(&project), &Route::parse(path)),
                DisplayMode::Connecting,
                "status={status:?} route={path}"
            );
        }
    }
}

#[test]
fn wire_json_resolves_like_constructed_records() {
    let raw = r#"{
        "ref": "abc123",
        "name": "orders-prod",
        "status": "COMING_UP",
        "gateway_status": "OFFLINE"
    }"#;
    let project: ProjectRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(
        resolve_display(false, Some(&project), &Route::parse("/project/abc123/sql")),
        DisplayMode::OfflineGateway
    );
    assert_eq!(
        resolve_display(
            false,
            Some(&project),
            &Route::parse("/project/abc123/settings/general")
        ),
        DisplayMode::Content
    );
}
