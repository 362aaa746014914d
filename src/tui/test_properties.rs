//! Property-based tests for the classifier and reducer invariants.
//!
//! Uses `proptest` to verify that the decision table holds for arbitrary
//! inputs and that arbitrary message sequences keep the model consistent:
//! exactly one display mode, priority order respected, cursor bounded, no
//! panics.

use proptest::prelude::*;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use crate::project::record::{ConsoleSnapshot, ProjectRecord};
use crate::project::status::{GatewayStatus, ProjectStatus};
use crate::route::Route;
use crate::tui::classifier::{DisplayMode, classify, resolve_display};
use crate::tui::model::{ChromeOptions, ConsoleModel, ConsoleMsg, Product};
use crate::tui::update::update;

// ──────────────────── strategies ────────────────────

fn arb_status() -> impl Strategy<Value = ProjectStatus> {
    prop_oneof![
        Just(ProjectStatus::Inactive),
        Just(ProjectStatus::Upgrading),
        Just(ProjectStatus::Restoring),
        Just(ProjectStatus::ComingUp),
        Just(ProjectStatus::GoingDown),
        Just(ProjectStatus::Pausing),
        Just(ProjectStatus::ActiveHealthy),
        Just(ProjectStatus::Unknown),
    ]
}

fn arb_gateway() -> impl Strategy<Value = GatewayStatus> {
    prop_oneof![
        Just(GatewayStatus::Online),
        Just(GatewayStatus::Offline),
        Just(GatewayStatus::Unknown),
    ]
}

fn arb_route() -> impl Strategy<Value = Route> {
    prop_oneof![
        Just(Route::project_home("abc123")),
        Just(Route::parse("/project/abc123/editor")),
        Just(Route::parse("/project/abc123/sql")),
        Just(Route::parse("/project/abc123/database")),
        Just(Route::parse("/project/abc123/settings/general")),
        Just(Route::parse("/project/abc123/settings/database")),
        Just(Route::parse("/organizations")),
        Just(Route::parse("/")),
    ]
}

fn arb_project() -> impl Strategy<Value = ProjectRecord> {
    (arb_status(), arb_gateway()).prop_map(|(status, gateway_status)| ProjectRecord {
        ref_id: "abc123".into(),
        name: "orders".into(),
        status,
        gateway_status,
        ..ProjectRecord::default()
    })
}

fn arb_key() -> impl Strategy<Value = KeyEvent> {
    prop_oneof![
        Just(KeyCode::Char('1')),
        Just(KeyCode::Char('5')),
        Just(KeyCode::Char('8')),
        Just(KeyCode::Char('9')),
        Just(KeyCode::Char('[')),
        Just(KeyCode::Char(']')),
        Just(KeyCode::Char('m')),
        Just(KeyCode::Char('r')),
        Just(KeyCode::Char('?')),
        Just(KeyCode::Char('z')),
        Just(KeyCode::Enter),
        Just(KeyCode::Esc),
    ]
    .prop_map(|code| KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

fn arb_msg() -> impl Strategy<Value = ConsoleMsg> {
    prop_oneof![
        Just(ConsoleMsg::Tick),
        arb_key().prop_map(ConsoleMsg::Key),
        (40u16..200, 8u16..60).prop_map(|(cols, rows)| ConsoleMsg::Resize { cols, rows }),
        arb_project().prop_map(|p| {
            ConsoleMsg::SnapshotUpdate(Some(Box::new(ConsoleSnapshot {
                project: Some(p),
                ..ConsoleSnapshot::default()
            })))
        }),
        Just(ConsoleMsg::SnapshotUpdate(None)),
        (1u8..=8).prop_map(|n| ConsoleMsg::Navigate(Product::from_number(n).unwrap())),
    ]
}

// ──────────────────── classifier properties ────────────────────

proptest! {
    #[test]
    fn loading_always_yields_connecting(project in arb_project(), route in arb_route()) {
        prop_assert_eq!(
            resolve_display(true, Some(&project), &route),
            DisplayMode::Connecting
        );
    }

    #[test]
    fn evaluation_is_deterministic(project in arb_project(), route in arb_route()) {
        let first = resolve_display(false, Some(&project), &route);
        let second = resolve_display(false, Some(&project), &route);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn inactive_on_non_exempt_route_always_takes_over(
        gateway in arb_gateway(),
        route in arb_route(),
    ) {
        let project = ProjectRecord {
            status: ProjectStatus::Inactive,
            gateway_status: gateway,
            ..ProjectRecord::default()
        };
        let mode = resolve_display(false, Some(&project), &route);
        if route.paused_exempt() {
            prop_assert_ne!(mode, DisplayMode::PausedFullScreen);
        } else {
            prop_assert_eq!(mode, DisplayMode::PausedFullScreen);
        }
    }

    #[test]
    fn upgrading_dominates_everything_after_the_gate(
        gateway in arb_gateway(),
        route in arb_route(),
    ) {
        let project = ProjectRecord {
            status: ProjectStatus::Upgrading,
            gateway_status: gateway,
            ..ProjectRecord::default()
        };
        prop_assert_eq!(
            resolve_display(false, Some(&project), &route),
            DisplayMode::Upgrading
        );
    }

    #[test]
    fn unknown_status_never_selects_a_status_screen(
        gateway in arb_gateway(),
        route in arb_route(),
    ) {
        let project = ProjectRecord {
            status: ProjectStatus::Unknown,
            gateway_status: gateway,
            ..ProjectRecord::default()
        };
        let mode = classify(false, Some(&project), &route);
        // Only the gateway check may fire for a status this build predates.
        prop_assert!(matches!(
            mode,
            DisplayMode::Content | DisplayMode::OfflineGateway
        ));
        if mode == DisplayMode::OfflineGateway {
            prop_assert!(route.gateway_check_applies());
            prop_assert_eq!(gateway, GatewayStatus::Offline);
        }
    }

    #[test]
    fn offline_gateway_only_fires_when_check_applies(
        status in arb_status(),
        route in arb_route(),
    ) {
        let project = ProjectRecord {
            status,
            gateway_status: GatewayStatus::Offline,
            ..ProjectRecord::default()
        };
        let mode = resolve_display(false, Some(&project), &route);
        if mode == DisplayMode::OfflineGateway {
            prop_assert!(route.gateway_check_applies());
        }
    }
}

// ──────────────────── reducer properties ────────────────────

proptest! {
    #[test]
    fn reducer_never_panics_and_keeps_cursor_bounded(msgs in prop::collection::vec(arb_msg(), 0..40)) {
        let mut model = ConsoleModel::new(
            Route::project_home("abc123"),
            ChromeOptions::default(),
            "Nimbus Console",
        );
        for msg in msgs {
            let _ = update(&mut model, msg);
            prop_assert!(model.menu_cursor < 8);
            let (cols, rows) = model.terminal_size;
            prop_assert!(cols >= 40 && rows >= 8);
            // The route always stays project-scoped: navigation preserves
            // the ref, and nothing else rewrites it.
            prop_assert_eq!(model.route.project_ref(), Some("abc123"));
        }
    }

    #[test]
    fn display_mode_is_total_over_reducer_states(msgs in prop::collection::vec(arb_msg(), 0..40)) {
        let mut model = ConsoleModel::new(
            Route::project_home("abc123"),
            ChromeOptions::default(),
            "Nimbus Console",
        );
        for msg in msgs {
            let _ = update(&mut model, msg);
            // Calling the classifier is always safe, whatever state the
            // reducer left behind.
            let _ = model.display_mode();
        }
    }
}
