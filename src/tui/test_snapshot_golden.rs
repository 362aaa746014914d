//! Structural snapshot tests for rendered frames across terminal sizes.
//!
//! These tests render each display mode at known dimensions with
//! deterministic mock data and assert that the critical landmarks (badges,
//! section headers, menu entries, footer hints) are present, so state
//! information is never lost during render refactoring.
//!
//! # Dimensions covered
//!
//! - **Narrow**: 80x24, product menu collapsed
//! - **Wide**: 120x40, product menu visible

use crate::project::record::{OrganizationRecord, ProjectRecord};
use crate::project::status::{GatewayStatus, ProjectStatus};
use crate::route::Route;
use crate::tui::classifier::DisplayMode;
use crate::tui::model::{ChromeOptions, ConsoleModel, Overlay};
use crate::tui::render::render_to_string;

// ──────────────────── fixtures ────────────────────

fn base_model(status: ProjectStatus, gateway: GatewayStatus, route: &str) -> ConsoleModel {
    let mut model = ConsoleModel::new(
        Route::parse(route),
        ChromeOptions::default(),
        "Nimbus Console",
    );
    model.loading = false;
    model.project = Some(ProjectRecord {
        ref_id: "abc123".into(),
        name: "orders-prod".into(),
        status,
        gateway_status: gateway,
        region: Some("eu-central-1".into()),
        database_version: Some("postgres 15.4".into()),
    });
    model.organization = Some(OrganizationRecord {
        slug: "acme".into(),
        name: "Acme Inc".into(),
    });
    model.terminal_size = (80, 24);
    model
}

fn frame_lines(frame: &str) -> Vec<&str> {
    frame.split('\n').collect()
}

// ──────────────────── geometry ────────────────────

#[test]
fn narrow_and_wide_frames_keep_exact_geometry() {
    for (cols, rows) in [(80u16, 24u16), (120, 40)] {
        let mut model = base_model(
            ProjectStatus::ActiveHealthy,
            GatewayStatus::Online,
            "/project/abc123",
        );
        model.terminal_size = (cols, rows);
        let frame = render_to_string(&model);
        let lines = frame_lines(&frame);
        assert_eq!(lines.len(), usize::from(rows), "{cols}x{rows}");
        assert!(
            lines.iter().all(|l| l.chars().count() <= usize::from(cols)),
            "{cols}x{rows}"
        );
    }
}

// ──────────────────── content chrome ────────────────────

#[test]
fn content_frame_carries_chrome_landmarks() {
    let model = base_model(
        ProjectStatus::ActiveHealthy,
        GatewayStatus::Online,
        "/project/abc123",
    );
    let frame = render_to_string(&model);

    // Header: brand, title chain, status badge.
    assert!(frame.contains("Nimbus Console"));
    assert!(frame.contains("orders-prod | Acme Inc"));
    assert!(frame.contains("[HEALTHY]"));
    // Body: page section and project facts.
    assert!(frame.contains("── Home"));
    assert!(frame.contains("eu-central-1"));
    // Footer hints.
    assert!(frame.contains("q:quit"));
}

#[test]
fn wide_frame_shows_product_menu_labels() {
    let mut model = base_model(
        ProjectStatus::ActiveHealthy,
        GatewayStatus::Online,
        "/project/abc123/sql",
    );
    model.options.show_product_menu = true;
    model.terminal_size = (120, 40);
    let frame = render_to_string(&model);
    assert!(frame.contains("SQL Editor"));
    assert!(frame.contains("Table Editor"));

    // The same model on a narrow terminal collapses the menu.
    model.terminal_size = (80, 24);
    let narrow = render_to_string(&model);
    assert!(!narrow.contains("Table Editor"));
}

#[test]
fn hidden_header_removes_brand_line() {
    let mut model = base_model(
        ProjectStatus::ActiveHealthy,
        GatewayStatus::Online,
        "/project/abc123",
    );
    model.options.hide_header = true;
    let frame = render_to_string(&model);
    assert!(!frame.contains("Nimbus Console  ·"));
}

// ──────────────────── takeover screens ────────────────────

#[test]
fn every_takeover_mode_renders_its_badge_and_detail() {
    let cases = [
        (ProjectStatus::Upgrading, GatewayStatus::Online, DisplayMode::Upgrading),
        (ProjectStatus::Pausing, GatewayStatus::Online, DisplayMode::Pausing),
        (ProjectStatus::GoingDown, GatewayStatus::Online, DisplayMode::Pausing),
        (ProjectStatus::Restoring, GatewayStatus::Online, DisplayMode::Restoring),
        (ProjectStatus::ComingUp, GatewayStatus::Online, DisplayMode::Building),
        (
            ProjectStatus::ActiveHealthy,
            GatewayStatus::Offline,
            DisplayMode::OfflineGateway,
        ),
        (
            ProjectStatus::Inactive,
            GatewayStatus::Online,
            DisplayMode::PausedFullScreen,
        ),
    ];
    for (status, gateway, expected) in cases {
        let model = base_model(status, gateway, "/project/abc123/sql");
        assert_eq!(model.display_mode(), expected);
        let frame = render_to_string(&model);
        assert!(
            frame.contains(expected.as_wire()),
            "badge missing for {expected:?}"
        );
        assert!(
            frame.contains(expected.headline()),
            "headline missing for {expected:?}"
        );
    }
}

#[test]
fn connecting_frame_renders_while_loading() {
    let mut model = base_model(
        ProjectStatus::ActiveHealthy,
        GatewayStatus::Online,
        "/project/abc123",
    );
    model.loading = true;
    let frame = render_to_string(&model);
    assert!(frame.contains("CONNECTING"));
    assert!(frame.contains("Fetching the latest project state"));
}

// ──────────────────── overlays and banner ────────────────────

#[test]
fn help_overlay_covers_page_content() {
    let mut model = base_model(
        ProjectStatus::ActiveHealthy,
        GatewayStatus::Online,
        "/project/abc123",
    );
    model.active_overlay = Some(Overlay::Help);
    let frame = render_to_string(&model);
    assert!(frame.contains("── Keyboard"));
    assert!(frame.contains("toggle this help"));
    assert!(!frame.contains("── Home"));
}

#[test]
fn incident_banner_occupies_the_first_row() {
    let mut model = base_model(
        ProjectStatus::ActiveHealthy,
        GatewayStatus::Online,
        "/project/abc123",
    );
    model.incident_banner = true;
    let frame = render_to_string(&model);
    let lines = frame_lines(&frame);
    assert!(lines[0].contains("Ongoing platform incident"));
    assert!(lines[1].contains("Nimbus Console"));
}
