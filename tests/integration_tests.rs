//! End-to-end flows through the public API: config round-trips, snapshot
//! ingestion, and display-mode resolution the way the `nbc` binary wires
//! them together.

use std::fs;
use std::time::Duration;

use nimbus_console::core::config::ConsoleConfig;
use nimbus_console::core::errors::ConsoleError;
use nimbus_console::logger::jsonl::{EventType, JsonlLogger, LogEntry, Severity};
use nimbus_console::prelude::*;
use nimbus_console::tui::adapters::{FileSnapshotAdapter, SnapshotAdapter};

fn write_snapshot(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("console_snapshot.json");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn config_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = ConsoleConfig::default();
    config.console.brand = "Acme DB Console".to_owned();
    config.console.refresh_ms = 250;
    config.flags.insert("console_incident_banner".to_owned(), true);
    config.save(&path).unwrap();

    let loaded = ConsoleConfig::load(&path).unwrap();
    assert_eq!(loaded.console.brand, "Acme DB Console");
    assert_eq!(loaded.console.refresh_ms, 250);
    assert_eq!(loaded.flags.get("console_incident_banner"), Some(&true));
}

#[test]
fn missing_config_is_a_typed_error_but_defaults_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let err = ConsoleConfig::load(&path).unwrap_err();
    assert_eq!(err.code(), "NBC-1002");

    let config = ConsoleConfig::load_or_default(Some(&path)).unwrap();
    assert_eq!(config.console.refresh_ms, 1000);
}

#[test]
fn malformed_config_surfaces_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "console = \"not a table\"").unwrap();

    let err = ConsoleConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConsoleError::ConfigParse { .. }));
}

#[test]
fn snapshot_file_drives_display_mode_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(
        &dir,
        r#"{
            "version": 1,
            "generated_at": "2026-03-01T12:00:00Z",
            "project": {
                "ref": "abc123",
                "name": "orders-prod",
                "status": "RESTORING",
                "gateway_status": "OFFLINE"
            },
            "organization": { "slug": "acme", "name": "Acme Inc" }
        }"#,
    );

    let adapter = FileSnapshotAdapter::new(Duration::from_secs(30));
    let snapshot = adapter.read_snapshot(&path).unwrap();
    let project = snapshot.project.as_ref();

    // Gateway offline beats the restore screen on a checked route...
    assert_eq!(
        resolve_display(false, project, &Route::parse("/project/abc123/sql")),
        DisplayMode::OfflineGateway
    );
    // ...while the settings subtree skips both checks.
    assert_eq!(
        resolve_display(
            false,
            project,
            &Route::parse("/project/abc123/settings/database")
        ),
        DisplayMode::Restoring
    );
    assert_eq!(
        resolve_display(
            false,
            project,
            &Route::parse("/project/abc123/settings/general")
        ),
        DisplayMode::Content
    );
}

#[test]
fn unreadable_snapshot_means_connecting() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(&dir, "{truncated");

    let adapter = FileSnapshotAdapter::new(Duration::from_secs(30));
    let snapshot = adapter.read_snapshot(&path);
    assert!(snapshot.is_none());

    let mode = resolve_display(
        snapshot.is_none(),
        None,
        &Route::parse("/project/abc123/sql"),
    );
    assert_eq!(mode, DisplayMode::Connecting);
}

#[test]
fn title_chain_matches_snapshot_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(
        &dir,
        r#"{
            "project": { "ref": "abc123", "name": "orders-prod", "status": "ACTIVE_HEALTHY" },
            "organization": { "slug": "acme", "name": "Acme Inc" },
            "selected_table": "invoices"
        }"#,
    );
    let snapshot = ConsoleSnapshot::load(&path).unwrap();

    let title = build_title(
        &TitleContext {
            explicit: None,
            table_name: snapshot.selected_table.as_deref(),
            project: snapshot.project.as_ref(),
            organization: snapshot.organization.as_ref(),
        },
        "Nimbus Console",
    );
    assert_eq!(title, "invoices | orders-prod | Acme Inc");
}

#[test]
fn registries_hand_value_snapshots_to_the_classifier() {
    let projects = ProjectRegistry::new();
    projects.set_selected(Some(ProjectRecord {
        ref_id: "abc123".into(),
        name: "orders-prod".into(),
        status: ProjectStatus::ComingUp,
        gateway_status: GatewayStatus::Online,
        ..ProjectRecord::default()
    }));

    let selected = projects.selected();
    let route = Route::parse("/project/abc123/editor");
    assert_eq!(
        resolve_display(false, selected.as_ref(), &route),
        DisplayMode::Building
    );

    // A later write does not disturb the value snapshot already taken.
    projects.set_selected(None);
    assert_eq!(
        resolve_display(false, selected.as_ref(), &route),
        DisplayMode::Building
    );
}

#[test]
fn event_log_captures_mode_transitions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nbc.jsonl");
    let mut logger = JsonlLogger::new(&path);

    logger.log(&LogEntry::new(EventType::SessionStart, Severity::Info));
    logger.log(
        &LogEntry::new(EventType::DisplayModeChange, Severity::Info)
            .with_mode(DisplayMode::PausedFullScreen.as_wire())
            .with_route("/project/abc123/sql"),
    );

    let raw = fs::read_to_string(&path).unwrap();
    assert_eq!(raw.lines().count(), 2);
    assert!(raw.contains("PAUSED_FULL_SCREEN"));
    assert!(raw.contains("display_mode_change"));
}
