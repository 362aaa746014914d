//! Pure update function for the console shell.
//!
//! `update()` takes the current model and a message, mutates the model, and
//! returns a command describing any side-effects the runtime should execute.
//!
//! **Design invariant:** this module performs zero I/O. All effects are
//! described as [`ConsoleCmd`] values.

use std::time::Instant;

use super::input::{InputAction, InputContext, resolve_key_event};
use super::model::{ConsoleCmd, ConsoleModel, ConsoleMsg};

/// Apply a message to the model and return the next command for the runtime.
///
/// Every state transition goes through this function, keeping the shell
/// deterministic and testable.
pub fn update(model: &mut ConsoleModel, msg: ConsoleMsg) -> ConsoleCmd {
    match msg {
        ConsoleMsg::Tick => {
            model.tick = model.tick.wrapping_add(1);
            ConsoleCmd::Batch(vec![
                ConsoleCmd::FetchSnapshot,
                ConsoleCmd::ScheduleTick(model.refresh),
            ])
        }

        ConsoleMsg::Key(key) => {
            let context = InputContext {
                active_overlay: model.active_overlay,
            };
            let resolution = resolve_key_event(&key, context);
            resolution
                .action
                .map_or(ConsoleCmd::None, |action| apply_input_action(model, action))
        }

        ConsoleMsg::Resize { cols, rows } => {
            model.terminal_size = (cols, rows);
            ConsoleCmd::None
        }

        ConsoleMsg::SnapshotUpdate(snapshot) => {
            model.last_fetch = Some(Instant::now());
            match snapshot {
                Some(snapshot) => {
                    model.loading = false;
                    model.degraded = false;
                    model.adapter_reads = model.adapter_reads.wrapping_add(1);
                    model.project = snapshot.project;
                    model.organization = snapshot.organization;
                    model.selected_table = snapshot.selected_table;
                }
                None => {
                    // Keep the last good records: a stale frame beats
                    // flashing back to the connecting screen.
                    model.degraded = true;
                    model.adapter_errors = model.adapter_errors.wrapping_add(1);
                }
            }
            ConsoleCmd::None
        }

        ConsoleMsg::Navigate(product) => {
            model.navigate_to(product);
            ConsoleCmd::None
        }

        ConsoleMsg::Quit => {
            model.should_quit = true;
            ConsoleCmd::Quit
        }
    }
}

fn apply_input_action(model: &mut ConsoleModel, action: InputAction) -> ConsoleCmd {
    match action {
        InputAction::Quit => {
            model.should_quit = true;
            ConsoleCmd::Quit
        }
        InputAction::CloseOverlay => {
            model.active_overlay = None;
            ConsoleCmd::None
        }
        InputAction::ToggleOverlay(overlay) => {
            if model.active_overlay == Some(overlay) {
                model.active_overlay = None;
            } else {
                model.active_overlay = Some(overlay);
            }
            ConsoleCmd::None
        }
        InputAction::Navigate(product) => {
            model.navigate_to(product);
            ConsoleCmd::None
        }
        InputAction::NavigatePrev => {
            if let Some(active) = model.active_product() {
                model.navigate_to(active.prev());
            }
            ConsoleCmd::None
        }
        InputAction::NavigateNext => {
            if let Some(active) = model.active_product() {
                model.navigate_to(active.next());
            }
            ConsoleCmd::None
        }
        InputAction::ToggleMenu => {
            model.options.show_product_menu = !model.options.show_product_menu;
            ConsoleCmd::None
        }
        InputAction::ForceRefresh => ConsoleCmd::FetchSnapshot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::record::{ConsoleSnapshot, ProjectRecord};
    use crate::project::status::ProjectStatus;
    use crate::route::Route;
    use crate::tui::classifier::DisplayMode;
    use crate::tui::model::{ChromeOptions, Overlay, Product};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn model() -> ConsoleModel {
        ConsoleModel::new(
            Route::project_home("abc"),
            ChromeOptions::default(),
            "Nimbus Console",
        )
    }

    fn key(code: KeyCode) -> ConsoleMsg {
        ConsoleMsg::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn snapshot_with_status(status: ProjectStatus) -> ConsoleSnapshot {
        ConsoleSnapshot {
            project: Some(ProjectRecord {
                ref_id: "abc".into(),
                name: "orders".into(),
                status,
                ..ProjectRecord::default()
            }),
            ..ConsoleSnapshot::default()
        }
    }

    #[test]
    fn tick_requests_fetch_and_reschedule() {
        let mut m = model();
        let cmd = update(&mut m, ConsoleMsg::Tick);
        assert_eq!(m.tick, 1);
        assert_eq!(
            cmd,
            ConsoleCmd::Batch(vec![
                ConsoleCmd::FetchSnapshot,
                ConsoleCmd::ScheduleTick(m.refresh)
            ])
        );
    }

    #[test]
    fn snapshot_update_clears_loading_and_degraded() {
        let mut m = model();
        assert_eq!(m.display_mode(), DisplayMode::Connecting);

        update(
            &mut m,
            ConsoleMsg::SnapshotUpdate(Some(Box::new(snapshot_with_status(
                ProjectStatus::ActiveHealthy,
            )))),
        );
        assert!(!m.loading);
        assert!(!m.degraded);
        assert_eq!(m.display_mode(), DisplayMode::Content);
    }

    #[test]
    fn failed_snapshot_keeps_last_records() {
        let mut m = model();
        update(
            &mut m,
            ConsoleMsg::SnapshotUpdate(Some(Box::new(snapshot_with_status(
                ProjectStatus::ActiveHealthy,
            )))),
        );
        update(&mut m, ConsoleMsg::SnapshotUpdate(None));
        assert!(m.degraded);
        assert!(m.project.is_some());
        assert_eq!(m.adapter_errors, 1);
    }

    #[test]
    fn navigation_keys_move_the_rail() {
        let mut m = model();
        update(&mut m, key(KeyCode::Char('4')));
        assert_eq!(m.active_product(), Some(Product::Database));
        update(&mut m, key(KeyCode::Char(']')));
        assert_eq!(m.active_product(), Some(Product::Auth));
        update(&mut m, key(KeyCode::Char('[')));
        assert_eq!(m.active_product(), Some(Product::Database));
    }

    #[test]
    fn help_overlay_toggles_and_blocks_quit_key() {
        let mut m = model();
        update(&mut m, key(KeyCode::Char('?')));
        assert_eq!(m.active_overlay, Some(Overlay::Help));

        // `q` under the overlay closes it instead of quitting.
        update(&mut m, key(KeyCode::Char('q')));
        assert_eq!(m.active_overlay, None);
        assert!(!m.should_quit);

        update(&mut m, key(KeyCode::Char('q')));
        assert!(m.should_quit);
    }

    #[test]
    fn refresh_key_requests_fetch() {
        let mut m = model();
        assert_eq!(update(&mut m, key(KeyCode::Char('r'))), ConsoleCmd::FetchSnapshot);
    }

    #[test]
    fn resize_updates_terminal_size() {
        let mut m = model();
        update(&mut m, ConsoleMsg::Resize { cols: 120, rows: 40 });
        assert_eq!(m.terminal_size, (120, 40));
    }
}
