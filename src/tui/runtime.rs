//! Canonical runtime entrypoint for the console shell.
//!
//! Owns the terminal, the input thread, and the snapshot poll loop. All
//! state transitions go through [`update`]; this module only executes the
//! commands the reducer hands back.

#![allow(missing_docs)]

use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{RecvTimeoutError, unbounded};
use crossterm::cursor::MoveTo;
use crossterm::event::{Event, KeyEventKind};
use crossterm::queue;
use crossterm::style::{ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::logger::jsonl::{EventType, JsonlLogger, LogEntry, Severity};
use crate::route::Route;
use crate::tui::adapters::{FileSnapshotAdapter, SnapshotAdapter};
use crate::tui::classifier::DisplayMode;
use crate::tui::model::{ChromeOptions, ConsoleCmd, ConsoleModel, ConsoleMsg};
use crate::tui::render::render_to_string;
use crate::tui::terminal_guard::TerminalGuard;
use crate::tui::theme::{AccessibilityProfile, Theme};
use crate::tui::update::update;

/// Runtime configuration assembled by the CLI layer.
#[derive(Debug, Clone)]
pub struct ShellRuntimeConfig {
    pub snapshot_file: PathBuf,
    pub refresh: Duration,
    pub stale_threshold: Duration,
    pub start_route: Route,
    pub options: ChromeOptions,
    pub brand: String,
    pub incident_banner: bool,
    pub log_file: Option<PathBuf>,
}

/// Run the console shell until the operator quits.
///
/// # Errors
/// Returns I/O errors from terminal setup or frame painting. Snapshot read
/// failures never surface here; they degrade the shell instead.
pub fn run_shell(config: &ShellRuntimeConfig) -> io::Result<()> {
    let _guard = TerminalGuard::new()?;
    run_loop(config)
}

fn run_loop(config: &ShellRuntimeConfig) -> io::Result<()> {
    let adapter = FileSnapshotAdapter::new(config.stale_threshold);
    let mut logger = config.log_file.clone().map(JsonlLogger::new);
    let theme = Theme::new(AccessibilityProfile::from_environment());

    let mut model = ConsoleModel::new(
        config.start_route.clone(),
        config.options.clone(),
        config.brand.clone(),
    );
    model.refresh = config.refresh;
    model.incident_banner = config.incident_banner;
    if let Ok(size) = crossterm::terminal::size() {
        model.terminal_size = size;
    }

    log_event(
        &mut logger,
        LogEntry::new(EventType::SessionStart, Severity::Info)
            .with_route(model.route.as_str()),
    );

    // Input thread: blocks on terminal events, forwards them to the loop.
    // Exits once the receiver is gone.
    let (tx, rx) = unbounded::<Event>();
    thread::spawn(move || {
        while let Ok(event) = crossterm::event::read() {
            if tx.send(event).is_err() {
                break;
            }
        }
    });

    let mut timeout = config.refresh;
    let mut last_mode: Option<DisplayMode> = None;

    // Prime the model before the first paint.
    execute_cmd(
        ConsoleCmd::FetchSnapshot,
        &mut model,
        &adapter,
        config,
        &mut timeout,
        &mut logger,
    );

    let mut stdout = io::stdout();
    loop {
        let mode = model.display_mode();
        if last_mode != Some(mode) {
            log_event(
                &mut logger,
                LogEntry::new(EventType::DisplayModeChange, Severity::Info)
                    .with_mode(mode.as_wire())
                    .with_route(model.route.as_str()),
            );
            last_mode = Some(mode);
        }
        paint(&mut stdout, &model, theme, mode)?;

        if model.should_quit {
            break;
        }

        let msg = match rx.recv_timeout(timeout) {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                Some(ConsoleMsg::Key(key))
            }
            Ok(Event::Resize(cols, rows)) => Some(ConsoleMsg::Resize { cols, rows }),
            Ok(_) => None,
            Err(RecvTimeoutError::Timeout) => Some(ConsoleMsg::Tick),
            Err(RecvTimeoutError::Disconnected) => break,
        };
        if let Some(msg) = msg {
            let cmd = update(&mut model, msg);
            execute_cmd(cmd, &mut model, &adapter, config, &mut timeout, &mut logger);
        }
    }

    log_event(
        &mut logger,
        LogEntry::new(EventType::SessionStop, Severity::Info),
    );
    Ok(())
}

/// Execute a reducer command. `Batch` recursion is bounded: the only
/// feedback edge is `FetchSnapshot` → `SnapshotUpdate`, which returns `None`.
fn execute_cmd(
    cmd: ConsoleCmd,
    model: &mut ConsoleModel,
    adapter: &FileSnapshotAdapter,
    config: &ShellRuntimeConfig,
    timeout: &mut Duration,
    logger: &mut Option<JsonlLogger>,
) {
    match cmd {
        ConsoleCmd::None | ConsoleCmd::Quit => {}
        ConsoleCmd::ScheduleTick(next) => *timeout = next,
        ConsoleCmd::Batch(cmds) => {
            for cmd in cmds {
                execute_cmd(cmd, model, adapter, config, timeout, logger);
            }
        }
        ConsoleCmd::FetchSnapshot => {
            let snapshot = adapter.read_snapshot(&config.snapshot_file);
            match (&snapshot, model.degraded, model.loading) {
                (None, false, false) => log_event(
                    logger,
                    LogEntry::new(EventType::SnapshotDegraded, Severity::Warning)
                        .with_detail(config.snapshot_file.display().to_string()),
                ),
                (Some(_), true, _) => log_event(
                    logger,
                    LogEntry::new(EventType::SnapshotRecovered, Severity::Info),
                ),
                _ => {}
            }
            let next = update(model, ConsoleMsg::SnapshotUpdate(snapshot.map(Box::new)));
            execute_cmd(next, model, adapter, config, timeout, logger);
        }
    }
}

fn paint(
    out: &mut impl Write,
    model: &ConsoleModel,
    theme: Theme,
    mode: DisplayMode,
) -> io::Result<()> {
    let frame = render_to_string(model);
    let badge_row = badge_row(model);
    queue!(out, Clear(ClearType::All))?;
    for (row, line) in frame.lines().enumerate() {
        queue!(out, MoveTo(0, u16::try_from(row).unwrap_or(u16::MAX)))?;
        let colored = badge_row == Some(row);
        if colored {
            if let Some(color) = theme.mode_color(mode) {
                queue!(out, SetForegroundColor(color))?;
            }
        }
        out.write_all(line.as_bytes())?;
        if colored {
            queue!(out, ResetColor)?;
        }
    }
    out.flush()
}

/// Frame row holding the status badge, when the header is visible.
fn badge_row(model: &ConsoleModel) -> Option<usize> {
    if model.options.hide_header {
        return None;
    }
    Some(usize::from(model.incident_banner))
}

fn log_event(logger: &mut Option<JsonlLogger>, entry: LogEntry) {
    if let Some(logger) = logger.as_mut() {
        logger.log(&entry);
    }
}
