//! RAII terminal lifecycle guard.
//!
//! [`TerminalGuard`] enters raw mode and the alternate screen on construction
//! and restores the terminal on [`Drop`], even during panics or early error
//! returns. A custom panic hook is installed so terminal restoration happens
//! *before* the default panic message is printed, keeping the backtrace
//! readable on a normal terminal.

use std::io::{self, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

/// Raw mode is active. Checked by the panic hook to decide whether terminal
/// restoration is needed.
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// The panic hook is chained at most once per process.
static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// RAII guard managing the terminal lifecycle.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen, installing a panic-safe
    /// cleanup hook.
    ///
    /// # Errors
    /// Returns I/O errors if terminal setup fails; whatever was set up is
    /// torn down again before returning.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);

        if !PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
            let prev = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                restore_terminal_best_effort();
                prev(info);
            }));
        }

        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal_best_effort();
    }
}

/// Restore the terminal if raw mode is active. Safe to call repeatedly.
fn restore_terminal_best_effort() {
    if !RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
        return;
    }
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
    let _ = stdout.flush();
}
