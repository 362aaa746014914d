//! Input routing for the console shell.
//!
//! Deterministic precedence: overlay keys first, then global keys. Keys that
//! match neither tier pass through unconsumed.

#![allow(missing_docs)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::model::{Overlay, Product};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    pub active_overlay: Option<Overlay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    CloseOverlay,
    ToggleOverlay(Overlay),
    Navigate(Product),
    NavigatePrev,
    NavigateNext,
    ToggleMenu,
    ForceRefresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputResolution {
    pub action: Option<InputAction>,
    pub consumed: bool,
}

impl InputResolution {
    const fn action(action: InputAction) -> Self {
        Self {
            action: Some(action),
            consumed: true,
        }
    }

    const fn consumed_without_action() -> Self {
        Self {
            action: None,
            consumed: true,
        }
    }

    const fn passthrough() -> Self {
        Self {
            action: None,
            consumed: false,
        }
    }
}

/// Key binding shown in the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Bindings listed by the help overlay, in display order.
pub const HELP_BINDINGS: &[HelpBinding] = &[
    HelpBinding { keys: "1-8", description: "jump to product" },
    HelpBinding { keys: "[ / ]", description: "previous / next product" },
    HelpBinding { keys: "m", description: "toggle product menu" },
    HelpBinding { keys: "r", description: "refresh snapshot now" },
    HelpBinding { keys: "?", description: "toggle this help" },
    HelpBinding { keys: "q", description: "quit" },
];

/// Resolve a key event using overlay-then-global precedence.
#[must_use]
pub fn resolve_key_event(key: &KeyEvent, context: InputContext) -> InputResolution {
    // Ctrl-C quits from anywhere, overlay or not.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResolution::action(InputAction::Quit);
    }

    if context.active_overlay.is_some() {
        return resolve_overlay_key(key);
    }
    resolve_global_key(key)
}

fn resolve_overlay_key(key: &KeyEvent) -> InputResolution {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q' | '?') | KeyCode::Enter => {
            InputResolution::action(InputAction::CloseOverlay)
        }
        // The overlay swallows everything else so chrome keys cannot fire
        // underneath it.
        _ => InputResolution::consumed_without_action(),
    }
}

fn resolve_global_key(key: &KeyEvent) -> InputResolution {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputResolution::action(InputAction::Quit),
        KeyCode::Char('?') => {
            InputResolution::action(InputAction::ToggleOverlay(Overlay::Help))
        }
        KeyCode::Char('m') => InputResolution::action(InputAction::ToggleMenu),
        KeyCode::Char('r') => InputResolution::action(InputAction::ForceRefresh),
        KeyCode::Char('[') => InputResolution::action(InputAction::NavigatePrev),
        KeyCode::Char(']') => InputResolution::action(InputAction::NavigateNext),
        KeyCode::Char(c @ '1'..='8') => {
            let n = c.to_digit(10).and_then(|d| u8::try_from(d).ok());
            n.and_then(Product::from_number).map_or_else(
                InputResolution::passthrough,
                |product| InputResolution::action(InputAction::Navigate(product)),
            )
        }
        _ => InputResolution::passthrough(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn digits_navigate_products() {
        let resolution = resolve_key_event(&key(KeyCode::Char('3')), InputContext::default());
        assert_eq!(
            resolution.action,
            Some(InputAction::Navigate(Product::SqlEditor))
        );
    }

    #[test]
    fn overlay_takes_precedence_over_global_keys() {
        let context = InputContext {
            active_overlay: Some(Overlay::Help),
        };
        // `m` would toggle the menu globally; under an overlay it is consumed.
        let resolution = resolve_key_event(&key(KeyCode::Char('m')), context);
        assert_eq!(resolution.action, None);
        assert!(resolution.consumed);

        let close = resolve_key_event(&key(KeyCode::Esc), context);
        assert_eq!(close.action, Some(InputAction::CloseOverlay));
    }

    #[test]
    fn ctrl_c_quits_even_under_overlay() {
        let context = InputContext {
            active_overlay: Some(Overlay::Help),
        };
        let event = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(
            resolve_key_event(&event, context).action,
            Some(InputAction::Quit)
        );
    }

    #[test]
    fn unbound_keys_pass_through() {
        let resolution = resolve_key_event(&key(KeyCode::Char('z')), InputContext::default());
        assert!(!resolution.consumed);
        assert_eq!(resolution.action, None);
    }
}
