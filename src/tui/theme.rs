//! Theme tokens and accessibility profile hooks for shell rendering.

#![allow(missing_docs)]

use std::env;

use crossterm::style::Color;

use super::classifier::DisplayMode;

/// Color output mode for compatibility with `NO_COLOR` and terminal policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Enabled,
    Disabled,
}

/// Accessibility knobs consumed by the paint layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessibilityProfile {
    pub color: ColorMode,
}

impl Default for AccessibilityProfile {
    fn default() -> Self {
        Self {
            color: ColorMode::Enabled,
        }
    }
}

impl AccessibilityProfile {
    #[must_use]
    pub const fn from_no_color_flag(no_color: bool) -> Self {
        Self {
            color: if no_color {
                ColorMode::Disabled
            } else {
                ColorMode::Enabled
            },
        }
    }

    #[must_use]
    pub fn from_environment() -> Self {
        Self::from_no_color_flag(env::var_os("NO_COLOR").is_some())
    }

    #[must_use]
    pub const fn no_color(self) -> bool {
        matches!(self.color, ColorMode::Disabled)
    }
}

/// Semantic token category independent of concrete color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticToken {
    Accent,
    Success,
    Warning,
    Danger,
    Muted,
    Neutral,
}

/// Theme resolved for one shell session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accessibility: AccessibilityProfile,
}

impl Theme {
    #[must_use]
    pub const fn new(accessibility: AccessibilityProfile) -> Self {
        Self { accessibility }
    }

    /// Concrete color for a semantic token, or `None` in no-color mode.
    #[must_use]
    pub fn color(self, token: SemanticToken) -> Option<Color> {
        if self.accessibility.no_color() {
            return None;
        }
        Some(match token {
            SemanticToken::Accent => Color::Cyan,
            SemanticToken::Success => Color::Green,
            SemanticToken::Warning => Color::Yellow,
            SemanticToken::Danger => Color::Red,
            SemanticToken::Muted => Color::DarkGrey,
            SemanticToken::Neutral => Color::White,
        })
    }

    /// Token expressing how disruptive a display mode is.
    #[must_use]
    pub const fn mode_token(mode: DisplayMode) -> SemanticToken {
        match mode {
            DisplayMode::Content => SemanticToken::Success,
            DisplayMode::Connecting | DisplayMode::Building => SemanticToken::Accent,
            DisplayMode::Upgrading | DisplayMode::Restoring | DisplayMode::Pausing => {
                SemanticToken::Warning
            }
            DisplayMode::OfflineGateway => SemanticToken::Danger,
            DisplayMode::PausedFullScreen => SemanticToken::Muted,
        }
    }

    /// Convenience: color for a display mode badge.
    #[must_use]
    pub fn mode_color(self, mode: DisplayMode) -> Option<Color> {
        self.color(Self::mode_token(mode))
    }
}
