//! Style tokens for the wizard UI.
//!
//! The form ships in two visual variants that differ only in their tokens,
//! so the palette is a value injected into the renderer rather than a set of
//! globals. Both presets are defined here; `--theme` picks one at startup.

#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};

/// Injected color tokens for one visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary accent (selected controls, titles).
    pub primary: Color,
    /// Lighter companion to the primary (completed steps).
    pub primary_soft: Color,
    /// Declaration / caution accents.
    pub warning: Color,
    /// Required-field markers and invalid affordances.
    pub error: Color,
    /// Default text.
    pub foreground: Color,
    /// De-emphasized text (placeholders, disabled affordances).
    pub muted: Color,
    /// Field labels.
    pub label: Color,
    /// Inactive borders and separators.
    pub border: Color,
}

impl Theme {
    /// The default green palette.
    pub const fn emerald() -> Self {
        Self {
            primary: Color::Rgb(45, 158, 95),      // #2D9E5F
            primary_soft: Color::Rgb(110, 231, 160), // #6EE7A0
            warning: Color::Rgb(251, 191, 36),     // #FBBF24
            error: Color::Rgb(192, 57, 43),        // #C0392B
            foreground: Color::Rgb(232, 234, 237),
            muted: Color::Rgb(107, 114, 128),      // #6B7280
            label: Color::Rgb(156, 163, 175),      // #9CA3AF
            border: Color::Rgb(74, 74, 74),        // #4A4A4A
        }
    }

    /// The blue variant, identical layout with different tokens.
    pub const fn sapphire() -> Self {
        Self {
            primary: Color::Rgb(59, 130, 246),     // #3B82F6
            primary_soft: Color::Rgb(147, 197, 253), // #93C5FD
            warning: Color::Rgb(251, 191, 36),
            error: Color::Rgb(239, 68, 68),        // #EF4444
            foreground: Color::Rgb(232, 234, 237),
            muted: Color::Rgb(107, 114, 128),
            label: Color::Rgb(156, 163, 175),
            border: Color::Rgb(74, 74, 74),
        }
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Primary accent style
    pub fn primary(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn primary_bold(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Completed-step accent
    pub fn done(&self) -> Style {
        Style::default().fg(self.primary_soft)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Muted/dimmed text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Field label text
    pub fn label(&self) -> Style {
        Style::default().fg(self.label)
    }

    /// Section title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted/selected row
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border of the focused panel
    pub fn border_active(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Keyboard shortcut hints
    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.primary_soft)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::emerald()
    }
}

/// UI symbols shared by all variants.
pub mod symbols {
    pub const CHECK: &str = "✓";
    pub const ARROW_RIGHT: &str = "▶";
    pub const BULLET: &str = "•";
    pub const RADIO_ON: &str = "◉";
    pub const RADIO_OFF: &str = "○";
    pub const ATTACH: &str = "📎";
}

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Product name
pub const PRODUCT_NAME: &str = "Borang Sewa";

/// Issuing organization
pub const ORGANIZATION: &str = "Iskandar Malaysia";

/// Full form title
pub const FORM_TITLE: &str = "Borang Permohonan Penyewaan Rumah";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_differ_only_in_tokens() {
        // Same shape, different values: the two variants are data, not code.
        assert_ne!(Theme::emerald(), Theme::sapphire());
        assert_ne!(Theme::emerald().primary, Theme::sapphire().primary);
    }
}
