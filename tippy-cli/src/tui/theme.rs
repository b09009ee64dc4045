//! Theme System
//!
//! A centralized palette: warm amber accents on a dark slate background.

use ratatui::style::{Color, Modifier, Style};
use tippy::Rgba;

/// The main theme struct containing all colors and pre-computed styles.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Amber - primary accent color
    pub amber: Color,
    /// Dark slate - main background
    pub slate: Color,
    /// Light slate - panel borders
    pub slate_light: Color,
    /// Primary text color (near-white)
    pub text_primary: Color,
    /// Muted/secondary text color
    pub text_muted: Color,
    /// Success color (green)
    pub success: Color,
    /// Accent color (cyan)
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            amber: Color::Rgb(245, 158, 11),
            slate: Color::Rgb(15, 23, 42),
            slate_light: Color::Rgb(51, 65, 85),
            text_primary: Color::Rgb(248, 250, 252),
            text_muted: Color::Rgb(148, 163, 184),
            success: Color::Rgb(16, 185, 129),
            accent: Color::Cyan,
        }
    }
}

impl Theme {
    /// Title style - bold amber text
    pub fn title(&self) -> Style {
        Style::default().fg(self.amber).add_modifier(Modifier::BOLD)
    }

    /// Subtitle/label style - muted text
    pub fn subtitle(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Primary text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Active border style
    pub fn border_active(&self) -> Style {
        Style::default().fg(self.amber)
    }

    /// Inactive border style
    pub fn border_inactive(&self) -> Style {
        Style::default().fg(self.slate_light)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Background style for main area
    pub fn bg(&self) -> Style {
        Style::default().bg(self.slate)
    }

    /// Value display style - bold primary text
    pub fn value(&self) -> Style {
        Style::default().fg(self.text_primary).add_modifier(Modifier::BOLD)
    }
}

/// Converts an engine color to a terminal color. Alpha is dropped.
pub fn to_color(c: Rgba) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Convenience function to get the default theme.
pub fn theme() -> &'static Theme {
    &THEME
}

/// Icons used throughout the TUI
pub mod icons {
    pub const RECEIPT: &str = "🧾";
    pub const SEPARATOR: &str = "│";
    pub const ARROW_RIGHT: &str = "➜";

    pub const SLIDER_FULL: &str = "█";
    pub const SLIDER_EMPTY: &str = "░";
    pub const SLIDER_KNOB: &str = "◆";
}
