//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

/// Color and style theme for the dashboard.
///
/// Use [`Theme::auto_detect()`] for automatic selection based on the
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    dark: bool,
    /// Accent color for temperature gauges.
    pub temperature: Color,
    /// Accent color for humidity gauges.
    pub humidity: Color,
    /// Color for a comfortably loaded host metric.
    pub ok: Color,
    /// Color for an elevated host metric.
    pub warn: Color,
    /// Color for a critically loaded host metric.
    pub critical: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for the header line and block titles.
    pub title: Style,
    /// Style for secondary text (units, hints, placeholders).
    pub dim: Style,
    /// Border style for gauge blocks.
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            dark: true,
            temperature: Color::LightGreen,
            humidity: Color::LightBlue,
            ok: Color::Green,
            warn: Color::Yellow,
            critical: Color::Red,
            border: Color::Gray,
            title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            dark: false,
            temperature: Color::Green,
            humidity: Color::Blue,
            ok: Color::Green,
            warn: Color::Yellow,
            critical: Color::Red,
            border: Color::DarkGray,
            title: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Color for a utilization percentage: green below 75, yellow below 90,
    /// red above.
    pub fn load_color(&self, pct: f64) -> Color {
        if pct >= 90.0 {
            self.critical
        } else if pct >= 75.0 {
            self.warn
        } else {
            self.ok
        }
    }
}
