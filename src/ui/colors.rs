//! Color palette for the TUI
//!
//! Muted, cohesive colors for a clean look

use ratatui::style::Color;

/// Border color for the dropdown frame.
pub const BORDER: Color = Color::Rgb(100, 110, 130);
/// Row background under the highlight cursor.
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(50, 55, 70);

/// Primary body text.
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
/// Labels and secondary text.
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
/// Hints, placeholders, and help text.
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

/// Current selection marker.
pub const ACCENT_POSITIVE: Color = Color::Rgb(120, 180, 120);
/// Clear affordance.
pub const ACCENT_NEGATIVE: Color = Color::Rgb(200, 100, 100);
