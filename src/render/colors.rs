//! Color module for the card.
//!
//! This module provides:
//! - The valentine palette: soft pinks for hearts, festive confetti colors
//! - Card, button and chrome colors
//! - Color manipulation utilities, including perceptual blending

use palette::{LinSrgb, Mix, Srgb};
use ratatui::style::Color;

/// Heart pinks, soft to vivid, picked per heart by index
pub const HEART_COLORS: [Color; 5] = [
    Color::Rgb(255, 179, 193), // Light pink
    Color::Rgb(255, 143, 163), // Rose
    Color::Rgb(255, 105, 180), // Hot pink
    Color::Rgb(255, 77, 109),  // Punch
    Color::Rgb(255, 20, 147),  // Deep pink
];

/// Confetti palette: pinks with gold for contrast
pub const CONFETTI_COLORS: [Color; 6] = [
    Color::Rgb(255, 77, 109),  // Punch
    Color::Rgb(255, 143, 163), // Rose
    Color::Rgb(255, 179, 193), // Light pink
    Color::Rgb(255, 215, 0),   // Gold
    Color::Rgb(255, 105, 180), // Hot pink
    Color::Rgb(255, 20, 147),  // Deep pink
];

/// The night behind everything
pub const BACKGROUND: Color = Color::Rgb(26, 10, 20);

/// Card paper
pub const CARD_BG: Color = Color::Rgb(252, 241, 246);

/// Card border ink
pub const CARD_BORDER: Color = Color::Rgb(255, 105, 180);

/// Prompt and body text on the card
pub const CARD_TEXT: Color = Color::Rgb(92, 38, 64);

/// The valentine's name on the letterhead
pub const NAME_COLOR: Color = Color::Rgb(199, 21, 133);

/// YES button fill and label
pub const YES_BG: Color = Color::Rgb(255, 77, 109);
pub const YES_FG: Color = Color::Rgb(255, 250, 252);

/// No button fill and label, deliberately drab next to YES
pub const NO_BG: Color = Color::Rgb(236, 223, 229);
pub const NO_FG: Color = Color::Rgb(92, 38, 64);

/// Pointer sparkles
pub const SPARKLE_COLOR: Color = Color::Rgb(255, 215, 0);

/// Status bar chrome
pub const STATUS_FG: Color = Color::Rgb(168, 124, 146);
pub const STATUS_BG: Color = Color::Rgb(16, 6, 12);

/// The big beating heart on the celebration screen
pub const BIG_HEART_COLOR: Color = Color::Rgb(255, 77, 109);

/// Dim a color by a factor (0.0 = black, 1.0 = unchanged)
///
/// # Arguments
/// * `color` - The color to dim
/// * `factor` - Dimming factor (0.0 to 1.0)
///
/// # Returns
/// The dimmed color. For non-RGB colors, returns the original color unchanged.
pub fn dim_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * factor) as u8,
            (g as f32 * factor) as u8,
            (b as f32 * factor) as u8,
        ),
        // For non-RGB colors, return unchanged
        other => other,
    }
}

/// Blend two colors, mixing in linear light so fades keep their hue
/// instead of washing through gray
///
/// # Arguments
/// * `from` - The color at t = 0.0
/// * `to` - The color at t = 1.0
/// * `t` - Blend position (clamped to 0.0..1.0)
///
/// # Returns
/// The blended color. If either input is not RGB, returns `from` unchanged.
pub fn mix_color(from: Color, to: Color, t: f32) -> Color {
    let (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) = (from, to) else {
        return from;
    };
    let a: LinSrgb = Srgb::new(r1, g1, b1).into_format::<f32>().into_linear();
    let b: LinSrgb = Srgb::new(r2, g2, b2).into_format::<f32>().into_linear();
    let mixed = a.mix(b, t.clamp(0.0, 1.0));
    let out = Srgb::<f32>::from_linear(mixed).into_format::<u8>();
    Color::Rgb(out.red, out.green, out.blue)
}

/// Get a heart color by index, wrapping around the palette
pub fn get_heart_color(index: usize) -> Color {
    HEART_COLORS[index % HEART_COLORS.len()]
}

/// Get a confetti color by index, wrapping around the palette
pub fn get_confetti_color(index: usize) -> Color {
    CONFETTI_COLORS[index % CONFETTI_COLORS.len()]
}
