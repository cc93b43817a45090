//! Theme module for eatwhat
//!
//! Centralized colour palette and styling constants: a warm paper-white page
//! with ink-black text, like a handwritten menu.

use ratatui::style::Color;
use ratatui::symbols::border;

// ============================================================================
// Background Colors
// ============================================================================

/// Page background (#faf7f0)
pub const BG_PRIMARY: Color = Color::Rgb(250, 247, 240);

/// Unselected category buttons (#ece6d9)
pub const BG_SECONDARY: Color = Color::Rgb(236, 230, 217);

/// Tease bubble background (#2b2b2b)
pub const BG_TEASE: Color = Color::Rgb(43, 43, 43);

// ============================================================================
// Text Colors
// ============================================================================

/// Headline and dish text (#1a1a1a)
pub const TEXT_PRIMARY: Color = Color::Rgb(26, 26, 26);

/// Secondary text (#5c5c5c)
pub const TEXT_SECONDARY: Color = Color::Rgb(92, 92, 92);

/// Hints and key labels (#9a9a9a)
pub const TEXT_MUTED: Color = Color::Rgb(154, 154, 154);

/// Text on dark or coloured backgrounds (#ffffff)
pub const TEXT_INVERSE: Color = Color::Rgb(255, 255, 255);

// ============================================================================
// Accent Colors
// ============================================================================

/// Start button and highlighted dish (#e4572e)
pub const ACCENT: Color = Color::Rgb(228, 87, 46);

/// Dimmed accent for pulsing (#f3a712)
pub const ACCENT_DIM: Color = Color::Rgb(243, 167, 18);

/// Empty pool headline (#b23a48)
pub const RED_EMPTY: Color = Color::Rgb(178, 58, 72);

/// Colours handed out to categories without one, in order
pub const CATEGORY_COLORS: [Color; 5] = [
    Color::Rgb(61, 220, 132),  // green
    Color::Rgb(10, 132, 255),  // blue
    Color::Rgb(255, 159, 10),  // orange
    Color::Rgb(191, 90, 242),  // purple
    Color::Rgb(255, 55, 95),   // pink
];

/// Rounded border set for buttons and bubbles
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

/// Parse a `#rrggbb` colour
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Colour of the category at `index`, falling back to the built-in palette
pub fn category_color(configured: Option<&str>, index: usize) -> Color {
    configured
        .and_then(parse_hex_color)
        .unwrap_or(CATEGORY_COLORS[index % CATEGORY_COLORS.len()])
}

/// Grey ink for a floating dish; `opacity` in 0.0..=1.0 blends from page to text
pub fn ink_shade(opacity: f32) -> Color {
    blend(BG_PRIMARY, TEXT_PRIMARY, opacity.clamp(0.0, 1.0))
}

/// Colour that swings between `a` and `b` over a 20 tick cycle
pub fn get_pulse_color(tick: u64, a: Color, b: Color) -> Color {
    let phase = (tick % 20) as f32;
    let t = if phase < 10.0 { phase / 10.0 } else { (20.0 - phase) / 10.0 };
    blend(a, b, t)
}

fn blend(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => if t < 0.5 { from } else { to },
    }
}
