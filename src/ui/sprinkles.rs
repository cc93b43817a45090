//! Floating dish names scattered behind the headline while rolling

use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::theme::ink_shade;

/// A dish name floating at a random spot
#[derive(Debug, Clone)]
pub struct Sprinkle {
    pub text: String,
    /// Horizontal position as a fraction of the free width (0.0..1.0)
    pub x: f32,
    /// Vertical position as a fraction of the height (0.0..1.0)
    pub y: f32,
    /// Ink strength (0.3..0.7)
    pub opacity: f32,
    pub bold: bool,
    pub born: Instant,
}

impl Sprinkle {
    /// Where the sprinkle lands inside `area`, or None if it cannot fit
    pub fn placement(&self, area: Rect) -> Option<Rect> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let width = (self.text.width() as u16).min(area.width);
        if width == 0 {
            return None;
        }
        let free = area.width - width;
        let x = area.x + (self.x.clamp(0.0, 1.0) * free as f32) as u16;
        let y = area.y + ((self.y.clamp(0.0, 1.0) * area.height as f32) as u16).min(area.height - 1);
        Some(Rect::new(x, y, width, 1))
    }
}

/// Draw every sprinkle into `area`, oldest first
pub fn render_sprinkles(sprinkles: &[Sprinkle], area: Rect, frame: &mut Frame) {
    for sprinkle in sprinkles {
        let Some(spot) = sprinkle.placement(area) else {
            continue;
        };
        let mut style = Style::default().fg(ink_shade(sprinkle.opacity));
        if sprinkle.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        frame.render_widget(Paragraph::new(Span::styled(sprinkle.text.as_str(), style)), spot);
    }
}
