//! UI helper functions

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Simple text wrapping helper (widths in terminal columns)
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.width() + 1 + word.width() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Rect of the given size centered in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        let result = wrap_text("", 10);
        assert_eq!(result, vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let result = wrap_text("hello world", 0);
        assert_eq!(result, vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        let result = wrap_text("Another one?! Keep going and I'll eat YOU!", 16);
        assert_eq!(result, vec!["Another one?!", "Keep going and", "I'll eat YOU!"]);
    }

    #[test]
    fn test_wrap_text_counts_columns() {
        // Each CJK character takes two columns
        let result = wrap_text("麻辣烫 盖浇饭", 8);
        assert_eq!(result, vec!["麻辣烫", "盖浇饭"]);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(20, 4, area), Rect::new(30, 10, 20, 4));
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(5, 5, 10, 3);
        assert_eq!(centered_rect(40, 10, area), area);
    }
}
