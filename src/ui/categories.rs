//! Category bar rendering

use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::cli::CategorySettings;
use crate::theme::{category_color, BG_SECONDARY, ROUNDED_BORDERS, TEXT_INVERSE, TEXT_SECONDARY};

/// Text on a category button: its number key and label
pub fn button_label(index: usize, category: &CategorySettings) -> String {
    if index < 9 {
        format!("{} {}", index + 1, category.display_label())
    } else {
        category.display_label().to_string()
    }
}

/// Render one button per category; the selected one is filled with its colour
pub fn render_category_bar(
    area: Rect,
    categories: &[CategorySettings],
    selected: usize,
    frame: &mut Frame,
) {
    if categories.is_empty() {
        return;
    }

    let labels: Vec<String> = categories
        .iter()
        .enumerate()
        .map(|(i, c)| button_label(i, c))
        .collect();
    // Border (2) + padding (2) around each label
    let constraints = labels
        .iter()
        .map(|label| Constraint::Length(Span::raw(label.as_str()).width() as u16 + 4));

    let bar = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .flex(Flex::Center)
        .spacing(1)
        .split(area);

    for (i, (category, label)) in categories.iter().zip(labels).enumerate() {
        let color = category_color(category.color.as_deref(), i);
        let (fg, bg, border) = if i == selected {
            (TEXT_INVERSE, color, color)
        } else {
            (TEXT_SECONDARY, BG_SECONDARY, BG_SECONDARY)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(bg));

        let mut style = Style::default().fg(fg);
        if i == selected {
            style = style.add_modifier(Modifier::BOLD);
        }

        let button = Paragraph::new(Line::from(Span::styled(label, style)))
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(button, bar[i]);
    }
}
