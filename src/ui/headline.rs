//! Headline, start/stop button and tip rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::HeadlinePhase;
use crate::theme::{
    get_pulse_color, ACCENT, ACCENT_DIM, RED_EMPTY, ROUNDED_BORDERS, TEXT_INVERSE, TEXT_MUTED,
    TEXT_PRIMARY,
};

/// What the headline block needs to draw itself
pub struct HeadlineView<'a> {
    pub slot_label: &'a str,
    pub what: &'a str,
    pub phase: HeadlinePhase,
    pub tick: u64,
    pub show_tip: bool,
    /// Number of dishes the loop draws from
    pub options: usize,
}

/// Headline as styled spans: "Today for <slot>, eat <what><punct>"
pub fn headline_line(view: &HeadlineView) -> Line<'static> {
    let what_style = match view.phase {
        HeadlinePhase::NoOptions => Style::default().fg(RED_EMPTY),
        HeadlinePhase::Asking => Style::default().fg(TEXT_PRIMARY),
        HeadlinePhase::Rolling | HeadlinePhase::Picked => {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        }
    };
    let text = Style::default().fg(TEXT_PRIMARY);

    Line::from(vec![
        Span::styled("Today for ", text),
        Span::styled(
            view.slot_label.to_string(),
            text.add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(", eat ", text),
        Span::styled(view.what.to_string(), what_style),
        Span::styled(view.phase.punctuation(), text),
    ])
}

/// Render the headline centered in `area`, with the button below it
pub fn render_headline(area: Rect, view: &HeadlineView, frame: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1), // Headline
            Constraint::Length(1), // Gap
            Constraint::Length(3), // Button
            Constraint::Length(1), // Tip
            Constraint::Fill(1),
        ])
        .split(area);

    let headline = Paragraph::new(headline_line(view)).alignment(Alignment::Center);
    frame.render_widget(headline, rows[1]);

    // Pulse the button while rolling
    let button_color = if view.phase == HeadlinePhase::Rolling {
        get_pulse_color(view.tick, ACCENT, ACCENT_DIM)
    } else {
        ACCENT
    };
    let label = format!("Space  {}", view.phase.button_label());
    let button_width = (Span::raw(label.as_str()).width() as u16 + 6).min(rows[3].width);
    let button_area = Rect::new(
        rows[3].x + (rows[3].width - button_width) / 2,
        rows[3].y,
        button_width,
        rows[3].height,
    );
    let button = Paragraph::new(Span::styled(
        label,
        Style::default().fg(TEXT_INVERSE).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(button_color))
            .style(Style::default().bg(button_color)),
    );
    frame.render_widget(button, button_area);

    let footnote = if view.show_tip {
        Span::styled(
            "press t to switch meals",
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(options_text(view.options), Style::default().fg(TEXT_MUTED))
    };
    frame.render_widget(Paragraph::new(footnote).alignment(Alignment::Center), rows[4]);
}

/// Size of the current list, e.g. "12 dishes on the list"
pub fn options_text(options: usize) -> String {
    match options {
        0 => "the list is empty".to_string(),
        1 => "1 dish on the list".to_string(),
        n => format!("{n} dishes on the list"),
    }
}
