//! Top-level frame rendering

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::categories::render_category_bar;
use super::headline::{render_headline, HeadlineView};
use super::helpers::{centered_rect, wrap_text};
use super::sprinkles::render_sprinkles;
use crate::app::App;
use crate::theme::{
    ACCENT, BG_PRIMARY, BG_TEASE, ROUNDED_BORDERS, TEXT_INVERSE, TEXT_MUTED, TEXT_SECONDARY,
};

/// Widest a tease bubble gets (columns, including borders)
const TEASE_MAX_WIDTH: u16 = 36;

/// Draw the whole UI for the current app state
pub fn render_app(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    // Category bar, page, bottom bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category bar
            Constraint::Min(7),    // Page
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(area);

    render_category_bar(main_layout[0], &app.categories, app.selected_category, frame);

    let page = main_layout[1];
    render_sprinkles(&app.sprinkles, page, frame);

    let view = HeadlineView {
        slot_label: app.picker.slot().label,
        what: app.what(),
        phase: app.phase,
        tick: app.animation_tick,
        show_tip: app.tip_visible(now),
        options: app.picker.candidates().len(),
    };
    render_headline(page, &view, frame);

    if let Some((message, _)) = app.tease {
        render_tease(message, page, frame);
    }

    let keybindings = Line::from(vec![
        Span::styled(" Space", Style::default().fg(ACCENT)),
        Span::styled(": Start/Stop | ", Style::default().fg(TEXT_MUTED)),
        Span::styled("t", Style::default().fg(ACCENT)),
        Span::styled(": Switch meal | ", Style::default().fg(TEXT_MUTED)),
        Span::styled("←/→ 1-9", Style::default().fg(ACCENT)),
        Span::styled(": Category | ", Style::default().fg(TEXT_MUTED)),
        Span::styled("q", Style::default().fg(ACCENT)),
        Span::styled(": Quit ", Style::default().fg(TEXT_MUTED)),
    ]);
    frame.render_widget(
        Paragraph::new(keybindings).style(Style::default().fg(TEXT_SECONDARY)),
        main_layout[2],
    );
}

/// Tease bubble in the upper part of the page
fn render_tease(message: &str, page: Rect, frame: &mut Frame) {
    let inner_width = TEASE_MAX_WIDTH.min(page.width).saturating_sub(4) as usize;
    let lines = wrap_text(message, inner_width);
    let width = lines
        .iter()
        .map(|l| Span::raw(l.as_str()).width() as u16)
        .max()
        .unwrap_or(0)
        + 4;
    let height = lines.len() as u16 + 2;

    let upper = Rect::new(page.x, page.y, page.width, page.height / 2);
    let bubble = centered_rect(width, height, upper);

    let text: Vec<Line> = lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(TEXT_INVERSE))))
        .collect();
    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(BG_TEASE))
            .style(Style::default().bg(BG_TEASE)),
    );

    frame.render_widget(Clear, bubble);
    frame.render_widget(paragraph, bubble);
}
