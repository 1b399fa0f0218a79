//! Tape pane: the execution text as the walker currently sees it

use super::utils::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the tape with everything before the cursor dimmed and the cursor cell highlighted
pub fn render_tape_pane(
    frame: &mut Frame,
    area: Rect,
    tape: &str,
    cursor: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Tape ", is_focused);

    let mut spans = Vec::new();
    for (i, c) in tape.chars().enumerate() {
        let shown = match c {
            '\n' => "⏎".to_string(),
            c if c.is_control() => "·".to_string(),
            c => c.to_string(),
        };

        let style = if i == cursor {
            Style::default()
                .bg(DEFAULT_THEME.cursor_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else if i < cursor {
            Style::default().fg(DEFAULT_THEME.comment)
        } else {
            match c {
                '.' | '-' => Style::default().fg(DEFAULT_THEME.marker),
                '0' | '1' => Style::default().fg(DEFAULT_THEME.number),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            }
        };
        spans.push(Span::styled(shown, style));
    }

    // Cursor past the end: show where the run stopped
    if cursor >= tape.chars().count() {
        spans.push(Span::styled(
            " ⏹",
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    }

    let max_scroll = usize::from(u16::MAX);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}
