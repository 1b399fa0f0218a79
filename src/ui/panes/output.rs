//! Output pane: identities emitted so far and how the run ended

use super::utils::{escape_output, pane_block};
use crate::interpreter::engine::RunOutcome;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the output pane.
///
/// `at_end` is true when the replay is on the final recorded step; only then
/// is the outcome line shown.
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &str,
    outcome: &RunOutcome,
    at_end: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Output ", is_focused);

    let mut lines = vec![Line::from(Span::styled(
        escape_output(trace),
        Style::default().fg(DEFAULT_THEME.fg),
    ))];

    if at_end {
        let (text, color) = match outcome {
            RunOutcome::Accepted(_) => ("accepted: output printed".to_string(), DEFAULT_THEME.success),
            RunOutcome::Rejected => (
                "rejected: ended on a non-accepting state".to_string(),
                DEFAULT_THEME.error,
            ),
            RunOutcome::DeadTransition {
                state,
                symbol: Some(symbol),
            } => (
                format!("dead: state {state} has no transition on {symbol}"),
                DEFAULT_THEME.error,
            ),
            RunOutcome::DeadTransition {
                state,
                symbol: None,
            } => (
                format!("dead: input too wide for any transition from state {state}"),
                DEFAULT_THEME.error,
            ),
            RunOutcome::NoStart => ("no start state".to_string(), DEFAULT_THEME.comment),
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    *scroll_offset = (*scroll_offset).min(usize::from(u16::MAX));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}
