//! Automaton pane: every state with its transitions
//!
//! One header line per state (start arrow, accepting ring, identity) followed
//! by one indented line per transition. The walker's current state is
//! highlighted and kept in view when stepping.

use super::utils::{clamp_scroll, describe_identity, pane_block};
use crate::automaton::{Automaton, StateIndex};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render the automaton pane
pub fn render_automaton_pane(
    frame: &mut Frame,
    area: Rect,
    automaton: &Automaton,
    current: Option<StateIndex>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Automaton ", is_focused);

    if automaton.is_empty() {
        let paragraph = Paragraph::new("(no states)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let mut items: Vec<ListItem> = Vec::new();
    let mut current_row = None;

    for (idx, state) in automaton.states() {
        let is_current = current == Some(idx);
        if is_current {
            current_row = Some(items.len());
        }

        let start_marker = if automaton.start() == Some(idx) { "▶ " } else { "  " };
        let (accept_marker, accept_color) = if state.is_accepting() {
            ("◉ ", DEFAULT_THEME.success)
        } else {
            ("○ ", DEFAULT_THEME.comment)
        };

        let mut header_style = Style::default().fg(DEFAULT_THEME.fg);
        if is_current {
            header_style = header_style
                .bg(DEFAULT_THEME.current_line_bg)
                .add_modifier(Modifier::BOLD);
        }

        items.push(ListItem::new(Line::from(vec![
            Span::styled(start_marker, Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(accept_marker, Style::default().fg(accept_color)),
            Span::styled(format!("state {}", describe_identity(state.id())), header_style),
        ])));

        for (symbol, dest) in state.transitions() {
            items.push(ListItem::new(Line::from(vec![
                Span::raw("      "),
                Span::styled(symbol.to_string(), Style::default().fg(DEFAULT_THEME.number)),
                Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    describe_identity(automaton.state(dest).id()),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ])));
        }
    }

    let total_items = items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Unfocused panes follow the current state
    if !is_focused {
        if let Some(row) = current_row {
            if row < *scroll_offset || row >= *scroll_offset + visible_height {
                *scroll_offset = row.saturating_sub(visible_height / 2);
            }
        }
    }
    clamp_scroll(scroll_offset, total_items, visible_height);

    let visible_items: Vec<ListItem> = items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
