use crate::automaton::StateId;
use crate::interpreter::engine::render_identity;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered pane block, highlighted when focused
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}

/// Identity as shown in the UI: decimal, plus the emitted glyph when printable
pub(crate) fn describe_identity(id: StateId) -> String {
    let mut glyph = String::new();
    render_identity(id, &mut glyph);
    match glyph.chars().next() {
        Some(c) if glyph.chars().count() == 1 && !c.is_control() && !c.is_whitespace() => {
            format!("{id} '{c}'")
        }
        _ => id.to_string(),
    }
}

/// Make control characters visible in emitted output
pub(crate) fn escape_output(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{{{:x}}}", u32::from(c))),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_identity() {
        assert_eq!(describe_identity(65), "65 'A'");
        assert_eq!(describe_identity(0), "0");
        assert_eq!(describe_identity(32), "32");
        assert_eq!(describe_identity(0x110000), "1114112");
    }

    #[test]
    fn test_escape_output() {
        assert_eq!(escape_output("A\u{0}\n"), "A\\u{0}\\n");
    }

    #[test]
    fn test_clamp_scroll() {
        let mut offset = 50;
        clamp_scroll(&mut offset, 20, 5);
        assert_eq!(offset, 15);
        clamp_scroll(&mut offset, 3, 5);
        assert_eq!(offset, 0);
    }
}
