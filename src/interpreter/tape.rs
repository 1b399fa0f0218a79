//! Execution text as a rewritable tape
//!
//! The walker reads the execution section through a cursor. A live-input
//! splice replaces everything from the cursor onward with the encoded input
//! followed by the old remainder, and restarts the cursor at 0.

use crate::parser::STATE_MARK;
use std::fmt;

/// Character tape with a read cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<char>,
    cursor: usize,
}

impl Tape {
    pub fn new(text: &str) -> Self {
        Tape {
            cells: text.chars().collect(),
            cursor: 0,
        }
    }

    /// Character under the cursor
    pub fn peek(&self) -> Option<char> {
        self.cells.get(self.cursor).copied()
    }

    /// True when the cursor sits on the final character
    pub fn at_last(&self) -> bool {
        self.cursor + 1 == self.cells.len()
    }

    pub fn advance(&mut self, n: usize) {
        self.cursor = (self.cursor + n).min(self.cells.len());
    }

    /// Unread characters, starting at the cursor
    pub fn remaining(&self) -> &[char] {
        &self.cells[self.cursor..]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Rewrite the tape as `block` followed by the unread remainder, cursor at 0
    pub fn splice(&mut self, block: &str) {
        let mut cells: Vec<char> = block.chars().collect();
        cells.extend_from_slice(&self.cells[self.cursor..]);
        self.cells = cells;
        self.cursor = 0;
    }

    /// Drop the unread remainder, leaving the cursor at the end
    pub fn truncate(&mut self) {
        self.cells.truncate(self.cursor);
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cells.iter().try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}

/// Encode live input as explicit-input tokens.
///
/// Each character becomes its code point in `0b…` form, terminated by `.`;
/// the block as a whole opens with `.`, so `"AB"` encodes to
/// `.0b1000001..0b1000010.`. Empty input encodes to nothing.
pub fn encode_input(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let separator = format!("{STATE_MARK}{STATE_MARK}");
    let tokens: Vec<String> = input
        .chars()
        .map(|ch| format!("{:#b}", u32::from(ch)))
        .collect();
    format!("{STATE_MARK}{}{STATE_MARK}", tokens.join(&separator))
}
