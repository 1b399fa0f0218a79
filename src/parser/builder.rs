//! Automaton builder
//!
//! Walks the definition section with a single cursor:
//!
//! - `.` declares a state (`..` for an accepting one) whose identity is a
//!   binary token terminated by `.`
//! - `-` declares a transition out of the current state: a symbol token and a
//!   destination token, each terminated by `-`
//! - every other character is ignored
//!
//! Truncated input and unterminated tokens end the build early; whatever was
//! built up to that point is kept. A token too wide for 64 bits is stepped
//! over: it names a state or symbol no run can ever reach, so anything
//! declared with it is dropped and the build carries on.

use crate::automaton::{Automaton, StateIndex};
use crate::parser::scanner::{scan_binary, ScanError, Token};
use crate::parser::{STATE_MARK, TRANSITION_MARK};

/// State that transitions are currently attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Current {
    /// No declaration yet; a transition creates implicit state 0
    Unset,
    State(StateIndex),
    /// Last declaration had an identity wider than 64 bits
    Oversized,
}

/// Outcome of reading one token
enum Scanned {
    Value(u64),
    Oversized,
    /// Unterminated token, the build ends here
    Stop,
}

/// Single-pass builder over a definition section
pub struct Builder {
    input: Vec<char>,
    position: usize,
    current: Current,
    automaton: Automaton,
}

impl Builder {
    pub fn new(definition: &str) -> Self {
        Builder {
            input: definition.chars().collect(),
            position: 0,
            current: Current::Unset,
            automaton: Automaton::new(),
        }
    }

    /// Consume the whole definition and return the automaton built from it
    pub fn build(mut self) -> Automaton {
        while let Some(&ch) = self.input.get(self.position) {
            let keep_going = match ch {
                STATE_MARK => self.state_declaration(),
                TRANSITION_MARK => self.transition_declaration(),
                _ => {
                    self.position += 1;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        tracing::debug!(
            states = self.automaton.len(),
            stopped_at = self.position,
            "automaton built"
        );
        self.automaton
    }

    /// `.` or `..` followed by an identity token. Returns false when parsing must stop.
    fn state_declaration(&mut self) -> bool {
        if self.position + 1 >= self.input.len() {
            return false;
        }
        self.position += 1;

        let accepting = self.input[self.position] == STATE_MARK;
        if accepting {
            self.position += 1;
        }

        match self.scan(STATE_MARK) {
            Scanned::Value(id) => {
                let idx = self.automaton.declare(id, accepting);
                tracing::debug!(id, accepting, "state declared");
                self.current = Current::State(idx);
            }
            Scanned::Oversized => self.current = Current::Oversized,
            Scanned::Stop => return false,
        }
        true
    }

    /// `-` followed by a symbol token and a destination token. Returns false when parsing must stop.
    fn transition_declaration(&mut self) -> bool {
        self.position += 1;

        let from = match self.current {
            Current::State(idx) => Some(idx),
            Current::Oversized => None,
            Current::Unset => {
                let idx = self.automaton.declare(0, false);
                tracing::debug!("implicit state 0 created for leading transition");
                self.current = Current::State(idx);
                Some(idx)
            }
        };

        let symbol = match self.scan(TRANSITION_MARK) {
            Scanned::Value(symbol) => Some(symbol),
            Scanned::Oversized => None,
            Scanned::Stop => return false,
        };
        let dest_id = match self.scan(TRANSITION_MARK) {
            Scanned::Value(id) => id,
            Scanned::Oversized => return true,
            Scanned::Stop => return false,
        };

        // The destination exists even when the edge into it can never be taken
        let to = self.automaton.reference(dest_id);
        let (Some(from), Some(symbol)) = (from, symbol) else {
            tracing::debug!(to = dest_id, "unreachable transition skipped");
            return true;
        };

        self.automaton.add_transition(from, symbol, to);
        tracing::debug!(
            from = self.automaton.state(from).id(),
            symbol,
            to = dest_id,
            "transition declared"
        );
        true
    }

    fn scan(&mut self, stop: char) -> Scanned {
        match scan_binary(&self.input[self.position..], stop) {
            Ok(Token { value, consumed }) => {
                self.position += consumed;
                Scanned::Value(value)
            }
            Err(err @ ScanError::Overflow { consumed, .. }) => {
                tracing::warn!(position = self.position, %err, "oversized token skipped");
                self.position += consumed;
                Scanned::Oversized
            }
            Err(err @ ScanError::MalformedToken { .. }) => {
                tracing::debug!(position = self.position, %err, "definition truncated");
                Scanned::Stop
            }
        }
    }
}

/// Build an automaton from a definition section
pub fn build(definition: &str) -> Automaton {
    Builder::new(definition).build()
}
