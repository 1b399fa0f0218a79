// Execution engine for DFA-er programs

use crate::automaton::{Automaton, StateId, StateIndex, Symbol};
use crate::interpreter::constants::CODE_POINT_MAX;
use crate::interpreter::tape::{encode_input, Tape};
use crate::parser::scanner::{scan_binary, ScanError, Token};
use crate::parser::{STATE_MARK, TRANSITION_MARK};
use crate::snapshot::{Snapshot, SnapshotManager, StepEvent};
use std::io::Read;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The automaton has no states, so nothing ran
    NoStart,
    /// Ended on an accepting state; carries the trace of visited identities
    Accepted(String),
    /// Ended on a non-accepting state
    Rejected,
    /// An explicit input had no transition out of the current state.
    /// `symbol` is `None` when the input was too wide for any transition.
    DeadTransition {
        state: StateId,
        symbol: Option<Symbol>,
    },
}

impl RunOutcome {
    /// The text to print, if any
    pub fn output(&self) -> Option<&str> {
        match self {
            RunOutcome::Accepted(output) => Some(output),
            _ => None,
        }
    }

    /// Consume the outcome, keeping the text to print
    pub fn into_output(self) -> Option<String> {
        match self {
            RunOutcome::Accepted(output) => Some(output),
            _ => None,
        }
    }
}

/// Append the textual form of a state identity to `out`.
///
/// Identities that are valid code points become that single character;
/// anything else is written as decimal digits.
pub fn render_identity(id: StateId, out: &mut String) {
    let ch = if id <= CODE_POINT_MAX {
        u32::try_from(id).ok().and_then(char::from_u32)
    } else {
        None
    };

    match ch {
        Some(c) => out.push(c),
        None => out.push_str(&id.to_string()),
    }
}

/// Walks an execution section over a built automaton
pub struct Interpreter<'a> {
    automaton: &'a Automaton,
}

impl<'a> Interpreter<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Interpreter { automaton }
    }

    /// Run `execution`, reading live input from `input` whenever the tape asks for it
    pub fn run<R: Read>(&self, execution: &str, input: R) -> RunOutcome {
        match self.automaton.start() {
            Some(start) => Walk::new(self.automaton, start, execution, None).run(input),
            None => RunOutcome::NoStart,
        }
    }

    /// Like [`Interpreter::run`], recording every step into `history`
    pub fn run_recorded<R: Read>(
        &self,
        execution: &str,
        input: R,
        history: &mut SnapshotManager,
    ) -> RunOutcome {
        match self.automaton.start() {
            Some(start) => {
                Walk::new(self.automaton, start, execution, Some(history)).run(input)
            }
            None => RunOutcome::NoStart,
        }
    }
}

/// Result of handling one marker on the tape
enum Step {
    Continue,
    Halt,
    Dead(Option<Symbol>),
}

/// Mutable state of a single run
struct Walk<'a, 'h> {
    automaton: &'a Automaton,
    tape: Tape,
    current: StateIndex,
    output: String,
    history: Option<&'h mut SnapshotManager>,
    recording: bool,
    tape_version: usize,
}

impl<'a, 'h> Walk<'a, 'h> {
    fn new(
        automaton: &'a Automaton,
        start: StateIndex,
        execution: &str,
        history: Option<&'h mut SnapshotManager>,
    ) -> Self {
        let recording = history.is_some();
        Walk {
            automaton,
            tape: Tape::new(execution),
            current: start,
            output: String::new(),
            history,
            recording,
            tape_version: 0,
        }
    }

    fn run<R: Read>(mut self, mut input: R) -> RunOutcome {
        self.record_tape();
        self.land(self.current);
        self.record(StepEvent::Start);

        while let Some(ch) = self.tape.peek() {
            let step = match ch {
                STATE_MARK => self.explicit_input(),
                TRANSITION_MARK => self.splice(&mut input),
                _ => {
                    self.tape.advance(1);
                    Step::Continue
                }
            };

            match step {
                Step::Continue => {}
                Step::Halt => break,
                Step::Dead(symbol) => {
                    let state = self.automaton.state(self.current).id();
                    tracing::debug!(state, ?symbol, "dead transition, output suppressed");
                    self.record(StepEvent::DeadTransition { symbol });
                    self.finish();
                    return RunOutcome::DeadTransition { state, symbol };
                }
            }
        }

        let accepted = self.automaton.state(self.current).is_accepting();
        self.record(StepEvent::Halt { accepted });
        self.finish();

        if accepted {
            RunOutcome::Accepted(self.output)
        } else {
            RunOutcome::Rejected
        }
    }

    /// `.` followed by a symbol token
    fn explicit_input(&mut self) -> Step {
        if self.tape.at_last() {
            return Step::Halt;
        }
        self.tape.advance(1);

        let symbol = match scan_binary(self.tape.remaining(), STATE_MARK) {
            Ok(Token { value, consumed }) => {
                self.tape.advance(consumed);
                value
            }
            Err(err @ ScanError::Overflow { consumed, .. }) => {
                // No transition is keyed this wide
                tracing::debug!(cursor = self.tape.cursor(), %err, "input matches no transition");
                self.tape.advance(consumed);
                return Step::Dead(None);
            }
            Err(err @ ScanError::MalformedToken { .. }) => {
                tracing::debug!(cursor = self.tape.cursor(), %err, "run ended on unreadable input");
                return Step::Halt;
            }
        };

        match self.automaton.step(self.current, symbol) {
            Some(next) => {
                self.land(next);
                self.record(StepEvent::Transition { symbol });
                Step::Continue
            }
            None => Step::Dead(Some(symbol)),
        }
    }

    /// `-`: read all remaining live input and splice it in front of the rest of the tape
    fn splice<R: Read>(&mut self, input: &mut R) -> Step {
        self.tape.advance(1);

        let mut text = String::new();
        if let Err(err) = input.read_to_string(&mut text) {
            tracing::warn!(%err, "failed to read live input, treating it as empty");
            text.clear();
        }

        if text.is_empty() {
            tracing::debug!("no live input available, dropping rest of tape");
            self.tape.truncate();
            return Step::Halt;
        }

        let chars = text.chars().count();
        self.tape.splice(&encode_input(&text));
        tracing::debug!(chars, "live input spliced");
        self.record_tape();
        self.record(StepEvent::Splice { chars });
        Step::Continue
    }

    fn land(&mut self, idx: StateIndex) {
        self.current = idx;
        render_identity(self.automaton.state(idx).id(), &mut self.output);
    }

    fn record(&mut self, event: StepEvent) {
        if !self.recording {
            return;
        }
        let snapshot = Snapshot {
            event,
            state: self.current,
            cursor: self.tape.cursor(),
            tape: self.tape_version,
            output_len: self.output.len(),
        };
        if let Some(history) = self.history.as_deref_mut() {
            if let Err(err) = history.push(snapshot) {
                tracing::warn!(%err, "history recording stopped");
                self.recording = false;
            }
        }
    }

    fn record_tape(&mut self) {
        if !self.recording {
            return;
        }
        let text = self.tape.to_string();
        if let Some(history) = self.history.as_deref_mut() {
            match history.push_tape(text) {
                Ok(version) => self.tape_version = version,
                Err(err) => {
                    tracing::warn!(%err, "history recording stopped");
                    self.recording = false;
                }
            }
        }
    }

    fn finish(&mut self) {
        let truncated = !self.recording;
        if let Some(history) = self.history.as_deref_mut() {
            history.finish(&self.output, truncated);
        }
    }
}
