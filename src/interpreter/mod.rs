//! DFA-er execution
//!
//! - [`engine`]: Walks an execution section over a built automaton
//! - [`tape`]: Execution text with a cursor and live-input splicing
//! - [`errors`]: Errors outside the core walk (reading source, history)
//! - [`constants`]: Output and history limits
//!
//! # Execution Model
//!
//! The walk starts on the start state and appends each landed-on identity to
//! an output trace. `.` feeds an explicit symbol, `-` splices all remaining
//! live input into the tape. The trace is printed only if the run ends on an
//! accepting state; a missing transition suppresses it outright.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod tape;

use crate::parser::Program;
use std::io::Read;

pub use engine::{Interpreter, RunOutcome};

/// Parse and run a whole program. Returns the text to print, if any.
pub fn run_source<R: Read>(source: &str, input: R) -> Option<String> {
    let program = Program::parse(source);
    Interpreter::new(&program.automaton)
        .run(&program.execution, input)
        .into_output()
}
