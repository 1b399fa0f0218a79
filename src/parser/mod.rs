//! DFA-er source parsing
//!
//! A program is split at the first `!` into a definition section and an
//! execution section:
//! - [`scanner`]: Binary-token scanner shared with the interpreter
//! - [`builder`]: Definition section → [`Automaton`]
//!
//! Parsing never fails. Malformed definitions simply yield a partial automaton.

pub mod builder;
pub mod scanner;

use crate::automaton::Automaton;
use crate::interpreter::errors::SourceError;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Separates the definition section from the execution section
pub const SECTION_SEPARATOR: char = '!';

/// Starts a state declaration, or an explicit input in the execution section
pub const STATE_MARK: char = '.';

/// Starts a transition declaration, or a live-input splice in the execution section
pub const TRANSITION_MARK: char = '-';

/// A parsed DFA-er program
#[derive(Debug, Clone)]
pub struct Program {
    pub automaton: Automaton,
    pub execution: String,
}

impl Program {
    /// Split `source` and build the automaton from its definition section
    pub fn parse(source: &str) -> Self {
        let (definition, execution) = split_source(source);
        Program {
            automaton: builder::build(definition),
            execution: execution.to_string(),
        }
    }
}

/// Split at the first `!`. Without one, the execution section is empty.
pub fn split_source(source: &str) -> (&str, &str) {
    source
        .split_once(SECTION_SEPARATOR)
        .unwrap_or((source, ""))
}

/// Read a program from `path`, or from standard input to end of stream when there is none
pub fn read_source(path: Option<&Path>) -> Result<String, SourceError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| SourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(SourceError::Stdin)?;
            Ok(source)
        }
    }
}
