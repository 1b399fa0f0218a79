//! # Introduction
//!
//! DFA-er is a language whose programs are a deterministic finite automaton
//! plus the input to run it on. `dfaer` builds the automaton from the first
//! half of a program and walks it over the second, printing the trace of
//! visited states when the run is accepted.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → split at '!' → Builder → Automaton → Interpreter → output or nothing
//! ```
//!
//! 1. [`parser`]: splits the source and builds the automaton with the
//!    binary-token scanner.
//! 2. [`automaton`]: flat state table with identity lookup and a fixed start state.
//! 3. [`interpreter`]: walks the execution section, splicing live input on `-`.
//! 4. [`snapshot`]: optional memory-bounded record of every step.
//! 5. [`ui`]: ratatui step-through viewer over a recorded run.
//!
//! ## Language
//!
//! Binary tokens are runs of `0`/`1` ended by a stop character; any other
//! character inside a token is ignored. In the definition section `.name.`
//! declares a state (`..name.` an accepting one) and `-symbol-dest-` adds a
//! transition out of the most recently declared state. In the execution
//! section `.symbol.` feeds one input and `-` feeds all of standard input.
//!
//! ```
//! use std::io;
//!
//! // 'H' --0--> 'i', both accepting
//! let source = "..1001000. -0-1101001- ..1101001. ! .0.";
//! assert_eq!(dfaer::interpreter::run_source(source, io::empty()), Some("Hi".to_string()));
//! ```

pub mod automaton;
pub mod interpreter;
pub mod parser;
pub mod snapshot;
pub mod ui;
