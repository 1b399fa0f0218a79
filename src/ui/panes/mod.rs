//! TUI pane rendering
//!
//! - [`automaton`]: State table with start/accepting markers and the current state
//! - [`tape`]: Execution text with the walker's cursor
//! - [`output`]: Trace of visited identities and the run outcome
//! - [`status`]: Step counter, last event and keybindings
//! - `utils`: Shared block, scroll and identity helpers

pub(crate) mod utils;

pub mod automaton;
pub mod output;
pub mod status;
pub mod tape;

pub use automaton::render_automaton_pane;
pub use output::render_output_pane;
pub use status::render_status_bar;
pub use tape::render_tape_pane;
