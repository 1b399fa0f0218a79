//! Step-through viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: replay state, keyboard event loop, pane focus
//! - **[`panes`]**: stateless render functions for the automaton, tape,
//!   output and status bar
//! - **[`theme`]**: color palette shared by all panes
//!
//! Construct an [`App`] from a finished recorded run and call [`App::run`].
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
