//! Replay application state and logic

use super::panes::utils::describe_identity;
use crate::automaton::Automaton;
use crate::interpreter::engine::RunOutcome;
use crate::interpreter::errors::HistoryError;
use crate::snapshot::{Snapshot, SnapshotManager, StepEvent};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Automaton,
    Tape,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (automaton -> tape -> output)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Automaton => FocusedPane::Tape,
            FocusedPane::Tape => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Automaton,
        }
    }
}

/// The replay application state
pub struct App {
    /// The automaton the run walked over
    pub automaton: Automaton,

    /// Recorded steps of the run
    pub history: SnapshotManager,

    /// How the run ended
    pub outcome: RunOutcome,

    /// Index of the snapshot on screen
    pub position: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub automaton_scroll: usize,
    pub tape_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over a finished recorded run
    pub fn new(automaton: Automaton, history: SnapshotManager, outcome: RunOutcome) -> Self {
        let long_ago = Instant::now()
            .checked_sub(Duration::from_secs(1))
            .unwrap_or_else(Instant::now);

        let mut app = App {
            automaton,
            history,
            outcome,
            position: 0,
            focused_pane: FocusedPane::Automaton,
            automaton_scroll: 0,
            tape_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: long_ago,
            last_space_press: long_ago,
        };
        app.status_message = app.describe_current();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_millis(500) {
                if self.step_forward().is_err() {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Poll with timeout so auto-play keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Snapshot currently on screen
    pub fn current(&self) -> Option<&Snapshot> {
        self.history.get(self.position)
    }

    fn is_at_end(&self) -> bool {
        self.position + 1 >= self.history.len()
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Automaton on the left, tape over output on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        let snapshot = self.current().cloned();
        let at_end = self.is_at_end();

        super::panes::render_automaton_pane(
            frame,
            columns[0],
            &self.automaton,
            snapshot.as_ref().map(|s| s.state),
            self.focused_pane == FocusedPane::Automaton,
            &mut self.automaton_scroll,
        );

        let (tape, cursor) = match &snapshot {
            Some(s) => (self.history.tape(s.tape).unwrap_or_default(), s.cursor),
            None => ("", 0),
        };
        super::panes::render_tape_pane(
            frame,
            right_rows[0],
            tape,
            cursor,
            self.focused_pane == FocusedPane::Tape,
            &mut self.tape_scroll,
        );

        let trace = snapshot
            .as_ref()
            .map(|s| self.history.output_at(s))
            .unwrap_or_default();
        super::panes::render_output_pane(
            frame,
            right_rows[1],
            trace,
            &self.outcome,
            at_end,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.position,
            self.history.len(),
            self.is_playing,
            self.history.is_truncated(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                if let Err(err) = self.step_backward() {
                    self.status_message = format!("Cannot step backward: {err}");
                }
            }
            KeyCode::Right => {
                self.is_playing = false;
                if let Err(err) = self.step_forward() {
                    self.status_message = format!("Cannot step forward: {err}");
                }
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::Char(' ') => {
                // Debounce key repeat
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    self.status_message = if self.is_playing {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                if !self.history.is_empty() {
                    self.position = self.history.len() - 1;
                    self.status_message = self.describe_current();
                }
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                if !self.history.is_empty() {
                    self.position = 0;
                    self.status_message = self.describe_current();
                }
            }
            _ => {}
        }
    }

    /// Move to the next recorded step
    pub fn step_forward(&mut self) -> Result<(), HistoryError> {
        if self.history.is_empty() {
            return Err(HistoryError::Empty);
        }
        if self.is_at_end() {
            return Err(HistoryError::AtEnd);
        }
        self.position += 1;
        self.status_message = self.describe_current();
        Ok(())
    }

    /// Move to the previous recorded step
    pub fn step_backward(&mut self) -> Result<(), HistoryError> {
        if self.history.is_empty() {
            return Err(HistoryError::Empty);
        }
        if self.position == 0 {
            return Err(HistoryError::AtStart);
        }
        self.position -= 1;
        self.status_message = self.describe_current();
        Ok(())
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Automaton => &mut self.automaton_scroll,
            FocusedPane::Tape => &mut self.tape_scroll,
            FocusedPane::Output => &mut self.output_scroll,
        }
    }

    /// Status line for the snapshot on screen
    fn describe_current(&self) -> String {
        let Some(snapshot) = self.current() else {
            return "Nothing was run".to_string();
        };
        let state = describe_identity(self.automaton.state(snapshot.state).id());

        match snapshot.event {
            StepEvent::Start => format!("Start at state {state}"),
            StepEvent::Transition { symbol } => format!("Input {symbol} → state {state}"),
            StepEvent::Splice { chars } => format!("Spliced {chars} character(s) of live input"),
            StepEvent::DeadTransition { symbol: Some(symbol) } => {
                format!("No transition on {symbol} from state {state}, output suppressed")
            }
            StepEvent::DeadTransition { symbol: None } => {
                format!("Input too wide for any transition from state {state}, output suppressed")
            }
            StepEvent::Halt { accepted: true } => format!("Halted on accepting state {state}"),
            StepEvent::Halt { accepted: false } => {
                format!("Halted on non-accepting state {state}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::engine::Interpreter;
    use crate::parser::builder::build;
    use crossterm::event::KeyModifiers;
    use std::io as stdio;

    fn recorded_app(definition: &str, execution: &str) -> App {
        let automaton = build(definition);
        let mut history = SnapshotManager::new(1024 * 1024);
        let outcome =
            Interpreter::new(&automaton).run_recorded(execution, stdio::empty(), &mut history);
        App::new(automaton, history, outcome)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_navigation() {
        let mut app = recorded_app("..1000001. -1-1000010- ..1000010.", ".1.");
        assert_eq!(app.history.len(), 3);
        assert_eq!(app.status_message, "Start at state 65 'A'");

        assert_eq!(app.step_backward(), Err(HistoryError::AtStart));
        app.step_forward().unwrap();
        assert_eq!(app.status_message, "Input 1 → state 66 'B'");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.position, 2);
        assert_eq!(app.step_forward(), Err(HistoryError::AtEnd));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.position, 0);
    }

    #[test]
    fn test_dead_run_is_replayable() {
        let mut app = recorded_app("..1000001.", ".1.");
        assert_eq!(
            app.outcome,
            RunOutcome::DeadTransition {
                state: 65,
                symbol: Some(1)
            }
        );
        let last = app.history.get(app.history.len() - 1).unwrap();
        assert_eq!(last.event, StepEvent::DeadTransition { symbol: Some(1) });
        assert_eq!(app.status_message, "Start at state 65 'A'");

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.status_message,
            "No transition on 1 from state 65 'A', output suppressed"
        );
    }

    #[test]
    fn test_empty_history() {
        let mut app = recorded_app("", ".1.");
        assert_eq!(app.status_message, "Nothing was run");
        assert_eq!(app.step_forward(), Err(HistoryError::Empty));
    }

    #[test]
    fn test_focus_and_quit() {
        let mut app = recorded_app("..0.", "");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tape);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.tape_scroll, 1);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
