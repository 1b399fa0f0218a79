// dfaer: DFA-er interpreter with a step-through viewer

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dfaer::interpreter::constants::DEFAULT_HISTORY_LIMIT;
use dfaer::interpreter::engine::{Interpreter, RunOutcome};
use dfaer::parser::{read_source, Program};
use dfaer::snapshot::SnapshotManager;
use dfaer::ui::App;

#[derive(Parser)]
#[command(name = "dfaer")]
#[command(about = "Run a DFA-er program: build the automaton, then walk it")]
struct Cli {
    /// Program file; reads standard input when omitted
    file: Option<PathBuf>,

    /// Print every state and transition before running
    #[arg(long)]
    dump: bool,

    /// Record the run and step through it in a terminal UI
    #[arg(long)]
    tui: bool,

    /// Memory cap in bytes for the recorded run
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    history_limit: usize,
}

fn init_tracing(tui: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Log lines would be drawn over the TUI
    if tui {
        tracing_subscriber::registry().with(env_filter).init();
        return;
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.tui);

    let source = match read_source(cli.file.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            tracing::debug!(?err, "source unreadable");
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let program = Program::parse(&source);
    tracing::debug!(
        states = program.automaton.len(),
        execution_len = program.execution.len(),
        "program parsed"
    );

    if cli.dump {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", program.automaton.dump())?;
        stdout.flush()?;
    }

    let outcome = if cli.tui {
        run_with_viewer(program, cli.history_limit)?
    } else {
        Interpreter::new(&program.automaton).run(&program.execution, io::stdin().lock())
    };

    if let Some(output) = outcome.output() {
        println!("{}", output);
    }

    Ok(())
}

/// Run with history recording, then replay it in the TUI
fn run_with_viewer(
    program: Program,
    history_limit: usize,
) -> Result<RunOutcome, Box<dyn std::error::Error>> {
    let mut history = SnapshotManager::new(history_limit);
    let outcome = Interpreter::new(&program.automaton).run_recorded(
        &program.execution,
        io::stdin().lock(),
        &mut history,
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(program.automaton, history, outcome);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(app.outcome)
}
