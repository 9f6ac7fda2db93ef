pub mod dictionary;
pub mod generator;
pub mod metrics;
pub mod runtime;
pub mod session;
pub mod ui;

use crate::dictionary::Dictionary;
use crate::runtime::{Event, EventSource, Runner, TerminalEventSource};
use crate::session::{Session, SessionInput};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin, Stdout},
    time::Duration,
};

const TICK_RATE_MS: u64 = 100;

/// terminal typing speed test
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// run a typing test
    Run {
        /// test duration in seconds
        #[clap(value_parser = clap::value_parser!(u64).range(1..))]
        duration_secs: u64,

        /// dictionary to pull words from (see `list`)
        dictionary: String,
    },

    /// list available dictionary groups
    List,

    /// search dictionaries by name
    Search {
        /// case-insensitive substring to match against dictionary ids
        query: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppState {
    Typing,
    Results,
}

/// Process-scoped controller state: the word list loaded once per invocation,
/// the configured duration, and the session currently on screen.
#[derive(Debug)]
pub struct App {
    words: Vec<String>,
    duration_secs: f64,
    pub session: Session,
    pub state: AppState,
}

impl App {
    pub fn new(words: Vec<String>, duration_secs: f64) -> Result<Self, Box<dyn Error>> {
        let session = Session::new(words.clone(), duration_secs)?;

        Ok(Self {
            words,
            duration_secs,
            session,
            state: AppState::Typing,
        })
    }

    /// Replace the finished session with a fresh one (restart key).
    pub fn restart(&mut self) -> Result<(), Box<dyn Error>> {
        self.session = Session::new(self.words.clone(), self.duration_secs)?;
        self.state = AppState::Typing;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::List => list_dictionaries(),
        Command::Search { query } => search_dictionaries(&query),
        Command::Run {
            duration_secs,
            dictionary,
        } => run(duration_secs, &dictionary),
    }
}

fn list_dictionaries() -> Result<(), Box<dyn Error>> {
    let groups = dictionary::load_groups()?;

    println!("Available dictionaries:");
    for group in groups {
        println!("- {}: {}", group.name, group.dictionaries.join(", "));
    }

    Ok(())
}

fn search_dictionaries(query: &str) -> Result<(), Box<dyn Error>> {
    let found = dictionary::search(query)?;

    if found.is_empty() {
        println!("No dictionaries found for query: {query}");
    } else {
        println!("Dictionaries matching '{query}':");
        for id in found {
            println!("- {id}");
        }
    }

    Ok(())
}

fn run(duration_secs: u64, dictionary_id: &str) -> Result<(), Box<dyn Error>> {
    // Configuration errors are reported before any UI state is shown
    let dict = match Dictionary::load(dictionary_id) {
        Ok(dict) => dict,
        Err(e) => {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::ValueValidation, e.to_string()).exit();
        }
    };

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let mut app = App::new(dict.words, duration_secs as f64)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let runner = Runner::new(
        TerminalEventSource::new(),
        Duration::from_millis(TICK_RATE_MS),
    );
    let result = start_tui(&mut terminal, &mut app, &runner);

    // Restore the terminal on every exit path, then surface any loop error
    let restored = restore_terminal(&mut terminal);
    result.and(restored)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), Box<dyn Error>> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn start_tui<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui(app, f))?;

        match runner.step() {
            Event::Cancel => break,
            Event::Resize => {}
            Event::Session(input) => match app.state {
                AppState::Typing => {
                    app.session.handle(input);

                    if input == SessionInput::Tick && app.session.has_finished() {
                        app.session.calc_results();
                        app.state = AppState::Results;
                    }
                }
                AppState::Results => match input {
                    SessionInput::Char('r') => app.restart()?,
                    SessionInput::Char('q') => break,
                    _ => {}
                },
            },
        }
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
