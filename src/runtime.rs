use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::SessionInput;

/// What one turn of the session loop has to react to. Key presses are
/// already translated into session input here, so the loop never handles
/// raw terminal events; quiet intervals surface as `SessionInput::Tick`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    Session(SessionInput),
    Cancel,
    Resize,
}

/// Translate a terminal key press into a loop event.
///
/// Esc and ctrl-c cancel regardless of state; everything else degrades to
/// the session's own input alphabet (printable char, backspace, or noise).
pub fn map_key(key: KeyEvent) -> Event {
    if key.code == KeyCode::Esc {
        return Event::Cancel;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Event::Cancel;
    }

    match key.code {
        KeyCode::Backspace => Event::Session(SessionInput::Backspace),
        KeyCode::Char(c) => Event::Session(SessionInput::Char(c)),
        _ => Event::Session(SessionInput::Other),
    }
}

/// Where loop events come from. The production source reads the terminal;
/// tests feed a plain channel.
pub trait EventSource: Send + 'static {
    /// Wait up to `timeout` for the next event.
    fn recv_timeout(&self, timeout: Duration) -> Result<Event, RecvTimeoutError>;
}

/// Terminal-backed event source. A detached thread blocks on crossterm and
/// forwards already-mapped events over a channel, so the session loop only
/// ever waits on one receiver.
pub struct TerminalEventSource {
    rx: Receiver<Event>,
}

impl TerminalEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let mapped = match event::read() {
                // Windows terminals also report key releases; only presses count
                Ok(CtEvent::Key(key)) if key.kind == KeyEventKind::Press => Some(map_key(key)),
                Ok(CtEvent::Resize(_, _)) => Some(Event::Resize),
                Ok(_) => None,
                Err(_) => break,
            };

            if let Some(ev) = mapped {
                if tx.send(ev).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }
}

impl Default for TerminalEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for TerminalEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<Event, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Channel-fed event source for headless tests.
pub struct TestEventSource {
    rx: Receiver<Event>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<Event>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<Event, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Advances the session loop one event at a time, turning quiet intervals
/// into ticks. This is how "poll the wall clock once per render cycle"
/// manifests: with no input for a whole tick interval the loop still wakes
/// up, re-checks the deadline, and redraws.
pub struct Runner<E: EventSource> {
    source: E,
    tick_interval: Duration,
}

impl<E: EventSource> Runner<E> {
    pub fn new(source: E, tick_interval: Duration) -> Self {
        Self {
            source,
            tick_interval,
        }
    }

    pub fn step(&self) -> Event {
        self.source
            .recv_timeout(self.tick_interval)
            .unwrap_or(Event::Session(SessionInput::Tick))
    }
}
