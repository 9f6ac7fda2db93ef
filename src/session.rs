use crate::generator;
use crate::metrics;
use std::error::Error;
use std::time::Instant;

/// Number of words sampled into each target phrase.
pub const WORDS_PER_TARGET: usize = 100;
/// Fixed wrap width the target is chunked into for display.
pub const WRAP_WIDTH: usize = 60;
/// Wrapped lines visible at once; the scroll offset advances in jumps of this.
pub const VISIBLE_LINES: usize = 3;

/// Session-level input event. Terminal keys are translated into this
/// alphabet before they reach the state machine (see `runtime::map_key`),
/// so nothing in here depends on terminal types.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionInput {
    Char(char),
    Backspace,
    Other,
    Tick,
}

/// One timed typing attempt: the target text, everything typed so far, the
/// scroll window, and the clock. Several targets ("sub-tests") may be burned
/// through before the session's time budget expires.
#[derive(Debug)]
pub struct Session {
    words: Vec<String>,
    pub target: String,
    pub typed: Vec<char>,
    pub scroll: usize,
    pub started_at: Option<Instant>,
    pub duration_secs: f64,
    pub seconds_remaining: f64,
    pub wpm: u64,
    pub accuracy: f64,
    pub finished: bool,
}

impl Session {
    pub fn new(words: Vec<String>, duration_secs: f64) -> Result<Self, Box<dyn Error>> {
        let target = generator::generate(&words, WORDS_PER_TARGET)?;

        Ok(Self {
            words,
            target,
            typed: Vec::new(),
            scroll: 0,
            started_at: None,
            duration_secs,
            seconds_remaining: duration_secs,
            wpm: 0,
            accuracy: 0.0,
            finished: false,
        })
    }

    /// Seconds since the first keystroke, or 0 while idle.
    pub fn elapsed_secs(&self) -> f64 {
        self.started_at
            .map_or(0.0, |start| start.elapsed().as_secs_f64())
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn has_finished(&self) -> bool {
        self.finished
    }

    /// Apply one session input event.
    pub fn handle(&mut self, input: SessionInput) {
        match input {
            SessionInput::Char(c) => self.write(c),
            SessionInput::Backspace => self.backspace(),
            SessionInput::Tick => self.on_tick(),
            SessionInput::Other => {}
        }
    }

    /// Append a typed character. The first character of the whole session
    /// starts the clock; input arriving on a full buffer is dropped.
    pub fn write(&mut self, c: char) {
        if self.finished || self.typed.len() >= self.target.chars().count() {
            return;
        }

        self.typed.push(c);

        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Remove the last typed character. Never starts the clock.
    pub fn backspace(&mut self) {
        if self.finished {
            return;
        }
        self.typed.pop();
    }

    /// One render-cycle tick: refresh the clock and live wpm, expire the
    /// session when the deadline passes, advance the scroll window, and roll
    /// over to a fresh target when the current one is fully typed.
    pub fn on_tick(&mut self) {
        if self.finished {
            return;
        }

        let elapsed = self.elapsed_secs();
        self.seconds_remaining = (self.duration_secs - elapsed).max(0.0);
        if elapsed > 0.0 {
            self.wpm = metrics::live_wpm(self.typed.len(), elapsed);
        }

        if self.seconds_remaining <= 0.0 {
            self.finished = true;
            return;
        }

        if self.typed.len() >= (self.scroll + VISIBLE_LINES) * WRAP_WIDTH {
            self.scroll += VISIBLE_LINES;
        }

        if self.typed.len() == self.target.chars().count() {
            self.next_target();
        }
    }

    /// Final accuracy snapshot, taken once on session end.
    pub fn calc_results(&mut self) {
        self.accuracy = metrics::accuracy(&self.typed, &self.target);
    }

    // Sub-test boundary: fresh target, cleared buffer, scroll back to the
    // top. The session clock keeps running.
    fn next_target(&mut self) {
        // The word list was non-empty at construction, so regeneration
        // cannot fail; keep the old target if it somehow does.
        if let Ok(target) = generator::generate(&self.words, WORDS_PER_TARGET) {
            self.target = target;
        }
        self.typed.clear();
        self.scroll = 0;
    }
}
