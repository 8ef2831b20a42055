use crate::{Board, DEFAULT_COLUMNS, DEFAULT_ROWS, TICK_INTERVAL};
use std::time::{Duration, Instant};

const RANDOM_FILL_RATE: f64 = 0.3;

/// Armable interval timer. Disarmed it never fires; armed it reports due
/// once per elapsed interval, rearming from the moment it fired.
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

/// Owns the current board and the running flag; the sole writer of
/// simulation state. Clicks and timer polls both land here, applied one at
/// a time against the latest state.
pub struct Simulation {
    running: bool,
    board: Board,
    generation: u64,
    ticker: Ticker,
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            running: false,
            board: Board::blank(DEFAULT_ROWS, DEFAULT_COLUMNS),
            generation: 0,
            ticker: Ticker::new(TICK_INTERVAL),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Invert cell `(r, c)`. Ignored while running; out-of-bounds
    /// coordinates are ignored without touching the board.
    pub fn toggle_cell(&mut self, r: usize, c: usize) {
        if self.running {
            return;
        }
        if r >= self.board.rows() || c >= self.board.columns() {
            return;
        }
        self.board = self.board.toggled(r, c);
    }

    /// Flip between RUNNING and STOPPED. Starting arms the ticker at `now`;
    /// stopping disarms it, so no tick can fire after the flag flips.
    pub fn toggle_running(&mut self, now: Instant) {
        self.running = !self.running;
        if self.running {
            self.ticker.arm(now);
        } else {
            self.ticker.disarm();
        }
    }

    /// Back to the initial state: STOPPED, all-dead board, generation 0.
    pub fn reset(&mut self) {
        self.running = false;
        self.ticker.disarm();
        self.board = Board::blank(DEFAULT_ROWS, DEFAULT_COLUMNS);
        self.generation = 0;
    }

    /// Stop and replace the board with a random fill.
    pub fn randomize(&mut self, seed: Option<u64>) {
        self.running = false;
        self.ticker.disarm();
        self.board = Board::random(DEFAULT_ROWS, DEFAULT_COLUMNS, seed, RANDOM_FILL_RATE);
        self.generation = 0;
    }

    /// Advance one generation. Only meaningful while running; a no-op once
    /// the simulation has been stopped.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.board = self.board.next_generation();
        self.generation += 1;
    }

    /// Apply at most one due tick. Returns whether the board advanced.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.running && self.ticker.poll(now) {
            self.tick();
            true
        } else {
            false
        }
    }

    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.until_due(now)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
