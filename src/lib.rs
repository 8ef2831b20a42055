mod board;
mod controller;
mod gui;

pub use board::Board;
pub use controller::{Simulation, Ticker};
pub use gui::{App, Config};

use std::time::Duration;

pub const DEFAULT_ROWS: usize = 42;
pub const DEFAULT_COLUMNS: usize = 42;

/// Cadence of automatic generation advances while the simulation runs.
pub const TICK_INTERVAL: Duration = Duration::from_millis(300);
