use gridlife::{Board, Simulation, Ticker, DEFAULT_COLUMNS, DEFAULT_ROWS, TICK_INTERVAL};
use std::time::{Duration, Instant};

const SEED: u64 = 42;

fn alive_cells(board: &Board) -> Vec<(usize, usize)> {
    let mut cells = vec![];
    for r in 0..board.rows() {
        for c in 0..board.columns() {
            if board.alive(r, c) {
                cells.push((r, c));
            }
        }
    }
    cells
}

#[test]
fn starts_stopped_with_a_blank_board() {
    let sim = Simulation::new();
    assert!(!sim.running());
    assert_eq!(sim.generation(), 0);
    assert_eq!(*sim.board(), Board::blank(DEFAULT_ROWS, DEFAULT_COLUMNS));
}

#[test]
fn toggle_cell_edits_the_board_while_stopped() {
    let mut sim = Simulation::new();
    sim.toggle_cell(1, 1);
    assert!(sim.board().alive(1, 1));

    sim.toggle_cell(1, 1);
    assert!(!sim.board().alive(1, 1));
}

#[test]
fn toggle_cell_ignores_out_of_bounds_coordinates() {
    let mut sim = Simulation::new();
    let before = sim.board().clone();

    sim.toggle_cell(DEFAULT_ROWS, 0);
    sim.toggle_cell(0, DEFAULT_COLUMNS);
    sim.toggle_cell(usize::MAX, usize::MAX);

    assert_eq!(*sim.board(), before);
}

#[test]
fn toggle_cell_is_a_no_op_while_running() {
    let mut sim = Simulation::new();
    sim.toggle_cell(5, 5);
    sim.toggle_running(Instant::now());
    let before = sim.board().clone();

    sim.toggle_cell(7, 7);
    sim.toggle_cell(5, 5);

    assert_eq!(*sim.board(), before);
}

#[test]
fn toggle_running_twice_round_trips() {
    let mut sim = Simulation::new();
    sim.toggle_cell(3, 3);
    let before = sim.board().clone();
    let now = Instant::now();

    sim.toggle_running(now);
    assert!(sim.running());
    assert_eq!(*sim.board(), before);

    sim.toggle_running(now);
    assert!(!sim.running());
    assert_eq!(*sim.board(), before);
}

#[test]
fn reset_discards_an_in_progress_run() {
    let mut sim = Simulation::new();
    sim.toggle_cell(1, 0);
    sim.toggle_cell(1, 1);
    sim.toggle_cell(1, 2);
    sim.toggle_running(Instant::now());
    sim.tick();

    sim.reset();
    assert!(!sim.running());
    assert_eq!(sim.generation(), 0);
    assert_eq!(*sim.board(), Board::blank(DEFAULT_ROWS, DEFAULT_COLUMNS));
}

#[test]
fn tick_is_ignored_while_stopped() {
    let mut sim = Simulation::new();
    sim.toggle_cell(1, 0);
    sim.toggle_cell(1, 1);
    sim.toggle_cell(1, 2);
    let before = sim.board().clone();

    sim.tick();
    assert_eq!(*sim.board(), before);
    assert_eq!(sim.generation(), 0);
}

#[test]
fn blinker_seed_round_trips_through_two_ticks() {
    let mut sim = Simulation::new();
    sim.toggle_cell(1, 0);
    sim.toggle_cell(1, 1);
    sim.toggle_cell(1, 2);
    sim.toggle_running(Instant::now());

    sim.tick();
    assert_eq!(alive_cells(sim.board()), vec![(0, 1), (1, 1), (2, 1)]);

    sim.tick();
    assert_eq!(alive_cells(sim.board()), vec![(1, 0), (1, 1), (1, 2)]);
    assert_eq!(sim.generation(), 2);
}

#[test]
fn poll_fires_once_per_elapsed_interval() {
    let mut sim = Simulation::new();
    sim.toggle_cell(1, 0);
    sim.toggle_cell(1, 1);
    sim.toggle_cell(1, 2);
    let t0 = Instant::now();
    sim.toggle_running(t0);

    assert!(!sim.poll(t0 + Duration::from_millis(100)));
    assert_eq!(sim.generation(), 0);

    assert!(sim.poll(t0 + TICK_INTERVAL));
    assert_eq!(sim.generation(), 1);

    // Just fired; the next tick is a full interval away.
    assert!(!sim.poll(t0 + TICK_INTERVAL));
    assert!(sim.poll(t0 + TICK_INTERVAL * 2));
    assert_eq!(sim.generation(), 2);
}

#[test]
fn poll_never_fires_while_stopped() {
    let mut sim = Simulation::new();
    sim.toggle_cell(5, 5);
    let t0 = Instant::now();

    assert!(!sim.poll(t0 + TICK_INTERVAL * 10));
    assert_eq!(sim.generation(), 0);
}

#[test]
fn stopping_cancels_the_pending_tick() {
    let mut sim = Simulation::new();
    sim.toggle_cell(1, 0);
    sim.toggle_cell(1, 1);
    sim.toggle_cell(1, 2);
    let before = sim.board().clone();
    let t0 = Instant::now();

    sim.toggle_running(t0);
    sim.toggle_running(t0 + Duration::from_millis(100));

    assert!(!sim.poll(t0 + TICK_INTERVAL * 2));
    assert_eq!(*sim.board(), before);
    assert_eq!(sim.generation(), 0);
}

#[test]
fn randomize_stops_the_run_and_is_reproducible() {
    let mut a = Simulation::new();
    a.toggle_running(Instant::now());
    a.randomize(Some(SEED));

    let mut b = Simulation::new();
    b.randomize(Some(SEED));

    assert!(!a.running());
    assert_eq!(a.generation(), 0);
    assert_eq!(a.board(), b.board());
    assert!(a.board().population() > 0);
}

#[test]
fn until_next_tick_reports_the_remaining_wait() {
    let mut sim = Simulation::new();
    let t0 = Instant::now();
    assert_eq!(sim.until_next_tick(t0), None);

    sim.toggle_running(t0);
    assert_eq!(
        sim.until_next_tick(t0 + Duration::from_millis(100)),
        Some(TICK_INTERVAL - Duration::from_millis(100))
    );

    sim.toggle_running(t0 + Duration::from_millis(200));
    assert_eq!(sim.until_next_tick(t0 + Duration::from_millis(200)), None);
}

#[test]
fn disarmed_ticker_never_fires() {
    let mut ticker = Ticker::new(TICK_INTERVAL);
    let t0 = Instant::now();
    assert!(!ticker.poll(t0 + TICK_INTERVAL * 5));

    ticker.arm(t0);
    assert!(!ticker.poll(t0));
    assert!(ticker.poll(t0 + TICK_INTERVAL));

    ticker.disarm();
    assert!(!ticker.poll(t0 + TICK_INTERVAL * 5));
    assert_eq!(ticker.until_due(t0), None);
}
