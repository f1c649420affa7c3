//! Maze Muncher headless driver
//!
//! Runs the simulation at its fixed 20 Hz cadence with a synthesized
//! attract-mode input stream, logging score and life events. A real
//! frontend embeds the `sim` module directly; this binary exercises the
//! loop end to end from the command line.
//!
//! Usage: `maze-muncher [seed]` (RUST_LOG=debug for per-event output)

use std::thread;
use std::time::{Duration, Instant};

use log::info;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use maze_muncher::consts::TICK_MS;
use maze_muncher::sim::{Direction, GamePhase, GameState, TickInput, tick};

/// Attract-mode runs end after ten minutes even if the pilot survives
const DEMO_TICK_LIMIT: u64 = 10 * 60 * 1000 / TICK_MS;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let mut state = GameState::new(seed);
    // The demo pilot rolls on its own stream so the simulation's RNG
    // stays a pure function of the seed and tick count
    let mut pilot = Pcg32::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);

    info!("starting attract-mode run, seed {seed}");

    let tick_len = Duration::from_millis(TICK_MS);
    let mut next_tick = Instant::now();
    while state.phase == GamePhase::Playing && state.time_ticks < DEMO_TICK_LIMIT {
        let input = if pilot.random_ratio(1, 8) {
            TickInput {
                direction: Some(Direction::ALL[pilot.random_range(0..4)]),
                restart: false,
            }
        } else {
            TickInput::default()
        };
        tick(&mut state, &input);

        next_tick += tick_len;
        if let Some(wait) = next_tick.checked_duration_since(Instant::now()) {
            thread::sleep(wait);
        }
    }

    println!(
        "run over: score {} with {} lives left after {} ticks",
        state.score, state.lives, state.time_ticks
    );
}
