//! Maze Muncher - a grid-maze chase game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//!
//! Rendering, windowing and input-device handling live outside this crate.
//! A frontend translates key events into [`sim::TickInput`] values, drives
//! [`sim::tick`] once per [`consts::TICK_MS`] milliseconds, and reads the
//! public fields of [`sim::GameState`] to draw each frame.

pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Simulation tick interval in milliseconds (20 Hz)
    pub const TICK_MS: u64 = 50;

    /// Edge length of one square tile in pixels
    pub const TILE_SIZE: i32 = 32;
    /// Distance an actor covers per tick; a full tile crossing takes 4 ticks
    pub const STEP_SIZE: i32 = TILE_SIZE / 4;

    /// Points per pellet
    pub const PELLET_SCORE: u64 = 10;
    /// Points for the bonus item
    pub const BONUS_SCORE: u64 = 100;
    /// Bonus lifetime before it despawns, in milliseconds
    pub const BONUS_LIFETIME_MS: u64 = 5000;
    /// Per-tick bonus spawn chance is 1 in this many
    pub const BONUS_SPAWN_ODDS: u32 = 200;
    /// Bound on random placement probes for one bonus spawn
    pub const BONUS_PLACEMENT_ATTEMPTS: u32 = 128;

    /// Lives at the start of a run
    pub const START_LIVES: u8 = 3;
}
