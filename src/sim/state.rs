//! Game state and its lifecycle
//!
//! Everything that must survive between ticks lives here, including the
//! RNG, so two states built from the same seed replay identically tick for
//! tick. Only [`super::tick::tick`] and the lifecycle methods below mutate
//! a [`GameState`].

use log::info;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Direction, Entity};
use super::map::{LoadedMap, MapError, MapLayout};
use crate::consts::START_LIVES;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation is running
    Playing,
    /// Run ended; the next input restarts
    GameOver,
}

/// The transient high-value pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bonus {
    pub entity: Entity,
    /// Tick on which the bonus appeared, for expiry
    pub spawn_tick: u64,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG for pursuer redirects and bonus spawning
    pub rng: Pcg32,
    /// Board definition the entity sets are built from
    pub layout: MapLayout,
    /// Simulation tick counter; also the clock for bonus expiry
    pub time_ticks: u64,
    pub score: u64,
    pub lives: u8,
    pub phase: GamePhase,
    pub walls: Vec<Entity>,
    pub pellets: Vec<Entity>,
    pub pursuers: Vec<Entity>,
    pub player: Entity,
    pub bonus: Option<Bonus>,
    /// Pristine parse of `layout`, cloned on every reload
    template: LoadedMap,
}

impl GameState {
    /// Create a state on the built-in reference board
    pub fn new(seed: u64) -> Self {
        Self::from_layout(MapLayout::default(), seed).expect("reference layout is valid")
    }

    /// Create a state on a custom board
    pub fn from_layout(layout: MapLayout, seed: u64) -> Result<Self, MapError> {
        let template = layout.load()?;
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            layout,
            time_ticks: 0,
            score: 0,
            lives: START_LIVES,
            phase: GamePhase::Playing,
            walls: template.walls.clone(),
            pellets: template.pellets.clone(),
            pursuers: template.pursuers.clone(),
            player: template.player,
            bonus: None,
            template,
        };
        state.launch_pursuers();
        Ok(state)
    }

    /// Rebuild every entity set from the pristine board definition
    pub fn reload_map(&mut self) {
        self.walls = self.template.walls.clone();
        self.pellets = self.template.pellets.clone();
        self.pursuers = self.template.pursuers.clone();
        self.player = self.template.player;
    }

    /// Send the player and every pursuer back to their spawn tiles. The
    /// player stops dead; pursuers set off again on fresh random headings.
    pub fn reset_positions(&mut self) {
        self.player.reset();
        self.player.halt();
        for pursuer in &mut self.pursuers {
            pursuer.reset();
        }
        self.launch_pursuers();
    }

    /// Leave GameOver: rebuild the board and zero the run counters
    pub fn restart(&mut self) {
        info!("restarting after game over at score {}", self.score);
        self.reload_map();
        self.reset_positions();
        self.score = 0;
        self.lives = START_LIVES;
        self.bonus = None;
        self.phase = GamePhase::Playing;
    }

    /// Give every pursuer a fresh random heading through the wall-checked
    /// movement rule. A blocked pick leaves that pursuer stationary.
    fn launch_pursuers(&mut self) {
        for pursuer in &mut self.pursuers {
            let dir = Direction::ALL[self.rng.random_range(0..4)];
            pursuer.set_direction(dir, &self.walls);
        }
    }
}
