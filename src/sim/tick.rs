//! Fixed timestep simulation tick
//!
//! Advances the whole game by one 50 ms step: player movement, pursuer
//! behavior, contact resolution, scoring, the bonus lifecycle and the
//! board-clear reload. [`tick`] is the only entry point; a tick is one
//! atomic unit of state mutation.

use glam::IVec2;
use log::{debug, info};
use rand::Rng;

use super::collision::{self, Aabb};
use super::entity::{Direction, Entity};
use super::state::{Bonus, GamePhase, GameState};
use crate::consts::{
    BONUS_LIFETIME_MS, BONUS_PLACEMENT_ATTEMPTS, BONUS_SCORE, BONUS_SPAWN_ODDS, PELLET_SCORE,
    TICK_MS, TILE_SIZE,
};

/// Input gathered since the previous tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Directional key pressed, if any
    pub direction: Option<Direction>,
    /// A non-directional key was pressed; only meaningful in GameOver,
    /// where any input restarts the run
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        if input.direction.is_some() || input.restart {
            state.restart();
            // A directional restart key doubles as the new run's first
            // heading attempt
            if let Some(dir) = input.direction {
                state.player.set_direction(dir, &state.walls);
            }
        }
        return;
    }

    state.time_ticks += 1;

    // Queued input turns the player through the wall-checked movement
    // rule; a blocked turn leaves the current heading in force
    if let Some(dir) = input.direction {
        state.player.set_direction(dir, &state.walls);
    }

    // The player drifts on its current heading. A wall stops it in place
    // with heading and velocity kept, pressed against the wall until a
    // new direction is issued.
    state.player.advance();
    if collision::hits_any(state.player.aabb(), &state.walls) {
        state.player.retreat();
    }

    for idx in 0..state.pursuers.len() {
        drive_pursuer(state, idx);
    }

    // Pursuer contact costs exactly one life per tick, however many
    // pursuers overlap at once
    let player_box = state.player.aabb();
    if state
        .pursuers
        .iter()
        .any(|pursuer| collision::overlaps(pursuer.aabb(), player_box))
    {
        state.lives -= 1;
        if state.lives == 0 {
            info!("game over at score {}", state.score);
            state.phase = GamePhase::GameOver;
            return;
        }
        debug!("life lost, {} remaining", state.lives);
        state.reset_positions();
    }

    // Every pellet under the player this tick is consumed
    let player_box = state.player.aabb();
    let before = state.pellets.len();
    state
        .pellets
        .retain(|pellet| !collision::overlaps(player_box, pellet.aabb()));
    let eaten = before - state.pellets.len();
    state.score += eaten as u64 * PELLET_SCORE;

    update_bonus(state);

    if state.pellets.is_empty() {
        info!("board cleared at score {}", state.score);
        state.reload_map();
        state.reset_positions();
    }
}

/// One pursuer's turn: forced corridor turn, a blind step, then wall and
/// board-edge recovery with a random redirect.
fn drive_pursuer(state: &mut GameState, idx: usize) {
    let board_width = state.layout.board_width();

    // Junction rule: on a forced-turn row, horizontal traffic turns upward
    let forced = {
        let pursuer = &state.pursuers[idx];
        pursuer.dir.is_horizontal()
            && state
                .layout
                .forced_turn_rows
                .iter()
                .any(|&row| pursuer.pos.y == row * TILE_SIZE)
    };
    if forced {
        state.pursuers[idx].set_direction(Direction::Up, &state.walls);
    }

    let pursuer = &mut state.pursuers[idx];
    pursuer.advance();

    let hit_wall = collision::hits_any(pursuer.aabb(), &state.walls);
    let off_board = pursuer.pos.x <= 0 || pursuer.pos.x + pursuer.size.x >= board_width;
    if hit_wall || off_board {
        pursuer.retreat();
        // The redirect re-validates against walls; a blocked pick leaves
        // the pursuer stationary for this tick
        let dir = Direction::ALL[state.rng.random_range(0..4)];
        pursuer.set_direction(dir, &state.walls);
    }
}

/// Collect, expire or spawn the bonus item
fn update_bonus(state: &mut GameState) {
    if let Some(bonus) = state.bonus {
        if collision::overlaps(state.player.aabb(), bonus.entity.aabb()) {
            debug!("bonus collected");
            state.score += BONUS_SCORE;
            state.bonus = None;
        } else if (state.time_ticks - bonus.spawn_tick) * TICK_MS >= BONUS_LIFETIME_MS {
            debug!("bonus expired");
            state.bonus = None;
        }
    }

    // A bonus removed above can be replaced by the same tick's roll
    if state.bonus.is_none() && state.rng.random_ratio(1, BONUS_SPAWN_ODDS) {
        spawn_bonus(state);
    }
}

/// Place the bonus on a random wall-free tile. Bounded probing so a
/// degenerate all-wall board skips the spawn instead of spinning forever.
fn spawn_bonus(state: &mut GameState) {
    let tile = IVec2::splat(TILE_SIZE);
    for _ in 0..BONUS_PLACEMENT_ATTEMPTS {
        let col = state.rng.random_range(0..state.layout.column_count());
        let row = state.rng.random_range(0..state.layout.row_count());
        let pos = IVec2::new(col * TILE_SIZE, row * TILE_SIZE);
        if !collision::hits_any(Aabb::new(pos, tile), &state.walls) {
            debug!("bonus spawned at tile ({col}, {row})");
            state.bonus = Some(Bonus {
                entity: Entity::new(pos, tile),
                spawn_tick: state.time_ticks,
            });
            return;
        }
    }
    debug!("no open tile found for bonus, skipping spawn");
}
