//! Moving and static game objects
//!
//! Everything on the board is an [`Entity`]: an axis-aligned box with a
//! facing direction and a velocity derived from it. Movement is
//! all-or-nothing: a step either lands clear of every wall and commits, or
//! the position, heading and velocity all roll back to their previous
//! values. The same rule serves the player (on key input) and the pursuers
//! (on their own behavior decisions).

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{self, Aabb};
use crate::consts::STEP_SIZE;

/// Facing / travel direction of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The four directions in a fixed order, for uniform sampling
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Velocity of one step of the given magnitude in this direction.
    /// Always axis-aligned, never diagonal.
    pub fn velocity(self, step: i32) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -step),
            Direction::Down => IVec2::new(0, step),
            Direction::Left => IVec2::new(-step, 0),
            Direction::Right => IVec2::new(step, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Cosmetic color tag for pursuers. Never consulted by movement or
/// collision logic; exposed so a renderer can pick a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    Blue,
    Orange,
    Pink,
    Red,
}

/// An axis-aligned box on the board: wall, pellet, pursuer or player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: IVec2,
    pub size: IVec2,
    /// Spawn position, kept for resets
    pub origin: IVec2,
    pub dir: Direction,
    pub vel: IVec2,
    /// Renderer hint for pursuers
    pub tint: Option<Tint>,
}

impl Entity {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self {
            pos,
            size,
            origin: pos,
            dir: Direction::Up,
            vel: IVec2::ZERO,
            tint: None,
        }
    }

    pub fn with_tint(pos: IVec2, size: IVec2, tint: Tint) -> Self {
        Self {
            tint: Some(tint),
            ..Self::new(pos, size)
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Change heading through the wall-checked movement rule.
    ///
    /// Applies a full step in `dir` and keeps it only if the resulting box
    /// clears every wall; otherwise position, direction and velocity all
    /// revert to their pre-call values. Returns whether the turn committed.
    pub fn set_direction(&mut self, dir: Direction, walls: &[Entity]) -> bool {
        let prev_dir = self.dir;
        let prev_vel = self.vel;
        self.dir = dir;
        self.vel = dir.velocity(STEP_SIZE);
        self.pos += self.vel;
        if collision::hits_any(self.aabb(), walls) {
            self.pos -= self.vel;
            self.dir = prev_dir;
            self.vel = prev_vel;
            return false;
        }
        true
    }

    /// Apply the current velocity for one tick, with no wall check
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Undo the step applied by [`Entity::advance`]
    pub fn retreat(&mut self) {
        self.pos -= self.vel;
    }

    /// Snap back to the spawn position. Direction and velocity are left
    /// alone; callers zero the player's velocity themselves.
    pub fn reset(&mut self) {
        self.pos = self.origin;
    }

    /// Zero the velocity, keeping the facing
    pub fn halt(&mut self) {
        self.vel = IVec2::ZERO;
    }
}
