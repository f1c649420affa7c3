//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! A frontend drives [`tick`] at the fixed rate and reads the public fields
//! of [`GameState`] (walls, pellets, pursuers, player, bonus, score, lives,
//! phase) to draw each frame.

pub mod collision;
pub mod entity;
pub mod map;
pub mod state;
pub mod tick;

pub use collision::{Aabb, overlaps};
pub use entity::{Direction, Entity, Tint};
pub use map::{LoadedMap, MapError, MapLayout};
pub use state::{Bonus, GamePhase, GameState};
pub use tick::{TickInput, tick};
