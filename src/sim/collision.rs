//! Axis-aligned collision tests
//!
//! The whole game runs on a single predicate: do two boxes overlap. The
//! inequalities are strict, so boxes that merely share an edge do not count
//! as colliding.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// An axis-aligned box in board pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Aabb {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }
}

/// True iff the interiors of `a` and `b` intersect
#[inline]
pub fn overlaps(a: Aabb, b: Aabb) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

/// True if `probe` overlaps any wall in the slice
pub fn hits_any(probe: Aabb, walls: &[Entity]) -> bool {
    walls.iter().any(|wall| overlaps(probe, wall.aabb()))
}
