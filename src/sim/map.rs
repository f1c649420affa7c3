//! Character-grid board loading
//!
//! A board is an ordered list of equal-length rows over a closed alphabet:
//! `X` wall, `b`/`o`/`p`/`r` pursuer spawn (the letter only picks the
//! color), `P` the single player spawn, space a pellet, `O` walkable filler
//! with no pellet. Parsing is strict: a malformed layout is a load-time
//! error, never a silent default.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::{Entity, Tint};
use crate::consts::TILE_SIZE;

/// Pellet marker geometry: a 4x4 box inset 14 px into its tile
const PELLET_SIZE: i32 = 4;
const PELLET_INSET: i32 = 14;

/// The reference board, 21 rows by 19 columns
const REFERENCE_ROWS: [&str; 21] = [
    "XXXXXXXXXXXXXXXXXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X                 X",
    "X XX X XXXXX X XX X",
    "X    X       X    X",
    "XXXX XXXX XXXX XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXrXX X XXXX",
    "O       bpo       O",
    "XXXX X XXXXX X XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXXXX X XXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X  X     P     X  X",
    "XX X X XXXXX X X XX",
    "X    X   X   X    X",
    "X XXXXXX X XXXXXX X",
    "X                 X",
    "XXXXXXXXXXXXXXXXXXX",
];

/// Errors raised while validating a board definition
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map grid is empty")]
    EmptyGrid,
    #[error("row {row} is {len} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("map defines no player spawn")]
    MissingPlayer,
    #[error("duplicate player spawn at row {row}, column {col}")]
    DuplicatePlayer { row: usize, col: usize },
    #[error("unknown tile {tile:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, tile: char },
    #[error("malformed layout JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A board definition: the tile grid plus per-board movement rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapLayout {
    /// One string per row, all the same length
    pub rows: Vec<String>,
    /// Rows (in tiles) where a horizontally moving pursuer is forced to
    /// turn upward, modeling the junction in the central corridor
    #[serde(default)]
    pub forced_turn_rows: Vec<i32>,
}

impl Default for MapLayout {
    fn default() -> Self {
        Self {
            rows: REFERENCE_ROWS.iter().map(|row| row.to_string()).collect(),
            forced_turn_rows: vec![9],
        }
    }
}

impl MapLayout {
    /// Parse a layout from its JSON form
    pub fn from_json(text: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn row_count(&self) -> i32 {
        self.rows.len() as i32
    }

    pub fn column_count(&self) -> i32 {
        self.rows.first().map_or(0, |row| row.chars().count() as i32)
    }

    /// Board width in pixels
    pub fn board_width(&self) -> i32 {
        self.column_count() * TILE_SIZE
    }

    /// Board height in pixels
    pub fn board_height(&self) -> i32 {
        self.row_count() * TILE_SIZE
    }

    /// Instantiate the board's entity sets.
    ///
    /// Fails fast on a ragged grid, an unknown tile character, or anything
    /// other than exactly one player spawn.
    pub fn load(&self) -> Result<LoadedMap, MapError> {
        let expected = self.rows.first().map_or(0, |row| row.chars().count());
        if expected == 0 {
            return Err(MapError::EmptyGrid);
        }

        let tile = IVec2::splat(TILE_SIZE);
        let mut walls = Vec::new();
        let mut pellets = Vec::new();
        let mut pursuers = Vec::new();
        let mut player = None;

        for (row, line) in self.rows.iter().enumerate() {
            let len = line.chars().count();
            if len != expected {
                return Err(MapError::RaggedRow { row, len, expected });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = IVec2::new(col as i32 * TILE_SIZE, row as i32 * TILE_SIZE);
                match ch {
                    'X' => walls.push(Entity::new(pos, tile)),
                    'b' => pursuers.push(Entity::with_tint(pos, tile, Tint::Blue)),
                    'o' => pursuers.push(Entity::with_tint(pos, tile, Tint::Orange)),
                    'p' => pursuers.push(Entity::with_tint(pos, tile, Tint::Pink)),
                    'r' => pursuers.push(Entity::with_tint(pos, tile, Tint::Red)),
                    'P' => {
                        if player.is_some() {
                            return Err(MapError::DuplicatePlayer { row, col });
                        }
                        player = Some(Entity::new(pos, tile));
                    }
                    ' ' => pellets.push(Entity::new(
                        pos + IVec2::splat(PELLET_INSET),
                        IVec2::splat(PELLET_SIZE),
                    )),
                    'O' => {}
                    other => {
                        return Err(MapError::UnknownTile {
                            row,
                            col,
                            tile: other,
                        });
                    }
                }
            }
        }

        let player = player.ok_or(MapError::MissingPlayer)?;
        Ok(LoadedMap {
            walls,
            pellets,
            pursuers,
            player,
        })
    }
}

/// Entity sets instantiated from a [`MapLayout`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadedMap {
    pub walls: Vec<Entity>,
    pub pellets: Vec<Entity>,
    pub pursuers: Vec<Entity>,
    pub player: Entity,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(rows: &[&str]) -> MapLayout {
        MapLayout {
            rows: rows.iter().map(|row| row.to_string()).collect(),
            forced_turn_rows: Vec::new(),
        }
    }

    #[test]
    fn test_reference_board_loads() {
        let map = MapLayout::default().load().unwrap();

        assert_eq!(map.pursuers.len(), 4);
        assert_eq!(map.player.pos, IVec2::new(9 * TILE_SIZE, 15 * TILE_SIZE));
        // Spot-check a corner wall and a pellet marker
        assert_eq!(map.walls[0].pos, IVec2::ZERO);
        assert!(map.pellets.iter().all(|p| p.size == IVec2::splat(4)));
    }

    #[test]
    fn test_reference_board_dimensions() {
        let layout = MapLayout::default();
        assert_eq!(layout.row_count(), 21);
        assert_eq!(layout.column_count(), 19);
        assert_eq!(layout.board_width(), 19 * TILE_SIZE);
        assert_eq!(layout.board_height(), 21 * TILE_SIZE);
    }

    #[test]
    fn test_pellet_inset_geometry() {
        let map = layout(&["XXX", "X P", "XXX"]).load().unwrap();
        assert_eq!(map.pellets.len(), 1);
        assert_eq!(
            map.pellets[0].pos,
            IVec2::new(TILE_SIZE + 14, TILE_SIZE + 14)
        );
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let err = layout(&["XXX", "XX", "XXX"]).load().unwrap_err();
        assert!(matches!(
            err,
            MapError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert!(matches!(layout(&[]).load(), Err(MapError::EmptyGrid)));
        assert!(matches!(layout(&["", ""]).load(), Err(MapError::EmptyGrid)));
    }

    #[test]
    fn test_missing_player_rejected() {
        let err = layout(&["XXX", "X X", "XXX"]).load().unwrap_err();
        assert!(matches!(err, MapError::MissingPlayer));
    }

    #[test]
    fn test_duplicate_player_rejected() {
        let err = layout(&["XXXX", "XPPX", "XXXX"]).load().unwrap_err();
        assert!(matches!(err, MapError::DuplicatePlayer { row: 1, col: 2 }));
    }

    #[test]
    fn test_unknown_tile_rejected() {
        let err = layout(&["XXX", "XPZ", "XXX"]).load().unwrap_err();
        assert!(matches!(
            err,
            MapError::UnknownTile {
                row: 1,
                col: 2,
                tile: 'Z'
            }
        ));
    }

    #[test]
    fn test_layout_from_json() {
        let text = r#"{
            "rows": ["XXX", "XPX", "XXX"],
            "forced_turn_rows": [1]
        }"#;
        let layout = MapLayout::from_json(text).unwrap();
        assert_eq!(layout.forced_turn_rows, vec![1]);
        assert!(layout.load().is_ok());

        // forced_turn_rows may be omitted
        let bare = MapLayout::from_json(r#"{"rows": ["XP"]}"#).unwrap();
        assert!(bare.forced_turn_rows.is_empty());

        assert!(MapLayout::from_json("not json").is_err());
    }
}
