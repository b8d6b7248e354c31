//! The play field: placed tiles indexed by hex coordinate.
//!
//! This module contains:
//! - `BoardTile`: A tile fixed at a coordinate
//! - `Board`: The sparse, unbounded grid of placed tiles
//! - Neighbor queries used by scoring and placement validation
//! - JSON-friendly conversion for serialization across the wasm boundary

use crate::game::GameError;
use crate::hex::{Direction, HexCoordinate};
use crate::tile::{Tile, TileEdges};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A tile that has been placed on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTile {
    /// The placed tile
    pub tile: Tile,
    /// Where it sits
    pub coordinate: HexCoordinate,
}

/// The play field. Sparse and unbounded: any zero-sum coordinate is a
/// legal cell, and each cell holds at most one tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Placed tiles indexed by coordinate
    pub tiles: HashMap<HexCoordinate, BoardTile>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            tiles: HashMap::new(),
        }
    }

    // ==================== Query Methods ====================

    /// Whether a tile can be placed at this coordinate
    pub fn can_place(&self, coordinate: &HexCoordinate) -> bool {
        !self.tiles.contains_key(coordinate)
    }

    /// The tile at a coordinate, if any
    pub fn get(&self, coordinate: &HexCoordinate) -> Option<&BoardTile> {
        self.tiles.get(coordinate)
    }

    /// Whether a coordinate is occupied
    pub fn has(&self, coordinate: &HexCoordinate) -> bool {
        self.tiles.contains_key(coordinate)
    }

    /// Number of placed tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no tile has been placed yet
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All placed tiles, in no particular order
    pub fn get_all(&self) -> Vec<&BoardTile> {
        self.tiles.values().collect()
    }

    /// The occupied neighbors of a coordinate, paired with the direction
    /// from the coordinate to each of them, in direction-table order
    pub fn neighbor_tiles(&self, coordinate: &HexCoordinate) -> Vec<(Direction, &BoardTile)> {
        coordinate
            .neighbors()
            .into_iter()
            .filter_map(|(direction, neighbor)| {
                self.tiles.get(&neighbor).map(|tile| (direction, tile))
            })
            .collect()
    }

    // ==================== Mutation Methods ====================

    /// Place a tile at a coordinate.
    ///
    /// Fails without modifying the board when the coordinate is occupied.
    pub fn place(&mut self, tile: Tile, coordinate: HexCoordinate) -> Result<(), GameError> {
        if self.tiles.contains_key(&coordinate) {
            return Err(GameError::PositionOccupied(coordinate.key()));
        }
        self.tiles.insert(coordinate, BoardTile { tile, coordinate });
        Ok(())
    }

    /// Remove every tile from the board
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    // ==================== JSON Conversion ====================

    /// Convert to a JSON-friendly representation.
    ///
    /// `serde_json` cannot key objects on struct coordinates, so the map
    /// is flattened into a list with the coordinate inlined per tile.
    pub fn to_json_friendly(&self) -> BoardJson {
        let mut tiles: Vec<BoardTileJson> = self
            .tiles
            .values()
            .map(|board_tile| BoardTileJson {
                q: board_tile.coordinate.q,
                r: board_tile.coordinate.r,
                s: board_tile.coordinate.s(),
                id: board_tile.tile.id.clone(),
                edges: board_tile.tile.edges,
            })
            .collect();
        tiles.sort_by(|a, b| (a.q, a.r).cmp(&(b.q, b.r)));
        BoardJson { tiles }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON-friendly board representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardJson {
    pub tiles: Vec<BoardTileJson>,
}

/// JSON-friendly placed tile with its coordinate inlined
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardTileJson {
    pub q: i32,
    pub r: i32,
    pub s: i32,
    pub id: String,
    pub edges: TileEdges,
}
