//! Core game state and rules.
//!
//! This module contains the main `Game` struct and all turn logic: drawing
//! from the tile queue, placing tiles, scoring edge matches and perfect
//! placements, and granting bonus turns.

use crate::board::{Board, BoardJson};
use crate::hex::HexCoordinate;
use crate::tile::{Terrain, Tile, TileEdges};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

/// Errors that can occur during game operations
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Invalid coordinate {q},{r},{s}: q + r + s must be 0")]
    InvalidCoordinate { q: i32, r: i32, s: i32 },
    #[error("Position {0} is already occupied")]
    PositionOccupied(String),
    #[error("No tiles remaining in the queue")]
    EmptyQueue,
    #[error("User ID cannot be empty")]
    EmptyUserId,
    #[error("No active game to end")]
    NoActiveGame,
}

/// Tunable rule set for a game.
///
/// All quantities are unsigned, so a rule set can never demand negative
/// points or turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Tiles in the starting queue (one placement per tile)
    pub initial_turns: u32,
    /// Points per matching edge
    pub points_per_match: u32,
    /// Bonus points per tile that becomes perfect
    pub points_per_perfect: u32,
    /// Bonus tiles appended to the queue per perfect tile
    pub turns_per_perfect: u32,
    /// Edges for the pre-placed starting tile; random when `None`
    pub initial_tile: Option<TileEdges>,
}

impl GameRules {
    /// The standard preset: a short game opening on an all-pasture tile
    pub fn standard() -> Self {
        Self {
            initial_turns: 30,
            initial_tile: Some(TileEdges::uniform(Terrain::Pasture)),
            ..Self::default()
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            initial_turns: 40,
            points_per_match: 10,
            points_per_perfect: 60,
            turns_per_perfect: 1,
            initial_tile: None,
        }
    }
}

/// Outcome of a successful tile placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementResult {
    /// Points the placement added to the total score
    pub score_added: u32,
    /// Tiles that became perfect through this placement
    pub perfect_count: u32,
}

/// A game in progress: the board, the rules in effect, the running score
/// and the queue of tiles waiting to be placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// The play field
    pub board: Board,
    /// Rules in effect for this game
    pub rules: GameRules,
    /// Total score so far
    pub score: u32,
    /// Upcoming tiles; the front tile is the next to be placed
    pub tile_queue: VecDeque<Tile>,
    /// Bonus tiles generated so far, used to number their ids
    pub bonus_tiles_generated: u64,
}

impl Game {
    // ==================== Construction ====================

    /// Create a game from explicit parts
    pub fn new(board: Board, rules: GameRules, tile_queue: VecDeque<Tile>) -> Self {
        Self {
            board,
            rules,
            score: 0,
            tile_queue,
            bonus_tiles_generated: 0,
        }
    }

    /// Create a game from a rule set: a starting tile on the origin and a
    /// freshly generated queue
    pub fn create(rules: GameRules) -> Self {
        let mut rng = rand::thread_rng();
        Self::create_with_rng(rules, &mut rng)
    }

    /// Create a game from a rule set using the provided RNG
    pub fn create_with_rng<R: Rng>(rules: GameRules, rng: &mut R) -> Self {
        let edges = match rules.initial_tile {
            Some(edges) => edges,
            None => TileEdges::random_with_rng(rng),
        };

        let mut board = Board::new();
        // The board is empty here, so the origin placement cannot fail
        board
            .place(Tile::new("start-tile", edges), HexCoordinate::ORIGIN)
            .unwrap();

        let tile_queue = (1..=rules.initial_turns)
            .map(|i| Tile::random_with_rng(format!("tile-{}", i), rng))
            .collect();

        Self::new(board, rules, tile_queue)
    }

    /// Create a game with the standard rule preset
    pub fn standard() -> Self {
        Self::create(GameRules::standard())
    }

    /// Create a standard game using the provided RNG
    pub fn standard_with_rng<R: Rng>(rng: &mut R) -> Self {
        Self::create_with_rng(GameRules::standard(), rng)
    }

    // ==================== Query Methods ====================

    /// The next tile to be placed, if any
    pub fn peek(&self) -> Option<&Tile> {
        self.tile_queue.front()
    }

    /// Placements left before the queue runs out
    pub fn remaining_turns(&self) -> usize {
        self.tile_queue.len()
    }

    /// Whether a placement at this coordinate would connect to the board:
    /// the cell must be vacant and touch at least one placed tile.
    ///
    /// This is a UI hint. `place_tile` itself only requires vacancy, so the
    /// first tile of an empty board can open anywhere.
    pub fn is_valid_placement(&self, coordinate: &HexCoordinate) -> bool {
        if self.board.has(coordinate) {
            return false;
        }
        !self.board.neighbor_tiles(coordinate).is_empty()
    }

    /// Whether the tile at this coordinate is perfect: all six neighbors
    /// present and every edge matching the terrain facing it.
    ///
    /// Vacant coordinates are never perfect.
    pub fn is_perfect(&self, coordinate: &HexCoordinate) -> bool {
        let board_tile = match self.board.get(coordinate) {
            Some(tile) => tile,
            None => return false,
        };

        for (direction, neighbor_coord) in coordinate.neighbors() {
            let neighbor = match self.board.get(&neighbor_coord) {
                Some(tile) => tile,
                None => return false,
            };
            if board_tile.tile.terrain(direction) != neighbor.tile.terrain(direction.opposite()) {
                return false;
            }
        }
        true
    }

    // ==================== Placement ====================

    /// Place the front queue tile at a coordinate
    pub fn place_tile(&mut self, coordinate: HexCoordinate) -> Result<PlacementResult, GameError> {
        let mut rng = rand::thread_rng();
        self.place_tile_with_rng(coordinate, &mut rng)
    }

    /// Place the front queue tile at a coordinate, generating any bonus
    /// tiles with the provided RNG.
    ///
    /// On success the placement scores `points_per_match` per matching edge
    /// plus `points_per_perfect` per tile (the placed one or a neighbor)
    /// that became perfect, and appends `turns_per_perfect` bonus tiles to
    /// the queue per perfect tile. On failure nothing changes: the queue,
    /// board and score are untouched.
    pub fn place_tile_with_rng<R: Rng>(
        &mut self,
        coordinate: HexCoordinate,
        rng: &mut R,
    ) -> Result<PlacementResult, GameError> {
        if self.tile_queue.is_empty() {
            return Err(GameError::EmptyQueue);
        }
        if !self.board.can_place(&coordinate) {
            return Err(GameError::PositionOccupied(coordinate.key()));
        }

        // Both failure cases are ruled out above
        let tile = self.tile_queue.pop_front().unwrap();

        // Count matching edges against the neighbors that were already
        // placed; those same neighbors are the perfect candidates below.
        let mut matching_edges = 0u32;
        let mut existing_neighbors = Vec::new();
        for (direction, neighbor_coord) in coordinate.neighbors() {
            if let Some(neighbor) = self.board.get(&neighbor_coord) {
                existing_neighbors.push(neighbor_coord);
                if tile.terrain(direction) == neighbor.tile.terrain(direction.opposite()) {
                    matching_edges += 1;
                }
            }
        }

        self.board.place(tile, coordinate)?;

        let mut perfect_count = 0u32;
        if self.is_perfect(&coordinate) {
            perfect_count += 1;
        }
        for neighbor_coord in &existing_neighbors {
            if self.is_perfect(neighbor_coord) {
                perfect_count += 1;
            }
        }

        let score_added = matching_edges * self.rules.points_per_match
            + perfect_count * self.rules.points_per_perfect;
        self.score += score_added;

        let bonus_tiles = perfect_count * self.rules.turns_per_perfect;
        for _ in 0..bonus_tiles {
            self.bonus_tiles_generated += 1;
            self.tile_queue.push_back(Tile::random_with_rng(
                format!("bonus-{}", self.bonus_tiles_generated),
                rng,
            ));
        }

        Ok(PlacementResult {
            score_added,
            perfect_count,
        })
    }

    // ==================== Rotation ====================

    /// Rotate the front queue tile one step clockwise
    pub fn rotate_queued_tile_clockwise(&mut self) -> Result<(), GameError> {
        match self.tile_queue.front_mut() {
            Some(tile) => {
                tile.rotate_clockwise();
                Ok(())
            }
            None => Err(GameError::EmptyQueue),
        }
    }

    /// Rotate the front queue tile one step counterclockwise
    pub fn rotate_queued_tile_counterclockwise(&mut self) -> Result<(), GameError> {
        match self.tile_queue.front_mut() {
            Some(tile) => {
                tile.rotate_counterclockwise();
                Ok(())
            }
            None => Err(GameError::EmptyQueue),
        }
    }

    // ==================== JSON Conversion ====================

    /// Convert to a JSON-friendly representation
    pub fn to_json_friendly(&self) -> GameJson {
        GameJson {
            score: self.score,
            remaining_turns: self.remaining_turns(),
            rules: self.rules,
            board: self.board.to_json_friendly(),
            tile_queue: self.tile_queue.iter().cloned().collect(),
        }
    }
}

/// JSON-friendly game snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameJson {
    pub score: u32,
    pub remaining_turns: usize,
    pub rules: GameRules,
    pub board: BoardJson,
    pub tile_queue: Vec<Tile>,
}
