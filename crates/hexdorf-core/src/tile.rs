//! Tiles and their edge terrains.
//!
//! A tile carries one terrain per edge. Edges are addressed by the six
//! `Direction`s, and rotation shifts every terrain one edge over while the
//! tile keeps its identity.

use crate::hex::Direction;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Terrain type carried on a tile edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Tree,
    House,
    Water,
    Pasture,
    Rail,
    Field,
}

impl Terrain {
    /// All terrain types
    pub const ALL: [Terrain; 6] = [
        Terrain::Tree,
        Terrain::House,
        Terrain::Water,
        Terrain::Pasture,
        Terrain::Rail,
        Terrain::Field,
    ];

    /// Single-letter code used by the text renderer
    pub fn letter(&self) -> char {
        match self {
            Terrain::Tree => 'T',
            Terrain::House => 'H',
            Terrain::Water => 'W',
            Terrain::Pasture => 'P',
            Terrain::Rail => 'R',
            Terrain::Field => 'F',
        }
    }

    /// Pick a uniformly random terrain
    pub fn random() -> Terrain {
        Self::random_with_rng(&mut rand::thread_rng())
    }

    /// Pick a uniformly random terrain using the provided RNG
    pub fn random_with_rng<R: Rng>(rng: &mut R) -> Terrain {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// The six edge terrains of a tile, one per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileEdges {
    pub north: Terrain,
    pub north_east: Terrain,
    pub south_east: Terrain,
    pub south: Terrain,
    pub south_west: Terrain,
    pub north_west: Terrain,
}

impl TileEdges {
    /// Create edges with the same terrain on all six sides
    pub fn uniform(terrain: Terrain) -> Self {
        Self {
            north: terrain,
            north_east: terrain,
            south_east: terrain,
            south: terrain,
            south_west: terrain,
            north_west: terrain,
        }
    }

    /// Create edges with an independently random terrain on each side
    pub fn random() -> Self {
        Self::random_with_rng(&mut rand::thread_rng())
    }

    /// Create random edges using the provided RNG
    pub fn random_with_rng<R: Rng>(rng: &mut R) -> Self {
        Self {
            north: Terrain::random_with_rng(rng),
            north_east: Terrain::random_with_rng(rng),
            south_east: Terrain::random_with_rng(rng),
            south: Terrain::random_with_rng(rng),
            south_west: Terrain::random_with_rng(rng),
            north_west: Terrain::random_with_rng(rng),
        }
    }

    /// The terrain on a specific edge
    pub fn terrain(&self, direction: Direction) -> Terrain {
        match direction {
            Direction::North => self.north,
            Direction::NorthEast => self.north_east,
            Direction::SouthEast => self.south_east,
            Direction::South => self.south,
            Direction::SouthWest => self.south_west,
            Direction::NorthWest => self.north_west,
        }
    }

    /// Edges rotated one step clockwise.
    ///
    /// Each terrain moves to the next edge clockwise, so the new north edge
    /// carries what the north-west edge held before.
    pub fn rotated_clockwise(&self) -> Self {
        Self {
            north: self.north_west,
            north_east: self.north,
            south_east: self.north_east,
            south: self.south_east,
            south_west: self.south,
            north_west: self.south_west,
        }
    }

    /// Edges rotated one step counterclockwise (inverse of clockwise)
    pub fn rotated_counterclockwise(&self) -> Self {
        Self {
            north: self.north_east,
            north_east: self.south_east,
            south_east: self.south,
            south: self.south_west,
            south_west: self.north_west,
            north_west: self.north,
        }
    }
}

/// A placeable tile: a stable identity plus its current edge terrains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Identifier, stable across rotations
    pub id: String,
    /// Current edge terrains
    pub edges: TileEdges,
}

impl Tile {
    /// Create a tile with the given id and edges
    pub fn new(id: impl Into<String>, edges: TileEdges) -> Self {
        Self {
            id: id.into(),
            edges,
        }
    }

    /// Create a tile with random edges
    pub fn random(id: impl Into<String>) -> Self {
        Self::random_with_rng(id, &mut rand::thread_rng())
    }

    /// Create a tile with random edges using the provided RNG
    pub fn random_with_rng<R: Rng>(id: impl Into<String>, rng: &mut R) -> Self {
        Self::new(id, TileEdges::random_with_rng(rng))
    }

    /// The terrain on a specific edge
    pub fn terrain(&self, direction: Direction) -> Terrain {
        self.edges.terrain(direction)
    }

    /// Rotate the tile one step clockwise in place
    pub fn rotate_clockwise(&mut self) {
        self.edges = self.edges.rotated_clockwise();
    }

    /// Rotate the tile one step counterclockwise in place
    pub fn rotate_counterclockwise(&mut self) {
        self.edges = self.edges.rotated_counterclockwise();
    }
}
