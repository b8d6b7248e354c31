//! Hex coordinate system using cube coordinates (q, r, s).
//!
//! This module provides the foundational types for the hex play field:
//! - `HexCoordinate`: Identifies individual cells, with q + r + s = 0
//! - `Direction`: The six sides of a cell and their coordinate deltas
//! - Pixel projection for the rendering layer (`to_pixel`, `from_pixel`,
//!   `hex_corners`)
//!
//! Coordinates are stored axially (q, r) with s derived, so a constructed
//! value can never violate the zero-sum invariant.

use crate::game::GameError;
use serde::{Deserialize, Serialize};

/// Default hex radius in pixels, shared with the rendering layer
pub const DEFAULT_HEX_SIZE: f64 = 40.0;

/// Direction from a cell to one of its six neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Top edge
    North,
    /// Top-right edge
    NorthEast,
    /// Bottom-right edge
    SouthEast,
    /// Bottom edge
    South,
    /// Bottom-left edge
    SouthWest,
    /// Top-left edge
    NorthWest,
}

impl Direction {
    /// All directions in clockwise order starting from North
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// The direction pointing the opposite way
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

/// Cube coordinate for the hex grid.
///
/// Only `q` and `r` are stored; the third component satisfies q + r + s = 0
/// and is derived, so the invariant holds for every value.
///
/// In this grid:
/// - `q` increases going south
/// - `r` increases going south-east
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct HexCoordinate {
    /// Row (increases going south)
    pub q: i32,
    /// Column (increases going south-east)
    pub r: i32,
}

impl HexCoordinate {
    /// The board origin (0, 0, 0)
    pub const ORIGIN: HexCoordinate = HexCoordinate::from_axial(0, 0);

    /// Create a coordinate from all three cube components.
    ///
    /// Fails when the components do not sum to zero.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, GameError> {
        if q + r + s != 0 {
            return Err(GameError::InvalidCoordinate { q, r, s });
        }
        Ok(Self { q, r })
    }

    /// Create a coordinate from its axial components (s is implied)
    pub const fn from_axial(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The derived third component (s = -q - r)
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Canonical "q,r,s" key, the contract for map-free serialization
    pub fn key(&self) -> String {
        format!("{},{},{}", self.q, self.r, self.s())
    }

    /// Get the neighbor in a specific direction
    pub fn neighbor(&self, direction: Direction) -> HexCoordinate {
        match direction {
            Direction::North => HexCoordinate::from_axial(self.q - 1, self.r),
            Direction::NorthEast => HexCoordinate::from_axial(self.q - 1, self.r + 1),
            Direction::SouthEast => HexCoordinate::from_axial(self.q, self.r + 1),
            Direction::South => HexCoordinate::from_axial(self.q + 1, self.r),
            Direction::SouthWest => HexCoordinate::from_axial(self.q + 1, self.r - 1),
            Direction::NorthWest => HexCoordinate::from_axial(self.q, self.r - 1),
        }
    }

    /// The six neighboring cells paired with their directions, in table order
    pub fn neighbors(&self) -> [(Direction, HexCoordinate); 6] {
        Direction::ALL.map(|direction| (direction, self.neighbor(direction)))
    }

    /// Convert to pixel coordinates (center of the hex).
    ///
    /// Flat-top orientation adjusted for this grid's axes: q runs south and
    /// r south-east, so r carries the horizontal component.
    pub fn to_pixel(&self, size: f64) -> (f64, f64) {
        let sqrt3 = 3.0_f64.sqrt();
        let x = size * (3.0 / 2.0) * self.r as f64;
        let y = size * (sqrt3 / 2.0 * self.r as f64 + sqrt3 * self.q as f64);
        (x, y)
    }

    /// Convert from pixel coordinates to the containing hex
    pub fn from_pixel(x: f64, y: f64, size: f64) -> Self {
        let r = (2.0 / 3.0 * x) / size;
        let q = (-1.0 / 3.0 * x + 3.0_f64.sqrt() / 3.0 * y) / size;
        Self::cube_round(q, r, -q - r)
    }

    /// Round fractional cube coordinates to the nearest cell.
    ///
    /// Rounds each component, then recomputes the one with the largest
    /// rounding error from the other two so the zero-sum invariant survives.
    fn cube_round(frac_q: f64, frac_r: f64, frac_s: f64) -> Self {
        let mut q = frac_q.round();
        let mut r = frac_r.round();
        let s = frac_s.round();

        let q_diff = (q - frac_q).abs();
        let r_diff = (r - frac_r).abs();
        let s_diff = (s - frac_s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        }

        Self::from_axial(q as i32, r as i32)
    }
}

/// The six corner points of a flat-top hex centered at (x, y).
///
/// Corners sit at 0, 60, 120, 180, 240 and 300 degrees.
pub fn hex_corners(x: f64, y: f64, size: f64) -> [(f64, f64); 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64).to_radians();
        (x + size * angle.cos(), y + size * angle.sin())
    })
}
