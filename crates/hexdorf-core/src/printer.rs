//! Text rendering of boards onto a character canvas.
//!
//! Each tile is drawn as a 9x5 glyph showing its six edge terrains by their
//! single-letter codes. Neighboring glyphs interlock: adjacent tiles share
//! border cells, which is legal because both draw the same structural
//! character there.

use crate::board::Board;
use crate::hex::HexCoordinate;
use crate::tile::Tile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Width of a tile glyph in characters
pub const TILE_WIDTH: i32 = 9;

/// Height of a tile glyph in characters
pub const TILE_HEIGHT: i32 = 5;

/// Errors that can occur while drawing on a canvas
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum PrinterError {
    #[error("Coordinates ({x}, {y}) are out of bounds. Bounds are [{min_x}, {min_y}] to [{max_x}, {max_y}].")]
    OutOfBounds {
        x: i32,
        y: i32,
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
    },
    #[error("Cannot overwrite character \"{existing}\" with \"{replacement}\" at ({x}, {y}).")]
    CannotOverwrite {
        existing: char,
        replacement: char,
        x: i32,
        y: i32,
    },
}

/// A bounded character grid.
///
/// Cells start blank. A cell can be written once; rewriting is allowed only
/// with the same character, or over a space.
#[derive(Debug, Clone)]
pub struct Canvas {
    grid: HashMap<(i32, i32), char>,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl Canvas {
    /// Create a canvas covering the inclusive bounds
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            grid: HashMap::new(),
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Write a character at a cell.
    ///
    /// Fails when the cell is out of bounds, or already holds a different
    /// non-space character.
    pub fn set(&mut self, x: i32, y: i32, character: char) -> Result<(), PrinterError> {
        if x < self.min_x || x > self.max_x || y < self.min_y || y > self.max_y {
            return Err(PrinterError::OutOfBounds {
                x,
                y,
                min_x: self.min_x,
                min_y: self.min_y,
                max_x: self.max_x,
                max_y: self.max_y,
            });
        }

        if let Some(&existing) = self.grid.get(&(x, y)) {
            if existing != ' ' && existing != character {
                return Err(PrinterError::CannotOverwrite {
                    existing,
                    replacement: character,
                    x,
                    y,
                });
            }
        }

        self.grid.insert((x, y), character);
        Ok(())
    }

    /// The character at a cell, if one was written
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.grid.get(&(x, y)).copied()
    }
}

/// Renders the canvas row by row, padding unwritten cells with spaces.
/// A canvas never written to renders as the empty string.
impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.grid.is_empty() {
            return Ok(());
        }
        for y in self.min_y..=self.max_y {
            if y > self.min_y {
                writeln!(f)?;
            }
            for x in self.min_x..=self.max_x {
                write!(f, "{}", self.get(x, y).unwrap_or(' '))?;
            }
        }
        Ok(())
    }
}

/// Draw a tile glyph with its top-left corner at (x, y).
///
/// The glyph layout, with letters marking where edge terrains go:
///
/// ```text
///   012345678
/// 0    _ _
/// 1  /  N  \
/// 2 /W     E\
/// 3 \w     e/
/// 4  \ _S_ /
/// ```
///
/// N: north, E: north-east, e: south-east, S: south, w: south-west,
/// W: north-west.
pub fn draw_tile(canvas: &mut Canvas, tile: &Tile, x: i32, y: i32) -> Result<(), PrinterError> {
    let edges = &tile.edges;

    // Row 0
    canvas.set(x + 3, y, '_')?;
    canvas.set(x + 5, y, '_')?;

    // Row 1
    canvas.set(x + 1, y + 1, '/')?;
    canvas.set(x + 4, y + 1, edges.north.letter())?;
    canvas.set(x + 7, y + 1, '\\')?;

    // Row 2
    canvas.set(x, y + 2, '/')?;
    canvas.set(x + 1, y + 2, edges.north_west.letter())?;
    canvas.set(x + 7, y + 2, edges.north_east.letter())?;
    canvas.set(x + 8, y + 2, '\\')?;

    // Row 3
    canvas.set(x, y + 3, '\\')?;
    canvas.set(x + 1, y + 3, edges.south_west.letter())?;
    canvas.set(x + 7, y + 3, edges.south_east.letter())?;
    canvas.set(x + 8, y + 3, '/')?;

    // Row 4
    canvas.set(x + 1, y + 4, '\\')?;
    canvas.set(x + 3, y + 4, '_')?;
    canvas.set(x + 4, y + 4, edges.south.letter())?;
    canvas.set(x + 5, y + 4, '_')?;
    canvas.set(x + 7, y + 4, '/')?;

    Ok(())
}

/// Canvas position of a tile glyph's top-left corner.
///
/// One step south (q) drops a glyph height minus the shared border row;
/// one step south-east (r) shifts right a glyph width minus the shared
/// border columns and drops half a glyph.
pub fn tile_origin(coordinate: &HexCoordinate) -> (i32, i32) {
    let vertical_step = TILE_HEIGHT - 1;
    let horizontal_step = TILE_WIDTH - 2;
    let diagonal_y_step = vertical_step / 2;

    let x = horizontal_step * coordinate.r;
    let y = vertical_step * coordinate.q + diagonal_y_step * coordinate.r;
    (x, y)
}

/// Render a whole board as text.
///
/// The canvas is sized to exactly fit every tile glyph. An empty board
/// renders as the empty string.
pub fn render_board(board: &Board) -> Result<String, PrinterError> {
    let tiles = board.get_all();
    if tiles.is_empty() {
        return Ok(String::new());
    }

    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;
    for board_tile in &tiles {
        let (x, y) = tile_origin(&board_tile.coordinate);
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x + TILE_WIDTH - 1);
        max_y = max_y.max(y + TILE_HEIGHT - 1);
    }

    let mut canvas = Canvas::new(min_x, min_y, max_x, max_y);
    for board_tile in &tiles {
        let (x, y) = tile_origin(&board_tile.coordinate);
        draw_tile(&mut canvas, &board_tile.tile, x, y)?;
    }

    Ok(canvas.to_string())
}
