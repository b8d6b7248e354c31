//! Hexdorf - a hex tile-placement puzzle game engine
//!
//! This crate provides the core game logic for Hexdorf, including:
//! - Cube coordinate system for the hex play field
//! - Tiles with per-edge terrains and rotation
//! - Placement scoring with edge matches and perfect-tile bonuses
//! - User sessions with game history
//! - Text rendering of boards
//!
//! # Architecture
//!
//! The game engine is designed to be platform-agnostic. It can be compiled to:
//! - Native Rust for tooling and tests
//! - WebAssembly for the browser client
//!
//! # Modules
//!
//! - [`hex`]: Coordinate system and pixel projection
//! - [`tile`]: Terrains, tile edges, and rotation
//! - [`board`]: The sparse play field
//! - [`game`]: Rules, scoring, and the turn loop
//! - [`session`]: Users and their game history
//! - [`printer`]: Text rendering of boards

pub mod board;
pub mod game;
pub mod hex;
pub mod printer;
pub mod session;
pub mod tile;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{Board, BoardJson, BoardTile, BoardTileJson};
pub use game::{Game, GameError, GameJson, GameRules, PlacementResult};
pub use hex::{hex_corners, Direction, HexCoordinate, DEFAULT_HEX_SIZE};
pub use printer::{draw_tile, render_board, Canvas, PrinterError};
pub use session::{Session, SessionJson, User};
pub use tile::{Terrain, Tile, TileEdges};
