//! WebAssembly bindings for the Hexdorf game engine.
//!
//! This module exposes the game engine to JavaScript through wasm-bindgen.
//! State crosses the boundary as JSON strings, using the JSON-friendly
//! representations so coordinate-keyed maps serialize cleanly.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::game::{Game, GameRules};
#[cfg(feature = "wasm")]
use crate::hex::{HexCoordinate, DEFAULT_HEX_SIZE};
#[cfg(feature = "wasm")]
use crate::printer::render_board;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[cfg(feature = "wasm")]
fn parse_coordinate(q: i32, r: i32, s: i32) -> Result<HexCoordinate, JsValue> {
    HexCoordinate::new(q, r, s).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Create a game. Pass a rules JSON object to customize, or nothing
    /// for the standard preset.
    #[wasm_bindgen(constructor)]
    pub fn new(rules_json: Option<String>) -> Result<WasmGame, JsValue> {
        let rules = match rules_json {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| JsValue::from_str(&format!("Invalid rules JSON: {}", e)))?,
            None => GameRules::standard(),
        };
        Ok(WasmGame {
            game: Game::create(rules),
        })
    }

    /// Get the total score
    #[wasm_bindgen(js_name = getScore)]
    pub fn get_score(&self) -> u32 {
        self.game.score
    }

    /// Get the number of placements left
    #[wasm_bindgen(js_name = getRemainingTurns)]
    pub fn get_remaining_turns(&self) -> u32 {
        self.game.remaining_turns() as u32
    }

    /// Get the next queued tile as JSON, or "null" when the queue is empty
    #[wasm_bindgen(js_name = peekTile)]
    pub fn peek_tile(&self) -> String {
        serde_json::to_string(&self.game.peek()).unwrap_or_else(|_| "null".to_string())
    }

    /// Whether a placement at the coordinate would touch the board
    #[wasm_bindgen(js_name = isValidPlacement)]
    pub fn is_valid_placement(&self, q: i32, r: i32, s: i32) -> Result<bool, JsValue> {
        let coordinate = parse_coordinate(q, r, s)?;
        Ok(self.game.is_valid_placement(&coordinate))
    }

    /// Whether the tile at the coordinate is perfect
    #[wasm_bindgen(js_name = isPerfect)]
    pub fn is_perfect(&self, q: i32, r: i32, s: i32) -> Result<bool, JsValue> {
        let coordinate = parse_coordinate(q, r, s)?;
        Ok(self.game.is_perfect(&coordinate))
    }

    /// Place the next queued tile, returns the placement result as JSON
    #[wasm_bindgen(js_name = placeTile)]
    pub fn place_tile(&mut self, q: i32, r: i32, s: i32) -> Result<String, JsValue> {
        let coordinate = parse_coordinate(q, r, s)?;
        match self.game.place_tile(coordinate) {
            Ok(result) => Ok(serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string())),
            Err(e) => Err(JsValue::from_str(&format!("Placement failed: {}", e))),
        }
    }

    /// Rotate the next queued tile one step clockwise
    #[wasm_bindgen(js_name = rotateTileClockwise)]
    pub fn rotate_tile_clockwise(&mut self) -> Result<(), JsValue> {
        self.game
            .rotate_queued_tile_clockwise()
            .map_err(|e| JsValue::from_str(&format!("Rotation failed: {}", e)))
    }

    /// Rotate the next queued tile one step counterclockwise
    #[wasm_bindgen(js_name = rotateTileCounterclockwise)]
    pub fn rotate_tile_counterclockwise(&mut self) -> Result<(), JsValue> {
        self.game
            .rotate_queued_tile_counterclockwise()
            .map_err(|e| JsValue::from_str(&format!("Rotation failed: {}", e)))
    }

    /// Get board state as JSON (for rendering)
    /// Uses JSON-friendly representation with arrays instead of HashMaps
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        let board_json = self.game.board.to_json_friendly();
        serde_json::to_string(&board_json).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the full game state as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        let game_json = self.game.to_json_friendly();
        serde_json::to_string(&game_json).unwrap_or_else(|_| "{}".to_string())
    }

    /// Render the board as text
    #[wasm_bindgen(js_name = renderBoard)]
    pub fn render_board_text(&self) -> Result<String, JsValue> {
        render_board(&self.game.board).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Pixel center of a hex, as [x, y]
    #[wasm_bindgen(js_name = hexToPixel)]
    pub fn hex_to_pixel(&self, q: i32, r: i32, s: i32, size: Option<f64>) -> Result<Vec<f64>, JsValue> {
        let coordinate = parse_coordinate(q, r, s)?;
        let (x, y) = coordinate.to_pixel(size.unwrap_or(DEFAULT_HEX_SIZE));
        Ok(vec![x, y])
    }

    /// Hex containing a pixel, as [q, r, s]
    #[wasm_bindgen(js_name = pixelToHex)]
    pub fn pixel_to_hex(&self, x: f64, y: f64, size: Option<f64>) -> Vec<i32> {
        let coordinate = HexCoordinate::from_pixel(x, y, size.unwrap_or(DEFAULT_HEX_SIZE));
        vec![coordinate.q, coordinate.r, coordinate.s()]
    }
}
