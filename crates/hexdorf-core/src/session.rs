//! User sessions: one active game plus the history of finished ones.

use crate::game::{Game, GameError, GameJson};
use serde::{Deserialize, Serialize};

/// A player identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, never empty
    pub id: String,
}

impl User {
    /// Create a user. Fails when the id is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, GameError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(GameError::EmptyUserId);
        }
        Ok(Self { id })
    }
}

/// A user's play session: at most one game running, finished games archived
/// in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for the session
    pub session_id: String,
    /// The user this session belongs to
    pub user: User,
    /// The game currently being played, if any
    pub active_game: Option<Game>,
    /// Finished games, oldest first
    pub games: Vec<Game>,
}

impl Session {
    /// Create a session with no active game and an empty history
    pub fn new(session_id: impl Into<String>, user: User) -> Self {
        Self {
            session_id: session_id.into(),
            user,
            active_game: None,
            games: Vec::new(),
        }
    }

    /// Start a new game. A game already running is archived first.
    pub fn start_new_game(&mut self, game: Game) {
        if let Some(previous) = self.active_game.take() {
            self.games.push(previous);
        }
        self.active_game = Some(game);
    }

    /// End the running game and move it to the history.
    ///
    /// Fails when no game is active.
    pub fn end_active_game(&mut self) -> Result<(), GameError> {
        match self.active_game.take() {
            Some(game) => {
                self.games.push(game);
                Ok(())
            }
            None => Err(GameError::NoActiveGame),
        }
    }

    /// Convert to a JSON-friendly representation
    pub fn to_json_friendly(&self) -> SessionJson {
        SessionJson {
            session_id: self.session_id.clone(),
            user: self.user.clone(),
            active_game: self.active_game.as_ref().map(Game::to_json_friendly),
            games: self.games.iter().map(Game::to_json_friendly).collect(),
        }
    }
}

/// JSON-friendly session snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionJson {
    pub session_id: String,
    pub user: User,
    pub active_game: Option<GameJson>,
    pub games: Vec<GameJson>,
}
