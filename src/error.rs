//! Error types shared by the game state, the stores and the keeper

use std::path::PathBuf;

/// Failures surfaced to the presentation layer
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Blank, duplicate or reserved player name
    #[error("invalid player name {0:?}")]
    InvalidInput(String),
    /// Delete of a player that is not on the roster
    #[error("player not found: {0}")]
    NotFound(String),
    /// Round submitted before any player was added
    #[error("add players before submitting a round")]
    NoPlayers,
    /// Snapshot exists but could not be decoded
    #[error("corrupt snapshot at {}: {source}", .path.display())]
    CorruptState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Snapshot could not be read or written
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GameError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
