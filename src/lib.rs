//! Rummy 151 - score keeper for the 151-point elimination rummy game
//!
//! Core modules:
//! - `game`: Roster, rounds and scoring rules (no I/O)
//! - `persistence`: JSON snapshot stores
//! - `keeper`: Game state bound to a store, saved after every change
//! - `sheet`: Text score sheet for display
//! - `settings`: Snapshot location and sheet markers

pub mod error;
pub mod game;
pub mod keeper;
pub mod persistence;
pub mod settings;
pub mod sheet;

pub use error::{GameError, Result};
pub use game::{GameState, Player, PlayerStatus, Round, RoundInput};
pub use keeper::ScoreKeeper;
pub use persistence::{JsonFileStore, MemoryStore, SnapshotStore};
pub use settings::Settings;
pub use sheet::ScoreSheet;

/// Game constants
pub mod consts {
    /// Total at which a player is out
    pub const MAX_POINTS: i64 = 151;

    /// Default snapshot file, relative to the working directory
    pub const DATA_FILE: &str = "rummy_data.json";

    /// Reserved key holding the winner inside a round record
    pub const WINNER_KEY: &str = "winner";
}
