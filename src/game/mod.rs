//! Scoring state machine
//!
//! All game rules live here. This module has no I/O:
//! - Roster order is display order and winner tie-break order
//! - Scores parse leniently (unparseable counts as zero)
//! - A player is out once their total reaches the limit, until a reset

pub mod round;
pub mod state;

pub use round::{RoundInput, parse_score, submit_round};
pub use state::{GameState, Player, PlayerStatus, Round};
