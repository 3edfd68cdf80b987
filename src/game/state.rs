//! Roster and round history
//!
//! Everything written to the snapshot lives here. Mutations are plain methods
//! returning `Result`; persistence is layered on top by the keeper.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_POINTS, WINNER_KEY};
use crate::error::{GameError, Result};

/// Whether a player is still in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlayerStatus {
    #[default]
    Active,
    /// Total reached the limit. Only a reset brings the player back.
    Out,
}

/// A player on the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    /// Sum of this player's scores across the rounds in history
    pub total: i64,
    pub status: PlayerStatus,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total: 0,
            status: PlayerStatus::Active,
        }
    }

    /// Add a round score to the total, knocking the player out at the limit
    pub fn record(&mut self, score: i64) {
        self.total = self.total.saturating_add(score);
        if self.total >= MAX_POINTS {
            self.status = PlayerStatus::Out;
        }
    }

    pub fn is_out(&self) -> bool {
        self.status == PlayerStatus::Out
    }
}

/// One completed round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Scores in roster order at submission time
    pub(crate) scores: Vec<(String, i64)>,
    pub(crate) winner: String,
}

impl Round {
    pub fn scores(&self) -> &[(String, i64)] {
        &self.scores
    }

    pub fn score_of(&self, name: &str) -> Option<i64> {
        self.scores
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, score)| *score)
    }

    /// Lowest scorer of the round. May name a player deleted since.
    pub fn winner(&self) -> &str {
        &self.winner
    }

    pub fn is_winner(&self, name: &str) -> bool {
        self.winner == name
    }
}

/// Complete game state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Roster in insertion order (display order)
    #[serde(default, with = "crate::persistence::snapshot::roster")]
    pub(crate) players: Vec<Player>,
    /// Completed rounds, oldest first
    #[serde(default)]
    pub(crate) rounds: Vec<Round>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.rounds.is_empty()
    }

    /// Append a player with a zero total. The name is trimmed first.
    pub fn add_player(&mut self, name: &str) -> Result<&Player> {
        let name = name.trim();
        if name.is_empty() || name == WINNER_KEY || self.player(name).is_some() {
            return Err(GameError::InvalidInput(name.to_string()));
        }
        self.players.push(Player::new(name));
        Ok(&self.players[self.players.len() - 1])
    }

    /// Remove a player and their scores from every round.
    ///
    /// Winners are left as recorded, so a round may keep naming the deleted
    /// player as its winner.
    pub fn delete_player(&mut self, name: &str) -> Result<Player> {
        let idx = self
            .players
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| GameError::NotFound(name.to_string()))?;
        let removed = self.players.remove(idx);
        for round in &mut self.rounds {
            round.scores.retain(|(n, _)| n != name);
        }
        Ok(removed)
    }

    /// Zero every total and clear history, keeping the roster
    pub fn reset_game(&mut self) {
        for player in &mut self.players {
            player.total = 0;
            player.status = PlayerStatus::Active;
        }
        self.rounds.clear();
    }

    /// Start over with no players and no history
    pub fn reset_players(&mut self) {
        self.players.clear();
        self.rounds.clear();
    }

    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.is_out())
    }

    /// Active player with the lowest total, first in roster order on ties
    pub fn leader(&self) -> Option<&Player> {
        let mut best: Option<&Player> = None;
        for player in self.active_players() {
            if best.is_none_or(|b| player.total < b.total) {
                best = Some(player);
            }
        }
        best
    }

    /// Sum of a player's scores still present in history
    pub fn history_total(&self, name: &str) -> i64 {
        self.rounds
            .iter()
            .filter_map(|r| r.score_of(name))
            .fold(0i64, |acc, s| acc.saturating_add(s))
    }
}
