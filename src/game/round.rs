//! Round submission
//!
//! Raw entries are parsed leniently: anything that is not an integer counts
//! as zero. A bad entry never rejects the round.

use std::collections::HashMap;

use super::state::{GameState, Round};
use crate::error::{GameError, Result};

/// Raw score entries for one round, keyed by player name
#[derive(Debug, Clone, Default)]
pub struct RoundInput {
    entries: HashMap<String, String>,
}

impl RoundInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style entry
    pub fn entry(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.set(name, raw);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        self.entries.insert(name.into(), raw.into());
    }

    /// Pair raw entries with the roster in display order
    pub fn in_roster_order<I, S>(state: &GameState, raws: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut input = Self::new();
        for (player, raw) in state.players().iter().zip(raws) {
            input.set(player.name.clone(), raw);
        }
        input
    }

    pub fn raw(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }
}

/// Drop `_` digit separators, as in `1_000`.
///
/// A separator must sit between two digits; anything else is left in place so
/// the parse fails.
fn strip_separators(s: &str) -> std::borrow::Cow<'_, str> {
    if !s.contains('_') {
        return s.into();
    }
    let chars: Vec<char> = s.chars().collect();
    let between_digits = chars.iter().enumerate().all(|(i, c)| {
        *c != '_'
            || (i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit()))
    });
    if between_digits {
        s.replace('_', "").into()
    } else {
        s.into()
    }
}

/// Parse a raw entry, falling back to zero on anything unparseable
pub fn parse_score(raw: &str) -> i64 {
    match strip_separators(raw.trim()).parse::<i64>() {
        Ok(score) => score,
        Err(err) => {
            if !raw.trim().is_empty() {
                log::warn!("Score entry {:?} is not an integer ({}), counting 0", raw, err);
            }
            0
        }
    }
}

/// Score a round for every player on the roster and append it to history
///
/// The winner is the first player in roster order holding the round's lowest
/// score; later players tying that score do not take it over. Players without
/// an entry score zero.
pub fn submit_round<'a>(state: &'a mut GameState, input: &RoundInput) -> Result<&'a Round> {
    if state.players.is_empty() {
        return Err(GameError::NoPlayers);
    }

    for name in input.entries.keys() {
        if state.player(name).is_none() {
            log::warn!("Ignoring score entry for unknown player {:?}", name);
        }
    }

    let mut scores = Vec::with_capacity(state.players.len());
    let mut lowest: Option<(i64, usize)> = None;

    for (idx, player) in state.players.iter_mut().enumerate() {
        let score = input.raw(&player.name).map(parse_score).unwrap_or(0);
        player.record(score);

        if lowest.is_none_or(|(low, _)| score < low) {
            lowest = Some((score, idx));
        }
        scores.push((player.name.clone(), score));
    }

    // Roster is non-empty, so the scan always found a lowest score
    let winner_idx = lowest.map(|(_, idx)| idx).unwrap_or_default();
    let winner = scores[winner_idx].0.clone();

    log::debug!(
        "Round {} scored: {:?}, winner {}",
        state.rounds.len() + 1,
        scores,
        winner
    );

    state.rounds.push(Round { scores, winner });
    let last = state.rounds.len() - 1;
    Ok(&state.rounds[last])
}
