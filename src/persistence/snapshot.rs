//! Snapshot layout
//!
//! ```json
//! {
//!   "players": { "Ann": { "total": 12, "status": "ACTIVE" } },
//!   "rounds": [ { "Ann": 12, "winner": "Ann" } ]
//! }
//! ```
//!
//! Both maps are written in roster order and read back in document order, so
//! display order survives a round trip. `winner` is a reserved key inside a
//! round record and is always written last.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::WINNER_KEY;
use crate::game::{PlayerStatus, Round};

/// Per-player record under `players`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlayerRecord {
    total: i64,
    status: PlayerStatus,
}

/// `players` as an ordered name-keyed map
pub mod roster {
    use super::*;
    use crate::game::Player;

    pub fn serialize<S: Serializer>(players: &[Player], serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(players.len()))?;
        for player in players {
            map.serialize_entry(
                &player.name,
                &PlayerRecord {
                    total: player.total,
                    status: player.status,
                },
            )?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Player>, D::Error> {
        deserializer.deserialize_map(RosterVisitor)
    }

    struct RosterVisitor;

    impl<'de> Visitor<'de> for RosterVisitor {
        type Value = Vec<Player>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of player name to {total, status}")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut players: Vec<Player> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, record)) = map.next_entry::<String, PlayerRecord>()? {
                if players.iter().any(|p| p.name == name) {
                    return Err(de::Error::custom(format!("duplicate player {name:?}")));
                }
                players.push(Player {
                    name,
                    total: record.total,
                    status: record.status,
                });
            }
            Ok(players)
        }
    }
}

impl Serialize for Round {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len() + 1))?;
        for (name, score) in &self.scores {
            map.serialize_entry(name, score)?;
        }
        map.serialize_entry(WINNER_KEY, &self.winner)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Round {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RoundVisitor)
    }
}

struct RoundVisitor;

impl<'de> Visitor<'de> for RoundVisitor {
    type Value = Round;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of player name to score with a \"winner\" entry")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Round, A::Error> {
        let mut scores: Vec<(String, i64)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
        let mut winner: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            if key == WINNER_KEY {
                if winner.is_some() {
                    return Err(de::Error::duplicate_field(WINNER_KEY));
                }
                winner = Some(map.next_value()?);
            } else {
                if scores.iter().any(|(n, _)| *n == key) {
                    return Err(de::Error::custom(format!("duplicate score for {key:?}")));
                }
                let score = map.next_value()?;
                scores.push((key, score));
            }
        }

        let winner = winner.ok_or_else(|| de::Error::missing_field(WINNER_KEY))?;
        Ok(Round { scores, winner })
    }
}
