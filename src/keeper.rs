//! Persisted game session
//!
//! Every mutation runs against a working copy of the state, which only
//! replaces the live state once the store has saved it. A failed save leaves
//! memory exactly as it was before the call.

use crate::error::Result;
use crate::game::{self, GameState, Player, Round, RoundInput};
use crate::persistence::{JsonFileStore, SnapshotStore};
use crate::settings::Settings;

/// Game state bound to the store it is saved to
#[derive(Debug)]
pub struct ScoreKeeper<S: SnapshotStore> {
    state: GameState,
    store: S,
    revision: u64,
}

impl ScoreKeeper<JsonFileStore> {
    /// Open the snapshot file named in `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::open(JsonFileStore::new(&settings.data_file))
    }
}

impl<S: SnapshotStore> ScoreKeeper<S> {
    /// Load the current snapshot from `store`
    pub fn open(store: S) -> Result<Self> {
        let state = store.load()?;
        Ok(Self {
            state,
            store,
            revision: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn players(&self) -> &[Player] {
        self.state.players()
    }

    pub fn rounds(&self) -> &[Round] {
        self.state.rounds()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Bumped after every successful mutation; poll it to know when to redraw
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn add_player(&mut self, name: &str) -> Result<()> {
        self.commit(|state| state.add_player(name).map(|_| ()))?;
        log::info!("Added player {:?}", name.trim());
        Ok(())
    }

    /// Caller is expected to have confirmed the deletion
    pub fn delete_player(&mut self, name: &str) -> Result<()> {
        self.commit(|state| state.delete_player(name).map(|_| ()))?;
        log::info!("Deleted player {:?}", name);
        Ok(())
    }

    pub fn reset_game(&mut self) -> Result<()> {
        self.commit(|state| {
            state.reset_game();
            Ok(())
        })?;
        log::info!("Game reset, {} players kept", self.state.players().len());
        Ok(())
    }

    pub fn reset_players(&mut self) -> Result<()> {
        self.commit(|state| {
            state.reset_players();
            Ok(())
        })?;
        log::info!("All players and rounds cleared");
        Ok(())
    }

    /// Score a round and return it
    pub fn submit_round(&mut self, input: &RoundInput) -> Result<&Round> {
        self.commit(|state| game::submit_round(state, input).map(|_| ()))?;
        let round_no = self.state.rounds().len();
        let round = &self.state.rounds()[round_no - 1];
        log::info!("Round {} submitted, winner {}", round_no, round.winner());
        Ok(round)
    }

    fn commit<F>(&mut self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut GameState) -> Result<()>,
    {
        let mut next = self.state.clone();
        if let Err(err) = mutate(&mut next) {
            log::warn!("Rejected: {}", err);
            return Err(err);
        }
        if let Err(err) = self.store.save(&next) {
            log::error!("Snapshot save failed, change discarded: {}", err);
            return Err(err);
        }
        self.state = next;
        self.revision += 1;
        Ok(())
    }
}
