//! Snapshot stores
//!
//! A store holds exactly one snapshot and replaces it wholesale on every save.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{GameError, Result};
use crate::game::GameState;

/// Somewhere a full game snapshot can be kept
pub trait SnapshotStore {
    /// Read the snapshot, or an empty game if none was ever saved
    fn load(&self) -> Result<GameState>;

    /// Replace the snapshot with `state`
    fn save(&mut self, state: &GameState) -> Result<()>;
}

/// JSON file on disk, replaced atomically via a sibling temp file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<GameState> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("No snapshot at {}, starting fresh", self.path.display());
                return Ok(GameState::new());
            }
            Err(err) => return Err(GameError::io(&self.path, err)),
        };

        let state: GameState =
            serde_json::from_str(&json).map_err(|source| GameError::CorruptState {
                path: self.path.clone(),
                source,
            })?;
        log::info!(
            "Loaded {} players and {} rounds from {}",
            state.players().len(),
            state.rounds().len(),
            self.path.display()
        );
        Ok(state)
    }

    fn save(&mut self, state: &GameState) -> Result<()> {
        let json = serde_json::to_vec(state)
            .map_err(|err| GameError::io(&self.path, std::io::Error::other(err)))?;

        let tmp = self.temp_path();
        let written = fs::File::create(&tmp).and_then(|mut file| {
            file.write_all(&json)?;
            file.sync_all()
        });
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(GameError::io(&tmp, err));
        }
        fs::rename(&tmp, &self.path).map_err(|err| {
            let _ = fs::remove_file(&tmp);
            GameError::io(&self.path, err)
        })?;

        log::info!("Snapshot saved to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store holding the last saved snapshot
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<GameState>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with a snapshot
    pub fn with_state(state: GameState) -> Self {
        Self {
            saved: Some(state),
            saves: 0,
        }
    }

    pub fn saved(&self) -> Option<&GameState> {
        self.saved.as_ref()
    }

    /// Number of saves since creation
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<GameState> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, state: &GameState) -> Result<()> {
        self.saved = Some(state.clone());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{RoundInput, submit_round};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn temp_file(tag: &str) -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("rummy_store_{}_{}_{}.json", tag, std::process::id(), n))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let store = JsonFileStore::new(temp_file("missing"));
        let state = store.load().unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_file("roundtrip");
        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.path(), path.as_path());

        let mut state = GameState::new();
        state.add_player("Ann").unwrap();
        state.add_player("Bo").unwrap();
        let input = RoundInput::in_roster_order(&state, ["12", "x"]);
        submit_round(&mut state, &input).unwrap();

        store.save(&state).unwrap();
        assert!(!store.temp_path().exists());
        assert_eq!(store.load().unwrap(), state);

        // Second save overwrites rather than appends
        state.reset_game();
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), state);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let path = temp_file("corrupt");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(GameError::CorruptState { .. })));
        // The broken file is left for inspection
        assert!(path.exists());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let path = temp_file("nodir").join("nested").join("rummy_data.json");
        let mut store = JsonFileStore::new(&path);
        let result = store.save(&GameState::new());
        assert!(matches!(result, Err(GameError::Io { .. })));
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());

        let mut state = GameState::new();
        state.add_player("Ann").unwrap();
        store.save(&state).unwrap();
        store.save(&state).unwrap();

        assert_eq!(store.save_count(), 2);
        assert_eq!(store.saved(), Some(&state));
        assert_eq!(store.load().unwrap(), state);
    }
}
