//! End-to-end tests of the keeper against a real snapshot file.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use rummy_151::{GameError, PlayerStatus, RoundInput, ScoreKeeper, Settings};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_settings(tag: &str) -> Settings {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let path: PathBuf =
        std::env::temp_dir().join(format!("rummy_keeper_{}_{}_{}.json", tag, std::process::id(), n));
    Settings::with_data_file(path)
}

#[test]
fn test_full_game_survives_restart() {
    let settings = temp_settings("restart");

    {
        let mut keeper = ScoreKeeper::from_settings(&settings).unwrap();
        assert!(keeper.state().is_empty());
        keeper.add_player("A").unwrap();
        keeper.add_player("B").unwrap();
        keeper.add_player("C").unwrap();

        let round = keeper
            .submit_round(&RoundInput::new().entry("A", "5").entry("B", "5").entry("C", "10"))
            .unwrap();
        assert_eq!(round.winner(), "A");

        keeper
            .submit_round(&RoundInput::new().entry("A", "150").entry("B", "abc").entry("C", "1"))
            .unwrap();
    }

    let mut keeper = ScoreKeeper::from_settings(&settings).unwrap();
    let totals: Vec<_> = keeper.players().iter().map(|p| (p.name.as_str(), p.total)).collect();
    assert_eq!(totals, [("A", 155), ("B", 5), ("C", 11)]);
    assert_eq!(keeper.players()[0].status, PlayerStatus::Out);
    assert_eq!(keeper.rounds()[1].score_of("B"), Some(0));
    assert_eq!(keeper.rounds()[1].winner(), "B");

    keeper.delete_player("B").unwrap();
    drop(keeper);

    let keeper = ScoreKeeper::from_settings(&settings).unwrap();
    assert!(keeper.rounds().iter().all(|r| r.score_of("B").is_none()));
    // Stale winner is kept as recorded
    assert_eq!(keeper.rounds()[1].winner(), "B");
    assert_eq!(keeper.players()[1].total, 11);

    fs::remove_file(&settings.data_file).unwrap();
}

#[test]
fn test_resets_are_persisted() {
    let settings = temp_settings("reset");
    let mut keeper = ScoreKeeper::from_settings(&settings).unwrap();
    keeper.add_player("A").unwrap();
    keeper.add_player("B").unwrap();
    keeper
        .submit_round(&RoundInput::new().entry("A", "200").entry("B", "3"))
        .unwrap();

    keeper.reset_game().unwrap();
    let reopened = ScoreKeeper::from_settings(&settings).unwrap();
    assert_eq!(reopened.players().len(), 2);
    assert!(reopened.players().iter().all(|p| p.total == 0 && p.status == PlayerStatus::Active));
    assert!(reopened.rounds().is_empty());

    keeper.reset_players().unwrap();
    let reopened = ScoreKeeper::from_settings(&settings).unwrap();
    assert!(reopened.state().is_empty());

    fs::remove_file(&settings.data_file).unwrap();
}

#[test]
fn test_file_written_in_contract_layout() {
    let settings = temp_settings("layout");
    let mut keeper = ScoreKeeper::from_settings(&settings).unwrap();
    keeper.add_player("Zoe").unwrap();
    keeper.add_player("Al").unwrap();
    keeper
        .submit_round(&RoundInput::new().entry("Zoe", "7").entry("Al", "9"))
        .unwrap();

    let json = fs::read_to_string(&settings.data_file).unwrap();
    assert_eq!(
        json,
        r#"{"players":{"Zoe":{"total":7,"status":"ACTIVE"},"Al":{"total":9,"status":"ACTIVE"}},"rounds":[{"Zoe":7,"Al":9,"winner":"Zoe"}]}"#
    );

    fs::remove_file(&settings.data_file).unwrap();
}

#[test]
fn test_corrupt_snapshot_refuses_to_open() {
    let settings = temp_settings("corrupt");
    fs::write(&settings.data_file, r#"{"players": {"A": {"total": 1}}}"#).unwrap();

    let result = ScoreKeeper::from_settings(&settings);
    assert!(matches!(result, Err(GameError::CorruptState { .. })));
    // Nothing overwrote the broken file
    let json = fs::read_to_string(&settings.data_file).unwrap();
    assert!(json.contains(r#""total": 1"#));

    fs::remove_file(&settings.data_file).unwrap();
}
