//! Rummy 151 entry point
//!
//! Line-oriented shell over the score keeper. The sheet is redrawn after
//! every change that was saved.

use std::io::{self, BufRead, Write};

use rummy_151::{GameError, RoundInput, ScoreKeeper, ScoreSheet, Settings, SnapshotStore};

const HELP: &str = "\
Commands:
  add <name>        add a player
  del <name>        delete a player and their scores
  round <s1> <s2>.. submit one score per player, in column order
  reset-game        zero all scores, keep players
  reset-players     delete all players and rounds
  show              print the score sheet
  help              print this help
  quit              exit";

/// One parsed shell line
#[derive(Debug, PartialEq)]
enum Command {
    Add(String),
    Delete(String),
    Round(Vec<String>),
    ResetGame,
    ResetPlayers,
    Show,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));

        match word.to_lowercase().as_str() {
            "add" => Some(Command::Add(rest.to_string())),
            "del" | "delete" => Some(Command::Delete(rest.to_string())),
            "round" => Some(Command::Round(
                rest.split_whitespace().map(str::to_string).collect(),
            )),
            "reset-game" => Some(Command::ResetGame),
            "reset-players" => Some(Command::ResetPlayers),
            "show" | "" => Some(Command::Show),
            "help" | "?" => Some(Command::Help),
            "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Warning text when a `round` line does not give one entry per player
fn entry_count_mismatch(players: usize, entries: usize) -> Option<String> {
    if players == 0 || entries == players {
        return None;
    }
    if entries < players {
        Some(format!(
            "Expected {} scores, got {}; the last {} player(s) will score 0.",
            players,
            entries,
            players - entries
        ))
    } else {
        Some(format!(
            "Expected {} scores, got {}; the extra {} will be ignored.",
            players,
            entries,
            entries - players
        ))
    }
}

fn confirm(lines: &mut impl Iterator<Item = io::Result<String>>, prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        _ => false,
    }
}

fn run<S: SnapshotStore>(keeper: &mut ScoreKeeper<S>, settings: &Settings) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("RUMMY 151 SCORE SHEET");
    println!("{}", ScoreSheet::new(keeper.state(), settings));

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        let Some(command) = Command::parse(&line) else {
            println!("Unknown command, type `help`");
            continue;
        };

        let before = keeper.revision();
        let result = match command {
            Command::Add(name) => keeper.add_player(&name),
            Command::Delete(name) => {
                if keeper.state().player(&name).is_none() {
                    Err(GameError::NotFound(name))
                } else if confirm(&mut lines, &format!("Delete player {}?", name)) {
                    keeper.delete_player(&name)
                } else {
                    Ok(())
                }
            }
            Command::Round(raws) => {
                let proceed = match entry_count_mismatch(keeper.players().len(), raws.len()) {
                    Some(warning) => confirm(&mut lines, &format!("{} Submit anyway?", warning)),
                    None => true,
                };
                if proceed {
                    let input = RoundInput::in_roster_order(keeper.state(), raws);
                    keeper.submit_round(&input).map(|_| ())
                } else {
                    Ok(())
                }
            }
            Command::ResetGame => {
                if confirm(&mut lines, "Reset all scores but keep players?") {
                    keeper.reset_game()
                } else {
                    Ok(())
                }
            }
            Command::ResetPlayers => {
                if confirm(&mut lines, "Delete ALL players and rounds?") {
                    keeper.reset_players()
                } else {
                    Ok(())
                }
            }
            Command::Show => {
                println!("{}", ScoreSheet::new(keeper.state(), settings));
                Ok(())
            }
            Command::Help => {
                println!("{}", HELP);
                Ok(())
            }
            Command::Quit => return Ok(()),
        };

        match result {
            Err(err @ GameError::Io { .. }) => println!("Not saved: {}", err),
            Err(err) => println!("Error: {}", err),
            Ok(()) if keeper.revision() != before => {
                println!("{}", ScoreSheet::new(keeper.state(), settings));
            }
            Ok(()) => {}
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Rummy 151 starting...");

    let settings = Settings::default();
    let mut keeper = match ScoreKeeper::from_settings(&settings) {
        Ok(keeper) => keeper,
        Err(err) => {
            eprintln!("Could not open {}: {}", settings.data_file.display(), err);
            std::process::exit(1);
        }
    };

    log::info!("Using snapshot {}", keeper.store().path().display());

    if let Err(err) = run(&mut keeper, &settings) {
        eprintln!("Input error: {}", err);
        std::process::exit(1);
    }
}
