//! Keeper settings
//!
//! Fixed at startup. The binary runs with the defaults; tests point the data
//! file somewhere temporary.

use std::path::PathBuf;

use crate::consts::DATA_FILE;

/// Settings for the keeper and the score sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Snapshot file, relative to the working directory by default
    pub data_file: PathBuf,

    // === Score sheet ===
    /// Appended to the round winner's score
    pub winner_marker: char,
    /// Appended to the total of a player who is out
    pub out_marker: char,
    /// Minimum width of a score column
    pub column_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DATA_FILE),
            winner_marker: '=',
            out_marker: 'X',
            column_width: 6,
        }
    }
}

impl Settings {
    /// Default settings with a different snapshot file
    pub fn with_data_file(path: impl Into<PathBuf>) -> Self {
        Self {
            data_file: path.into(),
            ..Self::default()
        }
    }
}
