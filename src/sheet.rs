//! Text score sheet
//!
//! One column per player in roster order, one row per round, and a totals row
//! at the bottom. The round winner's score carries the winner marker and an
//! eliminated player's total carries the out marker.

use std::fmt;

use crate::game::GameState;
use crate::settings::Settings;

/// Width of the leading round-number column
const LABEL_WIDTH: usize = 4;

/// Rendered cells of the score sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSheet {
    /// Player names, left to right
    pub columns: Vec<String>,
    /// One row of cells per round, oldest first
    pub rows: Vec<Vec<String>>,
    pub totals: Vec<String>,
    /// Lowest total among players still in
    pub leader: Option<String>,
    column_width: usize,
}

impl ScoreSheet {
    pub fn new(state: &GameState, settings: &Settings) -> Self {
        let columns: Vec<String> = state.players().iter().map(|p| p.name.clone()).collect();

        let rows: Vec<Vec<String>> = state
            .rounds()
            .iter()
            .map(|round| {
                columns
                    .iter()
                    .map(|name| {
                        // Players added after this round have no score in it
                        let mut cell = round
                            .score_of(name)
                            .map(|s| s.to_string())
                            .unwrap_or_default();
                        // A re-added name never inherits an old win
                        if !cell.is_empty() && round.is_winner(name) {
                            cell.push(settings.winner_marker);
                        }
                        cell
                    })
                    .collect::<Vec<String>>()
            })
            .collect();

        let totals: Vec<String> = state
            .players()
            .iter()
            .map(|p| {
                let mut cell = p.total.to_string();
                if p.is_out() {
                    cell.push(settings.out_marker);
                }
                cell
            })
            .collect();

        Self {
            columns,
            rows,
            totals,
            leader: state.leader().map(|p| p.name.clone()),
            column_width: settings.column_width,
        }
    }

    fn width_of(&self, col: usize) -> usize {
        let mut width = self.columns[col].chars().count().max(self.column_width);
        for row in &self.rows {
            width = width.max(row[col].chars().count());
        }
        width.max(self.totals[col].chars().count())
    }

    fn write_row(
        &self,
        f: &mut fmt::Formatter,
        label: &str,
        cells: &[String],
        widths: &[usize],
    ) -> fmt::Result {
        write!(f, "{:<width$}", label, width = LABEL_WIDTH)?;
        for (cell, width) in cells.iter().zip(widths) {
            write!(f, " | {:>width$}", cell, width = *width)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ScoreSheet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let widths: Vec<usize> = (0..self.columns.len()).map(|c| self.width_of(c)).collect();

        self.write_row(f, "Rnd", &self.columns, &widths)?;
        for (i, row) in self.rows.iter().enumerate() {
            self.write_row(f, &(i + 1).to_string(), row, &widths)?;
        }
        self.write_row(f, "Tot", &self.totals, &widths)?;
        if let Some(leader) = &self.leader {
            writeln!(f, "Leader: {}", leader)?;
        }
        Ok(())
    }
}
