//! The immutable opening record.

use std::fmt;

use crate::error::QueryError;
use crate::notation::MoveSequence;

/// Which color a query is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("White"),
            Side::Black => f.write_str("Black"),
        }
    }
}

/// One opening: its label, move line, reached position, and outcome
/// counts. Immutable once constructed.
///
/// `total_games` is always the sum of the three outcome counts — the
/// constructor computes it, so the invariant cannot be broken by a
/// loader handing over inconsistent numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningRecord {
    name: String,
    moves: MoveSequence,
    fen: String,
    white_wins: u64,
    draws: u64,
    black_wins: u64,
    total_games: u64,
}

impl OpeningRecord {
    pub fn new(
        name: impl Into<String>,
        moves: MoveSequence,
        fen: impl Into<String>,
        white_wins: u64,
        draws: u64,
        black_wins: u64,
    ) -> Self {
        OpeningRecord {
            name: name.into(),
            moves,
            fen: fen.into(),
            white_wins,
            draws,
            black_wins,
            total_games: white_wins + draws + black_wins,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn moves(&self) -> &MoveSequence {
        &self.moves
    }

    /// Position reached after playing the whole move line.
    pub fn fen(&self) -> &str {
        &self.fen
    }

    pub fn white_wins(&self) -> u64 {
        self.white_wins
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn black_wins(&self) -> u64 {
        self.black_wins
    }

    pub fn total_games(&self) -> u64 {
        self.total_games
    }

    /// White win share minus Black win share, as a percentage.
    ///
    /// Positive favors White, negative favors Black, zero is balanced;
    /// draws widen the denominator but never the numerator. Undefined
    /// for an opening nobody has played — such records must be left
    /// out of aggregates, not counted as 0%.
    pub fn weighted_win_rate(&self) -> Result<f64, QueryError> {
        if self.total_games == 0 {
            return Err(QueryError::UndefinedRate {
                name: self.name.clone(),
            });
        }
        let total = self.total_games as f64;
        let white = self.white_wins as f64 * 100.0 / total;
        let black = self.black_wins as f64 * 100.0 / total;
        Ok(white - black)
    }
}
