//! Algebraic move-sequence parsing and comparison.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::QueryError;

/// A single SAN ply: piece moves, captures, promotions, castling.
/// Syntax only — board legality is not checked here.
static SAN_PLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[KQRBN]?[a-h]?[1-8]?x?[a-h][1-8](?:=[QRBN])?[+#]?|O-O(?:-O)?[+#]?)$").unwrap()
});

/// An opening's move text, tokenized into plies.
///
/// The canonical text form numbers full moves without trailing
/// punctuation: `1 e4 e5 2 Nf3 Nc6 3 Bb5`. Parsing validates that the
/// numbers run sequentially from 1 and that every ply is well-formed
/// SAN; comparisons are exact, case-sensitive token comparisons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSequence {
    plies: Vec<String>,
}

impl MoveSequence {
    /// The individual plies, White's first.
    pub fn plies(&self) -> &[String] {
        &self.plies
    }

    pub fn ply_count(&self) -> usize {
        self.plies.len()
    }

    /// Number of full moves: one White ply plus Black's reply (if any)
    /// count as a single move, so `1 e4 c5 2 Nf3` is two moves long.
    pub fn move_count(&self) -> usize {
        (self.plies.len() + 1) / 2
    }

    pub fn is_empty(&self) -> bool {
        self.plies.is_empty()
    }

    /// True iff `root` is an exact, order-preserving prefix of this
    /// sequence. The empty sequence prefixes everything.
    pub fn is_prefixed_by(&self, root: &MoveSequence) -> bool {
        self.plies.starts_with(&root.plies)
    }
}

impl FromStr for MoveSequence {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let mut plies = Vec::new();
        let mut move_no: u32 = 1;
        let mut i = 0;

        while i < tokens.len() {
            // Full-move number, sequential from 1.
            if tokens[i] != move_no.to_string() {
                return Err(malformed(tokens[i], i));
            }
            i += 1;

            // White's ply is mandatory after a move number.
            let Some(&white) = tokens.get(i) else {
                return Err(malformed(tokens[i - 1], i - 1));
            };
            if !SAN_PLY.is_match(white) {
                return Err(malformed(white, i));
            }
            plies.push(white.to_string());
            i += 1;

            // Black's reply is optional: the next token may instead
            // open the following move.
            if let Some(&next) = tokens.get(i) {
                if next == (move_no + 1).to_string() {
                    move_no += 1;
                    continue;
                }
                if !SAN_PLY.is_match(next) {
                    return Err(malformed(next, i));
                }
                plies.push(next.to_string());
                i += 1;
                move_no += 1;
            }
        }

        Ok(MoveSequence { plies })
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ply) in self.plies.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if i % 2 == 0 {
                write!(f, "{} ", i / 2 + 1)?;
            }
            f.write_str(ply)?;
        }
        Ok(())
    }
}

fn malformed(token: &str, index: usize) -> QueryError {
    QueryError::MalformedNotation {
        token: token.to_string(),
        index,
    }
}
