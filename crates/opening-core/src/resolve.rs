//! Opening lookup within a filtered view.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::dataset::FilteredView;
use crate::error::QueryError;
use crate::notation::MoveSequence;
use crate::record::OpeningRecord;

/// What a lookup searches by. Explicitly tagged: the caller states
/// which identifier it holds, the resolver never guesses from string
/// shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Exact, case-insensitive opening name.
    Name(String),
    /// Move text, tried as an exact line first, then as an exact FEN.
    PgnOrFen(String),
}

impl Lookup {
    /// Build a lookup from the two optional prompt fields.
    ///
    /// Blank or whitespace-only input counts as absent. Neither field
    /// provided and both provided are each their own failure — the
    /// resolver does not pick a default or silently prefer one.
    pub fn from_parts(name: Option<&str>, pgn_or_fen: Option<&str>) -> Result<Self, QueryError> {
        let name = name.map(str::trim).filter(|s| !s.is_empty());
        let id = pgn_or_fen.map(str::trim).filter(|s| !s.is_empty());
        match (name, id) {
            (None, None) => Err(QueryError::NoIdentifierProvided),
            (Some(_), Some(_)) => Err(QueryError::AmbiguousIdentifierKind),
            (Some(n), None) => Ok(Lookup::Name(n.to_string())),
            (None, Some(v)) => Ok(Lookup::PgnOrFen(v.to_string())),
        }
    }
}

/// Find exactly one record in the view.
///
/// Searches only the view — an opening filtered out by the active
/// boundaries is `OpeningNotFound` even if the full dataset knows it.
/// Several matches (duplicate names, transpositions sharing a FEN)
/// come back as `MultipleMatches` with the candidates; the caller
/// disambiguates, never this function.
pub fn resolve<'a>(
    view: &FilteredView<'a>,
    lookup: &Lookup,
) -> Result<&'a OpeningRecord, QueryError> {
    match lookup {
        Lookup::Name(name) => {
            let wanted = name.to_lowercase();
            let found: Vec<&OpeningRecord> = view
                .iter()
                .filter(|r| r.name().to_lowercase() == wanted)
                .collect();
            exactly_one(found, name)
        }
        Lookup::PgnOrFen(value) => {
            // Move-sequence equality first; only a miss falls through
            // to FEN comparison. A FEN never parses as move text.
            if let Ok(seq) = value.parse::<MoveSequence>() {
                if !seq.is_empty() {
                    let found: Vec<&OpeningRecord> =
                        view.iter().filter(|r| r.moves() == &seq).collect();
                    if !found.is_empty() {
                        return exactly_one(found, value);
                    }
                }
            }
            let found: Vec<&OpeningRecord> = view.iter().filter(|r| r.fen() == value).collect();
            exactly_one(found, value)
        }
    }
}

/// Case-insensitive substring name matches, in name order. Feeds the
/// "did you mean" list after a failed name lookup.
pub fn suggest_names<'a>(view: &FilteredView<'a>, fragment: &str) -> Vec<&'a OpeningRecord> {
    let needle = fragment.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let mut found: Vec<&OpeningRecord> = view
        .iter()
        .filter(|r| r.name().to_lowercase().contains(&needle))
        .collect();
    found.sort_by(|a, b| a.name().cmp(b.name()));
    found
}

/// A uniformly random qualifying record from the view.
pub fn random_within<'a, R: Rng + ?Sized>(
    view: &FilteredView<'a>,
    rng: &mut R,
) -> Result<&'a OpeningRecord, QueryError> {
    let qualifying: Vec<&OpeningRecord> =
        view.iter().filter(|r| r.total_games() > 0).collect();
    qualifying.choose(rng).copied().ok_or(QueryError::EmptyView)
}

fn exactly_one<'a>(
    found: Vec<&'a OpeningRecord>,
    query: &str,
) -> Result<&'a OpeningRecord, QueryError> {
    match found.len() {
        0 => Err(QueryError::OpeningNotFound {
            query: query.to_string(),
        }),
        1 => Ok(found[0]),
        _ => Err(QueryError::MultipleMatches {
            query: query.to_string(),
            candidates: found.into_iter().cloned().collect(),
        }),
    }
}
