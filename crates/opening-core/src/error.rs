//! Query and ingestion error types.

use thiserror::Error;

use crate::record::OpeningRecord;

/// Everything that can go wrong while querying a dataset.
///
/// All variants are recoverable: a console front end turns each into a
/// message and re-prompts, it never has to abort the process.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("unparseable move text at token {index}: {token:?}")]
    MalformedNotation { token: String, index: usize },

    #[error("win rate is undefined for {name:?}: no recorded games")]
    UndefinedRate { name: String },

    #[error("no qualifying openings within the current boundaries")]
    EmptyView,

    #[error("z-factor is undefined: every qualifying opening has the same win rate")]
    UndefinedZFactor,

    #[error("no search identifier provided")]
    NoIdentifierProvided,

    #[error("both a name and a PGN/FEN were given; search by one at a time")]
    AmbiguousIdentifierKind,

    #[error("no opening matching {query:?} within the current boundaries")]
    OpeningNotFound { query: String },

    #[error("{} openings match {query:?}", .candidates.len())]
    MultipleMatches {
        query: String,
        candidates: Vec<OpeningRecord>,
    },
}

/// Dataset file loading errors.
///
/// Malformed rows are skipped (with a warning), not surfaced here; only
/// file-level problems abort a load.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("no usable openings in {path}")]
    Empty { path: String },
}
