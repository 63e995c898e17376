//! Tab-separated dataset loading.
//!
//! The openings file carries one row per opening with a header line:
//! `Opening Name`, `FEN`, `PGN`, `White Wins`, `Draws`, `Black Wins`.
//! Extra columns are ignored.

use std::path::Path;

use serde::Deserialize;
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess};

use crate::dataset::Dataset;
use crate::error::LoadError;
use crate::notation::MoveSequence;
use crate::record::OpeningRecord;

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Opening Name")]
    name: String,
    #[serde(rename = "FEN")]
    fen: String,
    #[serde(rename = "PGN")]
    pgn: String,
    #[serde(rename = "White Wins")]
    white_wins: u64,
    #[serde(rename = "Draws")]
    draws: u64,
    #[serde(rename = "Black Wins")]
    black_wins: u64,
}

/// Load a dataset from a tab-separated openings file.
///
/// Rows that cannot become a valid record — unreadable counts, move
/// text that does not parse, a FEN that is not a legal position — are
/// skipped with a warning instead of failing the load. Every surviving
/// record's `total_games` is the computed outcome sum, so the query
/// engine never sees inconsistent counts. A load that produces no
/// records at all is an error.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new().delimiter(b'\t').from_path(path)?;

    let mut records = Vec::new();
    let mut discarded = 0usize;
    for (index, row) in reader.deserialize::<RawRow>().enumerate() {
        // Header is line 1, the first data row line 2.
        let line = index + 2;
        match row.map_err(|e| e.to_string()).and_then(build_record) {
            Ok(record) => records.push(record),
            Err(reason) => {
                tracing::warn!("skipping line {line}: {reason}");
                discarded += 1;
            }
        }
    }

    if records.is_empty() {
        return Err(LoadError::Empty {
            path: path.display().to_string(),
        });
    }

    tracing::info!(
        "loaded {} openings from {} ({} rows discarded)",
        records.len(),
        path.display(),
        discarded
    );
    Ok(Dataset::new(records))
}

fn build_record(raw: RawRow) -> Result<OpeningRecord, String> {
    let moves: MoveSequence = raw
        .pgn
        .parse()
        .map_err(|e| format!("bad move text: {e}"))?;

    let fen: Fen = raw.fen.parse().map_err(|e| format!("bad FEN: {e}"))?;
    if fen.into_position::<Chess>(CastlingMode::Standard).is_err() {
        return Err(format!("FEN is not a legal position: {}", raw.fen));
    }

    Ok(OpeningRecord::new(
        raw.name,
        moves,
        raw.fen,
        raw.white_wins,
        raw.draws,
        raw.black_wins,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Opening Name\tFEN\tPGN\tWhite Wins\tDraws\tBlack Wins\n";
    const SICILIAN_FEN: &str = "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";
    const FRENCH_FEN: &str = "rnbqkbnr/pppp1ppp/4p3/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";

    fn write_dataset(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_rows() {
        let file = write_dataset(&format!(
            "{HEADER}Sicilian Defense\t{SICILIAN_FEN}\t1 e4 c5\t480000\t300000\t220000\n\
             French Defense\t{FRENCH_FEN}\t1 e4 e6\t300000\t220000\t80000\n"
        ));

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);

        let sicilian = &dataset.records()[0];
        assert_eq!(sicilian.name(), "Sicilian Defense");
        assert_eq!(sicilian.moves().to_string(), "1 e4 c5");
        assert_eq!(sicilian.fen(), SICILIAN_FEN);
        assert_eq!(sicilian.total_games(), 1_000_000);
        assert_eq!(sicilian.weighted_win_rate().unwrap(), 26.0);
    }

    #[test]
    fn test_malformed_rows_are_discarded_not_fatal() {
        let file = write_dataset(&format!(
            "{HEADER}\
             Good Line\t{SICILIAN_FEN}\t1 e4 c5\t10\t5\t5\n\
             Bad Counts\t{SICILIAN_FEN}\t1 e4 c5\tmany\t0\t0\n\
             Negative\t{SICILIAN_FEN}\t1 e4 c5\t-3\t0\t0\n\
             Bad Moves\t{SICILIAN_FEN}\te4 c5\t10\t0\t0\n\
             Bad Fen\tnot-a-fen\t1 e4\t10\t0\t0\n\
             Kingless\t8/8/8/8/8/8/8/8 w - - 0 1\t1 e4\t10\t0\t0\n\
             Short Row\t{SICILIAN_FEN}\n\
             Also Good\t{FRENCH_FEN}\t1 e4 e6\t4\t2\t2\n"
        ));

        let dataset = load_dataset(file.path()).unwrap();
        let names: Vec<&str> = dataset.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["Good Line", "Also Good"]);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let file = write_dataset(&format!(
            "Opening Name\tFEN\tPGN\tWhite Wins\tDraws\tBlack Wins\tWin % Difference\n\
             Sicilian Defense\t{SICILIAN_FEN}\t1 e4 c5\t48\t30\t22\t26\n"
        ));

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].total_games(), 100);
    }

    #[test]
    fn test_header_only_file_is_empty_error() {
        let file = write_dataset(HEADER);
        match load_dataset(file.path()) {
            Err(LoadError::Empty { path }) => {
                assert_eq!(path, file.path().display().to_string());
            }
            other => panic!("expected Empty, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_read_error() {
        assert!(matches!(
            load_dataset("no/such/stats-file.txt"),
            Err(LoadError::Csv(_))
        ));
    }
}
