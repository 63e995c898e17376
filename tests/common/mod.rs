use opening_core::{Dataset, OpeningRecord};

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// A 1,000-game record whose weighted win rate is exactly `rate`:
/// 400 + 5r white wins, 200 draws, 400 - 5r black wins.
pub fn rated(name: &str, pgn: &str, fen: &str, rate: i64) -> OpeningRecord {
    OpeningRecord::new(
        name,
        pgn.parse().unwrap(),
        fen,
        (400 + 5 * rate) as u64,
        200,
        (400 - 5 * rate) as u64,
    )
}

/// Fixed dataset for the pipeline tests: the common replies to 1 e4
/// with known rates, two queen's-pawn lines, and one unplayed line.
pub fn sample() -> Dataset {
    Dataset::new(vec![
        rated(
            "King's Pawn",
            "1 e4",
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
            4,
        ),
        rated(
            "Sicilian Defense",
            "1 e4 c5",
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
            -2,
        ),
        rated(
            "French Defense",
            "1 e4 e6",
            "rnbqkbnr/pppp1ppp/4p3/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
            6,
        ),
        rated(
            "Caro-Kann Defense",
            "1 e4 c6",
            "rnbqkbnr/pp1ppppp/2p5/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
            -8,
        ),
        rated(
            "Scandinavian Defense",
            "1 e4 d5",
            "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
            10,
        ),
        rated(
            "Queen's Pawn",
            "1 d4",
            "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq - 0 1",
            0,
        ),
        rated(
            "Queen's Gambit",
            "1 d4 d5 2 c4",
            "rnbqkbnr/ppp1pppp/8/3p4/2PP4/8/PP2PPPP/RNBQKBNR b KQkq - 0 2",
            12,
        ),
        OpeningRecord::new(
            "Unplayed Line",
            "1 b3".parse().unwrap(),
            "rnbqkbnr/pppppppp/8/8/8/1P6/P1PPPPPP/RNBQKBNR b KQkq - 0 1",
            0,
            0,
            0,
        ),
    ])
}
