//! Console rendering of query results.
//!
//! The query engine hands over records and numeric series; everything
//! about how they look on screen lives here.

use opening_core::stats::{BestBySide, Summary};
use opening_core::{rank, Bounds, DepthUnit, FilteredView, OpeningRecord, Side};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, Position, Square};

const RULE_WIDTH: usize = 64;
const NAME_WIDTH: usize = 44;
const BIN_WIDTH: f64 = 2.0;
const BAR_WIDTH: usize = 48;

/// Banner printed whenever the active boundaries (re)select a view.
pub fn view_banner(bounds: &Bounds, admitted: usize) {
    let mut parts = Vec::new();
    if bounds.min_games > 0 {
        parts.push(format!("at least {} games", bounds.min_games));
    }
    if bounds.max_moves != usize::MAX {
        let unit = match bounds.depth_unit {
            DepthUnit::FullMoves => "moves",
            DepthUnit::Plies => "plies",
        };
        parts.push(format!("at most {} {unit}", bounds.max_moves));
    }
    if !bounds.root_prefix.is_empty() {
        parts.push(format!("starting {}", bounds.root_prefix));
    }
    let described = if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    };

    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Boundaries: {described}");
    println!("Openings within the boundaries: {admitted}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Text histogram of the rate series, bin width 2 percentage points.
pub fn histogram(rates: &[f64], summary: &Summary) {
    let (origin, counts) = bin_counts(rates);
    let peak = counts.iter().max().copied().unwrap_or(0).max(1);

    println!();
    println!("Weighted win rate distribution:");
    for (i, count) in counts.iter().enumerate() {
        let from = origin + i as f64 * BIN_WIDTH;
        let to = from + BIN_WIDTH;
        let bar = "#".repeat(count * BAR_WIDTH / peak);
        println!("{from:>7.1} .. {to:>7.1} | {count:>6} | {bar}");
    }
    println!();
    println!("Openings counted: {}", summary.count);
    println!("Rounded mean: {:.0}", summary.mean);
    println!("Rounded standard deviation: {:.0}", summary.stddev);
}

/// Bin origin (lowest edge) and per-bin counts for the histogram.
fn bin_counts(rates: &[f64]) -> (f64, Vec<usize>) {
    if rates.is_empty() {
        return (0.0, Vec::new());
    }
    let min = rates.iter().copied().fold(f64::INFINITY, f64::min);
    let max = rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let origin = (min / BIN_WIDTH).floor() * BIN_WIDTH;
    let bins = ((max - origin) / BIN_WIDTH).floor() as usize + 1;
    let mut counts = vec![0usize; bins];
    for rate in rates {
        let index = (((rate - origin) / BIN_WIDTH) as usize).min(bins - 1);
        counts[index] += 1;
    }
    (origin, counts)
}

/// Top-N table for one side, plus the single best name.
pub fn ranking_table(view: &FilteredView, side: Side, n: usize) {
    let ranked = rank::top(view, side, n);
    if ranked.is_empty() {
        println!("No opening in the current boundaries has any recorded games.");
        return;
    }

    println!();
    println!("Best openings for {side} (top {}):", ranked.len());
    for (i, (record, rate)) in ranked.iter().enumerate() {
        println!(
            "{:>4}. {:<44} {rate:>+7.1}",
            i + 1,
            shorten(record.name(), NAME_WIDTH),
        );
    }

    if let Some((best, _)) = ranked.first() {
        println!();
        println!("Best opening for {side}: {}", best.name());
    }
}

/// Each side's best opening with how far it sits from the view mean.
pub fn z_report(best: &BestBySide) {
    println!();
    println!(
        "Best for White: {} ({:+.1})",
        best.white.record.name(),
        best.white.rate
    );
    println!(
        "  {:+.2} standard deviations from the view mean",
        best.white.z_factor
    );
    println!(
        "Best for Black: {} ({:+.1})",
        best.black.record.name(),
        best.black.rate
    );
    println!(
        "  {:.2} standard deviations away from the view mean",
        best.black.z_factor.abs()
    );
}

/// Full record printout with the position diagram.
pub fn stats_card(record: &OpeningRecord) {
    let total = record.total_games();

    println!();
    println!("{}", "-".repeat(RULE_WIDTH));
    println!("Name:        {}", record.name());
    println!("Moves:       {}", record.moves());
    println!("FEN:         {}", record.fen());
    println!("Total games: {total}");
    println!("White wins:  {}", count_with_share(record.white_wins(), total));
    println!("Draws:       {}", count_with_share(record.draws(), total));
    println!("Black wins:  {}", count_with_share(record.black_wins(), total));
    match record.weighted_win_rate() {
        Ok(rate) => println!("Weighted win rate: {rate:+.1} ({})", leaning(rate)),
        Err(_) => println!("Weighted win rate: undefined (no recorded games)"),
    }
    match side_to_move(record.fen()) {
        Some(Color::Black) => println!("Black to move next: this is an opening for White."),
        Some(Color::White) => println!("White to move next: this is an opening for Black."),
        None => {}
    }
    if let Some(diagram) = board_diagram(record.fen()) {
        println!();
        println!("{diagram}");
    }
    println!("{}", "-".repeat(RULE_WIDTH));
}

pub fn random_pick(record: &OpeningRecord) {
    println!();
    println!("Opening name:  {}", record.name());
    println!("Opening moves: {}", record.moves());
}

/// Whose turn the record's position is. None when the FEN does not
/// describe a legal position (possible for hand-built records; loaded
/// ones are vetted).
fn side_to_move(fen: &str) -> Option<Color> {
    Some(position(fen)?.turn())
}

/// Eight ranks of piece letters, dots for empty squares.
fn board_diagram(fen: &str) -> Option<String> {
    let pos = position(fen)?;

    let mut out = String::new();
    for rank in (0u32..8).rev() {
        out.push((b'1' + rank as u8) as char);
        for file in 0u32..8 {
            out.push(' ');
            let square = Square::new(rank * 8 + file);
            out.push(pos.board().piece_at(square).map_or('.', |piece| piece.char()));
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h");
    Some(out)
}

fn position(fen: &str) -> Option<Chess> {
    let fen: Fen = fen.parse().ok()?;
    fen.into_position::<Chess>(CastlingMode::Standard).ok()
}

fn count_with_share(count: u64, total: u64) -> String {
    if total == 0 {
        return count.to_string();
    }
    format!("{count} ({:.1}%)", count as f64 * 100.0 / total as f64)
}

fn leaning(rate: f64) -> &'static str {
    if rate > 0.0 {
        "favors White"
    } else if rate < 0.0 {
        "favors Black"
    } else {
        "balanced"
    }
}

fn shorten(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }
    let cut: String = name.chars().take(max - 3).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";

    #[test]
    fn test_board_diagram_start_position() {
        let diagram = board_diagram(START_FEN).unwrap();
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 r n b q k b n r");
        assert_eq!(lines[1], "7 p p p p p p p p");
        assert_eq!(lines[4], "4 . . . . . . . .");
        assert_eq!(lines[7], "1 R N B Q K B N R");
        assert_eq!(lines[8], "  a b c d e f g h");
    }

    #[test]
    fn test_board_diagram_reflects_played_moves() {
        let diagram = board_diagram(AFTER_E4).unwrap();
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines[4], "4 . . . . P . . .");
        assert_eq!(lines[6], "2 P P P P . P P P");
    }

    #[test]
    fn test_board_diagram_rejects_garbage() {
        assert!(board_diagram("definitely not a fen").is_none());
    }

    #[test]
    fn test_side_to_move() {
        assert_eq!(side_to_move(START_FEN), Some(Color::White));
        assert_eq!(side_to_move(AFTER_E4), Some(Color::Black));
        assert_eq!(side_to_move(""), None);
    }

    #[test]
    fn test_bin_counts_known_distribution() {
        let (origin, counts) = bin_counts(&[1.0, 1.5, 3.0, -2.0]);
        assert_eq!(origin, -2.0);
        assert_eq!(counts, [1, 2, 1]);
    }

    #[test]
    fn test_bin_counts_single_value() {
        let (origin, counts) = bin_counts(&[5.0]);
        assert_eq!(origin, 4.0);
        assert_eq!(counts.iter().sum::<usize>(), 1);
    }

    #[test]
    fn test_bin_counts_empty() {
        let (_, counts) = bin_counts(&[]);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_count_with_share() {
        assert_eq!(count_with_share(480, 1000), "480 (48.0%)");
        assert_eq!(count_with_share(0, 0), "0");
    }

    #[test]
    fn test_shorten_keeps_short_names() {
        assert_eq!(shorten("Sicilian Defense", 44), "Sicilian Defense");
        let long = "Queen's Gambit Declined: Orthodox Defense, Rubinstein Variation";
        let cut = shorten(long, 20);
        assert_eq!(cut.chars().count(), 20);
        assert!(cut.ends_with("..."));
    }
}
