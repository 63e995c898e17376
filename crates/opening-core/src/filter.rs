//! Boundary selection: carving a filtered view out of the dataset.

use crate::dataset::{Dataset, FilteredView};
use crate::notation::MoveSequence;
use crate::record::OpeningRecord;

/// How `max_moves` counts opening depth.
///
/// The dataset's own convention is full moves, but the choice is kept
/// explicit rather than baked into the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthUnit {
    /// One White ply plus Black's reply count as a single move.
    #[default]
    FullMoves,
    /// Every half-move counts on its own.
    Plies,
}

/// The three selection boundaries.
///
/// Every default is the value that can never exclude anything (floor
/// of zero, no ceiling, empty prefix), so an absent constraint runs
/// through exactly the same predicate as a present one — adding a
/// fourth boundary later means adding a fourth conjunct, nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    /// Openings with fewer recorded games are dropped.
    pub min_games: u64,
    /// Openings deeper than this are dropped.
    pub max_moves: usize,
    pub depth_unit: DepthUnit,
    /// Only openings starting with this sequence are kept.
    pub root_prefix: MoveSequence,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            min_games: 0,
            max_moves: usize::MAX,
            depth_unit: DepthUnit::FullMoves,
            root_prefix: MoveSequence::default(),
        }
    }
}

impl Bounds {
    /// Select every record the boundaries admit.
    ///
    /// An empty result is a valid view, not an error; downstream
    /// queries decide what an empty view means for them.
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> FilteredView<'a> {
        let selected: Vec<&OpeningRecord> =
            dataset.iter().filter(|r| self.admits(r)).collect();
        tracing::debug!(
            "boundaries admit {} of {} openings",
            selected.len(),
            dataset.len()
        );
        FilteredView::new(selected)
    }

    fn admits(&self, record: &OpeningRecord) -> bool {
        record.total_games() >= self.min_games
            && self.depth(record) <= self.max_moves
            && record.moves().is_prefixed_by(&self.root_prefix)
    }

    fn depth(&self, record: &OpeningRecord) -> usize {
        match self.depth_unit {
            DepthUnit::FullMoves => record.moves().move_count(),
            DepthUnit::Plies => record.moves().ply_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::OpeningRecord;

    fn rec(name: &str, pgn: &str, games: u64) -> OpeningRecord {
        OpeningRecord::new(name, pgn.parse().unwrap(), "fen", games, 0, 0)
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            rec("King's Pawn", "1 e4", 5_000_000),
            rec("Sicilian Defense", "1 e4 c5", 1_200_000),
            rec("Open Sicilian", "1 e4 c5 2 Nf3 d6 3 d4", 400_000),
            rec("Queen's Pawn", "1 d4", 3_000_000),
            rec("Unplayed Gambit", "1 e4 e5 2 Nf3 f6", 0),
        ])
    }

    #[test]
    fn test_default_bounds_keep_whole_dataset() {
        let data = dataset();
        let view = Bounds::default().apply(&data);
        assert_eq!(view.len(), data.len());
        // Even the zero-game record stays in; statistics exclude it later.
        assert!(view.iter().any(|r| r.total_games() == 0));
    }

    #[test]
    fn test_min_games_floor() {
        let data = dataset();
        let bounds = Bounds {
            min_games: 1_000_000,
            ..Bounds::default()
        };
        let view = bounds.apply(&data);
        assert_eq!(view.len(), 3);
        assert!(view.iter().all(|r| r.total_games() >= 1_000_000));
    }

    #[test]
    fn test_min_games_is_monotonic() {
        let data = dataset();
        let mut previous = data.len();
        for floor in [0, 1, 400_000, 1_200_000, 3_000_000, u64::MAX] {
            let bounds = Bounds {
                min_games: floor,
                ..Bounds::default()
            };
            let size = bounds.apply(&data).len();
            assert!(size <= previous, "floor {floor} grew the view");
            previous = size;
        }
    }

    #[test]
    fn test_max_moves_counts_full_moves_by_default() {
        let data = dataset();
        let bounds = Bounds {
            max_moves: 1,
            ..Bounds::default()
        };
        let view = bounds.apply(&data);
        // "1 e4 c5" is one full move; the five-ply Open Sicilian is three.
        assert_eq!(view.len(), 3);
        assert!(view.iter().all(|r| r.moves().move_count() <= 1));
    }

    #[test]
    fn test_max_moves_in_plies_is_stricter() {
        let data = dataset();
        let bounds = Bounds {
            max_moves: 1,
            depth_unit: DepthUnit::Plies,
            ..Bounds::default()
        };
        let view = bounds.apply(&data);
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|r| r.moves().ply_count() <= 1));
    }

    #[test]
    fn test_root_prefix_selects_matching_lines() {
        let data = dataset();
        let bounds = Bounds {
            root_prefix: "1 e4".parse().unwrap(),
            ..Bounds::default()
        };
        let view = bounds.apply(&data);
        assert_eq!(view.len(), 4);
        assert!(view
            .iter()
            .all(|r| r.moves().is_prefixed_by(&bounds.root_prefix)));
    }

    #[test]
    fn test_boundaries_combine_with_and() {
        let data = dataset();
        let bounds = Bounds {
            min_games: 1_000_000,
            max_moves: 1,
            root_prefix: "1 e4".parse().unwrap(),
            ..Bounds::default()
        };
        let view = bounds.apply(&data);
        let names: Vec<&str> = view.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["King's Pawn", "Sicilian Defense"]);
    }

    #[test]
    fn test_unsatisfiable_bounds_give_empty_view_not_error() {
        let data = dataset();
        let bounds = Bounds {
            root_prefix: "1 Nf3".parse().unwrap(),
            ..Bounds::default()
        };
        let view = bounds.apply(&data);
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
    }
}
