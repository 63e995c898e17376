//! Side-directed ranking of a filtered view.

use std::cmp::Ordering;

use crate::dataset::FilteredView;
use crate::record::{OpeningRecord, Side};

/// The top `n` qualifying records with their weighted win rates.
///
/// White ranks descending (most positive first), Black ascending (most
/// negative first). Equal rates fall back to lexical name order, so
/// the listing never depends on dataset input order. Records with no
/// recorded games have no rate and are left out; `n` beyond the
/// qualifying count just returns everything.
pub fn top<'a>(view: &FilteredView<'a>, side: Side, n: usize) -> Vec<(&'a OpeningRecord, f64)> {
    let mut ranked: Vec<(&OpeningRecord, f64)> = view
        .iter()
        .filter_map(|r| r.weighted_win_rate().ok().map(|rate| (r, rate)))
        .collect();

    ranked.sort_by(|a, b| {
        let by_rate = a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal);
        let directed = match side {
            Side::White => by_rate.reverse(),
            Side::Black => by_rate,
        };
        directed.then_with(|| a.0.name().cmp(b.0.name()))
    });

    ranked.truncate(n);
    ranked
}

/// The single best opening for a side, if any record qualifies.
pub fn best<'a>(view: &FilteredView<'a>, side: Side) -> Option<(&'a OpeningRecord, f64)> {
    top(view, side, 1).into_iter().next()
}
