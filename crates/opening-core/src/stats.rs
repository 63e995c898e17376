//! Distribution statistics over a filtered view.

use crate::dataset::FilteredView;
use crate::error::QueryError;
use crate::rank;
use crate::record::{OpeningRecord, Side};

/// Below this, a standard deviation counts as zero for z-factor
/// purposes, so identical-rate views fail cleanly instead of emitting
/// inf/NaN from float dust.
const STDDEV_EPSILON: f64 = 1e-9;

/// Count, mean, and standard deviation of weighted win rates over the
/// qualifying records of one view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub stddev: f64,
}

impl Summary {
    /// Degenerate summary: nothing qualified, mean/stddev carry no
    /// information and must not be plotted or z-scored against.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// The weighted win rates of every qualifying record, in view order.
/// This is the raw series a histogram renderer consumes.
pub fn win_rates(view: &FilteredView) -> Vec<f64> {
    view.iter()
        .filter_map(|r| r.weighted_win_rate().ok())
        .collect()
}

/// Summarize the view's qualifying records (`total_games > 0`).
///
/// The standard deviation is the population form (denominator = count):
/// the view is the entire population under the active boundaries, not
/// a sample drawn from one.
pub fn summarize(view: &FilteredView) -> Summary {
    let rates = win_rates(view);
    let count = rates.len();
    if count == 0 {
        return Summary {
            count: 0,
            mean: 0.0,
            stddev: 0.0,
        };
    }

    let n = count as f64;
    let mean = rates.iter().sum::<f64>() / n;
    let variance = rates.iter().map(|rate| (rate - mean).powi(2)).sum::<f64>() / n;

    Summary {
        count,
        mean,
        stddev: variance.sqrt(),
    }
}

/// How many standard deviations a record's rate sits from the view
/// mean. Signed: above the mean is positive, below is negative.
pub fn z_factor(record: &OpeningRecord, summary: &Summary) -> Result<f64, QueryError> {
    let rate = record.weighted_win_rate()?;
    if summary.stddev < STDDEV_EPSILON {
        return Err(QueryError::UndefinedZFactor);
    }
    Ok((rate - summary.mean) / summary.stddev)
}

/// One side's best opening with its rate and signed z-factor.
#[derive(Debug, Clone, Copy)]
pub struct ZScored<'a> {
    pub record: &'a OpeningRecord,
    pub rate: f64,
    pub z_factor: f64,
}

/// Best opening for each side over the same view.
///
/// Black's z-factor comes out negative (its best rate sits below the
/// mean); presentation reports the magnitude as "standard deviations
/// away".
#[derive(Debug, Clone, Copy)]
pub struct BestBySide<'a> {
    pub white: ZScored<'a>,
    pub black: ZScored<'a>,
}

pub fn best_by_side<'a>(view: &FilteredView<'a>) -> Result<BestBySide<'a>, QueryError> {
    let summary = summarize(view);
    let (white, white_rate) = rank::best(view, Side::White).ok_or(QueryError::EmptyView)?;
    let (black, black_rate) = rank::best(view, Side::Black).ok_or(QueryError::EmptyView)?;

    Ok(BestBySide {
        white: ZScored {
            record: white,
            rate: white_rate,
            z_factor: z_factor(white, &summary)?,
        },
        black: ZScored {
            record: black,
            rate: black_rate,
            z_factor: z_factor(black, &summary)?,
        },
    })
}
