//! Query engine for a static dataset of chess opening statistics.
//!
//! A [`Dataset`] is loaded once (see [`ingest`]) and never mutated;
//! every query runs against a [`FilteredView`] selected by [`Bounds`].
//! Statistics, ranking, and resolution are plain synchronous functions
//! over that view — no I/O, no shared mutable state.

pub mod dataset;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod notation;
pub mod rank;
pub mod record;
pub mod resolve;
pub mod stats;

pub use dataset::{Dataset, FilteredView};
pub use error::{LoadError, QueryError};
pub use filter::{Bounds, DepthUnit};
pub use notation::MoveSequence;
pub use record::{OpeningRecord, Side};
