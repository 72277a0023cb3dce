//! Alpha population runtime statistics
//!
//! Aggregates lifecycle counts, long/short bias, estimated value and smoothed
//! scores for the alphas produced by a signal pipeline, and renders an ordered
//! snapshot for reporting.

pub mod accumulators;
pub mod config;
pub mod currency;
pub mod error;
pub mod events;
pub mod report;
pub mod rounding;
pub mod score;
pub mod snapshot;
pub mod statistics;

// Re-export core types for easy access
pub use error::{StatisticsError, StatisticsResult};
pub use events::AlphaEvent;
pub use score::Score;
pub use snapshot::Snapshot;
pub use statistics::{RuntimeStatistics, SharedRuntimeStatistics};
