//! Error types for the alpha statistics aggregator

use thiserror::Error;

/// Conditions under which an update is rejected.
///
/// A rejected update never touches the aggregate, so the caller can log it and
/// carry on with the next event.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatisticsError {
    /// A score or value handed over by the pipeline is outside its valid range
    #[error("Invalid score input: {field} = {value} ({reason})")]
    InvalidScoreInput {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value, rendered for display
        value: String,
        /// Which constraint was violated
        reason: &'static str,
    },

    /// The event would break `analysis completed <= closed <= generated`
    #[error("Lifecycle out of order: cannot record {event} ({attempted} would exceed {limit})")]
    LifecycleOutOfOrder {
        /// The lifecycle event being recorded
        event: &'static str,
        /// Counter value the event would produce
        attempted: u64,
        /// Upper bound imposed by the preceding lifecycle stage
        limit: u64,
    },

    /// Accumulating the value would exceed the representable decimal range
    #[error("Accumulator overflow: adding {value} to {field} exceeds the decimal range")]
    AccumulatorOverflow {
        /// Accumulator that would overflow
        field: &'static str,
        /// The rejected increment, rendered for display
        value: String,
    },
}

pub type StatisticsResult<T> = std::result::Result<T, StatisticsError>;
