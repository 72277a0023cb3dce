//! Alpha population runtime statistics
//!
//! `RuntimeStatistics` aggregates lifecycle counts, direction bias, estimated
//! value and smoothed scores for every alpha produced during a run.
//! `SharedRuntimeStatistics` wraps it in a single exclusive lock so the
//! pipeline and a reporting task can share it.

use crate::accumulators::{CumulativeMean, ExponentialMovingAverage};
use crate::error::{StatisticsError, StatisticsResult};
use crate::events::AlphaEvent;
use crate::rounding::{SmartRounding, format_decimal_fraction, format_percent};
use crate::score::{Score, validate_direction};
use crate::snapshot::{Snapshot, labels};
use log::{debug, warn};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeStatistics {
    mean_population_score: CumulativeMean,
    rolling_population_score: ExponentialMovingAverage,
    long_count: u64,
    short_count: u64,
    total_estimated_value: Decimal,
    total_generated: u64,
    total_closed: u64,
    total_analysis_completed: u64,
}

impl RuntimeStatistics {
    /// Fresh aggregate with the default 100-alpha rolling window
    pub fn new() -> Self {
        Self::with_rolling_window(ExponentialMovingAverage::DEFAULT_WINDOW)
    }

    pub fn with_rolling_window(window: usize) -> Self {
        Self {
            mean_population_score: CumulativeMean::new(),
            rolling_population_score: ExponentialMovingAverage::new(window),
            long_count: 0,
            short_count: 0,
            total_estimated_value: Decimal::ZERO,
            total_generated: 0,
            total_closed: 0,
            total_analysis_completed: 0,
        }
    }

    pub fn record_generated(&mut self) {
        self.total_generated += 1;
        debug!("Alpha generated (total {})", self.total_generated);
    }

    /// Record a closed alpha. A zero direction is counted as long.
    pub fn record_closed(
        &mut self,
        direction: f64,
        estimated_value: Decimal,
    ) -> StatisticsResult<()> {
        validate_direction(direction)?;
        if estimated_value < Decimal::ZERO {
            return Err(StatisticsError::InvalidScoreInput {
                field: "estimated_value",
                value: estimated_value.to_string(),
                reason: "must be non-negative",
            });
        }
        check_lifecycle("closed", self.total_closed + 1, self.total_generated)?;
        let total_estimated_value = self
            .total_estimated_value
            .checked_add(estimated_value)
            .ok_or_else(|| StatisticsError::AccumulatorOverflow {
                field: "total_estimated_value",
                value: estimated_value.to_string(),
            })?;

        self.total_closed += 1;
        self.total_estimated_value = total_estimated_value;
        if direction >= 0.0 {
            self.long_count += 1;
        } else {
            self.short_count += 1;
        }

        debug!(
            "Alpha closed: direction={:.4}, value={} (closed {}, long {}, short {})",
            direction, estimated_value, self.total_closed, self.long_count, self.short_count
        );
        Ok(())
    }

    pub fn record_analysis_completed(&mut self, score: Score) -> StatisticsResult<()> {
        score.validate()?;
        check_lifecycle(
            "analysis completed",
            self.total_analysis_completed + 1,
            self.total_closed,
        )?;

        self.total_analysis_completed += 1;
        self.mean_population_score.update(score);
        self.rolling_population_score.update(score);

        debug!(
            "Alpha analysis completed: direction={:.4}, magnitude={:.4} (completed {})",
            score.direction, score.magnitude, self.total_analysis_completed
        );
        Ok(())
    }

    /// Apply a single lifecycle event
    pub fn update(&mut self, event: &AlphaEvent) -> StatisticsResult<()> {
        match event {
            AlphaEvent::Generated => {
                self.record_generated();
                Ok(())
            }
            AlphaEvent::Closed {
                direction,
                estimated_value,
            } => self.record_closed(*direction, *estimated_value),
            AlphaEvent::AnalysisCompleted { score } => self.record_analysis_completed(*score),
        }
    }

    /// Long over short count; 1 until the first short is seen
    pub fn long_short_ratio(&self) -> Decimal {
        if self.short_count == 0 {
            return Decimal::ONE;
        }
        Decimal::from(self.long_count) / Decimal::from(self.short_count)
    }

    pub fn mean_estimated_value(&self) -> Decimal {
        if self.total_closed == 0 {
            return Decimal::ZERO;
        }
        self.total_estimated_value / Decimal::from(self.total_closed)
    }

    pub fn mean_population_score(&self) -> Score {
        self.mean_population_score.value()
    }

    pub fn rolling_population_score(&self) -> Score {
        self.rolling_population_score.value()
    }

    pub fn rolling_window(&self) -> usize {
        self.rolling_population_score.window()
    }

    pub fn long_count(&self) -> u64 {
        self.long_count
    }

    pub fn short_count(&self) -> u64 {
        self.short_count
    }

    pub fn total_estimated_value(&self) -> Decimal {
        self.total_estimated_value
    }

    pub fn total_generated(&self) -> u64 {
        self.total_generated
    }

    pub fn total_closed(&self) -> u64 {
        self.total_closed
    }

    pub fn total_analysis_completed(&self) -> u64 {
        self.total_analysis_completed
    }

    /// Labeled, display-formatted view of the current state
    pub fn snapshot(&self, currency_symbol: &str) -> Snapshot {
        self.snapshot_with(currency_symbol, &SmartRounding::default())
    }

    pub fn snapshot_with(&self, currency_symbol: &str, rounding: &SmartRounding) -> Snapshot {
        let mean = self.mean_population_score();
        let rolling = self.rolling_population_score();

        let mut snapshot = Snapshot::with_capacity(labels::ALL.len());
        snapshot.push(labels::TOTAL_GENERATED, self.total_generated.to_string());
        snapshot.push(labels::TOTAL_CLOSED, self.total_closed.to_string());
        snapshot.push(
            labels::TOTAL_ANALYSIS_COMPLETED,
            self.total_analysis_completed.to_string(),
        );
        snapshot.push(labels::LONG_COUNT, self.long_count.to_string());
        snapshot.push(labels::SHORT_COUNT, self.short_count.to_string());
        snapshot.push(
            labels::LONG_SHORT_RATIO,
            format_decimal_fraction(self.long_short_ratio(), 2),
        );
        snapshot.push(
            labels::TOTAL_ESTIMATED_VALUE,
            format!(
                "{}{}",
                currency_symbol,
                rounding.round(self.total_estimated_value)
            ),
        );
        snapshot.push(
            labels::MEAN_ESTIMATED_VALUE,
            format!(
                "{}{}",
                currency_symbol,
                rounding.round(self.mean_estimated_value())
            ),
        );
        snapshot.push(labels::MEAN_DIRECTION, format_percent(mean.direction, 4));
        snapshot.push(labels::MEAN_MAGNITUDE, format_percent(mean.magnitude, 4));
        snapshot.push(labels::ROLLING_DIRECTION, format_percent(rolling.direction, 4));
        snapshot.push(labels::ROLLING_MAGNITUDE, format_percent(rolling.magnitude, 4));
        snapshot
    }
}

impl Default for RuntimeStatistics {
    fn default() -> Self {
        Self::new()
    }
}

fn check_lifecycle(event: &'static str, attempted: u64, limit: u64) -> StatisticsResult<()> {
    if attempted > limit {
        return Err(StatisticsError::LifecycleOutOfOrder {
            event,
            attempted,
            limit,
        });
    }
    Ok(())
}

/// Lock-guarded handle shared between the pipeline and reporting paths.
///
/// Every update and every read takes the same exclusive lock, so a snapshot
/// never observes a half-applied score update.
#[derive(Debug, Clone, Default)]
pub struct SharedRuntimeStatistics {
    inner: Arc<Mutex<RuntimeStatistics>>,
}

impl SharedRuntimeStatistics {
    pub fn new(statistics: RuntimeStatistics) -> Self {
        Self {
            inner: Arc::new(Mutex::new(statistics)),
        }
    }

    pub fn record_generated(&self) {
        self.inner.lock().record_generated();
    }

    pub fn record_closed(&self, direction: f64, estimated_value: Decimal) -> StatisticsResult<()> {
        self.inner.lock().record_closed(direction, estimated_value)
    }

    pub fn record_analysis_completed(&self, score: Score) -> StatisticsResult<()> {
        self.inner.lock().record_analysis_completed(score)
    }

    pub fn update(&self, event: &AlphaEvent) -> StatisticsResult<()> {
        let result = self.inner.lock().update(event);
        if let Err(e) = &result {
            warn!("Rejected alpha event {:?}: {}", event, e);
        }
        result
    }

    pub fn snapshot(&self, currency_symbol: &str) -> Snapshot {
        self.inner.lock().snapshot(currency_symbol)
    }

    pub fn snapshot_with(&self, currency_symbol: &str, rounding: &SmartRounding) -> Snapshot {
        self.inner.lock().snapshot_with(currency_symbol, rounding)
    }

    /// Consistent copy of the whole aggregate
    pub fn read(&self) -> RuntimeStatistics {
        self.inner.lock().clone()
    }
}
