//! Running score accumulators
//!
//! Both accumulators apply the same update independently to the direction
//! and magnitude components of a [`Score`].

use crate::score::Score;
use serde::{Deserialize, Serialize};

/// Exact cumulative arithmetic mean: `mean_n = mean_{n-1} + (x - mean_{n-1}) / n`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CumulativeMean {
    value: Score,
    count: u64,
}

impl CumulativeMean {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, score: Score) {
        self.count += 1;
        let n = self.count as f64;
        self.value.direction += (score.direction - self.value.direction) / n;
        self.value.magnitude += (score.magnitude - self.value.magnitude) / n;
    }

    pub fn value(&self) -> Score {
        self.value
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Exponential moving average with `alpha = 2 / (window + 1)`.
///
/// The first observation seeds the average directly instead of blending
/// against zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExponentialMovingAverage {
    value: Score,
    alpha: f64,
    window: usize,
    seeded: bool,
}

impl ExponentialMovingAverage {
    pub const DEFAULT_WINDOW: usize = 100;

    /// A window of zero or one tracks the latest score exactly (no smoothing)
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            value: Score::ZERO,
            alpha: 2.0 / (window as f64 + 1.0),
            window,
            seeded: false,
        }
    }

    pub fn update(&mut self, score: Score) {
        if !self.seeded || self.alpha >= 1.0 {
            self.value = score;
            self.seeded = true;
            return;
        }
        self.value.direction += self.alpha * (score.direction - self.value.direction);
        self.value.magnitude += self.alpha * (score.magnitude - self.value.magnitude);
    }

    pub fn value(&self) -> Score {
        self.value
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }
}

impl Default for ExponentialMovingAverage {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}
