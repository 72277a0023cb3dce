//! Alpha score value type
//!
//! A score pairs the net directional conviction of an alpha with the
//! confidence in the size of the predicted move.

use crate::error::{StatisticsError, StatisticsResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Score {
    pub direction: f64, // -1 (down) to +1 (up)
    pub magnitude: f64, // non-negative move size confidence
}

impl Score {
    pub const ZERO: Score = Score {
        direction: 0.0,
        magnitude: 0.0,
    };

    pub fn new(direction: f64, magnitude: f64) -> Self {
        Self {
            direction,
            magnitude,
        }
    }

    /// Build a score, rejecting values outside the valid ranges
    pub fn checked(direction: f64, magnitude: f64) -> StatisticsResult<Self> {
        let score = Self::new(direction, magnitude);
        score.validate()?;
        Ok(score)
    }

    pub fn validate(&self) -> StatisticsResult<()> {
        validate_direction(self.direction)?;
        validate_magnitude(self.magnitude)
    }

    /// Long bias: neutral (zero) direction counts as long
    pub fn is_long(&self) -> bool {
        self.direction >= 0.0
    }
}

pub(crate) fn validate_direction(direction: f64) -> StatisticsResult<()> {
    if !direction.is_finite() {
        return Err(invalid("direction", direction, "must be finite"));
    }
    if !(-1.0..=1.0).contains(&direction) {
        return Err(invalid("direction", direction, "must be within [-1, 1]"));
    }
    Ok(())
}

pub(crate) fn validate_magnitude(magnitude: f64) -> StatisticsResult<()> {
    if !magnitude.is_finite() {
        return Err(invalid("magnitude", magnitude, "must be finite"));
    }
    if magnitude < 0.0 {
        return Err(invalid("magnitude", magnitude, "must be non-negative"));
    }
    Ok(())
}

fn invalid(field: &'static str, value: f64, reason: &'static str) -> StatisticsError {
    StatisticsError::InvalidScoreInput {
        field,
        value: value.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_accepts_bounds() {
        assert!(Score::checked(-1.0, 0.0).is_ok());
        assert!(Score::checked(1.0, 3.5).is_ok());
        assert!(Score::checked(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        let err = Score::checked(1.5, 0.2).unwrap_err();
        assert!(matches!(
            err,
            StatisticsError::InvalidScoreInput {
                field: "direction",
                ..
            }
        ));

        let err = Score::checked(0.5, -0.1).unwrap_err();
        assert!(matches!(
            err,
            StatisticsError::InvalidScoreInput {
                field: "magnitude",
                ..
            }
        ));
    }

    #[test]
    fn test_checked_rejects_nan() {
        assert!(Score::checked(f64::NAN, 0.5).is_err());
        assert!(Score::checked(0.5, f64::INFINITY).is_err());
    }

    #[test]
    fn test_neutral_direction_is_long() {
        assert!(Score::new(0.0, 0.4).is_long());
        assert!(!Score::new(-0.01, 0.4).is_long());
    }
}
