//! Display rounding helpers for statistics output

use rust_decimal::prelude::*;

pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 7;

const DECIMAL_PERCENT_LIMIT: f64 = 1e15;

/// Adaptive-precision rounding parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmartRounding {
    pub significant_digits: u32,
    pub integer_threshold: Decimal, // above this magnitude, round to whole units
}

impl Default for SmartRounding {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            integer_threshold: Decimal::ONE_THOUSAND,
        }
    }
}

impl SmartRounding {
    pub fn new(significant_digits: u32, integer_threshold: Decimal) -> Self {
        Self {
            significant_digits: significant_digits.max(1),
            integer_threshold: integer_threshold.abs(),
        }
    }

    /// Large values keep integer precision, small values keep a fixed number
    /// of significant digits. Trailing zeros are always trimmed.
    pub fn round(&self, value: Decimal) -> Decimal {
        let value = value.normalize();
        if value.abs() > self.integer_threshold {
            return value.round().normalize();
        }
        value
            .round_sf(self.significant_digits)
            .unwrap_or(value)
            .normalize()
    }
}

/// Round with the default parameters (7 significant digits, integers above 1000)
pub fn smart_round(value: Decimal) -> Decimal {
    SmartRounding::default().round(value)
}

/// Format a fraction as a percentage with exactly `decimals` places, e.g. `0.25 -> "25.00%"`
pub fn format_percent(fraction: f64, decimals: u32) -> String {
    let percent = fraction * 100.0;
    match Decimal::from_f64(percent) {
        Some(value) if percent.abs() < DECIMAL_PERCENT_LIMIT => {
            format_decimal_percent(value, decimals)
        }
        // too large for a decimal with `decimals` places
        _ => format!("{:.*}%", decimals as usize, percent),
    }
}

/// Same as [`format_percent`] for a fraction already held as a decimal
pub fn format_decimal_fraction(fraction: Decimal, decimals: u32) -> String {
    format_decimal_percent(fraction * Decimal::ONE_HUNDRED, decimals)
}

fn format_decimal_percent(percent: Decimal, decimals: u32) -> String {
    let mut rounded = percent.round_dp(decimals);
    if rounded.is_zero() {
        // no "-0.0000%"
        rounded = Decimal::ZERO;
    }
    rounded.rescale(decimals);
    format!("{}%", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_smart_round_whole_value() {
        assert_eq!(smart_round(dec!(500)).to_string(), "500");
        assert_eq!(smart_round(dec!(500.000)).to_string(), "500");
    }

    #[test]
    fn test_smart_round_keeps_seven_significant_digits() {
        let mean = dec!(500) / dec!(7);
        assert_eq!(smart_round(mean), dec!(71.42857));
        assert_eq!(smart_round(dec!(0.000123456789)), dec!(0.0001234568));
    }

    #[test]
    fn test_smart_round_large_values_to_integer() {
        assert_eq!(smart_round(dec!(1234.5)), dec!(1234)); // ties to even
        assert_eq!(smart_round(dec!(1235.5)), dec!(1236));
        assert_eq!(smart_round(dec!(-25000.75)), dec!(-25001));
    }

    #[test]
    fn test_smart_round_below_threshold_keeps_decimals() {
        assert_eq!(smart_round(dec!(999.87654321)), dec!(999.8765));
        assert_eq!(smart_round(dec!(1000)).to_string(), "1000");
    }

    #[test]
    fn test_smart_round_zero() {
        assert_eq!(smart_round(Decimal::ZERO).to_string(), "0");
    }

    #[test]
    fn test_format_percent_fixed_places() {
        assert_eq!(format_percent(0.0, 4), "0.0000%");
        assert_eq!(format_percent(0.5, 4), "50.0000%");
        assert_eq!(format_percent(-1.0 / 7.0, 4), "-14.2857%");
        assert_eq!(format_decimal_fraction(dec!(2.5), 2), "250.00%");
        assert_eq!(format_decimal_fraction(Decimal::ONE, 2), "100.00%");
    }

    #[test]
    fn test_format_percent_beyond_decimal_range() {
        let text = format_percent(1e27, 4);
        assert!(text.starts_with("100000000000000009"), "got {}", text);
        assert!(text.ends_with(".0000%"));

        assert_eq!(format_percent(1e14, 2), "10000000000000000.00%");
    }

    #[test]
    fn test_format_percent_no_negative_zero() {
        assert_eq!(format_percent(-0.0, 4), "0.0000%");
        assert_eq!(format_percent(-1e-9, 4), "0.0000%");
    }
}
