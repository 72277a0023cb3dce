// Property tests for the alpha runtime statistics aggregate

use alpha_stats::events::AlphaEvent;
use alpha_stats::score::Score;
use alpha_stats::statistics::RuntimeStatistics;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn direction() -> impl Strategy<Value = f64> {
    -1.0f64..=1.0
}

fn magnitude() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

fn estimated_value() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

// Includes out-of-range inputs and out-of-order lifecycle events
fn any_event() -> impl Strategy<Value = AlphaEvent> {
    prop_oneof![
        Just(AlphaEvent::Generated),
        (-2.0f64..2.0, -100i64..1000).prop_map(|(direction, value)| AlphaEvent::Closed {
            direction,
            estimated_value: Decimal::from(value),
        }),
        (-2.0f64..2.0, -1.0f64..2.0).prop_map(|(d, m)| AlphaEvent::AnalysisCompleted {
            score: Score::new(d, m),
        }),
    ]
}

proptest! {
    #[test]
    fn prop_ratio_is_one_without_shorts(
        closes in prop::collection::vec((0.0f64..=1.0, estimated_value()), 0..50)
    ) {
        let mut stats = RuntimeStatistics::new();
        for (direction, value) in closes {
            stats.record_generated();
            stats.record_closed(direction, value).unwrap();
        }
        prop_assert_eq!(stats.short_count(), 0);
        prop_assert_eq!(stats.long_short_ratio(), Decimal::ONE);
        let snapshot = stats.snapshot("$");
        prop_assert_eq!(snapshot.get("Long/Short Ratio"), Some("100.00%"));
    }

    #[test]
    fn prop_mean_value_zero_without_closes(generated in 0usize..100) {
        let mut stats = RuntimeStatistics::new();
        for _ in 0..generated {
            stats.record_generated();
        }
        prop_assert_eq!(stats.mean_estimated_value(), Decimal::ZERO);
    }

    #[test]
    fn prop_first_score_seeds_both_accumulators(d in direction(), m in magnitude()) {
        let mut stats = RuntimeStatistics::new();
        stats.record_generated();
        stats.record_closed(d, Decimal::ONE).unwrap();
        stats.record_analysis_completed(Score::new(d, m)).unwrap();

        prop_assert_eq!(stats.mean_population_score(), Score::new(d, m));
        prop_assert_eq!(stats.rolling_population_score(), Score::new(d, m));
    }

    #[test]
    fn prop_constant_input_is_fixed_point(d in direction(), m in magnitude(), n in 1usize..300) {
        let mut stats = RuntimeStatistics::new();
        let score = Score::new(d, m);
        for _ in 0..n {
            stats.record_generated();
            stats.record_closed(d, Decimal::ONE).unwrap();
            stats.record_analysis_completed(score).unwrap();
        }

        prop_assert_eq!(stats.mean_population_score(), score);
        prop_assert_eq!(stats.rolling_population_score(), score);
    }

    #[test]
    fn prop_counters_monotone_and_ordered(events in prop::collection::vec(any_event(), 0..200)) {
        let mut stats = RuntimeStatistics::new();
        let mut previous = stats.clone();

        for event in &events {
            let _ = stats.update(event);

            prop_assert!(stats.total_generated() >= previous.total_generated());
            prop_assert!(stats.total_closed() >= previous.total_closed());
            prop_assert!(stats.total_analysis_completed() >= previous.total_analysis_completed());
            prop_assert!(stats.long_count() >= previous.long_count());
            prop_assert!(stats.short_count() >= previous.short_count());
            prop_assert!(stats.total_estimated_value() >= previous.total_estimated_value());

            prop_assert!(stats.total_analysis_completed() <= stats.total_closed());
            prop_assert!(stats.total_closed() <= stats.total_generated());
            prop_assert_eq!(stats.long_count() + stats.short_count(), stats.total_closed());

            let mean = stats.mean_population_score();
            prop_assert!((-1.0..=1.0).contains(&mean.direction));
            prop_assert!(mean.magnitude >= 0.0);

            previous = stats.clone();
        }
    }
}
