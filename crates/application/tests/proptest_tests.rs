//! Property-based tests for forecast aggregation and report building
//!
//! These tests use proptest to verify invariants across many random inputs.

use application::ports::{CurrentObservation, ForecastSample, ForecastSeries};
use application::services::{aggregate, build_report};
use domain::{CityName, ConditionIcon, FORECAST_DAYS, UvIndex};
use proptest::prelude::*;

// 2024-09-21 00:00:00 UTC
const BASE: i64 = 1_726_876_800;

const CATEGORIES: [&str; 6] = ["Clear", "Clouds", "Rain", "Snow", "Mist", "Tornado"];

fn arb_temp() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        3 => (-40.0f64..45.0f64).prop_map(Some),
        1 => Just(None),
        1 => Just(Some(f64::NAN)),
    ]
}

fn arb_sample() -> impl Strategy<Value = ForecastSample> {
    (
        0i64..(8 * 86_400),
        arb_temp(),
        arb_temp(),
        arb_temp(),
        proptest::option::of(0usize..CATEGORIES.len()),
        proptest::option::of("[a-z ]{0,12}"),
    )
        .prop_map(|(offset, temperature, temp_min, temp_max, category, description)| {
            ForecastSample {
                timestamp: BASE + offset,
                temperature,
                temp_min,
                temp_max,
                category: category.map(|i| CATEGORIES[i].to_string()),
                description,
            }
        })
}

fn arb_offset() -> impl Strategy<Value = i32> {
    -12 * 3_600..=14 * 3_600
}

// ============================================================================
// Aggregation Property Tests
// ============================================================================

mod aggregation_tests {
    use super::*;

    proptest! {
        #[test]
        fn always_five_days(
            samples in prop::collection::vec(arb_sample(), 0..64),
            offset in arb_offset()
        ) {
            let week = aggregate(&samples, offset, BASE);
            prop_assert_eq!(week.len(), FORECAST_DAYS);
        }

        #[test]
        fn min_never_exceeds_max(
            samples in prop::collection::vec(arb_sample(), 0..64),
            offset in arb_offset()
        ) {
            for day in aggregate(&samples, offset, BASE) {
                if let (Some(min), Some(max)) = (day.min_temp, day.max_temp) {
                    prop_assert!(min <= max, "{} > {} on {}", min, max, day.day_name);
                }
            }
        }

        #[test]
        fn aggregation_is_idempotent(
            samples in prop::collection::vec(arb_sample(), 0..64),
            offset in arb_offset()
        ) {
            prop_assert_eq!(
                aggregate(&samples, offset, BASE),
                aggregate(&samples, offset, BASE)
            );
        }

        #[test]
        fn real_days_precede_placeholders(
            samples in prop::collection::vec(arb_sample(), 0..64),
            offset in arb_offset()
        ) {
            let week = aggregate(&samples, offset, BASE);
            let first_placeholder = week
                .iter()
                .position(domain::DayForecast::is_placeholder)
                .unwrap_or(week.len());
            prop_assert!(week[first_placeholder..].iter().all(domain::DayForecast::is_placeholder));
        }

        #[test]
        fn real_days_are_chronological(
            samples in prop::collection::vec(arb_sample(), 1..64),
            offset in arb_offset()
        ) {
            let dates: Vec<_> = aggregate(&samples, offset, BASE)
                .into_iter()
                .filter_map(|d| d.date)
                .collect();
            prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn placeholders_have_unknown_icon(
            samples in prop::collection::vec(arb_sample(), 0..16),
            offset in arb_offset()
        ) {
            for day in aggregate(&samples, offset, BASE) {
                if day.is_placeholder() {
                    prop_assert_eq!(day.icon, ConditionIcon::Unknown);
                    prop_assert_eq!(day.min_temp, None);
                }
            }
        }
    }

    #[test]
    fn clouds_clouds_rain_rain_picks_clouds() {
        let samples: Vec<_> = ["Clouds", "Clouds", "Rain", "Rain"]
            .iter()
            .enumerate()
            .map(|(i, category)| ForecastSample {
                timestamp: BASE + i64::try_from(i).unwrap() * 10_800,
                temperature: Some(12.0),
                category: Some((*category).to_string()),
                ..ForecastSample::default()
            })
            .collect();

        let week = aggregate(&samples, 0, BASE);
        assert_eq!(week[0].icon, ConditionIcon::from_category(Some("Clouds")));
    }

    #[test]
    fn three_days_pad_to_five() {
        let samples: Vec<_> = (0..3)
            .map(|day| ForecastSample {
                timestamp: BASE + day * 86_400 + 43_200,
                temperature: Some(15.0),
                category: Some("Clear".to_string()),
                ..ForecastSample::default()
            })
            .collect();

        let week = aggregate(&samples, 0, BASE);
        assert_eq!(week.len(), 5);
        assert!(week[..3].iter().all(|d| !d.is_placeholder()));
        assert!(week[3..].iter().all(domain::DayForecast::is_placeholder));
    }
}

// ============================================================================
// Report Property Tests
// ============================================================================

mod report_tests {
    use super::*;

    fn arb_observation() -> impl Strategy<Value = CurrentObservation> {
        (arb_temp(), arb_temp(), arb_temp(), arb_temp(), proptest::option::of(0.0f64..=100.0f64))
            .prop_map(|(temperature, feels_like, temp_min, temp_max, cloud_cover)| {
                CurrentObservation {
                    temperature,
                    feels_like,
                    temp_min,
                    temp_max,
                    cloud_cover,
                    humidity: Some(55.0),
                    ..CurrentObservation::default()
                }
            })
    }

    proptest! {
        #[test]
        fn numbers_are_finite_or_unknown(current in arb_observation()) {
            let city = CityName::new("Paris").unwrap();
            let report = build_report(&city, &current, &ForecastSeries::default(), BASE);
            if let Some(avg) = report.current.average_temp {
                prop_assert!(avg.is_finite());
            }
            if let Some(p) = report.current.pressure {
                prop_assert!(p.is_finite());
            }
        }

        #[test]
        fn uv_known_only_with_cloud_cover_and_a_temperature(current in arb_observation()) {
            let city = CityName::new("Paris").unwrap();
            let report = build_report(&city, &current, &ForecastSeries::default(), BASE);
            let has_temp = current.temp_max.is_some_and(f64::is_finite)
                || current.temperature.is_some_and(f64::is_finite);
            prop_assert_eq!(
                report.current.uv_index_estimate.is_some(),
                has_temp && current.cloud_cover.is_some()
            );
            if let Some(uv) = report.current.uv_index_estimate {
                prop_assert!([2, 4, 6, 8].contains(&UvIndex::value(uv)));
            }
        }

        #[test]
        fn average_known_iff_both_extremes_known(current in arb_observation()) {
            let city = CityName::new("Paris").unwrap();
            let report = build_report(&city, &current, &ForecastSeries::default(), BASE);
            let both = current.temp_min.is_some_and(f64::is_finite)
                && current.temp_max.is_some_and(f64::is_finite);
            prop_assert_eq!(report.current.average_temp.is_some(), both);
        }
    }
}
