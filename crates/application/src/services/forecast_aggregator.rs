//! Daily forecast aggregation
//!
//! Buckets 3-hour forecast samples into local calendar days and reduces each
//! day to a low, a high and its most frequent condition.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use domain::value_objects::temperature::{finite, whole_degrees};
use domain::{ConditionIcon, DayForecast, FORECAST_DAYS};

use crate::ports::ForecastSample;

/// Seconds in one calendar day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Occurrence counts in insertion order
#[derive(Debug, Default)]
struct Tally(Vec<(String, usize)>);

impl Tally {
    /// Blank or missing values do not vote, so a day's mode is only ever a
    /// value the provider actually reported
    fn record(&mut self, value: Option<&str>) {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return;
        };
        match self.0.iter_mut().find(|(key, _)| key == value) {
            Some((_, count)) => *count += 1,
            None => self.0.push((value.to_string(), 1)),
        }
    }

    /// Highest count; ties go to the entry tallied first
    fn mode(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.0 {
            if best.is_none_or(|b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(key, _)| key.as_str())
    }
}

/// Running state for one local day
#[derive(Debug)]
struct DayAggregate {
    day_key: i64,
    first_timestamp: i64,
    min: Option<f64>,
    max: Option<f64>,
    categories: Tally,
    descriptions: Tally,
}

impl DayAggregate {
    fn new(day_key: i64, timestamp: i64) -> Self {
        Self {
            day_key,
            first_timestamp: timestamp,
            min: None,
            max: None,
            categories: Tally::default(),
            descriptions: Tally::default(),
        }
    }

    fn add(&mut self, sample: &ForecastSample) {
        if let Some((low, high)) = sample_extremes(sample) {
            self.min = Some(self.min.map_or(low, |m| m.min(low)));
            self.max = Some(self.max.map_or(high, |m| m.max(high)));
        }
        self.first_timestamp = self.first_timestamp.min(sample.timestamp);
        self.categories.record(sample.category.as_deref());
        self.descriptions.record(sample.description.as_deref());
    }

    fn into_forecast(self, utc_offset_secs: i32) -> DayForecast {
        let category = self.categories.mode();
        DayForecast {
            date: date_for_key(self.day_key),
            day_name: weekday_name(self.first_timestamp, utc_offset_secs),
            min_temp: whole_degrees(self.min),
            max_temp: whole_degrees(self.max),
            icon: ConditionIcon::from_category(category),
            condition_text: self.descriptions.mode().map(str::to_string),
        }
    }
}

/// A sample's (low, high), each falling back to the point temperature and
/// then to the other extreme; swapped when reported inverted
fn sample_extremes(sample: &ForecastSample) -> Option<(f64, f64)> {
    let temp = finite(sample.temperature);
    let low = finite(sample.temp_min).or(temp);
    let high = finite(sample.temp_max).or(temp);
    let (low, high) = (low.or(high)?, high.or(low)?);
    Some(if low > high { (high, low) } else { (low, high) })
}

/// Local calendar day index of a timestamp
#[must_use]
pub fn local_day_key(timestamp: i64, utc_offset_secs: i32) -> i64 {
    timestamp
        .saturating_add(i64::from(utc_offset_secs))
        .div_euclid(SECONDS_PER_DAY)
}

fn local_datetime(timestamp: i64, utc_offset_secs: i32) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(timestamp.saturating_add(i64::from(utc_offset_secs)), 0)
        .map(|dt| dt.naive_utc())
}

fn date_for_key(day_key: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(day_key.checked_mul(SECONDS_PER_DAY)?, 0).map(|dt| dt.date_naive())
}

/// English weekday name of the offset-adjusted timestamp
#[must_use]
pub fn weekday_name(timestamp: i64, utc_offset_secs: i32) -> String {
    local_datetime(timestamp, utc_offset_secs)
        .map_or_else(|| "Unknown".to_string(), |dt| dt.format("%A").to_string())
}

/// Aggregate samples into exactly [`FORECAST_DAYS`] daily entries
///
/// Days are ordered by their first sample. When fewer days are covered the
/// week is padded with placeholders named by stepping one day past the last
/// covered day, or from `now` (unix seconds) when there are no samples.
#[must_use]
pub fn aggregate(samples: &[ForecastSample], utc_offset_secs: i32, now: i64) -> Vec<DayForecast> {
    let mut groups: Vec<DayAggregate> = Vec::new();

    for sample in samples {
        let key = local_day_key(sample.timestamp, utc_offset_secs);
        match groups.iter_mut().find(|g| g.day_key == key) {
            Some(group) => group.add(sample),
            None => {
                let mut group = DayAggregate::new(key, sample.timestamp);
                group.add(sample);
                groups.push(group);
            },
        }
    }

    groups.sort_by_key(|g| g.first_timestamp);
    groups.truncate(FORECAST_DAYS);

    let last_timestamp = groups.last().map(|g| g.first_timestamp);
    let mut week: Vec<DayForecast> = groups
        .into_iter()
        .map(|g| g.into_forecast(utc_offset_secs))
        .collect();

    let (anchor, first_step) = last_timestamp.map_or((now, 0), |ts| (ts, 1));
    let missing = FORECAST_DAYS - week.len();
    week.extend((0..missing).map(|slot| {
        let steps = first_step + i64::try_from(slot).unwrap_or(0);
        let timestamp = anchor.saturating_add(steps.saturating_mul(SECONDS_PER_DAY));
        DayForecast::placeholder(weekday_name(timestamp, utc_offset_secs))
    }));

    week
}
