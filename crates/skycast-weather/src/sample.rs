//! Time-series sampling: pick the forecast index for a relative offset.
//!
//! Hourly series are matched against a target instant with a one-hour
//! tolerance; daily series map positionally (index i is today + i days).
//! `None` means the caller should render a "no data" placeholder.

use chrono::{Duration, NaiveDateTime};

/// Index of the sample closest to `reference + hours_ahead`.
///
/// Scans timestamps in order and returns the first within one hour of the
/// target, or failing that the first at-or-after the target. If the whole
/// series lies before the target, falls back to `min(hours_ahead, len - 1)`
/// as a positional estimate. An empty series yields `None`.
pub fn hourly_index(
    timestamps: &[NaiveDateTime],
    reference: NaiveDateTime,
    hours_ahead: u32,
) -> Option<usize> {
    if timestamps.is_empty() {
        return None;
    }

    let target = reference + Duration::hours(i64::from(hours_ahead));
    let tolerance = Duration::hours(1);

    for (i, &ts) in timestamps.iter().enumerate() {
        let diff = if ts > target { ts - target } else { target - ts };
        if diff < tolerance {
            return Some(i);
        }
        if ts >= target {
            return Some(i);
        }
    }

    // Series ended before the target; estimate by position.
    Some((hours_ahead as usize).min(timestamps.len() - 1))
}

/// Index for `today + days_ahead` in a daily series of `len` entries.
///
/// Daily data maps 1:1 by position, so this only checks the bound; out of
/// range is `None`, never an error.
pub fn daily_index(len: usize, days_ahead: u32) -> Option<usize> {
    let index = days_ahead as usize;
    (index < len).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hourly_series(start_hour: u32, count: usize) -> Vec<NaiveDateTime> {
        let start = NaiveDate::from_ymd_opt(2026, 8, 29)
            .unwrap()
            .and_hms_opt(start_hour, 0, 0)
            .unwrap();
        (0..count)
            .map(|i| start + Duration::hours(i as i64))
            .collect()
    }

    #[test]
    fn test_hourly_offset_one_is_next_index() {
        let series = hourly_series(14, 24);
        let now = series[0];
        assert_eq!(hourly_index(&series, now, 1), Some(1));
        assert_eq!(hourly_index(&series, now, 8), Some(8));
    }

    #[test]
    fn test_hourly_tolerance_matches_nearest() {
        let series = hourly_series(14, 24);
        // Reference at 14:30 targets 15:30; the 15:00 sample is within an hour.
        let now = NaiveDate::from_ymd_opt(2026, 8, 29)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(hourly_index(&series, now, 1), Some(1));
    }

    #[test]
    fn test_hourly_exhausted_series_estimates_by_position() {
        let series = hourly_series(14, 3);
        let now = series[0];
        // Target is far past the end; last-resort index is min(10, 2).
        assert_eq!(hourly_index(&series, now, 10), Some(2));
    }

    #[test]
    fn test_hourly_empty_series_is_none() {
        let now = NaiveDate::from_ymd_opt(2026, 8, 29)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        assert_eq!(hourly_index(&[], now, 1), None);
    }

    #[test]
    fn test_hourly_stale_series_returns_first_at_or_after() {
        // Reference before the series start: the first sample is past the
        // target and wins.
        let series = hourly_series(14, 6);
        let now = NaiveDate::from_ymd_opt(2026, 8, 29)
            .unwrap()
            .and_hms_opt(2, 0, 0)
            .unwrap();
        assert_eq!(hourly_index(&series, now, 1), Some(0));
    }

    #[test]
    fn test_daily_index_bounds() {
        assert_eq!(daily_index(8, 0), Some(0));
        assert_eq!(daily_index(8, 1), Some(1));
        assert_eq!(daily_index(8, 7), Some(7));
        assert_eq!(daily_index(8, 8), None);
        assert_eq!(daily_index(0, 0), None);
    }
}
