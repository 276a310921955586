//! View-model assembly: snapshot + unit preference -> renderer-ready record.
//!
//! The renderer owns layout and display; this module owns every decision
//! about what the display strings say. Missing or short series degrade to
//! placeholder entries. The only failure is a snapshot with no current
//! conditions, reported once so the renderer can prompt a retry.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::codes;
use crate::sample;
use crate::types::{DailySeries, ForecastSnapshot, HourlySeries, Location, WeatherError};
use crate::units::{self, TemperatureUnit, UnitPreference};

/// Forward-looking daily cards, starting at tomorrow.
pub const DAILY_SLOTS: usize = 7;
/// Hourly cards, starting one hour ahead.
pub const HOURLY_SLOTS: usize = 8;

/// Shown in any slot with no forecast data.
pub const NO_DATA: &str = "--";

/// One card in the 7-day forecast strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyEntry {
    pub day_label: String,
    pub description: String,
    pub icon_ref: String,
    pub high_label: String,
    pub low_label: String,
}

impl DailyEntry {
    fn placeholder() -> Self {
        Self {
            day_label: NO_DATA.to_string(),
            description: NO_DATA.to_string(),
            icon_ref: codes::lookup(-1).icon.to_string(),
            high_label: NO_DATA.to_string(),
            low_label: NO_DATA.to_string(),
        }
    }
}

/// One card in the 8-slot hourly strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyEntry {
    pub time_label: String,
    pub description: String,
    pub icon_ref: String,
    pub temperature_label: String,
}

impl HourlyEntry {
    fn placeholder() -> Self {
        Self {
            time_label: NO_DATA.to_string(),
            description: NO_DATA.to_string(),
            icon_ref: codes::lookup(-1).icon.to_string(),
            temperature_label: NO_DATA.to_string(),
        }
    }
}

/// Renderer-agnostic output: every field is ready for direct display
/// binding. Rebuilt from scratch on each snapshot or unit change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub location_label: String,
    pub date_label: String,
    pub description_label: String,
    pub icon_ref: String,
    pub primary_temperature: String,
    pub humidity_percent: String,
    pub wind_speed_label: String,
    pub uv_index: String,
    pub feels_like_label: String,
    pub daily_entries: Vec<DailyEntry>,
    pub hourly_entries: Vec<HourlyEntry>,
}

/// Build the view model for a snapshot.
///
/// `now` is the reference instant in the forecast's local timezone (the API
/// reports timezone-local series).
///
/// # Errors
///
/// `WeatherError::MalformedSnapshot` when the snapshot has no current
/// conditions. Missing hourly or daily series are not errors; their strips
/// come back as placeholders.
pub fn build_view_model(
    snapshot: &ForecastSnapshot,
    location: &Location,
    units: UnitPreference,
    now: NaiveDateTime,
) -> Result<ViewModel, WeatherError> {
    let current = snapshot.current.as_ref().ok_or_else(|| {
        WeatherError::MalformedSnapshot("snapshot has no current conditions".to_string())
    })?;

    let info = codes::lookup(current.weather_code);

    let daily_entries = match &snapshot.daily {
        Some(daily) => build_daily_entries(daily, now.date(), units.temperature),
        None => {
            tracing::warn!("snapshot has no daily series, rendering placeholders");
            vec![DailyEntry::placeholder(); DAILY_SLOTS]
        }
    };

    let hourly_entries = match &snapshot.hourly {
        Some(hourly) => build_hourly_entries(hourly, now, units.temperature),
        None => {
            tracing::warn!("snapshot has no hourly series, rendering placeholders");
            vec![HourlyEntry::placeholder(); HOURLY_SLOTS]
        }
    };

    Ok(ViewModel {
        location_label: location.label(),
        date_label: now.format("%A, %B %-d, %Y").to_string(),
        description_label: info.description.to_string(),
        icon_ref: info.icon.to_string(),
        primary_temperature: units::format_temperature(current.temperature_2m, units.temperature),
        humidity_percent: format!("{}%", current.relative_humidity_2m.round() as i32),
        wind_speed_label: units::format_wind_speed(current.wind_speed_10m, units.wind),
        uv_index: (current.uv_index.unwrap_or(0.0).round() as i32).to_string(),
        feels_like_label: units::format_temperature(current.apparent_temperature, units.temperature),
        daily_entries,
        hourly_entries,
    })
}

/// Seven cards from series indices 1..=7. Index 0 is today, which the
/// current-conditions panel already shows, so it never appears here.
fn build_daily_entries(
    daily: &DailySeries,
    today: NaiveDate,
    unit: TemperatureUnit,
) -> Vec<DailyEntry> {
    (0..DAILY_SLOTS)
        .map(|slot| {
            let Some(index) = sample::daily_index(daily.time.len(), slot as u32 + 1) else {
                return DailyEntry::placeholder();
            };
            let (Some(&date), Some(&code), Some(&high), Some(&low)) = (
                daily.time.get(index),
                daily.weather_code.get(index),
                daily.temperature_2m_max.get(index),
                daily.temperature_2m_min.get(index),
            ) else {
                return DailyEntry::placeholder();
            };
            let info = codes::lookup(code);
            DailyEntry {
                day_label: day_label(date, today),
                description: info.description.to_string(),
                icon_ref: info.icon.to_string(),
                high_label: units::format_temperature(high, unit),
                low_label: units::format_temperature(low, unit),
            }
        })
        .collect()
}

/// Eight cards for offsets one through eight hours ahead.
fn build_hourly_entries(
    hourly: &HourlySeries,
    now: NaiveDateTime,
    unit: TemperatureUnit,
) -> Vec<HourlyEntry> {
    (0..HOURLY_SLOTS)
        .map(|slot| {
            let Some(index) = sample::hourly_index(&hourly.time, now, slot as u32 + 1) else {
                return HourlyEntry::placeholder();
            };
            let (Some(&time), Some(&temp)) =
                (hourly.time.get(index), hourly.temperature_2m.get(index))
            else {
                return HourlyEntry::placeholder();
            };
            // A missing code slot reads as mainly clear rather than unknown.
            let code = hourly.weather_code.get(index).copied().unwrap_or(1);
            let info = codes::lookup(code);
            HourlyEntry {
                time_label: hour_label(time, now),
                description: info.description.to_string(),
                icon_ref: info.icon.to_string(),
                temperature_label: units::format_temperature(temp, unit),
            }
        })
        .collect()
}

/// "Tmrw" for tomorrow, otherwise a 3-letter weekday. The caller skips
/// today's index, so "Today" cannot appear.
fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today + Duration::days(1) {
        "Tmrw".to_string()
    } else {
        date.format("%a").to_string()
    }
}

/// 12-hour clock label, with two special cases: next-day hours before 06:00
/// show "Tmrw", and anything beyond one day boundary shows the weekday.
fn hour_label(time: NaiveDateTime, now: NaiveDateTime) -> String {
    let day_diff = (time.date() - now.date()).num_days();
    if day_diff >= 2 {
        return time.format("%a").to_string();
    }
    if day_diff == 1 && time.hour() < 6 {
        return "Tmrw".to_string();
    }
    clock_label(time.hour())
}

fn clock_label(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        12 => "12 PM".to_string(),
        h if h < 12 => format!("{} AM", h),
        h => format!("{} PM", h - 12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CurrentConditions;
    use crate::units::WindUnit;

    fn now() -> NaiveDateTime {
        // A Saturday afternoon.
        NaiveDate::from_ymd_opt(2026, 8, 29)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap()
    }

    fn location() -> Location {
        Location {
            name: "Vilnius".to_string(),
            country: Some("Lithuania".to_string()),
            admin1: None,
            latitude: 54.69,
            longitude: 25.28,
        }
    }

    fn current() -> CurrentConditions {
        CurrentConditions {
            temperature_2m: 18.4,
            relative_humidity_2m: 55.0,
            apparent_temperature: 17.2,
            weather_code: 61,
            wind_speed_10m: 15.0,
            uv_index: Some(3.4),
        }
    }

    fn hourly_starting_now(count: usize) -> HourlySeries {
        let time: Vec<NaiveDateTime> = (0..count)
            .map(|i| now() + Duration::hours(i as i64))
            .collect();
        HourlySeries {
            temperature_2m: (0..count).map(|i| 18.0 + i as f64).collect(),
            weather_code: vec![61; count],
            time,
        }
    }

    fn daily_starting_today(count: usize) -> DailySeries {
        let time: Vec<NaiveDate> = (0..count)
            .map(|i| now().date() + Duration::days(i as i64))
            .collect();
        DailySeries {
            weather_code: vec![0; count],
            temperature_2m_max: (0..count).map(|i| 20.0 + i as f64).collect(),
            temperature_2m_min: (0..count).map(|i| 10.0 + i as f64).collect(),
            time,
        }
    }

    fn snapshot() -> ForecastSnapshot {
        ForecastSnapshot {
            current: Some(current()),
            hourly: Some(hourly_starting_now(48)),
            daily: Some(daily_starting_today(8)),
        }
    }

    #[test]
    fn test_metric_view_model() {
        let view =
            build_view_model(&snapshot(), &location(), UnitPreference::default(), now()).unwrap();
        assert_eq!(view.location_label, "Vilnius, Lithuania");
        assert_eq!(view.description_label, "Slight rain");
        assert_eq!(view.icon_ref, "assets/images/icon-rain.webp");
        assert_eq!(view.primary_temperature, "18°C");
        assert_eq!(view.humidity_percent, "55%");
        assert_eq!(view.wind_speed_label, "15 km/h");
        assert_eq!(view.uv_index, "3");
        assert_eq!(view.feels_like_label, "17°C");
        assert_eq!(view.date_label, "Saturday, August 29, 2026");
    }

    #[test]
    fn test_imperial_view_model() {
        let units = UnitPreference {
            temperature: TemperatureUnit::Fahrenheit,
            wind: WindUnit::Mph,
        };
        let view = build_view_model(&snapshot(), &location(), units, now()).unwrap();
        // 18.4°C is 65.12°F, rounded to 65.
        assert_eq!(view.primary_temperature, "65°F");
        assert_eq!(view.wind_speed_label, "9 mph");
    }

    #[test]
    fn test_units_are_independent() {
        let units = UnitPreference {
            temperature: TemperatureUnit::Fahrenheit,
            wind: WindUnit::Kmh,
        };
        let view = build_view_model(&snapshot(), &location(), units, now()).unwrap();
        assert_eq!(view.primary_temperature, "65°F");
        assert_eq!(view.wind_speed_label, "15 km/h");
    }

    #[test]
    fn test_daily_entries_skip_today() {
        let view =
            build_view_model(&snapshot(), &location(), UnitPreference::default(), now()).unwrap();
        assert_eq!(view.daily_entries.len(), DAILY_SLOTS);
        // Slot 0 is series index 1 (tomorrow), carrying tomorrow's high.
        assert_eq!(view.daily_entries[0].day_label, "Tmrw");
        assert_eq!(view.daily_entries[0].high_label, "21°C");
        assert!(view.daily_entries.iter().all(|e| e.day_label != "Today"));
        // Aug 31, 2026 is a Monday.
        assert_eq!(view.daily_entries[1].day_label, "Mon");
    }

    #[test]
    fn test_short_daily_series_pads_with_placeholders() {
        let mut snap = snapshot();
        snap.daily = Some(daily_starting_today(4));
        let view = build_view_model(&snap, &location(), UnitPreference::default(), now()).unwrap();
        // Indices 1..=3 exist; slots 3..7 have no data.
        assert_eq!(view.daily_entries[2].day_label, "Tue");
        assert_eq!(view.daily_entries[3].day_label, NO_DATA);
        assert_eq!(view.daily_entries[6].high_label, NO_DATA);
    }

    #[test]
    fn test_missing_daily_degrades_to_placeholders() {
        let mut snap = snapshot();
        snap.daily = None;
        let view = build_view_model(&snap, &location(), UnitPreference::default(), now()).unwrap();
        assert_eq!(view.daily_entries.len(), DAILY_SLOTS);
        assert!(view.daily_entries.iter().all(|e| e.day_label == NO_DATA));
    }

    #[test]
    fn test_missing_hourly_degrades_to_placeholders() {
        let mut snap = snapshot();
        snap.hourly = None;
        let view = build_view_model(&snap, &location(), UnitPreference::default(), now()).unwrap();
        assert_eq!(view.hourly_entries.len(), HOURLY_SLOTS);
        assert!(view.hourly_entries.iter().all(|e| e.time_label == NO_DATA));
    }

    #[test]
    fn test_missing_current_is_malformed_snapshot() {
        let mut snap = snapshot();
        snap.current = None;
        let err = build_view_model(&snap, &location(), UnitPreference::default(), now())
            .unwrap_err();
        assert!(matches!(err, WeatherError::MalformedSnapshot(_)));
    }

    #[test]
    fn test_hourly_labels_same_day() {
        let view =
            build_view_model(&snapshot(), &location(), UnitPreference::default(), now()).unwrap();
        // Offsets 1..=8 from 14:00 are 3 PM through 10 PM.
        assert_eq!(view.hourly_entries[0].time_label, "3 PM");
        assert_eq!(view.hourly_entries[7].time_label, "10 PM");
        assert_eq!(view.hourly_entries[0].temperature_label, "19°C");
    }

    #[test]
    fn test_hourly_label_crossing_midnight_shows_tmrw() {
        // Reference late evening: offsets past midnight land before 06:00.
        let late = NaiveDate::from_ymd_opt(2026, 8, 29)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap();
        let time: Vec<NaiveDateTime> = (0..12).map(|i| late + Duration::hours(i)).collect();
        let snap = ForecastSnapshot {
            current: Some(current()),
            hourly: Some(HourlySeries {
                temperature_2m: vec![15.0; 12],
                weather_code: vec![0; 12],
                time,
            }),
            daily: Some(daily_starting_today(8)),
        };
        let view = build_view_model(&snap, &location(), UnitPreference::default(), late).unwrap();
        assert_eq!(view.hourly_entries[0].time_label, "11 PM");
        assert_eq!(view.hourly_entries[1].time_label, "Tmrw");
        assert_eq!(view.hourly_entries[6].time_label, "Tmrw");
        // 06:00 the next day is past the early-morning window.
        assert_eq!(view.hourly_entries[7].time_label, "6 AM");
    }

    #[test]
    fn test_clock_label_midnight_and_noon() {
        assert_eq!(clock_label(0), "12 AM");
        assert_eq!(clock_label(12), "12 PM");
        assert_eq!(clock_label(9), "9 AM");
        assert_eq!(clock_label(21), "9 PM");
    }

    #[test]
    fn test_hour_label_beyond_one_day_boundary_is_weekday() {
        let two_days_out = now() + Duration::days(2);
        assert_eq!(hour_label(two_days_out, now()), "Mon");
    }

    #[test]
    fn test_next_day_after_six_shows_clock_time() {
        let tomorrow_morning = NaiveDate::from_ymd_opt(2026, 8, 30)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(hour_label(tomorrow_morning, now()), "8 AM");
    }

    #[test]
    fn test_unknown_weather_code_falls_back() {
        let mut snap = snapshot();
        if let Some(c) = snap.current.as_mut() {
            c.weather_code = 1234;
        }
        let view = build_view_model(&snap, &location(), UnitPreference::default(), now()).unwrap();
        assert_eq!(view.description_label, "Unknown");
    }

    #[test]
    fn test_missing_uv_index_renders_zero() {
        let mut snap = snapshot();
        if let Some(c) = snap.current.as_mut() {
            c.uv_index = None;
        }
        let view = build_view_model(&snap, &location(), UnitPreference::default(), now()).unwrap();
        assert_eq!(view.uv_index, "0");
    }
}
