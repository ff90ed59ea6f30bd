use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use wasm_bindgen::JsValue;

use crate::domain::errors::ValidationError;
use crate::domain::forecast::Timestamp;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Zone in which wall-clock times are shown and naive timestamps are read.
///
/// The offset is resolved per instant so a window crossing a daylight saving
/// change keeps its hours aligned on both sides.
pub trait DisplayZone: Copy {
    fn offset_at(&self, timestamp: Timestamp) -> FixedOffset;

    /// Offset in effect at the given wall-clock time
    fn offset_for_local(&self, local: &NaiveDateTime) -> FixedOffset;
}

impl DisplayZone for FixedOffset {
    fn offset_at(&self, _timestamp: Timestamp) -> FixedOffset {
        *self
    }

    fn offset_for_local(&self, _local: &NaiveDateTime) -> FixedOffset {
        *self
    }
}

/// The browser's local zone, daylight saving included
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserZone;

impl DisplayZone for BrowserZone {
    fn offset_at(&self, timestamp: Timestamp) -> FixedOffset {
        let date = js_sys::Date::new(&JsValue::from_f64(timestamp.value() as f64));
        offset_from_minutes_west(date.get_timezone_offset())
    }

    fn offset_for_local(&self, local: &NaiveDateTime) -> FixedOffset {
        let date = js_sys::Date::new_with_year_month_day_hr_min_sec_milli(
            local.year() as u32,
            local.month0() as i32,
            local.day() as i32,
            local.hour() as i32,
            local.minute() as i32,
            local.second() as i32,
            (local.nanosecond() / 1_000_000) as i32,
        );
        offset_from_minutes_west(date.get_timezone_offset())
    }
}

/// `Date.getTimezoneOffset` counts minutes west of UTC
fn offset_from_minutes_west(minutes: f64) -> FixedOffset {
    FixedOffset::west_opt((minutes * 60.0).round() as i32).unwrap_or_else(utc_offset)
}

/// Parse an ISO-8601 timestamp. Strings without an offset are wall-clock
/// time in `zone`; a bare date means its midnight.
pub fn parse_timestamp<Z: DisplayZone>(raw: &str, zone: Z) -> Result<Timestamp, ValidationError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Timestamp::from_millis(dt.timestamp_millis()));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| ValidationError::InvalidTimestamp(raw.to_string()))?;

    zone.offset_for_local(&naive)
        .from_local_datetime(&naive)
        .single()
        .map(|dt| Timestamp::from_millis(dt.timestamp_millis()))
        .ok_or_else(|| ValidationError::InvalidTimestamp(raw.to_string()))
}

fn to_local<Z: DisplayZone>(timestamp: Timestamp, zone: Z) -> DateTime<FixedOffset> {
    DateTime::<Utc>::from_timestamp_millis(timestamp.value())
        .unwrap_or_default()
        .with_timezone(&zone.offset_at(timestamp))
}

/// Wall-clock hour of day (0..=23)
pub fn hour_of_day<Z: DisplayZone>(timestamp: Timestamp, zone: Z) -> u32 {
    to_local(timestamp, zone).hour()
}

/// `Tue, Oct 14`
pub fn format_date_label<Z: DisplayZone>(timestamp: Timestamp, zone: Z) -> String {
    to_local(timestamp, zone).format("%a, %b %-d").to_string()
}

/// `HH:MM`, 24-hour clock
pub fn format_hour_minute<Z: DisplayZone>(timestamp: Timestamp, zone: Z) -> String {
    to_local(timestamp, zone).format("%H:%M").to_string()
}

/// Date string understood by the chart engine's date axis. Carries no offset;
/// the engine reads it as wall-clock time.
pub fn format_axis_timestamp<Z: DisplayZone>(timestamp: Timestamp, zone: Z) -> String {
    to_local(timestamp, zone).format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

pub fn utc_offset() -> FixedOffset {
    Utc.fix()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_and_offset_forms_agree_in_utc() {
        let utc = utc_offset();
        let a = parse_timestamp("2025-03-01T06:00", utc).unwrap();
        let b = parse_timestamp("2025-03-01T06:00:00+00:00", utc).unwrap();
        let c = parse_timestamp("2025-03-01 06:00:00.000", utc).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn naive_strings_follow_display_offset() {
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let ts = parse_timestamp("2025-03-01T06:00:00", est).unwrap();
        assert_eq!(hour_of_day(ts, est), 6);
        assert_eq!(hour_of_day(ts, utc_offset()), 11);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_timestamp("yesterday", utc_offset()),
            Err(ValidationError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn whole_minute_offsets_from_minutes_west() {
        assert_eq!(offset_from_minutes_west(300.0), FixedOffset::west_opt(5 * 3600).unwrap());
        assert_eq!(offset_from_minutes_west(-330.0), FixedOffset::east_opt(5 * 3600 + 1800).unwrap());
    }

    #[test]
    fn labels() {
        let utc = utc_offset();
        let ts = parse_timestamp("2025-10-14T18:05", utc).unwrap();
        assert_eq!(format_date_label(ts, utc), "Tue, Oct 14");
        assert_eq!(format_hour_minute(ts, utc), "18:05");
        assert_eq!(format_axis_timestamp(ts, utc), "2025-10-14 18:05:00.000");
    }
}
