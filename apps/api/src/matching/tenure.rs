//! Work-experience tenure in fractional years.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::models::candidate::ExperienceRecord;

const MILLIS_PER_YEAR: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * 365.0;

/// Parses the date strings profile forms store: RFC 3339 timestamps,
/// `YYYY-MM-DD`, `YYYY-MM` and bare `YYYY`. Day-precision values are midnight UTC.
pub fn parse_profile_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok())
        .or_else(|| {
            raw.parse::<i32>()
                .ok()
                .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        })?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// Tenure of one record. A closed record runs start → end; an open record with
/// `currently_working` runs start → `now`. Anything else, including an end before
/// the start, counts as zero.
pub fn record_tenure_years(record: &ExperienceRecord, now: DateTime<Utc>) -> f64 {
    let Some(start) = record.start_date.as_deref().and_then(parse_profile_date) else {
        return 0.0;
    };

    let end = match record.end_date.as_deref().and_then(parse_profile_date) {
        Some(end) => end,
        None if record.currently_working => now,
        None => return 0.0,
    };

    let years = (end - start).num_milliseconds() as f64 / MILLIS_PER_YEAR;
    years.max(0.0)
}

/// Longest single stint across all records. Stints are not summed.
pub fn longest_tenure_years(records: &[ExperienceRecord], now: DateTime<Utc>) -> f64 {
    records
        .iter()
        .map(|r| record_tenure_years(r, now))
        .fold(0.0, f64::max)
}
