//! Date parsing for backend payloads
//!
//! The backend stores dates as `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS` strings;
//! newer endpoints emit ISO 8601 with or without an offset.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 3] =
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Parse a backend timestamp into shop-local wall-clock time.
///
/// Plain dates land at midnight. Offsets in RFC 3339 input are dropped after
/// reading the local part.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty date".to_string());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime);
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|datetime| datetime.naive_local())
        .map_err(|e| format!("unrecognised date '{trimmed}': {e}"))
}

/// Calendar date of a backend timestamp.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    parse_datetime(value).map(|datetime| datetime.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_backend_formats() {
        assert_eq!(parse_date("2024-01-31").unwrap(), date(2024, 1, 31));
        assert_eq!(parse_date("2024-01-31 18:45:00").unwrap(), date(2024, 1, 31));
        assert_eq!(parse_date("2024-01-31T18:45:00").unwrap(), date(2024, 1, 31));
        assert_eq!(parse_date(" 2024-01-31 ").unwrap(), date(2024, 1, 31));
    }

    #[test]
    fn rfc3339_keeps_local_wall_clock() {
        let parsed = parse_datetime("2024-01-31T23:30:00+03:00").unwrap();
        assert_eq!(parsed, date(2024, 1, 31).and_hms_opt(23, 30, 0).unwrap());
    }

    #[test]
    fn plain_date_is_midnight() {
        let parsed = parse_datetime("2024-02-29").unwrap();
        assert_eq!(parsed, date(2024, 2, 29).and_time(NaiveTime::MIN));
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert!(parse_date("").is_err());
        assert!(parse_date("31/01/2024").is_err());
        assert!(parse_date("2023-02-29").is_err());
    }
}
