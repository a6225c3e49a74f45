use crate::error::CoreError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Accepted wall-clock layouts, tried in order after RFC 3339.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Layout used when order times are written back out.
pub const TIMESTAMP_OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a timestamp as a naive local wall-clock time.
///
/// Offsets on RFC 3339 input are dropped rather than converted, so
/// `2024-03-01T13:00:00+02:00` buckets into hour 13. A bare `YYYY-MM-DD`
/// resolves to midnight.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, CoreError> {
    let input = input.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(input) {
        return Ok(with_offset.naive_local());
    }

    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| CoreError::InvalidTimestamp(input.to_string()))
}

/// Parses a calendar date, keeping only the date part of a full timestamp.
pub fn parse_date(input: &str) -> Result<NaiveDate, CoreError> {
    parse_timestamp(input).map(|ts| ts.date())
}

/// Serde adapter for `NaiveDateTime` fields read from the dataset.
pub mod timestamp {
    use super::{parse_timestamp, TIMESTAMP_OUTPUT_FORMAT};
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_OUTPUT_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_the_supported_layouts() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(13, 5, 0)
            .unwrap();

        for input in [
            "2024-03-01T13:05:00",
            "2024-03-01T13:05",
            "2024-03-01 13:05:00",
            "2024-03-01 13:05",
            "2024-03-01T13:05:00Z",
            "  2024-03-01T13:05:00.000000Z ",
        ] {
            assert_eq!(parse_timestamp(input).unwrap(), expected, "input {input:?}");
        }
    }

    #[test]
    fn keeps_wall_clock_hour_of_offset_timestamps() {
        let ts = parse_timestamp("2024-03-01T23:30:00+05:00").unwrap();
        assert_eq!(ts.hour(), 23);
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn bare_date_is_midnight() {
        let ts = parse_timestamp("2024-03-01").unwrap();
        assert_eq!(ts.time(), NaiveTime::MIN);
        assert_eq!(parse_date("2024-03-01T18:00:00").unwrap(), ts.date());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_timestamp("yesterday"),
            Err(CoreError::InvalidTimestamp("yesterday".to_string()))
        );
        assert!(parse_date("2024-13-01").is_err());
    }
}
