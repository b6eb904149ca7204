//! Date and time formats used in saved survey files.
//!
//! Dates are written as `YYYY-MM-DD` and times as `HH-MM-SS` (dashes, not
//! colons, so the values can be embedded in file names). Use the serde
//! modules with `#[serde(with = "timefmt::...")]` on struct fields.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// `strftime` pattern for survey dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `strftime` pattern for survey start and end times.
pub const TIME_FORMAT: &str = "%H-%M-%S";

/// Current local wall-clock time, truncated to whole seconds.
#[must_use]
pub fn now() -> NaiveDateTime {
    truncate(Local::now().naive_local())
}

/// Drop sub-second precision so a formatted value parses back to itself.
#[must_use]
pub fn truncate(at: NaiveDateTime) -> NaiveDateTime {
    at.with_nanosecond(0).unwrap_or(at)
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns the chrono parse error if `value` does not match [`DATE_FORMAT`].
pub fn parse_date(value: &str) -> chrono::ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}

/// Parse a `HH-MM-SS` time.
///
/// # Errors
///
/// Returns the chrono parse error if `value` does not match [`TIME_FORMAT`].
pub fn parse_time(value: &str) -> chrono::ParseResult<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
}

/// Serialize `NaiveDate` as `YYYY-MM-DD`.
pub mod date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serialize `NaiveTime` as `HH-MM-SS`.
pub mod time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serialize `Option<NaiveTime>` as `HH-MM-SS`, with `None` written as `""`.
pub mod optional_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => s.serialize_str(&super::format_time(*time)),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw.is_empty() {
            return Ok(None);
        }
        super::parse_time(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_uses_dashes() {
        let time = NaiveTime::from_hms_opt(9, 5, 7).unwrap();
        assert_eq!(format_time(time), "09-05-07");
        assert_eq!(parse_time("09-05-07").unwrap(), time);
    }

    #[test]
    fn date_is_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(date), "2024-03-09");
        assert_eq!(parse_date("2024-03-09").unwrap(), date);
    }

    #[test]
    fn colon_times_are_rejected() {
        assert!(parse_time("09:05:07").is_err());
    }

    #[test]
    fn now_has_no_subsecond_part() {
        assert_eq!(now().nanosecond(), 0);
    }
}
