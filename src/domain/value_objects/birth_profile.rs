//! Birth profile value object
//!
//! The date, time and place of birth a user's chart is derived from.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthProfile {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub place: String,
}

impl BirthProfile {
    pub fn new(date: NaiveDate, time: NaiveTime, place: impl Into<String>) -> Self {
        Self {
            date,
            time,
            place: place.into(),
        }
    }
}

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_birth_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

/// Render as `HH:MM`, adding seconds only when they are non-zero.
pub fn format_birth_time(time: NaiveTime) -> String {
    if time.second() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_time_forms() {
        assert_eq!(
            parse_birth_time("09:00"),
            NaiveTime::from_hms_opt(9, 0, 0)
        );
        assert_eq!(
            parse_birth_time("23:15:42"),
            NaiveTime::from_hms_opt(23, 15, 42)
        );
        assert_eq!(parse_birth_time("25:00"), None);
        assert_eq!(parse_birth_time("noon"), None);
    }

    #[test]
    fn formats_seconds_only_when_present() {
        let whole = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        let precise = NaiveTime::from_hms_opt(9, 5, 7).unwrap();
        assert_eq!(format_birth_time(whole), "09:05");
        assert_eq!(format_birth_time(precise), "09:05:07");
    }
}
