//! "HH:MM" clock times, minute granularity.
//!
//! Appointment times travel over the wire as strings like "09:30". Input is
//! validated against the same pattern the booking forms use and normalized to
//! a [`NaiveTime`], so "9:30" and "09:30" name the same slot.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serializer};

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-1]?[0-9]|2[0-3]):([0-5][0-9])$").expect("valid pattern"));

/// Parse an "HH:MM" string into a minute-granularity time.
pub fn parse(raw: &str) -> Option<NaiveTime> {
    let captures = TIME_PATTERN.captures(raw)?;
    let hour: u32 = captures[1].parse().ok()?;
    let minute: u32 = captures[2].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Render a time back to its canonical zero-padded "HH:MM" form.
pub fn format(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(*time))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid time format: {}", raw)))
}

/// Serde adapter for `Option<NaiveTime>` fields (doctor weekly schedules).
pub mod option {
    use super::*;

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_some(&super::format(*t)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(raw) => super::parse(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid time format: {}", raw))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_padded_and_unpadded_hours() {
        assert_eq!(parse("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse("9:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse("23:59"), NaiveTime::from_hms_opt(23, 59, 0));
    }

    #[test]
    fn rejects_malformed_times() {
        assert!(parse("24:00").is_none());
        assert!(parse("12:60").is_none());
        assert!(parse("12:5").is_none());
        assert!(parse("noon").is_none());
        assert!(parse("12:30:00").is_none());
    }

    #[test]
    fn formats_zero_padded() {
        let time = parse("9:05").unwrap();
        assert_eq!(format(time), "09:05");
    }
}
