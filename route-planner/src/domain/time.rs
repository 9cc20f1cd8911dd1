//! Departure times.
//!
//! Reference data gives departure times as "HH:MM" or "HH:MM:SS" strings.
//! Routes are timetabled by time of day only; there is no service date.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Time of day at which a route departs.
///
/// # Examples
///
/// ```
/// use route_planner::domain::DepartureTime;
///
/// let t = DepartureTime::parse("08:05").unwrap();
/// assert_eq!(t.to_string(), "08:05");
///
/// // Seconds are accepted and dropped from display
/// assert_eq!(DepartureTime::parse("21:30:00").unwrap().to_string(), "21:30");
///
/// assert!(DepartureTime::parse("8:05").is_err());
/// assert!(DepartureTime::parse("24:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DepartureTime(NaiveTime);

impl DepartureTime {
    /// Parse "HH:MM" or "HH:MM:SS".
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        let bytes = s.as_bytes();

        if bytes.len() != 5 && bytes.len() != 8 {
            return Err(TimeError::new("expected HH:MM or HH:MM:SS format"));
        }

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let second = if bytes.len() == 8 {
            if bytes[5] != b':' {
                return Err(TimeError::new("expected colon at position 5"));
            }
            let second = parse_two_digits(&bytes[6..8])
                .ok_or_else(|| TimeError::new("invalid second digits"))?;
            if second > 59 {
                return Err(TimeError::new("second must be 0-59"));
            }
            second
        } else {
            0
        };

        NaiveTime::from_hms_opt(hour, minute, second)
            .map(Self)
            .ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some(u32::from(a - b'0') * 10 + u32::from(b - b'0'))
        }
        _ => None,
    }
}

impl fmt::Debug for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DepartureTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for DepartureTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DepartureTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        DepartureTime::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        assert!(DepartureTime::parse("00:00").is_ok());
        assert!(DepartureTime::parse("23:59").is_ok());
        assert!(DepartureTime::parse("09:00:00").is_ok());
        assert!(DepartureTime::parse(" 14:30 ").is_ok());
    }

    #[test]
    fn parse_components() {
        let t = DepartureTime::parse("14:35:20").unwrap();
        assert_eq!(t.hour(), 14);
        assert_eq!(t.minute(), 35);
    }

    #[test]
    fn reject_bad_format() {
        assert!(DepartureTime::parse("").is_err());
        assert!(DepartureTime::parse("1430").is_err());
        assert!(DepartureTime::parse("14:3").is_err());
        assert!(DepartureTime::parse("14-30").is_err());
        assert!(DepartureTime::parse("14:30-00").is_err());
        assert!(DepartureTime::parse("ab:cd").is_err());
        assert!(DepartureTime::parse("8:00 AM").is_err());
    }

    #[test]
    fn reject_out_of_range() {
        assert!(DepartureTime::parse("24:00").is_err());
        assert!(DepartureTime::parse("12:60").is_err());
        assert!(DepartureTime::parse("12:00:60").is_err());
    }

    #[test]
    fn error_display() {
        let err = DepartureTime::parse("25:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid time: hour must be 0-23");
    }

    #[test]
    fn ordering() {
        let early = DepartureTime::parse("06:15").unwrap();
        let late = DepartureTime::parse("18:45").unwrap();
        assert!(early < late);
    }

    #[test]
    fn serde_as_hhmm() {
        let t = DepartureTime::parse("07:05").unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"07:05\"");
        assert_eq!(format!("{t:?}"), "DepartureTime(07:05)");
    }
}
