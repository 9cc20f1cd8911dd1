//! Fare amounts.
//!
//! Fares arrive as decimal strings ("500", "350.5", "1299.99"). They are kept
//! as whole paise so that summing the legs of an itinerary is exact.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid fare.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid fare: {reason}")]
pub struct InvalidFare {
    reason: &'static str,
}

impl InvalidFare {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A non-negative fare in rupees, stored as paise.
///
/// # Examples
///
/// ```
/// use route_planner::domain::Fare;
///
/// let bus = Fare::parse("500").unwrap();
/// let train = Fare::parse("350.5").unwrap();
/// assert_eq!((bus + train).to_string(), "850.50");
///
/// assert!(Fare::parse("-1").is_err());
/// assert!(Fare::parse("12.345").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fare {
    paise: u64,
}

impl Fare {
    /// A zero fare.
    pub const ZERO: Fare = Fare { paise: 0 };

    /// Create a fare from whole paise.
    pub const fn from_paise(paise: u64) -> Self {
        Self { paise }
    }

    /// Create a fare from whole rupees.
    pub const fn from_rupees(rupees: u64) -> Self {
        Self {
            paise: rupees * 100,
        }
    }

    /// Parse a decimal rupee amount with at most two fractional digits.
    pub fn parse(s: &str) -> Result<Self, InvalidFare> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InvalidFare::new("empty amount"));
        }
        if s.starts_with('-') {
            return Err(InvalidFare::new("must not be negative"));
        }
        let s = s.strip_prefix('+').unwrap_or(s);

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(InvalidFare::new("no digits"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(InvalidFare::new("expected a decimal number"));
        }
        if frac.len() > 2 {
            return Err(InvalidFare::new("at most two decimal places"));
        }

        let rupees: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| InvalidFare::new("amount too large"))?
        };

        // "5" -> 50 paise, "05" -> 5 paise
        let paise_part: u64 = match frac.len() {
            0 => 0,
            1 => u64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => u64::from(frac.as_bytes()[0] - b'0') * 10 + u64::from(frac.as_bytes()[1] - b'0'),
        };

        rupees
            .checked_mul(100)
            .and_then(|p| p.checked_add(paise_part))
            .map(Fare::from_paise)
            .ok_or_else(|| InvalidFare::new("amount too large"))
    }

    /// Returns the amount in paise.
    pub const fn paise(&self) -> u64 {
        self.paise
    }
}

impl Add for Fare {
    type Output = Fare;

    fn add(self, rhs: Fare) -> Fare {
        Fare::from_paise(self.paise.saturating_add(rhs.paise))
    }
}

impl Mul<u32> for Fare {
    type Output = Fare;

    fn mul(self, rhs: u32) -> Fare {
        Fare::from_paise(self.paise.saturating_mul(u64::from(rhs)))
    }
}

impl Sum for Fare {
    fn sum<I: Iterator<Item = Fare>>(iter: I) -> Fare {
        iter.fold(Fare::ZERO, Add::add)
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.paise / 100, self.paise % 100)
    }
}

impl Serialize for Fare {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fare {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Fare::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_whole_rupees() {
        assert_eq!(Fare::parse("500").unwrap().paise(), 50_000);
        assert_eq!(Fare::parse("0").unwrap(), Fare::ZERO);
        assert_eq!(Fare::parse(" 75 ").unwrap().paise(), 7_500);
    }

    #[test]
    fn parse_fractional() {
        assert_eq!(Fare::parse("350.5").unwrap().paise(), 35_050);
        assert_eq!(Fare::parse("350.05").unwrap().paise(), 35_005);
        assert_eq!(Fare::parse("350.").unwrap().paise(), 35_000);
        assert_eq!(Fare::parse(".75").unwrap().paise(), 75);
        assert_eq!(Fare::parse("+12.00").unwrap().paise(), 1_200);
    }

    #[test]
    fn reject_malformed() {
        assert!(Fare::parse("").is_err());
        assert!(Fare::parse(".").is_err());
        assert!(Fare::parse("-5").is_err());
        assert!(Fare::parse("12.345").is_err());
        assert!(Fare::parse("1e3").is_err());
        assert!(Fare::parse("abc").is_err());
        assert!(Fare::parse("1.2.3").is_err());
        assert!(Fare::parse("99999999999999999999").is_err());
    }

    #[test]
    fn error_display() {
        let err = Fare::parse("-5").unwrap_err();
        assert_eq!(err.to_string(), "invalid fare: must not be negative");
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(Fare::from_rupees(500).to_string(), "500.00");
        assert_eq!(Fare::from_paise(5).to_string(), "0.05");
        assert_eq!(Fare::from_paise(123_456).to_string(), "1234.56");
    }

    #[test]
    fn arithmetic() {
        let a = Fare::parse("500").unwrap();
        let b = Fare::parse("350.50").unwrap();
        assert_eq!(a + b, Fare::from_paise(85_050));
        assert_eq!(b * 3, Fare::from_paise(105_150));
        assert_eq!([a, b, a].into_iter().sum::<Fare>(), Fare::from_paise(135_050));
        assert_eq!(Fare::from_paise(u64::MAX) + Fare::from_paise(1), Fare::from_paise(u64::MAX));
    }

    #[test]
    fn serde_as_string() {
        let fare = Fare::parse("99.9").unwrap();
        assert_eq!(serde_json::to_string(&fare).unwrap(), "\"99.90\"");
        let back: Fare = serde_json::from_str("\"99.90\"").unwrap();
        assert_eq!(back, fare);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Display output always parses back to the same amount
        #[test]
        fn display_parse_roundtrip(paise in 0u64..1_000_000_000_000) {
            let fare = Fare::from_paise(paise);
            prop_assert_eq!(Fare::parse(&fare.to_string()).unwrap(), fare);
        }

        /// Ordering follows the numeric amount
        #[test]
        fn ordering_is_numeric(a in 0u64..1_000_000, b in 0u64..1_000_000) {
            prop_assert_eq!(Fare::from_paise(a).cmp(&Fare::from_paise(b)), a.cmp(&b));
        }
    }
}
