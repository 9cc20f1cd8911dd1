//! City identifier type.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid city name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city: {reason}")]
pub struct InvalidCity {
    reason: &'static str,
}

/// An opaque city identifier.
///
/// A `City` is a trimmed, non-empty name. Whether the city actually exists
/// is only decided by the route catalog; this type just guarantees the name
/// is well-formed. Cloning is cheap.
///
/// # Examples
///
/// ```
/// use route_planner::domain::City;
///
/// let jaipur = City::parse(" Jaipur ").unwrap();
/// assert_eq!(jaipur.as_str(), "Jaipur");
///
/// assert!(City::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct City(Arc<str>);

impl City {
    /// Parse a city name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidCity> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidCity {
                reason: "name must not be empty",
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(InvalidCity {
                reason: "name must not contain control characters",
            });
        }

        Ok(City(Arc::from(trimmed)))
    }

    /// Returns the city name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for City {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City({})", self.as_str())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for City {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for City {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        City::parse(&s).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Parsing is idempotent on its own output
        #[test]
        fn parse_is_idempotent(s in "[A-Za-z][A-Za-z ]{0,20}") {
            let city = City::parse(&s).unwrap();
            let again = City::parse(city.as_str()).unwrap();
            prop_assert_eq!(city, again);
        }

        /// Leading and trailing whitespace never matters
        #[test]
        fn whitespace_insensitive(s in "[A-Za-z]{1,12}", pad in "[ \t]{0,3}") {
            let padded = format!("{pad}{s}{pad}");
            prop_assert_eq!(City::parse(&padded).unwrap(), City::parse(&s).unwrap());
        }
    }
}
