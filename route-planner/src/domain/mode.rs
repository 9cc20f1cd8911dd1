//! Transport mode type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transport mode: {input:?} (expected bus, train or metro)")]
pub struct InvalidMode {
    input: String,
}

/// A mode of transport covered by the route catalog.
///
/// Parsing is case-insensitive and ignores surrounding whitespace.
///
/// # Examples
///
/// ```
/// use route_planner::domain::Mode;
///
/// assert_eq!(Mode::parse("Bus").unwrap(), Mode::Bus);
/// assert_eq!(Mode::parse(" metro ").unwrap(), Mode::Metro);
/// assert!(Mode::parse("Ferry").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mode {
    Bus,
    Train,
    Metro,
}

impl Mode {
    /// Every mode, in catalog order.
    pub const ALL: [Mode; 3] = [Mode::Bus, Mode::Train, Mode::Metro];

    /// Parse a mode name.
    pub fn parse(s: &str) -> Result<Self, InvalidMode> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("bus") {
            Ok(Mode::Bus)
        } else if trimmed.eq_ignore_ascii_case("train") {
            Ok(Mode::Train)
        } else if trimmed.eq_ignore_ascii_case("metro") {
            Ok(Mode::Metro)
        } else {
            Err(InvalidMode {
                input: s.to_string(),
            })
        }
    }

    /// Position of this mode in [`Mode::ALL`].
    ///
    /// Used to index per-mode tables without string dispatch.
    pub const fn index(self) -> usize {
        match self {
            Mode::Bus => 0,
            Mode::Train => 1,
            Mode::Metro => 2,
        }
    }

    /// Display name ("Bus", "Train", "Metro").
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Bus => "Bus",
            Mode::Train => "Train",
            Mode::Metro => "Metro",
        }
    }
}

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::parse(s)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
