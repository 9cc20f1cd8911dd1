//! Passenger details.

use serde::{Deserialize, Serialize};

use super::error::BookingError;

/// Oldest accepted passenger age.
pub const MAX_AGE: u8 = 120;

/// Most seats one booking may hold.
pub const MAX_SEATS: u8 = 10;

/// Who is travelling, and how many seats they need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerDetails {
    pub name: String,
    pub age: u8,
    pub contact: String,
    pub seats: u8,
}

impl PassengerDetails {
    /// Check the details, returning a normalized copy.
    ///
    /// Names are trimmed; contact numbers lose spaces and dashes.
    pub fn validated(&self) -> Result<PassengerDetails, BookingError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(BookingError::InvalidPassenger("name must not be empty"));
        }

        if self.age > MAX_AGE {
            return Err(BookingError::InvalidPassenger("age must be between 0 and 120"));
        }

        if self.seats == 0 || self.seats > MAX_SEATS {
            return Err(BookingError::InvalidPassenger(
                "number of seats must be between 1 and 10",
            ));
        }

        Ok(PassengerDetails {
            name: name.to_string(),
            age: self.age,
            contact: normalize_contact(&self.contact)?,
            seats: self.seats,
        })
    }
}

/// Strip separators and check the number has 7 to 15 digits, with an
/// optional leading `+`.
fn normalize_contact(raw: &str) -> Result<String, BookingError> {
    let compact: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();

    let digits = compact.strip_prefix('+').unwrap_or(&compact);

    if digits.is_empty() {
        return Err(BookingError::InvalidPassenger("contact number must not be empty"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BookingError::InvalidPassenger(
            "contact number may only contain digits",
        ));
    }
    if !(7..=15).contains(&digits.len()) {
        return Err(BookingError::InvalidPassenger(
            "contact number must have 7 to 15 digits",
        ));
    }

    Ok(compact)
}
