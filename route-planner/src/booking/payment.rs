//! Simulated card payment.
//!
//! No money moves. Card details are checked for shape only, and only the
//! last four digits are kept after a successful payment.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::BookingError;

/// How the passenger pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
}

/// Card details as entered.
///
/// Deliberately not `Serialize`, and `Debug` hides the card number and CVV.
#[derive(Clone, Deserialize)]
pub struct PaymentDetails {
    pub method: PaymentMethod,
    pub card_number: String,
    /// "MM/YY"
    pub expiry: String,
    pub cvv: String,
}

impl fmt::Debug for PaymentDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentDetails")
            .field("method", &self.method)
            .field("card_number", &"<redacted>")
            .field("expiry", &self.expiry)
            .field("cvv", &"<redacted>")
            .finish()
    }
}

/// What is kept of a payment once it succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    pub card_last4: String,
}

impl PaymentDetails {
    /// Validate the card details and simulate the charge.
    pub fn process(&self) -> Result<PaymentReceipt, BookingError> {
        let number: String = self
            .card_number
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .collect();

        if !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BookingError::InvalidPayment(
                "card number may only contain digits",
            ));
        }
        if !(12..=19).contains(&number.len()) {
            return Err(BookingError::InvalidPayment(
                "card number must have 12 to 19 digits",
            ));
        }

        validate_expiry(self.expiry.trim())?;

        let cvv = self.cvv.trim();
        if !(3..=4).contains(&cvv.len()) || !cvv.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BookingError::InvalidPayment("CVV must be 3 or 4 digits"));
        }

        Ok(PaymentReceipt {
            method: self.method,
            card_last4: number[number.len() - 4..].to_string(),
        })
    }
}

fn validate_expiry(expiry: &str) -> Result<(), BookingError> {
    let invalid = || BookingError::InvalidPayment("expiry must be MM/YY");

    let (month, year) = expiry.split_once('/').ok_or_else(invalid)?;
    if month.len() != 2 || year.len() != 2 {
        return Err(invalid());
    }
    if !month.bytes().chain(year.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let month: u8 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(BookingError::InvalidPayment("expiry month must be 01-12"));
    }

    Ok(())
}
