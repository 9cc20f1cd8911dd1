//! Confirmed tickets.

use serde::Serialize;

use crate::domain::Fare;

use super::passenger::PassengerDetails;
use super::payment::PaymentReceipt;
use super::selection::JourneySelection;

/// A confirmed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub reference: String,
    pub journey: JourneySelection,
    pub passenger: PassengerDetails,
    pub payment: PaymentReceipt,
    /// Fare per seat (both directions) times seats.
    pub total_fare: Fare,
}

impl Ticket {
    pub fn issue(
        reference: impl Into<String>,
        journey: JourneySelection,
        passenger: PassengerDetails,
        payment: PaymentReceipt,
    ) -> Self {
        let total_fare = journey.fare_per_seat() * u32::from(passenger.seats);
        Self {
            reference: reference.into(),
            journey,
            passenger,
            payment,
            total_fare,
        }
    }
}
