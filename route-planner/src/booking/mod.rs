//! Booking a planned journey.
//!
//! A booking moves through selection, passenger details and a simulated
//! payment before a ticket is issued. See [`BookingFlow`].

mod error;
mod flow;
mod passenger;
mod payment;
mod selection;
mod ticket;

pub use error::BookingError;
pub use flow::{BookingAction, BookingFlow, BookingState};
pub use passenger::{MAX_AGE, MAX_SEATS, PassengerDetails};
pub use payment::{PaymentDetails, PaymentMethod, PaymentReceipt};
pub use selection::{JourneySelection, TripSelection};
pub use ticket::Ticket;
