//! The booking state machine.
//!
//! ```text
//! Searching --select--> CollectingPassenger --passenger--> Paying --pay--> Confirmed
//!     ^                                                                        |
//!     +------------------------------- restart (from any step) ----------------+
//! ```

use serde::Serialize;

use super::error::BookingError;
use super::passenger::PassengerDetails;
use super::payment::PaymentDetails;
use super::selection::JourneySelection;
use super::ticket::Ticket;

/// Something the user does to move a booking along.
#[derive(Debug, Clone)]
pub enum BookingAction {
    SelectJourney(JourneySelection),
    SubmitPassenger(PassengerDetails),
    Pay(PaymentDetails),
    Restart,
}

impl BookingAction {
    fn name(&self) -> &'static str {
        match self {
            BookingAction::SelectJourney(_) => "select a journey",
            BookingAction::SubmitPassenger(_) => "submit passenger details",
            BookingAction::Pay(_) => "pay",
            BookingAction::Restart => "restart",
        }
    }
}

/// Where a booking currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum BookingState {
    #[default]
    Searching,
    CollectingPassenger {
        journey: JourneySelection,
    },
    Paying {
        journey: JourneySelection,
        passenger: PassengerDetails,
    },
    Confirmed {
        ticket: Ticket,
    },
}

impl BookingState {
    /// Short name of the step, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            BookingState::Searching => "searching",
            BookingState::CollectingPassenger { .. } => "collecting passenger details",
            BookingState::Paying { .. } => "paying",
            BookingState::Confirmed { .. } => "confirmed",
        }
    }

    /// Compute the state that `action` leads to.
    ///
    /// `reference` is stamped onto the ticket when payment succeeds.
    pub fn next(&self, action: BookingAction, reference: &str) -> Result<BookingState, BookingError> {
        match (self, action) {
            (_, BookingAction::Restart) => Ok(BookingState::Searching),

            (BookingState::Searching, BookingAction::SelectJourney(journey)) => {
                Ok(BookingState::CollectingPassenger { journey })
            }

            (BookingState::CollectingPassenger { journey }, BookingAction::SubmitPassenger(details)) => {
                Ok(BookingState::Paying {
                    journey: journey.clone(),
                    passenger: details.validated()?,
                })
            }

            (BookingState::Paying { journey, passenger }, BookingAction::Pay(payment)) => {
                let receipt = payment.process()?;
                Ok(BookingState::Confirmed {
                    ticket: Ticket::issue(reference, journey.clone(), passenger.clone(), receipt),
                })
            }

            (state, action) => Err(BookingError::InvalidTransition {
                state: state.name(),
                action: action.name(),
            }),
        }
    }
}

/// One booking session's progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingFlow {
    reference: String,
    state: BookingState,
}

impl BookingFlow {
    /// Start a new booking in the `Searching` step.
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            state: BookingState::Searching,
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    /// Apply an action. On error the state is left as it was.
    pub fn apply(&mut self, action: BookingAction) -> Result<&BookingState, BookingError> {
        self.state = self.state.next(action, &self.reference)?;
        Ok(&self.state)
    }
}
