//! Booking errors.

/// Errors raised by booking transitions.
///
/// A failed transition never changes the booking's state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// The action is not allowed in the current step
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },

    /// The journey selection is inconsistent
    #[error("invalid journey selection: {0}")]
    InvalidSelection(&'static str),

    /// Passenger details failed validation
    #[error("invalid passenger details: {0}")]
    InvalidPassenger(&'static str),

    /// Payment details failed validation
    #[error("invalid payment details: {0}")]
    InvalidPayment(&'static str),
}
