//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from data loading and HTTP errors.

use super::RouteKey;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A route record failed validation
    #[error("invalid route: {0}")]
    InvalidRoute(&'static str),

    /// Two records share the same (origin, destination, mode)
    #[error("duplicate route: {0}")]
    DuplicateRoute(RouteKey),

    /// A route names a city the catalog does not know
    #[error("unknown city: {0}")]
    UnknownCity(String),

    /// Two locations share the same city name
    #[error("duplicate location: {0}")]
    DuplicateLocation(String),

    /// Coordinates outside the valid range
    #[error("invalid coordinates for {city}: {reason}")]
    InvalidCoordinates { city: String, reason: &'static str },
}
