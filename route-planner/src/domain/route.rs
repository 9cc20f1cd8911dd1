//! Point-to-point route records and the legs built from them.

use serde::Serialize;

use super::error::DomainError;
use super::{City, DepartureTime, Fare, Mode};

/// One timetabled route between two cities on a single mode.
///
/// The catalog holds at most one record per (origin, destination, mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    origin: City,
    destination: City,
    mode: Mode,
    fare: Fare,
    duration_mins: u32,
    departure: DepartureTime,
}

impl RouteRecord {
    /// Create a route record.
    ///
    /// Fails if the duration is zero.
    pub fn new(
        origin: City,
        destination: City,
        mode: Mode,
        fare: Fare,
        duration_mins: u32,
        departure: DepartureTime,
    ) -> Result<Self, DomainError> {
        if duration_mins == 0 {
            return Err(DomainError::InvalidRoute("duration must be positive"));
        }

        Ok(Self {
            origin,
            destination,
            mode,
            fare,
            duration_mins,
            departure,
        })
    }

    pub fn origin(&self) -> &City {
        &self.origin
    }

    pub fn destination(&self) -> &City {
        &self.destination
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn fare(&self) -> Fare {
        self.fare
    }

    /// Travel time in minutes; always positive.
    pub fn duration_mins(&self) -> u32 {
        self.duration_mins
    }

    pub fn departure(&self) -> DepartureTime {
        self.departure
    }

    /// The catalog key of this record.
    pub fn key(&self) -> RouteKey {
        RouteKey {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            mode: self.mode,
        }
    }

    /// Build the itinerary leg that travels this route.
    pub fn to_leg(&self) -> Leg {
        Leg {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            mode: self.mode,
            fare: self.fare,
            duration_mins: self.duration_mins,
            departure: self.departure,
        }
    }
}

/// Unique key of a route record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub origin: City,
    pub destination: City,
    pub mode: Mode,
}

impl std::fmt::Display for RouteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.mode, self.origin, self.destination)
    }
}

/// A single-mode trip that is part of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leg {
    pub origin: City,
    pub destination: City,
    pub mode: Mode,
    pub fare: Fare,
    pub duration_mins: u32,
    pub departure: DepartureTime,
}
