//! The journey a booking is for.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Fare, Itinerary};

use super::error::BookingError;

/// One chosen itinerary on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripSelection {
    pub date: NaiveDate,
    pub itinerary: Itinerary,
}

/// The outbound trip and an optional return trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneySelection {
    outbound: TripSelection,
    inbound: Option<TripSelection>,
}

impl JourneySelection {
    /// A one-way journey.
    pub fn one_way(outbound: TripSelection) -> Self {
        Self {
            outbound,
            inbound: None,
        }
    }

    /// A round trip.
    ///
    /// The return must go back the way the outbound came (destination to
    /// origin) and must not be dated before the outbound.
    pub fn round_trip(
        outbound: TripSelection,
        inbound: TripSelection,
    ) -> Result<Self, BookingError> {
        if inbound.date < outbound.date {
            return Err(BookingError::InvalidSelection(
                "return date is before the outbound date",
            ));
        }
        if inbound.itinerary.origin() != outbound.itinerary.destination()
            || inbound.itinerary.destination() != outbound.itinerary.origin()
        {
            return Err(BookingError::InvalidSelection(
                "return trip must reverse the outbound trip",
            ));
        }

        Ok(Self {
            outbound,
            inbound: Some(inbound),
        })
    }

    pub fn outbound(&self) -> &TripSelection {
        &self.outbound
    }

    pub fn inbound(&self) -> Option<&TripSelection> {
        self.inbound.as_ref()
    }

    /// Fare for one passenger, both directions.
    pub fn fare_per_seat(&self) -> Fare {
        self.outbound.itinerary.fare()
            + self
                .inbound
                .as_ref()
                .map_or(Fare::ZERO, |trip| trip.itinerary.fare())
    }
}
