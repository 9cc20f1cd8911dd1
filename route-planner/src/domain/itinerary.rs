//! Itineraries: complete journeys made of one or two legs.

use serde::Serialize;

use super::{City, DepartureTime, Fare, Leg, Mode};

/// A complete journey from origin to destination.
///
/// Itineraries are only ever built from legs that resolved to catalog
/// records, so every leg is present and connects to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Itinerary {
    /// A single leg, no change.
    Direct { leg: Leg },

    /// Two legs with a change at an intermediate city.
    Via { first: Leg, second: Leg },
}

impl Itinerary {
    /// Create a direct itinerary.
    pub fn direct(leg: Leg) -> Self {
        Itinerary::Direct { leg }
    }

    /// Create a two-leg itinerary.
    ///
    /// Returns `None` if the first leg does not end where the second begins.
    pub fn via(first: Leg, second: Leg) -> Option<Self> {
        if first.destination != second.origin {
            return None;
        }
        Some(Itinerary::Via { first, second })
    }

    /// The legs in travel order.
    pub fn legs(&self) -> Vec<&Leg> {
        match self {
            Itinerary::Direct { leg } => vec![leg],
            Itinerary::Via { first, second } => vec![first, second],
        }
    }

    /// Modes of each leg, in travel order.
    pub fn modes(&self) -> Vec<Mode> {
        self.legs().iter().map(|leg| leg.mode).collect()
    }

    /// Total travel time in minutes (sum of leg durations).
    pub fn duration_mins(&self) -> u32 {
        match self {
            Itinerary::Direct { leg } => leg.duration_mins,
            Itinerary::Via { first, second } => {
                first.duration_mins.saturating_add(second.duration_mins)
            }
        }
    }

    /// Total fare (sum of leg fares).
    pub fn fare(&self) -> Fare {
        self.legs().into_iter().map(|leg| leg.fare).sum()
    }

    /// Departure time of the first leg.
    pub fn departure(&self) -> DepartureTime {
        match self {
            Itinerary::Direct { leg } => leg.departure,
            Itinerary::Via { first, .. } => first.departure,
        }
    }

    pub fn origin(&self) -> &City {
        match self {
            Itinerary::Direct { leg } => &leg.origin,
            Itinerary::Via { first, .. } => &first.origin,
        }
    }

    pub fn destination(&self) -> &City {
        match self {
            Itinerary::Direct { leg } => &leg.destination,
            Itinerary::Via { second, .. } => &second.destination,
        }
    }

    /// The intermediate city, if any.
    pub fn via_city(&self) -> Option<&City> {
        match self {
            Itinerary::Direct { .. } => None,
            Itinerary::Via { first, .. } => Some(&first.destination),
        }
    }

    /// Short label such as "Bus" or "Bus via Ajmer, then Train".
    pub fn describe(&self) -> String {
        match self {
            Itinerary::Direct { leg } => leg.mode.to_string(),
            Itinerary::Via { first, second } => {
                format!("{} via {}, then {}", first.mode, first.destination, second.mode)
            }
        }
    }
}
