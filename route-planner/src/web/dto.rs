//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::booking::{BookingFlow, BookingState};
use crate::domain::{City, Fare, Itinerary, Leg, Location, Mode};
use crate::planner::{PlanOutcome, PlanRequest, PreferredModes};

/// Request to plan a journey.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequestBody {
    /// Origin city name
    pub origin: String,

    /// Destination city name
    pub destination: String,

    /// Preferred modes in order. Missing means every mode.
    #[serde(default)]
    pub modes: Option<Vec<String>>,

    /// Intermediate stop; empty or "None" means a direct journey
    #[serde(default)]
    pub intermediate: Option<String>,

    /// Also plan the return journey
    #[serde(default)]
    pub round_trip: bool,
}

impl PlanRequestBody {
    /// Validate the body into a planner request.
    ///
    /// Errors are messages suitable for a 400 response.
    pub fn to_request(&self) -> Result<PlanRequest, String> {
        let origin = City::parse(&self.origin).map_err(|e| format!("origin: {e}"))?;
        let destination =
            City::parse(&self.destination).map_err(|e| format!("destination: {e}"))?;

        let preferred_modes = match &self.modes {
            None => PreferredModes::all(),
            Some(names) => names
                .iter()
                .map(|name| Mode::parse(name))
                .collect::<Result<PreferredModes, _>>()
                .map_err(|e| e.to_string())?,
        };

        let mut request = PlanRequest::direct(origin, destination, preferred_modes);

        let intermediate = self
            .intermediate
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("none"));
        if let Some(name) = intermediate {
            let city = City::parse(name).map_err(|e| format!("intermediate: {e}"))?;
            request = request.via(city);
        }

        Ok(request)
    }
}

/// One leg of an itinerary.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub origin: String,
    pub destination: String,
    pub mode: Mode,
    /// Departure time, "HH:MM"
    pub departure: String,
    pub duration_mins: u32,
    pub fare: Fare,
}

impl LegResult {
    /// Create from a domain Leg.
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            origin: leg.origin.to_string(),
            destination: leg.destination.to_string(),
            mode: leg.mode,
            departure: leg.departure.to_string(),
            duration_mins: leg.duration_mins,
            fare: leg.fare,
        }
    }
}

/// An itinerary with its totals.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    /// Human-readable summary, e.g. "Bus via Ajmer, then Train"
    pub summary: String,

    /// Intermediate city, for via itineraries
    pub via: Option<String>,

    /// Departure of the first leg
    pub departure: String,

    /// Total duration in minutes
    pub duration_mins: u32,

    /// Total fare
    pub fare: Fare,

    pub legs: Vec<LegResult>,
}

impl ItineraryResult {
    /// Create from a domain Itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            summary: itinerary.describe(),
            via: itinerary.via_city().map(|c| c.to_string()),
            departure: itinerary.departure().to_string(),
            duration_mins: itinerary.duration_mins(),
            fare: itinerary.fare(),
            legs: itinerary.legs().into_iter().map(LegResult::from_leg).collect(),
        }
    }
}

/// Planning result for one direction.
#[derive(Debug, Serialize)]
pub struct OutcomeResult {
    /// Fastest itinerary, `null` if none is feasible
    pub optimal: Option<ItineraryResult>,

    /// Cheapest itinerary, `null` if none is feasible
    pub cheapest: Option<ItineraryResult>,

    /// Every feasible itinerary, in enumeration order
    pub candidates: Vec<ItineraryResult>,
}

impl OutcomeResult {
    pub fn from_outcome(outcome: &PlanOutcome) -> Self {
        Self {
            optimal: outcome.optimal.as_ref().map(ItineraryResult::from_itinerary),
            cheapest: outcome.cheapest.as_ref().map(ItineraryResult::from_itinerary),
            candidates: outcome
                .candidates
                .iter()
                .map(ItineraryResult::from_itinerary)
                .collect(),
        }
    }
}

/// Response for journey planning.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub outbound: OutcomeResult,

    /// Present only for round trips
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound: Option<OutcomeResult>,
}

/// A city with its coordinates.
#[derive(Debug, Serialize)]
pub struct CityResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityResult {
    pub fn from_location(location: &Location) -> Self {
        Self {
            name: location.city.to_string(),
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

/// Response listing known cities.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<CityResult>,
}

/// Request to choose the journey for a booking.
///
/// The server re-plans with the embedded plan request and picks candidates
/// by index.
#[derive(Debug, Deserialize)]
pub struct SelectJourneyBody {
    #[serde(flatten)]
    pub plan: PlanRequestBody,

    /// Travel date, "YYYY-MM-DD"
    pub journey_date: NaiveDate,

    /// Index into the outbound candidates
    pub outbound_choice: usize,

    /// Return date; required with `return_choice`
    #[serde(default)]
    pub return_date: Option<NaiveDate>,

    /// Index into the return candidates
    #[serde(default)]
    pub return_choice: Option<usize>,
}

/// A booking session and where it is.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    /// Session id
    pub id: String,

    /// Ticket reference the booking will carry
    pub reference: String,

    pub state: BookingState,
}

impl BookingResponse {
    pub fn new(id: impl Into<String>, flow: BookingFlow) -> Self {
        Self {
            id: id.into(),
            reference: flow.reference().to_string(),
            state: flow.state().clone(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
