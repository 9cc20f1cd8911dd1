//! Running a complete plan: enumerate, then select.

use serde::Serialize;
use tracing::debug;

use crate::catalog::RouteCatalog;
use crate::domain::Itinerary;

use super::enumerate::enumerate;
use super::optimal::{RankBy, select_by};
use super::request::PlanRequest;

/// Result of planning one direction of travel.
///
/// `candidates` is in enumeration order; `optimal` and `cheapest` are
/// copies of entries in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanOutcome {
    /// Fastest candidate (first on ties).
    pub optimal: Option<Itinerary>,

    /// Cheapest candidate (first on ties).
    pub cheapest: Option<Itinerary>,

    /// Every feasible itinerary.
    pub candidates: Vec<Itinerary>,
}

impl PlanOutcome {
    /// Build an outcome from enumerated candidates.
    pub fn from_candidates(candidates: Vec<Itinerary>) -> Self {
        let optimal = select_by(&candidates, RankBy::Duration).cloned();
        let cheapest = select_by(&candidates, RankBy::Fare).cloned();
        Self {
            optimal,
            cheapest,
            candidates,
        }
    }

    /// Returns true if no itinerary was found.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Outbound and return plans, computed independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundTrip {
    pub outbound: PlanOutcome,
    pub inbound: PlanOutcome,
}

/// Journey planner over a fixed catalog.
pub struct Planner<'a> {
    catalog: &'a RouteCatalog,
}

impl<'a> Planner<'a> {
    /// Create a planner.
    pub fn new(catalog: &'a RouteCatalog) -> Self {
        Self { catalog }
    }

    /// Plan one direction of travel.
    ///
    /// Unknown cities or an empty mode list simply produce an empty outcome.
    pub fn plan(&self, request: &PlanRequest) -> PlanOutcome {
        for city in [Some(&request.origin), Some(&request.destination), request.intermediate.as_ref()]
            .into_iter()
            .flatten()
        {
            if !self.catalog.contains_city(city) {
                debug!(city = %city, "Plan names a city outside the catalog");
            }
        }

        let outcome = PlanOutcome::from_candidates(enumerate(self.catalog, request));

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            via = ?request.intermediate.as_ref().map(|c| c.as_str()),
            modes = request.preferred_modes.len(),
            candidates = outcome.candidates.len(),
            "Plan complete"
        );

        outcome
    }

    /// Plan a round trip.
    ///
    /// The return plan swaps origin and destination and keeps the modes and
    /// intermediate stop. Neither direction affects the other.
    pub fn plan_round_trip(&self, request: &PlanRequest) -> RoundTrip {
        RoundTrip {
            outbound: self.plan(request),
            inbound: self.plan(&request.reversed()),
        }
    }
}
