//! Itinerary enumeration.
//!
//! Lists every feasible itinerary for a request. Direct requests try one leg
//! per preferred mode; requests with an intermediate stop try every ordered
//! pair of preferred modes (the same mode twice included). Combinations with
//! a missing leg are skipped.

use crate::catalog::RouteCatalog;
use crate::domain::{City, Itinerary};

use super::request::{PlanRequest, PreferredModes};

/// Enumerate the feasible itineraries for a request.
///
/// The output order follows the preferred-mode order: for two-leg
/// itineraries the first leg's mode is the outer loop and the second leg's
/// mode the inner loop. Returns an empty vector when nothing resolves.
pub fn enumerate(catalog: &RouteCatalog, request: &PlanRequest) -> Vec<Itinerary> {
    match &request.intermediate {
        None => enumerate_direct(
            catalog,
            &request.origin,
            &request.destination,
            &request.preferred_modes,
        ),
        Some(via) => enumerate_via(
            catalog,
            &request.origin,
            via,
            &request.destination,
            &request.preferred_modes,
        ),
    }
}

/// One itinerary per preferred mode that has a direct route.
pub fn enumerate_direct(
    catalog: &RouteCatalog,
    origin: &City,
    destination: &City,
    modes: &PreferredModes,
) -> Vec<Itinerary> {
    modes
        .iter()
        .filter_map(|mode| catalog.lookup(origin, destination, mode))
        .map(|record| Itinerary::direct(record.to_leg()))
        .collect()
}

/// One itinerary per (first mode, second mode) pair where both legs exist.
pub fn enumerate_via(
    catalog: &RouteCatalog,
    origin: &City,
    via: &City,
    destination: &City,
    modes: &PreferredModes,
) -> Vec<Itinerary> {
    let mut itineraries = Vec::new();

    for first_mode in modes.iter() {
        let Some(first) = catalog.lookup(origin, via, first_mode) else {
            continue;
        };

        for second_mode in modes.iter() {
            let Some(second) = catalog.lookup(via, destination, second_mode) else {
                continue;
            };

            // Both records share `via`, so the legs always connect.
            if let Some(itinerary) = Itinerary::via(first.to_leg(), second.to_leg()) {
                itineraries.push(itinerary);
            }
        }
    }

    itineraries
}
