//! Choosing the best itinerary.
//!
//! The optimal itinerary is the fastest one: direct and two-leg itineraries
//! alike are ranked by total duration, never by fare. Fare ranking exists
//! separately so callers can also show the cheapest option.

use crate::domain::Itinerary;

/// Key used to compare itineraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    /// Total travel time, shortest first.
    Duration,

    /// Total fare, cheapest first.
    Fare,
}

/// Select the fastest itinerary.
///
/// Ties go to the itinerary that comes first in `itineraries`. Returns
/// `None` for an empty slice. The slice is not reordered.
pub fn select_optimal(itineraries: &[Itinerary]) -> Option<&Itinerary> {
    select_by(itineraries, RankBy::Duration)
}

/// Select the first itinerary with the minimum value of `key`.
pub fn select_by(itineraries: &[Itinerary], key: RankBy) -> Option<&Itinerary> {
    // min_by_key keeps the first of several equal minima.
    match key {
        RankBy::Duration => itineraries.iter().min_by_key(|i| i.duration_mins()),
        RankBy::Fare => itineraries.iter().min_by_key(|i| i.fare()),
    }
}
