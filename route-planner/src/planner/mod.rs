//! Itinerary planning.
//!
//! This module implements the core planning logic that answers:
//! "Which ways are there from A to B, optionally via C, and which is best?"
//!
//! Planning is a pure computation over the route catalog: enumerate every
//! feasible itinerary, then pick the fastest (and the cheapest).

mod enumerate;
mod optimal;
mod plan;
mod request;


pub use enumerate::{enumerate, enumerate_direct, enumerate_via};
pub use optimal::{RankBy, select_by, select_optimal};
pub use plan::{PlanOutcome, Planner, RoundTrip};
pub use request::{PlanRequest, PreferredModes};
