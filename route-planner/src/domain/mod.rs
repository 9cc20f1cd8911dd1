//! Domain types for the route planner.
//!
//! This module contains the core domain model types that represent
//! validated route data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod city;
mod error;
mod fare;
mod itinerary;
mod location;
mod mode;
mod route;
mod time;

pub use city::{City, InvalidCity};
pub use error::DomainError;
pub use fare::{Fare, InvalidFare};
pub use itinerary::Itinerary;
pub use location::Location;
pub use mode::{InvalidMode, Mode};
pub use route::{Leg, RouteKey, RouteRecord};
pub use time::{DepartureTime, TimeError};
