//! City locations.

use serde::Serialize;

use super::City;
use super::error::DomainError;

/// A city with its coordinates.
///
/// Coordinates are carried for map renderers; planning never uses them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub city: City,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Create a location, validating the coordinate ranges.
    pub fn new(city: City, latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::InvalidCoordinates {
                city: city.to_string(),
                reason: "latitude must be within -90..=90",
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates {
                city: city.to_string(),
                reason: "longitude must be within -180..=180",
            });
        }

        Ok(Self {
            city,
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jaipur() -> City {
        City::parse("Jaipur").unwrap()
    }

    #[test]
    fn valid_coordinates() {
        let loc = Location::new(jaipur(), 26.9124, 75.7873).unwrap();
        assert_eq!(loc.city, jaipur());
        assert_eq!(loc.latitude, 26.9124);
        assert_eq!(loc.longitude, 75.7873);
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert!(Location::new(jaipur(), 90.0, 180.0).is_ok());
        assert!(Location::new(jaipur(), -90.0, -180.0).is_ok());
    }

    #[test]
    fn reject_out_of_range() {
        assert!(Location::new(jaipur(), 90.5, 0.0).is_err());
        assert!(Location::new(jaipur(), 0.0, -180.1).is_err());
        assert!(Location::new(jaipur(), f64::NAN, 0.0).is_err());
    }
}
