//! Per-mode route tables.

use std::collections::BTreeMap;

use crate::domain::{City, DomainError, RouteRecord};

/// All routes for one transport mode, keyed by (origin, destination).
///
/// Stored as nested maps so lookups borrow the caller's cities instead of
/// building a composite key. Iteration order is sorted, which keeps any
/// listing of the catalog deterministic.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: BTreeMap<City, BTreeMap<City, RouteRecord>>,
    len: usize,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route.
    ///
    /// Fails with [`DomainError::DuplicateRoute`] if the table already has a
    /// route between the same cities; the existing record is kept.
    pub fn insert(&mut self, record: RouteRecord) -> Result<(), DomainError> {
        let by_destination = self.routes.entry(record.origin().clone()).or_default();

        if by_destination.contains_key(record.destination()) {
            return Err(DomainError::DuplicateRoute(record.key()));
        }

        by_destination.insert(record.destination().clone(), record);
        self.len += 1;
        Ok(())
    }

    /// Exact lookup of the route from `origin` to `destination`.
    pub fn get(&self, origin: &City, destination: &City) -> Option<&RouteRecord> {
        self.routes.get(origin)?.get(destination)
    }

    /// Iterate over all routes, sorted by origin then destination.
    pub fn iter(&self) -> impl Iterator<Item = &RouteRecord> {
        self.routes.values().flat_map(|by_dest| by_dest.values())
    }

    /// Number of routes in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DepartureTime, Fare, Mode};

    fn city(s: &str) -> City {
        City::parse(s).unwrap()
    }

    fn record(from: &str, to: &str, fare: u64) -> RouteRecord {
        RouteRecord::new(
            city(from),
            city(to),
            Mode::Bus,
            Fare::from_rupees(fare),
            60,
            DepartureTime::parse("08:00").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn insert_and_get() {
        let mut table = RouteTable::new();
        table.insert(record("Jaipur", "Ajmer", 150)).unwrap();

        let found = table.get(&city("Jaipur"), &city("Ajmer")).unwrap();
        assert_eq!(found.fare(), Fare::from_rupees(150));
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn lookup_is_directional() {
        let mut table = RouteTable::new();
        table.insert(record("Jaipur", "Ajmer", 150)).unwrap();

        assert!(table.get(&city("Ajmer"), &city("Jaipur")).is_none());
    }

    #[test]
    fn missing_routes_return_none() {
        let table = RouteTable::new();
        assert!(table.is_empty());
        assert!(table.get(&city("Jaipur"), &city("Ajmer")).is_none());
    }

    #[test]
    fn duplicate_is_rejected_and_first_kept() {
        let mut table = RouteTable::new();
        table.insert(record("Jaipur", "Ajmer", 150)).unwrap();

        let err = table.insert(record("Jaipur", "Ajmer", 999)).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateRoute(_)));

        let kept = table.get(&city("Jaipur"), &city("Ajmer")).unwrap();
        assert_eq!(kept.fare(), Fare::from_rupees(150));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn iter_is_sorted() {
        let mut table = RouteTable::new();
        table.insert(record("Kota", "Ajmer", 1)).unwrap();
        table.insert(record("Ajmer", "Kota", 2)).unwrap();
        table.insert(record("Ajmer", "Bikaner", 3)).unwrap();

        let keys: Vec<_> = table
            .iter()
            .map(|r| (r.origin().to_string(), r.destination().to_string()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Ajmer".to_string(), "Bikaner".to_string()),
                ("Ajmer".to_string(), "Kota".to_string()),
                ("Kota".to_string(), "Ajmer".to_string()),
            ]
        );
    }
}
