//! Route catalog: the static reference data every plan is computed from.
//!
//! The catalog holds one [`RouteTable`] per transport mode and the known
//! city locations. It is built once at startup (see [`load_catalog`]) and
//! shared read-only afterwards.

mod error;
mod loader;
mod table;

use std::collections::{BTreeMap, BTreeSet};

pub use error::DataLoadError;
pub use loader::{CatalogFiles, load_catalog, read_locations, read_routes};
pub use table::RouteTable;

use crate::domain::{City, DomainError, Location, Mode, RouteRecord};

/// Immutable route reference data.
///
/// Tables are indexed by [`Mode::index`], so choosing the table for a mode
/// never involves comparing names.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    tables: [RouteTable; 3],
    locations: BTreeMap<City, Location>,
    cities: BTreeSet<City>,
}

impl RouteCatalog {
    /// Start building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Look up the route from `origin` to `destination` on `mode`.
    ///
    /// Exact match only. Returns `None` when no such route exists,
    /// including when either city is unknown.
    pub fn lookup(&self, origin: &City, destination: &City, mode: Mode) -> Option<&RouteRecord> {
        self.table(mode).get(origin, destination)
    }

    /// The route table for one mode.
    pub fn table(&self, mode: Mode) -> &RouteTable {
        &self.tables[mode.index()]
    }

    /// Iterate over the routes of one mode.
    pub fn routes(&self, mode: Mode) -> impl Iterator<Item = &RouteRecord> {
        self.table(mode).iter()
    }

    /// Returns true if the city appears in the locations table or as the
    /// endpoint of any route.
    pub fn contains_city(&self, city: &City) -> bool {
        self.cities.contains(city)
    }

    /// All known cities, sorted.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// All cities with coordinates, sorted by name.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Coordinates of a city, if the locations table has it.
    pub fn location(&self, city: &City) -> Option<&Location> {
        self.locations.get(city)
    }

    /// Total number of routes across all modes.
    pub fn len(&self) -> usize {
        self.tables.iter().map(RouteTable::len).sum()
    }

    /// Returns true if the catalog has no routes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builder for [`RouteCatalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: RouteCatalog,
}

impl CatalogBuilder {
    /// Add a city location.
    ///
    /// Fails if the city already has a location.
    pub fn add_location(&mut self, location: Location) -> Result<&mut Self, DomainError> {
        if self.catalog.locations.contains_key(&location.city) {
            return Err(DomainError::DuplicateLocation(location.city.to_string()));
        }
        self.catalog.cities.insert(location.city.clone());
        self.catalog
            .locations
            .insert(location.city.clone(), location);
        Ok(self)
    }

    /// Add a route to the table for its mode.
    ///
    /// Fails if a route with the same (origin, destination, mode) exists.
    pub fn add_route(&mut self, record: RouteRecord) -> Result<&mut Self, DomainError> {
        let origin = record.origin().clone();
        let destination = record.destination().clone();
        self.catalog.tables[record.mode().index()].insert(record)?;
        self.catalog.cities.insert(origin);
        self.catalog.cities.insert(destination);
        Ok(self)
    }

    /// Returns true if a location was added for this city.
    pub fn has_location(&self, city: &City) -> bool {
        self.catalog.locations.contains_key(city)
    }

    /// Finish building.
    pub fn build(self) -> RouteCatalog {
        self.catalog
    }
}
