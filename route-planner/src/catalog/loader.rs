//! CSV loading for the route catalog.
//!
//! Reference data comes as one CSV per mode plus a locations table. The
//! files in the wild disagree on column names (`start_city` vs
//! `start_district`) and on duration units (`duration_min` vs
//! `duration_hr`); this module normalizes both so the rest of the crate only
//! sees whole minutes.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::info;

use crate::domain::{City, DepartureTime, DomainError, Fare, Location, Mode, RouteRecord};

use super::error::DataLoadError;
use super::{CatalogBuilder, RouteCatalog};

const ORIGIN_COLUMNS: &[&str] = &["start_location", "start_city", "start_district"];
const DESTINATION_COLUMNS: &[&str] = &["end_location", "end_city", "end_district"];
const FARE_COLUMNS: &[&str] = &["fare"];
const MINUTES_COLUMNS: &[&str] = &["duration", "duration_min", "duration_mins"];
const HOURS_COLUMNS: &[&str] = &["duration_hr", "duration_hrs", "duration_hours"];
const DEPARTURE_COLUMNS: &[&str] = &["departure_time"];
const NAME_COLUMNS: &[&str] = &["name", "city", "district"];
const LATITUDE_COLUMNS: &[&str] = &["latitude", "lat"];
const LONGITUDE_COLUMNS: &[&str] = &["longitude", "lon", "lng"];

/// File names of the reference tables inside the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFiles {
    pub locations: PathBuf,
    pub bus: PathBuf,
    pub train: PathBuf,
    pub metro: PathBuf,
}

impl CatalogFiles {
    /// The route file for a mode.
    pub fn routes(&self, mode: Mode) -> &Path {
        match mode {
            Mode::Bus => &self.bus,
            Mode::Train => &self.train,
            Mode::Metro => &self.metro,
        }
    }
}

impl Default for CatalogFiles {
    fn default() -> Self {
        Self {
            locations: PathBuf::from("locations.csv"),
            bus: PathBuf::from("buses.csv"),
            train: PathBuf::from("trains.csv"),
            metro: PathBuf::from("metros.csv"),
        }
    }
}

/// Load the full catalog from a data directory.
///
/// Locations are read first; every route endpoint must then appear in the
/// locations table. Stops at the first error.
pub fn load_catalog(dir: &Path, files: &CatalogFiles) -> Result<RouteCatalog, DataLoadError> {
    let mut builder = RouteCatalog::builder();

    let path = dir.join(&files.locations);
    let count = read_locations(&mut builder, open(&path)?, &display_name(&path))?;
    info!(path = %path.display(), locations = count, "Loaded locations");

    for mode in Mode::ALL {
        let path = dir.join(files.routes(mode));
        let count = read_routes(&mut builder, open(&path)?, mode, &display_name(&path))?;
        info!(path = %path.display(), %mode, routes = count, "Loaded routes");
    }

    Ok(builder.build())
}

/// Read a locations table into the builder.
///
/// Returns the number of locations read.
pub fn read_locations<R: Read>(
    builder: &mut CatalogBuilder,
    reader: R,
    file: &str,
) -> Result<usize, DataLoadError> {
    let mut csv = csv_reader(reader);
    let headers = headers(&mut csv, file)?;

    let name_col = require_column(&headers, NAME_COLUMNS, "name", file)?;
    let lat_col = require_column(&headers, LATITUDE_COLUMNS, "latitude", file)?;
    let lon_col = require_column(&headers, LONGITUDE_COLUMNS, "longitude", file)?;

    let mut count = 0;
    for row in csv.records() {
        let row = row.map_err(|source| csv_error(file, source))?;
        let line = line_of(&row);
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let city = City::parse(cell(name_col)).map_err(|e| invalid(file, line, "name", e))?;
        let latitude = parse_coordinate(cell(lat_col))
            .map_err(|reason| invalid(file, line, "latitude", reason))?;
        let longitude = parse_coordinate(cell(lon_col))
            .map_err(|reason| invalid(file, line, "longitude", reason))?;

        let location = Location::new(city, latitude, longitude)
            .map_err(|source| invalid_row(file, line, source))?;
        builder
            .add_location(location)
            .map_err(|source| invalid_row(file, line, source))?;
        count += 1;
    }

    Ok(count)
}

/// Read one mode's route table into the builder.
///
/// Both endpoints of every route must already have a location in the
/// builder. Returns the number of routes read.
pub fn read_routes<R: Read>(
    builder: &mut CatalogBuilder,
    reader: R,
    mode: Mode,
    file: &str,
) -> Result<usize, DataLoadError> {
    let mut csv = csv_reader(reader);
    let headers = headers(&mut csv, file)?;
    let columns = RouteColumns::resolve(&headers, file)?;

    let mut count = 0;
    for row in csv.records() {
        let row = row.map_err(|source| csv_error(file, source))?;
        let line = line_of(&row);
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let origin =
            City::parse(cell(columns.origin)).map_err(|e| invalid(file, line, "origin", e))?;
        let destination = City::parse(cell(columns.destination))
            .map_err(|e| invalid(file, line, "destination", e))?;
        let fare = Fare::parse(cell(columns.fare)).map_err(|e| invalid(file, line, "fare", e))?;
        let duration_mins = columns
            .duration
            .parse(cell(columns.duration.index()))
            .map_err(|reason| invalid(file, line, "duration", reason))?;
        let departure = DepartureTime::parse(cell(columns.departure))
            .map_err(|e| invalid(file, line, "departure_time", e))?;

        for city in [&origin, &destination] {
            if !builder.has_location(city) {
                return Err(invalid_row(
                    file,
                    line,
                    DomainError::UnknownCity(city.to_string()),
                ));
            }
        }

        let record = RouteRecord::new(origin, destination, mode, fare, duration_mins, departure)
            .map_err(|source| invalid_row(file, line, source))?;
        builder
            .add_route(record)
            .map_err(|source| invalid_row(file, line, source))?;
        count += 1;
    }

    Ok(count)
}

/// Where a route table keeps its duration, and in which unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DurationColumn {
    Minutes(usize),
    Hours(usize),
}

impl DurationColumn {
    fn index(self) -> usize {
        match self {
            DurationColumn::Minutes(idx) | DurationColumn::Hours(idx) => idx,
        }
    }

    /// Normalize a duration cell to whole minutes.
    fn parse(self, raw: &str) -> Result<u32, String> {
        match self {
            DurationColumn::Minutes(_) => raw
                .parse::<u32>()
                .map_err(|_| format!("expected a whole number of minutes, got {raw:?}")),
            DurationColumn::Hours(_) => {
                let hours: f64 = raw
                    .parse()
                    .map_err(|_| format!("expected a number of hours, got {raw:?}"))?;
                if !hours.is_finite() || hours <= 0.0 {
                    return Err(format!("hours must be positive, got {raw:?}"));
                }
                let mins = (hours * 60.0).round();
                if mins < 1.0 || mins > f64::from(u32::MAX) {
                    return Err(format!("{raw:?} hours does not round to a valid minute count"));
                }
                Ok(mins as u32)
            }
        }
    }
}

/// Column positions of a route table.
#[derive(Debug, Clone, Copy)]
struct RouteColumns {
    origin: usize,
    destination: usize,
    fare: usize,
    duration: DurationColumn,
    departure: usize,
}

impl RouteColumns {
    fn resolve(headers: &StringRecord, file: &str) -> Result<Self, DataLoadError> {
        // Minutes win if a file carries both units.
        let duration = find_column(headers, MINUTES_COLUMNS)
            .map(DurationColumn::Minutes)
            .or_else(|| find_column(headers, HOURS_COLUMNS).map(DurationColumn::Hours))
            .ok_or_else(|| DataLoadError::MissingColumn {
                file: file.to_string(),
                column: "duration",
            })?;

        Ok(Self {
            origin: require_column(headers, ORIGIN_COLUMNS, "start_location", file)?,
            destination: require_column(headers, DESTINATION_COLUMNS, "end_location", file)?,
            fare: require_column(headers, FARE_COLUMNS, "fare", file)?,
            duration,
            departure: require_column(headers, DEPARTURE_COLUMNS, "departure_time", file)?,
        })
    }
}

fn open(path: &Path) -> Result<File, DataLoadError> {
    File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn headers<R: Read>(csv: &mut csv::Reader<R>, file: &str) -> Result<StringRecord, DataLoadError> {
    csv.headers()
        .cloned()
        .map_err(|source| csv_error(file, source))
}

fn find_column(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.trim();
        names.iter().any(|name| header.eq_ignore_ascii_case(name))
    })
}

fn require_column(
    headers: &StringRecord,
    names: &[&str],
    column: &'static str,
    file: &str,
) -> Result<usize, DataLoadError> {
    find_column(headers, names).ok_or_else(|| DataLoadError::MissingColumn {
        file: file.to_string(),
        column,
    })
}

fn parse_coordinate(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("expected a decimal number, got {raw:?}"))?;
    if !value.is_finite() {
        return Err(format!("expected a finite number, got {raw:?}"));
    }
    Ok(value)
}

fn line_of(row: &StringRecord) -> u64 {
    row.position().map_or(0, csv::Position::line)
}

fn csv_error(file: &str, source: csv::Error) -> DataLoadError {
    DataLoadError::Csv {
        file: file.to_string(),
        source,
    }
}

fn invalid_row(file: &str, line: u64, source: DomainError) -> DataLoadError {
    DataLoadError::Invalid {
        file: file.to_string(),
        line,
        source,
    }
}

fn invalid(file: &str, line: u64, column: &'static str, reason: impl fmt::Display) -> DataLoadError {
    DataLoadError::InvalidValue {
        file: file.to_string(),
        line,
        column,
        reason: reason.to_string(),
    }
}
