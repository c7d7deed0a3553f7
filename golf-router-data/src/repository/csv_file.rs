//! CSV-backed [`LocationRepository`] implementation.

use std::collections::HashMap;
use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};
use csv::{ReaderBuilder, StringRecord, Trim};
use geo::Coord;
use golf_router_core::{Location, LocationError, LocationKind, LocationRepository, RepositoryError};
use thiserror::Error;

/// Column layout of a location CSV file.
///
/// Each dataset names its identifier, name and coordinate columns
/// differently; the schema maps them onto [`Location`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvSchema {
    /// Label given to every record of the file.
    pub kind: LocationKind,
    /// Header of the integer identifier column.
    pub id_column: &'static str,
    /// Header of the display name column.
    pub name_column: &'static str,
    /// Header of the latitude column, in decimal degrees.
    pub latitude_column: &'static str,
    /// Header of the longitude column, in decimal degrees.
    pub longitude_column: &'static str,
}

impl CsvSchema {
    /// Layout of the golf course dataset.
    pub const GOLF_COURSES: Self = Self {
        kind: LocationKind::GolfCourse,
        id_column: "id",
        name_column: "golfCourseName",
        latitude_column: "latitude",
        longitude_column: "longitude",
    };

    /// Layout of the station dataset.
    pub const STATIONS: Self = Self {
        kind: LocationKind::Station,
        id_column: "station_code",
        name_column: "station_name",
        latitude_column: "station_lat",
        longitude_column: "station_lon",
    };

    /// Default layout for `kind`.
    #[must_use]
    pub const fn for_kind(kind: LocationKind) -> Self {
        match kind {
            LocationKind::GolfCourse => Self::GOLF_COURSES,
            LocationKind::Station => Self::STATIONS,
        }
    }
}

/// Error raised while loading a location CSV file.
#[derive(Debug, Error)]
pub enum CsvRepositoryError {
    /// Opening the file failed.
    #[error("failed to open {path}: {source}")]
    Open {
        /// File that could not be opened.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The CSV reader failed to decode a row or the header.
    #[error("failed to read CSV from {path}: {source}")]
    Csv {
        /// File being read.
        path: Utf8PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// A column required by the schema is absent from the header.
    #[error("{path} has no `{column}` column")]
    MissingColumn {
        /// File being read.
        path: Utf8PathBuf,
        /// Missing header name.
        column: &'static str,
    },
    /// A cell could not be parsed as the expected number.
    #[error("{path}:{line}: `{column}` value {value:?} is not a valid number")]
    InvalidValue {
        /// File being read.
        path: Utf8PathBuf,
        /// One-based line number of the record.
        line: u64,
        /// Column holding the bad value.
        column: &'static str,
        /// Raw cell contents.
        value: String,
    },
    /// The record describes an invalid location.
    #[error("{path}:{line}: {source}")]
    InvalidRecord {
        /// File being read.
        path: Utf8PathBuf,
        /// One-based line number of the record.
        line: u64,
        /// Validation failure.
        #[source]
        source: LocationError,
    },
}

/// Positions of the schema columns within a header row.
struct ColumnIndices {
    id: usize,
    name: usize,
    latitude: usize,
    longitude: usize,
}

/// Locations loaded eagerly from a CSV file.
///
/// # Examples
///
/// ```
/// use golf_router_core::LocationRepository;
/// use golf_router_data::repository::{CsvLocationRepository, CsvSchema};
///
/// let csv = "station_code,station_name,station_lat,station_lon\n\
///            1130101,Tokyo,35.681391,139.766103\n";
/// let repo = CsvLocationRepository::from_reader(csv.as_bytes(), CsvSchema::STATIONS)?;
/// assert_eq!(repo.read_by_id(1_130_101)?.name(), "Tokyo");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvLocationRepository {
    schema: CsvSchema,
    locations: Vec<Location>,
    by_id: HashMap<u64, usize>,
}

impl CsvLocationRepository {
    /// Load every record of the CSV file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CsvRepositoryError`] when the file cannot be read, lacks a
    /// schema column, or contains an unparsable or out-of-range record.
    pub fn open(path: &Utf8Path, schema: CsvSchema) -> Result<Self, CsvRepositoryError> {
        let file = golf_router_fs::open_utf8_file(path).map_err(|source| {
            CsvRepositoryError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let locations = read_locations(file, schema, path)?;
        log::debug!("loaded {} {} records from {path}", locations.len(), schema.kind);
        Ok(Self::from_locations(schema, locations))
    }

    /// Load every record from an arbitrary reader.
    ///
    /// # Errors
    ///
    /// See [`CsvLocationRepository::open`].
    pub fn from_reader<R: Read>(reader: R, schema: CsvSchema) -> Result<Self, CsvRepositoryError> {
        let locations = read_locations(reader, schema, Utf8Path::new("<reader>"))?;
        Ok(Self::from_locations(schema, locations))
    }

    fn from_locations(schema: CsvSchema, locations: Vec<Location>) -> Self {
        let mut by_id = HashMap::with_capacity(locations.len());
        for (index, location) in locations.iter().enumerate() {
            by_id.entry(location.id()).or_insert(index);
        }
        Self {
            schema,
            locations,
            by_id,
        }
    }

    /// Column layout used to load this repository.
    #[must_use]
    pub const fn schema(&self) -> CsvSchema {
        self.schema
    }

    /// Number of loaded records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the file held no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl LocationRepository for CsvLocationRepository {
    fn kind(&self) -> LocationKind {
        self.schema.kind
    }

    fn read_all(&self) -> Vec<Location> {
        self.locations.clone()
    }

    fn read_by_id(&self, id: u64) -> Result<Location, RepositoryError> {
        self.by_id
            .get(&id)
            .and_then(|&index| self.locations.get(index))
            .cloned()
            .ok_or(RepositoryError::NotFound {
                kind: self.schema.kind,
                id,
            })
    }
}

fn read_locations<R: Read>(
    reader: R,
    schema: CsvSchema,
    path: &Utf8Path,
) -> Result<Vec<Location>, CsvRepositoryError> {
    let csv_error = |source: csv::Error| CsvRepositoryError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = locate_columns(&headers, schema, path)?;

    let mut locations = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        locations.push(parse_record(&record, &columns, schema, path)?);
    }
    Ok(locations)
}

fn locate_columns(
    headers: &StringRecord,
    schema: CsvSchema,
    path: &Utf8Path,
) -> Result<ColumnIndices, CsvRepositoryError> {
    let find = |column: &'static str| {
        headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| CsvRepositoryError::MissingColumn {
                path: path.to_path_buf(),
                column,
            })
    };
    Ok(ColumnIndices {
        id: find(schema.id_column)?,
        name: find(schema.name_column)?,
        latitude: find(schema.latitude_column)?,
        longitude: find(schema.longitude_column)?,
    })
}

fn parse_record(
    record: &StringRecord,
    columns: &ColumnIndices,
    schema: CsvSchema,
    path: &Utf8Path,
) -> Result<Location, CsvRepositoryError> {
    let line = record.position().map_or(0, csv::Position::line);
    let cell = |index: usize| record.get(index).unwrap_or_default();
    let invalid = |column: &'static str, value: &str| CsvRepositoryError::InvalidValue {
        path: path.to_path_buf(),
        line,
        column,
        value: value.to_owned(),
    };

    let raw_id = cell(columns.id);
    let id = raw_id
        .parse::<u64>()
        .map_err(|_| invalid(schema.id_column, raw_id))?;
    let raw_latitude = cell(columns.latitude);
    let latitude = raw_latitude
        .parse::<f64>()
        .map_err(|_| invalid(schema.latitude_column, raw_latitude))?;
    let raw_longitude = cell(columns.longitude);
    let longitude = raw_longitude
        .parse::<f64>()
        .map_err(|_| invalid(schema.longitude_column, raw_longitude))?;

    Location::new(
        id,
        cell(columns.name),
        schema.kind,
        Coord {
            x: longitude,
            y: latitude,
        },
    )
    .map_err(|source| CsvRepositoryError::InvalidRecord {
        path: path.to_path_buf(),
        line,
        source,
    })
}
