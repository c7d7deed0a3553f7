//! Identified geographic points.
//!
//! A [`Location`] is either a golf course (the destination category) or a
//! station (the transit category). Both labels share the same shape and
//! behaviour, so the label is carried as data rather than as a type.

use std::fmt;

use geo::Coord;
use thiserror::Error;

use crate::distance::haversine_km;

/// Category of a [`Location`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LocationKind {
    /// A golf course, used as the route destination.
    GolfCourse,
    /// A railway station, used as start and via points.
    Station,
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GolfCourse => f.write_str("golf course"),
            Self::Station => f.write_str("station"),
        }
    }
}

/// Errors returned by [`Location::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    /// Latitude was outside `[-90, 90]` or not finite.
    #[error("latitude {latitude} of {kind} {id} is outside [-90, 90]")]
    InvalidLatitude {
        /// Identifier of the rejected location.
        id: u64,
        /// Label of the rejected location.
        kind: LocationKind,
        /// Offending latitude in degrees.
        latitude: f64,
    },
    /// Longitude was outside `[-180, 180]` or not finite.
    #[error("longitude {longitude} of {kind} {id} is outside [-180, 180]")]
    InvalidLongitude {
        /// Identifier of the rejected location.
        id: u64,
        /// Label of the rejected location.
        kind: LocationKind,
        /// Offending longitude in degrees.
        longitude: f64,
    },
}

/// An immutable, identified point on the Earth's surface.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
///
/// ```
/// use golf_router_core::{Location, LocationKind};
///
/// # fn main() -> Result<(), golf_router_core::LocationError> {
/// let tokyo = Location::station(1, "Tokyo", 35.6814, 139.7661)?;
/// let course = Location::golf_course(7, "Tokyo Golf Club", 35.6895, 139.6917)?;
///
/// assert_eq!(tokyo.kind(), LocationKind::Station);
/// assert!(tokyo.distance_to(&course) > 6.0);
/// assert_eq!(tokyo.to_string(), "1: Tokyo (35.6814, 139.7661)");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Location {
    id: u64,
    name: String,
    kind: LocationKind,
    coord: Coord<f64>,
}

impl Location {
    /// Validate coordinates and construct a [`Location`].
    ///
    /// # Errors
    ///
    /// Returns [`LocationError`] when the latitude or longitude is outside
    /// its valid range or is not finite.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        kind: LocationKind,
        coord: Coord<f64>,
    ) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&coord.y) {
            return Err(LocationError::InvalidLatitude {
                id,
                kind,
                latitude: coord.y,
            });
        }
        if !(-180.0..=180.0).contains(&coord.x) {
            return Err(LocationError::InvalidLongitude {
                id,
                kind,
                longitude: coord.x,
            });
        }
        Ok(Self {
            id,
            name: name.into(),
            kind,
            coord,
        })
    }

    /// Construct a golf course from latitude and longitude in degrees.
    ///
    /// # Errors
    ///
    /// See [`Location::new`].
    pub fn golf_course(
        id: u64,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, LocationError> {
        Self::new(
            id,
            name,
            LocationKind::GolfCourse,
            Coord {
                x: longitude,
                y: latitude,
            },
        )
    }

    /// Construct a station from latitude and longitude in degrees.
    ///
    /// # Errors
    ///
    /// See [`Location::new`].
    pub fn station(
        id: u64,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, LocationError> {
        Self::new(
            id,
            name,
            LocationKind::Station,
            Coord {
                x: longitude,
                y: latitude,
            },
        )
    }

    /// Identifier within the location's dataset.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category label.
    #[must_use]
    pub const fn kind(&self) -> LocationKind {
        self.kind
    }

    /// Position as a `geo` coordinate (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        self.coord
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.coord.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.coord.x
    }

    /// Great-circle distance to `other` in kilometres.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        haversine_km(self.coord, other.coord)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}, {})",
            self.id,
            self.name,
            self.latitude(),
            self.longitude()
        )
    }
}
