//! Directions provider trait with its request and response types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use geo::Coord;
use thiserror::Error;

use super::error::DirectionsError;

/// Means of travel requested from the mapping service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TravelMode {
    /// Road network by car.
    #[default]
    Driving,
    /// Pedestrian paths.
    Walking,
    /// Cycle paths and roads.
    Bicycling,
    /// Public transport.
    Transit,
}

impl TravelMode {
    /// Lowercase name understood by directions APIs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`TravelMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown travel mode {0:?} (expected driving, walking, bicycling or transit)")]
pub struct ParseTravelModeError(pub String);

impl FromStr for TravelMode {
    type Err = ParseTravelModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            "bicycling" => Ok(Self::Bicycling),
            "transit" => Ok(Self::Transit),
            _ => Err(ParseTravelModeError(value.to_owned())),
        }
    }
}

/// Caller-controlled routing options forwarded to the provider unmodified.
///
/// # Examples
///
/// ```
/// use golf_router_core::{DirectionsOptions, TravelMode};
///
/// let options = DirectionsOptions::default()
///     .with_mode(TravelMode::Walking)
///     .with_option("avoid", "tolls");
/// assert_eq!(options.mode, TravelMode::Walking);
/// assert_eq!(options.extra.get("avoid").map(String::as_str), Some("tolls"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectionsOptions {
    /// Travel mode. Defaults to driving.
    pub mode: TravelMode,
    /// Additional provider-specific parameters such as `avoid` or
    /// `departure_time`.
    pub extra: BTreeMap<String, String>,
}

impl DirectionsOptions {
    /// Set the travel mode.
    #[must_use]
    pub fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }

    /// Add a pass-through parameter, replacing any previous value for `key`.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// A single trip request: origin, ordered waypoints and destination.
///
/// Coordinates use `x = longitude` and `y = latitude`.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsQuery {
    /// Trip origin.
    pub origin: Coord<f64>,
    /// Trip destination.
    pub destination: Coord<f64>,
    /// Intermediate stops in caller order.
    pub waypoints: Vec<Coord<f64>>,
    /// Ask the provider to reorder `waypoints` for the fastest trip.
    pub optimize_waypoints: bool,
    /// Mode and pass-through options.
    pub options: DirectionsOptions,
}

/// One leg between consecutive stops of a [`DirectionsRoute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionsLeg {
    /// Travel time for the leg.
    pub duration: Duration,
}

/// A route proposed by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectionsRoute {
    /// Visiting order as indices into [`DirectionsQuery::waypoints`].
    pub waypoint_order: Vec<usize>,
    /// Legs in travel order.
    pub legs: Vec<DirectionsLeg>,
}

/// Provider response. The first route is the recommended one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directions {
    /// Candidate routes, best first.
    pub routes: Vec<DirectionsRoute>,
}

/// Fetch directions for a trip from a mapping service.
///
/// Implementations issue one request per call and report failures as
/// [`DirectionsError`] rather than returning an empty [`Directions`].
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use golf_router_core::{
///     Directions, DirectionsError, DirectionsLeg, DirectionsProvider, DirectionsQuery,
///     DirectionsRoute,
/// };
///
/// struct ReversingProvider;
///
/// impl DirectionsProvider for ReversingProvider {
///     fn directions(&self, query: &DirectionsQuery) -> Result<Directions, DirectionsError> {
///         let waypoint_order = (0..query.waypoints.len()).rev().collect();
///         let legs = vec![DirectionsLeg { duration: Duration::from_secs(60) }; query.waypoints.len() + 1];
///         Ok(Directions { routes: vec![DirectionsRoute { waypoint_order, legs }] })
///     }
/// }
/// ```
pub trait DirectionsProvider {
    /// Request directions for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionsError`] when the service cannot be reached, rejects
    /// the request or finds no route.
    fn directions(&self, query: &DirectionsQuery) -> Result<Directions, DirectionsError>;
}

impl<P: DirectionsProvider + ?Sized> DirectionsProvider for &P {
    fn directions(&self, query: &DirectionsQuery) -> Result<Directions, DirectionsError> {
        (**self).directions(query)
    }
}
