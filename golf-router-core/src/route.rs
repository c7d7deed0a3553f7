//! Ordered routes and their costs.

use std::time::Duration;

use crate::Location;

/// An ordered path from a start, through every via, to a goal.
///
/// # Examples
/// ```
/// use golf_router_core::{Location, Route};
///
/// # fn main() -> Result<(), golf_router_core::LocationError> {
/// let start = Location::station(1, "Tokyo", 35.6814, 139.7661)?;
/// let goal = Location::golf_course(1, "Tokyo Golf Club", 35.6895, 139.6917)?;
/// let route = Route::new(vec![start.clone(), goal.clone()]);
///
/// assert_eq!(route.start(), Some(&start));
/// assert_eq!(route.goal(), Some(&goal));
/// assert!(route.vias().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Route {
    stops: Vec<Location>,
}

impl Route {
    /// Construct a route from stops in visiting order.
    #[must_use]
    pub const fn new(stops: Vec<Location>) -> Self {
        Self { stops }
    }

    /// All stops in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[Location] {
        &self.stops
    }

    /// First stop.
    #[must_use]
    pub fn start(&self) -> Option<&Location> {
        self.stops.first()
    }

    /// Last stop.
    #[must_use]
    pub fn goal(&self) -> Option<&Location> {
        self.stops.last()
    }

    /// Stops strictly between the start and the goal.
    #[must_use]
    pub fn vias(&self) -> &[Location] {
        match self.stops.as_slice() {
            [_, vias @ .., _] => vias,
            _ => &[],
        }
    }

    /// Number of stops, including start and goal.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the route has no stops.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Consume the route, returning its stops.
    #[must_use]
    pub fn into_stops(self) -> Vec<Location> {
        self.stops
    }
}

/// Scalar cost of a route under one cost model.
///
/// The variants never mix: a geodesic result always reports kilometres and
/// a travel-time result always reports whole seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "model", rename_all = "snake_case")
)]
pub enum RouteCost {
    /// Summed great-circle distance.
    Kilometres {
        /// Distance in kilometres.
        km: f64,
    },
    /// Summed travel time reported by a mapping service.
    TravelTime {
        /// Elapsed time in whole seconds.
        #[cfg_attr(feature = "serde", serde(rename = "seconds", with = "whole_seconds"))]
        duration: Duration,
    },
}

impl RouteCost {
    /// Distance in kilometres for geodesic costs.
    #[must_use]
    pub const fn as_kilometres(&self) -> Option<f64> {
        match self {
            Self::Kilometres { km } => Some(*km),
            Self::TravelTime { .. } => None,
        }
    }

    /// Duration for travel-time costs.
    #[must_use]
    pub const fn as_duration(&self) -> Option<Duration> {
        match self {
            Self::Kilometres { .. } => None,
            Self::TravelTime { duration } => Some(*duration),
        }
    }
}

#[cfg(feature = "serde")]
mod whole_seconds {
    use std::time::Duration;

    use serde::Serializer;

    pub(super) fn serialize<S: Serializer>(
        duration: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_secs())
    }
}

/// A route paired with its cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptimizedRoute {
    /// Stops in the chosen visiting order.
    pub route: Route,
    /// Cost of `route` under the optimizer's cost model.
    pub cost: RouteCost,
}
