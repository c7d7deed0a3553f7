//! Core domain types and route optimizers for golf-router.
//!
//! A [`Location`] is a validated point with an identity and a label. Given a
//! start, a set of via points and a goal, a [`RouteOptimizer`] returns the
//! cheapest visiting order under its cost model:
//!
//! - [`ExhaustiveOptimizer`] enumerates every ordering and minimizes the
//!   summed great-circle distance.
//! - [`DirectionsOptimizer`] lets a mapping service choose the order and
//!   reports its travel time.
//!
//! Location data is read through [`LocationRepository`].

#![forbid(unsafe_code)]

pub mod directions;
pub mod distance;
mod exhaustive;
mod location;
mod optimizer;
pub mod repository;
mod route;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use directions::{
    Directions, DirectionsError, DirectionsLeg, DirectionsOptimizer, DirectionsOptions,
    DirectionsProvider, DirectionsQuery, DirectionsRoute, ParseTravelModeError, TravelMode,
    optimize_by_external_service,
};
pub use distance::{EARTH_RADIUS_KM, distance, dms_to_decimal, haversine_km};
pub use exhaustive::{DEFAULT_MAX_VIAS, ExhaustiveOptimizer, optimize_by_distance};
pub use location::{Location, LocationError, LocationKind};
pub use optimizer::{OptimizeError, RouteOptimizer};
pub use repository::{LocationRepository, RepositoryError};
pub use route::{OptimizedRoute, Route, RouteCost};
