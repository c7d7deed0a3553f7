//! Facade crate for the golf router.
//!
//! This crate re-exports the core domain types and optimizers, and exposes
//! the CSV repository and Google Directions provider behind the `data`
//! feature.

#![forbid(unsafe_code)]

pub use golf_router_core::{
    Directions, DirectionsError, DirectionsOptimizer, DirectionsOptions, DirectionsProvider,
    DirectionsQuery, ExhaustiveOptimizer, Location, LocationError, LocationKind,
    LocationRepository, OptimizeError, OptimizedRoute, RepositoryError, Route, RouteCost,
    RouteOptimizer, TravelMode, distance, haversine_km, optimize_by_distance,
    optimize_by_external_service,
};

#[cfg(feature = "data")]
pub use golf_router_data::repository::{CsvLocationRepository, CsvRepositoryError, CsvSchema};

#[cfg(feature = "data")]
pub use golf_router_data::routing::{
    GoogleDirectionsConfig, GoogleDirectionsProvider, ProviderBuildError,
};
