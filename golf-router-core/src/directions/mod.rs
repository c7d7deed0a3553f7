//! Travel-time routing delegated to an external mapping service.
//!
//! The [`DirectionsProvider`] trait abstracts a directions API that can
//! optimize waypoint order itself. [`DirectionsOptimizer`] adapts such a
//! provider to [`RouteOptimizer`](crate::RouteOptimizer): it maps the
//! service's waypoint order back onto the caller's via points and totals
//! the leg durations.
//!
//! Provider failures are surfaced unchanged; nothing here retries or falls
//! back to the exhaustive search.

mod error;
mod optimizer;
mod provider;

pub use error::DirectionsError;
pub use optimizer::{DirectionsOptimizer, optimize_by_external_service};
pub use provider::{
    Directions, DirectionsLeg, DirectionsOptions, DirectionsProvider, DirectionsQuery,
    DirectionsRoute, ParseTravelModeError, TravelMode,
};
