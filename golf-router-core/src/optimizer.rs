//! The route optimization capability shared by every cost model.

use thiserror::Error;

use crate::{DirectionsError, Location, OptimizedRoute};

/// Errors returned by [`RouteOptimizer::optimize`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// The via set is too large for exhaustive search.
    #[error("{count} via points exceed the exhaustive search limit of {max}")]
    TooManyVias {
        /// Number of vias supplied.
        count: usize,
        /// Largest accepted via count.
        max: usize,
    },
    /// The mapping service failed or returned no usable route.
    #[error(transparent)]
    Directions(#[from] DirectionsError),
}

/// Produce the cheapest visiting order for `vias` between `start` and `goal`.
///
/// Implementations differ only in their cost model, so callers can hold a
/// `&dyn RouteOptimizer` and switch strategies without inspecting the type.
/// The returned route always has `vias.len() + 2` stops, begins with
/// `start`, ends with `goal` and contains each via exactly once.
///
/// Optimizers must be `Send + Sync` so independent requests can run on
/// separate threads.
///
/// # Examples
///
/// ```
/// use golf_router_core::{ExhaustiveOptimizer, Location, RouteOptimizer};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let start = Location::station(1, "Tokyo", 35.6814, 139.7661)?;
/// let goal = Location::golf_course(1, "Course", 35.6895, 139.6917)?;
/// let optimizer: &dyn RouteOptimizer = &ExhaustiveOptimizer::default();
///
/// let best = optimizer.optimize(&start, &[], &goal)?;
/// assert_eq!(best.route.len(), 2);
/// # Ok(())
/// # }
/// ```
pub trait RouteOptimizer: Send + Sync {
    /// Optimize the order of `vias`, returning the route and its cost.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizeError`] when the request cannot be served under
    /// this optimizer's cost model.
    fn optimize(
        &self,
        start: &Location,
        vias: &[Location],
        goal: &Location,
    ) -> Result<OptimizedRoute, OptimizeError>;
}
