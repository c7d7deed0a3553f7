//! Reconcile provider-optimized waypoint orders into routes.

use std::time::Duration;

use crate::exhaustive::assemble_route;
use crate::{Location, OptimizeError, OptimizedRoute, Route, RouteCost, RouteOptimizer};

use super::error::DirectionsError;
use super::provider::{DirectionsOptions, DirectionsProvider, DirectionsQuery, DirectionsRoute};

/// Route from `start` through all `vias` to `goal` using the provider's own
/// waypoint optimization.
///
/// One request is sent with waypoint optimization enabled and `options`
/// forwarded unmodified. The first returned route is used: its waypoint
/// order is applied to `vias`, and its leg durations are summed into the
/// total travel time.
///
/// # Errors
///
/// Returns [`OptimizeError::Directions`] when the provider fails, returns no
/// route, reports a waypoint order that is not a permutation of the via
/// indices, or reports leg durations whose sum overflows.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use golf_router_core::{
///     Directions, DirectionsError, DirectionsLeg, DirectionsOptions, DirectionsProvider,
///     DirectionsQuery, DirectionsRoute, Location, optimize_by_external_service,
/// };
///
/// struct Fixed;
///
/// impl DirectionsProvider for Fixed {
///     fn directions(&self, _: &DirectionsQuery) -> Result<Directions, DirectionsError> {
///         let leg = DirectionsLeg { duration: Duration::from_secs(600) };
///         Ok(Directions {
///             routes: vec![DirectionsRoute { waypoint_order: vec![1, 0], legs: vec![leg; 3] }],
///         })
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let start = Location::station(1, "Tokyo", 35.6814, 139.7661)?;
/// let vias = [
///     Location::station(2, "Shin-Osaka", 34.7228, 135.4961)?,
///     Location::station(3, "Nagoya", 35.1709, 136.8816)?,
/// ];
/// let goal = Location::golf_course(1, "Course", 35.6895, 139.6917)?;
///
/// let (route, total) =
///     optimize_by_external_service(&Fixed, &start, &vias, &goal, &DirectionsOptions::default())?;
/// assert_eq!(route.vias()[0].id(), 3);
/// assert_eq!(total, Duration::from_secs(1800));
/// # Ok(())
/// # }
/// ```
pub fn optimize_by_external_service<P>(
    provider: &P,
    start: &Location,
    vias: &[Location],
    goal: &Location,
    options: &DirectionsOptions,
) -> Result<(Route, Duration), OptimizeError>
where
    P: DirectionsProvider + ?Sized,
{
    let query = DirectionsQuery {
        origin: start.coord(),
        destination: goal.coord(),
        waypoints: vias.iter().map(Location::coord).collect(),
        optimize_waypoints: true,
        options: options.clone(),
    };
    log::debug!(
        "requesting {} directions with {} waypoints",
        options.mode,
        query.waypoints.len()
    );

    let directions = provider.directions(&query)?;
    let best = directions
        .routes
        .into_iter()
        .next()
        .ok_or(DirectionsError::NoRoute)?;

    let order = validated_order(best.waypoint_order.clone(), vias.len())?;
    let total = total_duration(&best, vias.len())?;
    Ok((assemble_route(start, vias, &order, goal), total))
}

/// Check that `order` is a permutation of `0..via_count`.
fn validated_order(order: Vec<usize>, via_count: usize) -> Result<Vec<usize>, DirectionsError> {
    let mut seen = vec![false; via_count];
    let is_permutation = order.len() == via_count
        && order.iter().all(|&index| {
            seen.get_mut(index)
                .is_some_and(|slot| !std::mem::replace(slot, true))
        });
    if is_permutation {
        Ok(order)
    } else {
        Err(DirectionsError::InvalidWaypointOrder { order, via_count })
    }
}

fn total_duration(route: &DirectionsRoute, via_count: usize) -> Result<Duration, DirectionsError> {
    let expected_legs = via_count + 1;
    if route.legs.len() != expected_legs {
        log::warn!(
            "directions route has {} legs, expected {expected_legs}; summing all legs",
            route.legs.len()
        );
    }
    let total = route
        .legs
        .iter()
        .try_fold(Duration::ZERO, |sum, leg| sum.checked_add(leg.duration))
        .ok_or(DirectionsError::DurationOverflow)?;
    Ok(Duration::from_secs(total.as_secs()))
}

/// [`RouteOptimizer`] using travel times from a [`DirectionsProvider`].
///
/// # Examples
///
/// ```no_run
/// use golf_router_core::{DirectionsOptimizer, DirectionsOptions, RouteOptimizer, TravelMode};
/// # use golf_router_core::{Directions, DirectionsError, DirectionsProvider, DirectionsQuery};
/// # struct Provider;
/// # impl DirectionsProvider for Provider {
/// #     fn directions(&self, _: &DirectionsQuery) -> Result<Directions, DirectionsError> {
/// #         Err(DirectionsError::NoRoute)
/// #     }
/// # }
///
/// let options = DirectionsOptions::default().with_mode(TravelMode::Driving);
/// let optimizer = DirectionsOptimizer::new(Provider, options);
/// let _: &dyn RouteOptimizer = &optimizer;
/// ```
#[derive(Debug, Clone)]
pub struct DirectionsOptimizer<P> {
    provider: P,
    options: DirectionsOptions,
}

impl<P> DirectionsOptimizer<P> {
    /// Wrap `provider`, forwarding `options` with every request.
    #[must_use]
    pub const fn new(provider: P, options: DirectionsOptions) -> Self {
        Self { provider, options }
    }

    /// Options forwarded to the provider.
    #[must_use]
    pub const fn options(&self) -> &DirectionsOptions {
        &self.options
    }

    /// Borrow the wrapped provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P> RouteOptimizer for DirectionsOptimizer<P>
where
    P: DirectionsProvider + Send + Sync,
{
    fn optimize(
        &self,
        start: &Location,
        vias: &[Location],
        goal: &Location,
    ) -> Result<OptimizedRoute, OptimizeError> {
        let (route, duration) =
            optimize_by_external_service(&self.provider, start, vias, goal, &self.options)?;
        Ok(OptimizedRoute {
            route,
            cost: RouteCost::TravelTime { duration },
        })
    }
}
