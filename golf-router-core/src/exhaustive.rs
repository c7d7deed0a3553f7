//! Exact route optimization under the geodesic cost model.
//!
//! Every ordering of the via points is enumerated, so running time grows as
//! `n! * n`. The search is only meant for small via sets; the
//! [`ExhaustiveOptimizer`] wrapper enforces an upper bound.

use crate::{
    Location, OptimizeError, OptimizedRoute, Route, RouteCost, RouteOptimizer, distance::distance,
};

/// Default upper bound on via points accepted by [`ExhaustiveOptimizer`].
pub const DEFAULT_MAX_VIAS: usize = 10;

/// Find the shortest great-circle route from `start` through all `vias` to
/// `goal`.
///
/// Orderings are visited in lexicographic order of via indices, starting at
/// the input order. A candidate replaces the current best only when it is
/// strictly shorter, so among equally short orderings the first one
/// enumerated wins.
///
/// With no vias the route is `[start, goal]` and no search is performed.
/// Duplicate coordinates are accepted and contribute zero-length legs.
///
/// # Examples
///
/// ```
/// use golf_router_core::{Location, optimize_by_distance};
///
/// # fn main() -> Result<(), golf_router_core::LocationError> {
/// let start = Location::station(1, "Tokyo", 35.6814, 139.7661)?;
/// let vias = [
///     Location::station(2, "Shin-Osaka", 34.7228, 135.4961)?,
///     Location::station(3, "Nagoya", 35.1709, 136.8816)?,
/// ];
/// let goal = Location::golf_course(1, "Kobe Golf Club", 34.7774, 135.2105)?;
///
/// let (route, km) = optimize_by_distance(&start, &vias, &goal);
/// let visited: Vec<_> = route.vias().iter().map(|via| via.id()).collect();
/// assert_eq!(visited, [3, 2]);
/// assert!(km > 400.0);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn optimize_by_distance(start: &Location, vias: &[Location], goal: &Location) -> (Route, f64) {
    if vias.is_empty() {
        return (
            Route::new(vec![start.clone(), goal.clone()]),
            distance(start, goal),
        );
    }

    log::debug!(
        "searching {} orderings of {} via points",
        factorial(vias.len()).map_or_else(|| "too many".to_owned(), |n| n.to_string()),
        vias.len()
    );

    let mut order: Vec<usize> = (0..vias.len()).collect();
    let mut best_order = order.clone();
    let mut best_cost = ordering_cost(start, vias, &order, goal);
    while next_permutation(&mut order) {
        let cost = ordering_cost(start, vias, &order, goal);
        if cost < best_cost {
            best_cost = cost;
            best_order.clone_from(&order);
        }
    }

    (assemble_route(start, vias, &best_order, goal), best_cost)
}

/// Summed leg distances for visiting `vias` in `order`.
#[expect(
    clippy::float_arithmetic,
    reason = "route cost is a sum of floating-point leg distances"
)]
fn ordering_cost(start: &Location, vias: &[Location], order: &[usize], goal: &Location) -> f64 {
    let mut previous = start;
    let mut total = 0.0;
    for via in order.iter().filter_map(|&index| vias.get(index)) {
        total += distance(previous, via);
        previous = via;
    }
    total + distance(previous, goal)
}

/// Build `[start] + vias in order + [goal]`.
pub(crate) fn assemble_route(
    start: &Location,
    vias: &[Location],
    order: &[usize],
    goal: &Location,
) -> Route {
    let mut stops = Vec::with_capacity(order.len() + 2);
    stops.push(start.clone());
    stops.extend(order.iter().filter_map(|&index| vias.get(index)).cloned());
    stops.push(goal.clone());
    Route::new(stops)
}

/// Advance `order` to the next lexicographic permutation.
///
/// Returns `false`, leaving `order` untouched, once the last permutation
/// has been reached.
fn next_permutation(order: &mut [usize]) -> bool {
    let Some(pivot) = order
        .windows(2)
        .rposition(|pair| matches!(pair, [a, b] if a < b))
    else {
        return false;
    };
    let Some(&pivot_value) = order.get(pivot) else {
        return false;
    };
    let Some(successor) = order.iter().rposition(|&value| value > pivot_value) else {
        return false;
    };
    order.swap(pivot, successor);
    if let Some(tail) = order.get_mut(pivot + 1..) {
        tail.reverse();
    }
    true
}

fn factorial(n: usize) -> Option<usize> {
    (1..=n).try_fold(1_usize, usize::checked_mul)
}

/// [`RouteOptimizer`] backed by [`optimize_by_distance`].
///
/// Requests with more than `max_vias` via points are rejected with
/// [`OptimizeError::TooManyVias`] instead of running an unbounded search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustiveOptimizer {
    max_vias: usize,
}

impl ExhaustiveOptimizer {
    /// Create an optimizer accepting at most `max_vias` via points.
    #[must_use]
    pub const fn new(max_vias: usize) -> Self {
        Self { max_vias }
    }

    /// Largest accepted via count.
    #[must_use]
    pub const fn max_vias(&self) -> usize {
        self.max_vias
    }
}

impl Default for ExhaustiveOptimizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VIAS)
    }
}

impl RouteOptimizer for ExhaustiveOptimizer {
    fn optimize(
        &self,
        start: &Location,
        vias: &[Location],
        goal: &Location,
    ) -> Result<OptimizedRoute, OptimizeError> {
        if vias.len() > self.max_vias {
            return Err(OptimizeError::TooManyVias {
                count: vias.len(),
                max: self.max_vias,
            });
        }
        let (route, km) = optimize_by_distance(start, vias, goal);
        Ok(OptimizedRoute {
            route,
            cost: RouteCost::Kilometres { km },
        })
    }
}
