//! Test utilities for directions providers.
//!
//! This module provides [`StubDirectionsProvider`], a deterministic test
//! double for [`DirectionsProvider`] that returns pre-configured responses
//! without making HTTP requests and records what it was asked.

use std::sync::Mutex;
use std::time::Duration;

use golf_router_core::{
    Directions, DirectionsError, DirectionsLeg, DirectionsProvider, DirectionsQuery,
    DirectionsRoute,
};

/// Stub `DirectionsProvider` for testing.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use geo::Coord;
/// use golf_router_core::{DirectionsOptions, DirectionsProvider, DirectionsQuery};
/// use golf_router_data::routing::test_support::StubDirectionsProvider;
///
/// let provider = StubDirectionsProvider::with_order(vec![1, 0], Duration::from_secs(60));
/// let query = DirectionsQuery {
///     origin: Coord { x: 0.0, y: 0.0 },
///     destination: Coord { x: 1.0, y: 1.0 },
///     waypoints: vec![Coord { x: 0.2, y: 0.2 }, Coord { x: 0.5, y: 0.5 }],
///     optimize_waypoints: true,
///     options: DirectionsOptions::default(),
/// };
///
/// let directions = provider.directions(&query).expect("stubbed");
/// assert_eq!(directions.routes[0].waypoint_order, vec![1, 0]);
/// assert_eq!(provider.call_count(), 1);
/// ```
#[derive(Debug)]
pub struct StubDirectionsProvider {
    response: StubResponse,
    calls: Mutex<Vec<DirectionsQuery>>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Directions(Directions),
    Error(DirectionsError),
}

impl StubDirectionsProvider {
    /// Create a provider that returns the given directions verbatim.
    #[must_use]
    pub fn with_directions(directions: Directions) -> Self {
        Self::from_response(StubResponse::Directions(directions))
    }

    /// Create a provider that fails every call with `error`.
    #[must_use]
    pub fn with_error(error: DirectionsError) -> Self {
        Self::from_response(StubResponse::Error(error))
    }

    /// Create a provider returning a single route that visits the waypoints
    /// in `order`, with `order.len() + 1` legs of `leg` each.
    #[must_use]
    pub fn with_order(order: Vec<usize>, leg: Duration) -> Self {
        let legs = vec![DirectionsLeg { duration: leg }; order.len() + 1];
        Self::with_directions(Directions {
            routes: vec![DirectionsRoute {
                waypoint_order: order,
                legs,
            }],
        })
    }

    fn from_response(response: StubResponse) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().map_or(0, |calls| calls.len())
    }

    /// The most recent query, if any.
    #[must_use]
    pub fn last_query(&self) -> Option<DirectionsQuery> {
        self.calls
            .lock()
            .ok()
            .and_then(|calls| calls.last().cloned())
    }
}

impl DirectionsProvider for StubDirectionsProvider {
    fn directions(&self, query: &DirectionsQuery) -> Result<Directions, DirectionsError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(query.clone());
        }

        match &self.response {
            StubResponse::Directions(directions) => Ok(directions.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}
