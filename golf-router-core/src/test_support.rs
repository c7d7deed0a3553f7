//! Test-only, in-memory implementations of the core traits used by unit and
//! behaviour tests.

use std::time::Duration;

use crate::{
    Directions, DirectionsError, DirectionsLeg, DirectionsProvider, DirectionsQuery,
    DirectionsRoute, Location, LocationKind, LocationRepository,
};

/// In-memory `LocationRepository` holding locations in insertion order.
#[derive(Debug, Clone)]
pub struct MemoryRepository {
    kind: LocationKind,
    locations: Vec<Location>,
}

impl MemoryRepository {
    /// Create a repository of `kind` from a collection of locations.
    #[must_use]
    pub fn new<I>(kind: LocationKind, locations: I) -> Self
    where
        I: IntoIterator<Item = Location>,
    {
        Self {
            kind,
            locations: locations.into_iter().collect(),
        }
    }
}

impl LocationRepository for MemoryRepository {
    fn kind(&self) -> LocationKind {
        self.kind
    }

    fn read_all(&self) -> Vec<Location> {
        self.locations.clone()
    }
}

/// Deterministic `DirectionsProvider` keeping the caller's waypoint order
/// and reporting one minute per leg.
#[derive(Default, Debug, Copy, Clone)]
pub struct UnitDirectionsProvider;

impl DirectionsProvider for UnitDirectionsProvider {
    fn directions(&self, query: &DirectionsQuery) -> Result<Directions, DirectionsError> {
        let waypoint_order = (0..query.waypoints.len()).collect();
        let legs = vec![
            DirectionsLeg {
                duration: Duration::from_secs(60),
            };
            query.waypoints.len() + 1
        ];
        Ok(Directions {
            routes: vec![DirectionsRoute {
                waypoint_order,
                legs,
            }],
        })
    }
}
