//! Property-based tests for the distance metric and the exhaustive optimizer.
//!
//! # Invariants tested
//!
//! - **Symmetry:** `distance(a, b) == distance(b, a)`.
//! - **Zero self-distance:** `distance(a, a) == 0`.
//! - **Exactness:** no ordering of the vias is shorter than the result.
//! - **Shape:** the route is `[start] + permutation(vias) + [goal]`.

use std::collections::HashMap;

use golf_router_core::{Location, distance::distance, optimize_by_distance};
use proptest::prelude::*;

/// Tolerance for comparing independently summed route lengths.
const EPSILON_KM: f64 = 1.0e-9;

fn location_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-80.0_f64..80.0, -179.0_f64..179.0)
}

fn stations(coords: &[(f64, f64)], first_id: u64) -> Vec<Location> {
    coords
        .iter()
        .zip(first_id..)
        .map(|(&(lat, lon), id)| {
            Location::station(id, format!("station {id}"), lat, lon).expect("generated in range")
        })
        .collect()
}

/// Collect every ordering of `0..n` by recursive insertion.
fn all_orderings(n: usize) -> Vec<Vec<usize>> {
    if n == 0 {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for shorter in all_orderings(n - 1) {
        for slot in 0..=shorter.len() {
            let mut ordering = shorter.clone();
            ordering.insert(slot, n - 1);
            out.push(ordering);
        }
    }
    out
}

fn path_length(stops: &[&Location]) -> f64 {
    stops.windows(2).map(|leg| distance(leg[0], leg[1])).sum()
}

fn candidate_length(start: &Location, vias: &[Location], order: &[usize], goal: &Location) -> f64 {
    let mut stops = vec![start];
    stops.extend(order.iter().map(|&i| &vias[i]));
    stops.push(goal);
    path_length(&stops)
}

fn id_counts<'a>(locations: impl IntoIterator<Item = &'a Location>) -> HashMap<u64, usize> {
    let mut counts = HashMap::new();
    for location in locations {
        *counts.entry(location.id()).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn distance_is_symmetric(a in location_strategy(), b in location_strategy()) {
        let pair = stations(&[a, b], 0);
        let forward = distance(&pair[0], &pair[1]);
        let backward = distance(&pair[1], &pair[0]);
        prop_assert!((forward - backward).abs() <= EPSILON_KM);
    }

    #[test]
    fn distance_to_self_is_zero(a in location_strategy()) {
        let single = stations(&[a], 0);
        prop_assert_eq!(distance(&single[0], &single[0]), 0.0);
    }

    #[test]
    fn result_is_never_beaten_by_another_ordering(
        endpoints in prop::collection::vec(location_strategy(), 2),
        via_coords in prop::collection::vec(location_strategy(), 0..=6),
    ) {
        let ends = stations(&endpoints, 0);
        let vias = stations(&via_coords, 100);
        let (route, best) = optimize_by_distance(&ends[0], &vias, &ends[1]);

        let stops: Vec<&Location> = route.stops().iter().collect();
        prop_assert!((path_length(&stops) - best).abs() <= EPSILON_KM);
        for order in all_orderings(vias.len()) {
            let candidate = candidate_length(&ends[0], &vias, &order, &ends[1]);
            prop_assert!(
                best <= candidate + EPSILON_KM,
                "ordering {:?} costs {} < reported {}", order, candidate, best
            );
        }
    }

    #[test]
    fn route_visits_every_via_exactly_once(
        endpoints in prop::collection::vec(location_strategy(), 2),
        via_coords in prop::collection::vec(location_strategy(), 0..=6),
    ) {
        let ends = stations(&endpoints, 0);
        let vias = stations(&via_coords, 100);
        let (route, _) = optimize_by_distance(&ends[0], &vias, &ends[1]);

        prop_assert_eq!(route.len(), vias.len() + 2);
        prop_assert_eq!(route.start(), Some(&ends[0]));
        prop_assert_eq!(route.goal(), Some(&ends[1]));
        prop_assert_eq!(id_counts(route.vias()), id_counts(&vias));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn exactness_holds_for_eight_vias(
        endpoints in prop::collection::vec(location_strategy(), 2),
        via_coords in prop::collection::vec(location_strategy(), 7..=8),
    ) {
        let ends = stations(&endpoints, 0);
        let vias = stations(&via_coords, 100);
        let (_, best) = optimize_by_distance(&ends[0], &vias, &ends[1]);
        let shortest = all_orderings(vias.len())
            .iter()
            .map(|order| candidate_length(&ends[0], &vias, order, &ends[1]))
            .fold(f64::INFINITY, f64::min);
        prop_assert!((best - shortest).abs() <= EPSILON_KM);
    }
}
