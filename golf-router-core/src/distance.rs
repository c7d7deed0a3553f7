//! Great-circle distance between locations.
//!
//! The metric is the haversine formula evaluated on a sphere of radius
//! [`EARTH_RADIUS_KM`]. It drives the exhaustive optimizer, so the formula is
//! kept verbatim to reproduce reference distances to the last digit.

use geo::Coord;

use crate::Location;

/// Mean Earth radius in kilometres used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6373.0;

/// Great-circle distance in kilometres between two WGS84 coordinates.
///
/// Coordinates use `x = longitude` and `y = latitude` in degrees. Values
/// outside the valid ranges are not rejected; the result is numerically
/// defined but carries no geographic meaning.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use golf_router_core::haversine_km;
///
/// let tokyo = Coord { x: 139.7661, y: 35.6814 };
/// let shinjuku = Coord { x: 139.6917, y: 35.6895 };
/// let km = haversine_km(tokyo, shinjuku);
/// assert!((km - 6.78).abs() < 0.01);
/// assert_eq!(haversine_km(tokyo, tokyo), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point by definition"
)]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat1 = from.y.to_radians();
    let lon1 = from.x.to_radians();
    let lat2 = to.y.to_radians();
    let lon2 = to.x.to_radians();

    let dlon = lon2 - lon1;
    let dlat = lat2 - lat1;

    // Rounding can push `a` just past 1.0 for antipodal points.
    let a = ((dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance in kilometres between two locations.
///
/// Symmetric in its arguments and zero when both share coordinates.
///
/// # Examples
///
/// ```
/// use golf_router_core::{Location, distance};
///
/// # fn main() -> Result<(), golf_router_core::LocationError> {
/// let tokyo = Location::station(1, "Tokyo", 35.6814, 139.7661)?;
/// let nagoya = Location::station(2, "Nagoya", 35.1709, 136.8816)?;
/// assert_eq!(distance(&tokyo, &nagoya), distance(&nagoya, &tokyo));
/// assert_eq!(distance(&tokyo, &tokyo), 0.0);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn distance(a: &Location, b: &Location) -> f64 {
    haversine_km(a.coord(), b.coord())
}

/// Convert a degrees/minutes/seconds angle to decimal degrees.
///
/// Each component is added with its own sign, so southern and western
/// angles should pass all three components negated.
///
/// # Examples
///
/// ```
/// use golf_router_core::dms_to_decimal;
///
/// assert_eq!(dms_to_decimal(35.0, 30.0, 0.0), 35.5);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "sexagesimal conversion is floating-point by definition"
)]
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE_KM: f64 = 1.0e-9;

    fn coord(lat: f64, lon: f64) -> Coord<f64> {
        Coord { x: lon, y: lat }
    }

    #[rstest]
    #[case(coord(35.6814, 139.7661), coord(34.7228, 135.4961))]
    #[case(coord(-33.8688, 151.2093), coord(51.5074, -0.1278))]
    #[case(coord(0.0, 179.9), coord(0.0, -179.9))]
    fn distance_is_symmetric(#[case] a: Coord<f64>, #[case] b: Coord<f64>) {
        let forward = haversine_km(a, b);
        let backward = haversine_km(b, a);
        assert!((forward - backward).abs() < TOLERANCE_KM);
    }

    #[rstest]
    fn distance_to_self_is_zero() {
        let tokyo = coord(35.6814, 139.7661);
        assert_eq!(haversine_km(tokyo, tokyo), 0.0);
    }

    #[rstest]
    fn matches_reference_values() {
        let tokyo = coord(35.6814, 139.7661);
        let nagoya = coord(35.1709, 136.8816);
        let osaka = coord(34.7228, 135.4961);
        assert!((haversine_km(tokyo, nagoya) - 267.526_840_916_738_8).abs() < 1.0e-6);
        assert!((haversine_km(nagoya, osaka) - 135.796_428_194_571_7).abs() < 1.0e-6);
    }

    #[rstest]
    fn quarter_meridian_uses_configured_radius() {
        let km = haversine_km(coord(0.0, 0.0), coord(90.0, 0.0));
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((km - expected).abs() < 1.0e-6);
    }

    #[rstest]
    #[case(coord(-72.3214, -88.0324), coord(72.3214, 91.9676))]
    #[case(coord(0.0, 0.0), coord(0.0, 180.0))]
    #[case(coord(90.0, 0.0), coord(-90.0, 0.0))]
    fn antipodal_points_are_half_a_circumference_apart(
        #[case] a: Coord<f64>,
        #[case] b: Coord<f64>,
    ) {
        let km = haversine_km(a, b);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!(km.is_finite(), "antipodal distance should be finite, got {km}");
        assert!((km - expected).abs() < 1.0e-3, "unexpected distance {km}");
    }

    #[rstest]
    #[case(35.0, 40.0, 30.0, 35.675)]
    #[case(0.0, 0.0, 36.0, 0.01)]
    #[case(-12.0, -30.0, 0.0, -12.5)]
    fn converts_sexagesimal_angles(
        #[case] degrees: f64,
        #[case] minutes: f64,
        #[case] seconds: f64,
        #[case] expected: f64,
    ) {
        assert!((dms_to_decimal(degrees, minutes, seconds) - expected).abs() < 1.0e-12);
    }
}
