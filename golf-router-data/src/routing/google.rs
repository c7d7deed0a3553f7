//! Google Maps Directions API response types.
//!
//! Only the fields needed to reconcile waypoint order and total travel time
//! are decoded; everything else in the payload is ignored.
//!
//! See: <https://developers.google.com/maps/documentation/directions/get-directions>

use serde::Deserialize;

/// Top-level Directions API response.
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    /// Status code.
    ///
    /// Common values:
    /// - `"OK"` - At least one route was found
    /// - `"ZERO_RESULTS"` - No route between origin and destination
    /// - `"NOT_FOUND"` - A location could not be geocoded
    /// - `"MAX_WAYPOINTS_EXCEEDED"` - Too many waypoints
    /// - `"OVER_QUERY_LIMIT"` - Quota exhausted
    /// - `"REQUEST_DENIED"` - Invalid or unauthorised API key
    /// - `"INVALID_REQUEST"` - Malformed request
    pub status: String,

    /// Optional detail accompanying a non-`OK` status.
    #[serde(default)]
    pub error_message: Option<String>,

    /// Candidate routes, recommended route first.
    #[serde(default)]
    pub routes: Vec<RouteResponse>,
}

impl DirectionsResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }

    /// Check if the service found no route for otherwise valid input.
    #[must_use]
    pub fn is_no_route(&self) -> bool {
        matches!(self.status.as_str(), "ZERO_RESULTS" | "NOT_FOUND")
    }
}

/// A single route of the response.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Visiting order of the request waypoints when optimization was asked
    /// for.
    #[serde(default)]
    pub waypoint_order: Vec<usize>,
    /// Legs between consecutive stops.
    #[serde(default)]
    pub legs: Vec<LegResponse>,
}

/// A leg between two consecutive stops.
#[derive(Debug, Deserialize)]
pub struct LegResponse {
    /// Travel time for the leg.
    pub duration: TextValue,
}

/// A measured quantity with its human-readable rendering.
#[derive(Debug, Deserialize)]
pub struct TextValue {
    /// Value in base units (seconds for durations).
    pub value: u64,
    /// Localised text, e.g. `"1 hour 5 mins"`.
    #[serde(default)]
    pub text: String,
}
