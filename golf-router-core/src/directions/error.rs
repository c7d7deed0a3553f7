use thiserror::Error;

/// Errors from [`crate::directions::DirectionsProvider::directions`] and from
/// interpreting its response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The request could not reach the service.
    #[error("request to {url} failed: {message}")]
    NetworkError {
        /// Request URL with credentials redacted.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The service did not answer within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL with credentials redacted.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("request to {url} returned HTTP {status}: {message}")]
    HttpError {
        /// Request URL with credentials redacted.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse directions response: {message}")]
    ParseError {
        /// Decoder error description.
        message: String,
    },
    /// The service reported a failure status such as a denied request or an
    /// exhausted quota.
    #[error("directions service returned {code}: {message}")]
    ServiceError {
        /// Status code reported by the service.
        code: String,
        /// Optional message accompanying the status.
        message: String,
    },
    /// The service found no route between the requested points.
    #[error("directions service found no route")]
    NoRoute,
    /// The reported leg durations do not fit in a [`std::time::Duration`].
    #[error("directions route legs sum past the maximum representable duration")]
    DurationOverflow,
    /// The reported waypoint order is not a permutation of the via indices.
    #[error("waypoint order {order:?} is not a permutation of {via_count} via indices")]
    InvalidWaypointOrder {
        /// Order as reported by the service.
        order: Vec<usize>,
        /// Number of vias sent in the request.
        via_count: usize,
    },
}
