//! `DirectionsProvider` backed by the Google Maps Directions API.
//!
//! This module provides [`GoogleDirectionsProvider`], an implementation of
//! the [`DirectionsProvider`] trait that asks the Directions API for a trip
//! through every waypoint and, when requested, for the fastest visiting
//! order.
//!
//! # Architecture
//!
//! The [`DirectionsProvider`] trait is synchronous to keep the core library
//! embeddable in synchronous contexts. This provider bridges the async HTTP
//! call to the sync interface by blocking on a Tokio runtime internally.
//!
//! The API key travels as a query parameter. Every URL that leaves this
//! module through logs or errors carries `<redacted>` in its place.
//!
//! # Example
//!
//! ```no_run
//! use golf_router_data::routing::GoogleDirectionsProvider;
//! use golf_router_core::{DirectionsOptimizer, DirectionsOptions, Location, RouteOptimizer};
//!
//! let provider = GoogleDirectionsProvider::new("my-api-key")?;
//! let optimizer = DirectionsOptimizer::new(provider, DirectionsOptions::default());
//!
//! let start = Location::station(1130101, "Tokyo", 35.6814, 139.7661)?;
//! let vias = vec![Location::station(1160214, "Osaka", 34.7025, 135.4959)?];
//! let goal = Location::golf_course(42, "Kobe Golf Club", 34.7774, 135.2105)?;
//!
//! let optimized = optimizer.optimize(&start, &vias, &goal)?;
//! println!("{:?}", optimized.cost);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use geo::Coord;
use golf_router_core::{
    Directions, DirectionsError, DirectionsLeg, DirectionsProvider, DirectionsQuery,
    DirectionsRoute,
};
use reqwest::Client;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::google::DirectionsResponse;

/// Error type for [`GoogleDirectionsProvider`] construction failures.
#[derive(Debug)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
    /// The configured endpoint is not an absolute URL.
    InvalidBaseUrl(url::ParseError),
}

impl std::fmt::Display for ProviderBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
            Self::InvalidBaseUrl(err) => write!(f, "invalid directions endpoint: {err}"),
        }
    }
}

impl std::error::Error for ProviderBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
            Self::InvalidBaseUrl(err) => Some(err),
        }
    }
}

/// Default user agent for Directions API requests.
pub const DEFAULT_USER_AGENT: &str = "golf-router/0.1";

/// Default Directions API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Placeholder substituted for the API key in logged and reported URLs.
const REDACTED: &str = "<redacted>";

/// Query parameters owned by the provider; pass-through options may not
/// override them.
const RESERVED_PARAMS: &[&str] = &["origin", "destination", "waypoints", "mode", "key"];

/// Configuration for [`GoogleDirectionsProvider`].
#[derive(Clone)]
pub struct GoogleDirectionsConfig {
    /// Directions API key.
    pub api_key: String,
    /// Endpoint URL. Overridable for proxies and tests.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl std::fmt::Debug for GoogleDirectionsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleDirectionsConfig")
            .field("api_key", &REDACTED)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl GoogleDirectionsConfig {
    /// Create a new configuration with the given API key and default
    /// endpoint, timeout and user agent.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Set the endpoint URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Directions provider using the Google Maps Directions API.
///
/// This provider implements the synchronous [`DirectionsProvider`] trait by
/// internally blocking on an asynchronous HTTP request. It owns a Tokio
/// runtime that is reused across calls.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the provider uses its own
/// stored runtime. When called from within an existing multi-threaded Tokio
/// runtime (detected via [`Handle::try_current()`] and
/// [`RuntimeFlavor::MultiThread`]), it uses that runtime's handle with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics.
///
/// When called from within a `current_thread` Tokio runtime, the provider
/// falls back to its own internal runtime, which may deadlock if the
/// caller's runtime is driving IO this request depends on.
pub struct GoogleDirectionsProvider {
    client: Client,
    config: GoogleDirectionsConfig,
    endpoint: Url,
    runtime: Runtime,
}

impl std::fmt::Debug for GoogleDirectionsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleDirectionsProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("endpoint", &self.endpoint.as_str())
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl GoogleDirectionsProvider {
    /// Create a new provider for the public endpoint with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(GoogleDirectionsConfig::new(api_key))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL, or if the HTTP
    /// client or Tokio runtime fails to build.
    pub fn with_config(config: GoogleDirectionsConfig) -> Result<Self, ProviderBuildError> {
        let endpoint = Url::parse(&config.base_url).map_err(ProviderBuildError::InvalidBaseUrl)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            endpoint,
            runtime,
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &GoogleDirectionsConfig {
        &self.config
    }

    /// Build the request URL for `query`, authenticating with `key`.
    ///
    /// Coordinates are rendered as `lat,lng`. With waypoint optimization
    /// enabled the `waypoints` parameter is prefixed with `optimize:true`.
    /// Pass-through options that collide with provider-owned parameters are
    /// skipped.
    fn build_request_url(&self, query: &DirectionsQuery, key: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("origin", &lat_lng(query.origin));
            pairs.append_pair("destination", &lat_lng(query.destination));
            if !query.waypoints.is_empty() {
                let mut stops: Vec<String> = query.waypoints.iter().copied().map(lat_lng).collect();
                if query.optimize_waypoints {
                    stops.insert(0, "optimize:true".to_owned());
                }
                pairs.append_pair("waypoints", &stops.join("|"));
            }
            pairs.append_pair("mode", query.options.mode.as_str());
            for (name, value) in &query.options.extra {
                if RESERVED_PARAMS.contains(&name.as_str()) {
                    log::warn!("ignoring directions option {name:?}; it is set by the provider");
                    continue;
                }
                pairs.append_pair(name, value);
            }
            pairs.append_pair("key", key);
        }
        url
    }

    /// Fetch directions asynchronously.
    async fn fetch_directions_async(
        &self,
        query: &DirectionsQuery,
    ) -> Result<Directions, DirectionsError> {
        let url = self.build_request_url(query, &self.config.api_key);
        let redacted = self.build_request_url(query, REDACTED).to_string();
        log::debug!(
            "requesting directions for {} waypoints from {redacted}",
            query.waypoints.len()
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &redacted))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &redacted))?;

        let body: DirectionsResponse =
            response
                .json()
                .await
                .map_err(|err| DirectionsError::ParseError {
                    message: err.without_url().to_string(),
                })?;

        convert_response(body)
    }

    /// Convert a reqwest error to a `DirectionsError`.
    ///
    /// The URL is stripped from the reqwest error before rendering so the
    /// key never reaches the message.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> DirectionsError {
        if error.is_timeout() {
            return DirectionsError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        let message = strip_url(error);
        if let Some(status) = error.status() {
            return DirectionsError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message,
            };
        }

        DirectionsError::NetworkError {
            url: url.to_owned(),
            message,
        }
    }
}

fn lat_lng(coord: Coord<f64>) -> String {
    format!("{},{}", coord.y, coord.x)
}

fn strip_url(error: &reqwest::Error) -> String {
    // reqwest::Error is not Clone; rebuild the message without the URL.
    let mut message = error.to_string();
    if let Some(url) = error.url() {
        message = message.replace(url.as_str(), REDACTED);
    }
    message
}

/// Convert a Directions API response into provider-neutral [`Directions`].
fn convert_response(response: DirectionsResponse) -> Result<Directions, DirectionsError> {
    if response.is_no_route() {
        return Err(DirectionsError::NoRoute);
    }
    if !response.is_ok() {
        return Err(DirectionsError::ServiceError {
            code: response.status,
            message: response.error_message.unwrap_or_default(),
        });
    }

    let routes = response
        .routes
        .into_iter()
        .map(|route| DirectionsRoute {
            waypoint_order: route.waypoint_order,
            legs: route
                .legs
                .into_iter()
                .map(|leg| DirectionsLeg {
                    duration: Duration::from_secs(leg.duration.value),
                })
                .collect(),
        })
        .collect();

    Ok(Directions { routes })
}

impl DirectionsProvider for GoogleDirectionsProvider {
    /// Fetch directions for `query` with a single blocking request.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime must be
    /// multi-threaded (`flavor = "multi_thread"`). From a `current_thread`
    /// runtime the method falls back to its own internal runtime.
    fn directions(&self, query: &DirectionsQuery) -> Result<Directions, DirectionsError> {
        let future = self.fetch_directions_async(query);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own runtime.
            _ => self.runtime.block_on(future),
        }
    }
}
