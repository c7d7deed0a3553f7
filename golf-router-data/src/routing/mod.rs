//! Directions providers backed by online mapping services.
//!
//! This module provides [`GoogleDirectionsProvider`], an implementation of
//! [`golf_router_core::DirectionsProvider`] that queries the Google Maps
//! Directions API for an optimized trip through a set of waypoints.
//!
//! # Architecture
//!
//! The provider makes one HTTP request per trip. The synchronous
//! [`golf_router_core::DirectionsProvider`] trait is implemented by blocking
//! on an async HTTP call internally, keeping the core library embeddable in
//! synchronous contexts.
//!
//! # Example
//!
//! ```no_run
//! use golf_router_data::routing::{GoogleDirectionsConfig, GoogleDirectionsProvider};
//! use std::time::Duration;
//!
//! // Create a provider with custom configuration
//! let config = GoogleDirectionsConfig::new("my-api-key")
//!     .with_timeout(Duration::from_secs(60))
//!     .with_user_agent("my-app/1.0");
//! let provider = GoogleDirectionsProvider::with_config(config)?;
//!
//! // Or use the simple constructor
//! let provider = GoogleDirectionsProvider::new("my-api-key")?;
//! # Ok::<(), golf_router_data::routing::ProviderBuildError>(())
//! ```

mod google;
mod provider;

#[doc(hidden)]
pub mod test_support;

pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT, GoogleDirectionsConfig, GoogleDirectionsProvider,
    ProviderBuildError,
};
