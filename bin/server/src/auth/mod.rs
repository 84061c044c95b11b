//! Server-side authentication wiring.
//!
//! The portal does not verify credentials itself. This module provides the
//! HTTP client for the external authentication backend and builds the
//! shared authenticator from configuration:
//! - `HttpAuthenticator` implements the `Authenticator` seam over HTTP
//! - `shared_authenticator` wraps it for use as an axum extension

pub mod http;

pub use http::HttpAuthenticator;

use crate::config::AuthConfig;
use rollcall_platform_access::SharedAuthenticator;
use std::sync::Arc;

/// Builds the authenticator shared by all sign-in requests.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn shared_authenticator(config: &AuthConfig) -> Result<SharedAuthenticator, reqwest::Error> {
    let authenticator = HttpAuthenticator::from_config(config)?;
    tracing::info!(
        endpoint = %authenticator.endpoint(),
        timeout_seconds = config.timeout_seconds,
        "Configured authentication backend"
    );
    Ok(Arc::new(authenticator))
}
