//! Client for the external authentication backend.
//!
//! Credentials are POSTed as JSON to the configured endpoint:
//!
//! ```text
//! {"email": "...", "password": "...", "remember_me": false}
//! ```
//!
//! The backend answers with the identity on success, or with 401, 403 or
//! 404 when no account matches. Anything else is a backend fault.

use async_trait::async_trait;
use reqwest::StatusCode;
use rollcall_platform_access::{AuthenticatedUser, AuthenticationError, Authenticator, Credentials};
use rootcause::prelude::Report;
use std::time::Duration;
use tracing::instrument;

use crate::config::AuthConfig;

/// How a backend status is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    /// The body carries the identity.
    Identity,
    /// No account matches the credentials.
    NoAccount,
    /// The backend failed.
    Fault,
}

fn classify(status: StatusCode) -> Verdict {
    match status {
        s if s.is_success() => Verdict::Identity,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
            Verdict::NoAccount
        }
        _ => Verdict::Fault,
    }
}

fn request_error(e: &reqwest::Error) -> AuthenticationError {
    if e.is_timeout() {
        AuthenticationError::Timeout
    } else {
        AuthenticationError::Transport {
            details: e.to_string(),
        }
    }
}

/// Authenticator that delegates to an HTTP authentication backend.
#[derive(Debug, Clone)]
pub struct HttpAuthenticator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAuthenticator {
    /// Creates an authenticator for `endpoint`, bounding every call by
    /// `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Creates an authenticator from server configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &AuthConfig) -> Result<Self, reqwest::Error> {
        Self::new(config.endpoint.clone(), config.timeout())
    }

    /// Returns the backend endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    #[instrument(skip(self, credentials), fields(endpoint = %self.endpoint))]
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<AuthenticatedUser>, Report<AuthenticationError>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(credentials)
            .send()
            .await
            .map_err(|e| request_error(&e))?;

        let status = response.status();
        match classify(status) {
            Verdict::Identity => {
                let user = response
                    .json::<AuthenticatedUser>()
                    .await
                    .map_err(|e| {
                        if e.is_timeout() {
                            AuthenticationError::Timeout
                        } else {
                            AuthenticationError::InvalidResponse {
                                details: e.to_string(),
                            }
                        }
                    })?;
                Ok(Some(user))
            }
            Verdict::NoAccount => {
                tracing::debug!(status = %status, "Authentication backend rejected credentials");
                Ok(None)
            }
            Verdict::Fault => Err(AuthenticationError::Backend {
                status: status.as_u16(),
            }
            .into()),
        }
    }
}
