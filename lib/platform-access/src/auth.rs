//! The authenticator seam and the records that cross it.
//!
//! The portal never verifies credentials itself. An [`Authenticator`] is
//! injected and asked for the identity behind an email and password:
//! - `Ok(Some(user))`: the credentials belong to `user`
//! - `Ok(None)`: the credentials match no account
//! - `Err(report)`: no verdict could be reached (network or backend fault)

use crate::error::AuthenticationError;
use crate::role::Role;
use async_trait::async_trait;
use rootcause::prelude::Report;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Credentials captured by one sign-in attempt.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Whether the visitor asked for a long-lived session.
    #[serde(default)]
    pub remember_me: bool,
}

impl Credentials {
    /// Creates credentials without the remember-me flag.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    /// Sets the remember-me flag.
    #[must_use]
    pub fn with_remember_me(mut self, remember_me: bool) -> Self {
        self.remember_me = remember_me;
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// Identity returned by an authenticator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Opaque identifier assigned by the authentication backend.
    pub subject: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Role as recorded by the authentication backend.
    pub role: String,
}

impl AuthenticatedUser {
    /// Creates an identity holding one of the portal roles.
    #[must_use]
    pub fn new(subject: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            subject: subject.into(),
            email: email.into(),
            display_name: None,
            role: role.as_str().to_string(),
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: Option<String>) -> Self {
        self.display_name = name;
        self
    }

    /// Returns the portal role, or `None` if the backend recorded a role the
    /// portal does not know.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

/// External collaborator that verifies credentials.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Looks up the identity behind `credentials`.
    ///
    /// # Errors
    ///
    /// Returns an error only when no verdict could be reached. Credentials
    /// that match no account resolve to `Ok(None)`.
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<AuthenticatedUser>, Report<AuthenticationError>>;
}

/// Authenticator shared between request handlers.
pub type SharedAuthenticator = Arc<dyn Authenticator>;
