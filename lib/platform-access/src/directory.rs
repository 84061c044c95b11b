//! Fixed in-memory account directory.
//!
//! Stands in for the authentication backend in tests and local development.
//! Passwords are compared as plain text.

use crate::auth::{AuthenticatedUser, Authenticator, Credentials};
use crate::error::AuthenticationError;
use async_trait::async_trait;
use rootcause::prelude::Report;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Authenticator backed by a fixed set of accounts.
#[derive(Debug, Default)]
pub struct InMemoryAuthenticator {
    accounts: HashMap<String, (String, AuthenticatedUser)>,
    failure: Option<AuthenticationError>,
    calls: AtomicUsize,
}

impl InMemoryAuthenticator {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory whose every lookup fails with `error`.
    #[must_use]
    pub fn failing(error: AuthenticationError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Adds an account. The identity's email is the lookup key.
    #[must_use]
    pub fn with_account(mut self, password: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.accounts
            .insert(user.email.clone(), (password.into(), user));
        self
    }

    /// Returns how many times `authenticate` has been called.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Authenticator for InMemoryAuthenticator {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<AuthenticatedUser>, Report<AuthenticationError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = &self.failure {
            return Err(error.clone().into());
        }

        Ok(self
            .accounts
            .get(&credentials.email)
            .filter(|(password, _)| *password == credentials.password)
            .map(|(_, user)| user.clone()))
    }
}
