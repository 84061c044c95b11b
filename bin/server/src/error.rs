//! Domain error types for server operations.
//!
//! Sign-in verdicts are never errors; they travel as `SubmissionOutcome`.
//! The errors here cover the plumbing around the verdict.

use leptos::server_fn::error::ServerFnError;
use std::fmt;

/// Errors preventing the sign-in server function from reaching the
/// authenticator.
#[derive(Debug)]
pub enum SignInError {
    /// No authenticator was installed for the request.
    AuthenticatorUnavailable { details: String },
}

impl fmt::Display for SignInError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthenticatorUnavailable { details } => {
                write!(f, "authenticator unavailable: {}", details)
            }
        }
    }
}

impl std::error::Error for SignInError {}

impl SignInError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            SignInError::AuthenticatorUnavailable { .. } => {
                ServerFnError::new("Sign-in is temporarily unavailable")
            }
        }
    }
}
