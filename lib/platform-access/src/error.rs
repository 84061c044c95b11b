//! Error types for the platform-access crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `AuthenticationError`: the authenticator could not reach a verdict
//! - `SubmitRejected`: a sign-in attempt was refused before it started
//!
//! Bad credentials are not an error here. Authenticators report them as an
//! absent identity.

use std::fmt;

/// Failures of the external authenticator.
///
/// Every variant surfaces to the visitor as the same transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    /// The authentication backend could not be reached.
    Transport { details: String },
    /// The authentication backend did not answer in time.
    Timeout,
    /// The authentication backend answered with an unexpected status.
    Backend { status: u16 },
    /// The authentication backend answered with an unreadable identity.
    InvalidResponse { details: String },
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { details } => {
                write!(f, "authentication backend unreachable: {details}")
            }
            Self::Timeout => write!(f, "authentication backend timed out"),
            Self::Backend { status } => {
                write!(f, "authentication backend returned status {status}")
            }
            Self::InvalidResponse { details } => {
                write!(f, "invalid identity from authentication backend: {details}")
            }
        }
    }
}

impl std::error::Error for AuthenticationError {}

/// Reasons a submission is refused without calling the authenticator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    /// An authentication call for this form is still outstanding.
    InFlight,
    /// Email or password is empty.
    MissingCredentials,
}

impl fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InFlight => write!(f, "a sign-in attempt is already in progress"),
            Self::MissingCredentials => write!(f, "email and password are required"),
        }
    }
}

impl std::error::Error for SubmitRejected {}
