//! Role selection ahead of sign-in.
//!
//! The selector never authenticates anything. Choosing a role only produces a
//! [`NavigationIntent`] towards the sign-in page carrying that role.

use crate::role::Role;

/// Path of the sign-in page.
pub const SIGN_IN_PATH: &str = "/sign-in";

/// A request to navigate to the sign-in page for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationIntent {
    /// The page to navigate to.
    pub target: &'static str,
    /// The role passed as the `role` parameter.
    pub role: Role,
}

impl NavigationIntent {
    /// Creates an intent to sign in as `role`.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        Self {
            target: SIGN_IN_PATH,
            role,
        }
    }

    /// Renders the intent as a relative URL.
    #[must_use]
    pub fn href(&self) -> String {
        format!("{}?role={}", self.target, self.role)
    }
}

/// Open/closed state of the role selection modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleSelector {
    is_open: bool,
}

impl RoleSelector {
    /// Creates a closed selector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the selector is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Chooses a role, closing the selector.
    pub fn select(&mut self, role: Role) -> NavigationIntent {
        self.is_open = false;
        tracing::debug!(role = %role, "Role selected");
        NavigationIntent::for_role(role)
    }
}
