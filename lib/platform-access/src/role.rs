//! Portal roles and their static display metadata.
//!
//! Every visitor signs in through exactly one role-specific login variant.
//! The role decides the page title, the landing destination after a
//! successful sign-in, and the value the authenticated identity's role is
//! checked against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A portal role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// School administrator.
    Admin,
    /// Teacher managing classes and attendance.
    Teacher,
    /// Student viewing attendance and schedules.
    Student,
}

/// Display metadata for a role's login variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleInfo {
    /// Heading shown on the sign-in page.
    pub title: &'static str,
    /// Path to navigate to after a successful sign-in.
    pub destination: &'static str,
    /// Icon shown above the sign-in heading.
    pub icon: &'static str,
    /// Title of the card in the role selector.
    pub card_title: &'static str,
    /// One-line description of the card in the role selector.
    pub card_description: &'static str,
}

impl Role {
    /// All roles, in the order the role selector lists them.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Teacher, Role::Student];

    /// The role used when the navigation parameter is absent or unrecognized.
    pub const DEFAULT: Role = Role::Student;

    /// Returns the lowercase name used in URLs and identity records.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }

    /// Returns the display metadata for this role.
    #[must_use]
    pub const fn info(&self) -> RoleInfo {
        match self {
            Self::Admin => RoleInfo {
                title: "Admin Login",
                destination: "/admin",
                icon: "/profile.png",
                card_title: "Login as Admin",
                card_description: "Access administrative dashboard",
            },
            Self::Teacher => RoleInfo {
                title: "Teacher Login",
                destination: "/teacher",
                icon: "/teacher.png",
                card_title: "Login as Teacher",
                card_description: "Manage classes and attendance",
            },
            Self::Student => RoleInfo {
                title: "Student Login",
                destination: "/student",
                icon: "/student.png",
                card_title: "Login as Student",
                card_description: "View attendance and schedules",
            },
        }
    }

    /// Resolves the `role` navigation parameter.
    ///
    /// Absent or unrecognized values fall back to [`Role::DEFAULT`]. A
    /// malformed parameter is indistinguishable from a student login to the
    /// visitor, so it is logged.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None => Self::DEFAULT,
            Some(value) => value.parse().unwrap_or_else(|e: ParseRoleError| {
                tracing::debug!(error = %e, "Unrecognized role parameter, using default");
                Self::DEFAULT
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the portal roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError {
    /// The rejected value.
    pub value: String,
}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.value)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseRoleError {
                value: s.to_string(),
            })
    }
}
