//! Role selection and role-aware sign-in for the rollcall attendance portal.
//!
//! This crate provides:
//! - Portal roles and their display metadata (`Role`, `RoleInfo`)
//! - The role selector that leads to a role-specific sign-in (`RoleSelector`)
//! - The sign-in form state and submission flow (`LoginForm`, `SubmissionOutcome`)
//! - The injected authenticator seam (`Authenticator`)
//!
//! # Sign-in Model
//!
//! The visitor picks a role, then signs in on that role's login variant. The
//! authenticator decides who the visitor is; this crate only decides whether
//! that identity may use the chosen variant:
//! - An identity with the chosen role is redirected to the role's landing page
//! - An identity with another role is told to use the correct login option
//!
//! # Example
//!
//! ```
//! use rollcall_platform_access::{
//!     AuthenticatedUser, InMemoryAuthenticator, LoginForm, Role, RoleSelector,
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut selector = RoleSelector::new();
//! selector.open();
//! let intent = selector.select(Role::Teacher);
//! assert_eq!(intent.href(), "/sign-in?role=teacher");
//!
//! let authenticator = InMemoryAuthenticator::new().with_account(
//!     "correct-horse",
//!     AuthenticatedUser::new("sub_1", "frizzle@school.test", Role::Teacher),
//! );
//!
//! let mut form = LoginForm::new();
//! form.set_email("frizzle@school.test".to_string());
//! form.set_password("correct-horse".to_string());
//!
//! let outcome = form.submit(&authenticator, intent.role).await.unwrap();
//! assert_eq!(outcome.destination(), Some("/teacher"));
//! # }
//! ```

pub mod auth;
pub mod directory;
pub mod error;
pub mod login;
pub mod role;
pub mod selector;

// Re-export main types at crate root
pub use auth::{AuthenticatedUser, Authenticator, Credentials, SharedAuthenticator};
pub use directory::InMemoryAuthenticator;
pub use error::{AuthenticationError, SubmitRejected};
pub use login::{LoginForm, SubmissionOutcome, authenticate_as, resolve};
pub use role::{ParseRoleError, Role, RoleInfo};
pub use selector::{NavigationIntent, RoleSelector, SIGN_IN_PATH};
