//! Credential submission and role resolution.
//!
//! A sign-in page owns one [`LoginForm`] for the role it was opened with.
//! Submitting the form performs exactly one authenticator call and resolves
//! the answer against that role:
//!
//! | authenticator answer        | outcome                |
//! |-----------------------------|------------------------|
//! | identity with expected role | `Redirect`             |
//! | identity with another role  | `RoleMismatch`         |
//! | no identity                 | `InvalidCredentials`   |
//! | failure                     | `Transient`            |
//!
//! While a call is outstanding the form refuses further submissions.

use crate::auth::{AuthenticatedUser, Authenticator, Credentials};
use crate::error::{AuthenticationError, SubmitRejected};
use crate::role::Role;
use rootcause::prelude::Report;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Message shown when the authenticator knows no such account.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Message shown when the authenticator could not reach a verdict.
pub const TRANSIENT_MESSAGE: &str = "An error occurred during login";

/// Result of one sign-in attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// The identity holds the expected role; navigate to its landing page.
    Redirect { role: Role },
    /// The identity holds a different role than the login variant used.
    RoleMismatch { expected: Role },
    /// No account matches the credentials.
    InvalidCredentials,
    /// The authenticator failed.
    Transient,
}

impl SubmissionOutcome {
    /// Returns the landing path for a redirect.
    #[must_use]
    pub fn destination(&self) -> Option<&'static str> {
        match self {
            Self::Redirect { role } => Some(role.info().destination),
            _ => None,
        }
    }

    /// Returns the message to show the visitor, or `None` for a redirect.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Redirect { .. } => None,
            Self::RoleMismatch { expected } => Some(format!(
                "This login is for {expected} accounts. Please use the correct login option."
            )),
            Self::InvalidCredentials => Some(INVALID_CREDENTIALS_MESSAGE.to_string()),
            Self::Transient => Some(TRANSIENT_MESSAGE.to_string()),
        }
    }
}

/// Resolves an authenticator answer against the role being signed in as.
#[must_use]
pub fn resolve(
    expected: Role,
    answer: Result<Option<AuthenticatedUser>, Report<AuthenticationError>>,
) -> SubmissionOutcome {
    match answer {
        Ok(Some(user)) if user.role() == Some(expected) => {
            SubmissionOutcome::Redirect { role: expected }
        }
        Ok(Some(_)) => SubmissionOutcome::RoleMismatch { expected },
        Ok(None) => SubmissionOutcome::InvalidCredentials,
        Err(_) => SubmissionOutcome::Transient,
    }
}

/// Authenticates `credentials` and resolves the answer against `expected`.
///
/// Performs exactly one authenticator call. Never fails: authenticator
/// errors become [`SubmissionOutcome::Transient`].
#[instrument(skip(authenticator, credentials), fields(expected_role = %expected))]
pub async fn authenticate_as<A>(
    authenticator: &A,
    credentials: &Credentials,
    expected: Role,
) -> SubmissionOutcome
where
    A: Authenticator + ?Sized,
{
    let answer = authenticator.authenticate(credentials).await;

    match &answer {
        Ok(Some(user)) => tracing::debug!(
            subject = %user.subject,
            actual_role = %user.role,
            "Authenticator returned identity"
        ),
        Ok(None) => tracing::debug!(email = %credentials.email, "No account matches credentials"),
        Err(e) => tracing::error!(error = %e, "Authenticator call failed"),
    }

    let outcome = resolve(expected, answer);
    match outcome {
        SubmissionOutcome::Redirect { .. } => tracing::info!("Sign-in succeeded"),
        SubmissionOutcome::RoleMismatch { .. } => {
            tracing::warn!("Sign-in rejected, identity holds a different role");
        }
        SubmissionOutcome::InvalidCredentials | SubmissionOutcome::Transient => {}
    }
    outcome
}

/// Transient state of one sign-in form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    email: String,
    password: String,
    remember_me: bool,
    is_submitting: bool,
    error: Option<String>,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("remember_me", &self.remember_me)
            .field("is_submitting", &self.is_submitting)
            .field("error", &self.error)
            .finish()
    }
}

impl LoginForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    /// Returns true while an authenticator call is outstanding.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Returns the message of the last failed attempt.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }

    pub fn set_remember_me(&mut self, remember_me: bool) {
        self.remember_me = remember_me;
    }

    /// Starts a submission.
    ///
    /// Marks the form as submitting, clears the previous error, and returns
    /// the credentials to authenticate. A rejected call changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected::InFlight`] while a submission is outstanding
    /// and [`SubmitRejected::MissingCredentials`] if email or password is
    /// empty.
    pub fn begin(&mut self) -> Result<Credentials, SubmitRejected> {
        if self.is_submitting {
            return Err(SubmitRejected::InFlight);
        }
        if self.email.is_empty() || self.password.is_empty() {
            return Err(SubmitRejected::MissingCredentials);
        }

        self.is_submitting = true;
        self.error = None;

        Ok(Credentials::new(self.email.clone(), self.password.clone())
            .with_remember_me(self.remember_me))
    }

    /// Finishes a submission, recording the outcome's message and
    /// re-enabling the form.
    pub fn complete(&mut self, outcome: &SubmissionOutcome) {
        self.error = outcome.message();
        self.is_submitting = false;
    }

    /// Submits the form to `authenticator` as `expected`.
    ///
    /// # Errors
    ///
    /// Returns the reason from [`LoginForm::begin`] if the submission could
    /// not start; the authenticator is not called in that case.
    pub async fn submit<A>(
        &mut self,
        authenticator: &A,
        expected: Role,
    ) -> Result<SubmissionOutcome, SubmitRejected>
    where
        A: Authenticator + ?Sized,
    {
        let credentials = self.begin()?;
        let outcome = authenticate_as(authenticator, &credentials, expected).await;
        self.complete(&outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::InMemoryAuthenticator;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    fn filled_form() -> LoginForm {
        let mut form = LoginForm::new();
        form.set_email("user@school.test".to_string());
        form.set_password("secret".to_string());
        form
    }

    fn directory_with(role: &str) -> InMemoryAuthenticator {
        InMemoryAuthenticator::new().with_account(
            "secret",
            AuthenticatedUser {
                subject: "sub_1".to_string(),
                email: "user@school.test".to_string(),
                display_name: None,
                role: role.to_string(),
            },
        )
    }

    #[test]
    fn resolve_matching_role_redirects() {
        let user = AuthenticatedUser::new("sub", "t@school.test", Role::Teacher);
        let outcome = resolve(Role::Teacher, Ok(Some(user)));
        assert_eq!(outcome, SubmissionOutcome::Redirect { role: Role::Teacher });
        assert_eq!(outcome.destination(), Some("/teacher"));
        assert_eq!(outcome.message(), None);
    }

    #[test]
    fn resolve_other_role_is_mismatch() {
        let user = AuthenticatedUser::new("sub", "s@school.test", Role::Student);
        let outcome = resolve(Role::Admin, Ok(Some(user)));
        assert_eq!(outcome, SubmissionOutcome::RoleMismatch { expected: Role::Admin });
        assert_eq!(outcome.destination(), None);
        assert_eq!(
            outcome.message().as_deref(),
            Some("This login is for admin accounts. Please use the correct login option.")
        );
    }

    #[test]
    fn resolve_unknown_identity_role_is_mismatch() {
        let user = AuthenticatedUser {
            subject: "sub".to_string(),
            email: "p@school.test".to_string(),
            display_name: None,
            role: "parent".to_string(),
        };
        for expected in Role::ALL {
            let outcome = resolve(expected, Ok(Some(user.clone())));
            assert_eq!(outcome, SubmissionOutcome::RoleMismatch { expected });
        }
    }

    #[test]
    fn resolve_no_identity_is_invalid_credentials() {
        let outcome = resolve(Role::Student, Ok(None));
        assert_eq!(outcome, SubmissionOutcome::InvalidCredentials);
        assert_eq!(outcome.message().as_deref(), Some("Invalid email or password"));
    }

    #[test]
    fn resolve_failure_is_transient() {
        let outcome = resolve(Role::Student, Err(AuthenticationError::Timeout.into()));
        assert_eq!(outcome, SubmissionOutcome::Transient);
        assert_eq!(
            outcome.message().as_deref(),
            Some("An error occurred during login")
        );
    }

    #[test]
    fn login_form_debug_redacts_password() {
        let mut form = LoginForm::new();
        form.set_email("a@b.test".to_string());
        form.set_password("hunter2".to_string());
        let debug = format!("{form:?}");
        assert!(debug.contains("a@b.test"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn begin_marks_submitting_and_clears_error() {
        let mut form = filled_form();
        form.set_remember_me(true);
        form.complete(&SubmissionOutcome::InvalidCredentials);
        assert!(form.error().is_some());

        let credentials = form.begin().expect("begin");
        assert!(form.is_submitting());
        assert_eq!(form.error(), None);
        assert_eq!(credentials.email, "user@school.test");
        assert_eq!(credentials.password, "secret");
        assert!(credentials.remember_me);
    }

    #[test]
    fn begin_while_submitting_is_rejected() {
        let mut form = filled_form();
        form.begin().expect("first begin");
        assert_eq!(form.begin(), Err(SubmitRejected::InFlight));
        assert!(form.is_submitting());
    }

    #[test]
    fn begin_with_empty_fields_is_rejected() {
        let mut form = LoginForm::new();
        form.set_email("user@school.test".to_string());
        assert_eq!(form.begin(), Err(SubmitRejected::MissingCredentials));
        assert!(!form.is_submitting());

        let mut form = LoginForm::new();
        form.set_password("secret".to_string());
        assert_eq!(form.begin(), Err(SubmitRejected::MissingCredentials));
    }

    #[test]
    fn complete_reenables_form_for_every_outcome() {
        let outcomes = [
            SubmissionOutcome::Redirect { role: Role::Admin },
            SubmissionOutcome::RoleMismatch { expected: Role::Teacher },
            SubmissionOutcome::InvalidCredentials,
            SubmissionOutcome::Transient,
        ];
        for outcome in outcomes {
            let mut form = filled_form();
            form.begin().expect("begin");
            form.complete(&outcome);
            assert!(!form.is_submitting(), "{outcome:?}");
            assert_eq!(form.error().map(str::to_string), outcome.message());
        }
    }

    #[test]
    fn outcome_serialization_format() {
        let json = serde_json::to_value(SubmissionOutcome::Redirect { role: Role::Teacher })
            .expect("serialize");
        assert_eq!(json, serde_json::json!({"outcome": "redirect", "role": "teacher"}));

        let parsed: SubmissionOutcome =
            serde_json::from_str(r#"{"outcome":"invalid_credentials"}"#).expect("deserialize");
        assert_eq!(parsed, SubmissionOutcome::InvalidCredentials);
    }

    #[tokio::test]
    async fn submit_teacher_as_teacher_redirects() {
        let auth = directory_with("teacher");
        let mut form = filled_form();

        let outcome = form.submit(&auth, Role::Teacher).await.expect("submit");

        assert_eq!(outcome.destination(), Some("/teacher"));
        assert_eq!(form.error(), None);
        assert!(!form.is_submitting());
        assert_eq!(auth.calls(), 1);
    }

    #[tokio::test]
    async fn submit_student_as_admin_is_mismatch() {
        let auth = directory_with("student");
        let mut form = filled_form();

        let outcome = form.submit(&auth, Role::Admin).await.expect("submit");

        assert_eq!(outcome, SubmissionOutcome::RoleMismatch { expected: Role::Admin });
        assert!(form.error().is_some_and(|e| e.contains("admin")));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn submit_bad_password_is_invalid_credentials() {
        let auth = directory_with("student");
        let mut form = filled_form();
        form.set_password("wrong".to_string());

        let outcome = form.submit(&auth, Role::Student).await.expect("submit");

        assert_eq!(outcome, SubmissionOutcome::InvalidCredentials);
        assert_eq!(form.error(), Some("Invalid email or password"));
    }

    #[tokio::test]
    async fn submit_authenticator_failure_is_transient() {
        let auth = InMemoryAuthenticator::failing(AuthenticationError::Transport {
            details: "connection reset".to_string(),
        });
        let mut form = filled_form();

        let outcome = form.submit(&auth, Role::Student).await.expect("submit");

        assert_eq!(outcome, SubmissionOutcome::Transient);
        assert_eq!(form.error(), Some("An error occurred during login"));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn submit_through_shared_authenticator() {
        let auth: crate::auth::SharedAuthenticator = Arc::new(directory_with("admin"));
        let mut form = filled_form();

        let outcome = form.submit(auth.as_ref(), Role::Admin).await.expect("submit");

        assert_eq!(outcome.destination(), Some("/admin"));
    }

    #[tokio::test]
    async fn submit_without_credentials_skips_authenticator() {
        let auth = directory_with("student");
        let mut form = LoginForm::new();

        let result = form.submit(&auth, Role::Student).await;

        assert_eq!(result, Err(SubmitRejected::MissingCredentials));
        assert_eq!(auth.calls(), 0);
    }

    /// Authenticator that blocks until released, counting concurrent calls.
    struct GatedAuthenticator {
        release: Notify,
        outstanding: AtomicUsize,
        max_outstanding: AtomicUsize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Authenticator for GatedAuthenticator {
        async fn authenticate(
            &self,
            credentials: &Credentials,
        ) -> Result<Option<AuthenticatedUser>, Report<AuthenticationError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.outstanding.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_outstanding.fetch_max(now, Ordering::SeqCst);
            self.release.notified().await;
            self.outstanding.fetch_sub(1, Ordering::SeqCst);
            Ok(Some(AuthenticatedUser::new(
                "sub_g",
                credentials.email.clone(),
                Role::Student,
            )))
        }
    }

    #[tokio::test]
    async fn second_submission_while_in_flight_is_rejected() {
        let auth = Arc::new(GatedAuthenticator {
            release: Notify::new(),
            outstanding: AtomicUsize::new(0),
            max_outstanding: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        });
        let form = Arc::new(std::sync::Mutex::new(filled_form()));

        // First attempt: begin synchronously, then await the gated call.
        let credentials = form.lock().expect("lock").begin().expect("begin");
        let first = tokio::spawn({
            let auth = Arc::clone(&auth);
            let form = Arc::clone(&form);
            async move {
                let outcome = authenticate_as(auth.as_ref(), &credentials, Role::Student).await;
                form.lock().expect("lock").complete(&outcome);
                outcome
            }
        });

        while auth.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        // Second attempt while the first is outstanding.
        assert_eq!(
            form.lock().expect("lock").begin(),
            Err(SubmitRejected::InFlight)
        );
        assert!(form.lock().expect("lock").is_submitting());

        auth.release.notify_one();
        let outcome = first.await.expect("join");

        assert_eq!(outcome.destination(), Some("/student"));
        assert_eq!(auth.calls.load(Ordering::SeqCst), 1);
        assert_eq!(auth.max_outstanding.load(Ordering::SeqCst), 1);
        assert!(!form.lock().expect("lock").is_submitting());

        // The form is usable again once the attempt finished.
        assert!(form.lock().expect("lock").begin().is_ok());
    }
}
