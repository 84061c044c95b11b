//! Role-specific sign-in page and its server function.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::{NavigateOptions, hooks::use_navigate, hooks::use_query_map};
use rollcall_platform_access::{LoginForm, Role, SubmissionOutcome};

/// Server function authenticating credentials for a role's login variant.
///
/// Sign-in verdicts are returned as the outcome; an error means the
/// authenticator could not be reached at all.
#[server]
pub async fn sign_in(
    email: String,
    password: String,
    remember_me: bool,
    role: Role,
) -> Result<SubmissionOutcome, ServerFnError> {
    use crate::error::SignInError;
    use axum::Extension;
    use rollcall_platform_access::{Credentials, SharedAuthenticator, authenticate_as};

    let Extension(authenticator): Extension<SharedAuthenticator> = leptos_axum::extract()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "No authenticator installed for sign-in");
            SignInError::AuthenticatorUnavailable {
                details: e.to_string(),
            }
            .into_server_error()
        })?;

    let credentials = Credentials::new(email, password).with_remember_me(remember_me);
    Ok(authenticate_as(authenticator.as_ref(), &credentials, role).await)
}

/// Maps a failed server function call to the transient outcome.
fn settle(response: Result<SubmissionOutcome, ServerFnError>) -> SubmissionOutcome {
    response.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Sign-in request failed");
        SubmissionOutcome::Transient
    })
}

/// Whether the form may be submitted.
///
/// Before hydration the browser would submit the form natively and lose the
/// role, so submission waits for the page to mount.
fn accepts_submit(hydrated: bool, form: &LoginForm) -> bool {
    hydrated && !form.is_submitting()
}

/// Sign-in page for the role named by the `role` query parameter.
#[component]
pub fn SignInPage() -> impl IntoView {
    let query = use_query_map();
    let role = query.with_untracked(|params| Role::from_param(params.get_str("role")));
    let info = role.info();

    let form = RwSignal::new(LoginForm::new());
    let navigate = use_navigate();

    // Effects only run in the browser once the page is interactive.
    let hydrated = RwSignal::new(false);
    Effect::new(move |_| hydrated.set(true));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = match form.try_update(LoginForm::begin) {
            Some(Ok(credentials)) => credentials,
            Some(Err(rejected)) => {
                tracing::debug!(reason = %rejected, "Sign-in submission ignored");
                return;
            }
            None => return,
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = settle(
                sign_in(
                    credentials.email,
                    credentials.password,
                    credentials.remember_me,
                    role,
                )
                .await,
            );
            // The page may have been left while the call was outstanding.
            if form.try_update(|f| f.complete(&outcome)).is_none() {
                return;
            }
            if let Some(destination) = outcome.destination() {
                navigate(destination, NavigateOptions::default());
            }
        });
    };

    view! {
        <Title text=info.title/>
        <div class="sign-in-page">
            <div class="sign-in-card">
                <div class="sign-in-header">
                    <img src=info.icon alt=info.title width="64" height="64"/>
                    <h1>{info.title}</h1>
                    <p>"Please enter your credentials to continue"</p>
                </div>

                <Show when=move || form.with(|f| f.error().is_some())>
                    <div class="sign-in-error" role="alert">
                        {move || form.with(|f| f.error().map(str::to_string))}
                    </div>
                </Show>

                <form class="sign-in-form" on:submit=on_submit>
                    <div class="form-row">
                        <label for="email">"Email Address"</label>
                        <input
                            id="email"
                            type="email"
                            required=true
                            placeholder="Enter your email"
                            prop:value=move || form.with(|f| f.email().to_string())
                            on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-row">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            required=true
                            placeholder="Enter your password"
                            prop:value=move || form.with(|f| f.password().to_string())
                            on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-options">
                        <label for="remember-me">
                            <input
                                id="remember-me"
                                type="checkbox"
                                prop:checked=move || form.with(LoginForm::remember_me)
                                on:change=move |ev| {
                                    form.update(|f| f.set_remember_me(event_target_checked(&ev)))
                                }
                            />
                            "Remember me"
                        </label>
                        <a href="#" class="forgot-password">"Forgot password?"</a>
                    </div>
                    <button
                        type="submit"
                        class="sign-in-button"
                        disabled=move || !form.with(|f| accepts_submit(hydrated.get(), f))
                    >
                        {move || {
                            if form.with(LoginForm::is_submitting) { "Signing in..." } else { "Sign In" }
                        }}
                    </button>
                </form>

                <a href="/" class="back-link">"← Back to Home"</a>
            </div>
        </div>
    }
}
