//! Landing pages reached after a successful sign-in.

use leptos::prelude::*;
use rollcall_platform_access::Role;

/// Landing page for a role.
#[component]
pub fn LandingPage(role: Role) -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>{format!("Welcome to the {role} portal")}</h1>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
