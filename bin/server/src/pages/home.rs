//! Home page with the role selection modal.

use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};
use rollcall_platform_access::{Role, RoleSelector, SIGN_IN_PATH};

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    let selector = RwSignal::new(RoleSelector::new());

    view! {
        <div class="home-page">
            <nav class="navbar">
                <a href="/" class="logo">"rollcall"</a>
                <button class="login-button" on:click=move |_| selector.update(RoleSelector::open)>
                    "Login"
                </button>
            </nav>

            <Show when=move || selector.with(RoleSelector::is_open)>
                <RoleSelectorModal selector=selector/>
            </Show>

            <section class="hero">
                <h1>"Student Attendance Management System"</h1>
                <p>
                    "Track attendance, manage classes and keep students, teachers and "
                    "administrators on the same page."
                </p>
                <a href=SIGN_IN_PATH class="cta-button">"Get Started"</a>
            </section>
        </div>
    }
}

/// Modal listing one sign-in card per role.
#[component]
fn RoleSelectorModal(selector: RwSignal<RoleSelector>) -> impl IntoView {
    let navigate = use_navigate();

    let cards = Role::ALL
        .into_iter()
        .map(|role| {
            let navigate = navigate.clone();
            let info = role.info();
            view! {
                <button
                    class=format!("role-card role-card--{role}")
                    on:click=move |_| {
                        if let Some(intent) = selector.try_update(|s| s.select(role)) {
                            navigate(&intent.href(), NavigateOptions::default());
                        }
                    }
                >
                    <img src=info.icon alt="" width="40" height="40"/>
                    <span class="role-card__title">{info.card_title}</span>
                    <span class="role-card__description">{info.card_description}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="modal-backdrop" on:click=move |_| selector.update(RoleSelector::close)></div>
        <div class="modal" role="dialog" aria-modal="true">
            <div class="modal-header">
                <h2>"Choose how to sign in"</h2>
                <button
                    class="modal-close"
                    aria-label="Close login modal"
                    on:click=move |_| selector.update(RoleSelector::close)
                >
                    "×"
                </button>
            </div>
            <div class="role-cards">{cards}</div>
        </div>
    }
}
