//! Main Leptos application component and routing.

use crate::pages::{HomePage, LandingPage, SignInPage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use rollcall_platform_access::Role;

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="rollcall"/>
        <Router>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/sign-in") view=SignInPage/>
                    <Route path=path!("/admin") view=|| view! { <LandingPage role=Role::Admin/> }/>
                    <Route path=path!("/teacher") view=|| view! { <LandingPage role=Role::Teacher/> }/>
                    <Route path=path!("/student") view=|| view! { <LandingPage role=Role::Student/> }/>
                </Routes>
            </main>
        </Router>
    }
}
