use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{LandingPage, RegistrationWizard};

/// Root application component: routes between the landing page and the
/// registration wizard.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/register") view=RegistrationWizard />
                </Routes>
            </main>
        </Router>
    }
}

/// Fallback for unknown paths.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center text-gray-600">
            <h1 class="text-3xl font-bold mb-2">"404"</h1>
            <p class="text-sm">
                "This page does not exist. "
                <a href="/" class="text-blue-600 underline">"Go home"</a>
            </p>
        </div>
    }
}
