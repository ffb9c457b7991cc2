use crate::app_shell::AppShell;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    // The router owns the location; everything below observes it.
    view! {
        <Router>
            <AppShell />
        </Router>
    }
}
