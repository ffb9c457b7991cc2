//! Application Shell - root components of the application
//!
//! - `AppShell` - configuration gate (shows MainLayout, or the route table error)
//! - `MainLayout` - main application layout (Shell + Sidebar + PageView)

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::PageView;
use crate::layout::Shell;
use crate::shared::document_title::sync_document_title;
use contracts::navigation::{routes, RouteTable};
use leptos::prelude::*;

/// Main application layout with Sidebar and PageView.
///
/// Starts the location sync that keeps the active category and tab in
/// step with the URL.
#[component]
fn MainLayout(table: &'static RouteTable) -> impl IntoView {
    let ctx = AppGlobalContext::new(table);
    provide_context(ctx);

    // Runs once when the layout is created; the effects live as long as it.
    ctx.init_location_sync();
    sync_document_title(ctx);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <PageView /> }.into_any()
        />
    }
}

/// Shown instead of the console when the route table did not load.
#[component]
fn ConfigurationErrorPanel(message: String) -> impl IntoView {
    view! {
        <div class="config-error">
            <h1>"Navigation is unavailable"</h1>
            <pre>{message}</pre>
        </div>
    }
}

/// Application shell - configuration gate.
#[component]
pub fn AppShell() -> impl IntoView {
    match routes() {
        Ok(table) => {
            log::debug!(
                "route table loaded: {} categories, {} pages",
                table.categories().len(),
                table.pages().count()
            );
            view! { <MainLayout table=table /> }.into_any()
        }
        Err(e) => {
            log::error!("route table rejected: {}", e);
            view! { <ConfigurationErrorPanel message=e.to_string() /> }.into_any()
        }
    }
}
