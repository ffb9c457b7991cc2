//! Page content registry - the single place mapping a resolved path to a view.
//!
//! Console pages are placeholders; what matters is that every resolved
//! path gets a stable heading and that unknown paths render a neutral page
//! instead of failing.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::navigation::Resolution;
use leptos::prelude::*;
use leptos_router::components::A;

/// Heading for the page: the active tab, else the innermost page title,
/// else the category label.
pub fn page_heading(resolution: &Resolution<'_>) -> Option<String> {
    if let Some(tab) = resolution.tab {
        return Some(tab.title.clone());
    }
    if let Some(title) = resolution.page().and_then(|page| page.title.clone()) {
        return Some(title);
    }
    resolution.category.map(|category| category.label.clone())
}

pub fn render_page_content(resolution: &Resolution<'static>) -> AnyView {
    if resolution.category.is_none() {
        return view! { <NotFound path=resolution.path.clone() /> }.into_any();
    }

    match resolution.path.as_str() {
        "/dashboard" => view! { <DashboardOverview /> }.into_any(),
        path => {
            let heading = page_heading(resolution).unwrap_or_default();
            view! { <Placeholder heading=heading path=path.to_string() /> }.into_any()
        }
    }
}

#[component]
fn Placeholder(heading: String, path: String) -> impl IntoView {
    view! {
        <section class="placeholder">
            <h1 class="placeholder__title">{heading}</h1>
            <p class="placeholder__path">{path}</p>
            <p class="placeholder__note">"Nothing here yet."</p>
        </section>
    }
}

#[component]
fn NotFound(path: String) -> impl IntoView {
    view! {
        <section class="placeholder placeholder--not-found">
            <h1 class="placeholder__title">"Page not found"</h1>
            <p class="placeholder__path">{path}</p>
        </section>
    }
}

/// Landing page: one card per category.
#[component]
fn DashboardOverview() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <section class="dashboard">
            <h1 class="placeholder__title">"Dashboard"</h1>
            <div class="dashboard__cards">
                {ctx
                    .table
                    .categories()
                    .iter()
                    .filter(|category| category.path != "/dashboard")
                    .map(|category| {
                        view! {
                            <A href=category.path.clone() attr:class="dashboard__card">
                                {icon(category.icon.as_str())}
                                <span>{category.label.clone()}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
