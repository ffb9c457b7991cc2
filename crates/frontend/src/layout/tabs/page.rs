//! PageView - the center zone for the current path.
//!
//! Renders, behind the redirect guard:
//! - one tab strip per page of the trail, outermost first
//! - the placeholder content from the registry

use super::registry::render_page_content;
use super::strip::TabStrip;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::redirect_guard::RedirectGuard;
use leptos::prelude::*;

#[component]
pub fn PageView() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <RedirectGuard>
            {move || match ctx.resolution() {
                Some(resolution) => {
                    let strips = resolution
                        .trail
                        .iter()
                        .cloned()
                        .map(|level| view! { <TabStrip level=level /> })
                        .collect_view();
                    let content = render_page_content(&resolution);
                    view! {
                        <div class="page" data-path=resolution.path.clone()>
                            <div class="page__tabs">{strips}</div>
                            <div class="page__content">{content}</div>
                        </div>
                    }
                    .into_any()
                }
                None => view! { <div class="page page--empty"></div> }.into_any(),
            }}
        </RedirectGuard>
    }
}
