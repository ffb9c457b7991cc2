//! Pre-render guard for redirect-only routes.
//!
//! Content is only rendered once the current path is resolved and its
//! decision is `Render`. A `Redirect` decision replaces the history entry
//! with the canonical child, so Back does not land on the redirecting URL
//! again.

use crate::layout::global_context::AppGlobalContext;
use contracts::navigation::RenderDecision;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

#[component]
pub fn RedirectGuard(children: ChildrenFn) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| ctx.decision());

    Effect::new(move |_| {
        let RenderDecision::Redirect(pending) = decision.get() else {
            return;
        };

        // A newer navigation may have started since the decision was made.
        let current = location.pathname.get_untracked();
        if pending.is_stale(&current) {
            log::debug!(
                "redirect: discarding stale '{}' -> '{}' (now at '{}')",
                pending.from,
                pending.to,
                current
            );
            return;
        }

        let target = pending.target_with_query(&location.search.get_untracked());
        log::info!("redirect: '{}' -> '{}'", pending.from, target);
        navigate(
            &target,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    let can_render = move || ctx.is_resolved() && !decision.get().is_redirect();

    view! {
        <Show when=can_render>
            {children()}
        </Show>
    }
}
