//! Category bar: one entry per route table category, at most one active.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn CategoryNav() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav class="top-header__categories">
            {ctx
                .table
                .categories()
                .iter()
                .map(|category| {
                    let path = category.path.as_str();
                    let is_active = Memo::new(move |_| {
                        ctx.active_category().map(|active| active.path.as_str()) == Some(path)
                    });
                    view! {
                        <A
                            href=path
                            attr:class=move || if is_active.get() {
                                "top-header__category top-header__category--active"
                            } else {
                                "top-header__category"
                            }
                        >
                            {icon(category.icon.as_str())}
                            <span>{category.label.clone()}</span>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
