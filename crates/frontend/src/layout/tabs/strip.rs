//! Tab strip for one page of the navigation trail.

use contracts::navigation::PageLevel;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the tabs declared by `level.page`, highlighting at most one.
///
/// The highlighted tab comes from the resolver (exact href match), never
/// from a prefix test, so a detail route under a tab leaves the strip
/// neutral.
#[component]
pub fn TabStrip(level: PageLevel<'static>) -> impl IntoView {
    let active_href = level.active_tab.map(|tab| tab.href.as_str());

    view! {
        <nav class="tab-strip" data-page=level.page.path.clone()>
            {level
                .page
                .tabs
                .iter()
                .map(|tab| {
                    let class = if active_href == Some(tab.href.as_str()) {
                        "tab-strip__tab tab-strip__tab--active"
                    } else {
                        "tab-strip__tab"
                    };
                    view! {
                        <A href=tab.href.clone() attr:class=class>
                            {tab.title.clone()}
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
