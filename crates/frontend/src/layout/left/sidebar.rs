//! Sidebar with the sections of the active category.
//!
//! Section links use prefix activation: "Auto Scaling" stays highlighted on
//! every route below `/compute/auto-scaling`, including detail routes that
//! are not tabs themselves. A section pointing at the landing page itself
//! ("Overview" on `/billing`) only matches exactly, otherwise it would
//! light up next to every sibling.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::navigation::{is_active, CategoryEntry};
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Section {
    label: &'static str,
    href: &'static str,
    exact: bool,
}

impl Section {
    fn is_active(&self, current_path: &str) -> bool {
        if self.exact {
            self.href == current_path
        } else {
            is_active(self.href, current_path)
        }
    }
}

/// Links listed under a category: the tabs of its landing page, or the
/// category itself when it declares no pages.
fn sections(category: &'static CategoryEntry) -> Vec<Section> {
    let landing = category
        .pages
        .iter()
        .find(|page| page.path == category.path)
        .or_else(|| category.pages.first());

    match landing {
        Some(page) if !page.tabs.is_empty() => page
            .tabs
            .iter()
            .map(|tab| Section {
                label: tab.title.as_str(),
                href: tab.href.as_str(),
                exact: tab.href == page.path || tab.href == category.path,
            })
            .collect(),
        _ => vec![Section {
            label: category.label.as_str(),
            href: category.path.as_str(),
            exact: false,
        }],
    }
}

#[component]
fn SidebarLink(section: Section, icon_name: &'static str) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext not found");

    let active = move || {
        ctx.current_path()
            .is_some_and(|path| section.is_active(&path))
    };

    view! {
        <A
            href=section.href
            attr:class=move || if active() {
                "app-sidebar__item app-sidebar__item--active"
            } else {
                "app-sidebar__item"
            }
        >
            <div class="app-sidebar__item-content">
                {icon(icon_name)}
                <span>{section.label}</span>
            </div>
        </A>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {move || match ctx.active_category() {
                Some(category) => view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__group-title">
                            {icon(category.icon.as_str())}
                            <span>{category.label.clone()}</span>
                        </div>
                        {sections(category)
                            .into_iter()
                            .map(|section| view! {
                                <SidebarLink section=section icon_name="chevron-right" />
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
                // Neutral: no category owns the path, so list them all.
                None => ctx
                    .table
                    .categories()
                    .iter()
                    .map(|category| view! {
                        <SidebarLink
                            section=Section {
                                label: category.label.as_str(),
                                href: category.path.as_str(),
                                exact: false,
                            }
                            icon_name=category.icon.as_str()
                        />
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
