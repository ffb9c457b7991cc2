use contracts::navigation::{ActiveState, CategoryEntry, RenderDecision, Resolution, RouteTable};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Navigation state shared by the whole shell.
///
/// `state` is the only place the active category and tab live. It is written
/// by the location sync effect and read by the header, sidebar and tab
/// strips.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub table: &'static RouteTable,
    pub state: RwSignal<ActiveState<'static>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(table: &'static RouteTable) -> Self {
        Self {
            table,
            state: RwSignal::new(ActiveState::Unresolved),
            left_open: RwSignal::new(true),
        }
    }

    /// Re-resolves the navigation state on every location change: link
    /// clicks, redirects, back and forward. Must run inside the router.
    pub fn init_location_sync(&self) {
        let location = use_location();
        let this = *self;

        Effect::new(move |_| {
            let pathname = location.pathname.get();

            let mut next = this.state.get_untracked();
            if !next.observe(&pathname, this.table) {
                return;
            }

            log::debug!(
                "navigation: '{}' -> category={:?} tab={:?}",
                pathname,
                next.category().map(|c| c.path.as_str()),
                next.tab().map(|t| t.href.as_str()),
            );
            this.state.set(next);
        });
    }

    pub fn resolution(&self) -> Option<Resolution<'static>> {
        self.state.with(|state| state.resolution().cloned())
    }

    pub fn is_resolved(&self) -> bool {
        self.state.with(|state| state.resolution().is_some())
    }

    /// Normalized current path, or `None` before the first observation.
    pub fn current_path(&self) -> Option<String> {
        self.state
            .with(|state| state.resolution().map(|r| r.path.clone()))
    }

    pub fn active_category(&self) -> Option<&'static CategoryEntry> {
        self.state.with(|state| state.category())
    }

    pub fn decision(&self) -> RenderDecision {
        self.state.with(|state| state.decision())
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}
