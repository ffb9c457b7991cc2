//! Browser tab title derived from the navigation state.

use crate::layout::global_context::AppGlobalContext;
use contracts::navigation::ActiveState;
use leptos::prelude::*;

pub const BRAND: &str = "Cloud Console";

/// `"<tab> · <category> · <brand>"`, skipping the parts that are not active.
pub fn document_title(state: &ActiveState<'_>) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(3);
    if let Some(tab) = state.tab() {
        parts.push(&tab.title);
    }
    if let Some(category) = state.category() {
        if parts.last() != Some(&category.label.as_str()) {
            parts.push(&category.label);
        }
    }
    parts.push(BRAND);
    parts.join(" · ")
}

/// Keeps `document.title` in step with the active category and tab.
pub fn sync_document_title(ctx: AppGlobalContext) {
    Effect::new(move |_| {
        let title = ctx.state.with(document_title);
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&title);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::navigation::routes;

    #[test]
    fn test_unresolved_title() {
        assert_eq!(document_title(&ActiveState::Unresolved), "Cloud Console");
    }

    #[test]
    fn test_title_with_tab_and_category() {
        let mut state = ActiveState::default();
        state.observe("/billing/invoices", routes().unwrap());
        assert_eq!(document_title(&state), "Invoices · Billing · Cloud Console");
    }

    #[test]
    fn test_title_without_tab() {
        let mut state = ActiveState::default();
        state.observe("/dashboard", routes().unwrap());
        assert_eq!(document_title(&state), "Dashboard · Cloud Console");
    }

    #[test]
    fn test_title_for_unknown_path() {
        let mut state = ActiveState::default();
        state.observe("/unknown/section", routes().unwrap());
        assert_eq!(document_title(&state), "Cloud Console");
    }
}
