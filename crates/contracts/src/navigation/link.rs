//! Active state for navigation links.

/// Whether a link pointing at `link_href` should render as active while the
/// user is on `current_path`.
///
/// Prefix semantics on a segment boundary: a category link stays active
/// anywhere inside its subtree. The root link only matches the root itself,
/// otherwise it would be active everywhere.
pub fn is_active(link_href: &str, current_path: &str) -> bool {
    let href = link_href.trim_end_matches('/');
    if href.is_empty() {
        return current_path == "/";
    }

    current_path == href
        || current_path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}
