//! Path helpers shared by the matcher and the route table validation.

/// Brings an observed location into the form used by the route table.
///
/// Drops the query and fragment, removes trailing slashes and maps an
/// empty path to the root.
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(|c: char| c == '?' || c == '#').unwrap_or(raw.len());
    let trimmed = raw[..end].trim_end_matches('/');

    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// First non-empty `/`-separated segment of `path`, if any.
pub fn first_segment(path: &str) -> Option<&str> {
    path.split('/').find(|segment| !segment.is_empty())
}

/// True when `path` is already in normalized absolute form.
pub fn is_canonical(path: &str) -> bool {
    path.starts_with('/') && normalize_path(path) == path
}
