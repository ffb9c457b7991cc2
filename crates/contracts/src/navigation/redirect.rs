//! Default-tab redirects.
//!
//! A redirect-only page has no content of its own. The decision to forward
//! it is taken before anything renders, as a value: either render the
//! current path or redirect it to a canonical child.

use serde::Serialize;

use super::error::ConfigurationError;
use super::path::normalize_path;
use super::types::TabEntry;

/// Canonical target of the redirect-only page at `page_path`: the href of its
/// first declared tab.
///
/// An empty tab list or a first tab pointing back at the page itself is a
/// configuration error. Both are rejected when the table is loaded, so the
/// runtime never sees them.
pub fn redirect_target<'a>(
    page_path: &str,
    tabs: &'a [TabEntry],
) -> Result<&'a str, ConfigurationError> {
    let first = tabs
        .first()
        .ok_or_else(|| ConfigurationError::EmptyRedirectTabs {
            page: page_path.to_string(),
        })?;

    if first.href == page_path {
        return Err(ConfigurationError::SelfRedirect {
            page: page_path.to_string(),
        });
    }

    Ok(first.href.as_str())
}

/// A redirect decided for one observed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingRedirect {
    /// Normalized path the decision was computed for.
    pub from: String,
    pub to: String,
}

impl PendingRedirect {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// A redirect is stale once the location moved away from the path it was
    /// computed for. The latest path always wins.
    pub fn is_stale(&self, current_path: &str) -> bool {
        normalize_path(current_path) != self.from
    }

    /// Target with the query string of the redirecting location carried over.
    pub fn target_with_query(&self, search: &str) -> String {
        let query = search.trim_start_matches('?');
        if query.is_empty() {
            self.to.clone()
        } else {
            format!("{}?{}", self.to, query)
        }
    }
}

/// Outcome of the pre-render guard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum RenderDecision {
    #[default]
    Render,
    Redirect(PendingRedirect),
}

impl RenderDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, RenderDecision::Redirect(_))
    }

    pub fn redirect(&self) -> Option<&PendingRedirect> {
        match self {
            RenderDecision::Redirect(pending) => Some(pending),
            RenderDecision::Render => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto_scaling_tabs() -> Vec<TabEntry> {
        vec![
            TabEntry::new("ASG", "/compute/auto-scaling/asg"),
            TabEntry::new("Templates", "/compute/auto-scaling/templates"),
        ]
    }

    #[test]
    fn test_first_tab_is_target() {
        let tabs = auto_scaling_tabs();
        assert_eq!(
            redirect_target("/compute/auto-scaling", &tabs),
            Ok("/compute/auto-scaling/asg")
        );
    }

    #[test]
    fn test_empty_tabs_rejected() {
        assert_eq!(
            redirect_target("/compute", &[]),
            Err(ConfigurationError::EmptyRedirectTabs {
                page: "/compute".to_string()
            })
        );
    }

    #[test]
    fn test_self_redirect_rejected() {
        let tabs = vec![TabEntry::new("Overview", "/billing")];
        assert_eq!(
            redirect_target("/billing", &tabs),
            Err(ConfigurationError::SelfRedirect {
                page: "/billing".to_string()
            })
        );
    }

    #[test]
    fn test_stale_after_path_change() {
        let pending = PendingRedirect::new("/compute", "/compute/instances");
        assert!(!pending.is_stale("/compute"));
        assert!(!pending.is_stale("/compute/"));
        assert!(pending.is_stale("/billing"));
        assert!(pending.is_stale("/compute/instances"));
    }

    #[test]
    fn test_query_is_carried_over() {
        let pending = PendingRedirect::new("/storage", "/storage/buckets");
        assert_eq!(pending.target_with_query(""), "/storage/buckets");
        assert_eq!(pending.target_with_query("?"), "/storage/buckets");
        assert_eq!(
            pending.target_with_query("?region=eu-west"),
            "/storage/buckets?region=eu-west"
        );
    }
}
