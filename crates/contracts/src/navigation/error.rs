use thiserror::Error;

/// Defects in the route table.
///
/// All of them are fatal: a table with any defect is rejected as a whole,
/// because at runtime they would surface as wrong highlighting or as an
/// endless redirect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("route table could not be parsed: {0}")]
    Parse(String),

    #[error("category path '{path}' must be an absolute path with exactly one segment")]
    InvalidCategoryPath { path: String },

    #[error("more than one category uses the first segment '{segment}'")]
    DuplicateCategory { segment: String },

    #[error("'{path}' is not a valid {what}: expected an absolute path without trailing slash, query or fragment")]
    InvalidPath { path: String, what: &'static str },

    #[error("page '{page}' is not inside its category '{category}'")]
    PageOutsideCategory { page: String, category: String },

    #[error("page '{path}' is declared more than once")]
    DuplicatePage { path: String },

    #[error("page '{page}' declares tab '{href}' more than once")]
    DuplicateTab { page: String, href: String },

    #[error("redirect-only page '{page}' has no tabs to redirect to")]
    EmptyRedirectTabs { page: String },

    #[error("redirect-only page '{page}' declares itself as its first tab")]
    SelfRedirect { page: String },

    #[error("redirect cycle: {}", .chain.join(" -> "))]
    RedirectCycle { chain: Vec<String> },
}
