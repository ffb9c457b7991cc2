//! Route table document: TOML schema and validation.
//!
//! Also compiled into `build.rs`, so a table that breaks one of the rules
//! below fails the build instead of looping in the browser. Only `super::`
//! imports of the modules the build script includes are allowed here.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;
use super::link::is_active;
use super::path::is_canonical;
use super::redirect::redirect_target;
use super::types::{CategoryEntry, PageEntry};

/// Route table as declared in `routes.toml`, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    /// Where the root path forwards to.
    pub home: String,
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryEntry>,
}

pub fn parse(source: &str) -> Result<RouteConfig, ConfigurationError> {
    toml::from_str(source).map_err(|e| ConfigurationError::Parse(e.to_string()))
}

/// Checks every invariant the resolver relies on.
pub fn validate(config: &RouteConfig) -> Result<(), ConfigurationError> {
    check_path(&config.home, "home path")?;
    if config.home == "/" {
        return Err(ConfigurationError::InvalidPath {
            path: config.home.clone(),
            what: "home path (must not be the root)",
        });
    }

    let mut segments = HashSet::new();
    let mut pages: HashMap<&str, &PageEntry> = HashMap::new();
    let mut redirect_pages = Vec::new();

    for category in &config.categories {
        let segment = category_segment(category)?;
        if !segments.insert(segment) {
            return Err(ConfigurationError::DuplicateCategory {
                segment: segment.to_string(),
            });
        }

        for page in &category.pages {
            check_page(category, page)?;
            if pages.insert(page.path.as_str(), page).is_some() {
                return Err(ConfigurationError::DuplicatePage {
                    path: page.path.clone(),
                });
            }
            if page.redirect {
                redirect_pages.push(page);
            }
        }
    }

    for page in redirect_pages {
        check_redirect_chain(page, &pages)?;
    }

    Ok(())
}

fn check_path(path: &str, what: &'static str) -> Result<(), ConfigurationError> {
    if is_canonical(path) {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidPath {
            path: path.to_string(),
            what,
        })
    }
}

fn category_segment(category: &CategoryEntry) -> Result<&str, ConfigurationError> {
    let segment = category.segment();
    if !is_canonical(&category.path) || segment.is_empty() || segment.contains('/') {
        return Err(ConfigurationError::InvalidCategoryPath {
            path: category.path.clone(),
        });
    }
    Ok(segment)
}

fn check_page(category: &CategoryEntry, page: &PageEntry) -> Result<(), ConfigurationError> {
    check_path(&page.path, "page path")?;
    if !is_active(&category.path, &page.path) {
        return Err(ConfigurationError::PageOutsideCategory {
            page: page.path.clone(),
            category: category.path.clone(),
        });
    }

    let mut hrefs = HashSet::new();
    for tab in &page.tabs {
        check_path(&tab.href, "tab href")?;
        if !hrefs.insert(tab.href.as_str()) {
            return Err(ConfigurationError::DuplicateTab {
                page: page.path.clone(),
                href: tab.href.clone(),
            });
        }
    }

    if page.redirect {
        redirect_target(&page.path, &page.tabs)?;
    }
    Ok(())
}

/// Follows redirects starting at `start` until they reach a page that
/// renders. Coming back to `start` is a cycle.
fn check_redirect_chain(
    start: &PageEntry,
    pages: &HashMap<&str, &PageEntry>,
) -> Result<(), ConfigurationError> {
    let mut chain = vec![start.path.clone()];
    let mut current = start;

    while let Ok(target) = redirect_target(&current.path, &current.tabs) {
        if target == start.path {
            chain.push(target.to_string());
            return Err(ConfigurationError::RedirectCycle { chain });
        }
        if chain.iter().any(|seen| seen == target) {
            // Loop that does not include `start`; reported from its own start.
            return Ok(());
        }
        chain.push(target.to_string());

        match pages.get(target) {
            Some(next) if next.redirect => current = *next,
            _ => return Ok(()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(categories: Vec<CategoryEntry>) -> RouteConfig {
        RouteConfig {
            home: "/dashboard".to_string(),
            categories,
        }
    }

    fn compute() -> CategoryEntry {
        CategoryEntry::new("Compute", "/compute", "server").with_page(
            PageEntry::new("/compute/auto-scaling")
                .redirect_only()
                .with_tab("ASG", "/compute/auto-scaling/asg")
                .with_tab("Templates", "/compute/auto-scaling/templates"),
        )
    }

    #[test]
    fn test_valid_table() {
        assert_eq!(validate(&config(vec![compute()])), Ok(()));
    }

    #[test]
    fn test_parse_toml() {
        let source = r#"
home = "/compute"

[[category]]
label = "Compute"
path = "/compute"
icon = "server"

[[category.page]]
path = "/compute/auto-scaling"
redirect = true

[[category.page.tab]]
title = "ASG"
href = "/compute/auto-scaling/asg"
"#;
        let parsed = parse(source).unwrap();
        assert_eq!(parsed.home, "/compute");
        assert_eq!(parsed.categories.len(), 1);
        let page = &parsed.categories[0].pages[0];
        assert!(page.redirect);
        assert_eq!(page.title, None);
        assert_eq!(page.tabs[0].href, "/compute/auto-scaling/asg");
        assert_eq!(validate(&parsed), Ok(()));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let source = r#"
home = "/compute"
homepage = "/x"
"#;
        assert!(matches!(parse(source), Err(ConfigurationError::Parse(_))));
    }

    #[test]
    fn test_duplicate_first_segment() {
        let table = config(vec![
            CategoryEntry::new("Billing", "/billing", "credit-card"),
            CategoryEntry::new("Invoices", "/billing", "receipt"),
        ]);
        assert_eq!(
            validate(&table),
            Err(ConfigurationError::DuplicateCategory {
                segment: "billing".to_string()
            })
        );
    }

    #[test]
    fn test_category_path_must_be_one_segment() {
        for path in ["/compute/vms", "compute", "/", "/compute/"] {
            let table = config(vec![CategoryEntry::new("Compute", path, "server")]);
            assert_eq!(
                validate(&table),
                Err(ConfigurationError::InvalidCategoryPath {
                    path: path.to_string()
                }),
                "path {path}"
            );
        }
    }

    #[test]
    fn test_home_must_not_be_root() {
        let mut table = config(vec![]);
        table.home = "/".to_string();
        assert!(matches!(
            validate(&table),
            Err(ConfigurationError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_page_outside_category() {
        let table = config(vec![CategoryEntry::new("Compute", "/compute", "server")
            .with_page(PageEntry::new("/computex").with_tab("A", "/computex/a"))]);
        assert_eq!(
            validate(&table),
            Err(ConfigurationError::PageOutsideCategory {
                page: "/computex".to_string(),
                category: "/compute".to_string(),
            })
        );
    }

    #[test]
    fn test_duplicate_page() {
        let table = config(vec![CategoryEntry::new("Storage", "/storage", "database")
            .with_page(PageEntry::new("/storage").with_tab("Buckets", "/storage/buckets"))
            .with_page(PageEntry::new("/storage").with_tab("Volumes", "/storage/volumes"))]);
        assert_eq!(
            validate(&table),
            Err(ConfigurationError::DuplicatePage {
                path: "/storage".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_tab() {
        let table = config(vec![CategoryEntry::new("Storage", "/storage", "database")
            .with_page(
                PageEntry::new("/storage")
                    .with_tab("Buckets", "/storage/buckets")
                    .with_tab("Buckets again", "/storage/buckets"),
            )]);
        assert_eq!(
            validate(&table),
            Err(ConfigurationError::DuplicateTab {
                page: "/storage".to_string(),
                href: "/storage/buckets".to_string(),
            })
        );
    }

    #[test]
    fn test_tab_href_must_be_canonical() {
        let table = config(vec![CategoryEntry::new("Storage", "/storage", "database")
            .with_page(PageEntry::new("/storage").with_tab("Buckets", "/storage/buckets/"))]);
        assert!(matches!(
            validate(&table),
            Err(ConfigurationError::InvalidPath { what: "tab href", .. })
        ));
    }

    #[test]
    fn test_redirect_page_without_tabs() {
        let table = config(vec![CategoryEntry::new("Compute", "/compute", "server")
            .with_page(PageEntry::new("/compute").redirect_only())]);
        assert_eq!(
            validate(&table),
            Err(ConfigurationError::EmptyRedirectTabs {
                page: "/compute".to_string()
            })
        );
    }

    #[test]
    fn test_redirect_page_to_itself() {
        let table = config(vec![CategoryEntry::new("Billing", "/billing", "credit-card")
            .with_page(
                PageEntry::new("/billing")
                    .redirect_only()
                    .with_tab("Overview", "/billing")
                    .with_tab("Invoices", "/billing/invoices"),
            )]);
        assert_eq!(
            validate(&table),
            Err(ConfigurationError::SelfRedirect {
                page: "/billing".to_string()
            })
        );
    }

    #[test]
    fn test_non_redirect_page_may_list_itself() {
        let table = config(vec![CategoryEntry::new("Billing", "/billing", "credit-card")
            .with_page(
                PageEntry::new("/billing")
                    .with_tab("Overview", "/billing")
                    .with_tab("Invoices", "/billing/invoices"),
            )]);
        assert_eq!(validate(&table), Ok(()));
    }

    #[test]
    fn test_redirect_cycle() {
        let table = config(vec![CategoryEntry::new("Compute", "/compute", "server")
            .with_page(
                PageEntry::new("/compute/a")
                    .redirect_only()
                    .with_tab("B", "/compute/b"),
            )
            .with_page(
                PageEntry::new("/compute/b")
                    .redirect_only()
                    .with_tab("A", "/compute/a"),
            )]);
        assert_eq!(
            validate(&table),
            Err(ConfigurationError::RedirectCycle {
                chain: vec![
                    "/compute/a".to_string(),
                    "/compute/b".to_string(),
                    "/compute/a".to_string(),
                ]
            })
        );
    }

    #[test]
    fn test_redirect_cycle_not_through_start() {
        // a -> b -> c -> b: the loop is reported from b, where it starts.
        let table = config(vec![CategoryEntry::new("Compute", "/compute", "server")
            .with_page(
                PageEntry::new("/compute/a")
                    .redirect_only()
                    .with_tab("B", "/compute/b"),
            )
            .with_page(
                PageEntry::new("/compute/b")
                    .redirect_only()
                    .with_tab("C", "/compute/c"),
            )
            .with_page(
                PageEntry::new("/compute/c")
                    .redirect_only()
                    .with_tab("B", "/compute/b"),
            )]);
        assert_eq!(
            validate(&table),
            Err(ConfigurationError::RedirectCycle {
                chain: vec![
                    "/compute/b".to_string(),
                    "/compute/c".to_string(),
                    "/compute/b".to_string(),
                ]
            })
        );
    }

    #[test]
    fn test_redirect_chain_without_cycle() {
        let table = config(vec![CategoryEntry::new("Compute", "/compute", "server")
            .with_page(
                PageEntry::new("/compute")
                    .redirect_only()
                    .with_tab("Auto Scaling", "/compute/auto-scaling"),
            )
            .with_page(
                PageEntry::new("/compute/auto-scaling")
                    .redirect_only()
                    .with_tab("ASG", "/compute/auto-scaling/asg"),
            )]);
        assert_eq!(validate(&table), Ok(()));
    }
}
