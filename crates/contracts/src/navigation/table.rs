use once_cell::sync::Lazy;
use serde::Serialize;

use super::config::{self, RouteConfig};
use super::error::ConfigurationError;
use super::link::is_active;
use super::matcher::match_category;
use super::types::{CategoryEntry, PageEntry};

/// Route table shipped with the console, validated at build time.
pub const DEFAULT_ROUTES: &str = include_str!("../../routes.toml");

static ROUTES: Lazy<Result<RouteTable, ConfigurationError>> =
    Lazy::new(|| RouteTable::from_toml_str(DEFAULT_ROUTES));

/// The console route table, parsed and validated on first access.
pub fn routes() -> Result<&'static RouteTable, &'static ConfigurationError> {
    ROUTES.as_ref()
}

/// Validated route table. The only way to build one is through
/// [`RouteTable::from_config`], so every instance satisfies the invariants
/// the resolver relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteTable {
    home: String,
    categories: Vec<CategoryEntry>,
}

impl RouteTable {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigurationError> {
        Self::from_config(config::parse(source)?)
    }

    pub fn from_config(config: RouteConfig) -> Result<Self, ConfigurationError> {
        config::validate(&config)?;
        Ok(Self {
            home: config.home,
            categories: config.categories,
        })
    }

    /// Target of the root redirect.
    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn categories(&self) -> &[CategoryEntry] {
        &self.categories
    }

    pub fn pages(&self) -> impl Iterator<Item = &PageEntry> {
        self.categories.iter().flat_map(|category| category.pages.iter())
    }

    pub fn page(&self, path: &str) -> Option<&PageEntry> {
        self.pages().find(|page| page.path == path)
    }

    /// Pages containing `current_path`, outermost first.
    ///
    /// Every page lives inside its category, so only the matched category
    /// needs to be searched.
    pub fn trail(&self, current_path: &str) -> Vec<&PageEntry> {
        let Some(category) = match_category(current_path, &self.categories) else {
            return Vec::new();
        };

        let mut trail: Vec<&PageEntry> = category
            .pages
            .iter()
            .filter(|page| is_active(&page.path, current_path))
            .collect();
        trail.sort_by_key(|page| page.path.len());
        trail
    }
}
