use serde::{Deserialize, Serialize};

/// Name of an icon in the frontend icon set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl IconRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Top-level navigation section, e.g. Compute or Billing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryEntry {
    pub label: String,
    /// Absolute path with a single segment, e.g. `/compute`.
    pub path: String,
    pub icon: IconRef,
    /// Pages that declare tab strips inside this category, in display order.
    #[serde(default, rename(deserialize = "page"))]
    pub pages: Vec<PageEntry>,
}

impl CategoryEntry {
    pub fn new(label: impl Into<String>, path: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon: IconRef(icon.into()),
            pages: Vec::new(),
        }
    }

    pub fn with_page(mut self, page: PageEntry) -> Self {
        self.pages.push(page);
        self
    }

    /// The category path without its leading slash.
    pub fn segment(&self) -> &str {
        self.path.strip_prefix('/').unwrap_or(&self.path)
    }
}

/// A route that declares a tab strip: a category landing page or a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageEntry {
    pub path: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Redirect-only: the page has no content and forwards to its first tab.
    #[serde(default)]
    pub redirect: bool,
    #[serde(default, rename(deserialize = "tab"))]
    pub tabs: Vec<TabEntry>,
}

impl PageEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: None,
            redirect: false,
            tabs: Vec::new(),
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn redirect_only(mut self) -> Self {
        self.redirect = true;
        self
    }

    pub fn with_tab(mut self, title: impl Into<String>, href: impl Into<String>) -> Self {
        self.tabs.push(TabEntry::new(title, href));
        self
    }
}

/// Second-level navigable item. Order in the page is display order and the
/// first tab is the redirect target of a redirect-only page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TabEntry {
    pub title: String,
    pub href: String,
}

impl TabEntry {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }
}
