//! Console navigation: which category and tab are active for a path, and
//! whether the path renders or forwards to a canonical child.
//!
//! ## Usage
//!
//! ```rust
//! use contracts::navigation::{is_active, resolve, routes};
//!
//! let table = routes().expect("route table");
//! let resolution = resolve("/compute/auto-scaling/templates", table);
//!
//! assert_eq!(resolution.category.map(|c| c.label.as_str()), Some("Compute"));
//! assert_eq!(resolution.tab.map(|t| t.title.as_str()), Some("Templates"));
//! assert!(is_active("/compute", &resolution.path));
//! ```

mod config;
mod error;
mod link;
mod matcher;
mod path;
mod redirect;
mod resolver;
mod table;
mod types;

pub use config::{parse, validate, RouteConfig};
pub use error::ConfigurationError;
pub use link::is_active;
pub use matcher::{match_category, match_tab};
pub use path::{first_segment, normalize_path};
pub use redirect::{redirect_target, PendingRedirect, RenderDecision};
pub use resolver::{decide, resolve, ActiveState, PageLevel, Resolution};
pub use table::{routes, RouteTable, DEFAULT_ROUTES};
pub use types::{CategoryEntry, IconRef, PageEntry, TabEntry};
