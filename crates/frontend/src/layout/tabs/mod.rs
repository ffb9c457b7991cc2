//! Tabs and page content
//!
//! - `page` - PageView, the center zone behind the redirect guard
//! - `registry` - placeholder content per resolved path
//! - `strip` - one tab strip per trail level

pub mod page;
pub mod registry;
pub mod strip;

pub use page::PageView;
