//! Navigation state resolver.
//!
//! Pure projection of (current path, route table) into the active category,
//! the per-level tab highlighting and the pre-render redirect decision.
//! Nothing here keeps state between calls except [`ActiveState`], which only
//! ever holds the result of the last observation.

use super::matcher::{match_category, match_tab};
use super::path::normalize_path;
use super::redirect::{PendingRedirect, RenderDecision};
use super::table::RouteTable;
use super::types::{CategoryEntry, PageEntry, TabEntry};

/// One page of the trail and the tab it highlights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLevel<'a> {
    pub page: &'a PageEntry,
    pub active_tab: Option<&'a TabEntry>,
}

/// Everything presentation needs for one observed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Normalized path the resolution was computed for.
    pub path: String,
    pub category: Option<&'a CategoryEntry>,
    /// Pages containing the path, outermost first.
    pub trail: Vec<PageLevel<'a>>,
    /// Exact tab match on the innermost page.
    pub tab: Option<&'a TabEntry>,
    pub decision: RenderDecision,
}

impl<'a> Resolution<'a> {
    /// The page currently rendering its tab strip, if any.
    pub fn page(&self) -> Option<&'a PageEntry> {
        self.trail.last().map(|level| level.page)
    }
}

/// Resolves `current_path` against `table`.
///
/// The innermost page highlights the tab equal to the path. An outer page
/// highlights the tab equal to the next inner page's path, so
/// `/compute/auto-scaling/asg` lights up "Auto Scaling" on the `/compute`
/// strip and "ASG" on the `/compute/auto-scaling` strip.
pub fn resolve<'a>(current_path: &str, table: &'a RouteTable) -> Resolution<'a> {
    let path = normalize_path(current_path);
    let category = match_category(&path, table.categories());
    let pages = table.trail(&path);

    let trail: Vec<PageLevel<'a>> = pages
        .iter()
        .copied()
        .enumerate()
        .map(|(depth, page)| {
            let active_tab = match_tab(&path, &page.tabs).or_else(|| {
                pages
                    .get(depth + 1)
                    .and_then(|inner| match_tab(&inner.path, &page.tabs))
            });
            PageLevel { page, active_tab }
        })
        .collect();

    let tab = pages.last().and_then(|page| match_tab(&path, &page.tabs));
    let decision = decide(&path, table);

    Resolution {
        path,
        category,
        trail,
        tab,
        decision,
    }
}

/// Pre-render guard: render `current_path` or forward it.
///
/// The root forwards to the table's home. A redirect-only page forwards to
/// its first tab. The table was validated, so this performs exactly one hop
/// and never loops.
pub fn decide(current_path: &str, table: &RouteTable) -> RenderDecision {
    let path = normalize_path(current_path);

    let target = if path == "/" {
        Some(table.home())
    } else {
        table
            .page(&path)
            .filter(|page| page.redirect)
            .and_then(|page| page.tabs.first())
            .map(|tab| tab.href.as_str())
    };

    match target {
        Some(to) => RenderDecision::Redirect(PendingRedirect::new(path.as_str(), to)),
        None => RenderDecision::Render,
    }
}

/// Activation state machine.
///
/// Starts `Unresolved` and moves to `Resolved` on every observed path. It
/// never goes back and has no terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveState<'a> {
    #[default]
    Unresolved,
    Resolved(Resolution<'a>),
}

impl<'a> ActiveState<'a> {
    /// Applies one path observation. Returns `false` when the resolution is
    /// identical to the current one, so observers can skip the update.
    pub fn observe(&mut self, current_path: &str, table: &'a RouteTable) -> bool {
        let next = resolve(current_path, table);
        if matches!(self, ActiveState::Resolved(current) if *current == next) {
            return false;
        }
        *self = ActiveState::Resolved(next);
        true
    }

    pub fn resolution(&self) -> Option<&Resolution<'a>> {
        match self {
            ActiveState::Resolved(resolution) => Some(resolution),
            ActiveState::Unresolved => None,
        }
    }

    pub fn category(&self) -> Option<&'a CategoryEntry> {
        self.resolution().and_then(|r| r.category)
    }

    pub fn tab(&self) -> Option<&'a TabEntry> {
        self.resolution().and_then(|r| r.tab)
    }

    pub fn page(&self) -> Option<&'a PageEntry> {
        self.resolution().and_then(|r| r.page())
    }

    pub fn decision(&self) -> RenderDecision {
        self.resolution()
            .map(|r| r.decision.clone())
            .unwrap_or_default()
    }
}
