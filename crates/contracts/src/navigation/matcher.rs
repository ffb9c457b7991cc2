//! Path matcher: current path to active category and active tab.

use super::path::first_segment;
use super::types::{CategoryEntry, TabEntry};

/// Category whose single path segment equals the first segment of
/// `current_path`.
///
/// Whole-segment equality, so `/billingx` never selects `/billing`.
/// Categories are unique by first segment once the table is validated.
pub fn match_category<'a>(
    current_path: &str,
    categories: &'a [CategoryEntry],
) -> Option<&'a CategoryEntry> {
    let segment = first_segment(current_path)?;
    categories
        .iter()
        .find(|category| category.segment() == segment)
}

/// Tab whose href is exactly `current_path`.
///
/// Tabs are leaf routes. A sub-route of a tab matches nothing here, so a
/// detail page never lights up a sibling.
pub fn match_tab<'a>(current_path: &str, tabs: &'a [TabEntry]) -> Option<&'a TabEntry> {
    tabs.iter().find(|tab| tab.href == current_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<CategoryEntry> {
        vec![
            CategoryEntry::new("Dashboard", "/dashboard", "layout-dashboard"),
            CategoryEntry::new("Compute", "/compute", "server"),
            CategoryEntry::new("Billing", "/billing", "credit-card"),
        ]
    }

    fn billing_tabs() -> Vec<TabEntry> {
        vec![
            TabEntry::new("Overview", "/billing"),
            TabEntry::new("Transactions", "/billing/transactions"),
            TabEntry::new("Invoices", "/billing/invoices"),
        ]
    }

    #[test]
    fn test_match_by_first_segment() {
        let categories = categories();
        let matched = match_category("/compute/auto-scaling/templates", &categories);
        assert_eq!(matched.map(|c| c.path.as_str()), Some("/compute"));

        let matched = match_category("/billing", &categories);
        assert_eq!(matched.map(|c| c.label.as_str()), Some("Billing"));
    }

    #[test]
    fn test_no_partial_segment_match() {
        let categories = categories();
        assert_eq!(match_category("/billingx", &categories), None);
        assert_eq!(match_category("/bill", &categories), None);
        assert_eq!(match_category("/computes/x", &categories), None);
    }

    #[test]
    fn test_no_match() {
        let categories = categories();
        assert_eq!(match_category("/", &categories), None);
        assert_eq!(match_category("", &categories), None);
        assert_eq!(match_category("/unknown/section", &categories), None);
        assert_eq!(match_category("/compute", &[]), None);
    }

    #[test]
    fn test_tab_exact_match() {
        let tabs = billing_tabs();
        assert_eq!(
            match_tab("/billing/transactions", &tabs).map(|t| t.title.as_str()),
            Some("Transactions")
        );
        assert_eq!(
            match_tab("/billing", &tabs).map(|t| t.title.as_str()),
            Some("Overview")
        );
    }

    #[test]
    fn test_tab_sub_route_does_not_match() {
        let tabs = billing_tabs();
        assert_eq!(match_tab("/billing/transactions/tx-42", &tabs), None);
        assert_eq!(match_tab("/billing/invoicesx", &tabs), None);
        assert_eq!(match_tab("/billing/transactions", &[]), None);
    }
}
