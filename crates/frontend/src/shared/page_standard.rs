//! Page category constants.
//!
//! Every page rendered inside a tab declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"a001_fabric--list"`) and a
//! `data-page-category` with one of the constants below. The entity part
//! matches the module directory, so an id copied from the DOM inspector
//! leads straight to the code.

/// Table with filters and pagination
pub const PAGE_CAT_LIST: &str = "list";

/// Editing surface for a single document (the wash-recipe workspace)
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Charts and summary cards
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_DASHBOARD];

/// `{entity}--{category}` with both parts non-empty and a known category
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_fabric--list"));
        assert!(is_valid_page_id("d400_defect_analytics--dashboard"));
        assert!(!is_valid_page_id("a001_fabric"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_fabric--wizard"));
    }
}
