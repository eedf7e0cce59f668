//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab must declare:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a004_bom--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a004_bom/` directory.

/// List of records — table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Use-case wizard / action page (creation wizard, optimization, etc.).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a004_bom--list"));
        assert!(is_valid_page_id("u601_bom_from_template--usecase"));
        assert!(!is_valid_page_id("a004_bom"));
        assert!(!is_valid_page_id("--list"));
    }
}
