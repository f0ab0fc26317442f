//! Primitives for the list derivation pipeline.
//!
//! Every admin list view is a pure transform of an already-fetched
//! collection, applied in a fixed order: free-text search, categorical
//! filters, sort, paginate. The entity-specific derivations live next to
//! the entity types; this module holds the shared pieces so the
//! arithmetic can be tested in isolation.

use std::cmp::Ordering;

/// Sort direction for a list column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a `dir` query parameter; anything other than `desc` is ascending.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        if param == Some("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// Apply the direction to an ascending ordering.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    /// Query-parameter value (`asc` / `desc`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Case-insensitive substring match of `needle` against any of `fields`.
///
/// An empty or whitespace-only needle matches everything, so an empty
/// search box leaves the list untouched.
#[must_use]
pub fn matches_search(needle: &str, fields: &[&str]) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Case-insensitive string ordering for sort keys.
#[must_use]
pub fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// The slice window and page count for one page of a derived list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Start index into the filtered collection (inclusive).
    pub start: usize,
    /// End index into the filtered collection (exclusive).
    pub end: usize,
    /// The effective page, after clamping.
    pub page: usize,
    /// Total page count; at least 1 even for an empty collection, so the
    /// pager stays well-defined.
    pub total_pages: usize,
}

impl PageWindow {
    /// Compute the window for `page` (1-based) over `len` items.
    ///
    /// A page beyond the final page resets to page 1 rather than clamping
    /// to the last page, matching what the list views do when a filter
    /// change shrinks the collection. A zero `page_size` is treated as 1.
    #[must_use]
    pub const fn compute(len: usize, page: usize, page_size: usize) -> Self {
        let page_size = if page_size == 0 { 1 } else { page_size };
        let total_pages = if len == 0 { 1 } else { len.div_ceil(page_size) };
        let page = if page == 0 || page > total_pages {
            1
        } else {
            page
        };
        let start = (page - 1) * page_size;
        let end = if start + page_size < len {
            start + page_size
        } else {
            len
        };
        Self {
            start,
            end,
            page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        assert!(matches_search("red", &["Red Shirt", "Men"]));
        assert!(matches_search("RED", &["red shirt"]));
        assert!(!matches_search("red", &["Blue Hat", "Women"]));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        assert!(matches_search("", &["anything"]));
        assert!(matches_search("   ", &["anything"]));
        assert!(matches_search("", &[]));
    }

    #[test]
    fn test_cmp_ci_ignores_case() {
        assert_eq!(cmp_ci("apple", "Banana"), Ordering::Less);
        assert_eq!(cmp_ci("Apple", "apple"), Ordering::Equal);
    }

    #[test]
    fn test_sort_direction_from_param() {
        assert_eq!(SortDirection::from_param(Some("desc")), SortDirection::Desc);
        assert_eq!(SortDirection::from_param(Some("asc")), SortDirection::Asc);
        assert_eq!(SortDirection::from_param(Some("bogus")), SortDirection::Asc);
        assert_eq!(SortDirection::from_param(None), SortDirection::Asc);
    }

    #[test]
    fn test_sort_direction_apply() {
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
    }

    #[test]
    fn test_page_count_rounds_up() {
        let window = PageWindow::compute(23, 1, 10);
        assert_eq!(window.total_pages, 3);
        assert_eq!((window.start, window.end), (0, 10));
    }

    #[test]
    fn test_final_page_is_partial() {
        let window = PageWindow::compute(23, 3, 10);
        assert_eq!((window.start, window.end), (20, 23));
        assert_eq!(window.page, 3);
    }

    #[test]
    fn test_page_past_end_resets_to_first() {
        let window = PageWindow::compute(23, 4, 10);
        assert_eq!(window.page, 1);
        assert_eq!((window.start, window.end), (0, 10));
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let window = PageWindow::compute(0, 1, 10);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.page, 1);
        assert_eq!((window.start, window.end), (0, 0));
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let window = PageWindow::compute(3, 2, 0);
        assert_eq!(window.total_pages, 3);
        assert_eq!((window.start, window.end), (1, 2));
    }

    #[test]
    fn test_exact_multiple_of_page_size() {
        let window = PageWindow::compute(20, 2, 10);
        assert_eq!(window.total_pages, 2);
        assert_eq!((window.start, window.end), (10, 20));
    }
}
