//! Pagination engine: pure window arithmetic over the post sequence.

/// The `(skip, limit)` pair selecting one page of an ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: u64,
}

/// Compute the window for a 1-based page number.
///
/// `page < 1` (including an absent page, passed as `None`) is normalized
/// to 1. There is no upper bound: a page past the end yields a window the
/// store resolves to an empty sequence, not an error.
pub fn window(page: Option<i64>, page_size: u64) -> PageWindow {
    let page = page.unwrap_or(1).max(1) as u64;
    PageWindow {
        skip: (page - 1) * page_size,
        limit: page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(window(Some(1), 2), PageWindow { skip: 0, limit: 2 });
    }

    #[test]
    fn second_page_skips_one_window() {
        assert_eq!(window(Some(2), 2), PageWindow { skip: 2, limit: 2 });
    }

    #[test]
    fn absent_page_defaults_to_first() {
        assert_eq!(window(None, 2), PageWindow { skip: 0, limit: 2 });
    }

    #[test]
    fn page_below_one_is_normalized() {
        assert_eq!(window(Some(0), 2), PageWindow { skip: 0, limit: 2 });
        assert_eq!(window(Some(-3), 2), PageWindow { skip: 0, limit: 2 });
    }

    #[test]
    fn page_past_the_end_is_allowed() {
        assert_eq!(window(Some(10), 2), PageWindow { skip: 18, limit: 2 });
    }
}
