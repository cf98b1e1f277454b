use serde::{Deserialize, Serialize};

use crate::PAGE_SIZE;

/// Fixed-size pages over pre-formatted verse lines.
///
/// Page `p` shows lines `[p * PAGE_SIZE, min(p * PAGE_SIZE + PAGE_SIZE, len))`.
/// Navigation clamps at both ends; there is no wrap-around.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    lines: Vec<String>,
    page: usize,
}

impl Paginator {
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, page: 0 }
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.lines.len().div_ceil(PAGE_SIZE)
    }

    #[must_use]
    pub fn visible(&self) -> &[String] {
        let start = (self.page * PAGE_SIZE).min(self.lines.len());
        let end = (start + PAGE_SIZE).min(self.lines.len());
        &self.lines[start..end]
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        (self.page + 1) * PAGE_SIZE < self.lines.len()
    }

    /// Moves one page forward. Returns `false` when already on the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Moves one page back. Returns `false` when already on the first page.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn reset(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.page = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lines(count: usize) -> Vec<String> {
        (1..=count).map(|n| format!("line {n}")).collect()
    }

    #[test]
    fn test_empty_sequence() {
        let mut pages = Paginator::new(Vec::new());
        assert_eq!(pages.page_count(), 0);
        assert!(pages.visible().is_empty());
        assert!(!pages.has_previous());
        assert!(!pages.has_next());
        assert!(!pages.next());
        assert!(!pages.previous());
    }

    #[test]
    fn test_exactly_one_page() {
        let pages = Paginator::new(lines(16));
        assert_eq!(pages.page_count(), 1);
        assert_eq!(pages.visible().len(), 16);
        assert!(!pages.has_previous());
        assert!(!pages.has_next());
    }

    #[test]
    fn test_seventeen_lines_split_across_two_pages() {
        let mut pages = Paginator::new(lines(17));
        assert_eq!(pages.visible().first().map(String::as_str), Some("line 1"));
        assert_eq!(pages.visible().last().map(String::as_str), Some("line 16"));
        assert!(!pages.has_previous());
        assert!(pages.has_next());

        assert!(pages.next());
        assert_eq!(pages.visible(), ["line 17".to_string()]);
        assert!(pages.has_previous());
        assert!(!pages.has_next());
        assert!(!pages.next());
        assert_eq!(pages.page(), 1);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut pages = Paginator::new(lines(40));
        pages.next();
        pages.next();
        pages.reset(lines(5));
        assert_eq!(pages.page(), 0);
        assert_eq!(pages.visible().len(), 5);
    }

    proptest! {
        #[test]
        fn prop_pages_cover_every_line_once(len in 0usize..200) {
            let mut pages = Paginator::new(lines(len));
            prop_assert_eq!(pages.page_count(), (len + PAGE_SIZE - 1) / PAGE_SIZE);

            let mut seen = Vec::new();
            loop {
                let p = pages.page();
                let expected_end = (p * PAGE_SIZE + PAGE_SIZE).min(len);
                prop_assert_eq!(pages.visible().len(), expected_end - p * PAGE_SIZE);
                prop_assert_eq!(pages.has_previous(), p > 0);
                prop_assert_eq!(pages.has_next(), (p + 1) * PAGE_SIZE < len);
                seen.extend_from_slice(pages.visible());
                if !pages.next() {
                    break;
                }
            }
            prop_assert_eq!(seen, lines(len));
        }

        #[test]
        fn prop_navigation_stays_in_range(len in 0usize..100, moves in proptest::collection::vec(any::<bool>(), 0..50)) {
            let mut pages = Paginator::new(lines(len));
            for forward in moves {
                if forward { pages.next(); } else { pages.previous(); }
                prop_assert!(pages.page() < pages.page_count().max(1));
            }
        }
    }
}
