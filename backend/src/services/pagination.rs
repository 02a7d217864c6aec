//! Fixed-size page windows over ordered result sets.

use std::num::IntErrorKind;
use std::ops::Range;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(number: u32) -> Option<Self> {
        (number >= 1).then_some(Page(number))
    }

    /// Coerces raw query input into a page. Anything that is not a positive
    /// integer falls back to the first page.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Page::FIRST;
        };

        match raw.parse::<u32>() {
            Ok(number) => Page::new(number).unwrap_or(Page::FIRST),
            // Positive numbers too large for a page still name a page past
            // the end of any result set.
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => Page(u32::MAX),
            Err(_) => Page::FIRST,
        }
    }

    pub fn number(self) -> u32 {
        self.0
    }

    /// Offsets covered by this page, saturating instead of overflowing.
    pub fn window(self) -> Range<usize> {
        let start = (self.0 as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
        start..start.saturating_add(QUESTIONS_PER_PAGE)
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::FIRST
    }
}

/// Returns the slice of `items` that falls on `page`, empty when the page
/// starts past the end.
pub fn paginate<T>(items: &[T], page: Page) -> &[T] {
    let Range { start, end } = page.window();
    if start >= items.len() {
        return &[];
    }
    &items[start..end.min(items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u32) -> Page {
        Page::new(n).unwrap()
    }

    #[test]
    fn first_page_holds_ten_items() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(paginate(&items, page(1)), &items[0..10]);
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(paginate(&items, page(2)), &[10, 11]);
    }

    #[test]
    fn page_past_end_is_empty() {
        let items: Vec<u32> = (0..20).collect();
        assert!(paginate(&items, page(3)).is_empty());
        assert!(paginate(&items, page(1000)).is_empty());
        assert!(paginate::<u32>(&[], Page::FIRST).is_empty());
    }

    #[test]
    fn pages_match_offset_window() {
        let items: Vec<usize> = (0..37).collect();
        for n in 1..=5u32 {
            let start = (n as usize - 1) * QUESTIONS_PER_PAGE;
            let expected: Vec<usize> = items.iter().copied().skip(start).take(10).collect();
            assert_eq!(paginate(&items, page(n)), expected.as_slice());
            assert_eq!(paginate(&items, page(n)).is_empty(), start >= items.len());
        }
    }

    #[test]
    fn malformed_input_defaults_to_first_page() {
        for raw in [None, Some(""), Some("abc"), Some("0"), Some("-3"), Some("1.5"), Some("-99999999999")] {
            assert_eq!(Page::parse(raw), Page::FIRST, "input {raw:?}");
        }
        assert_eq!(Page::parse(Some(" 4 ")).number(), 4);
    }

    #[test]
    fn oversized_page_number_lands_past_the_end() {
        for raw in ["99999999999", "5000000000", "4294967296"] {
            let page = Page::parse(Some(raw));
            assert_eq!(page.number(), u32::MAX, "input {raw}");
            assert!(paginate(&[1, 2, 3], page).is_empty(), "input {raw}");
        }
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let items = [1, 2, 3];
        assert!(paginate(&items, page(u32::MAX)).is_empty());
    }
}
