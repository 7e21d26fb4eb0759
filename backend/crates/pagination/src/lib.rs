//! Page-number pagination primitives.
//!
//! Endpoints return bounded slices of a larger ordered result set, indexed by
//! a 1-based page number with a fixed page size. Out-of-range pages yield an
//! empty slice rather than an error; only malformed page numbers fail.

use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of records returned per page.
pub const PAGE_SIZE: usize = 10;

/// Errors raised while interpreting a requested page number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageNumberError {
    /// The input was not a base-10 integer.
    #[error("page number must be a positive integer, got {input:?}")]
    NotANumber {
        /// The offending raw input.
        input: String,
    },
    /// Page numbers are 1-based; zero is never a valid page.
    #[error("page number must be at least 1")]
    Zero,
}

/// A validated, 1-based page number.
///
/// # Examples
/// ```
/// use pagination::PageNumber;
///
/// let page: PageNumber = "3".parse().expect("valid page");
/// assert_eq!(page.get(), 3);
/// assert!("0".parse::<PageNumber>().is_err());
/// assert!("two".parse::<PageNumber>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Construct a page number, rejecting zero.
    pub const fn new(value: u32) -> Result<Self, PageNumberError> {
        match NonZeroU32::new(value) {
            Some(value) => Ok(Self(value)),
            None => Err(PageNumberError::Zero),
        }
    }

    /// The page number as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Offset of the first record on this page.
    #[must_use]
    pub const fn start_offset(self) -> usize {
        (self.get() as usize - 1) * PAGE_SIZE
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl FromStr for PageNumber {
    type Err = PageNumberError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parsed: u32 = input
            .trim()
            .parse()
            .map_err(|_| PageNumberError::NotANumber {
                input: input.to_owned(),
            })?;
        Self::new(parsed)
    }
}

impl TryFrom<u32> for PageNumber {
    type Error = PageNumberError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageNumber> for u32 {
    fn from(value: PageNumber) -> Self {
        value.get()
    }
}

impl std::fmt::Display for PageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Return the sub-slice of `items` belonging to `page`.
///
/// Equivalent to `items[(page - 1) * PAGE_SIZE .. page * PAGE_SIZE]` with
/// both bounds clamped to the slice length, so pages past the end are empty.
///
/// # Examples
/// ```
/// use pagination::{page_slice, PageNumber, PAGE_SIZE};
///
/// let items: Vec<u32> = (0..25).collect();
/// assert_eq!(page_slice(PageNumber::FIRST, &items).len(), PAGE_SIZE);
/// let last = PageNumber::new(3).expect("valid page");
/// assert_eq!(page_slice(last, &items), &items[20..25]);
/// ```
#[must_use]
pub fn page_slice<T>(page: PageNumber, items: &[T]) -> &[T] {
    let start = page.start_offset();
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "tests fail loudly on setup errors")]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case("10", 10)]
    #[case(" 2 ", 2)]
    fn parses_positive_integers(#[case] input: &str, #[case] expected: u32) {
        let page: PageNumber = input.parse().expect("valid page number");
        assert_eq!(page.get(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("-1")]
    #[case("1.5")]
    fn rejects_non_numeric_input(#[case] input: &str) {
        assert!(matches!(
            input.parse::<PageNumber>(),
            Err(PageNumberError::NotANumber { .. })
        ));
    }

    #[rstest]
    fn rejects_zero() {
        assert_eq!(PageNumber::new(0), Err(PageNumberError::Zero));
        assert_eq!("0".parse::<PageNumber>(), Err(PageNumberError::Zero));
    }

    #[rstest]
    #[case(1, 0, 10)]
    #[case(2, 10, 20)]
    #[case(3, 20, 25)]
    fn slices_match_the_arithmetic_contract(
        #[case] page: u32,
        #[case] start: usize,
        #[case] end: usize,
    ) {
        let items: Vec<u32> = (0..25).collect();
        let page = PageNumber::new(page).expect("valid page");
        assert_eq!(page_slice(page, &items), &items[start..end]);
    }

    #[rstest]
    #[case(4)]
    #[case(100)]
    fn pages_past_the_end_are_empty_not_errors(#[case] page: u32) {
        let items: Vec<u32> = (0..25).collect();
        let page = PageNumber::new(page).expect("valid page");
        assert!(page_slice(page, &items).is_empty());
    }

    #[rstest]
    fn empty_input_yields_empty_first_page() {
        let items: Vec<u32> = Vec::new();
        assert!(page_slice(PageNumber::FIRST, &items).is_empty());
    }

    #[rstest]
    fn default_is_the_first_page() {
        assert_eq!(PageNumber::default(), PageNumber::FIRST);
    }

    #[rstest]
    fn serde_round_trips_through_u32() {
        let page = PageNumber::new(7).expect("valid page");
        let json = serde_json::to_string(&page).expect("serialize");
        assert_eq!(json, "7");
    }
}
