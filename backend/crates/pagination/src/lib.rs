//! Page windows over ordered record sequences.
//!
//! Listing endpoints slice an already ordered, already filtered sequence into
//! fixed-size pages addressed by a 1-based index. This crate owns those
//! primitives so every endpoint computes the same window:
//!
//! - [`PageIndex`] is the 1-based page number. Lenient constructors fall back
//!   to the first page when the raw value is absent or not a positive integer.
//! - [`PageSize`] is the window length, [`DEFAULT_PAGE_SIZE`] unless a caller
//!   injects another value (tests do).
//! - [`paginate`] borrows the window `[(index - 1) * size, index * size)`
//!   clipped to the input length.
//! - [`Page`] pairs the window with the total length of the unpaginated
//!   sequence so clients can derive the page count.
//!
//! Out-of-range pages are empty, never an error. Nothing here sorts or
//! mutates the input.
//!
//! # Examples
//!
//! ```
//! use pagination::{Page, PageIndex, PageSize};
//!
//! let records: Vec<u32> = (1..=12).collect();
//! let page = Page::from_slice(&records, PageIndex::from_raw(Some(2)), PageSize::default());
//! assert_eq!(page.items(), &[11, 12]);
//! assert_eq!(page.total(), 12);
//! assert_eq!(page.page_count(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Number of records per page used by every listing endpoint.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Errors raised by the strict [`PageIndex::new`] constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageIndexError {
    /// Page indices start at one.
    #[error("page index must be at least 1")]
    Zero,
}

/// 1-based page number.
///
/// ## Invariants
/// - The wrapped value is always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageIndex(usize);

impl PageIndex {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Strict constructor rejecting zero.
    ///
    /// # Errors
    /// Returns [`PageIndexError::Zero`] when `value` is zero.
    pub const fn new(value: usize) -> Result<Self, PageIndexError> {
        if value == 0 {
            Err(PageIndexError::Zero)
        } else {
            Ok(Self(value))
        }
    }

    /// Lenient constructor for optional signed input.
    ///
    /// Absent, zero and negative values resolve to [`PageIndex::FIRST`].
    ///
    /// ```
    /// use pagination::PageIndex;
    ///
    /// assert_eq!(PageIndex::from_raw(None), PageIndex::FIRST);
    /// assert_eq!(PageIndex::from_raw(Some(-3)), PageIndex::FIRST);
    /// assert_eq!(PageIndex::from_raw(Some(4)).get(), 4);
    /// ```
    #[must_use]
    pub fn from_raw(raw: Option<i64>) -> Self {
        raw.and_then(|value| usize::try_from(value).ok())
            .and_then(|value| Self::new(value).ok())
            .unwrap_or(Self::FIRST)
    }

    /// Lenient constructor for query-string input.
    ///
    /// Anything that does not parse as a positive integer resolves to the
    /// first page, matching how listing clients have always been served.
    ///
    /// ```
    /// use pagination::PageIndex;
    ///
    /// assert_eq!(PageIndex::parse_lenient(Some("3")).get(), 3);
    /// assert_eq!(PageIndex::parse_lenient(Some("three")), PageIndex::FIRST);
    /// assert_eq!(PageIndex::parse_lenient(None), PageIndex::FIRST);
    /// ```
    #[must_use]
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        Self::from_raw(raw.and_then(|value| value.trim().parse::<i64>().ok()))
    }

    /// Return the page number.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for PageIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<usize> for PageIndex {
    type Error = PageIndexError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageIndex> for usize {
    fn from(value: PageIndex) -> Self {
        value.0
    }
}

impl std::fmt::Display for PageIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of records in one page.
///
/// A size of zero is accepted and yields empty pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSize(usize);

impl PageSize {
    /// Wrap an explicit page size.
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Return the page size.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

/// Half-open bounds of the requested window, clipped to `len`.
fn window(len: usize, index: PageIndex, size: PageSize) -> (usize, usize) {
    let start = index.get().saturating_sub(1).saturating_mul(size.get());
    let end = start.saturating_add(size.get()).min(len);
    (start.min(len), end)
}

/// Borrow the records that fall on page `index`.
///
/// ```
/// use pagination::{PageIndex, PageSize, paginate};
///
/// let records = ["a", "b", "c", "d", "e"];
/// let size = PageSize::new(2);
/// assert_eq!(paginate(&records, PageIndex::FIRST, size), &["a", "b"]);
/// assert_eq!(paginate(&records, PageIndex::from_raw(Some(3)), size), &["e"]);
/// assert!(paginate(&records, PageIndex::from_raw(Some(4)), size).is_empty());
/// ```
#[must_use]
pub fn paginate<T>(records: &[T], index: PageIndex, size: PageSize) -> &[T] {
    let (start, end) = window(records.len(), index, size);
    records.get(start..end).unwrap_or(&[])
}

/// Number of pages needed for `total` records, `ceil(total / size)`.
///
/// Returns zero when `size` is zero.
#[must_use]
pub const fn page_count(total: usize, size: PageSize) -> usize {
    if size.get() == 0 {
        0
    } else {
        total.div_ceil(size.get())
    }
}

/// One page of records plus the length of the sequence it was cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    items: Vec<T>,
    total: usize,
    index: PageIndex,
    size: PageSize,
}

impl<T> Page<T> {
    /// Cut page `index` out of an owned sequence.
    #[must_use]
    pub fn from_vec(records: Vec<T>, index: PageIndex, size: PageSize) -> Self {
        let total = records.len();
        let (start, end) = window(total, index, size);
        let items = records
            .into_iter()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect();
        Self {
            items,
            total,
            index,
            size,
        }
    }

    /// Records on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, returning its records.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Length of the unpaginated sequence.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Requested page index.
    #[must_use]
    pub const fn index(&self) -> PageIndex {
        self.index
    }

    /// Page size used to cut the window.
    #[must_use]
    pub const fn size(&self) -> PageSize {
        self.size
    }

    /// Number of pages in the unpaginated sequence.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        page_count(self.total, self.size)
    }

    /// Transform every record, keeping the window metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            index: self.index,
            size: self.size,
        }
    }
}

impl<T: Clone> Page<T> {
    /// Cut page `index` out of a borrowed sequence, cloning the window.
    #[must_use]
    pub fn from_slice(records: &[T], index: PageIndex, size: PageSize) -> Self {
        Self {
            items: paginate(records, index, size).to_vec(),
            total: records.len(),
            index,
            size,
        }
    }
}
