//! Page-number pagination over a fully materialised list.
//!
//! Page `n` of size `s` covers the half-open window `[(n - 1) * s, n * s)`.
//! Pages below 1 are not rejected up front: they simply produce an empty
//! window, exactly like a page past the end. Callers treat an empty window
//! as "not found".

/// Default number of questions per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Validated page size (at least one item).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// Construct a page size, rejecting zero.
    #[must_use]
    pub fn new(size: usize) -> Option<Self> {
        (size > 0).then_some(Self(size))
    }

    /// Number of items per page.
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

/// Select the items for `page` from `items`.
///
/// Returns an empty slice for `page < 1`, for pages beyond the end, and when
/// the window bounds overflow.
///
/// # Examples
/// ```
/// use trivia_api::domain::pagination::{PageSize, page_window};
///
/// let items: Vec<u32> = (1..=25).collect();
/// let size = PageSize::new(10).expect("non-zero");
/// assert_eq!(page_window(&items, 3, size), &[21, 22, 23, 24, 25]);
/// assert!(page_window(&items, 4, size).is_empty());
/// assert!(page_window(&items, 0, size).is_empty());
/// ```
pub fn page_window<T>(items: &[T], page: i64, size: PageSize) -> &[T] {
    let Some(start) = window_start(page, size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size.get()).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

fn window_start(page: i64, size: PageSize) -> Option<usize> {
    let index = page.checked_sub(1)?;
    let index = usize::try_from(index).ok()?;
    index.checked_mul(size.get())
}
