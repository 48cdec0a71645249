//! Pagination types and the page range windower.
//!
//! [`page_range`] turns an arbitrarily long list of pages into a window of
//! at most [`WINDOW_SIZE`] slots, always anchored on the first and last
//! page, with ellipsis markers standing in for skipped runs.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::config::pagination::PaginationConfig;
use crate::error::AppError;
use crate::result::AppResult;

/// Number of slots in a windowed page range.
pub const WINDOW_SIZE: usize = 7;
/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 25;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 100;
/// Glyph used when an ellipsis is rendered or serialized.
pub const ELLIPSIS: &str = "...";

/// One cell of a page range window.
///
/// Serializes as a bare number for pages and as `"..."` for the ellipsis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSlot {
    /// A clickable page number (1-based).
    Page(u64),
    /// A non-clickable placeholder for skipped pages.
    Ellipsis,
}

impl PageSlot {
    /// Returns the page number, or `None` for an ellipsis.
    pub fn page(&self) -> Option<u64> {
        match self {
            Self::Page(page) => Some(*page),
            Self::Ellipsis => None,
        }
    }

    /// Returns whether this slot is an ellipsis marker.
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl std::fmt::Display for PageSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

impl From<u64> for PageSlot {
    fn from(page: u64) -> Self {
        Self::Page(page)
    }
}

impl Serialize for PageSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(page) => serializer.serialize_u64(*page),
            Self::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

impl<'de> Deserialize<'de> for PageSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawSlot {
            Page(u64),
            Marker(String),
        }

        match RawSlot::deserialize(deserializer)? {
            RawSlot::Page(page) => Ok(Self::Page(page)),
            RawSlot::Marker(marker) if marker == ELLIPSIS => Ok(Self::Ellipsis),
            RawSlot::Marker(marker) => Err(de::Error::invalid_value(
                de::Unexpected::Str(&marker),
                &"a page number or an ellipsis marker",
            )),
        }
    }
}

/// Returns the page list `[1, 2, ..., count]`.
pub fn page_numbers(count: u64) -> Vec<u64> {
    (1..=count).collect()
}

/// Computes the display window for `current_page` over `total_pages`.
///
/// When there are at most [`WINDOW_SIZE`] pages they are returned unchanged.
/// Otherwise the window always holds exactly [`WINDOW_SIZE`] slots, starting
/// with page 1 and ending with the last page:
///
/// - near the start: `[1, 2, 3, 4, 5, ..., N]`
/// - near the end: `[1, ..., N-4, N-3, N-2, N-1, N]`
/// - elsewhere: `[1, ..., c-1, c, c+1, ..., N]`
///
/// A `current_page` outside `[1, N]` is clamped into range. Use
/// [`try_page_range`] to reject it instead.
pub fn page_range(current_page: u64, total_pages: &[u64]) -> Vec<PageSlot> {
    let count = total_pages.len() as u64;
    if count == 0 {
        return Vec::new();
    }

    let clamped = current_page.clamp(1, count);
    if clamped != current_page {
        debug!(
            current_page = current_page,
            total_pages = count,
            clamped = clamped,
            "Current page out of range, clamping"
        );
    }

    window(clamped, total_pages)
}

/// Strict variant of [`page_range`] that rejects out-of-range input.
pub fn try_page_range(current_page: u64, total_pages: &[u64]) -> AppResult<Vec<PageSlot>> {
    check_in_range(current_page, total_pages.len() as u64)?;
    Ok(window(current_page, total_pages))
}

/// Strict variant of [`page_range_for_count`] that rejects out-of-range
/// input.
pub fn try_page_range_for_count(current_page: u64, count: u64) -> AppResult<Vec<PageSlot>> {
    check_in_range(current_page, count)?;
    Ok(page_range_for_count(current_page, count))
}

fn check_in_range(current_page: u64, count: u64) -> AppResult<()> {
    if count == 0 {
        return Err(AppError::validation("Page list is empty"));
    }
    if current_page == 0 || current_page > count {
        return Err(AppError::validation(format!(
            "Current page {current_page} is outside 1..={count}"
        )));
    }
    Ok(())
}

/// Computes the window for `current_page` over the pages `1..=count`
/// without materializing the page list.
///
/// Equivalent to `page_range(current_page, &page_numbers(count))`.
pub fn page_range_for_count(current_page: u64, count: u64) -> Vec<PageSlot> {
    if count <= WINDOW_SIZE as u64 {
        return (1..=count).map(PageSlot::Page).collect();
    }
    slots(current_page.clamp(1, count), count)
}

fn window(current: u64, total_pages: &[u64]) -> Vec<PageSlot> {
    if total_pages.len() <= WINDOW_SIZE {
        return total_pages.iter().copied().map(PageSlot::Page).collect();
    }
    slots(current, total_pages.len() as u64)
}

fn slots(current: u64, last: u64) -> Vec<PageSlot> {
    let mut slots = [PageSlot::Ellipsis; WINDOW_SIZE];
    slots[0] = PageSlot::Page(1);
    slots[WINDOW_SIZE - 1] = PageSlot::Page(last);

    if current <= 4 {
        for k in 1..=4 {
            slots[k] = PageSlot::Page(k as u64 + 1);
        }
    } else if current >= last - 3 {
        for k in 1..=4 {
            slots[WINDOW_SIZE - 1 - k] = PageSlot::Page(last - k as u64);
        }
    } else {
        slots[2] = PageSlot::Page(current - 1);
        slots[3] = PageSlot::Page(current);
        slots[4] = PageSlot::Page(current + 1);
    }

    slots.to_vec()
}

/// Computes how many pages are needed for `total_items`.
///
/// An empty collection still occupies one (empty) page.
pub fn total_pages_for(total_items: u64, page_size: u64) -> u64 {
    let page_size = page_size.max(1);
    if total_items == 0 {
        1
    } else {
        total_items.div_ceil(page_size)
    }
}

/// Request parameters for a paginated view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Create a page request using the configured page size.
    pub fn from_config(page: u64, config: &PaginationConfig) -> Self {
        Self::new(page, config.effective_page_size())
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Everything a pagination control needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// Current page number (1-based, within range).
    pub current_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a previous page.
    pub has_previous: bool,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Slots to render.
    pub window: Vec<PageSlot>,
}

impl PageState {
    /// Builds the state for a collection of `total_items` items.
    pub fn new(current_page: u64, total_items: u64, page_size: u64) -> Self {
        Self::for_pages(current_page, total_pages_for(total_items, page_size))
    }

    /// Builds the state for a request against `total_items` items.
    pub fn from_request(request: &PageRequest, total_items: u64) -> Self {
        Self::new(request.page, total_items, request.page_size)
    }

    /// Builds the state when the page count is already known.
    pub fn for_pages(current_page: u64, total_pages: u64) -> Self {
        let total_pages = total_pages.max(1);
        let current_page = current_page.clamp(1, total_pages);
        Self {
            current_page,
            total_pages,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
            window: page_range_for_count(current_page, total_pages),
        }
    }

    /// Page to navigate to from a "previous" control.
    pub fn previous_page(&self) -> Option<u64> {
        self.has_previous.then(|| self.current_page - 1)
    }

    /// Page to navigate to from a "next" control.
    pub fn next_page(&self) -> Option<u64> {
        self.has_next.then(|| self.current_page + 1)
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
