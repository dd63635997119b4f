//! Pagination state and the page arithmetic behind it

use contracts::shared::pagination::PageSize;

use super::sort::SortState;

/// One entry of the page list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    /// Offset of the first item of the page
    pub start: usize,
    pub active: bool,
}

/// Lifecycle of a paginated list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Loading,
    Ready,
    Error,
}

/// Everything the view needs to render a paginated list
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState<T> {
    pub page_index: Option<usize>,
    pub page_size: PageSize,
    pub sort: SortState,
    /// Items of the current page
    pub items: Vec<T>,
    pub pages: Vec<PageDescriptor>,
    /// Total number of items reported by the last successful fetch
    pub total_count: usize,
    /// Last fetch succeeded and no other fetch is running
    pub ready: bool,
    pub loading: bool,
    /// At least one fetch succeeded since `init`
    pub loaded: bool,
    pub error: bool,
    pub error_message: Option<String>,
}

impl<T> PaginationState<T> {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_index: None,
            page_size,
            sort: SortState::default(),
            items: Vec::new(),
            pages: vec![PageDescriptor {
                start: 0,
                active: true,
            }],
            total_count: 0,
            ready: false,
            loading: false,
            loaded: false,
            error: false,
            error_message: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error {
            Phase::Error
        } else if self.ready {
            Phase::Ready
        } else {
            Phase::Uninitialized
        }
    }

    pub fn active_page(&self) -> Option<&PageDescriptor> {
        self.pages.iter().find(|page| page.active)
    }

    pub fn is_single_page(&self) -> bool {
        self.pages.len() <= 1
    }
}

impl<T> Default for PaginationState<T> {
    fn default() -> Self {
        Self::new(PageSize::DEFAULT)
    }
}

/// Page requested by the view, before clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Index(i64),
    /// Input that is not a page number at all
    Invalid,
}

impl PageTarget {
    /// Index into a page list of `page_count` entries
    pub fn clamp(self, page_count: usize) -> usize {
        let last = page_count.saturating_sub(1);
        match self {
            PageTarget::Index(index) if index < 0 => 0,
            PageTarget::Index(index) => usize::try_from(index).map_or(last, |i| i.min(last)),
            PageTarget::Invalid => 0,
        }
    }

    pub fn is_current(self, current: Option<usize>) -> bool {
        match (self, current) {
            (PageTarget::Index(index), Some(current)) => {
                usize::try_from(index).is_ok_and(|i| i == current)
            }
            _ => false,
        }
    }
}

impl From<usize> for PageTarget {
    fn from(index: usize) -> Self {
        i64::try_from(index).map_or(PageTarget::Index(i64::MAX), PageTarget::Index)
    }
}

impl From<i64> for PageTarget {
    fn from(index: i64) -> Self {
        PageTarget::Index(index)
    }
}

impl From<i32> for PageTarget {
    fn from(index: i32) -> Self {
        PageTarget::Index(index.into())
    }
}

impl From<&str> for PageTarget {
    /// Only plain digit strings are page numbers
    fn from(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return PageTarget::Invalid;
        }
        raw.parse::<i64>()
            .map_or(PageTarget::Index(i64::MAX), PageTarget::Index)
    }
}

/// `max(1, ceil(total / page_size))`, always 1 when unlimited
pub fn page_count(total: usize, page_size: PageSize) -> usize {
    match page_size.get() {
        Some(size) => total.div_ceil(size).max(1),
        None => 1,
    }
}

/// Builds the page list for `total` items and marks the page containing `start`.
///
/// Returns the pages and the index of the active one. A `start` past the last
/// page activates the last page.
pub fn build_pages(total: usize, page_size: PageSize, start: usize) -> (Vec<PageDescriptor>, usize) {
    let count = page_count(total, page_size);
    let (active, step) = match page_size.get() {
        Some(size) => ((start / size).min(count - 1), size),
        None => (0, 0),
    };
    let pages = (0..count)
        .map(|index| PageDescriptor {
            start: index * step,
            active: index == active,
        })
        .collect();
    (pages, active)
}

/// Start of the page that contains `anchor` under `page_size`
pub fn aligned_start(anchor: usize, page_size: PageSize) -> usize {
    match page_size.get() {
        Some(size) => anchor / size * size,
        None => 0,
    }
}
