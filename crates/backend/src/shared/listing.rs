//! Paging and sorting shared by all list endpoints
//!
//! Answers the `start` / `count` / `sort` / `sort-desc` query of the frontend
//! pagination controller with a [`ListResponse`].

use std::cmp::Ordering;

use contracts::shared::pagination::{ListResponse, PageSize};
use serde::Deserialize;
use thiserror::Error;

use super::config::ListingConfig;

/// Query parameters of a list request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub start: Option<usize>,
    /// Page size, `-1` for all items
    pub count: Option<i64>,
    pub sort: Option<String>,
    #[serde(rename = "sort-desc")]
    pub sort_desc: Option<bool>,
}

/// Items that can be listed with a sort column
pub trait Sortable: Clone {
    const SORT_COLUMNS: &'static [&'static str];
    const DEFAULT_SORT: &'static str;
    const DEFAULT_SORT_DESC: bool;

    /// Сравнивает два объекта по указанной колонке
    fn compare_by_field(&self, other: &Self, column: &str) -> Ordering;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("Page size must be a positive number or -1, got {0}")]
    InvalidCount(i64),

    #[error("Page size {requested} exceeds the limit of {max}")]
    CountTooLarge { requested: usize, max: usize },
}

impl ListingError {
    pub fn code(&self) -> &'static str {
        match self {
            ListingError::InvalidCount(_) => "invalid-count",
            ListingError::CountTooLarge { .. } => "count-too-large",
        }
    }
}

/// Sorts `items` and cuts out the requested page.
///
/// - no `count` or `count = -1` returns everything from offset 0
/// - a `start` past the end is moved to the start of the last page
/// - an unknown sort column falls back to the default sort; the sort actually
///   applied is always reported back
pub fn paginate<T: Sortable>(
    items: &[T],
    query: &ListQuery,
    config: ListingConfig,
) -> Result<ListResponse<T>, ListingError> {
    let count = match query.count {
        None => PageSize::Unlimited,
        Some(raw) => PageSize::try_from(raw).map_err(|_| ListingError::InvalidCount(raw))?,
    };
    if let Some(size) = count.get() {
        if size > config.max_page_size {
            return Err(ListingError::CountTooLarge {
                requested: size,
                max: config.max_page_size,
            });
        }
    }

    let (sort, sort_desc) = normalize_sort::<T>(query.sort.as_deref(), query.sort_desc);
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = a.compare_by_field(b, sort);
        if sort_desc {
            ordering.reverse()
        } else {
            ordering
        }
    });

    let total = sorted.len();
    let (start, end) = match count.get() {
        Some(size) => {
            let requested = query.start.unwrap_or(0);
            let start = if requested >= total {
                total.saturating_sub(1) / size * size
            } else {
                requested
            };
            (start, (start + size).min(total))
        }
        None => (0, total),
    };

    Ok(ListResponse {
        start,
        count: total,
        sort: Some(sort.to_string()),
        sort_desc: Some(sort_desc),
        items: sorted.into_iter().skip(start).take(end - start).collect(),
    })
}

/// Column and direction that will actually be applied
fn normalize_sort<T: Sortable>(sort: Option<&str>, desc: Option<bool>) -> (&'static str, bool) {
    let known = sort.and_then(|column| T::SORT_COLUMNS.iter().copied().find(|c| *c == column));
    match (sort, known) {
        (_, Some(column)) => (column, desc.unwrap_or(false)),
        (Some(unknown), None) => {
            tracing::debug!("Unknown sort column '{}', using '{}'", unknown, T::DEFAULT_SORT);
            (T::DEFAULT_SORT, T::DEFAULT_SORT_DESC)
        }
        // bare direction: default column, requested direction
        (None, None) => (T::DEFAULT_SORT, desc.unwrap_or(T::DEFAULT_SORT_DESC)),
    }
}
