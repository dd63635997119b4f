//! Wire format of paginated list endpoints
//!
//! Request query: `start`, `count` (page size, `-1` = all items),
//! optional `sort` and `sort-desc`.
//!
//! Response body:
//!
//! ```json
//! {
//!     "start": 10,
//!     "count": 42,
//!     "sort": "name",
//!     "sort-desc": false,
//!     "items": [ ... ]
//! }
//! ```
//!
//! `count` in the response is the total number of items, not the page length.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use thiserror::Error;

const FIVE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(v) => v,
    None => unreachable!(),
};

/// Number of items per page
///
/// Travels as a plain integer where `-1` stands for [`PageSize::Unlimited`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum PageSize {
    Limited(NonZeroUsize),
    /// All items on a single page
    Unlimited,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageSizeError {
    #[error("page size must be positive or -1, got {0}")]
    OutOfRange(i64),

    #[error("page size is not an integer: {0:?}")]
    NotANumber(String),
}

impl PageSize {
    pub const DEFAULT: PageSize = PageSize::Limited(FIVE);

    pub fn limited(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(PageSize::Limited)
    }

    /// Items per page, `None` when unlimited
    pub fn get(self) -> Option<usize> {
        match self {
            PageSize::Limited(n) => Some(n.get()),
            PageSize::Unlimited => None,
        }
    }

    pub fn is_unlimited(self) -> bool {
        matches!(self, PageSize::Unlimited)
    }

    pub fn as_i64(self) -> i64 {
        match self {
            PageSize::Limited(n) => n.get() as i64,
            PageSize::Unlimited => -1,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::DEFAULT
    }
}

impl TryFrom<i64> for PageSize {
    type Error = PageSizeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(PageSize::Unlimited),
            v if v > 0 => usize::try_from(v)
                .ok()
                .and_then(PageSize::limited)
                .ok_or(PageSizeError::OutOfRange(v)),
            v => Err(PageSizeError::OutOfRange(v)),
        }
    }
}

impl From<PageSize> for i64 {
    fn from(size: PageSize) -> Self {
        size.as_i64()
    }
}

impl FromStr for PageSize {
    type Err = PageSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| PageSizeError::NotANumber(s.to_string()))?;
        PageSize::try_from(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

/// Parameters of a single list request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    pub start: usize,
    pub count: PageSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(rename = "sort-desc", default, skip_serializing_if = "Option::is_none")]
    pub sort_desc: Option<bool>,
}

impl ListRequest {
    pub fn new(start: usize, count: PageSize) -> Self {
        Self {
            start,
            count,
            sort: None,
            sort_desc: None,
        }
    }
}

/// One page of items plus the total count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Offset of the first returned item (may differ from the requested one)
    pub start: usize,
    /// Total number of items
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(rename = "sort-desc", default, skip_serializing_if = "Option::is_none")]
    pub sort_desc: Option<bool>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Structured error body of a failed list request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListError {
    pub code: String,
    pub message: String,
}

impl ListError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Persisted page position of one paginated list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePreference {
    pub page_index: usize,
    pub page_size: PageSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_wire_values() {
        assert_eq!(serde_json::to_string(&PageSize::Unlimited).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&PageSize::DEFAULT).unwrap(), "5");
        assert_eq!(
            serde_json::from_str::<PageSize>("15").unwrap(),
            PageSize::limited(15).unwrap()
        );
        assert!(serde_json::from_str::<PageSize>("0").is_err());
        assert!(serde_json::from_str::<PageSize>("-3").is_err());
    }

    #[test]
    fn test_page_size_from_str() {
        assert_eq!("10".parse::<PageSize>().unwrap(), PageSize::limited(10).unwrap());
        assert_eq!(" -1 ".parse::<PageSize>().unwrap(), PageSize::Unlimited);
        assert_eq!(
            "ten".parse::<PageSize>(),
            Err(PageSizeError::NotANumber("ten".to_string()))
        );
        assert_eq!("0".parse::<PageSize>(), Err(PageSizeError::OutOfRange(0)));
    }

    #[test]
    fn test_response_optional_sort_fields() {
        let json = r#"{"start": 5, "count": 12, "items": [1, 2, 3]}"#;
        let response: ListResponse<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(response.start, 5);
        assert_eq!(response.count, 12);
        assert_eq!(response.sort, None);
        assert_eq!(response.sort_desc, None);
        assert_eq!(response.items, vec![1, 2, 3]);

        let json = r#"{"start": 0, "count": 1, "sort": "date", "sort-desc": true, "items": []}"#;
        let response: ListResponse<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(response.sort.as_deref(), Some("date"));
        assert_eq!(response.sort_desc, Some(true));
    }

    #[test]
    fn test_preference_json_shape() {
        let preference = PagePreference {
            page_index: 2,
            page_size: PageSize::Unlimited,
        };
        assert_eq!(
            serde_json::to_string(&preference).unwrap(),
            r#"{"pageIndex":2,"pageSize":-1}"#
        );
    }
}
