//! Validated catalog query selection.
//!
//! The catalog endpoint accepts free-form query parameters; this module is
//! where they become an application-defined selection. The policy is
//! explicit: no pagination unless both values are present, and zero is
//! rejected rather than forwarded to the store driver.

use serde::Serialize;
use thiserror::Error;

use super::service::Service;

/// Errors rejecting unusable catalog query parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogParamError {
    /// The sort order was neither `asc` nor `desc`.
    #[error("sortOrder must be \"asc\" or \"desc\"")]
    InvalidSortOrder,

    /// A pagination value of zero was supplied.
    #[error("page and limit must be positive")]
    ZeroPage,
}

/// Direction of a catalog sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// The store's numeric sort direction: 1 ascending, -1 descending.
    #[must_use]
    pub const fn direction(self) -> i32 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = CatalogParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Ascending)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Descending)
        } else {
            Err(CatalogParamError::InvalidSortOrder)
        }
    }
}

/// A single-field directional sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Document field to sort on.
    pub field: String,
    /// Sort direction.
    pub order: SortOrder,
}

/// A validated pagination request. `page` is 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Create a pagination request.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogParamError::ZeroPage`] when either value is zero.
    pub const fn new(page: u64, limit: u64) -> Result<Self, CatalogParamError> {
        if page == 0 || limit == 0 {
            return Err(CatalogParamError::ZeroPage);
        }
        Ok(Self { page, limit })
    }

    /// Number of documents to skip: `(page - 1) * limit`, saturating.
    #[must_use]
    pub const fn offset(self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Page size as the store's signed limit.
    #[must_use]
    pub fn limit(self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }
}

/// A fully validated catalog query: optional brand filter, optional sort,
/// optional page.
#[derive(Debug, Clone, Default)]
pub struct CatalogSelection {
    /// Exact-match brand filter; `None` matches every document.
    pub brand: Option<String>,
    /// Sort specification; `None` keeps store-native order.
    pub sort: Option<SortSpec>,
    /// Pagination; `None` returns the full result set.
    pub page: Option<PageRequest>,
}

/// One page of catalog results.
///
/// `count` is the unfiltered estimated size of the whole collection, which
/// clients use to drive pagination; it is not the number of documents
/// matching the brand filter.
#[derive(Debug, Serialize)]
pub struct CatalogPage {
    /// Estimated total document count of the collection.
    pub count: u64,
    /// The requested page of services.
    pub result: Vec<Service>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_parses_case_insensitively() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert_eq!("Asc".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
    }

    #[test]
    fn test_sort_order_rejects_garbage() {
        assert_eq!(
            "upwards".parse::<SortOrder>(),
            Err(CatalogParamError::InvalidSortOrder)
        );
        assert_eq!("".parse::<SortOrder>(), Err(CatalogParamError::InvalidSortOrder));
    }

    #[test]
    fn test_sort_direction_values() {
        assert_eq!(SortOrder::Ascending.direction(), 1);
        assert_eq!(SortOrder::Descending.direction(), -1);
    }

    #[test]
    fn test_page_request_rejects_zero() {
        assert_eq!(PageRequest::new(0, 10), Err(CatalogParamError::ZeroPage));
        assert_eq!(PageRequest::new(1, 0), Err(CatalogParamError::ZeroPage));
    }

    #[test]
    fn test_first_page_has_no_offset() {
        let page = PageRequest::new(1, 10).unwrap();
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn test_offset_is_page_minus_one_times_limit() {
        let page = PageRequest::new(2, 10).unwrap();
        assert_eq!(page.offset(), 10);

        let page = PageRequest::new(7, 25).unwrap();
        assert_eq!(page.offset(), 150);
    }

    #[test]
    fn test_offset_saturates() {
        let page = PageRequest::new(u64::MAX, u64::MAX).unwrap();
        assert_eq!(page.offset(), u64::MAX);
    }

    #[test]
    fn test_limit_clamps_to_i64() {
        let page = PageRequest::new(1, u64::MAX).unwrap();
        assert_eq!(page.limit(), i64::MAX);
    }
}
