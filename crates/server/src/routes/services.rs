//! Catalog route handlers.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::db::ServiceRepository;
use crate::error::Result;
use crate::models::catalog::{CatalogPage, CatalogParamError, CatalogSelection, PageRequest, SortSpec};
use crate::state::AppState;

/// Query parameters accepted by the catalog listing.
#[derive(Debug, Deserialize)]
pub struct CatalogParams {
    /// Exact-match brand filter.
    pub brand: Option<String>,
    /// Field to sort on; only honored together with `sortOrder`.
    #[serde(rename = "sortField")]
    pub sort_field: Option<String>,
    /// `asc` or `desc`; only honored together with `sortField`.
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
    /// 1-indexed page number; only honored together with `limit`.
    pub page: Option<u64>,
    /// Page size; only honored together with `page`.
    pub limit: Option<u64>,
}

/// List catalog services.
///
/// GET /api/v1/services
///
/// Filtering, sorting, and pagination are each optional. Sorting applies
/// only when both sort parameters are present and pagination only when
/// both page parameters are; anything less falls back to store-native
/// order over the full result set. The count in the response is the
/// unfiltered collection total.
///
/// # Errors
///
/// Returns 400 for an unusable sort order or zero page/limit, 500 for a
/// store failure.
pub async fn list_services(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> Result<Json<CatalogPage>> {
    let selection = selection_from_params(params)?;
    let page = ServiceRepository::new(state.database())
        .list(&selection)
        .await?;
    Ok(Json(page))
}

/// Validate raw query parameters into a catalog selection.
fn selection_from_params(
    params: CatalogParams,
) -> std::result::Result<CatalogSelection, CatalogParamError> {
    let sort = match (params.sort_field, params.sort_order) {
        (Some(field), Some(order)) => Some(SortSpec {
            field,
            order: order.parse()?,
        }),
        // A lone field or order matches the historical surface: no sort.
        _ => None,
    };

    let page = match (params.page, params.limit) {
        (Some(page), Some(limit)) => Some(PageRequest::new(page, limit)?),
        _ => None,
    };

    Ok(CatalogSelection {
        brand: params.brand,
        sort,
        page,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::catalog::SortOrder;

    const fn params() -> CatalogParams {
        CatalogParams {
            brand: None,
            sort_field: None,
            sort_order: None,
            page: None,
            limit: None,
        }
    }

    #[test]
    fn test_bare_params_select_everything() {
        let selection = selection_from_params(params()).unwrap();
        assert!(selection.brand.is_none());
        assert!(selection.sort.is_none());
        assert!(selection.page.is_none());
    }

    #[test]
    fn test_brand_is_carried_through() {
        let selection = selection_from_params(CatalogParams {
            brand: Some("Feline Feast".to_string()),
            ..params()
        })
        .unwrap();
        assert_eq!(selection.brand.as_deref(), Some("Feline Feast"));
    }

    #[test]
    fn test_sort_requires_both_parameters() {
        let selection = selection_from_params(CatalogParams {
            sort_field: Some("price".to_string()),
            ..params()
        })
        .unwrap();
        assert!(selection.sort.is_none());

        let selection = selection_from_params(CatalogParams {
            sort_order: Some("asc".to_string()),
            ..params()
        })
        .unwrap();
        assert!(selection.sort.is_none());
    }

    #[test]
    fn test_complete_sort_pair_is_honored() {
        let selection = selection_from_params(CatalogParams {
            sort_field: Some("price".to_string()),
            sort_order: Some("desc".to_string()),
            ..params()
        })
        .unwrap();

        let sort = selection.sort.unwrap();
        assert_eq!(sort.field, "price");
        assert_eq!(sort.order, SortOrder::Descending);
    }

    #[test]
    fn test_unusable_sort_order_is_rejected() {
        let result = selection_from_params(CatalogParams {
            sort_field: Some("price".to_string()),
            sort_order: Some("sideways".to_string()),
            ..params()
        });
        assert_eq!(result.unwrap_err(), CatalogParamError::InvalidSortOrder);
    }

    #[test]
    fn test_pagination_requires_both_parameters() {
        let selection = selection_from_params(CatalogParams {
            page: Some(2),
            ..params()
        })
        .unwrap();
        assert!(selection.page.is_none());

        let selection = selection_from_params(CatalogParams {
            limit: Some(10),
            ..params()
        })
        .unwrap();
        assert!(selection.page.is_none());
    }

    #[test]
    fn test_complete_page_pair_is_honored() {
        let selection = selection_from_params(CatalogParams {
            page: Some(2),
            limit: Some(10),
            ..params()
        })
        .unwrap();

        let page = selection.page.unwrap();
        assert_eq!(page.offset(), 10);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn test_zero_page_is_rejected() {
        let result = selection_from_params(CatalogParams {
            page: Some(0),
            limit: Some(10),
            ..params()
        });
        assert_eq!(result.unwrap_err(), CatalogParamError::ZeroPage);
    }
}
