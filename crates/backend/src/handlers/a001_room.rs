use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use contracts::domain::a001_room::dto::RoomSummary;
use contracts::shared::pagination::ListResponse;

use crate::shared::error::ApiError;
use crate::shared::listing::{paginate, ListQuery};
use crate::shared::state::AppState;

/// Handler для постраничного списка комнат
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse<RoomSummary>>, ApiError> {
    let Query(query) = query?;
    let page = paginate(&state.rooms, &query, state.listing)?;
    tracing::debug!("Listed rooms {}..+{} of {}", page.start, page.items.len(), page.count);
    Ok(Json(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::ListingConfig;
    use crate::shared::listing::ListingError;

    fn state() -> AppState {
        AppState::seeded(ListingConfig::default())
    }

    #[tokio::test]
    async fn test_list_first_page_sorted_by_name() {
        let query = ListQuery {
            start: Some(0),
            count: Some(5),
            ..ListQuery::default()
        };
        let Json(page) = list(State(state()), Ok(Query(query))).await.unwrap();

        assert_eq!(page.start, 0);
        assert_eq!(page.count, 23);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.sort.as_deref(), Some("name"));
        assert_eq!(page.sort_desc, Some(false));
        assert_eq!(page.items[0].name, "Аквариум");
    }

    #[tokio::test]
    async fn test_list_rejects_zero_count() {
        let query = ListQuery {
            count: Some(0),
            ..ListQuery::default()
        };
        let error = list(State(state()), Ok(Query(query))).await.unwrap_err();
        assert!(matches!(error, ApiError::Listing(ListingError::InvalidCount(0))));
    }
}
