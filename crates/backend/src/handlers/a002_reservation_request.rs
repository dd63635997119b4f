use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use contracts::domain::a002_reservation_request::dto::ReservationRequestSummary;
use contracts::shared::pagination::ListResponse;
use serde::Deserialize;

use crate::domain::{a001_room, a002_reservation_request};
use crate::shared::error::ApiError;
use crate::shared::listing::{paginate, ListQuery};
use crate::shared::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RoomFilter {
    /// Id of the room to list requests for
    pub room: Option<String>,
}

/// Handler для постраничного списка заявок на бронирование
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
    Query(filter): Query<RoomFilter>,
) -> Result<Json<ListResponse<ReservationRequestSummary>>, ApiError> {
    let Query(query) = query?;
    let page = match filter.room {
        Some(room_id) => {
            let room = a001_room::repository::find_by_id(&state.rooms, &room_id).ok_or(
                ApiError::NotFound {
                    what: "Room",
                    id: room_id.clone(),
                },
            )?;
            let requests = a002_reservation_request::repository::for_room(&state.reservation_requests, room);
            paginate(&requests, &query, state.listing)?
        }
        None => paginate(&state.reservation_requests, &query, state.listing)?,
    };
    Ok(Json(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::ListingConfig;

    fn state() -> AppState {
        AppState::seeded(ListingConfig::default())
    }

    fn page_query(start: usize, count: i64) -> ListQuery {
        ListQuery {
            start: Some(start),
            count: Some(count),
            ..ListQuery::default()
        }
    }

    #[tokio::test]
    async fn test_default_sort_is_newest_first() {
        let Json(page) = list(State(state()), Ok(Query(page_query(0, 10))), Query(RoomFilter::default()))
            .await
            .unwrap();

        assert_eq!(page.count, 37);
        assert_eq!(page.sort.as_deref(), Some("dateTime"));
        assert_eq!(page.sort_desc, Some(true));
        assert!(page.items.windows(2).all(|w| w[0].date_time >= w[1].date_time));
    }

    #[tokio::test]
    async fn test_start_past_end_returns_last_page() {
        let Json(page) = list(State(state()), Ok(Query(page_query(100, 10))), Query(RoomFilter::default()))
            .await
            .unwrap();

        assert_eq!(page.start, 30);
        assert_eq!(page.items.len(), 7);
    }

    #[tokio::test]
    async fn test_filter_by_room() {
        let state = state();
        let room = state.rooms[0].clone();
        let filter = RoomFilter {
            room: Some(room.id.clone()),
        };
        let Json(page) = list(State(state), Ok(Query(page_query(0, -1))), Query(filter))
            .await
            .unwrap();

        assert!(page.count > 0);
        assert!(page.items.iter().all(|request| request.room == room.name));
    }

    #[tokio::test]
    async fn test_unknown_room_is_not_found() {
        let filter = RoomFilter {
            room: Some("r-999".to_string()),
        };
        let error = list(State(state()), Ok(Query(page_query(0, 5))), Query(filter))
            .await
            .unwrap_err();
        assert!(matches!(error, ApiError::NotFound { what: "Room", .. }));
    }
}
