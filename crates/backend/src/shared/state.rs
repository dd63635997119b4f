use std::sync::Arc;

use contracts::domain::a001_room::dto::RoomSummary;
use contracts::domain::a002_reservation_request::dto::ReservationRequestSummary;

use super::config::ListingConfig;
use crate::domain::{a001_room, a002_reservation_request};

/// Shared by all handlers; the listings are read-only
#[derive(Debug, Clone)]
pub struct AppState {
    pub rooms: Arc<Vec<RoomSummary>>,
    pub reservation_requests: Arc<Vec<ReservationRequestSummary>>,
    pub listing: ListingConfig,
}

impl AppState {
    pub fn seeded(listing: ListingConfig) -> Self {
        let rooms = a001_room::repository::seed();
        let reservation_requests = a002_reservation_request::repository::seed(&rooms);
        tracing::info!(
            "Seeded {} rooms and {} reservation requests",
            rooms.len(),
            reservation_requests.len()
        );
        Self {
            rooms: Arc::new(rooms),
            reservation_requests: Arc::new(reservation_requests),
            listing,
        }
    }
}
