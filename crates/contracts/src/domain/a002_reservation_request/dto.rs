use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Строка списка заявок на бронирование
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequestSummary {
    pub id: String,
    pub description: Option<String>,
    pub room: String,
    pub user: String,
    pub date_time: DateTime<Utc>,
    pub writable: bool,
}

/// Columns the reservation request listing can be sorted by
pub const RESERVATION_REQUEST_SORT_COLUMNS: &[&str] = &["dateTime", "room", "user"];
