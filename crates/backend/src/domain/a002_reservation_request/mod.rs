pub mod repository;

use std::cmp::Ordering;

use contracts::domain::a002_reservation_request::dto::{
    ReservationRequestSummary, RESERVATION_REQUEST_SORT_COLUMNS,
};

use crate::shared::listing::Sortable;

impl Sortable for ReservationRequestSummary {
    const SORT_COLUMNS: &'static [&'static str] = RESERVATION_REQUEST_SORT_COLUMNS;
    const DEFAULT_SORT: &'static str = "dateTime";
    const DEFAULT_SORT_DESC: bool = true;

    fn compare_by_field(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "room" => self.room.cmp(&other.room),
            "user" => self.user.cmp(&other.user),
            _ => self.date_time.cmp(&other.date_time),
        }
    }
}
