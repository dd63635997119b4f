pub mod repository;

use std::cmp::Ordering;

use contracts::domain::a001_room::dto::{RoomSummary, ROOM_SORT_COLUMNS};

use crate::shared::listing::Sortable;

impl Sortable for RoomSummary {
    const SORT_COLUMNS: &'static [&'static str] = ROOM_SORT_COLUMNS;
    const DEFAULT_SORT: &'static str = "name";
    const DEFAULT_SORT_DESC: bool = false;

    fn compare_by_field(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "technology" => self.technology.cmp(&other.technology),
            "participantCount" => self.participant_count.cmp(&other.participant_count),
            _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}
