use serde::{Deserialize, Serialize};

/// Строка списка виртуальных комнат
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub id: String,
    pub name: String,
    pub technology: String,
    pub participant_count: u32,
}

/// Columns the room listing can be sorted by
pub const ROOM_SORT_COLUMNS: &[&str] = &["name", "technology", "participantCount"];
