use chrono::{DateTime, Duration, Utc};
use contracts::domain::a001_room::dto::RoomSummary;
use contracts::domain::a002_reservation_request::dto::ReservationRequestSummary;

const REQUEST_COUNT: usize = 37;

const USERS: &[&str] = &["Иванов И.", "Петрова А.", "Сидоров П.", "Кузнецова Е."];

/// 2024-01-15 09:00 UTC
const FIRST_SLOT: i64 = 1_705_309_200;

/// Демонстрационные заявки, распределённые по `rooms`
pub fn seed(rooms: &[RoomSummary]) -> Vec<ReservationRequestSummary> {
    let Some(first_slot) = DateTime::<Utc>::from_timestamp(FIRST_SLOT, 0) else {
        return Vec::new();
    };
    if rooms.is_empty() {
        return Vec::new();
    }

    (0..REQUEST_COUNT)
        .map(|index| {
            let room = &rooms[(index * 5) % rooms.len()];
            ReservationRequestSummary {
                id: format!("rr-{}", index + 1),
                description: (index % 4 != 0).then(|| format!("Совещание №{}", index + 1)),
                room: room.name.clone(),
                user: USERS[index % USERS.len()].to_string(),
                date_time: first_slot + Duration::hours((index * 29 % 300) as i64),
                writable: index % 3 != 0,
            }
        })
        .collect()
}

/// Заявки одной комнаты
pub fn for_room(
    requests: &[ReservationRequestSummary],
    room: &RoomSummary,
) -> Vec<ReservationRequestSummary> {
    requests
        .iter()
        .filter(|request| request.room == room.name)
        .cloned()
        .collect()
}
