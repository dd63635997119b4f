use contracts::domain::a001_room::dto::RoomSummary;

const NAMES: &[&str] = &[
    "Аквариум", "Библиотека", "Веранда", "Галерея", "Гостиная", "Дозор", "Енисей", "Жемчуг",
    "Зенит", "Иволга", "Каштан", "Лагуна", "Маяк", "Нептун", "Орбита", "Пегас", "Радуга",
    "Сатурн", "Тайга", "Урал", "Фрегат", "Хвоя", "Цитадель",
];

const TECHNOLOGIES: &[&str] = &["H323_SIP", "ADOBE_CONNECT", "FREEPBX"];

/// Демонстрационный набор комнат
pub fn seed() -> Vec<RoomSummary> {
    NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| RoomSummary {
            id: format!("r-{}", index + 1),
            name: name.to_string(),
            technology: TECHNOLOGIES[index % TECHNOLOGIES.len()].to_string(),
            participant_count: ((index * 7) % 25 + 2) as u32,
        })
        .collect()
}

pub fn find_by_id<'a>(rooms: &'a [RoomSummary], id: &str) -> Option<&'a RoomSummary> {
    rooms.iter().find(|room| room.id == id)
}
