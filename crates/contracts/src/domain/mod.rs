pub mod a001_room;
pub mod a002_reservation_request;
