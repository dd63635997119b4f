use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::state::AppState;
use crate::system::middleware::request_logger::request_logger;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/rooms/list", get(handlers::a001_room::list))
        .route(
            "/api/reservation-requests/list",
            get(handlers::a002_reservation_request::list),
        )
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
}
