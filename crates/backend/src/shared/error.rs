//! Error responses of the list API
//!
//! Request errors are JSON `{code, message}` bodies. Missing resources get an
//! HTML page: its `#page-content` element is what the frontend shows, the
//! `back-url` link there is pointed back at the page the user came from.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use contracts::shared::pagination::ListError;
use thiserror::Error;

use super::listing::ListingError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Listing(#[from] ListingError),

    /// Query string that does not parse, e.g. `count=abc`
    #[error("Invalid list query: {0}")]
    Query(#[from] QueryRejection),

    #[error("{what} '{id}' does not exist")]
    NotFound { what: &'static str, id: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Listing(error) => {
                tracing::warn!("Rejected list request: {}", error);
                let body = ListError::new(error.code(), error.to_string());
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Query(rejection) => {
                tracing::warn!("Rejected list query: {}", rejection.body_text());
                let body = ListError::new("invalid-query", rejection.body_text());
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::NotFound { .. } => {
                tracing::warn!("{}", self);
                (StatusCode::NOT_FOUND, Html(error_page("Не найдено", &self.to_string()))).into_response()
            }
        }
    }
}

/// Full HTML error page with the message inside `#page-content`
pub fn error_page(title: &str, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<div id="page-content">
<h2>{title}</h2>
<p>{message}</p>
<p><a href="/?back-url=/">Назад</a></p>
</div>
</body>
</html>"#,
        title = escape_html(title),
        message = escape_html(message),
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
