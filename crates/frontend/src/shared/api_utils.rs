//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// Absolute URLs are returned unchanged.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/rooms/list");
/// ```
pub fn api_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}{}", api_base(), path)
}

/// Path and query of the page the user is looking at, e.g. "/rooms?tab=2"
pub fn current_location() -> String {
    let Some(window) = web_sys::window() else {
        return "/".to_string();
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}
