//! Human-readable text for failed list requests
//!
//! Structured `{code, message}` bodies are used as is. Anything else is
//! treated as an HTML error page: the content of the configured element is
//! shown, with "back" links pointing at the page the user is on.

use regex::{Captures, Regex};
use scraper::{Html, Selector};

use super::config::PaginationConfig;
use super::fetcher::FetchError;

pub fn describe_fetch_error(error: &FetchError, config: &PaginationConfig, current_url: &str) -> String {
    match error {
        FetchError::Rejected(rejection) => rejection.message.clone(),
        FetchError::Status { body, .. } => extract_fragment(body, &config.error_fragment_id)
            .map(|fragment| rewrite_back_url(&fragment, &config.back_url_param, current_url))
            .unwrap_or_else(|| error.to_string()),
        other => other.to_string(),
    }
}

/// Trimmed inner HTML of the element with id `element_id`
pub fn extract_fragment(html: &str, element_id: &str) -> Option<String> {
    let selector = Selector::parse(&format!("#{}", element_id)).ok()?;
    let document = Html::parse_document(html);
    let content = document.select(&selector).next()?.inner_html();
    let content = content.trim();
    if content.is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}

/// Points every quoted link carrying `param` back at `current_url`
pub fn rewrite_back_url(content: &str, param: &str, current_url: &str) -> String {
    // `;` also covers the `&amp;` form of serialized attributes
    let pattern = format!(r#""([^"]*[?&;]{}=)[^"]*""#, regex::escape(param));
    let Ok(re) = Regex::new(&pattern) else {
        return content.to_string();
    };
    let target = urlencoding::encode(current_url);
    re.replace_all(content, |caps: &Captures| format!("\"{}{}\"", &caps[1], target))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::pagination::ListError;

    const ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Error</title></head>
<body>
    <div id="header">Shongo</div>
    <div id="page-content">
        <h1>Not found</h1>
        <a href="/room/7?tab=1&back-url=/old/place">Back</a>
    </div>
</body>
</html>"#;

    #[test]
    fn test_extract_fragment() {
        let fragment = extract_fragment(ERROR_PAGE, "page-content").unwrap();
        assert!(fragment.starts_with("<h1>Not found</h1>"));
        assert!(!fragment.contains("Shongo"));
        assert!(extract_fragment(ERROR_PAGE, "missing").is_none());
        assert!(extract_fragment("<div id=\"page-content\">   </div>", "page-content").is_none());
    }

    #[test]
    fn test_rewrite_back_url() {
        let content = r#"<a href="/room/7?back-url=/old">Back</a> <a href="/help">Help</a>"#;
        let rewritten = rewrite_back_url(content, "back-url", "/rooms?page=2");
        assert_eq!(
            rewritten,
            r#"<a href="/room/7?back-url=%2Frooms%3Fpage%3D2">Back</a> <a href="/help">Help</a>"#
        );
    }

    #[test]
    fn test_rewrite_back_url_after_escaped_ampersand() {
        let content = r#"<a href="/room/7?tab=1&amp;back-url=/old">Back</a>"#;
        let rewritten = rewrite_back_url(content, "back-url", "/rooms");
        assert_eq!(rewritten, r#"<a href="/room/7?tab=1&amp;back-url=%2Frooms">Back</a>"#);
    }

    #[test]
    fn test_describe_html_error_page() {
        let error = FetchError::Status {
            status: 404,
            body: ERROR_PAGE.to_string(),
        };
        let message = describe_fetch_error(&error, &PaginationConfig::default(), "/rooms");
        assert!(message.contains("<h1>Not found</h1>"));
        assert!(message.contains("back-url=%2Frooms\""));
        assert!(!message.contains("/old/place"));
    }

    #[test]
    fn test_describe_other_errors() {
        let config = PaginationConfig::default();

        let rejected = FetchError::Rejected(ListError::new("invalid-count", "Bad page size"));
        assert_eq!(describe_fetch_error(&rejected, &config, "/"), "Bad page size");

        let plain = FetchError::Status {
            status: 502,
            body: "Bad gateway".to_string(),
        };
        assert_eq!(
            describe_fetch_error(&plain, &config, "/"),
            "Server responded with status 502"
        );

        let transport = FetchError::Transport("offline".to_string());
        assert_eq!(
            describe_fetch_error(&transport, &config, "/"),
            "Failed to send request: offline"
        );
    }
}
