use contracts::shared::pagination::PageSize;
use serde::Deserialize;

/// Settings shared by all paginated lists of the application
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used until the user picks another one
    pub default_page_size: PageSize,
    /// Sizes offered by the page size selector
    pub page_size_options: Vec<PageSize>,
    /// Id of the element holding the message in HTML error pages
    pub error_fragment_id: String,
    /// Query parameter of "return to here" links in error pages
    pub back_url_param: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::DEFAULT,
            page_size_options: [5, 10, 15].into_iter().filter_map(PageSize::limited).collect(),
            error_fragment_id: "page-content".to_string(),
            back_url_param: "back-url".to_string(),
        }
    }
}

impl PaginationConfig {
    /// Smallest offered page size, used to decide whether the selector is worth showing
    pub fn smallest_page_size(&self) -> usize {
        self.page_size_options
            .iter()
            .filter_map(|size| size.get())
            .min()
            .or_else(|| self.default_page_size.get())
            .unwrap_or(1)
    }
}

/// Parses a TOML config; missing keys keep their defaults.
///
/// A broken config is logged and replaced by the defaults.
pub fn load_config(raw: &str) -> PaginationConfig {
    match toml::from_str::<PaginationConfig>(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid pagination config, using defaults: {}", e);
            PaginationConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP_CONFIG: &str = include_str!("../../../pagination.toml");

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config: Result<PaginationConfig, _> = toml::from_str(APP_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), PaginationConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = load_config("default_page_size = -1\n");
        assert_eq!(config.default_page_size, PageSize::Unlimited);
        assert_eq!(config.back_url_param, "back-url");
        assert_eq!(config.page_size_options.len(), 3);
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let config = load_config("default_page_size = 0\n");
        assert_eq!(config, PaginationConfig::default());
    }

    #[test]
    fn test_smallest_page_size() {
        let mut config = PaginationConfig::default();
        assert_eq!(config.smallest_page_size(), 5);
        config.page_size_options = vec![PageSize::Unlimited];
        assert_eq!(config.smallest_page_size(), 5);
    }
}
