use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Built frontend (trunk `dist`), served for every non-API path
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ListingConfig {
    /// Largest page a client may request; `count=-1` is not limited by it
    pub max_page_size: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self { max_page_size: 100 }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[listing]
max_page_size = 100
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Static directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    // Fallback: relative to current directory (cargo run)
    dir.to_path_buf()
}
