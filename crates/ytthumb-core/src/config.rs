use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Retry policy parameters (optional `[retry]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per request (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 0.25,
            max_delay_secs: 5,
        }
    }
}

/// Global configuration loaded from `~/.config/ytthumb/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbConfig {
    /// Directory downloads are saved to (None = current directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Privacy-policy document: local path or http(s) URL (None = bundled text).
    #[serde(default)]
    pub policy_source: Option<String>,
    /// Connect timeout per request in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Overall timeout per request in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Optional User-Agent header for requests to the image host.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

fn default_connect_timeout() -> u64 {
    15
}

fn default_timeout() -> u64 {
    60
}

impl Default for ThumbConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            policy_source: None,
            connect_timeout_secs: default_connect_timeout(),
            timeout_secs: default_timeout(),
            user_agent: None,
            retry: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ytthumb")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ThumbConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ThumbConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ThumbConfig = toml::from_str(&data)?;
    Ok(cfg)
}
