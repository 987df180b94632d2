use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::{normalize_base_url, validate_config};

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Root of the fantasy API, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Classic mini-league whose standings are reported.
    #[serde(default = "default_league_id")]
    pub league_id: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Fill gameweeks a manager has no points for with zero instead of failing.
    #[serde(default)]
    pub zero_fill_points: bool,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_league_id() -> u64 {
    constants::DEFAULT_LEAGUE_ID
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            league_id: default_league_id(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            zero_fill_points: false,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to built-in defaults when no config file exists.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `FPL_API_BASE_URL` - Override API base URL
    /// - `FPL_LEAGUE_ID` - Override league id
    /// - `FPL_LOG_FILE` - Override log file path
    /// - `FPL_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `FPL_ZERO_FILL_POINTS` - `1`/`true` to zero-fill missing points cells
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Config::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;
        config.api_base_url = normalize_base_url(&config.api_base_url);
        config.validate()?;

        Ok(config)
    }

    /// Applies `FPL_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Ok(api_base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = api_base_url;
        }

        if let Ok(league_id) = std::env::var(env_vars::LEAGUE_ID) {
            self.league_id = league_id.trim().parse().map_err(|_| {
                AppError::config_error(format!(
                    "{} must be a number, got '{league_id}'",
                    env_vars::LEAGUE_ID
                ))
            })?;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(flag) = std::env::var(env_vars::ZERO_FILL_POINTS) {
            self.zero_fill_points = matches!(flag.trim(), "1" | "true" | "yes");
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_base_url,
            self.league_id,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", config.api_base_url);
        println!("────────────────────────────────────");
        println!("League:");
        println!("{}", config.league_id);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Missing Gameweek Points:");
        if config.zero_fill_points {
            println!("filled with 0");
        } else {
            println!("rejected");
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and normalizes the
    /// API base URL before writing.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_base_url: normalize_base_url(&self.api_base_url),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads the stored configuration for editing, without env overrides.
    pub async fn load_for_update() -> Result<Self, AppError> {
        Config::load_for_update_from_path(&get_config_path()).await
    }

    /// Loads the configuration at `path` for editing.
    ///
    /// A missing file yields defaults. A file that exists but cannot be read
    /// or parsed is an error, so it is never overwritten with defaults.
    pub async fn load_for_update_from_path(path: &str) -> Result<Self, AppError> {
        if !Path::new(path).exists() {
            return Ok(Config::default());
        }

        Config::load_from_path(path).await.map_err(|e| {
            warn!("Config file {path} could not be loaded for update: {e}");
            AppError::config_error(format!(
                "Existing config file '{path}' could not be loaded ({e}). Fix or remove it before updating"
            ))
        })
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
