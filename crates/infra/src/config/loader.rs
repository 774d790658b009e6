//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `CLASSCAL_SOURCE_PATH`: Timetable document (required)
//! - `CLASSCAL_WEEK_START`: Monday of the target week, `YYYY-MM-DD` (required)
//! - `CLASSCAL_TIME_ZONE`: IANA zone attached to events
//! - `CLASSCAL_ANCHOR_POLICY`: `strict` or `partial`
//! - `CLASSCAL_PAIRING`: `positional` or `combined`
//! - `CLASSCAL_CALENDAR_ID`: Target calendar (default `primary`)
//! - `CLASSCAL_CALENDAR_API_URL`: Calendar API base URL
//! - `GOOGLE_CALENDAR_ACCESS_TOKEN`: Already-issued OAuth access token
//! - `CLASSCAL_LOG`: Log filter directive
//! - `CLASSCAL_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./classcal.toml` or `./classcal.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use chrono_tz::Tz;
use classcal_domain::constants::DEFAULT_TIME_ZONE;
use classcal_domain::{
    AnchorPolicy, AppConfig, CalendarConfig, ClassCalError, LoggingConfig, PairingStrategy, Result,
    TimetableConfig,
};

use crate::integrations::calendar::ACCESS_TOKEN_ENV;

const CONFIG_FILE_NAMES: [&str; 4] = ["classcal.toml", "classcal.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ClassCalError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<AppConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `CLASSCAL_SOURCE_PATH` and `CLASSCAL_WEEK_START` must be present; every
/// other variable falls back to its default.
///
/// # Errors
/// Returns `ClassCalError::Config` if required variables are missing
/// or any variable has an invalid value.
pub fn load_from_env() -> Result<AppConfig> {
    let source_path = PathBuf::from(env_var("CLASSCAL_SOURCE_PATH")?);
    let week_start = env_var("CLASSCAL_WEEK_START").and_then(|s| parse_date(&s))?;
    // IANA zone names are case-sensitive; policy and pairing names are not.
    let time_zone = env_parse::<Tz>("CLASSCAL_TIME_ZONE", false)?.unwrap_or(DEFAULT_TIME_ZONE);
    let anchor_policy =
        env_parse::<AnchorPolicy>("CLASSCAL_ANCHOR_POLICY", true)?.unwrap_or_default();
    let pairing = env_parse::<PairingStrategy>("CLASSCAL_PAIRING", true)?.unwrap_or_default();

    let mut calendar = CalendarConfig::default();
    if let Ok(calendar_id) = std::env::var("CLASSCAL_CALENDAR_ID") {
        calendar.calendar_id = calendar_id;
    }
    if let Ok(api_base_url) = std::env::var("CLASSCAL_CALENDAR_API_URL") {
        calendar.api_base_url = api_base_url;
    }
    calendar.access_token = std::env::var(ACCESS_TOKEN_ENV).ok();

    let mut logging = LoggingConfig::default();
    if let Ok(filter) = std::env::var("CLASSCAL_LOG") {
        logging.filter = filter;
    }
    logging.json = env_bool("CLASSCAL_LOG_JSON", false);

    let config = AppConfig {
        timetable: TimetableConfig {
            source_path,
            time_zone,
            week_start: Some(week_start),
            anchors: None,
            anchor_policy,
            pairing,
        },
        calendar,
        logging,
    };

    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ClassCalError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing or values are out of range
pub fn load_from_file(path: Option<PathBuf>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ClassCalError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ClassCalError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ClassCalError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ClassCalError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ClassCalError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ClassCalError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Reject values that deserialize fine but cannot work at runtime.
fn validate(config: &AppConfig) -> Result<()> {
    let url = url::Url::parse(&config.calendar.api_base_url).map_err(|e| {
        ClassCalError::Config(format!(
            "Invalid calendar API URL {:?}: {}",
            config.calendar.api_base_url, e
        ))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClassCalError::Config(format!(
            "Calendar API URL must be http(s), got {}",
            url.scheme()
        )));
    }
    if config.calendar.calendar_id.trim().is_empty() {
        return Err(ClassCalError::Config("Calendar id must not be empty".into()));
    }
    if config.calendar.concurrency == 0 {
        return Err(ClassCalError::Config("Publish concurrency must be at least 1".into()));
    }
    if config.calendar.max_attempts == 0 {
        return Err(ClassCalError::Config("HTTP max attempts must be at least 1".into()));
    }
    Ok(())
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parent and grandparent, then
/// the same three levels relative to the executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `ClassCalError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        ClassCalError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional environment variable with `FromStr`.
///
/// Values are trimmed, and lowercased first when `lowercase` is set.
fn env_parse<T>(key: &str, lowercase: bool) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    let value = if lowercase { raw.trim().to_ascii_lowercase() } else { raw.trim().to_string() };
    value
        .parse::<T>()
        .map(Some)
        .map_err(|e| ClassCalError::Config(format!("Invalid value for {}: {}", key, e)))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| ClassCalError::Config(format!("Invalid week start {:?}: {}", raw, e)))
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
