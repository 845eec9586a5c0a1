//! Application settings loading from config.toml
//!
//! Settings are optional: a missing file yields [`Settings::default`]. The
//! file location comes from `MANAGEMATE_CONFIG`, falling back to
//! `./config.toml`. Every key may be omitted.

use crate::{
    core::sale::DEFAULT_INVOICE_PREFIX,
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming the settings file.
pub const CONFIG_PATH_VAR: &str = "MANAGEMATE_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Shop name shown in the dashboard header
    pub shop_name: String,
    /// Prefix for generated invoice numbers (e.g., "INV" gives `INV-2024-001`)
    pub invoice_prefix: String,
    /// Id of the seeded user to sign in as; the first user when absent
    pub active_user_id: Option<String>,
    /// How many sales the dashboard lists as recent
    pub recent_sales_limit: usize,
    /// TOML seed file to load instead of the built-in demo records
    pub seed_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shop_name: "ManageMate".to_string(),
            invoice_prefix: DEFAULT_INVOICE_PREFIX.to_string(),
            active_user_id: None,
            recent_sales_limit: 5,
            seed_path: None,
        }
    }
}

impl Settings {
    fn validate(&self) -> Result<()> {
        if self.invoice_prefix.trim().is_empty() {
            return Err(Error::Config {
                message: "invoice_prefix cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Parses settings from TOML text.
///
/// # Errors
/// Returns an error if the TOML is malformed, a key has the wrong type, or
/// `invoice_prefix` is blank.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    settings.validate()?;
    Ok(settings)
}

/// Loads settings from a TOML file, or defaults if the file does not exist.
///
/// # Errors
/// Returns an error if:
/// - The file exists but cannot be read
/// - The TOML syntax is invalid or a value is out of range
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        info!("No config file at {:?}, using defaults", path_ref);
        return Ok(Settings::default());
    }
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    parse_settings(&contents)
}

/// The settings file location: `$MANAGEMATE_CONFIG` or `./config.toml`.
#[must_use]
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_VAR).map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Loads settings from [`config_path`].
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_default_settings() -> Result<Settings> {
    load_settings(config_path())
}
