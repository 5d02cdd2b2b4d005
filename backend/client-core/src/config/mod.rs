//! Registry loading.
//!
//! The host page serializes its registry (base URL, CSRF token, locale) as
//! JSON. The client receives it either as that JSON file or through
//! environment variables and never reads any other global state.

use crate::error::config::ConfigError;

use common::ErrorLocation;
use models::Registry;

use std::panic::Location;
use std::path::Path;

use log::{debug, info, warn};

pub const REGISTRY_FILE_NAME: &str = "registry.json";

pub const ENV_API_BASE_URL: &str = "MOJS_API_BASE_URL";
pub const ENV_CSRF_TOKEN: &str = "MOJS_CSRF_TOKEN";
pub const ENV_CURRENT_LOCALE: &str = "MOJS_CURRENT_LOCALE";

/// Load the registry from a JSON file.
///
/// A missing file is not an error: the page simply did not publish a
/// registry, so every field takes its default.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read, is not
/// valid registry JSON, or holds invalid values.
pub fn load_registry(path: &Path) -> Result<Registry, ConfigError> {
    if !path.exists() {
        info!("Registry file not found at {}, using defaults", path.display());
        return Ok(Registry::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        warn!("Failed to read registry file: {}", e);
        ConfigError::ReadError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    let registry: Registry = serde_json::from_str(&contents).map_err(|e| {
        warn!("Failed to parse registry JSON: {}", e);
        ConfigError::ParseError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    registry.validate()?;

    debug!("Registry loaded from {}: {:?}", path.display(), registry);
    Ok(registry)
}

/// Build the registry from `MOJS_*` environment variables.
///
/// A `.env` file in the working directory (or a parent) is loaded first when
/// present. Unset variables leave the matching field empty.
///
/// # Errors
///
/// Returns [`ConfigError::EnvError`] if a `.env` file exists but is malformed,
/// or [`ConfigError::ValidationError`] for invalid values.
pub fn registry_from_env() -> Result<Registry, ConfigError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(ConfigError::EnvError {
                location: ErrorLocation::from(Location::caller()),
                reason: e.to_string(),
            });
        }
    }

    registry_from_lookup(|key| std::env::var(key).ok())
}

/// Build the registry from an arbitrary variable lookup.
pub fn registry_from_lookup<F>(lookup: F) -> Result<Registry, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Registry::builder();

    if let Some(url) = lookup(ENV_API_BASE_URL) {
        builder = builder.with_api_base_url(url);
    }
    if let Some(token) = lookup(ENV_CSRF_TOKEN) {
        builder = builder.with_csrf_token(token);
    }
    if let Some(locale) = lookup(ENV_CURRENT_LOCALE) {
        builder = builder.with_current_locale(locale);
    }

    let registry = builder.build()?;
    debug!("Registry loaded from environment: {:?}", registry);
    Ok(registry)
}
