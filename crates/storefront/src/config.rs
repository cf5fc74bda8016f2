//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FOODIE_STORAGE_PATH` - Storage file for the CLI (default: foodie-storage.json)
//! - `FOODIE_CURRENCY` - Currency label for totals (default: PKR)
//! - `FOODIE_PLACEHOLDER_IMAGE` - Fallback image for cart rows
//!   (default: <https://via.placeholder.com/80>)
//! - `FOODIE_TOAST_MS` - How long a toast stays visible (default: 2000)
//! - `FOODIE_MIN_PASSWORD_LENGTH` - Minimum sign-up password length (default: 6)

use std::path::PathBuf;
use std::time::Duration;

use foodie_core::CurrencyCode;
use thiserror::Error;

/// Default storage file.
pub const DEFAULT_STORAGE_PATH: &str = "foodie-storage.json";

/// Default fallback image for cart rows whose image fails to load.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/80";

/// Default toast visibility.
pub const DEFAULT_TOAST_MS: u64 = 2000;

/// Default minimum password length at sign-up.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Path of the file-backed storage
    pub storage_path: PathBuf,
    /// Currency that totals are labelled with
    pub currency: CurrencyCode,
    /// Image shown when a cart row's image fails to load
    pub placeholder_image: String,
    /// Timing of transient visual effects
    pub timings: Timings,
    /// Minimum password length accepted at sign-up
    pub min_password_length: usize,
}

/// Durations of transient visual effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// How long a toast stays fully visible
    pub toast: Duration,
    /// Fade-out after a toast is hidden, before it is removed
    pub toast_fade: Duration,
    /// How long an add-to-cart button shows "Added!"
    pub button_flash: Duration,
    /// How long the cart badge bounces after an update
    pub badge_bounce: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            toast: Duration::from_millis(DEFAULT_TOAST_MS),
            toast_fade: Duration::from_millis(300),
            button_flash: Duration::from_millis(1000),
            badge_bounce: Duration::from_millis(300),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            currency: CurrencyCode::PKR,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            timings: Timings::default(),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_path = PathBuf::from(get_env_or_default(
            "FOODIE_STORAGE_PATH",
            DEFAULT_STORAGE_PATH,
        ));
        let currency = get_env_or_default("FOODIE_CURRENCY", "PKR")
            .parse::<CurrencyCode>()
            .map_err(|e| ConfigError::InvalidEnvVar("FOODIE_CURRENCY".to_string(), e))?;
        let placeholder_image =
            get_env_or_default("FOODIE_PLACEHOLDER_IMAGE", DEFAULT_PLACEHOLDER_IMAGE);
        let toast_ms = parse_env("FOODIE_TOAST_MS", DEFAULT_TOAST_MS)?;
        let min_password_length =
            parse_env("FOODIE_MIN_PASSWORD_LENGTH", DEFAULT_MIN_PASSWORD_LENGTH)?;

        Ok(Self {
            storage_path,
            currency,
            placeholder_image,
            timings: Timings {
                toast: Duration::from_millis(toast_ms),
                ..Timings::default()
            },
            min_password_length,
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an optional environment variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    std::env::var(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}
