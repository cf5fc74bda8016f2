//! Unified error handling.
//!
//! Provides a unified `AppError` type for the page host. Page operations
//! themselves never fail outward: validation problems become alerts and
//! storage problems are logged. `AppError` covers what remains, namely
//! setup (configuration, opening storage) and rendering.

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
