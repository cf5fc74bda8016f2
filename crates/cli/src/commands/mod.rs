//! CLI command implementations.
//!
//! Each command drives one interaction on a [`Page`] backed by
//! [`FileStorage`] and prints what the page shows.

pub mod auth;
pub mod cart;
pub mod render;
pub mod theme;

use std::fmt::Display;
use std::path::PathBuf;

use foodie_storefront::db::FileStorage;
use foodie_storefront::{AppError, Page, PageLayout, StorefrontConfig};
use thiserror::Error;

/// A page over the CLI's storage file.
pub type FilePage = Page<FileStorage>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading, storing or rendering failed.
    #[error(transparent)]
    App(#[from] AppError),

    /// A cart line index argument was not a number.
    #[error("Invalid line index: {0}")]
    InvalidIndex(String),
}

/// Load configuration and open the page over file storage.
///
/// # Errors
///
/// Returns `CliError::App` if configuration is invalid or the storage file
/// cannot be read.
pub fn open_page(storage_path: Option<PathBuf>) -> Result<FilePage, CliError> {
    let mut config = StorefrontConfig::from_env().map_err(AppError::from)?;
    if let Some(path) = storage_path {
        config.storage_path = path;
    }

    tracing::debug!(path = %config.storage_path.display(), "Opening storage");
    let storage = FileStorage::open(&config.storage_path).map_err(AppError::from)?;

    Ok(Page::load(config, storage, PageLayout::default()))
}

/// Print alerts raised by the command, then the live toast.
pub fn report(page: &mut FilePage) {
    for alert in page.take_alerts() {
        out(format_args!("[alert] {alert}"));
    }
    if let Some(toast) = page.toast() {
        out(format_args!("[toast] {}", toast.message));
    }
}

#[allow(clippy::print_stdout)]
fn out(line: impl Display) {
    println!("{line}");
}
