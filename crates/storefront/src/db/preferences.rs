//! Display preference persistence.

use foodie_core::ColorScheme;

use super::{Storage, StorageError, keys};

/// Repository for the dark-mode slot.
pub struct PreferencesRepository<'a, S: Storage + ?Sized> {
    storage: &'a S,
}

impl<'a, S: Storage + ?Sized> PreferencesRepository<'a, S> {
    /// Create a new preferences repository.
    #[must_use]
    pub const fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Stored colour scheme; light when unset or unreadable.
    #[must_use]
    pub fn color_scheme(&self) -> ColorScheme {
        match self.storage.get_item(keys::DARK_MODE) {
            Ok(Some(flag)) => ColorScheme::from_flag(&flag),
            Ok(None) => ColorScheme::Light,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read dark-mode flag");
                ColorScheme::Light
            }
        }
    }

    /// Store the colour scheme.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be written.
    pub fn set_color_scheme(&self, scheme: ColorScheme) -> Result<(), StorageError> {
        self.storage.set_item(keys::DARK_MODE, scheme.as_flag())
    }
}
