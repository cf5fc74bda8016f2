//! User directory and session persistence.

use foodie_core::{User, UserDirectory};

use super::{Storage, StorageError, keys};

/// Repository for the user directory and current-user slots.
pub struct UserRepository<'a, S: Storage + ?Sized> {
    storage: &'a S,
}

impl<'a, S: Storage + ?Sized> UserRepository<'a, S> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Load the registered users.
    ///
    /// An absent slot is an empty directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Malformed` if the slot holds invalid JSON.
    pub fn directory(&self) -> Result<UserDirectory, StorageError> {
        match self.storage.get_item(keys::USERS)? {
            Some(text) => Ok(serde_json::from_str(&text)?),
            None => Ok(UserDirectory::new()),
        }
    }

    /// Overwrite the registered users.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be written.
    pub fn save_directory(&self, directory: &UserDirectory) -> Result<(), StorageError> {
        let text = serde_json::to_string(directory)?;
        self.storage.set_item(keys::USERS, &text)
    }

    /// Load the signed-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Malformed` if the slot holds invalid JSON.
    pub fn current_user(&self) -> Result<Option<User>, StorageError> {
        match self.storage.get_item(keys::CURRENT_USER)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Record `user` as the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be written.
    pub fn set_current_user(&self, user: &User) -> Result<(), StorageError> {
        let text = serde_json::to_string(user)?;
        self.storage.set_item(keys::CURRENT_USER, &text)
    }

    /// Forget the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be written.
    pub fn clear_current_user(&self) -> Result<(), StorageError> {
        self.storage.remove_item(keys::CURRENT_USER)
    }
}
