//! Key-value storage for page state.
//!
//! # Slots
//!
//! Page state lives in a handful of string-keyed slots, each overwritten
//! wholesale on every write (see [`keys`]):
//!
//! - `foodieCart` - JSON array of cart line items
//! - `foodieCartCount` - running unit count as integer text
//! - `darkMode` - `"true"` / `"false"`
//! - `foodieUsers` - JSON array of registered users
//! - `currentUser` - JSON of the signed-in user, absent when signed out
//!
//! # Backends
//!
//! - [`MemoryStorage`] - ephemeral, for tests and throwaway sessions
//! - [`FileStorage`] - a JSON object file, durable across runs
//!
//! Repositories ([`CartRepository`], [`UserRepository`],
//! [`PreferencesRepository`]) borrow a backend and translate between slots
//! and domain types.

mod cart;
mod file;
mod memory;
mod preferences;
mod users;

use thiserror::Error;

pub use cart::CartRepository;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use preferences::PreferencesRepository;
pub use users::UserRepository;

/// Storage slot names.
pub mod keys {
    /// Serialized cart line items.
    pub const CART: &str = "foodieCart";

    /// Running cart unit count, as integer text.
    pub const CART_COUNT: &str = "foodieCartCount";

    /// Dark-mode flag.
    pub const DARK_MODE: &str = "darkMode";

    /// Registered user directory.
    pub const USERS: &str = "foodieUsers";

    /// The signed-in user.
    pub const CURRENT_USER: &str = "currentUser";
}

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backing file could not be read or written.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// A slot or the backing file holds malformed JSON.
    #[error("malformed stored data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A string-keyed, string-valued persistent store.
///
/// Methods take `&self`: a storage backend is a shared handle, like the
/// browser's local storage, and repositories only ever borrow it.
pub trait Storage {
    /// Read a slot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a slot. Deleting a missing slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
