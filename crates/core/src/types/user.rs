//! Registered users and the user directory.
//!
//! # Security
//!
//! Passwords are stored and compared as plain text. This mirrors how the
//! ordering page has always kept accounts in client-readable storage and is
//! not suitable for any real deployment, which would need salted password
//! hashes instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::email::Email;

/// A registered user.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Full name as entered at sign-up.
    pub name: String,
    /// Email address; unique within a [`UserDirectory`].
    pub email: Email,
    /// Phone number as entered.
    pub phone: String,
    /// Plain-text password.
    pub password: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Name shown in the navigation bar: the first word of the full name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        first_word(&self.name)
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// First space-separated word of a name (the whole name if it has none).
#[must_use]
pub fn first_word(name: &str) -> &str {
    name.split(' ').next().unwrap_or(name)
}

/// Errors from directory mutations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A user with this email is already registered.
    #[error("email already registered: {0}")]
    DuplicateEmail(Email),
}

/// All registered users, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDirectory(Vec<User>);

impl UserDirectory {
    /// Create an empty directory.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Registered users.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.0
    }

    /// Number of registered users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no users are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// User registered under exactly this email.
    #[must_use]
    pub fn find_by_email(&self, email: &Email) -> Option<&User> {
        self.0.iter().find(|u| &u.email == email)
    }

    /// User whose email and password both match exactly.
    #[must_use]
    pub fn find_by_credentials(&self, email: &Email, password: &str) -> Option<&User> {
        self.0
            .iter()
            .find(|u| &u.email == email && u.password == password)
    }

    /// Register a user.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::DuplicateEmail`] if the email is taken.
    pub fn insert(&mut self, user: User) -> Result<(), DirectoryError> {
        if self.find_by_email(&user.email).is_some() {
            return Err(DirectoryError::DuplicateEmail(user.email));
        }
        self.0.push(user);
        Ok(())
    }
}
