//! Authentication error types.

use thiserror::Error;

use crate::db::StorageError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required form field was left empty.
    #[error("required field missing")]
    MissingFields,

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Password shorter than the configured minimum.
    #[error("password must be at least {min} characters")]
    WeakPassword {
        /// Minimum accepted length.
        min: usize,
    },

    /// Email already registered.
    #[error("user already exists")]
    UserAlreadyExists,

    /// No user matches the email and password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The user directory or session could not be written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Alert text shown to the user for this error.
    #[must_use]
    pub fn alert_message(&self) -> String {
        match self {
            Self::MissingFields => "Please fill in all fields!".to_string(),
            Self::PasswordMismatch => "Passwords do not match!".to_string(),
            Self::WeakPassword { min } => format!("Password must be at least {min} characters!"),
            Self::UserAlreadyExists => "Email already registered!".to_string(),
            Self::InvalidCredentials => "Invalid email or password!".to_string(),
            Self::Storage(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}
