//! Authentication service.
//!
//! Provides email + password sign-up and sign-in against the user
//! directory kept in page storage.
//!
//! # Security
//!
//! Passwords are stored and compared in plain text, in storage the page's
//! own scripts can read. This keeps parity with existing stored accounts;
//! it is not authentication in any meaningful sense and any real deployment
//! must replace it with salted password hashes verified server-side.

mod error;

pub use error::AuthError;

use chrono::Utc;
use secrecy::ExposeSecret;
use tracing::instrument;

use foodie_core::{Email, User, UserDirectory};

use crate::db::{Storage, StorageError, UserRepository};
use crate::models::{SignInForm, SignUpForm};

/// Authentication service.
pub struct AuthService<'a, S: Storage + ?Sized> {
    users: UserRepository<'a, S>,
    min_password_length: usize,
}

impl<'a, S: Storage + ?Sized> AuthService<'a, S> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(storage: &'a S, min_password_length: usize) -> Self {
        Self {
            users: UserRepository::new(storage),
            min_password_length,
        }
    }

    /// Register a new user and sign them in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if any field is empty.
    /// Returns `AuthError::PasswordMismatch` if the passwords differ.
    /// Returns `AuthError::WeakPassword` if the password is too short.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    /// Returns `AuthError::Storage` if the directory cannot be written.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub fn sign_up(&self, form: &SignUpForm) -> Result<User, AuthError> {
        let password = form.password.expose_secret();
        let confirm = form.confirm_password.expose_secret();

        if [
            form.name.as_str(),
            form.email.as_str(),
            form.phone.as_str(),
            password,
            confirm,
        ]
        .iter()
        .any(|field| field.is_empty())
        {
            return Err(AuthError::MissingFields);
        }

        if password != confirm {
            return Err(AuthError::PasswordMismatch);
        }

        validate_password(password, self.min_password_length)?;

        let email = Email::parse(&form.email).map_err(|_| AuthError::MissingFields)?;
        let previous = self.directory()?;
        let mut directory = previous.clone();

        let user = User {
            name: form.name.clone(),
            email,
            phone: form.phone.clone(),
            password: password.to_owned(),
            created_at: Utc::now(),
        };

        directory
            .insert(user.clone())
            .map_err(|_| AuthError::UserAlreadyExists)?;

        self.users.save_directory(&directory)?;
        if let Err(e) = self.users.set_current_user(&user) {
            // Unregister so a failed sign-up leaves no account behind.
            if let Err(rollback) = self.users.save_directory(&previous) {
                tracing::error!(error = %rollback, "Failed to roll back user directory");
            }
            return Err(e.into());
        }

        tracing::info!(users = directory.len(), "User registered");
        Ok(user)
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if either field is empty.
    /// Returns `AuthError::InvalidCredentials` if no user matches exactly.
    /// Returns `AuthError::Storage` if the session cannot be written.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub fn sign_in(&self, form: &SignInForm) -> Result<User, AuthError> {
        let password = form.password.expose_secret();
        if form.email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let email = Email::parse(&form.email).map_err(|_| AuthError::MissingFields)?;
        let directory = self.directory()?;
        let user = directory
            .find_by_credentials(&email, password)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;

        self.users.set_current_user(&user)?;

        tracing::info!("User signed in");
        Ok(user)
    }

    /// The signed-in user from a previous page load.
    ///
    /// Unreadable session data is logged and treated as signed out.
    #[must_use]
    pub fn restore_session(&self) -> Option<User> {
        match self.users.current_user() {
            Ok(user) => user,
            Err(e) => {
                tracing::error!(error = %e, "Error loading user");
                None
            }
        }
    }

    /// Load the directory, treating malformed stored data as empty.
    fn directory(&self) -> Result<UserDirectory, AuthError> {
        match self.users.directory() {
            Ok(directory) => Ok(directory),
            Err(StorageError::Malformed(e)) => {
                tracing::warn!(error = %e, "Stored user directory is malformed, treating as empty");
                Ok(UserDirectory::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Validate password length in characters.
fn validate_password(password: &str, min: usize) -> Result<(), AuthError> {
    if password.chars().count() < min {
        return Err(AuthError::WeakPassword { min });
    }
    Ok(())
}
