//! Sign-in and sign-up form submissions.

use secrecy::SecretString;

/// Fields of the sign-in form.
#[derive(Debug)]
pub struct SignInForm {
    /// Value of the email input.
    pub email: String,
    /// Value of the password input.
    pub password: SecretString,
}

impl SignInForm {
    /// Build a form submission from raw field values.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Fields of the sign-up form.
#[derive(Debug)]
pub struct SignUpForm {
    /// Value of the text (name) input.
    pub name: String,
    /// Value of the email input.
    pub email: String,
    /// Value of the tel input.
    pub phone: String,
    /// Value of the first password input.
    pub password: SecretString,
    /// Value of the second password input.
    pub confirm_password: SecretString,
}

impl SignUpForm {
    /// Build a form submission from raw field values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            password: SecretString::from(password.into()),
            confirm_password: SecretString::from(confirm_password.into()),
        }
    }
}
