//! Account commands.

use foodie_storefront::models::{SignInForm, SignUpForm};
use secrecy::SecretString;

use super::{FilePage, out};

/// Create an account and sign in.
pub fn sign_up(
    page: &mut FilePage,
    name: &str,
    email: &str,
    phone: &str,
    password: String,
    confirm: String,
) {
    let form = SignUpForm {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
        password: SecretString::from(password),
        confirm_password: SecretString::from(confirm),
    };
    page.open_auth();
    page.show_sign_up_form();
    page.sign_up(&form);
}

/// Sign in to an existing account.
pub fn sign_in(page: &mut FilePage, email: &str, password: String) {
    let form = SignInForm {
        email: email.to_owned(),
        password: SecretString::from(password),
    };
    page.open_auth();
    page.sign_in(&form);
}

/// Print the signed-in user.
pub fn whoami(page: &FilePage) {
    match page.current_user() {
        Some(user) => out(format_args!("{} <{}>", user.name, user.email)),
        None => out("Signed out"),
    }
}
