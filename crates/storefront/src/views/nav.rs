//! Navigation bar sign-in button.

use askama::Template;

/// Sign-in button, or the signed-in user's first name.
#[derive(Template)]
#[template(path = "partials/nav_user.html")]
pub struct NavUserTemplate {
    pub display_name: Option<String>,
}
