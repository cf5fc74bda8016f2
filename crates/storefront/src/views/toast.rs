//! Toast notification fragment.

use askama::Template;

use crate::services::{Toast, ToastPhase};

/// The live toast.
#[derive(Template)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate<'a> {
    pub message: &'a str,
    pub visible: bool,
}

impl<'a> From<&'a Toast> for ToastTemplate<'a> {
    fn from(toast: &'a Toast) -> Self {
        Self {
            message: &toast.message,
            visible: toast.phase == ToastPhase::Visible,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let html = ToastTemplate {
            message: "Dark Mode Enabled 🌙",
            visible: true,
        }
        .render()
        .unwrap();
        assert_eq!(
            html.trim(),
            "<div class=\"cart-notification show\">Dark Mode Enabled 🌙</div>"
        );
    }
}
