//! Fragment rendering commands.

use std::time::Instant;

use super::{CliError, FilePage, out};

/// Open the cart modal and print it.
///
/// # Errors
///
/// Returns `CliError::App` if the template fails to render.
pub fn cart(page: &mut FilePage) -> Result<(), CliError> {
    page.open_cart();
    if let Some(html) = page.render_cart_modal()? {
        out(html);
    }
    Ok(())
}

/// Print the cart badge.
///
/// # Errors
///
/// Returns `CliError::App` if the template fails to render.
pub fn badge(page: &FilePage) -> Result<(), CliError> {
    out(page.render_badge(Instant::now())?);
    Ok(())
}

/// Print the navigation sign-in button.
///
/// # Errors
///
/// Returns `CliError::App` if the template fails to render.
pub fn nav(page: &FilePage) -> Result<(), CliError> {
    out(page.render_nav_user()?);
    Ok(())
}
