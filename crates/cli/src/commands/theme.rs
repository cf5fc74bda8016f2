//! Dark mode commands.

use super::{FilePage, out};

pub fn set(page: &mut FilePage, dark: bool) {
    page.set_dark_mode(dark);
}

pub fn show(page: &FilePage) {
    out(page.color_scheme());
}
