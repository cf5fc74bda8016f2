//! Mobile navigation drawer.

/// Side of the square hotspot in the drawer's top-right corner that acts
/// as its close button.
pub const CLOSE_HOTSPOT_PX: f64 = 55.0;

/// Bounding box of the drawer, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Kind of link clicked inside the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLink {
    /// The mobile sign-in link; opens the auth modal instead.
    SignIn,
    /// A link inside the dark-mode row.
    DarkMode,
    /// Any other navigation link.
    Page,
}

/// The mobile drawer and its overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// The hamburger button.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A click on the dimmed overlay behind the drawer.
    pub fn overlay_click(&mut self) {
        self.close();
    }

    /// A click anywhere on the drawer at `(x, y)`.
    ///
    /// Closes the drawer when the click lands in the top-right hotspot.
    pub fn drawer_click(&mut self, x: f64, y: f64, drawer: Rect) {
        if x > drawer.right - CLOSE_HOTSPOT_PX && y < drawer.top + CLOSE_HOTSPOT_PX {
            self.close();
        }
    }

    /// A click on a link inside the drawer.
    pub fn link_click(&mut self, link: MenuLink) {
        if link == MenuLink::Page {
            self.close();
        }
    }
}
