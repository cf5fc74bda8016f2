//! Interactive page widgets.
//!
//! Presentation-only state: none of these touch the cart or the user
//! directory. A widget whose markup is absent from the page is simply not
//! constructed.

pub mod carousel;
pub mod effects;
pub mod menu;
pub mod modal;

pub use carousel::ReviewSlider;
pub use effects::{AddButton, Flash};
pub use menu::{MenuLink, MobileMenu, Rect};
pub use modal::{AuthForm, AuthModal, Modal};
