//! HTML fragments rendered from page state.
//!
//! Views are derived only: each is built from the stores on demand and
//! never holds state of its own. Controls in the rendered markup carry
//! `data-action` / `data-index` attributes that the page host maps back to
//! store operations (see [`CartAction`]).

pub mod cart;
pub mod nav;
pub mod toast;

pub use cart::{
    CartAction, CartCountTemplate, CartItemView, CartItemsTemplate, CartModalTemplate, CartView,
};
pub use nav::NavUserTemplate;
pub use toast::ToastTemplate;
