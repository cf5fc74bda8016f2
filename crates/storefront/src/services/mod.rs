//! Business logic services for the ordering page.
//!
//! # Services
//!
//! - `auth` - Email + password sign-up and sign-in
//! - `cart` - Cart store (mutate, persist, describe what changed)
//! - `notify` - Single-slot toast notifications

pub mod auth;
pub mod cart;
pub mod notify;

pub use auth::{AuthError, AuthService};
pub use cart::{CartEvent, CartService};
pub use notify::{Notifier, Toast, ToastPhase};
