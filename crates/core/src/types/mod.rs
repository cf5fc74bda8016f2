//! Core types for the Foodie ordering page.
//!
//! This module provides type-safe wrappers for the page's domain concepts.

pub mod cart;
pub mod email;
pub mod price;
pub mod theme;
pub mod user;

pub use cart::{Added, Cart, CartItem, QuantityUpdate};
pub use email::{Email, EmailError};
pub use price::{CurrencyCode, Price, PriceLabel};
pub use theme::ColorScheme;
pub use user::{DirectoryError, User, UserDirectory, first_word};
