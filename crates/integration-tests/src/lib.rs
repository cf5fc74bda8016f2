//! Integration tests for the Foodie ordering page.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p foodie-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart store, view and checkout through the page
//! - `auth_flow` - Sign-up, sign-in and the navigation label
//! - `persistence` - Storage formats and reloads across page loads
//!
//! Shared fixtures live here so each test file builds pages the same way.

#![cfg_attr(not(test), forbid(unsafe_code))]

use foodie_storefront::db::{MemoryStorage, Storage};
use foodie_storefront::models::{ProductCard, SignUpForm};
use foodie_storefront::{Page, PageLayout, StorefrontConfig};

/// The menu used across tests.
#[must_use]
pub fn menu() -> Vec<ProductCard> {
    vec![
        ProductCard::new("Chicken Biryani", "PKR 250", "biryani.jpg"),
        ProductCard::new("Seekh Kebab", "PKR 100", "kebab.jpg"),
        ProductCard::new("Beef Nihari", "PKR 1200", "nihari.jpg"),
    ]
}

/// A fully featured page over `storage`.
#[must_use]
pub fn page_with<S: Storage>(storage: S) -> Page<S> {
    Page::load(
        StorefrontConfig::default(),
        storage,
        PageLayout::full(menu(), 3),
    )
}

/// A fully featured page over empty in-memory storage.
#[must_use]
pub fn page() -> Page<MemoryStorage> {
    page_with(MemoryStorage::new())
}

/// A complete, valid sign-up form.
#[must_use]
pub fn sign_up_form(email: &str, password: &str) -> SignUpForm {
    SignUpForm::new("Ayesha Khan", email, "0321-5555555", password, password)
}
