//! Foodie storefront library.
//!
//! The client-side behaviour of the restaurant ordering page: the cart
//! store and its modal view, toast notifications, email + password
//! accounts, and the preferences and widgets around them. Everything is
//! driven through [`page::Page`], which owns one page's state and storage.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod page;
pub mod services;
pub mod views;
pub mod widgets;

pub use config::StorefrontConfig;
pub use error::{AppError, Result};
pub use page::{Page, PageLayout};
