//! Foodie Core - Shared types library.
//!
//! This crate provides the domain types used across the Foodie components:
//! - `storefront` - Cart, auth and widget state for the ordering page
//! - `cli` - Command-line driver over file-backed storage
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no
//! storage access, no rendering, no logging. This keeps it lightweight and
//! allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Cart state machine, price labels, users, emails and colour scheme

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
