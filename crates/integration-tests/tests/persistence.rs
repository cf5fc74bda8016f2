//! Storage formats and state surviving page reloads.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use foodie_core::ColorScheme;
use foodie_integration_tests::page_with;
use foodie_storefront::db::{CartRepository, FileStorage, MemoryStorage, Storage, keys};
use serde_json::{Value, json};

#[test]
fn test_cart_slots_written_on_every_mutation() {
    let storage = MemoryStorage::new();
    let mut page = page_with(&storage);
    page.click_add_to_cart(0);
    page.click_add_to_cart(0);

    let items: Value =
        serde_json::from_str(&storage.get_item(keys::CART).unwrap().unwrap()).unwrap();
    assert_eq!(
        items,
        json!([{
            "name": "Chicken Biryani",
            "price": "PKR 250",
            "image": "biryani.jpg",
            "quantity": 2
        }])
    );
    assert_eq!(
        storage.get_item(keys::CART_COUNT).unwrap().as_deref(),
        Some("2")
    );

    page.checkout();
    assert_eq!(storage.get_item(keys::CART).unwrap().as_deref(), Some("[]"));
    assert_eq!(
        storage.get_item(keys::CART_COUNT).unwrap().as_deref(),
        Some("0")
    );
}

#[test]
fn test_cart_survives_reload() {
    let storage = MemoryStorage::new();
    {
        let mut page = page_with(&storage);
        page.click_add_to_cart(1);
        page.click_add_to_cart(2);
        page.click_add_to_cart(2);
    }

    let page = page_with(&storage);
    assert_eq!(page.cart().len(), 2);
    assert_eq!(page.cart().total_unit_count(), 3);
    assert_eq!(page.total(), "PKR 2,500");
}

#[test]
fn test_malformed_cart_loads_empty() {
    let storage = MemoryStorage::with_items([
        (keys::CART, "not json"),
        (keys::CART_COUNT, "9"),
    ]);
    let page = page_with(&storage);
    assert!(page.cart().is_empty());
    assert_eq!(page.cart().total_unit_count(), 0);
}

#[test]
fn test_stored_count_mismatch_uses_items() {
    let storage = MemoryStorage::with_items([
        (
            keys::CART,
            r#"[{"name":"Seekh Kebab","price":"PKR 100","image":"","quantity":4}]"#,
        ),
        (keys::CART_COUNT, "1"),
    ]);
    let cart = CartRepository::new(&storage).load();
    assert_eq!(cart.total_unit_count(), 4);
}

#[test]
fn test_malformed_session_is_signed_out() {
    let storage = MemoryStorage::with_items([(keys::CURRENT_USER, "{oops")]);
    let page = page_with(&storage);
    assert!(page.current_user().is_none());
}

#[test]
fn test_user_record_format() {
    let storage = MemoryStorage::new();
    page_with(&storage).sign_up(&foodie_integration_tests::sign_up_form(
        "ayesha@example.pk",
        "haleem1",
    ));

    let users: Value =
        serde_json::from_str(&storage.get_item(keys::USERS).unwrap().unwrap()).unwrap();
    let user = &users[0];
    assert_eq!(user["name"], "Ayesha Khan");
    assert_eq!(user["email"], "ayesha@example.pk");
    assert_eq!(user["phone"], "0321-5555555");
    assert_eq!(user["password"], "haleem1");
    assert!(user["createdAt"].is_string());
}

#[test]
fn test_dark_mode_restored_on_load() {
    let storage = MemoryStorage::new();
    page_with(&storage).set_dark_mode(true);
    assert_eq!(
        storage.get_item(keys::DARK_MODE).unwrap().as_deref(),
        Some("true")
    );
    assert_eq!(page_with(&storage).color_scheme(), ColorScheme::Dark);

    page_with(&storage).set_dark_mode(false);
    assert_eq!(page_with(&storage).color_scheme(), ColorScheme::Light);
}

#[test]
fn test_file_storage_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("foodie.json");

    {
        let mut page = page_with(FileStorage::open(&path).unwrap());
        page.click_add_to_cart(0);
        page.set_dark_mode(true);
    }

    let page = page_with(FileStorage::open(&path).unwrap());
    assert_eq!(page.cart().total_unit_count(), 1);
    assert_eq!(page.color_scheme(), ColorScheme::Dark);
}
