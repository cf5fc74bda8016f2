//! Cart store behaviour driven through the page.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use foodie_integration_tests::page;
use foodie_storefront::views::CartAction;

#[test]
fn test_repeated_adds_count_units_and_distinct_names() {
    let mut page = page();
    for product in [0, 1, 0, 2, 0] {
        page.click_add_to_cart(product);
    }

    let cart = page.cart();
    assert_eq!(cart.total_unit_count(), 5);
    assert_eq!(cart.len(), 3);
    let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Chicken Biryani", "Seekh Kebab", "Beef Nihari"]);
    assert_eq!(cart.items()[0].quantity, 3);
}

#[test]
fn test_add_same_item_twice_merges() {
    let mut page = page();
    page.add_to_cart("Seekh Kebab", "PKR 100", "kebab.jpg");
    page.add_to_cart("Seekh Kebab", "PKR 100", "kebab.jpg");

    assert_eq!(page.cart().len(), 1);
    assert_eq!(page.cart().items()[0].quantity, 2);
    assert_eq!(page.toast().unwrap().message, "Seekh Kebab added to cart!");
}

#[test]
fn test_remove_shrinks_list_and_count() {
    let mut page = page();
    page.click_add_to_cart(0);
    page.click_add_to_cart(0);
    page.click_add_to_cart(1);

    page.remove_from_cart(0);
    assert_eq!(page.cart().len(), 1);
    assert_eq!(page.cart().total_unit_count(), 1);
    assert_eq!(
        page.toast().unwrap().message,
        "Chicken Biryani removed from cart!"
    );
}

#[test]
fn test_decrement_at_one_equals_remove() {
    let mut decremented = page();
    let mut removed = page();
    for page in [&mut decremented, &mut removed] {
        page.click_add_to_cart(0);
        page.click_add_to_cart(1);
    }

    decremented.update_quantity(1, -1);
    removed.remove_from_cart(1);

    assert_eq!(decremented.cart(), removed.cart());
    assert_eq!(
        decremented.toast().map(|t| t.message.clone()),
        removed.toast().map(|t| t.message.clone())
    );
}

#[test]
fn test_out_of_range_index_is_ignored() {
    let mut page = page();
    page.click_add_to_cart(0);
    page.update_quantity(7, 1);
    page.remove_from_cart(7);
    assert_eq!(page.cart().total_unit_count(), 1);
    assert!(page.take_alerts().is_empty());
}

#[test]
fn test_total_formats_with_grouping() {
    let mut page = page();
    page.add_to_cart("Chicken Biryani", "PKR 250", "");
    page.add_to_cart("Chicken Biryani", "PKR 250", "");
    page.add_to_cart("Seekh Kebab", "PKR 100", "");
    assert_eq!(page.total(), "PKR 600");

    page.add_to_cart("Beef Nihari", "PKR 1200", "");
    assert_eq!(page.total(), "PKR 1,800");
}

#[test]
fn test_grouped_label_counts_first_digit_run() {
    let mut page = page();
    page.add_to_cart("Beef Nihari", "PKR 1,200", "");
    page.add_to_cart("Beef Nihari", "PKR 1,200", "");

    assert_eq!(page.cart().items()[0].price.as_str(), "PKR 1,200");
    assert_eq!(page.total(), "PKR 2");
}

#[test]
fn test_empty_checkout_warns_without_change() {
    let mut page = page();
    page.checkout();

    assert_eq!(page.take_alerts(), ["Your cart is empty!"]);
    assert!(page.cart().is_empty());
    assert!(page.toast().is_none());
}

#[test]
fn test_checkout_summarises_and_clears() {
    let mut page = page();
    page.click_add_to_cart(0);
    page.click_add_to_cart(0);
    page.click_add_to_cart(1);
    page.open_cart();

    page.dispatch(CartAction::Checkout);

    assert_eq!(
        page.take_alerts(),
        ["Order Placed Successfully! 🎉\n\nItems: 2\nTotal: PKR 600\n\nThank you for your order!"]
    );
    assert!(page.cart().is_empty());
    assert!(!page.cart_modal().is_open());
    assert_eq!(
        page.toast().unwrap().message,
        "Order placed successfully! Cart cleared."
    );
}

#[test]
fn test_modal_reflects_mutations() {
    let mut page = page();
    page.click_add_to_cart(2);
    page.open_cart();

    let html = page.render_cart_modal().unwrap().unwrap();
    assert!(html.contains("Beef Nihari"));
    assert!(html.contains("PKR 1200"));

    page.dispatch(CartAction::Increment(0));
    let html = page.render_cart_modal().unwrap().unwrap();
    assert!(html.contains("PKR 2,400"));

    page.dispatch(CartAction::Remove(0));
    let html = page.render_cart_modal().unwrap().unwrap();
    assert!(html.contains("Your cart is empty"));
}

#[test]
fn test_controls_parse_from_markup() {
    let mut page = page();
    page.click_add_to_cart(1);

    let action = CartAction::from_control("increment", Some(0)).unwrap();
    page.dispatch(action);
    assert_eq!(page.cart().total_unit_count(), 2);

    assert!(CartAction::from_control("increment", None).is_none());
}

#[test]
fn test_name_addressing() {
    let mut page = page();
    page.click_add_to_cart(0);
    page.click_add_to_cart(1);

    page.update_quantity_by_name("Seekh Kebab", 2);
    assert_eq!(page.cart().items()[1].quantity, 3);

    page.remove_by_name("Chicken Biryani");
    assert_eq!(page.cart().len(), 1);
    assert_eq!(page.cart().items()[0].name, "Seekh Kebab");
}
