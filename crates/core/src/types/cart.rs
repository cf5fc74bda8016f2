//! Cart line items and the cart state machine.
//!
//! The cart is an insertion-ordered list of line items keyed by product
//! name, plus a running unit count. Every mutation keeps two invariants:
//!
//! - `total_unit_count() == items().map(|i| i.quantity).sum()`
//! - every line item has `quantity >= 1`; an update that would drive a
//!   quantity to zero or below removes the line instead.
//!
//! Two products with the same displayed name share one line item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::price::{CurrencyCode, Price, PriceLabel};

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product name as displayed; the line item's identity.
    pub name: String,
    /// Price text as displayed on the product card.
    pub price: PriceLabel,
    /// Product image URL, empty when the card has none.
    #[serde(default)]
    pub image: String,
    /// Number of units, always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Line total: the label's amount times the quantity, zero if the label
    /// has no digits.
    #[must_use]
    pub fn line_amount(&self) -> Decimal {
        self.price
            .amount()
            .map_or(Decimal::ZERO, |amount| {
                amount.saturating_mul(Decimal::from(self.quantity))
            })
    }
}

/// Result of [`Cart::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Added {
    /// Position of the line item that received the unit.
    pub index: usize,
    /// Its quantity after the add.
    pub quantity: u32,
    /// Whether a new line item was appended.
    pub new_line: bool,
}

/// Result of [`Cart::update_quantity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// The line item's quantity changed and it is still in the cart.
    Changed {
        /// Position of the line item.
        index: usize,
        /// Quantity after the change.
        quantity: u32,
    },
    /// The change drove the quantity to zero or below, so the line was removed.
    Removed(CartItem),
}

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
    total_unit_count: u32,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            total_unit_count: 0,
        }
    }

    /// Build a cart from previously stored line items.
    ///
    /// Lines with a zero quantity are dropped and the unit count is derived
    /// from the remaining lines.
    #[must_use]
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let items: Vec<CartItem> = items.into_iter().filter(|i| i.quantity > 0).collect();
        let total_unit_count = items
            .iter()
            .fold(0_u32, |acc, i| acc.saturating_add(i.quantity));
        Self {
            items,
            total_unit_count,
        }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub const fn total_unit_count(&self) -> u32 {
        self.total_unit_count
    }

    /// Line item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CartItem> {
        self.items.get(index)
    }

    /// Position of the line item named `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.name == name)
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line with the same name, or appends a new
    /// line with quantity 1. The price and image of an existing line are
    /// left as first added.
    pub fn add(&mut self, name: &str, price: PriceLabel, image: &str) -> Added {
        self.total_unit_count = self.total_unit_count.saturating_add(1);

        if let Some(index) = self.position(name)
            && let Some(item) = self.items.get_mut(index)
        {
            item.quantity = item.quantity.saturating_add(1);
            return Added {
                index,
                quantity: item.quantity,
                new_line: false,
            };
        }

        self.items.push(CartItem {
            name: name.to_owned(),
            price,
            image: image.to_owned(),
            quantity: 1,
        });
        Added {
            index: self.items.len() - 1,
            quantity: 1,
            new_line: true,
        }
    }

    /// Change the quantity of the line at `index` by `delta`.
    ///
    /// Returns `None` (and changes nothing) if `index` is out of bounds.
    pub fn update_quantity(&mut self, index: usize, delta: i32) -> Option<QuantityUpdate> {
        let item = self.items.get_mut(index)?;
        let next = i64::from(item.quantity) + i64::from(delta);

        if next <= 0 {
            return self.remove(index).map(QuantityUpdate::Removed);
        }

        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        let old = item.quantity;
        item.quantity = quantity;
        self.total_unit_count = self
            .total_unit_count
            .saturating_sub(old)
            .saturating_add(quantity);

        Some(QuantityUpdate::Changed { index, quantity })
    }

    /// Change the quantity of the line named `name` by `delta`.
    pub fn update_quantity_by_name(&mut self, name: &str, delta: i32) -> Option<QuantityUpdate> {
        let index = self.position(name)?;
        self.update_quantity(index, delta)
    }

    /// Remove the line at `index`, returning it.
    ///
    /// Returns `None` (and changes nothing) if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<CartItem> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.total_unit_count = self.total_unit_count.saturating_sub(item.quantity);
        Some(item)
    }

    /// Remove the line named `name`, returning it.
    pub fn remove_by_name(&mut self, name: &str) -> Option<CartItem> {
        let index = self.position(name)?;
        self.remove(index)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_unit_count = 0;
    }

    /// Display total of the cart in `currency`.
    ///
    /// Lines whose price label has no digits contribute nothing.
    #[must_use]
    pub fn total(&self, currency: CurrencyCode) -> Price {
        let amount = self
            .items
            .iter()
            .fold(Decimal::ZERO, |acc, i| acc.saturating_add(i.line_amount()));
        Price::new(amount, currency)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn label(s: &str) -> PriceLabel {
        PriceLabel::new(s)
    }

    fn assert_count_invariant(cart: &Cart) {
        let sum: u32 = cart.items().iter().map(|i| i.quantity).sum();
        assert_eq!(cart.total_unit_count(), sum);
        assert!(cart.items().iter().all(|i| i.quantity >= 1));
    }

    #[test]
    fn test_add_same_name_twice_merges() {
        let mut cart = Cart::new();
        let first = cart.add("Zinger Burger", label("PKR 550"), "zinger.png");
        let second = cart.add("Zinger Burger", label("PKR 550"), "zinger.png");

        assert!(first.new_line);
        assert!(!second.new_line);
        assert_eq!(second.quantity, 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total_unit_count(), 2);
    }

    #[test]
    fn test_add_sequence_counts() {
        let mut cart = Cart::new();
        let names = ["Pizza", "Fries", "Pizza", "Shake", "Fries", "Pizza"];
        for name in names {
            cart.add(name, label("PKR 100"), "");
        }

        assert_eq!(cart.total_unit_count(), 6);
        assert_eq!(cart.len(), 3);
        let order: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(order, ["Pizza", "Fries", "Shake"]);
        assert_count_invariant(&cart);
    }

    #[test]
    fn test_add_keeps_first_price() {
        let mut cart = Cart::new();
        cart.add("Pizza", label("PKR 900"), "a.png");
        cart.add("Pizza", label("PKR 1"), "b.png");
        assert_eq!(cart.items()[0].price.as_str(), "PKR 900");
        assert_eq!(cart.items()[0].image, "a.png");
    }

    #[test]
    fn test_remove_shrinks_by_one() {
        let mut cart = Cart::new();
        cart.add("A", label("PKR 1"), "");
        cart.add("B", label("PKR 1"), "");
        cart.add("B", label("PKR 1"), "");
        cart.add("B", label("PKR 1"), "");

        let removed = cart.remove(1).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_unit_count(), 1);
        assert_count_invariant(&cart);
    }

    #[test]
    fn test_remove_out_of_bounds() {
        let mut cart = Cart::new();
        cart.add("A", label("PKR 1"), "");
        assert!(cart.remove(3).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_decrement_at_one_equals_remove() {
        let mut via_update = Cart::new();
        via_update.add("A", label("PKR 1"), "");
        via_update.add("B", label("PKR 2"), "");
        let mut via_remove = via_update.clone();

        let update = via_update.update_quantity(0, -1).unwrap();
        let removed = via_remove.remove(0).unwrap();

        assert_eq!(update, QuantityUpdate::Removed(removed));
        assert_eq!(via_update, via_remove);
    }

    #[test]
    fn test_update_quantity_changes_count() {
        let mut cart = Cart::new();
        cart.add("A", label("PKR 1"), "");
        let update = cart.update_quantity(0, 1).unwrap();
        assert_eq!(update, QuantityUpdate::Changed { index: 0, quantity: 2 });
        assert_eq!(cart.total_unit_count(), 2);

        cart.update_quantity(0, -1).unwrap();
        assert_eq!(cart.total_unit_count(), 1);
        assert_count_invariant(&cart);
    }

    #[test]
    fn test_update_quantity_out_of_bounds_is_noop() {
        let mut cart = Cart::new();
        cart.add("A", label("PKR 1"), "");
        let before = cart.clone();
        assert!(cart.update_quantity(1, 1).is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_by_name_addressing() {
        let mut cart = Cart::new();
        cart.add("A", label("PKR 1"), "");
        cart.add("B", label("PKR 1"), "");

        cart.update_quantity_by_name("B", 2).unwrap();
        assert_eq!(cart.items()[1].quantity, 3);

        let removed = cart.remove_by_name("A").unwrap();
        assert_eq!(removed.name, "A");
        assert!(cart.remove_by_name("missing").is_none());
        assert_count_invariant(&cart);
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::new();
        cart.add("Biryani", label("PKR 250"), "");
        cart.add("Biryani", label("PKR 250"), "");
        cart.add("Raita", label("PKR 100"), "");
        assert_eq!(cart.total(CurrencyCode::PKR).display(), "PKR 600");
    }

    #[test]
    fn test_total_ignores_labels_without_digits() {
        let mut cart = Cart::new();
        cart.add("Water", label("Free"), "");
        cart.add("Karahi", label("PKR 1500"), "");
        assert_eq!(cart.total(CurrencyCode::PKR).display(), "PKR 1,500");
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add("A", label("PKR 1"), "");
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_unit_count(), 0);
    }

    #[test]
    fn test_from_items_drops_zero_quantity() {
        let items = vec![
            CartItem {
                name: "A".into(),
                price: label("PKR 1"),
                image: String::new(),
                quantity: 0,
            },
            CartItem {
                name: "B".into(),
                price: label("PKR 1"),
                image: String::new(),
                quantity: 4,
            },
        ];
        let cart = Cart::from_items(items);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_unit_count(), 4);
    }

    #[test]
    fn test_item_json_shape() {
        let item = CartItem {
            name: "Pizza".into(),
            price: label("PKR 900"),
            image: "p.png".into(),
            quantity: 2,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Pizza",
                "price": "PKR 900",
                "image": "p.png",
                "quantity": 2
            })
        );
    }
}
