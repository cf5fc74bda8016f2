//! Cart store.
//!
//! Applies cart mutations and mirrors the result to storage. Every
//! mutation overwrites both cart slots; a failed write is logged and the
//! in-memory cart stays authoritative for the rest of the page's life.

use foodie_core::{Cart, CartItem, CurrencyCode, Price, PriceLabel, QuantityUpdate};
use tracing::instrument;

use crate::db::{CartRepository, Storage};

/// What a cart operation did, for re-rendering and notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// One unit of `name` was added.
    Added {
        /// Product name.
        name: String,
        /// Line quantity after the add.
        quantity: u32,
    },
    /// A line's quantity changed and the line is still in the cart.
    QuantityChanged {
        /// Position of the line.
        index: usize,
        /// Quantity after the change.
        quantity: u32,
    },
    /// A line was removed.
    Removed(CartItem),
    /// The order was placed and the cart cleared.
    CheckedOut {
        /// Number of distinct line items in the order.
        line_count: usize,
        /// Order total.
        total: Price,
    },
    /// Checkout was attempted on an empty cart.
    EmptyCheckout,
    /// Nothing happened (e.g. an index out of bounds).
    Unchanged,
}

impl CartEvent {
    /// Toast text for this event, if it warrants one.
    #[must_use]
    pub fn toast(&self) -> Option<String> {
        match self {
            Self::Added { name, .. } => Some(format!("{name} added to cart!")),
            Self::Removed(item) => Some(format!("{} removed from cart!", item.name)),
            Self::CheckedOut { .. } => Some("Order placed successfully! Cart cleared.".to_string()),
            Self::QuantityChanged { .. } | Self::EmptyCheckout | Self::Unchanged => None,
        }
    }

    /// Blocking alert text for this event, if it warrants one.
    #[must_use]
    pub fn alert(&self) -> Option<String> {
        match self {
            Self::EmptyCheckout => Some("Your cart is empty!".to_string()),
            Self::CheckedOut { line_count, total } => Some(format!(
                "Order Placed Successfully! 🎉\n\nItems: {line_count}\nTotal: {total}\n\nThank you for your order!"
            )),
            _ => None,
        }
    }

    /// Whether the cart changed and the view must be re-rendered.
    #[must_use]
    pub const fn changed_cart(&self) -> bool {
        !matches!(self, Self::EmptyCheckout | Self::Unchanged)
    }
}

/// Cart operations over a borrowed cart and storage backend.
pub struct CartService<'a, S: Storage + ?Sized> {
    cart: &'a mut Cart,
    repo: CartRepository<'a, S>,
    currency: CurrencyCode,
}

impl<'a, S: Storage + ?Sized> CartService<'a, S> {
    /// Create a cart service.
    pub const fn new(cart: &'a mut Cart, storage: &'a S, currency: CurrencyCode) -> Self {
        Self {
            cart,
            repo: CartRepository::new(storage),
            currency,
        }
    }

    /// Add one unit of a product, merging with an existing line of the same name.
    #[instrument(skip(self, image))]
    pub fn add(&mut self, name: &str, price: &str, image: &str) -> CartEvent {
        let added = self.cart.add(name, PriceLabel::new(price), image);
        self.persist();
        tracing::debug!(
            index = added.index,
            quantity = added.quantity,
            units = self.cart.total_unit_count(),
            "Added to cart"
        );
        CartEvent::Added {
            name: name.to_owned(),
            quantity: added.quantity,
        }
    }

    /// Change the quantity of the line at `index` by `delta`.
    ///
    /// Out-of-bounds indices are ignored. A quantity driven to zero or
    /// below removes the line.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, index: usize, delta: i32) -> CartEvent {
        let event = match self.cart.update_quantity(index, delta) {
            Some(QuantityUpdate::Changed { index, quantity }) => {
                CartEvent::QuantityChanged { index, quantity }
            }
            Some(QuantityUpdate::Removed(item)) => CartEvent::Removed(item),
            None => return CartEvent::Unchanged,
        };
        self.persist();
        event
    }

    /// Change the quantity of the line named `name` by `delta`.
    pub fn update_quantity_by_name(&mut self, name: &str, delta: i32) -> CartEvent {
        match self.cart.position(name) {
            Some(index) => self.update_quantity(index, delta),
            None => CartEvent::Unchanged,
        }
    }

    /// Remove the line at `index`.
    #[instrument(skip(self))]
    pub fn remove(&mut self, index: usize) -> CartEvent {
        let Some(item) = self.cart.remove(index) else {
            tracing::warn!(index, "Remove requested for a line that does not exist");
            return CartEvent::Unchanged;
        };
        self.persist();
        CartEvent::Removed(item)
    }

    /// Remove the line named `name`.
    pub fn remove_by_name(&mut self, name: &str) -> CartEvent {
        match self.cart.position(name) {
            Some(index) => self.remove(index),
            None => CartEvent::Unchanged,
        }
    }

    /// Formatted cart total, e.g. `"PKR 1,250"`.
    #[must_use]
    pub fn total(&self) -> String {
        self.cart.total(self.currency).display()
    }

    /// Place the order: summarize, then clear the cart.
    ///
    /// No order record is kept anywhere; checkout only resets local state.
    #[instrument(skip(self))]
    pub fn checkout(&mut self) -> CartEvent {
        if self.cart.is_empty() {
            return CartEvent::EmptyCheckout;
        }

        let line_count = self.cart.len();
        let total = self.cart.total(self.currency);
        self.cart.clear();
        self.persist();
        tracing::info!(line_count, total = %total, "Order placed");

        CartEvent::CheckedOut { line_count, total }
    }

    fn persist(&self) {
        if let Err(e) = self.repo.save(self.cart) {
            tracing::error!(error = %e, "Failed to persist cart");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::MemoryStorage;

    #[test]
    fn test_add_persists_and_toasts() {
        let storage = MemoryStorage::new();
        let mut cart = Cart::new();
        let event = CartService::new(&mut cart, &storage, CurrencyCode::PKR).add(
            "Zinger Burger",
            "PKR 550",
            "zinger.png",
        );

        assert_eq!(event.toast().as_deref(), Some("Zinger Burger added to cart!"));
        assert!(event.changed_cart());
        assert_eq!(CartRepository::new(&storage).load(), cart);
    }

    #[test]
    fn test_update_quantity_no_toast() {
        let storage = MemoryStorage::new();
        let mut cart = Cart::new();
        let mut service = CartService::new(&mut cart, &storage, CurrencyCode::PKR);
        service.add("A", "PKR 10", "");
        let event = service.update_quantity(0, 1);

        assert_eq!(event, CartEvent::QuantityChanged { index: 0, quantity: 2 });
        assert!(event.toast().is_none());
        assert_eq!(CartRepository::new(&storage).load().total_unit_count(), 2);
    }

    #[test]
    fn test_decrement_to_zero_removes_with_toast() {
        let storage = MemoryStorage::new();
        let mut cart = Cart::new();
        let mut service = CartService::new(&mut cart, &storage, CurrencyCode::PKR);
        service.add("A", "PKR 10", "");
        let event = service.update_quantity(0, -1);

        assert_eq!(event.toast().as_deref(), Some("A removed from cart!"));
        assert!(CartRepository::new(&storage).load().is_empty());
    }

    #[test]
    fn test_out_of_bounds_is_unchanged() {
        let storage = MemoryStorage::new();
        let mut cart = Cart::new();
        let mut service = CartService::new(&mut cart, &storage, CurrencyCode::PKR);
        assert_eq!(service.update_quantity(0, 1), CartEvent::Unchanged);
        assert_eq!(service.remove(5), CartEvent::Unchanged);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_by_name() {
        let storage = MemoryStorage::new();
        let mut cart = Cart::new();
        let mut service = CartService::new(&mut cart, &storage, CurrencyCode::PKR);
        service.add("A", "PKR 10", "");
        service.add("B", "PKR 10", "");
        assert_eq!(
            service.update_quantity_by_name("B", 1),
            CartEvent::QuantityChanged { index: 1, quantity: 2 }
        );
        assert!(matches!(service.remove_by_name("A"), CartEvent::Removed(_)));
        assert_eq!(service.remove_by_name("A"), CartEvent::Unchanged);
    }

    #[test]
    fn test_checkout_empty() {
        let storage = MemoryStorage::new();
        let mut cart = Cart::new();
        let event = CartService::new(&mut cart, &storage, CurrencyCode::PKR).checkout();

        assert_eq!(event, CartEvent::EmptyCheckout);
        assert_eq!(event.alert().as_deref(), Some("Your cart is empty!"));
        assert!(event.toast().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_checkout_clears_and_summarizes() {
        let storage = MemoryStorage::new();
        let mut cart = Cart::new();
        let mut service = CartService::new(&mut cart, &storage, CurrencyCode::PKR);
        service.add("Biryani", "PKR 250", "");
        service.add("Biryani", "PKR 250", "");
        service.add("Raita", "PKR 100", "");
        assert_eq!(service.total(), "PKR 600");

        let event = service.checkout();
        let alert = event.alert().unwrap();
        assert!(alert.starts_with("Order Placed Successfully!"));
        assert!(alert.contains("Items: 2\nTotal: PKR 600"));
        assert_eq!(
            event.toast().as_deref(),
            Some("Order placed successfully! Cart cleared.")
        );

        assert!(cart.is_empty());
        let stored = CartRepository::new(&storage).load();
        assert!(stored.is_empty());
        assert_eq!(
            storage.get_item(crate::db::keys::CART_COUNT).unwrap().as_deref(),
            Some("0")
        );
    }
}
