//! Cart persistence.

use foodie_core::{Cart, CartItem};

use super::{Storage, StorageError, keys};

/// Repository for the cart slots.
pub struct CartRepository<'a, S: Storage + ?Sized> {
    storage: &'a S,
}

impl<'a, S: Storage + ?Sized> CartRepository<'a, S> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Load the stored cart.
    ///
    /// Never fails: an unreadable or malformed cart slot yields an empty
    /// cart. The unit count is derived from the stored lines; a stored count
    /// that disagrees with them is logged and ignored.
    #[must_use]
    pub fn load(&self) -> Cart {
        let items = match self.storage.get_item(keys::CART) {
            Ok(Some(text)) => match serde_json::from_str::<Vec<CartItem>>(&text) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(error = %e, "Stored cart is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored cart, starting empty");
                Vec::new()
            }
        };

        let cart = Cart::from_items(items);

        if let Some(stored) = self.stored_count()
            && stored != cart.total_unit_count()
        {
            tracing::warn!(
                stored,
                derived = cart.total_unit_count(),
                "Stored cart count disagrees with line items"
            );
        }

        cart
    }

    /// Overwrite both cart slots with the given cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if either slot cannot be written.
    pub fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let items = serde_json::to_string(cart.items())?;
        self.storage.set_item(keys::CART, &items)?;
        self.storage
            .set_item(keys::CART_COUNT, &cart.total_unit_count().to_string())?;
        Ok(())
    }

    fn stored_count(&self) -> Option<u32> {
        let text = self.storage.get_item(keys::CART_COUNT).ok().flatten()?;
        text.trim().parse().ok()
    }
}
