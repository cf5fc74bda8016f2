//! Cart modal and badge.

use askama::Template;

use foodie_core::{Cart, CartItem, CurrencyCode};

/// Cart line display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    /// Position of the line; controls dispatch by this index.
    pub index: usize,
    pub name: String,
    pub price: String,
    pub image: String,
    pub quantity: u32,
}

impl CartItemView {
    fn from_item(index: usize, item: &CartItem) -> Self {
        Self {
            index,
            name: item.name.clone(),
            price: item.price.to_string(),
            image: item.image.clone(),
            quantity: item.quantity,
        }
    }
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Formatted total, e.g. `"PKR 1,250"`.
    pub total: String,
    pub item_count: u32,
    /// Image used when a line's image fails to load.
    pub placeholder_image: String,
}

impl CartView {
    /// Build the view of `cart`.
    #[must_use]
    pub fn new(cart: &Cart, currency: CurrencyCode, placeholder_image: &str) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| CartItemView::from_item(index, item))
                .collect(),
            total: cart.total(currency).display(),
            item_count: cart.total_unit_count(),
            placeholder_image: placeholder_image.to_string(),
        }
    }
}

/// The cart modal.
#[derive(Template)]
#[template(path = "cart/modal.html")]
pub struct CartModalTemplate<'a> {
    pub cart: &'a CartView,
    pub open: bool,
}

/// Cart line list fragment, the body of the modal.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate<'a> {
    pub cart: &'a CartView,
}

/// Cart count badge fragment.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
    pub bouncing: bool,
}

/// A control in the cart modal, as dispatched back into the cart store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// `+` on the line at the index.
    Increment(usize),
    /// `-` on the line at the index.
    Decrement(usize),
    /// Trash button on the line at the index.
    Remove(usize),
    /// "Proceed to Checkout".
    Checkout,
    /// Close button or backdrop.
    Close,
}

impl CartAction {
    /// Decode a control's `data-action` and `data-index` attributes.
    ///
    /// Returns `None` for unknown actions or a line action without an index.
    #[must_use]
    pub fn from_control(action: &str, index: Option<usize>) -> Option<Self> {
        match (action, index) {
            ("increment", Some(i)) => Some(Self::Increment(i)),
            ("decrement", Some(i)) => Some(Self::Decrement(i)),
            ("remove", Some(i)) => Some(Self::Remove(i)),
            ("checkout", _) => Some(Self::Checkout),
            ("close-cart", _) => Some(Self::Close),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use foodie_core::PriceLabel;

    use super::*;

    const PLACEHOLDER: &str = "https://via.placeholder.com/80";

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add("Chicken & Chips", PriceLabel::new("PKR 450"), "chips.png");
        cart.add("Chicken & Chips", PriceLabel::new("PKR 450"), "chips.png");
        cart.add("Kheer", PriceLabel::new("PKR 1200"), "");
        cart
    }

    #[test]
    fn test_view_from_cart() {
        let view = CartView::new(&sample_cart(), CurrencyCode::PKR, PLACEHOLDER);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[1].index, 1);
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.total, "PKR 2,100");
        assert_eq!(view.item_count, 3);
    }

    #[test]
    fn test_render_empty_state() {
        let view = CartView::new(&Cart::new(), CurrencyCode::PKR, PLACEHOLDER);
        let html = CartModalTemplate {
            cart: &view,
            open: true,
        }
        .render()
        .unwrap();

        assert!(html.contains("Your cart is empty"));
        assert!(html.contains("PKR 0"));
        assert!(!html.contains("cart-item-details"));
    }

    #[test]
    fn test_render_rows_and_controls() {
        let view = CartView::new(&sample_cart(), CurrencyCode::PKR, PLACEHOLDER);
        let html = CartItemsTemplate { cart: &view }.render().unwrap();

        assert!(html.contains("Chicken &#38; Chips"));
        assert!(html.contains("data-action=\"increment\" data-index=\"1\""));
        assert!(html.contains("data-action=\"remove\" data-index=\"0\""));
        assert!(html.contains("<span class=\"qty-display\">2</span>"));
        assert!(html.contains("via.placeholder.com"));
        assert!(!html.contains("Your cart is empty"));
    }

    #[test]
    fn test_render_modal_visibility() {
        let view = CartView::new(&Cart::new(), CurrencyCode::PKR, PLACEHOLDER);
        let closed = CartModalTemplate {
            cart: &view,
            open: false,
        }
        .render()
        .unwrap();
        assert!(closed.contains("display: none"));
    }

    #[test]
    fn test_render_badge() {
        let html = CartCountTemplate {
            count: 3,
            bouncing: true,
        }
        .render()
        .unwrap();
        assert_eq!(html.trim(), "<span class=\"cart-value bounce\">3</span>");
    }

    #[test]
    fn test_action_from_control() {
        assert_eq!(
            CartAction::from_control("decrement", Some(2)),
            Some(CartAction::Decrement(2))
        );
        assert_eq!(CartAction::from_control("checkout", None), Some(CartAction::Checkout));
        assert_eq!(CartAction::from_control("remove", None), None);
        assert_eq!(CartAction::from_control("explode", Some(0)), None);
    }
}
