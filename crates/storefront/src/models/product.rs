//! Product cards on the menu.

/// What a product card on the page exposes to its add-to-cart button.
///
/// Each part is optional because the card markup may omit it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCard {
    /// Heading text.
    pub name: Option<String>,
    /// Price label text.
    pub price: Option<String>,
    /// Image source URL.
    pub image: Option<String>,
}

impl ProductCard {
    /// Card with all three parts present.
    #[must_use]
    pub fn new(name: impl Into<String>, price: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price.into()),
            image: Some(image.into()),
        }
    }

    /// Name, defaulting to `"Item"`.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Item")
    }

    /// Price label, defaulting to `"PKR 0"`.
    #[must_use]
    pub fn price_or_default(&self) -> &str {
        self.price.as_deref().unwrap_or("PKR 0")
    }

    /// Image URL, defaulting to empty.
    #[must_use]
    pub fn image_or_default(&self) -> &str {
        self.image.as_deref().unwrap_or("")
    }
}
