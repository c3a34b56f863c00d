//! Cart line items and their merge identity
use serde::{Deserialize, Serialize};

/// A single line in the shopping cart.
///
/// Prices are whole naira. Two items are "the same" for merge purposes when
/// their identity tuple matches: the product id (falling back to the title
/// for catalog cards that carry none), the size and the colorway.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub price: u64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub colorway: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl CartItem {
    pub fn new(title: &str, price: u64) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            price,
            image: String::new(),
            size: String::new(),
            colorway: String::new(),
            quantity: 1,
        }
    }
    pub fn with_product_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }
    pub fn with_image(mut self, url: &str) -> Self {
        self.image = url.to_string();
        self
    }
    pub fn with_size(mut self, size: &str) -> Self {
        self.size = size.to_string();
        self
    }
    pub fn with_colorway(mut self, colorway: &str) -> Self {
        self.colorway = colorway.to_string();
        self
    }
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// The tuple the cart merges on.
    pub fn identity(&self) -> (&str, &str, &str) {
        let key = self.id.as_deref().unwrap_or(&self.title);
        (key, &self.size, &self.colorway)
    }

    /// Clamp the item into shape before it crosses a store boundary.
    /// Quantity is never allowed below 1.
    pub fn sanitized(mut self) -> Self {
        if self.quantity == 0 {
            self.quantity = 1;
        }
        self
    }

    pub fn line_total(&self) -> u64 {
        self.price * u64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_falls_back_to_title_without_product_id() {
        let item = CartItem::new("Cloud Walker", 42_500)
            .with_size("42")
            .with_colorway("Triple White");

        assert_eq!(item.identity(), ("Cloud Walker", "42", "Triple White"));

        let with_id = item.with_product_id("p1");
        assert_eq!(with_id.identity(), ("p1", "42", "Triple White"));
    }

    #[test]
    fn sanitize_clamps_zero_quantity() {
        let item = CartItem::new("Street Runner", 30_000).with_quantity(0);
        assert_eq!(item.sanitized().quantity, 1);
    }

    #[test]
    fn missing_fields_default_on_decode() {
        let raw = r#"{"title":"Court Classic","price":28000}"#;
        let item: CartItem = serde_json::from_str(raw).unwrap();

        assert_eq!(item.quantity, 1);
        assert_eq!(item.id, None);
        assert!(item.size.is_empty());
    }
}
