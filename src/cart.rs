//! The cart store: the one owner of the shopper's line items
//!
//! Items live in memory and are written back to the database as a whole JSON
//! array after every mutation. There is a single writer per session, so each
//! write simply replaces the previous one.

use crate::item::CartItem;
use std::sync::Arc;

/// Storage key for the persisted item list.
pub const CART_KEY: &str = "cart";

pub struct CartStore {
    db: Arc<sled::Db>,
    items: Vec<CartItem>,
}

impl CartStore {
    /// Open the store, loading whatever survived the previous session.
    /// An absent, empty or corrupted entry loads as an empty cart.
    pub fn open(db: Arc<sled::Db>) -> Self {
        let items = load_items(&db);
        Self { db, items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct entries, for display code that lists lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total items in the cart, the quantity-sum the badge shows.
    pub fn count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn subtotal(&self) -> u64 {
        crate::pricing::subtotal(&self.items)
    }

    /// Add an item, merging into an existing entry when the identity tuple
    /// (product, size, colorway) already sits in the cart.
    pub fn add(&mut self, item: CartItem) -> anyhow::Result<()> {
        let item = item.sanitized();

        match self.position_of(&item) {
            Some(index) => {
                self.items[index].quantity += item.quantity;
                tracing::debug!(title = %item.title, quantity = self.items[index].quantity, "merged cart item");
            }
            None => {
                tracing::debug!(title = %item.title, "added cart item");
                self.items.push(item);
            }
        }
        self.persist()
    }

    /// Delete the entry at `index`. Out-of-range indices are ignored, not
    /// errors; the rendering layer may race a stale index against a reload.
    pub fn remove(&mut self, index: usize) -> anyhow::Result<()> {
        if index >= self.items.len() {
            return Ok(());
        }
        let removed = self.items.remove(index);
        tracing::debug!(title = %removed.title, "removed cart item");
        self.persist()
    }

    /// Empty the cart and delete the persisted key outright. The key's
    /// absence is the signal other pages read as "an order just went through".
    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.items.clear();
        self.db.remove(CART_KEY)?;
        Ok(())
    }

    /// Drop the in-memory items after checkout has already removed the
    /// persisted key in the same batch as the order write.
    pub(crate) fn mark_ordered(&mut self) {
        self.items.clear();
    }

    fn position_of(&self, item: &CartItem) -> Option<usize> {
        self.items
            .iter()
            .position(|existing| existing.identity() == item.identity())
    }

    fn persist(&self) -> anyhow::Result<()> {
        let json = serde_json::to_vec(&self.items)?;
        self.db.insert(CART_KEY, json)?;
        Ok(())
    }
}

/// Decode the persisted array entry by entry so one junk element doesn't
/// throw the whole cart away. Entries without a title are unusable and get
/// dropped.
fn load_items(db: &sled::Db) -> Vec<CartItem> {
    let Ok(Some(raw)) = db.get(CART_KEY) else {
        return Vec::new();
    };
    let Ok(values) = serde_json::from_slice::<Vec<serde_json::Value>>(&raw) else {
        return Vec::new();
    };

    values
        .into_iter()
        .filter_map(|value| serde_json::from_value::<CartItem>(value).ok())
        .filter(|item| !item.title.is_empty())
        .map(CartItem::sanitized)
        .collect()
}
