//! One-shot read of the order the checkout just persisted
//!
//! The confirmation page is the only consumer and it reads exactly once:
//! the order is deleted in the same step that returns it, so a refresh shows
//! "order not found" instead of replaying the confirmation.

use crate::order::{ORDER_KEY, Order};

/// Remove and return the pending order. `None` when nothing is stored or
/// the stored bytes don't decode; corrupted storage must never panic the
/// page, it just renders the not-found state.
pub fn take_order(db: &sled::Db) -> Option<Order> {
    let raw = db.remove(ORDER_KEY).ok().flatten()?;
    match serde_json::from_slice(&raw) {
        Ok(order) => Some(order),
        Err(err) => {
            tracing::warn!(error = %err, "discarding malformed stored order");
            None
        }
    }
}
