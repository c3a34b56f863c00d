//! Cart, pricing and checkout core for the Dripz & Kix storefront.
//!
//! All persistent state lives in an embedded sled database standing in for
//! the browser's local storage: the cart under one key as a JSON array, the
//! in-flight order under another until the confirmation page consumes it.

pub mod cart;
pub mod checkout;
pub mod confirmation;
pub mod error;
pub mod item;
pub mod order;
pub mod pricing;
pub mod regions;
pub mod utils;
