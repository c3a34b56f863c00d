//! Pricing breakdown and delivery estimates
//!
//! Pure functions over a cart snapshot. All amounts are whole naira, so a
//! total is always the exact sum of its parts.

use crate::item::CartItem;
use crate::regions::{self, Region};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Flat fee charged on pay-on-delivery orders.
pub const COD_SURCHARGE: u64 = 200;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cod,
    Card,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cod
    }
}

impl PaymentMethod {
    pub fn surcharge(self) -> u64 {
        match self {
            PaymentMethod::Cod => COD_SURCHARGE,
            PaymentMethod::Card => 0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingBreakdown {
    pub subtotal: u64,
    pub shipping: u64,
    pub surcharge: u64,
    pub total: u64,
}

/// A priced cart. `region` is `None` while the shopper hasn't selected a
/// deliverable state, in which case shipping is zero only because it can't be
/// quoted yet.
#[derive(Debug, Clone, Copy)]
pub struct Quote {
    pub pricing: PricingBreakdown,
    pub region: Option<&'static Region>,
}

pub fn subtotal(items: &[CartItem]) -> u64 {
    items.iter().map(CartItem::line_total).sum()
}

pub fn quote(items: &[CartItem], region_code: Option<&str>, method: PaymentMethod) -> Quote {
    let region = region_code.and_then(regions::lookup);
    let subtotal = subtotal(items);
    let shipping = region.map_or(0, |r| r.shipping_cost);
    let surcharge = method.surcharge();

    Quote {
        pricing: PricingBreakdown {
            subtotal,
            shipping,
            surcharge,
            total: subtotal + shipping + surcharge,
        },
        region,
    }
}

impl Quote {
    /// Whether shipping has actually been resolved to a zone.
    pub fn is_complete(&self) -> bool {
        self.region.is_some()
    }

    /// Inclusive `[earliest, latest]` delivery dates, or `None` until a
    /// region is selected.
    pub fn delivery_window(&self, from: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let region = self.region?;
        let earliest = from.checked_add_days(Days::new(u64::from(region.min_days())))?;
        let latest = from.checked_add_days(Days::new(u64::from(region.max_days())))?;
        Some((earliest, latest))
    }

    /// The latest date of the window, used as the single headline estimate.
    pub fn estimated_delivery(&self, from: NaiveDate) -> Option<NaiveDate> {
        self.delivery_window(from).map(|(_, latest)| latest)
    }
}
