//! The immutable order record produced by a successful checkout

use crate::checkout::CheckoutForm;
use crate::item::CartItem;
use crate::pricing::{self, PaymentMethod, PricingBreakdown};
use crate::regions;
use crate::utils;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Storage key for the order handed from checkout to the confirmation page.
/// Present only between a successful submission and the page's first read.
pub const ORDER_KEY: &str = "current_order";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShippingAddress {
    pub street_address: String,
    pub city: String,
    pub region_code: String,
    pub region_name: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub delivery_instructions: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentDetails {
    pub method: PaymentMethod,
    pub surcharge: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
}

/// Snapshot of a completed checkout. Built once, then only ever read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub order_id: String,
    pub items: Vec<CartItem>,
    pub customer: Customer,
    pub shipping: ShippingAddress,
    pub payment: PaymentDetails,
    pub pricing: PricingBreakdown,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub estimated_delivery: Option<NaiveDate>,
}

impl Order {
    /// Assemble an order from the cart snapshot and an already-validated
    /// form. Pricing is recomputed here so the record can never disagree
    /// with the engine.
    pub fn place(items: &[CartItem], form: &CheckoutForm) -> Self {
        let quote = pricing::quote(items, Some(&form.region_code), form.payment_method);
        let region_name = regions::lookup(&form.region_code)
            .map(|r| r.name.to_string())
            .unwrap_or_default();
        let created_at = Utc::now();

        Self {
            order_id: utils::new_order_id(),
            items: items.to_vec(),
            customer: Customer {
                full_name: form.full_name.trim().to_string(),
                email: form.email.trim().to_string(),
                phone: form.phone.trim().to_string(),
            },
            shipping: ShippingAddress {
                street_address: form.street_address.trim().to_string(),
                city: form.city.trim().to_string(),
                region_code: form.region_code.clone(),
                region_name,
                postal_code: form.postal_code.trim().to_string(),
                delivery_instructions: form.delivery_instructions.trim().to_string(),
            },
            payment: PaymentDetails {
                method: form.payment_method,
                surcharge: form.payment_method.surcharge(),
            },
            pricing: quote.pricing,
            status: OrderStatus::Pending,
            created_at,
            estimated_delivery: quote.estimated_delivery(created_at.date_naive()),
        }
    }

    /// Plain-text receipt, the printable view of the confirmation page.
    pub fn receipt(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Dripz & Kix — Order Confirmation");
        let _ = writeln!(out, "Order Number: {}", self.order_id);
        let _ = writeln!(out, "Order Date: {}", self.created_at.format("%A, %-d %B %Y"));
        match self.estimated_delivery {
            Some(date) => {
                let _ = writeln!(out, "Estimated Delivery: {}", date.format("%A, %-d %B %Y"));
            }
            None => {
                let _ = writeln!(out, "Estimated Delivery: TBD");
            }
        }
        let _ = writeln!(
            out,
            "Payment Method: {}",
            match self.payment.method {
                PaymentMethod::Cod => "Pay on Delivery (COD)",
                PaymentMethod::Card => "Card Payment",
            }
        );

        let _ = writeln!(out, "\nItems Ordered");
        for item in &self.items {
            let _ = writeln!(
                out,
                "  {} x{} — Size: EU {} — Color: {} — {}",
                item.title,
                item.quantity,
                item.size,
                item.colorway,
                utils::format_naira(item.line_total()),
            );
        }

        let _ = writeln!(out, "\nShipping Address");
        let _ = writeln!(out, "  {}", self.customer.full_name);
        let _ = writeln!(out, "  {}", self.shipping.street_address);
        let _ = writeln!(out, "  {}, {}", self.shipping.city, self.shipping.region_name);
        if !self.shipping.postal_code.is_empty() {
            let _ = writeln!(out, "  {}", self.shipping.postal_code);
        }
        let _ = writeln!(out, "  {}", self.customer.phone);
        if !self.shipping.delivery_instructions.is_empty() {
            let _ = writeln!(out, "  Delivery Instructions: {}", self.shipping.delivery_instructions);
        }

        let _ = writeln!(out, "\nOrder Total");
        let _ = writeln!(out, "  Subtotal:  {}", utils::format_naira(self.pricing.subtotal));
        let _ = writeln!(out, "  Shipping:  {}", utils::format_naira(self.pricing.shipping));
        if self.pricing.surcharge > 0 {
            let _ = writeln!(out, "  COD Fee:   {}", utils::format_naira(self.pricing.surcharge));
        }
        let _ = writeln!(out, "  Total:     {}", utils::format_naira(self.pricing.total));
        out
    }
}
