//! Checkout session: form validation, payment processing, order hand-off
//!
//! A session moves Editing -> Submitting -> Completed. Validation or
//! processing failures land back in Editing with the errors attached;
//! Completed is terminal so a double-click on "Place Order" can't submit
//! twice.

use crate::cart::{CART_KEY, CartStore};
use crate::error::{CheckoutError, FieldError};
use crate::order::{ORDER_KEY, Order};
use crate::pricing::PaymentMethod;
use crate::regions;
use regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s'-]+$").expect("valid name regex"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
// Nigerian mobile numbers: 0- or +234-prefixed, network digit 7/8/9.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+234|0)[789]\d{9}$").expect("valid phone regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Phone,
    StreetAddress,
    City,
    Region,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::FullName => "full name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::StreetAddress => "street address",
            Field::City => "city",
            Field::Region => "state",
        };
        f.write_str(name)
    }
}

/// Everything the shopper typed into the checkout form, untrusted until
/// [`validate_form`] has passed over it.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub street_address: String,
    pub city: String,
    pub region_code: String,
    pub postal_code: String,
    pub delivery_instructions: String,
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn set_full_name(mut self, value: &str) -> Self {
        self.full_name = value.to_string();
        self
    }
    pub fn set_email(mut self, value: &str) -> Self {
        self.email = value.to_string();
        self
    }
    pub fn set_phone(mut self, value: &str) -> Self {
        self.phone = value.to_string();
        self
    }
    pub fn set_street_address(mut self, value: &str) -> Self {
        self.street_address = value.to_string();
        self
    }
    pub fn set_city(mut self, value: &str) -> Self {
        self.city = value.to_string();
        self
    }
    pub fn set_region(mut self, code: &str) -> Self {
        self.region_code = code.to_string();
        self
    }
    pub fn set_postal_code(mut self, value: &str) -> Self {
        self.postal_code = value.to_string();
        self
    }
    pub fn set_delivery_instructions(mut self, value: &str) -> Self {
        self.delivery_instructions = value.to_string();
        self
    }
    pub fn set_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }
}

/// Check one field the way the form does on blur.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    let fail = |message: &str| Err(FieldError::new(field, message));

    match field {
        Field::FullName => {
            if value.is_empty() {
                return fail("Full name is required");
            }
            if value.len() < 2 {
                return fail("Name must be at least 2 characters");
            }
            if !NAME_RE.is_match(value) {
                return fail("Name can only contain letters, spaces, hyphens, and apostrophes");
            }
        }
        Field::Email => {
            if value.is_empty() {
                return fail("Email address is required");
            }
            if !EMAIL_RE.is_match(value) {
                return fail("Please enter a valid email address");
            }
        }
        Field::Phone => {
            if value.is_empty() {
                return fail("Phone number is required");
            }
            let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
            if !PHONE_RE.is_match(&compact) {
                return fail("Please enter a valid Nigerian phone number");
            }
        }
        Field::StreetAddress => {
            if value.is_empty() {
                return fail("Street address is required");
            }
            if value.len() < 5 {
                return fail("Please enter a complete address");
            }
        }
        Field::City => {
            if value.is_empty() {
                return fail("City is required");
            }
        }
        Field::Region => {
            if value.is_empty() {
                return fail("Please select a state");
            }
            if !regions::is_known(value) {
                return fail("Please select a state");
            }
        }
    }
    Ok(())
}

/// Re-check every required field, accumulating all failures.
pub fn validate_form(form: &CheckoutForm) -> Vec<FieldError> {
    let checks = [
        (Field::FullName, form.full_name.as_str()),
        (Field::Email, form.email.as_str()),
        (Field::Phone, form.phone.as_str()),
        (Field::StreetAddress, form.street_address.as_str()),
        (Field::City, form.city.as_str()),
        (Field::Region, form.region_code.as_str()),
    ];

    checks
        .into_iter()
        .filter_map(|(field, value)| validate_field(field, value).err())
        .collect()
}

/// Outcome of the payment step. A real gateway will produce all three; the
/// bundled simulator only ever completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingOutcome {
    Completed,
    Failed(String),
    Cancelled,
}

pub trait PaymentProcessor {
    fn process(&self, order: &Order) -> ProcessingOutcome;
}

/// Stand-in for the payment round trip. The delay models network latency;
/// tests leave it at zero.
#[derive(Debug, Default)]
pub struct SimulatedProcessor {
    delay: Option<Duration>,
}

impl SimulatedProcessor {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay: Some(delay) }
    }
}

impl PaymentProcessor for SimulatedProcessor {
    fn process(&self, _order: &Order) -> ProcessingOutcome {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        ProcessingOutcome::Completed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Editing,
    Submitting,
    Completed,
}

pub struct Checkout {
    db: Arc<sled::Db>,
    state: CheckoutState,
}

impl Checkout {
    pub fn new(db: Arc<sled::Db>) -> Self {
        Self {
            db,
            state: CheckoutState::Editing,
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Validate, process payment, persist the order and clear the cart.
    ///
    /// The order write and the cart delete go through one batch, so no
    /// observer can see an order alongside a still-populated cart.
    pub fn submit(
        &mut self,
        cart: &mut CartStore,
        form: &CheckoutForm,
        processor: &dyn PaymentProcessor,
    ) -> Result<Order, CheckoutError> {
        if self.state == CheckoutState::Completed {
            return Err(CheckoutError::AlreadyCompleted);
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let errors = validate_form(form);
        if !errors.is_empty() {
            self.state = CheckoutState::Editing;
            return Err(CheckoutError::Invalid(errors));
        }

        self.state = CheckoutState::Submitting;
        match self.place_order(cart, form, processor) {
            Ok(order) => {
                self.state = CheckoutState::Completed;
                tracing::info!(order_id = %order.order_id, total = order.pricing.total, "order placed");
                Ok(order)
            }
            Err(err) => {
                self.state = CheckoutState::Editing;
                Err(err)
            }
        }
    }

    fn place_order(
        &self,
        cart: &mut CartStore,
        form: &CheckoutForm,
        processor: &dyn PaymentProcessor,
    ) -> Result<Order, CheckoutError> {
        let order = Order::place(cart.items(), form);

        match processor.process(&order) {
            ProcessingOutcome::Completed => {}
            ProcessingOutcome::Failed(reason) => return Err(CheckoutError::Processing(reason)),
            ProcessingOutcome::Cancelled => return Err(CheckoutError::Cancelled),
        }

        let mut batch = sled::Batch::default();
        batch.insert(ORDER_KEY, serde_json::to_vec(&order)?);
        batch.remove(CART_KEY);
        self.db.apply_batch(batch)?;
        cart.mark_ordered();

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_rules_match_the_form() {
        assert!(validate_field(Field::FullName, "Adaeze Obi-Martins").is_ok());
        assert!(validate_field(Field::FullName, "D'Arcy").is_ok());
        assert!(validate_field(Field::FullName, "X").is_err());
        assert!(validate_field(Field::FullName, "Ada123").is_err());

        assert!(validate_field(Field::Email, "ada@example.com").is_ok());
        assert!(validate_field(Field::Email, "not-an-email").is_err());
        assert!(validate_field(Field::Email, "a@b").is_err());

        assert!(validate_field(Field::Phone, "08031234567").is_ok());
        assert!(validate_field(Field::Phone, "+2348031234567").is_ok());
        assert!(validate_field(Field::Phone, "0803 123 4567").is_ok()); // spaces ignored
        assert!(validate_field(Field::Phone, "06031234567").is_err()); // bad network digit
        assert!(validate_field(Field::Phone, "0803123456").is_err()); // too short

        assert!(validate_field(Field::StreetAddress, "14 Broad Street").is_ok());
        assert!(validate_field(Field::StreetAddress, "abc").is_err());

        assert!(validate_field(Field::City, "Ikeja").is_ok());
        assert!(validate_field(Field::City, "   ").is_err());

        assert!(validate_field(Field::Region, "LA").is_ok());
        assert!(validate_field(Field::Region, "XX").is_err());
        assert!(validate_field(Field::Region, "").is_err());
    }

    #[test]
    fn validate_form_collects_every_failure() {
        let form = CheckoutForm::new()
            .set_full_name("Adaeze Obi")
            .set_email("not-an-email")
            .set_phone("nope")
            .set_street_address("14 Broad Street")
            .set_city("Ikeja")
            .set_region("LA");

        let errors = validate_form(&form);
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Email, Field::Phone]);
    }
}
