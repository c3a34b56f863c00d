use dripz_storefront::cart::{CART_KEY, CartStore};
use dripz_storefront::checkout::{
    Checkout, CheckoutForm, CheckoutState, Field, PaymentProcessor, ProcessingOutcome,
    SimulatedProcessor,
};
use dripz_storefront::confirmation::take_order;
use dripz_storefront::error::CheckoutError;
use dripz_storefront::item::CartItem;
use dripz_storefront::order::{ORDER_KEY, Order};
use dripz_storefront::pricing::{self, PaymentMethod};
use std::sync::Arc;

use tempfile::tempdir; // Use for test db cleanup.

// Sled uses file-based locking to prevent concurrent access, so each test
// opens its own database under a temp dir for simplified cleanup.
fn open_db(dir: &tempfile::TempDir, name: &str) -> Arc<sled::Db> {
    let db = sled::open(dir.path().join(name)).unwrap();
    db.clear().unwrap();
    Arc::new(db)
}

fn cloud_walker() -> CartItem {
    CartItem::new("Cloud Walker", 42_500)
        .with_size("42")
        .with_colorway("Triple White")
        .with_image("https://images.example.com/cloud-walker.jpg")
}

fn valid_form() -> CheckoutForm {
    CheckoutForm::new()
        .set_full_name("Adaeze Obi")
        .set_email("adaeze@example.com")
        .set_phone("08031234567")
        .set_street_address("14 Broad Street")
        .set_city("Ikeja")
        .set_region("LA")
        .set_payment_method(PaymentMethod::Cod)
}

#[test]
fn repeated_add_merges_instead_of_appending() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let db = open_db(&temp_dir, "merge.db");
    let mut cart = CartStore::open(db);

    cart.add(cloud_walker())?;
    cart.add(cloud_walker())?;

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].quantity, 2);

    // a different size is a different identity
    cart.add(cloud_walker().with_size("43"))?;
    assert_eq!(cart.len(), 2);

    Ok(())
}

#[test]
fn count_sums_quantities_not_entries() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let db = open_db(&temp_dir, "count.db");
    let mut cart = CartStore::open(db);

    cart.add(cloud_walker().with_quantity(2))?;
    cart.add(CartItem::new("Street Runner", 30_000).with_quantity(1))?;
    cart.add(CartItem::new("Court Classic", 28_000).with_quantity(3))?;

    assert_eq!(cart.len(), 3);
    assert_eq!(cart.count(), 6);

    Ok(())
}

#[test]
fn cart_round_trips_through_storage() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let db = open_db(&temp_dir, "roundtrip.db");

    let mut cart = CartStore::open(db.clone());
    cart.add(cloud_walker().with_quantity(2))?;
    cart.add(
        CartItem::new("Street Runner", 30_000)
            .with_product_id("sr-01")
            .with_size("43")
            .with_colorway("Core Black"),
    )?;
    let before = cart.items().to_vec();

    // a fresh store sees exactly what was persisted
    let reloaded = CartStore::open(db);
    assert_eq!(reloaded.items(), before.as_slice());

    Ok(())
}

#[test]
fn remove_out_of_range_is_a_noop() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let db = open_db(&temp_dir, "remove.db");
    let mut cart = CartStore::open(db);

    cart.add(cloud_walker())?;
    cart.remove(5)?;
    assert_eq!(cart.len(), 1);

    cart.remove(0)?;
    assert!(cart.is_empty());

    Ok(())
}

#[test]
fn place_order_end_to_end() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let db = open_db(&temp_dir, "place_order.db");

    let mut cart = CartStore::open(db.clone());
    cart.add(cloud_walker())?;
    cart.add(CartItem::new("Street Runner", 30_000).with_quantity(2))?;

    let expected = pricing::quote(cart.items(), Some("LA"), PaymentMethod::Cod).pricing;

    let mut checkout = Checkout::new(db.clone());
    let order = checkout
        .submit(&mut cart, &valid_form(), &SimulatedProcessor::default())
        .expect("submission with a valid form should succeed");

    assert_eq!(checkout.state(), CheckoutState::Completed);
    assert_eq!(order.pricing, expected);
    assert_eq!(order.pricing.total, 42_500 + 60_000 + 1_500 + 200);
    assert!(order.order_id.starts_with("DK-"));

    // the cart is gone, both in memory and in storage
    assert!(cart.is_empty());
    assert!(db.get(CART_KEY)?.is_none());

    // with our order placed the confirmation page consumes it exactly once
    let confirmed = take_order(&db).expect("order should be waiting for confirmation");
    assert_eq!(confirmed, order);
    assert!(take_order(&db).is_none());

    Ok(())
}

#[test]
fn empty_cart_submission_is_refused() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let db = open_db(&temp_dir, "empty_cart.db");

    let mut cart = CartStore::open(db.clone());
    let mut checkout = Checkout::new(db.clone());

    let err = checkout
        .submit(&mut cart, &valid_form(), &SimulatedProcessor::default())
        .unwrap_err();

    assert!(matches!(err, CheckoutError::EmptyCart));
    assert_eq!(checkout.state(), CheckoutState::Editing);
    assert!(db.get(ORDER_KEY)?.is_none());

    Ok(())
}

#[test]
fn invalid_email_fails_only_that_field_and_touches_nothing() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let db = open_db(&temp_dir, "invalid_email.db");

    let mut cart = CartStore::open(db.clone());
    cart.add(cloud_walker())?;

    let mut checkout = Checkout::new(db.clone());
    let form = valid_form().set_email("not-an-email");

    let err = checkout
        .submit(&mut cart, &form, &SimulatedProcessor::default())
        .unwrap_err();

    let fields: Vec<Field> = err.field_errors().iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![Field::Email]);
    assert_eq!(checkout.state(), CheckoutState::Editing);

    // cart unmodified, order storage untouched
    assert_eq!(cart.len(), 1);
    assert!(db.get(CART_KEY)?.is_some());
    assert!(db.get(ORDER_KEY)?.is_none());

    Ok(())
}

#[test]
fn completed_checkout_refuses_resubmission() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let db = open_db(&temp_dir, "resubmit.db");

    let mut cart = CartStore::open(db.clone());
    cart.add(cloud_walker())?;

    let mut checkout = Checkout::new(db.clone());
    checkout
        .submit(&mut cart, &valid_form(), &SimulatedProcessor::default())
        .expect("first submission should succeed");

    let err = checkout
        .submit(&mut cart, &valid_form(), &SimulatedProcessor::default())
        .unwrap_err();
    assert!(matches!(err, CheckoutError::AlreadyCompleted));

    // the first order is still waiting, untouched by the refused attempt
    assert!(take_order(&db).is_some());

    Ok(())
}

struct RejectingProcessor(ProcessingOutcome);

impl PaymentProcessor for RejectingProcessor {
    fn process(&self, _order: &Order) -> ProcessingOutcome {
        self.0.clone()
    }
}

#[test]
fn processing_failure_returns_to_editing_with_cart_intact() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let db = open_db(&temp_dir, "processing.db");

    let mut cart = CartStore::open(db.clone());
    cart.add(cloud_walker())?;

    let mut checkout = Checkout::new(db.clone());

    let failed = RejectingProcessor(ProcessingOutcome::Failed("gateway timeout".into()));
    let err = checkout.submit(&mut cart, &valid_form(), &failed).unwrap_err();
    assert!(matches!(err, CheckoutError::Processing(_)));
    assert_eq!(checkout.state(), CheckoutState::Editing);
    assert_eq!(cart.len(), 1);
    assert!(db.get(ORDER_KEY)?.is_none());

    let cancelled = RejectingProcessor(ProcessingOutcome::Cancelled);
    let err = checkout.submit(&mut cart, &valid_form(), &cancelled).unwrap_err();
    assert!(matches!(err, CheckoutError::Cancelled));
    assert_eq!(checkout.state(), CheckoutState::Editing);

    // a retry after the failure still goes through
    let order = checkout.submit(&mut cart, &valid_form(), &SimulatedProcessor::default())?;
    assert_eq!(take_order(&db), Some(order));

    Ok(())
}
