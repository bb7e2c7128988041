// tests/cart_tests.rs
mod common;

use common::*;
use oasis::{
  checkout, CartPersistence, CartService, CheckoutRequest, LineItem, OasisError, PaymentMethod, Snapshot, TimeSlot,
};
use serial_test::serial;

#[test]
fn adding_the_same_product_twice_merges_into_one_line() {
  setup_tracing();
  let cart = CartService::in_memory();
  cart.add(&bulk_water(), 1);
  cart.add(&ice_cubes(), 2);
  cart.add(&bulk_water(), 2);

  let items = cart.items();
  assert_eq!(items.len(), 2);
  assert_eq!(items[0].product_id(), "p5");
  assert_eq!(items[0].quantity, 3);
  assert_eq!(cart.item_count(), 5);
}

#[test]
fn zero_quantity_add_changes_nothing() {
  let cart = CartService::in_memory();
  let version = cart.store().version();
  cart.add(&bulk_water(), 0);
  assert!(cart.is_empty());
  assert_eq!(cart.store().version(), version);
}

#[test]
fn decrease_at_one_removes_the_line() {
  let cart = CartService::in_memory();
  cart.add(&ice_cubes(), 1);
  cart.decrease("p7");
  assert!(cart.is_empty());
  assert_eq!(cart.quantity_of("p7"), 0);
}

#[test]
fn decrease_above_one_decrements() {
  let cart = CartService::in_memory();
  cart.add(&ice_cubes(), 3);
  cart.decrease("p7");
  assert_eq!(cart.quantity_of("p7"), 2);
  cart.increase("p7");
  cart.increase("p7");
  assert_eq!(cart.quantity_of("p7"), 4);
}

#[test]
fn huge_quantities_cap_instead_of_wrapping() {
  let cart = CartService::in_memory();
  cart.add(&ice_cubes(), u32::MAX);
  cart.add(&ice_cubes(), 1);
  assert_eq!(cart.quantity_of("p7"), u32::MAX);

  cart.increase("p7");
  assert_eq!(cart.items().len(), 1);
  assert_eq!(cart.quantity_of("p7"), u32::MAX);

  cart.add(&bulk_water(), 1);
  assert_eq!(cart.item_count(), u32::MAX);

  cart.decrease("p7");
  assert_eq!(cart.quantity_of("p7"), u32::MAX - 1);
}

#[test]
fn update_quantity_to_zero_removes_and_unknown_ids_are_ignored() {
  let cart = CartService::in_memory();
  cart.add(&bulk_water(), 2);
  cart.add(&ice_cubes(), 1);

  let version = cart.store().version();
  cart.update_quantity("p404", 7);
  cart.remove("p404");
  cart.decrease("p404");
  assert_eq!(cart.store().version(), version);

  cart.update_quantity("p5", 0);
  assert_eq!(cart.items().len(), 1);
  assert_eq!(cart.items()[0].product_id(), "p7");
}

#[test]
fn total_sums_price_times_quantity() {
  let cart = CartService::in_memory();
  cart.add(&bulk_water(), 3);
  cart.add(&ice_cubes(), 2);
  assert_eq!(cart.total(), cents(3100));
  cart.clear();
  assert_eq!(cart.total(), cents(0));
}

#[test]
fn cart_subscribers_see_every_change() {
  let cart = CartService::in_memory();
  let (seen, handler) = recorder::<Snapshot<LineItem>>();
  let _sub = cart.subscribe(handler);

  cart.add(&bulk_water(), 1);
  cart.increase("p5");
  cart.clear();

  let counts: Vec<u32> = seen.lock().iter().map(|s| oasis::model::lines_quantity(s)).collect();
  assert_eq!(counts, vec![0, 1, 2, 0]);
}

// --- Persistence toggle ---

#[test]
#[serial]
fn file_persistence_survives_a_restart() {
  setup_tracing();
  let dir = tempfile::tempdir().unwrap();
  let persistence = CartPersistence::File(dir.path().join("cart.json"));

  let first = CartService::from_config(&persistence);
  first.add(&ice_cubes(), 4);
  drop(first);

  let second = CartService::from_config(&persistence);
  assert_eq!(second.quantity_of("p7"), 4);
}

#[test]
#[serial]
fn disabled_clearing_removes_a_stale_file_and_starts_empty() {
  setup_tracing();
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("cart.json");

  let persisted = CartService::from_config(&CartPersistence::File(path.clone()));
  persisted.add(&bulk_water(), 2);
  assert!(path.exists());

  let cart = CartService::from_config(&CartPersistence::DisabledClearing { stale_file: path.clone() });
  assert!(cart.is_empty());
  assert!(!path.exists());

  cart.add(&bulk_water(), 1);
  assert!(!path.exists());
}

// --- Checkout ---

fn request(method: PaymentMethod) -> CheckoutRequest {
  CheckoutRequest {
    customer: tendai(),
    payment_method: method,
    collection: collection(day(2026, 10, 20), TimeSlot::Midday),
    ecocash_number: None,
  }
}

#[tokio::test]
async fn checkout_places_the_cart_and_clears_it() {
  setup_tracing();
  let shop = storefront(catalog(), Vec::new(), afternoon_now());
  shop.cart.add(&bulk_water(), 3);
  shop.cart.add(&ice_cubes(), 2);

  let order = checkout(&shop.cart, &shop.orders, request(PaymentMethod::Cash)).await.unwrap();

  assert_eq!(order.total, cents(3100));
  assert_eq!(order.items.len(), 2);
  assert!(shop.cart.is_empty());
  assert_eq!(shop.orders.store().snapshot().len(), 1);
}

#[tokio::test]
async fn rejected_checkout_keeps_the_cart() {
  setup_tracing();
  let shop = storefront(catalog(), Vec::new(), afternoon_now());
  shop.cart.add(&bulk_water(), 1);

  // EcoCash without a number is refused.
  let err = checkout(&shop.cart, &shop.orders, request(PaymentMethod::Ecocash)).await.unwrap_err();

  assert!(matches!(err, OasisError::Validation(_)));
  assert_eq!(shop.cart.quantity_of("p5"), 1);
  assert!(shop.orders.store().snapshot().is_empty());
}

#[tokio::test]
async fn empty_cart_cannot_check_out() {
  let shop = storefront(catalog(), Vec::new(), afternoon_now());
  let err = checkout(&shop.cart, &shop.orders, request(PaymentMethod::Cash)).await.unwrap_err();
  assert!(err.is_rejection());
}
