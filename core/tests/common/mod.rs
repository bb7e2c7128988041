// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use oasis::{
  Category, CollectionDetails, Customer, FixedClock, LineItem, NoLatency, Order, OrderDraft, OrderStatus,
  PaymentMethod, PaymentStatus, Product, SharedClock, SharedLatency, StoreConfig, Storefront, TimeSlot,
};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::Level;

// --- Time ---

/// Harare is UTC+2 all year.
pub fn harare() -> FixedOffset {
  FixedOffset::east_opt(2 * 3600).unwrap()
}

/// Local midnight starting 19 October 2026 in Harare.
pub fn midnight_now() -> DateTime<FixedOffset> {
  harare().with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap()
}

/// 14:30 local on the same day.
pub fn afternoon_now() -> DateTime<FixedOffset> {
  harare().with_ymd_and_hms(2026, 10, 19, 14, 30, 0).unwrap()
}

pub fn fixed_clock(at: DateTime<FixedOffset>) -> SharedClock {
  Arc::new(FixedClock::new(at))
}

pub fn utc(at: DateTime<FixedOffset>) -> DateTime<Utc> {
  at.with_timezone(&Utc)
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// --- Money ---

/// `cents(350)` is 3.50.
pub fn cents(value: i64) -> Decimal {
  Decimal::new(value, 2)
}

// --- Fixtures ---

pub fn product(id: &str, category: Category, price_cents: i64) -> Product {
  Product {
    id: id.to_string(),
    name: format!("Product {}", id),
    category,
    size: "5L".to_string(),
    price: cents(price_cents),
    image: format!("assets/products/{}.jpg", id),
    description: String::new(),
    stock: Some(10),
    featured: None,
  }
}

pub fn bulk_water() -> Product {
  Product {
    id: "p5".to_string(),
    name: "Oasis Purified Water".to_string(),
    category: Category::Water,
    size: "19L".to_string(),
    price: cents(800),
    image: "assets/products/oasis-19l.jpg".to_string(),
    description: "Bulk water for offices and events.".to_string(),
    stock: Some(50),
    featured: None,
  }
}

pub fn ice_cubes() -> Product {
  Product {
    id: "p7".to_string(),
    name: "Pluto Ice Cubes".to_string(),
    category: Category::Ice,
    size: "5kg".to_string(),
    price: cents(350),
    image: "assets/products/pluto-ice-5kg.jpg".to_string(),
    description: "Perfect for events and parties.".to_string(),
    stock: Some(90),
    featured: None,
  }
}

pub fn catalog() -> Vec<Product> {
  vec![
    product("p1", Category::Water, 50),
    product("p2", Category::Water, 100),
    bulk_water(),
    product("p6", Category::Ice, 150),
    ice_cubes(),
    product("p9", Category::Accessories, 1000),
    product("p10", Category::Dispensers, 4500),
  ]
}

pub fn customer(first: &str, last: &str, phone: &str) -> Customer {
  Customer {
    first_name: first.to_string(),
    last_name: last.to_string(),
    phone: phone.to_string(),
    email: format!("{}@example.com", first.to_lowercase()),
  }
}

pub fn tendai() -> Customer {
  customer("Tendai", "Moyo", "+263771234567")
}

pub fn collection(date: NaiveDate, slot: TimeSlot) -> CollectionDetails {
  CollectionDetails::at_plant(date, slot)
}

pub fn cash_draft(items: Vec<LineItem>, date: NaiveDate, slot: TimeSlot) -> OrderDraft {
  OrderDraft {
    customer: tendai(),
    items,
    payment_method: PaymentMethod::Cash,
    collection: collection(date, slot),
    ecocash_number: None,
  }
}

/// A stored order with a single line of `qty` × `product`.
pub fn order(number: &str, placed: DateTime<Utc>, status: OrderStatus, item: Product, qty: u32) -> Order {
  let items = vec![LineItem::new(item, qty)];
  let total = oasis::model::lines_total(&items);
  Order {
    order_number: number.to_string(),
    order_date: placed,
    customer: tendai(),
    items,
    total,
    payment_method: PaymentMethod::Cash,
    payment_status: PaymentStatus::Pending,
    collection: collection(day(2026, 10, 20), TimeSlot::LateMorning),
    status,
    ecocash_number: None,
  }
}

pub fn order_in_slot(number: &str, date: NaiveDate, slot_label: &str) -> Order {
  let mut o = order(
    number,
    utc(afternoon_now()) - Duration::hours(1),
    OrderStatus::Confirmed,
    ice_cubes(),
    1,
  );
  o.collection.date = date;
  o.collection.time_slot = slot_label.to_string();
  o
}

pub fn storefront(products: Vec<Product>, orders: Vec<Order>, now: DateTime<FixedOffset>) -> Storefront {
  let latency: SharedLatency = Arc::new(NoLatency);
  Storefront::with_latency(&StoreConfig::default(), products, orders, fixed_clock(now), latency)
}

// --- Recording subscribers ---

pub fn recorder<T: Clone + Send + Sync + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(&T) + Send + Sync + 'static) {
  let seen = Arc::new(Mutex::new(Vec::new()));
  let sink = Arc::clone(&seen);
  (seen, move |value: &T| sink.lock().push(value.clone()))
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
