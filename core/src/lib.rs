// src/lib.rs

//! Oasis: an in-memory reactive store for a bottled-water storefront.
//!
//! Oasis keeps the catalog, the cart and the order book in process memory and
//! lets any number of consumers observe them:
//!  - `EntityStore<T>` holds one collection, replays its current snapshot to
//!    new subscribers and pushes every full replacement to all of them, in order.
//!  - Pure query functions filter, group and aggregate snapshots.
//!  - Services perform writes as full replacements behind a simulated latency,
//!    validating input and order-status transitions first.
//!  - `DashboardService` combines the order and product stores into live
//!    back-office statistics.
//!  - Stores can be mirrored to a durable backing (a JSON file) without
//!    consumers noticing.

pub mod clock;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod mutation;
pub mod query;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::clock::{Clock, FixedClock, SharedClock, SystemClock};
pub use crate::config::{CartPersistence, LatencyProfile, Operation, StoreConfig};
pub use crate::dashboard::{compute_stats, DashboardService, DashboardStats};
pub use crate::error::{OasisError, OasisResult};

pub use crate::model::{
  Category, CollectionDetails, Customer, LineItem, Order, OrderDraft, OrderStatus, OrderUpdate, PaymentMethod,
  PaymentStatus, Product, ProductDraft, TimeSlot, DEFAULT_COLLECTION_LOCATION,
};

pub use crate::mutation::{
  checkout, CartService, CheckoutRequest, Latency, NoLatency, OrderService, ProductService, SharedLatency,
  SimulatedLatency,
};
pub use crate::query::{OrderFilter, SeverityTier, SlotGroup};
pub use crate::store::{Edit, EntityStore, JsonFileBacking, MemoryBacking, Snapshot, StoreBacking, Subscription};

use std::sync::Arc;

/// Every store and service, wired together once at the composition root and
/// then handed explicitly to whatever needs them.
#[derive(Clone, Debug)]
pub struct Storefront {
  pub products: ProductService,
  pub orders: OrderService,
  pub cart: CartService,
  pub dashboard: DashboardService,
}

impl Storefront {
  pub fn new(config: &StoreConfig, seed_products: Vec<Product>, seed_orders: Vec<Order>, clock: SharedClock) -> Self {
    let latency: SharedLatency = Arc::new(SimulatedLatency::new(config.latency));
    Self::with_latency(config, seed_products, seed_orders, clock, latency)
  }

  pub fn with_latency(
    config: &StoreConfig,
    seed_products: Vec<Product>,
    seed_orders: Vec<Order>,
    clock: SharedClock,
    latency: SharedLatency,
  ) -> Self {
    let product_store = EntityStore::new("products", seed_products);
    let order_store = EntityStore::new("orders", seed_orders);

    let products = ProductService::new(product_store.clone(), Arc::clone(&latency));
    let orders = OrderService::new(order_store.clone(), Arc::clone(&latency), Arc::clone(&clock));
    let cart = CartService::from_config(&config.cart_persistence);
    let dashboard = DashboardService::new(order_store, product_store, clock, latency);

    Self {
      products,
      orders,
      cart,
      dashboard,
    }
  }
}
