// oasis/src/dashboard.rs

//! Back-office statistics combining the order and product stores.
//!
//! `watch` recomputes from the latest snapshot of each store whenever either
//! one emits. The two snapshots are not captured atomically with respect to
//! each other: if both stores change back to back, the handler first sees the
//! new snapshot of one paired with the old snapshot of the other, then the
//! fully updated pair.

use crate::clock::{local_day, local_midnight, SharedClock};
use crate::config::Operation;
use crate::model::{Order, Product};
use crate::mutation::SharedLatency;
use crate::query::orders as order_query;
use crate::query::{count_where, group_by_time_slot, sum_where, SlotGroup};
use crate::store::{EntityStore, Snapshot, Subscription};
use chrono::{DateTime, Days, FixedOffset, NaiveDate};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tracing::{event, instrument, Level};

pub const TRAILING_WEEK_DAYS: u64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
  pub orders_today: usize,
  pub revenue_this_week: Decimal,
  pub pending_collections: usize,
  pub total_products: usize,
}

/// Start of the trailing week: local midnight seven calendar days before `now`'s day.
pub fn week_start(now: DateTime<FixedOffset>) -> DateTime<chrono::Utc> {
  let offset = now.offset();
  let first_day = now
    .date_naive()
    .checked_sub_days(Days::new(TRAILING_WEEK_DAYS))
    .unwrap_or(NaiveDate::MIN);
  local_midnight(first_day, offset)
}

pub fn compute_stats(orders: &[Order], products: &[Product], now: DateTime<FixedOffset>) -> DashboardStats {
  let offset = now.offset();
  let today = now.date_naive();
  let since = week_start(now);

  DashboardStats {
    orders_today: count_where(orders, |o| local_day(o.order_date, offset) == today),
    revenue_this_week: sum_where(orders, |o| o.order_date >= since, |o| o.total),
    pending_collections: count_where(orders, |o| o.status.awaits_collection()),
    total_products: products.len(),
  }
}

#[derive(Default)]
struct Latest {
  orders: Option<Snapshot<Order>>,
  products: Option<Snapshot<Product>>,
}

impl Latest {
  fn stats(&self, now: DateTime<FixedOffset>) -> Option<DashboardStats> {
    match (&self.orders, &self.products) {
      (Some(orders), Some(products)) => Some(compute_stats(orders, products, now)),
      _ => None,
    }
  }
}

#[derive(Clone)]
pub struct DashboardService {
  orders: EntityStore<Order>,
  products: EntityStore<Product>,
  clock: SharedClock,
  latency: SharedLatency,
}

impl DashboardService {
  pub fn new(
    orders: EntityStore<Order>,
    products: EntityStore<Product>,
    clock: SharedClock,
    latency: SharedLatency,
  ) -> Self {
    Self {
      orders,
      products,
      clock,
      latency,
    }
  }

  /// Statistics over the current snapshots.
  pub fn stats(&self) -> DashboardStats {
    compute_stats(&self.orders.snapshot(), &self.products.snapshot(), self.clock.now())
  }

  /// Calls `handler` with fresh statistics now and after every emission of
  /// either store. The returned subscription covers both stores.
  pub fn watch<F>(&self, handler: F) -> Subscription
  where
    F: Fn(&DashboardStats) + Send + Sync + 'static,
  {
    let latest = Arc::new(Mutex::new(Latest::default()));
    let handler = Arc::new(handler);

    let orders_sub = {
      let latest = Arc::clone(&latest);
      let handler = Arc::clone(&handler);
      let clock = Arc::clone(&self.clock);
      self.orders.subscribe(move |orders: &Snapshot<Order>| {
        let stats = {
          let mut latest = latest.lock();
          latest.orders = Some(Arc::clone(orders));
          latest.stats(clock.now())
        };
        if let Some(stats) = stats {
          event!(Level::TRACE, source = "orders", "Dashboard stats recomputed.");
          handler(&stats);
        }
      })
    };

    let products_sub = {
      let latest = Arc::clone(&latest);
      let handler = Arc::clone(&handler);
      let clock = Arc::clone(&self.clock);
      self.products.subscribe(move |products: &Snapshot<Product>| {
        let stats = {
          let mut latest = latest.lock();
          latest.products = Some(Arc::clone(products));
          latest.stats(clock.now())
        };
        if let Some(stats) = stats {
          event!(Level::TRACE, source = "products", "Dashboard stats recomputed.");
          handler(&stats);
        }
      })
    };

    Subscription::merge("dashboard", [orders_sub, products_sub])
  }

  /// Newest orders first.
  #[instrument(name = "dashboard::recent_orders", skip(self))]
  pub async fn recent_orders(&self, count: usize) -> Vec<Order> {
    let recent = order_query::recent(&self.orders.snapshot(), count);
    self.latency.pause(Operation::List).await;
    recent
  }

  /// The collection schedule for `date`, grouped into the five time slots.
  #[instrument(name = "dashboard::schedule_for", skip(self))]
  pub async fn schedule_for(&self, date: NaiveDate) -> Vec<SlotGroup> {
    let groups = group_by_time_slot(&order_query::collected_on(&self.orders.snapshot(), date));
    self.latency.pause(Operation::List).await;
    groups
  }
}

impl std::fmt::Debug for DashboardService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("DashboardService")
      .field("orders", &self.orders)
      .field("products", &self.products)
      .finish()
  }
}
