// oasis/src/mutation/order_service.rs

//! Order placement and back-office order management.

use super::latency::SharedLatency;
use super::validation::validate_order_draft;
use crate::clock::SharedClock;
use crate::config::Operation;
use crate::error::{OasisError, OasisResult};
use crate::model::{Order, OrderDraft, OrderStatus, OrderUpdate, PaymentStatus};
use crate::query::orders as order_query;
use crate::query::OrderFilter;
use crate::store::{Edit, EntityStore, Snapshot};
use chrono::{Datelike, NaiveDate};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, instrument, warn};

const NUMBER_PREFIX: &str = "OW";

#[derive(Clone)]
pub struct OrderService {
  store: EntityStore<Order>,
  latency: SharedLatency,
  clock: SharedClock,
  next_seq: Arc<AtomicU64>,
}

// `OW-2026-007` -> 7
fn sequence_of(order_number: &str) -> Option<u64> {
  order_number.rsplit('-').next()?.parse().ok()
}

impl OrderService {
  pub fn new(store: EntityStore<Order>, latency: SharedLatency, clock: SharedClock) -> Self {
    let first = store
      .snapshot()
      .iter()
      .filter_map(|o| sequence_of(&o.order_number))
      .max()
      .unwrap_or(0)
      + 1;
    Self {
      store,
      latency,
      clock,
      next_seq: Arc::new(AtomicU64::new(first)),
    }
  }

  pub fn store(&self) -> &EntityStore<Order> {
    &self.store
  }

  pub fn clock(&self) -> &SharedClock {
    &self.clock
  }

  fn next_order_number(&self) -> String {
    let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
    format!("{}-{}-{:03}", NUMBER_PREFIX, self.clock.now().year(), seq)
  }

  #[instrument(name = "order_service::all", skip(self))]
  pub async fn all(&self) -> Snapshot<Order> {
    let orders = self.store.snapshot();
    self.latency.pause(Operation::List).await;
    orders
  }

  /// `None` when no order carries that number.
  #[instrument(name = "order_service::by_number", skip(self))]
  pub async fn by_number(&self, order_number: &str) -> Option<Order> {
    let order = order_query::find_order(&self.store.snapshot(), order_number).cloned();
    self.latency.pause(Operation::Lookup).await;
    order
  }

  #[instrument(name = "order_service::by_status", skip(self))]
  pub async fn by_status(&self, status: OrderStatus) -> Vec<Order> {
    let orders = order_query::by_status(&self.store.snapshot(), status);
    self.latency.pause(Operation::List).await;
    orders
  }

  /// Orders due for collection on `date`.
  #[instrument(name = "order_service::by_date", skip(self))]
  pub async fn by_date(&self, date: NaiveDate) -> Vec<Order> {
    let orders = order_query::collected_on(&self.store.snapshot(), date);
    self.latency.pause(Operation::List).await;
    orders
  }

  /// Orders due for collection today.
  pub async fn todays(&self) -> Vec<Order> {
    self.by_date(self.clock.today()).await
  }

  #[instrument(name = "order_service::filtered", skip(self))]
  pub async fn filtered(&self, filter: &OrderFilter) -> Vec<Order> {
    let orders = order_query::filter_orders(&self.store.snapshot(), filter);
    self.latency.pause(Operation::List).await;
    orders
  }

  /// Validates the checkout, numbers and timestamps the order, and appends it.
  ///
  /// Products and customer are copied into the order as given, so later
  /// catalog edits leave it untouched. Not idempotent: a retry after a timeout
  /// places a second order.
  #[instrument(name = "order_service::place", skip(self, draft), fields(items = draft.items.len(), payment = ?draft.payment_method), err(Display))]
  pub async fn place(&self, draft: OrderDraft) -> OasisResult<Order> {
    validate_order_draft(&draft, self.clock.today())?;
    let order = draft.into_order(self.next_order_number(), self.clock.now_utc());

    let appended = order.clone();
    self.store.update(move |current| {
      let mut next = current.to_vec();
      next.push(appended);
      next
    });
    info!(order_number = %order.order_number, total = %order.total, "Order placed.");

    self.latency.pause(Operation::PlaceOrder).await;
    Ok(order)
  }

  /// Applies a status and/or payment-status change as one replacement.
  ///
  /// The status change is checked against the order lifecycle first; if it is
  /// illegal nothing is written, including the payment status.
  /// Returns `Ok(None)` when no order carries that number.
  #[instrument(name = "order_service::update", skip(self), err(Display))]
  pub async fn update(&self, order_number: &str, update: OrderUpdate) -> OasisResult<Option<Order>> {
    let outcome = self.store.edit(|current| {
      let Some(idx) = current.iter().position(|o| o.order_number == order_number) else {
        return Edit::Keep(Ok(None));
      };
      let existing = &current[idx];

      if let Some(next_status) = update.status {
        if !existing.status.can_transition_to(next_status) {
          return Edit::Keep(Err(OasisError::InvalidTransition {
            order_number: order_number.to_string(),
            from: existing.status,
            to: next_status,
          }));
        }
      }
      if update.is_empty() {
        return Edit::Keep(Ok(Some(existing.clone())));
      }

      let mut changed = existing.clone();
      if let Some(status) = update.status {
        changed.status = status;
      }
      if let Some(payment_status) = update.payment_status {
        changed.payment_status = payment_status;
      }
      let mut next = current.to_vec();
      next[idx] = changed.clone();
      Edit::Replace(next, Ok(Some(changed)))
    });

    match &outcome {
      Ok(Some(order)) => info!(status = %order.status, payment_status = ?order.payment_status, "Order updated."),
      Ok(None) => warn!("Update ignored: no such order."),
      Err(e) => warn!(error = %e, "Order update rejected."),
    }

    self.latency.pause(Operation::OrderWrite).await;
    outcome
  }

  pub async fn update_status(&self, order_number: &str, status: OrderStatus) -> OasisResult<Option<Order>> {
    self.update(order_number, OrderUpdate::status(status)).await
  }

  pub async fn update_payment_status(
    &self,
    order_number: &str,
    payment_status: PaymentStatus,
  ) -> OasisResult<Option<Order>> {
    self.update(order_number, OrderUpdate::payment_status(payment_status)).await
  }
}

impl std::fmt::Debug for OrderService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("OrderService")
      .field("store", &self.store)
      .field("next_seq", &self.next_seq.load(Ordering::SeqCst))
      .finish()
  }
}
