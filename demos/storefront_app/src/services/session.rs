// demos/storefront_app/src/services/session.rs

//! A scripted walk through the storefront: a shopper browses and checks out,
//! then the back office processes the order and reviews the day.

use crate::errors::{AppError, Result};
use crate::state::AppState;
use anyhow::Context;
use chrono::Days;
use oasis::query::page;
use oasis::query::products::featured;
use oasis::query::schedule::unscheduled;
use oasis::{
  checkout, Category, CheckoutRequest, CollectionDetails, Customer, DashboardStats, OrderFilter, OrderStatus,
  OrderUpdate, PaymentMethod, PaymentStatus, TimeSlot,
};
use tracing::{info, instrument, warn, Instrument};

const FEATURED_COUNT: usize = 4;
const RECENT_COUNT: usize = 3;

#[instrument(name = "session", skip_all)]
pub async fn run(state: &AppState) -> Result<()> {
  let shop = &state.storefront;

  let watcher = shop.dashboard.watch(|stats: &DashboardStats| {
    info!(
      orders_today = stats.orders_today,
      revenue_this_week = %stats.revenue_this_week,
      pending_collections = stats.pending_collections,
      total_products = stats.total_products,
      "Dashboard updated."
    );
  });

  let order_number = shopper(state).instrument(tracing::info_span!("shopper")).await?;
  back_office(state, &order_number)
    .instrument(tracing::info_span!("back_office"))
    .await?;

  watcher.unsubscribe();
  Ok(())
}

async fn shopper(state: &AppState) -> Result<String> {
  let shop = &state.storefront;

  let catalog = shop.products.all().await;
  for product in featured(&catalog, FEATURED_COUNT) {
    info!(id = %product.id, price = %product.price, "Featured: {}", product.display_name());
  }
  let second_page = page(&catalog, 1, FEATURED_COUNT);
  info!(count = second_page.len(), "Catalog page 2.");
  let ice = shop.products.by_category(Some(Category::Ice)).await;
  info!(count = ice.len(), "Browsing the ice range.");

  let bulk_water = shop
    .products
    .by_id("p5")
    .await
    .ok_or_else(|| AppError::NotFound("product p5".to_string()))?;
  let ice_5kg = shop
    .products
    .by_id("p7")
    .await
    .ok_or_else(|| AppError::NotFound("product p7".to_string()))?;

  shop.cart.add(&bulk_water, 2);
  shop.cart.add(&ice_5kg, 2);
  shop.cart.increase(&bulk_water.id);
  info!(items = shop.cart.item_count(), total = %shop.cart.total(), "Cart ready for checkout.");

  let tomorrow = shop
    .orders
    .clock()
    .today()
    .checked_add_days(Days::new(1))
    .context("collection date out of range")?;
  let mut collection = CollectionDetails::at_plant(tomorrow, TimeSlot::LateMorning);
  collection.location = state.config.store_location.clone();

  let request = CheckoutRequest {
    customer: Customer {
      first_name: "Nyasha".to_string(),
      last_name: "Gumbo".to_string(),
      phone: "+263776789012".to_string(),
      email: "nyasha@example.com".to_string(),
    },
    payment_method: PaymentMethod::Cash,
    collection,
    ecocash_number: None,
  };
  let order = checkout(&shop.cart, &shop.orders, request).await?;
  info!(
    order_number = %order.order_number,
    total = %order.total,
    slot = %order.collection.time_slot,
    "Order placed; collect at {}.",
    order.collection.location
  );
  Ok(order.order_number)
}

async fn back_office(state: &AppState, order_number: &str) -> Result<()> {
  let shop = &state.storefront;

  shop.orders.update_status(order_number, OrderStatus::Confirmed).await?;
  // Packed and paid at the counter: both fields change in one write.
  let update = OrderUpdate {
    status: Some(OrderStatus::Ready),
    payment_status: Some(PaymentStatus::Paid),
  };
  match shop.orders.update(order_number, update).await? {
    Some(order) => info!(status = %order.status, payment = ?order.payment_status, "Order ready for collection."),
    None => return Err(AppError::NotFound(format!("order {}", order_number))),
  }

  // Completed orders stay completed.
  if let Err(e) = shop.orders.update_status("OW-2026-004", OrderStatus::Pending).await {
    let e = AppError::from(e);
    if !e.is_rejection() {
      return Err(e);
    }
    warn!(error = %e, "Back office change refused.");
  }

  let ready = shop
    .orders
    .filtered(&OrderFilter::default().with_status(OrderStatus::Ready))
    .await;
  info!(count = ready.len(), "Orders ready for collection.");
  let found = shop.orders.filtered(&OrderFilter::default().with_search("chipo")).await;
  info!(matches = found.len(), "Search for 'chipo'.");

  let stats = shop.dashboard.stats();
  let encoded = serde_json::to_string(&stats).context("encoding dashboard snapshot")?;
  info!(stats = %encoded, "Dashboard snapshot.");
  for order in shop.dashboard.recent_orders(RECENT_COUNT).await {
    info!(order_number = %order.order_number, customer = %order.customer_name(), status = %order.status, "Recent order.");
  }

  let tomorrow = shop
    .orders
    .clock()
    .today()
    .checked_add_days(Days::new(1))
    .context("schedule date out of range")?;
  for group in shop.dashboard.schedule_for(tomorrow).await {
    info!(slot = group.slot.label(), count = group.count, severity = ?group.severity, "Collection slot.");
  }
  let off_schedule = unscheduled(&shop.orders.by_date(tomorrow).await);
  if !off_schedule.is_empty() {
    warn!(count = off_schedule.len(), "Orders with an unrecognised time slot are missing from the schedule.");
  }
  Ok(())
}
