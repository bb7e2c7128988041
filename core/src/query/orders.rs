// oasis/src/query/orders.rs

use crate::clock::local_day;
use crate::model::{Order, OrderStatus, PaymentMethod};
use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// The back-office order list filters. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilter {
  pub status: Option<OrderStatus>,
  pub payment_method: Option<PaymentMethod>,
  pub search: Option<String>,
}

impl OrderFilter {
  pub fn with_status(mut self, status: OrderStatus) -> Self {
    self.status = Some(status);
    self
  }

  pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
    self.payment_method = Some(method);
    self
  }

  pub fn with_search(mut self, text: impl Into<String>) -> Self {
    self.search = Some(text.into());
    self
  }

  pub fn matches(&self, order: &Order) -> bool {
    self.status.map_or(true, |s| order.status == s)
      && self.payment_method.map_or(true, |m| order.payment_method == m)
      && self.search.as_deref().map_or(true, |text| matches_search(order, text))
  }
}

/// Order number and customer name match case-insensitively; the phone number
/// matches as a plain substring. Surrounding whitespace is ignored, and blank
/// text matches every order.
pub fn matches_search(order: &Order, text: &str) -> bool {
  let text = text.trim();
  if text.is_empty() {
    return true;
  }
  let needle = text.to_lowercase();
  order.order_number.to_lowercase().contains(&needle)
    || order.customer_name().to_lowercase().contains(&needle)
    || order.customer.phone.contains(text)
}

pub fn filter_orders(orders: &[Order], filter: &OrderFilter) -> Vec<Order> {
  orders.iter().filter(|o| filter.matches(o)).cloned().collect()
}

pub fn by_status(orders: &[Order], status: OrderStatus) -> Vec<Order> {
  orders.iter().filter(|o| o.status == status).cloned().collect()
}

pub fn by_payment_method(orders: &[Order], method: PaymentMethod) -> Vec<Order> {
  orders.iter().filter(|o| o.payment_method == method).cloned().collect()
}

/// Orders due for collection on `date`.
pub fn collected_on(orders: &[Order], date: NaiveDate) -> Vec<Order> {
  orders.iter().filter(|o| o.collection.date == date).cloned().collect()
}

/// Orders whose timestamp falls on `day` in `offset`.
pub fn placed_on(orders: &[Order], day: NaiveDate, offset: &FixedOffset) -> Vec<Order> {
  orders
    .iter()
    .filter(|o| local_day(o.order_date, offset) == day)
    .cloned()
    .collect()
}

pub fn find_order<'a>(orders: &'a [Order], order_number: &str) -> Option<&'a Order> {
  orders.iter().find(|o| o.order_number == order_number)
}

/// Newest first, at most `count`.
pub fn recent(orders: &[Order], count: usize) -> Vec<Order> {
  let mut sorted = orders.to_vec();
  sorted.sort_by(|a, b| b.order_date.cmp(&a.order_date));
  sorted.truncate(count);
  sorted
}
