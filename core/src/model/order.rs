// oasis/src/model/order.rs

use super::cart::{lines_total, LineItem};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_COLLECTION_LOCATION: &str = "Oasis Plant, Selous Street, Harare";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  Pending,
  Confirmed,
  Ready,
  Completed,
  Cancelled,
}

impl OrderStatus {
  pub const ALL: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Confirmed,
    OrderStatus::Ready,
    OrderStatus::Completed,
    OrderStatus::Cancelled,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Pending => "pending",
      OrderStatus::Confirmed => "confirmed",
      OrderStatus::Ready => "ready",
      OrderStatus::Completed => "completed",
      OrderStatus::Cancelled => "cancelled",
    }
  }

  pub fn is_terminal(&self) -> bool {
    matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
  }

  /// Still waiting to be collected and not yet packed: counted as a pending collection.
  pub fn awaits_collection(&self) -> bool {
    matches!(self, OrderStatus::Pending | OrderStatus::Confirmed)
  }

  /// The lifecycle only moves forward; any non-terminal state may be cancelled.
  /// Staying in the same state is always allowed.
  pub fn can_transition_to(&self, next: OrderStatus) -> bool {
    use OrderStatus::*;
    if *self == next {
      return true;
    }
    match (self, next) {
      (Pending, Confirmed) | (Pending, Ready) => true,
      (Confirmed, Ready) => true,
      (Ready, Completed) => true,
      (from, Cancelled) => !from.is_terminal(),
      _ => false,
    }
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
  Ecocash,
  Cash,
}

impl PaymentMethod {
  pub fn label(&self) -> &'static str {
    match self {
      PaymentMethod::Ecocash => "EcoCash",
      PaymentMethod::Cash => "Cash on Collection",
    }
  }

  /// EcoCash is settled at checkout; cash is paid on collection.
  pub fn initial_payment_status(&self) -> PaymentStatus {
    match self {
      PaymentMethod::Ecocash => PaymentStatus::Paid,
      PaymentMethod::Cash => PaymentStatus::Pending,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
  Paid,
  Pending,
}

/// The five fixed collection windows at the plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
  EarlyMorning,
  LateMorning,
  Midday,
  Afternoon,
  LateAfternoon,
}

impl TimeSlot {
  pub const ALL: [TimeSlot; 5] = [
    TimeSlot::EarlyMorning,
    TimeSlot::LateMorning,
    TimeSlot::Midday,
    TimeSlot::Afternoon,
    TimeSlot::LateAfternoon,
  ];

  pub fn label(&self) -> &'static str {
    match self {
      TimeSlot::EarlyMorning => "8:00 AM - 10:00 AM",
      TimeSlot::LateMorning => "10:00 AM - 12:00 PM",
      TimeSlot::Midday => "12:00 PM - 2:00 PM",
      TimeSlot::Afternoon => "2:00 PM - 4:00 PM",
      TimeSlot::LateAfternoon => "4:00 PM - 5:00 PM",
    }
  }

  /// Exact label match only.
  pub fn from_label(label: &str) -> Option<TimeSlot> {
    TimeSlot::ALL.into_iter().find(|slot| slot.label() == label)
  }
}

impl fmt::Display for TimeSlot {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
  pub first_name: String,
  pub last_name: String,
  pub phone: String,
  pub email: String,
}

impl Customer {
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDetails {
  pub date: NaiveDate,
  /// Kept as the raw label: records written elsewhere may carry labels
  /// outside the fixed set, and those must survive untouched.
  pub time_slot: String,
  pub location: String,
}

impl CollectionDetails {
  pub fn at_plant(date: NaiveDate, slot: TimeSlot) -> Self {
    Self {
      date,
      time_slot: slot.label().to_string(),
      location: DEFAULT_COLLECTION_LOCATION.to_string(),
    }
  }

  pub fn slot(&self) -> Option<TimeSlot> {
    TimeSlot::from_label(&self.time_slot)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub order_number: String,
  pub order_date: DateTime<Utc>,
  pub customer: Customer,
  /// Copies of the products as they were at checkout.
  pub items: Vec<LineItem>,
  /// Frozen at creation from `items`.
  pub total: Decimal,
  pub payment_method: PaymentMethod,
  pub payment_status: PaymentStatus,
  pub collection: CollectionDetails,
  pub status: OrderStatus,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ecocash_number: Option<String>,
}

impl Order {
  pub fn customer_name(&self) -> String {
    self.customer.full_name()
  }

  /// Recomputes the total from the embedded lines; equals `total` for any order
  /// built through `OrderDraft`.
  pub fn computed_total(&self) -> Decimal {
    lines_total(&self.items)
  }
}

/// Checkout input. The store assigns the number, timestamp, statuses and total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
  pub customer: Customer,
  pub items: Vec<LineItem>,
  pub payment_method: PaymentMethod,
  pub collection: CollectionDetails,
  #[serde(default)]
  pub ecocash_number: Option<String>,
}

impl OrderDraft {
  pub fn into_order(self, order_number: String, order_date: DateTime<Utc>) -> Order {
    let total = lines_total(&self.items);
    Order {
      order_number,
      order_date,
      customer: self.customer,
      items: self.items,
      total,
      payment_status: self.payment_method.initial_payment_status(),
      payment_method: self.payment_method,
      collection: self.collection,
      status: OrderStatus::Pending,
      ecocash_number: self.ecocash_number,
    }
  }
}

/// Fields an admin may change on an existing order, applied together or not at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
  pub status: Option<OrderStatus>,
  pub payment_status: Option<PaymentStatus>,
}

impl OrderUpdate {
  pub fn status(status: OrderStatus) -> Self {
    Self {
      status: Some(status),
      payment_status: None,
    }
  }

  pub fn payment_status(payment_status: PaymentStatus) -> Self {
    Self {
      status: None,
      payment_status: Some(payment_status),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.status.is_none() && self.payment_status.is_none()
  }
}
