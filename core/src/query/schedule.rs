// oasis/src/query/schedule.rs

//! The collection-schedule view: orders for a day bucketed into the five
//! fixed time slots, each with a load severity.

use crate::model::{Order, TimeSlot};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
  Low,
  Medium,
  High,
}

impl SeverityTier {
  pub const MEDIUM_FROM: usize = 5;
  pub const HIGH_FROM: usize = 9;

  /// Below 5 is low, 5 through 8 is medium, above 8 is high.
  pub fn for_count(count: usize) -> SeverityTier {
    if count < Self::MEDIUM_FROM {
      SeverityTier::Low
    } else if count < Self::HIGH_FROM {
      SeverityTier::Medium
    } else {
      SeverityTier::High
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotGroup {
  pub slot: TimeSlot,
  pub orders: Vec<Order>,
  pub count: usize,
  pub severity: SeverityTier,
}

/// One group per fixed slot, in slot order. Orders whose label is not exactly
/// one of the five slot labels belong to no group.
pub fn group_by_time_slot(orders: &[Order]) -> Vec<SlotGroup> {
  TimeSlot::ALL
    .into_iter()
    .map(|slot| {
      let slot_orders: Vec<Order> = orders
        .iter()
        .filter(|o| o.collection.time_slot == slot.label())
        .cloned()
        .collect();
      let count = slot_orders.len();
      SlotGroup {
        slot,
        orders: slot_orders,
        count,
        severity: SeverityTier::for_count(count),
      }
    })
    .collect()
}

/// Orders that `group_by_time_slot` leaves out.
pub fn unscheduled(orders: &[Order]) -> Vec<Order> {
  orders.iter().filter(|o| o.collection.slot().is_none()).cloned().collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn severity_boundaries() {
    assert_eq!(SeverityTier::for_count(0), SeverityTier::Low);
    assert_eq!(SeverityTier::for_count(4), SeverityTier::Low);
    assert_eq!(SeverityTier::for_count(5), SeverityTier::Medium);
    assert_eq!(SeverityTier::for_count(8), SeverityTier::Medium);
    assert_eq!(SeverityTier::for_count(9), SeverityTier::High);
  }
}
