// oasis/src/config.rs

//! Composition-time settings for the stores and services.

use std::path::PathBuf;
use std::time::Duration;

/// Kinds of simulated remote call, each with its own fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
  /// Listing or filtering a whole collection.
  List,
  /// Fetching a single entity by id or number.
  Lookup,
  /// Adding, replacing or deleting a product.
  ProductWrite,
  /// Changing order or payment status.
  OrderWrite,
  /// Placing an order (includes simulated payment processing).
  PlaceOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
  pub list: Duration,
  pub lookup: Duration,
  pub product_write: Duration,
  pub order_write: Duration,
  pub place_order: Duration,
}

impl Default for LatencyProfile {
  fn default() -> Self {
    Self {
      list: Duration::from_millis(300),
      lookup: Duration::from_millis(200),
      product_write: Duration::from_millis(200),
      order_write: Duration::from_millis(200),
      place_order: Duration::from_millis(2000),
    }
  }
}

impl LatencyProfile {
  pub fn zero() -> Self {
    Self {
      list: Duration::ZERO,
      lookup: Duration::ZERO,
      product_write: Duration::ZERO,
      order_write: Duration::ZERO,
      place_order: Duration::ZERO,
    }
  }

  pub fn for_operation(&self, op: Operation) -> Duration {
    match op {
      Operation::List => self.list,
      Operation::Lookup => self.lookup,
      Operation::ProductWrite => self.product_write,
      Operation::OrderWrite => self.order_write,
      Operation::PlaceOrder => self.place_order,
    }
  }

  /// Every delay multiplied by `percent / 100`.
  pub fn scaled(&self, percent: u32) -> Self {
    let scale = |d: Duration| d * percent / 100;
    Self {
      list: scale(self.list),
      lookup: scale(self.lookup),
      product_write: scale(self.product_write),
      order_write: scale(self.order_write),
      place_order: scale(self.place_order),
    }
  }
}

/// Whether the cart survives a restart. Decided once, when the cart is built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CartPersistence {
  /// Memory only.
  #[default]
  Disabled,
  /// Memory only, and a file left at `stale_file` by an earlier run is removed.
  DisabledClearing { stale_file: PathBuf },
  /// Mirror the cart to a JSON file.
  File(PathBuf),
}

#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
  pub latency: LatencyProfile,
  pub cart_persistence: CartPersistence,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_the_storefront_timings() {
    let profile = LatencyProfile::default();
    assert_eq!(profile.for_operation(Operation::List), Duration::from_millis(300));
    assert_eq!(profile.for_operation(Operation::PlaceOrder), Duration::from_secs(2));
  }

  #[test]
  fn scaling_applies_to_every_operation() {
    let half = LatencyProfile::default().scaled(50);
    assert_eq!(half.list, Duration::from_millis(150));
    assert_eq!(half.place_order, Duration::from_millis(1000));
    assert_eq!(LatencyProfile::default().scaled(0), LatencyProfile::zero());
  }
}
