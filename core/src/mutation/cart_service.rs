// oasis/src/mutation/cart_service.rs

//! The shopper's cart: one ordered list of lines, unique by product id.
//!
//! Cart operations are local and take effect immediately; there is no
//! simulated latency here.

use crate::config::CartPersistence;
use crate::model::{lines_quantity, lines_total, LineItem, Product};
use crate::store::{Edit, EntityStore, JsonFileBacking, Snapshot, StoreBacking, Subscription};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, event, Level};

const STORE_NAME: &str = "cart";

#[derive(Clone, Debug)]
pub struct CartService {
  store: EntityStore<LineItem>,
}

impl CartService {
  pub fn in_memory() -> Self {
    Self {
      store: EntityStore::new(STORE_NAME, Vec::new()),
    }
  }

  pub fn with_store(store: EntityStore<LineItem>) -> Self {
    Self { store }
  }

  /// Builds the cart according to `persistence`.
  pub fn from_config(persistence: &CartPersistence) -> Self {
    match persistence {
      CartPersistence::Disabled => Self::in_memory(),
      CartPersistence::DisabledClearing { stale_file } => {
        if let Err(e) = JsonFileBacking::<LineItem>::new(stale_file).clear() {
          event!(Level::WARN, error = %e, "Could not remove stale cart file.");
        }
        Self::in_memory()
      }
      CartPersistence::File(path) => {
        let backing: Arc<dyn StoreBacking<LineItem>> = Arc::new(JsonFileBacking::new(path));
        Self::with_store(EntityStore::with_backing(STORE_NAME, Vec::new(), backing))
      }
    }
  }

  pub fn store(&self) -> &EntityStore<LineItem> {
    &self.store
  }

  pub fn items(&self) -> Snapshot<LineItem> {
    self.store.snapshot()
  }

  pub fn subscribe<F>(&self, handler: F) -> Subscription
  where
    F: Fn(&Snapshot<LineItem>) + Send + Sync + 'static,
  {
    self.store.subscribe(handler)
  }

  /// Adds `quantity` of `product`, merging into an existing line for the same id.
  /// A zero quantity changes nothing; a merged quantity caps at `u32::MAX`.
  pub fn add(&self, product: &Product, quantity: u32) {
    if quantity == 0 {
      debug!(product_id = %product.id, "Ignoring add of zero quantity.");
      return;
    }
    self.store.update(|current| {
      if current.iter().any(|item| item.product_id() == product.id) {
        current
          .iter()
          .map(|item| {
            if item.product_id() == product.id {
              LineItem::new(item.product.clone(), item.quantity.saturating_add(quantity))
            } else {
              item.clone()
            }
          })
          .collect()
      } else {
        let mut next = current.to_vec();
        next.push(LineItem::new(product.clone(), quantity));
        next
      }
    });
    debug!(product_id = %product.id, quantity, "Added to cart.");
  }

  /// Sets the quantity of an existing line; zero removes it. Unknown ids are ignored.
  pub fn update_quantity(&self, product_id: &str, quantity: u32) {
    if quantity == 0 {
      self.remove(product_id);
      return;
    }
    self.set_quantity_where_present(product_id, |_| quantity);
  }

  pub fn remove(&self, product_id: &str) {
    self.store.edit(|current| {
      if !current.iter().any(|item| item.product_id() == product_id) {
        return Edit::Keep(());
      }
      Edit::Replace(
        current.iter().filter(|item| item.product_id() != product_id).cloned().collect(),
        (),
      )
    });
  }

  pub fn clear(&self) {
    self.store.replace(Vec::new());
  }

  pub fn increase(&self, product_id: &str) {
    self.set_quantity_where_present(product_id, |q| q.saturating_add(1));
  }

  /// Takes one away; a line at quantity 1 is removed rather than left at 0.
  pub fn decrease(&self, product_id: &str) {
    self.store.edit(|current| {
      let Some(line) = current.iter().find(|item| item.product_id() == product_id) else {
        return Edit::Keep(());
      };
      let next = if line.quantity > 1 {
        current
          .iter()
          .map(|item| {
            if item.product_id() == product_id {
              LineItem::new(item.product.clone(), item.quantity - 1)
            } else {
              item.clone()
            }
          })
          .collect()
      } else {
        current.iter().filter(|item| item.product_id() != product_id).cloned().collect()
      };
      Edit::Replace(next, ())
    });
  }

  pub fn total(&self) -> Decimal {
    lines_total(&self.items())
  }

  /// Sum of quantities across all lines, capped at `u32::MAX`.
  pub fn item_count(&self) -> u32 {
    lines_quantity(&self.items())
  }

  /// 0 when the product is not in the cart.
  pub fn quantity_of(&self, product_id: &str) -> u32 {
    self
      .items()
      .iter()
      .find(|item| item.product_id() == product_id)
      .map_or(0, |item| item.quantity)
  }

  pub fn is_empty(&self) -> bool {
    self.items().is_empty()
  }

  fn set_quantity_where_present(&self, product_id: &str, f: impl Fn(u32) -> u32) {
    self.store.edit(|current| {
      if !current.iter().any(|item| item.product_id() == product_id) {
        return Edit::Keep(());
      }
      let next = current
        .iter()
        .map(|item| {
          if item.product_id() == product_id {
            LineItem::new(item.product.clone(), f(item.quantity))
          } else {
            item.clone()
          }
        })
        .collect();
      Edit::Replace(next, ())
    });
  }
}
