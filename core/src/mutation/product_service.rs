// oasis/src/mutation/product_service.rs

//! Catalog reads and admin writes against the product store.

use super::latency::SharedLatency;
use super::validation::{validate_product, validate_product_draft};
use crate::config::Operation;
use crate::error::OasisResult;
use crate::model::{Category, Product, ProductDraft};
use crate::query::products as product_query;
use crate::store::{Edit, EntityStore, Snapshot};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, instrument, warn};

const ID_PREFIX: &str = "p";

#[derive(Clone)]
pub struct ProductService {
  store: EntityStore<Product>,
  latency: SharedLatency,
  next_id: Arc<AtomicU64>,
}

/// Ids look like `p7`. The counter starts past the highest numbered id so a
/// deleted product's id is never handed out again in this process.
fn next_free_number(products: &[Product]) -> u64 {
  products
    .iter()
    .filter_map(|p| p.id.strip_prefix(ID_PREFIX)?.parse::<u64>().ok())
    .max()
    .unwrap_or(0)
    + 1
}

impl ProductService {
  pub fn new(store: EntityStore<Product>, latency: SharedLatency) -> Self {
    let first = next_free_number(&store.snapshot());
    Self {
      store,
      latency,
      next_id: Arc::new(AtomicU64::new(first)),
    }
  }

  pub fn store(&self) -> &EntityStore<Product> {
    &self.store
  }

  #[instrument(name = "product_service::all", skip(self))]
  pub async fn all(&self) -> Snapshot<Product> {
    let products = self.store.snapshot();
    self.latency.pause(Operation::List).await;
    products
  }

  #[instrument(name = "product_service::by_id", skip(self))]
  pub async fn by_id(&self, id: &str) -> Option<Product> {
    let product = product_query::find_product(&self.store.snapshot(), id).cloned();
    self.latency.pause(Operation::Lookup).await;
    product
  }

  /// `None` lists every category.
  #[instrument(name = "product_service::by_category", skip(self))]
  pub async fn by_category(&self, category: Option<Category>) -> Vec<Product> {
    let products = product_query::by_category(&self.store.snapshot(), category);
    self.latency.pause(Operation::List).await;
    products
  }

  /// Validates the draft, assigns the next id and appends it to the catalog.
  ///
  /// Not idempotent: calling twice with the same draft adds two products.
  #[instrument(name = "product_service::add", skip(self, draft), fields(name = %draft.name), err(Display))]
  pub async fn add(&self, draft: ProductDraft) -> OasisResult<Product> {
    validate_product_draft(&draft)?;
    let id = format!("{}{}", ID_PREFIX, self.next_id.fetch_add(1, Ordering::SeqCst));
    let product = draft.into_product(id);

    let appended = product.clone();
    self.store.update(move |current| {
      let mut next = current.to_vec();
      next.push(appended);
      next
    });
    info!(product_id = %product.id, "Product added.");

    self.latency.pause(Operation::ProductWrite).await;
    Ok(product)
  }

  /// Replaces the whole record stored under `id`. The id itself cannot change:
  /// whatever `product.id` holds is overwritten with `id`.
  /// Returns `Ok(None)` when no product has that id.
  #[instrument(name = "product_service::update", skip(self, product), err(Display))]
  pub async fn update(&self, id: &str, mut product: Product) -> OasisResult<Option<Product>> {
    product.id = id.to_string();
    validate_product(&product)?;

    let replaced = self.store.edit(|current| {
      let Some(idx) = current.iter().position(|p| p.id == id) else {
        return Edit::Keep(None);
      };
      let mut next = current.to_vec();
      next[idx] = product.clone();
      Edit::Replace(next, Some(product))
    });
    match &replaced {
      Some(_) => info!("Product updated."),
      None => warn!("Update ignored: no such product."),
    }

    self.latency.pause(Operation::ProductWrite).await;
    Ok(replaced)
  }

  /// Returns whether a product was removed.
  #[instrument(name = "product_service::delete", skip(self))]
  pub async fn delete(&self, id: &str) -> bool {
    let removed = self.store.edit(|current| {
      if !current.iter().any(|p| p.id == id) {
        return Edit::Keep(false);
      }
      Edit::Replace(current.iter().filter(|p| p.id != id).cloned().collect(), true)
    });
    if removed {
      info!("Product deleted.");
    } else {
      warn!("Delete ignored: no such product.");
    }

    self.latency.pause(Operation::ProductWrite).await;
    removed
  }
}

impl std::fmt::Debug for ProductService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ProductService")
      .field("store", &self.store)
      .field("next_id", &self.next_id.load(Ordering::SeqCst))
      .finish()
  }
}
