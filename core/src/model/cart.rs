// oasis/src/model/cart.rs

use super::product::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product snapshot paired with a quantity. Used both for cart lines and,
/// frozen, for order lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
  pub product: Product,
  pub quantity: u32,
}

impl LineItem {
  pub fn new(product: Product, quantity: u32) -> Self {
    Self { product, quantity }
  }

  pub fn product_id(&self) -> &str {
    &self.product.id
  }

  pub fn line_total(&self) -> Decimal {
    self.product.price * Decimal::from(self.quantity)
  }
}

/// Σ(price × quantity). Always recomputed from the lines, never cached.
pub fn lines_total(items: &[LineItem]) -> Decimal {
  items.iter().map(LineItem::line_total).sum()
}

pub fn lines_quantity(items: &[LineItem]) -> u32 {
  items.iter().fold(0u32, |acc, item| acc.saturating_add(item.quantity))
}
