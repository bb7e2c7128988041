// oasis/src/model/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Water,
  Ice,
  Accessories,
  Dispensers,
}

impl Category {
  pub const ALL: [Category; 4] = [Category::Water, Category::Ice, Category::Accessories, Category::Dispensers];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Water => "water",
      Category::Ice => "ice",
      Category::Accessories => "accessories",
      Category::Dispensers => "dispensers",
    }
  }

  /// Parses a category filter value. `"all"` (and anything unknown) yields `None`.
  pub fn parse_filter(value: &str) -> Option<Category> {
    Category::ALL.into_iter().find(|c| c.as_str() == value)
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: String,
  pub name: String,
  pub category: Category,
  pub size: String,
  pub price: Decimal,
  pub image: String,
  pub description: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub stock: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub featured: Option<bool>,
}

/// Everything an admin supplies when adding a product; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
  pub name: String,
  pub category: Category,
  pub size: String,
  pub price: Decimal,
  pub image: String,
  pub description: String,
  #[serde(default)]
  pub stock: Option<u32>,
  #[serde(default)]
  pub featured: Option<bool>,
}

impl ProductDraft {
  pub fn into_product(self, id: String) -> Product {
    Product {
      id,
      name: self.name,
      category: self.category,
      size: self.size,
      price: self.price,
      image: self.image,
      description: self.description,
      stock: self.stock,
      featured: self.featured,
    }
  }
}

impl Product {
  /// "Oasis Still Water (1.5L)" style label used in notifications and logs.
  pub fn display_name(&self) -> String {
    format!("{} ({})", self.name, self.size)
  }

  pub fn is_featured(&self) -> bool {
    self.featured.unwrap_or(false)
  }
}
