// oasis/src/query/products.rs

use crate::model::{Category, Product};

/// `None` means every category.
pub fn by_category(products: &[Product], category: Option<Category>) -> Vec<Product> {
  match category {
    None => products.to_vec(),
    Some(category) => products.iter().filter(|p| p.category == category).cloned().collect(),
  }
}

pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
  products.iter().find(|p| p.id == id)
}

/// The first `limit` products in catalog order, as shown on the home page.
pub fn featured(products: &[Product], limit: usize) -> Vec<Product> {
  products.iter().take(limit).cloned().collect()
}

/// Products explicitly flagged as featured, in catalog order.
pub fn flagged_featured(products: &[Product]) -> Vec<Product> {
  products.iter().filter(|p| p.is_featured()).cloned().collect()
}
