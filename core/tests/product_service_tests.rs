// tests/product_service_tests.rs
mod common;

use common::*;
use oasis::{Category, OasisError, Product, ProductDraft, Snapshot};

fn draft(name: &str, price_cents: i64) -> ProductDraft {
  ProductDraft {
    name: name.to_string(),
    category: Category::Accessories,
    size: "Standard".to_string(),
    price: cents(price_cents),
    image: "assets/products/bag.jpg".to_string(),
    description: "Keeps ice frozen for hours.".to_string(),
    stock: Some(40),
    featured: Some(true),
  }
}

#[tokio::test]
async fn new_products_get_ids_past_the_highest_existing_one() {
  setup_tracing();
  let shop = storefront(catalog(), Vec::new(), afternoon_now());

  let first = shop.products.add(draft("Cooler Bag", 1000)).await.unwrap();
  let second = shop.products.add(draft("Cooler Bag XL", 1500)).await.unwrap();

  assert_eq!(first.id, "p11");
  assert_eq!(second.id, "p12");
  assert_eq!(shop.products.all().await.len(), 9);
  assert_eq!(shop.products.by_id("p12").await.unwrap().name, "Cooler Bag XL");
}

#[tokio::test]
async fn invalid_drafts_are_rejected_before_any_write() {
  let shop = storefront(catalog(), Vec::new(), afternoon_now());
  let version = shop.products.store().version();

  for bad in [draft("  ", 1000), draft("Bag", 0), draft("Bag", -100)] {
    let err = shop.products.add(bad).await.unwrap_err();
    assert!(matches!(err, OasisError::Validation(_)));
  }
  let mut no_image = draft("Bag", 1000);
  no_image.image = String::new();
  assert!(shop.products.add(no_image).await.is_err());

  assert_eq!(shop.products.store().version(), version);
}

#[tokio::test]
async fn update_replaces_the_record_but_keeps_its_id() {
  let shop = storefront(catalog(), Vec::new(), afternoon_now());
  let mut changed = bulk_water();
  changed.id = "something-else".to_string();
  changed.price = cents(900);

  let updated = shop.products.update("p5", changed).await.unwrap().unwrap();

  assert_eq!(updated.id, "p5");
  let stored = shop.products.by_id("p5").await.unwrap();
  assert_eq!(stored.price, cents(900));
  assert!(shop.products.by_id("something-else").await.is_none());
}

#[tokio::test]
async fn missing_products_are_reported_not_raised() {
  let shop = storefront(catalog(), Vec::new(), afternoon_now());
  let version = shop.products.store().version();

  assert!(shop.products.update("p404", bulk_water()).await.unwrap().is_none());
  assert!(!shop.products.delete("p404").await);
  assert!(shop.products.by_id("p404").await.is_none());
  assert_eq!(shop.products.store().version(), version);
}

#[tokio::test]
async fn category_listing_follows_deletes() {
  let shop = storefront(catalog(), Vec::new(), afternoon_now());
  let (seen, handler) = recorder::<Snapshot<Product>>();
  let _sub = shop.products.store().subscribe(handler);

  assert!(shop.products.delete("p6").await);

  let ice = shop.products.by_category(Some(Category::Ice)).await;
  assert_eq!(ice.len(), 1);
  assert_eq!(ice[0].id, "p7");
  assert_eq!(shop.products.by_category(None).await.len(), 6);
  assert_eq!(seen.lock().len(), 2);
}
