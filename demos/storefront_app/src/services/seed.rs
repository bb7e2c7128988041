// demos/storefront_app/src/services/seed.rs

//! The demo catalog and order book the storefront starts with.

use chrono::{DateTime, Days, Duration, FixedOffset, Utc};
use oasis::{
  Category, CollectionDetails, Customer, LineItem, Order, OrderStatus, PaymentMethod, PaymentStatus, Product,
};
use rust_decimal::Decimal;

#[allow(clippy::too_many_arguments)]
fn product(
  id: &str,
  name: &str,
  category: Category,
  size: &str,
  price_cents: i64,
  image: &str,
  description: &str,
  stock: u32,
) -> Product {
  Product {
    id: id.to_string(),
    name: name.to_string(),
    category,
    size: size.to_string(),
    price: Decimal::new(price_cents, 2),
    image: format!("assets/products/{}", image),
    description: description.to_string(),
    stock: Some(stock),
    featured: None,
  }
}

pub fn demo_products() -> Vec<Product> {
  vec![
    product(
      "p1",
      "Oasis Sport Water",
      Category::Water,
      "500ml",
      50,
      "oasis-sport-500ml.jpg",
      "Perfect for hydration on the go. Pure, refreshing water in a convenient size.",
      100,
    ),
    product(
      "p2",
      "Oasis Still Water",
      Category::Water,
      "1.5L",
      100,
      "oasis-1.5l.jpg",
      "Pure refreshing water for everyday hydration. Ideal for home and office.",
      150,
    ),
    product(
      "p3",
      "Oasis Still Water",
      Category::Water,
      "5L",
      250,
      "oasis-5l.jpg",
      "Ideal for home use. Great value for daily hydration needs.",
      80,
    ),
    product(
      "p4",
      "Oasis Still Water",
      Category::Water,
      "10L",
      450,
      "oasis-10l.jpg",
      "Great value for families. Perfect for larger households.",
      60,
    ),
    product(
      "p5",
      "Oasis Purified Water",
      Category::Water,
      "19L",
      800,
      "oasis-19l.jpg",
      "Bulk water for offices and events. Premium quality purified water.",
      50,
    ),
    product(
      "p6",
      "Pluto Ice Cubes",
      Category::Ice,
      "2kg",
      150,
      "pluto-ice-2kg.jpg",
      "Crystal clear ice cubes for your drinks. Made from purified water.",
      120,
    ),
    product(
      "p7",
      "Pluto Ice Cubes",
      Category::Ice,
      "5kg",
      350,
      "pluto-ice-5kg.jpg",
      "Perfect for events and parties. High-quality crystal clear ice.",
      90,
    ),
    product(
      "p8",
      "Pluto Ice Cubes",
      Category::Ice,
      "8kg",
      500,
      "pluto-ice-8kg.jpg",
      "Bulk ice for parties and large gatherings. Premium quality.",
      70,
    ),
    product(
      "p9",
      "Keep Bag Cooler",
      Category::Accessories,
      "Standard",
      1000,
      "cooler-bag.jpg",
      "Insulated cooler bag to keep your beverages cold. Durable and portable.",
      40,
    ),
    product(
      "p10",
      "Water Dispenser",
      Category::Dispensers,
      "Hot & Cold",
      4500,
      "dispenser.jpg",
      "Dual temperature dispenser for convenience. Hot and cold water on demand.",
      25,
    ),
  ]
}

struct DemoOrder {
  number: &'static str,
  hours_ago: i64,
  customer: (&'static str, &'static str, &'static str),
  product_id: &'static str,
  quantity: u32,
  payment_method: PaymentMethod,
  payment_status: PaymentStatus,
  collection_day_offset: i64,
  time_slot: &'static str,
  status: OrderStatus,
}

// The demo book was captured with short slot labels ("10:00 AM"), which match
// none of the schedule slots; they are kept as captured.
const DEMO_ORDERS: [DemoOrder; 5] = [
  DemoOrder {
    number: "OW-2026-001",
    hours_ago: 2,
    customer: ("Tendai", "Moyo", "+263771234567"),
    product_id: "p5",
    quantity: 3,
    payment_method: PaymentMethod::Ecocash,
    payment_status: PaymentStatus::Paid,
    collection_day_offset: 1,
    time_slot: "10:00 AM",
    status: OrderStatus::Confirmed,
  },
  DemoOrder {
    number: "OW-2026-002",
    hours_ago: 5,
    customer: ("Chipo", "Ndlovu", "+263772345678"),
    product_id: "p7",
    quantity: 4,
    payment_method: PaymentMethod::Cash,
    payment_status: PaymentStatus::Pending,
    collection_day_offset: 1,
    time_slot: "2:00 PM",
    status: OrderStatus::Pending,
  },
  DemoOrder {
    number: "OW-2026-003",
    hours_ago: 24,
    customer: ("Tinashe", "Mhuru", "+263773456789"),
    product_id: "p2",
    quantity: 12,
    payment_method: PaymentMethod::Ecocash,
    payment_status: PaymentStatus::Paid,
    collection_day_offset: 0,
    time_slot: "12:00 PM",
    status: OrderStatus::Ready,
  },
  DemoOrder {
    number: "OW-2026-004",
    hours_ago: 30,
    customer: ("Rumbi", "Nyoni", "+263774567890"),
    product_id: "p10",
    quantity: 1,
    payment_method: PaymentMethod::Cash,
    payment_status: PaymentStatus::Paid,
    collection_day_offset: -1,
    time_slot: "4:00 PM",
    status: OrderStatus::Completed,
  },
  DemoOrder {
    number: "OW-2026-005",
    hours_ago: 1,
    customer: ("Farai", "Chikwanha", "+263775678901"),
    product_id: "p1",
    quantity: 24,
    payment_method: PaymentMethod::Ecocash,
    payment_status: PaymentStatus::Paid,
    collection_day_offset: 7,
    time_slot: "8:00 AM",
    status: OrderStatus::Confirmed,
  },
];

/// Five orders placed over the last day and a bit, relative to `now`.
/// Each embeds a copy of its catalog product. Orders whose product is missing
/// from `catalog` are skipped.
pub fn demo_orders(catalog: &[Product], now: DateTime<FixedOffset>, location: &str) -> Vec<Order> {
  let today = now.date_naive();
  DEMO_ORDERS
    .iter()
    .filter_map(|demo| {
      let product = catalog.iter().find(|p| p.id == demo.product_id)?.clone();
      let collection_date = if demo.collection_day_offset >= 0 {
        today.checked_add_days(Days::new(demo.collection_day_offset.unsigned_abs()))
      } else {
        today.checked_sub_days(Days::new(demo.collection_day_offset.unsigned_abs()))
      }?;
      let (first_name, last_name, phone) = demo.customer;
      let items = vec![LineItem::new(product, demo.quantity)];
      let total = oasis::model::lines_total(&items);

      Some(Order {
        order_number: demo.number.to_string(),
        order_date: now.with_timezone(&Utc) - Duration::hours(demo.hours_ago),
        customer: Customer {
          first_name: first_name.to_string(),
          last_name: last_name.to_string(),
          phone: phone.to_string(),
          email: format!("{}@example.com", first_name.to_lowercase()),
        },
        items,
        total,
        payment_method: demo.payment_method,
        payment_status: demo.payment_status,
        collection: CollectionDetails {
          date: collection_date,
          time_slot: demo.time_slot.to_string(),
          location: location.to_string(),
        },
        status: demo.status,
        ecocash_number: (demo.payment_method == PaymentMethod::Ecocash).then(|| phone.to_string()),
      })
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  #[test]
  fn demo_book_embeds_catalog_products() {
    let now = FixedOffset::east_opt(2 * 3600)
      .unwrap()
      .with_ymd_and_hms(2026, 10, 19, 9, 0, 0)
      .unwrap();
    let catalog = demo_products();
    let orders = demo_orders(&catalog, now, "Oasis Plant, Selous Street, Harare");

    assert_eq!(catalog.len(), 10);
    assert_eq!(orders.len(), 5);
    let totals: Vec<Decimal> = orders.iter().map(|o| o.total).collect();
    let expected: Vec<Decimal> = [2400, 1400, 1200, 4500, 1200].into_iter().map(|c| Decimal::new(c, 2)).collect();
    assert_eq!(totals, expected);
    assert!(orders.iter().all(|o| o.total == o.computed_total()));
  }

  #[test]
  fn missing_catalog_products_skip_their_orders() {
    let now = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let catalog: Vec<Product> = demo_products().into_iter().filter(|p| p.id != "p10").collect();
    assert_eq!(demo_orders(&catalog, now, "here").len(), 4);
  }
}
