// oasis/src/model/mod.rs

//! Entity types held by the stores.
//!
//! Orders embed copies of their products and customer rather than references,
//! so editing or deleting a catalog entry never rewrites order history.

pub mod cart;
pub mod order;
pub mod product;

pub use cart::{lines_quantity, lines_total, LineItem};
pub use order::{
  CollectionDetails, Customer, Order, OrderDraft, OrderStatus, OrderUpdate, PaymentMethod, PaymentStatus, TimeSlot,
  DEFAULT_COLLECTION_LOCATION,
};
pub use product::{Category, Product, ProductDraft};
