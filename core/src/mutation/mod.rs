// oasis/src/mutation/mod.rs

//! Writes against the stores. Each write builds a complete replacement
//! collection, hands it to the store (which notifies subscribers at once),
//! and then acknowledges after the operation's simulated latency.

pub mod cart_service;
pub mod checkout;
pub mod latency;
pub mod order_service;
pub mod product_service;
pub mod validation;

pub use cart_service::CartService;
pub use checkout::{checkout, CheckoutRequest};
pub use latency::{Latency, NoLatency, SharedLatency, SimulatedLatency};
pub use order_service::OrderService;
pub use product_service::ProductService;
