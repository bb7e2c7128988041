// demos/storefront_app/src/services/mod.rs
pub mod seed;
pub mod session;
