// demos/storefront_app/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod services;
mod state;

use crate::config::AppConfig;
use crate::errors::Result as AppResult; // Use the app's Result alias
use crate::state::AppState;

use oasis::{Clock, SharedClock, Storefront, SystemClock};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[tokio::main]
async fn main() -> AppResult<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting Oasis storefront session...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e);
    }
  };

  let clock: SharedClock = Arc::new(SystemClock);
  let (products, orders) = if app_config.seed_demo_data {
    let products = services::seed::demo_products();
    let orders = services::seed::demo_orders(&products, clock.now(), &app_config.store_location);
    tracing::info!(products = products.len(), orders = orders.len(), "Seeding demo data.");
    (products, orders)
  } else {
    (Vec::new(), Vec::new())
  };

  let app_state = AppState {
    storefront: Storefront::new(&app_config.store_config(), products, orders, clock),
    config: app_config.clone(),
  };

  if let Err(e) = services::session::run(&app_state).await {
    tracing::error!(error = %e, "Storefront session failed.");
    return Err(e);
  }

  tracing::info!("Storefront session finished.");
  Ok(())
}
