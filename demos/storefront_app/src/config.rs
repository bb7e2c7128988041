// demos/storefront_app/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use oasis::{CartPersistence, LatencyProfile, StoreConfig, DEFAULT_COLLECTION_LOCATION};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// 100 keeps the stock delays, 0 disables them.
  pub latency_scale_percent: u32,
  pub cart_persistence: CartPersistenceMode,
  pub cart_store_path: PathBuf,
  pub seed_demo_data: bool,
  pub store_location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartPersistenceMode {
  Off,
  File,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let latency_scale_percent = get_env("LATENCY_SCALE_PERCENT")
      .unwrap_or_else(|_| "100".to_string())
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid LATENCY_SCALE_PERCENT: {}", e)))?;

    let cart_persistence = match get_env("CART_PERSISTENCE")
      .unwrap_or_else(|_| "off".to_string())
      .to_lowercase()
      .as_str()
    {
      "off" => CartPersistenceMode::Off,
      "file" => CartPersistenceMode::File,
      other => {
        return Err(AppError::Config(format!(
          "Invalid CART_PERSISTENCE value '{}': expected 'off' or 'file'",
          other
        )))
      }
    };
    let cart_store_path = PathBuf::from(get_env("CART_STORE_PATH").unwrap_or_else(|_| "oasis-cart.json".to_string()));

    let seed_demo_data = get_env("SEED_DEMO_DATA")
      .unwrap_or_else(|_| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DEMO_DATA value: {}", e)))?;

    let store_location = get_env("STORE_LOCATION").unwrap_or_else(|_| DEFAULT_COLLECTION_LOCATION.to_string());

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      latency_scale_percent,
      cart_persistence,
      cart_store_path,
      seed_demo_data,
      store_location,
    })
  }

  /// The core store settings this configuration implies. With persistence off
  /// a cart file left by an earlier run is removed.
  pub fn store_config(&self) -> StoreConfig {
    let cart_persistence = match self.cart_persistence {
      CartPersistenceMode::Off => CartPersistence::DisabledClearing {
        stale_file: self.cart_store_path.clone(),
      },
      CartPersistenceMode::File => CartPersistence::File(self.cart_store_path.clone()),
    };
    StoreConfig {
      latency: LatencyProfile::default().scaled(self.latency_scale_percent),
      cart_persistence,
    }
  }
}
