// demos/storefront_app/src/state.rs
use crate::config::AppConfig;
use oasis::Storefront;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
  pub storefront: Storefront,
  pub config: Arc<AppConfig>, // Share loaded config
}
