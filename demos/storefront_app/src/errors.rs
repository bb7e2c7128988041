// demos/storefront_app/src/errors.rs

use oasis::OasisError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Store Error: {source}")]
  Store {
    #[from] // Allows conversion from oasis::OasisError
    source: OasisError,
  },

  #[error("Internal Error: {0}")]
  Internal(String), // For miscellaneous errors
}

impl AppError {
  /// Rejections are expected outcomes of bad input; everything else is a fault.
  pub fn is_rejection(&self) -> bool {
    match self {
      AppError::Store { source } => source.is_rejection(),
      AppError::NotFound(_) => true,
      AppError::Config(_) | AppError::Internal(_) => false,
    }
  }
}

// Session steps attach context with anyhow; store errors keep their own variant.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<OasisError>() {
      Ok(store_err) => AppError::Store { source: store_err },
      Err(err) => AppError::Internal(err.to_string()),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use anyhow::Context;

  #[test]
  fn store_errors_survive_added_context() {
    let failed: std::result::Result<(), OasisError> = Err(OasisError::Validation("Phone number is required".to_string()));
    let err = AppError::from(failed.context("checking out").unwrap_err());
    assert!(matches!(err, AppError::Store { source: OasisError::Validation(_) }));
    assert!(err.is_rejection());
  }

  #[test]
  fn other_failures_become_internal() {
    let err = AppError::from(None::<u32>.context("schedule date out of range").unwrap_err());
    assert!(matches!(err, AppError::Internal(ref m) if m == "schedule date out of range"));
    assert!(!err.is_rejection());
  }
}
