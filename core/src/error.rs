// oasis/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::model::OrderStatus;

#[derive(Debug, Error)]
pub enum OasisError {
  /// Input rejected before it reached a store (required fields, positive price, minimum lengths).
  #[error("Validation error: {0}")]
  Validation(String),

  /// A durable backing failed to read or write. The store itself only logs these;
  /// they surface when a backing is driven directly.
  #[error("Storage error while {context}. Source: {source}")]
  Storage {
    context: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Order '{order_number}' cannot move from {from} to {to}")]
  InvalidTransition {
    order_number: String,
    from: OrderStatus,
    to: OrderStatus,
  },

  #[error("Internal Oasis error: {0}")]
  Internal(String),
}

impl OasisError {
  pub fn storage(context: impl Into<String>, source: impl Into<AnyhowError>) -> Self {
    OasisError::Storage {
      context: context.into(),
      source: source.into(),
    }
  }

  /// True for errors the caller caused and can fix by changing the input.
  pub fn is_rejection(&self) -> bool {
    matches!(self, OasisError::Validation(_) | OasisError::InvalidTransition { .. })
  }
}

pub type OasisResult<T, E = OasisError> = std::result::Result<T, E>;
