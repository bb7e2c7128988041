// oasis/src/mutation/latency.rs

//! Artificial delay standing in for a remote call.

use crate::config::{LatencyProfile, Operation};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{event, Level};

#[async_trait]
pub trait Latency: Send + Sync {
  /// Completes once the simulated round trip for `op` has elapsed.
  async fn pause(&self, op: Operation);
}

pub type SharedLatency = Arc<dyn Latency>;

/// Sleeps on the tokio timer for the profile's duration.
#[derive(Debug, Clone, Default)]
pub struct SimulatedLatency {
  profile: LatencyProfile,
}

impl SimulatedLatency {
  pub fn new(profile: LatencyProfile) -> Self {
    Self { profile }
  }

  pub fn profile(&self) -> &LatencyProfile {
    &self.profile
  }
}

#[async_trait]
impl Latency for SimulatedLatency {
  async fn pause(&self, op: Operation) {
    let delay = self.profile.for_operation(op);
    if delay.is_zero() {
      return;
    }
    event!(Level::TRACE, operation = ?op, delay_ms = delay.as_millis() as u64, "Simulating remote call.");
    tokio::time::sleep(delay).await;
  }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
  async fn pause(&self, _op: Operation) {}
}
