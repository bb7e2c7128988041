// oasis/src/store/subscription.rs

//! The handle returned by `subscribe`, used to stop receiving snapshots.

use std::fmt;

type Canceller = Box<dyn FnOnce() + Send + Sync>;

/// Capability to remove a registered handler.
///
/// Dropping a `Subscription` does NOT unsubscribe; the handler stays registered
/// for the lifetime of the store unless `unsubscribe` is called.
#[must_use = "a subscription only stops when `unsubscribe` is called"]
pub struct Subscription {
  label: String,
  cancellers: Vec<Canceller>,
}

impl Subscription {
  pub(crate) fn new(label: impl Into<String>, cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
    Self {
      label: label.into(),
      cancellers: vec![Box::new(cancel)],
    }
  }

  /// Combines several subscriptions into one that cancels all of them.
  pub fn merge(label: impl Into<String>, parts: impl IntoIterator<Item = Subscription>) -> Self {
    Self {
      label: label.into(),
      cancellers: parts.into_iter().flat_map(|part| part.cancellers).collect(),
    }
  }

  pub fn label(&self) -> &str {
    &self.label
  }

  /// Removes the handler(s). An emission already in flight still completes.
  pub fn unsubscribe(self) {
    tracing::debug!(subscription = %self.label, "Unsubscribing.");
    for cancel in self.cancellers {
      cancel();
    }
  }
}

impl fmt::Debug for Subscription {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Subscription")
      .field("label", &self.label)
      .field("parts", &self.cancellers.len())
      .finish()
  }
}
