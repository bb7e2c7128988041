// oasis/src/store/entity_store.rs

//! `EntityStore<T>`: the authoritative in-memory collection of one entity type.
//!
//! Every change is a full replacement of the collection. Subscribers receive
//! each replacement as an immutable `Snapshot<T>`, in the order the
//! replacements were made, starting with the snapshot current at the time they
//! subscribed.
//!
//! Handlers run on the thread that issued the `replace`, with no store lock
//! held, so they may freely read the store, subscribe, unsubscribe, or issue
//! further replacements. A replacement issued while an emission is in progress
//! is queued and delivered once the current emission has reached every
//! subscriber.

use super::backing::{MemoryBacking, StoreBacking};
use super::subscription::Subscription;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::{event, Level};

/// The full contents of a store at one instant.
pub type Snapshot<T> = Arc<Vec<T>>;

type Handler<T> = Arc<dyn Fn(&Snapshot<T>) + Send + Sync>;

/// Outcome of an `EntityStore::edit` closure.
pub enum Edit<T, R> {
  /// Install this collection as the new snapshot, then return `R`.
  Replace(Vec<T>, R),
  /// Leave the store untouched (nothing is emitted) and return `R`.
  Keep(R),
}

struct Subscriber<T> {
  id: u64,
  // Version current when the subscriber joined; it already saw that one via replay.
  since: u64,
  handler: Handler<T>,
}

struct StoreState<T> {
  current: Snapshot<T>,
  version: u64,
  subscribers: Vec<Subscriber<T>>,
  next_subscriber_id: u64,
  pending: VecDeque<(u64, Snapshot<T>)>,
  emitting: bool,
}

struct StoreInner<T> {
  name: String,
  state: Mutex<StoreState<T>>,
  // Serialises read-compute-replace cycles issued through `edit`.
  write_gate: Mutex<()>,
  backing: Arc<dyn StoreBacking<T>>,
}

pub struct EntityStore<T: Send + Sync + 'static>(Arc<StoreInner<T>>);

impl<T: Send + Sync + 'static> Clone for EntityStore<T> {
  fn clone(&self) -> Self {
    EntityStore(Arc::clone(&self.0))
  }
}

impl<T: Send + Sync + 'static> fmt::Debug for EntityStore<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let state = self.0.state.lock();
    f.debug_struct("EntityStore")
      .field("name", &self.0.name)
      .field("len", &state.current.len())
      .field("version", &state.version)
      .field("subscribers", &state.subscribers.len())
      .finish()
  }
}

impl<T: Send + Sync + 'static> EntityStore<T> {
  /// A memory-only store starting from `initial`.
  pub fn new(name: impl Into<String>, initial: Vec<T>) -> Self {
    Self::build(name.into(), initial, Arc::new(MemoryBacking))
  }

  /// A store mirrored to `backing`.
  ///
  /// What the backing holds wins over `seed`. If the backing holds nothing yet,
  /// `seed` is used. If reading fails the failure is logged and the store
  /// starts empty.
  pub fn with_backing(name: impl Into<String>, seed: Vec<T>, backing: Arc<dyn StoreBacking<T>>) -> Self {
    let name = name.into();
    let initial = match backing.load() {
      Ok(Some(stored)) => {
        event!(Level::DEBUG, store = %name, backing = %backing.describe(), count = stored.len(), "Restored snapshot from backing.");
        stored
      }
      Ok(None) => seed,
      Err(e) => {
        event!(Level::WARN, store = %name, backing = %backing.describe(), error = %e, "Backing read failed; starting empty.");
        Vec::new()
      }
    };
    Self::build(name, initial, backing)
  }

  fn build(name: String, initial: Vec<T>, backing: Arc<dyn StoreBacking<T>>) -> Self {
    EntityStore(Arc::new(StoreInner {
      name,
      state: Mutex::new(StoreState {
        current: Arc::new(initial),
        version: 0,
        subscribers: Vec::new(),
        next_subscriber_id: 0,
        pending: VecDeque::new(),
        emitting: false,
      }),
      write_gate: Mutex::new(()),
      backing,
    }))
  }

  pub fn name(&self) -> &str {
    &self.0.name
  }

  /// The current snapshot.
  pub fn snapshot(&self) -> Snapshot<T> {
    Arc::clone(&self.0.state.lock().current)
  }

  /// Number of `replace` calls applied so far.
  pub fn version(&self) -> u64 {
    self.0.state.lock().version
  }

  pub fn subscriber_count(&self) -> usize {
    self.0.state.lock().subscribers.len()
  }

  /// Registers `handler` and immediately calls it with the current snapshot.
  pub fn subscribe<F>(&self, handler: F) -> Subscription
  where
    F: Fn(&Snapshot<T>) + Send + Sync + 'static,
  {
    let handler: Handler<T> = Arc::new(handler);
    let (id, replay) = {
      let mut state = self.0.state.lock();
      let id = state.next_subscriber_id;
      state.next_subscriber_id += 1;
      let since = state.version;
      state.subscribers.push(Subscriber {
        id,
        since,
        handler: Arc::clone(&handler),
      });
      (id, Arc::clone(&state.current))
    };
    event!(Level::DEBUG, store = %self.0.name, subscriber = id, "Subscriber registered.");

    handler(&replay);

    let weak: Weak<StoreInner<T>> = Arc::downgrade(&self.0);
    Subscription::new(format!("{}#{}", self.0.name, id), move || {
      if let Some(inner) = weak.upgrade() {
        inner.state.lock().subscribers.retain(|s| s.id != id);
      }
    })
  }

  /// Installs `items` as the new snapshot and notifies every subscriber.
  pub fn replace(&self, items: Vec<T>) {
    if self.commit(items) {
      self.drain();
    }
  }

  /// Computes a replacement from the current snapshot.
  ///
  /// The closure runs with this store's write gate held, so it must not call
  /// `edit` or `update` on the same store. Subscribers are notified after the
  /// gate is released.
  pub fn edit<R>(&self, f: impl FnOnce(&[T]) -> Edit<T, R>) -> R {
    let (must_drain, result) = {
      let _gate = self.0.write_gate.lock();
      let current = self.snapshot();
      match f(current.as_slice()) {
        Edit::Replace(items, result) => (self.commit(items), result),
        Edit::Keep(result) => (false, result),
      }
    };
    if must_drain {
      self.drain();
    }
    result
  }

  /// `edit` for changes that always produce a replacement.
  pub fn update(&self, f: impl FnOnce(&[T]) -> Vec<T>) {
    self.edit(|current| Edit::Replace(f(current), ()))
  }

  // Installs the snapshot and queues it. Returns true when the caller has to
  // deliver the queue itself, false when an emission already in progress will.
  fn commit(&self, items: Vec<T>) -> bool {
    let snapshot = Arc::new(items);
    let mut state = self.0.state.lock();

    if let Err(e) = self.0.backing.persist(&snapshot) {
      event!(Level::WARN, store = %self.0.name, backing = %self.0.backing.describe(), error = %e, "Backing write failed; in-memory snapshot stays authoritative.");
    }

    state.version += 1;
    let version = state.version;
    state.current = Arc::clone(&snapshot);
    state.pending.push_back((version, snapshot));
    event!(Level::TRACE, store = %self.0.name, version, len = state.current.len(), "Snapshot replaced.");

    if state.emitting {
      event!(Level::TRACE, store = %self.0.name, version, "Emission in progress; snapshot queued.");
      return false;
    }
    state.emitting = true;
    true
  }

  fn drain(&self) {
    let mut reset = EmittingReset {
      inner: &self.0,
      armed: true,
    };
    loop {
      let (version, snapshot, handlers) = {
        let mut state = self.0.state.lock();
        let Some((version, snapshot)) = state.pending.pop_front() else {
          // Cleared under the same lock that found the queue empty, so a
          // concurrent commit either lands before this or starts its own drain.
          state.emitting = false;
          reset.armed = false;
          return;
        };
        let handlers: Vec<Handler<T>> = state
          .subscribers
          .iter()
          .filter(|s| s.since < version)
          .map(|s| Arc::clone(&s.handler))
          .collect();
        (version, snapshot, handlers)
      };
      event!(Level::TRACE, store = %self.0.name, version, subscribers = handlers.len(), "Emitting snapshot.");
      for handler in handlers {
        handler(&snapshot);
      }
    }
  }
}

// Clears the emitting flag if a handler panics mid-drain, so the next
// `replace` can deliver whatever is still queued.
struct EmittingReset<'a, T> {
  inner: &'a StoreInner<T>,
  armed: bool,
}

impl<T> Drop for EmittingReset<'_, T> {
  fn drop(&mut self) {
    if self.armed {
      self.inner.state.lock().emitting = false;
    }
  }
}
