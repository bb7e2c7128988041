// oasis/src/store/backing.rs

//! Pluggable durable backings for an `EntityStore`.
//!
//! A store loads from its backing once at construction and hands every new
//! snapshot to `persist`. Failures are the backing's to report and the
//! store's to absorb: see `EntityStore::with_backing`.

use crate::error::{OasisError, OasisResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{event, Level};

pub trait StoreBacking<T>: Send + Sync {
  /// Short description used in log fields.
  fn describe(&self) -> String;

  /// `Ok(None)` means nothing has been stored yet and the caller's seed applies.
  fn load(&self) -> OasisResult<Option<Vec<T>>>;

  fn persist(&self, items: &[T]) -> OasisResult<()>;
}

/// Keeps nothing outside process memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryBacking;

impl<T> StoreBacking<T> for MemoryBacking {
  fn describe(&self) -> String {
    "memory".to_string()
  }

  fn load(&self) -> OasisResult<Option<Vec<T>>> {
    Ok(None)
  }

  fn persist(&self, _items: &[T]) -> OasisResult<()> {
    Ok(())
  }
}

/// Stores the whole snapshot as one JSON array in a file.
#[derive(Debug)]
pub struct JsonFileBacking<T> {
  path: PathBuf,
  _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileBacking<T> {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self {
      path: path.into(),
      _marker: PhantomData,
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Deletes the file if present. Used when persistence is switched off so a
  /// stale file from an earlier run is not picked up later.
  pub fn clear(&self) -> OasisResult<()> {
    match fs::remove_file(&self.path) {
      Ok(()) => {
        event!(Level::INFO, path = %self.path.display(), "Removed stale store file.");
        Ok(())
      }
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
      Err(e) => Err(OasisError::storage(format!("removing {}", self.path.display()), e)),
    }
  }
}

impl<T> StoreBacking<T> for JsonFileBacking<T>
where
  T: Serialize + DeserializeOwned + Send + Sync,
{
  fn describe(&self) -> String {
    format!("json:{}", self.path.display())
  }

  fn load(&self) -> OasisResult<Option<Vec<T>>> {
    let raw = match fs::read_to_string(&self.path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(OasisError::storage(format!("reading {}", self.path.display()), e)),
    };
    let items = serde_json::from_str::<Vec<T>>(&raw)
      .map_err(|e| OasisError::storage(format!("decoding {}", self.path.display()), e))?;
    event!(Level::DEBUG, path = %self.path.display(), count = items.len(), "Loaded snapshot from file.");
    Ok(Some(items))
  }

  fn persist(&self, items: &[T]) -> OasisResult<()> {
    let encoded = serde_json::to_vec_pretty(items)
      .map_err(|e| OasisError::storage(format!("encoding {}", self.path.display()), e))?;
    fs::write(&self.path, encoded).map_err(|e| OasisError::storage(format!("writing {}", self.path.display()), e))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_loads_as_nothing_stored() {
    let dir = tempfile::tempdir().unwrap();
    let backing = JsonFileBacking::<u32>::new(dir.path().join("absent.json"));
    assert!(backing.load().unwrap().is_none());
  }

  #[test]
  fn persisted_snapshot_is_loaded_back() {
    let dir = tempfile::tempdir().unwrap();
    let backing = JsonFileBacking::<String>::new(dir.path().join("names.json"));
    backing.persist(&["a".to_string(), "b".to_string()]).unwrap();
    assert_eq!(backing.load().unwrap(), Some(vec!["a".to_string(), "b".to_string()]));
  }

  #[test]
  fn corrupt_file_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{not json").unwrap();
    let backing = JsonFileBacking::<u32>::new(&path);
    assert!(matches!(backing.load(), Err(OasisError::Storage { .. })));
  }

  #[test]
  fn clear_is_quiet_when_nothing_exists() {
    let dir = tempfile::tempdir().unwrap();
    let backing = JsonFileBacking::<u32>::new(dir.path().join("cart.json"));
    backing.clear().unwrap();
    backing.persist(&[1, 2]).unwrap();
    backing.clear().unwrap();
    assert!(!backing.path().exists());
  }
}
