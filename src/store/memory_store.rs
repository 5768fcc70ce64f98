//! An in-memory durable store. Nothing survives a restart, which makes it
//! suitable for tests and for running without a writable disk.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::store::durable_store::{DurableStore, StoreError};

#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
  entries: Arc<Mutex<BTreeMap<String, String>>>,
  mutations: Arc<AtomicUsize>,
}

impl MemoryStore {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Number of `set`/`delete` calls observed so far.
  pub(crate) fn mutation_count(&self) -> usize {
    self.mutations.load(Ordering::SeqCst)
  }

  /// Pre-populates an entry without counting it as a mutation.
  pub(crate) fn prime(&self, key: &str, value: &str) {
    self.entries.lock().unwrap().insert(key.to_string(), value.to_string());
  }
}

#[async_trait]
impl DurableStore for MemoryStore {
  async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    Ok(self.entries.lock().unwrap().get(key).cloned())
  }

  async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    self.mutations.fetch_add(1, Ordering::SeqCst);
    self.entries.lock().unwrap().insert(key.to_string(), value.to_string());
    Ok(())
  }

  async fn delete(&self, key: &str) -> Result<(), StoreError> {
    self.mutations.fetch_add(1, Ordering::SeqCst);
    self.entries.lock().unwrap().remove(key);
    Ok(())
  }
}
