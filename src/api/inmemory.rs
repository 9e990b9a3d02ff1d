//! In-memory implementation of [`Region`] for testing.
//!
//! Provides a deterministic, non-persistent region for use in unit tests
//! and deterministic simulation testing. Mirrors the behavior of
//! production backends without network or disk I/O: operations on a
//! destroyed region fail with [`RegionError::Destroyed`], and the local
//! probes stay purely local.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{Region, RegionError};

/// In-memory deterministic implementation of [`Region`].
///
/// Entries live in a process-local map; nothing is replicated or
/// persisted, making this useful wherever repeatability matters more than
/// durability.
pub struct DeterministicRegion<K, V> {
    name: String,
    entries: RwLock<HashMap<K, V>>,
    destroyed: AtomicBool,
}

impl<K, V> DeterministicRegion<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Send + Sync,
{
    /// Create a new empty region with the given name.
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            entries: RwLock::new(HashMap::new()),
            destroyed: AtomicBool::new(false),
        })
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the region currently stores no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn check_live(&self) -> Result<(), RegionError> {
        if self.destroyed.load(Ordering::SeqCst) {
            return Err(RegionError::Destroyed {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl<K, V> Region<K, V> for DeterministicRegion<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn get(&self, key: &K) -> Result<Option<V>, RegionError> {
        self.check_live()?;
        Ok(self.entries.read().get(key).cloned())
    }

    async fn put(&self, key: K, value: V) -> Result<Option<V>, RegionError> {
        self.check_live()?;
        Ok(self.entries.write().insert(key, value))
    }

    async fn put_all(&self, entries: HashMap<K, V>) -> Result<(), RegionError> {
        self.check_live()?;
        self.entries.write().extend(entries);
        Ok(())
    }

    fn contains_key_local(&self, key: &K) -> bool {
        if self.destroyed.load(Ordering::SeqCst) {
            return false;
        }
        self.entries.read().contains_key(key)
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    async fn destroy_local(&self) -> Result<(), RegionError> {
        if self.destroyed.swap(true, Ordering::SeqCst) {
            return Err(RegionError::Destroyed {
                name: self.name.clone(),
            });
        }
        self.entries.write().clear();
        Ok(())
    }
}
