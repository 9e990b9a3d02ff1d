//! The keyed store contract the management layer reads and writes through.
//!
//! A [`Region`] is one replicated key/value container of the grid. The
//! replication machinery itself lives outside this crate; the management
//! layer only depends on the handful of operations declared here. The
//! in-memory [`DeterministicRegion`] mirrors the behavior of production
//! backends without network or disk I/O and backs unit tests and
//! deterministic simulation.

use std::collections::HashMap;
use std::hash::Hash;

use async_trait::async_trait;
use thiserror::Error;

pub mod inmemory;
pub use inmemory::DeterministicRegion;

/// Errors raised by the underlying keyed store.
///
/// These are the store's own failures, propagated untranslated through the
/// management layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// The region was locally destroyed before or during the operation.
    #[error("region '{name}' has been destroyed")]
    Destroyed {
        /// Name of the destroyed region.
        name: String,
    },
    /// The store failed for a backend-specific reason.
    #[error("region operation failed: {reason}")]
    Failed {
        /// Backend-provided description of the failure.
        reason: String,
    },
}

/// A replicated, per-region key/value container of the data grid.
///
/// Write operations may involve distribution to other members; how long
/// that takes (and whether it can time out) is the backend's concern.
/// [`contains_key_local`](Region::contains_key_local) and
/// [`is_destroyed`](Region::is_destroyed) are purely local probes and
/// never send a message to another member.
#[async_trait]
pub trait Region<K, V>: Send + Sync
where
    K: Eq + Hash + Send + Sync,
    V: Send + Sync,
{
    /// Stable name of this region, for diagnostics.
    fn name(&self) -> &str;

    /// Read the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &K) -> Result<Option<V>, RegionError>;

    /// Store `value` under `key`, returning the previous value if any.
    async fn put(&self, key: K, value: V) -> Result<Option<V>, RegionError>;

    /// Store every entry of `entries` in one bulk operation.
    async fn put_all(&self, entries: HashMap<K, V>) -> Result<(), RegionError>;

    /// Whether `key` is present in the local copy of this region.
    ///
    /// Local-only: never triggers a cross-member lookup.
    fn contains_key_local(&self, key: &K) -> bool;

    /// Whether this region has been destroyed.
    fn is_destroyed(&self) -> bool;

    /// Destroy the local copy of this region.
    ///
    /// Local-only: other members' copies are unaffected. Fails if the
    /// region was already destroyed.
    async fn destroy_local(&self) -> Result<(), RegionError>;
}
