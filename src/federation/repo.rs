use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;
use thiserror::Error;
use tracing::debug;

use crate::api::{Region, RegionError};

use super::{FederationComponent, MemberId, Notification, NotificationKey};

/// Handle to a monitoring region: management-entity name → federated state.
pub type MonitoringRegionRef = Arc<dyn Region<String, FederationComponent>>;

/// Handle to a notification region: notification key → event record.
pub type NotificationRegionRef = Arc<dyn Region<NotificationKey, Notification>>;

/// Errors raised by [`MonitoringRepo`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A local region was required but none is installed.
    ///
    /// Surfaces bootstrap ordering bugs: the caller reached a path that
    /// assumes the local region exists before bootstrap installed it (or
    /// after shutdown tore it down).
    #[error("no local {kind} region is installed")]
    RegionNotInstalled {
        /// Which local region was missing: `"monitoring"` or `"notification"`.
        kind: &'static str,
    },
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] RegionError),
}

/// Cache-wide repository of management and monitoring state.
///
/// Owns the references to this node's local monitoring and notification
/// regions, and on a coordinating node the registries mapping each known
/// member to handles of that member's remotely-visible regions. All
/// management infrastructure reads and updates this state through the
/// repository so every caller sees one consistent view.
///
/// The repository is passive: local regions are created by bootstrap and
/// installed through the setters, and registry entries are inserted and
/// removed by the federation cycle as membership changes. It never detects
/// membership changes or constructs regions itself.
///
/// # Concurrency
///
/// Registries are concurrent maps safe for per-key insert/remove/lookup
/// from any number of callers without external locking. The local region
/// slots are read and written through concurrently with bootstrap and
/// teardown; every guarded operation treats "no live region" as a normal
/// transient state, not a fault.
#[derive(Default)]
pub struct MonitoringRepo {
    local_monitoring_region: RwLock<Option<MonitoringRegionRef>>,
    local_notification_region: RwLock<Option<NotificationRegionRef>>,
    monitoring_region_map: DashMap<MemberId, MonitoringRegionRef>,
    notification_region_map: DashMap<MemberId, NotificationRegionRef>,
}

impl MonitoringRepo {
    /// Create an empty repository: no local regions, no known members.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    // ------------------------------------------------------------------
    // Local monitoring region
    // ------------------------------------------------------------------

    /// The local monitoring region, or `None` if never set or destroyed.
    pub fn get_local_monitoring_region(&self) -> Option<MonitoringRegionRef> {
        self.local_monitoring_region.read().clone()
    }

    /// Install `region` as the local monitoring region, replacing any
    /// prior reference.
    ///
    /// The repository does not destroy the previous region; the caller
    /// owns its teardown.
    pub fn set_local_monitoring_region(&self, region: MonitoringRegionRef) {
        *self.local_monitoring_region.write() = Some(region);
    }

    /// Destroy the local monitoring region and clear the reference.
    ///
    /// Requires an installed region; calling this without one fails with
    /// [`RepoError::RegionNotInstalled`]. The destroy is local-only. If
    /// the store fails the reference stays in place.
    pub async fn destroy_local_monitoring_region(&self) -> Result<(), RepoError> {
        let region = self
            .local_monitoring_region
            .read()
            .clone()
            .ok_or(RepoError::RegionNotInstalled { kind: "monitoring" })?;
        region.destroy_local().await?;
        let mut slot = self.local_monitoring_region.write();
        // Only clear the reference we destroyed; a concurrent re-set wins.
        if slot
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, &region))
        {
            *slot = None;
        }
        Ok(())
    }

    /// Publish one entity's federated state into the local monitoring
    /// region.
    ///
    /// Guarded write: when the local region is absent or destroyed the
    /// write is silently dropped. Writes race with topology-driven
    /// teardown, and the caller republishes on its next federation cycle
    /// anyway, so dropping favors availability over failing the cycle.
    pub async fn put_entry_in_local_monitoring_region(
        &self,
        name: impl Into<String>,
        component: FederationComponent,
    ) -> Result<(), RepoError> {
        let region = match self.live_local_monitoring_region() {
            Some(region) => region,
            None => {
                debug!("dropping monitoring entry write, local region unavailable");
                return Ok(());
            }
        };
        match region.put(name.into(), component).await {
            Ok(_) => Ok(()),
            // Teardown raced the write; same policy as the guard above.
            Err(RegionError::Destroyed { .. }) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Bulk variant of
    /// [`put_entry_in_local_monitoring_region`](Self::put_entry_in_local_monitoring_region),
    /// with the same guard and drop policy.
    pub async fn put_all_in_local_monitoring_region(
        &self,
        entries: std::collections::HashMap<String, FederationComponent>,
    ) -> Result<(), RepoError> {
        let region = match self.live_local_monitoring_region() {
            Some(region) => region,
            None => {
                debug!(
                    entries = entries.len(),
                    "dropping monitoring bulk write, local region unavailable"
                );
                return Ok(());
            }
        };
        match region.put_all(entries).await {
            Ok(()) => Ok(()),
            Err(RegionError::Destroyed { .. }) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Whether the caller may skip publishing `key`.
    ///
    /// Returns the local-only containment check when a live monitoring
    /// region is installed. When the region is absent or destroyed this
    /// returns **`true`**: during bootstrap and teardown windows a publish
    /// would be dropped anyway, so the caller skips the redundant send.
    /// That inversion is the contract of this operation, not literal key
    /// existence — callers needing existence semantics should read the
    /// entry instead.
    pub fn is_already_published(&self, key: &str) -> bool {
        match self.live_local_monitoring_region() {
            Some(region) => region.contains_key_local(&key.to_string()),
            None => true,
        }
    }

    /// Read one entity's federated state from the local monitoring region.
    ///
    /// Unguarded: unlike the write path, reading without an installed
    /// region is a caller bug and fails with
    /// [`RepoError::RegionNotInstalled`].
    pub async fn get_entry_from_local_monitoring_region(
        &self,
        name: &str,
    ) -> Result<Option<FederationComponent>, RepoError> {
        let region = self
            .local_monitoring_region
            .read()
            .clone()
            .ok_or(RepoError::RegionNotInstalled { kind: "monitoring" })?;
        Ok(region.get(&name.to_string()).await?)
    }

    fn live_local_monitoring_region(&self) -> Option<MonitoringRegionRef> {
        let region = self.local_monitoring_region.read().clone()?;
        if region.is_destroyed() {
            return None;
        }
        Some(region)
    }

    // ------------------------------------------------------------------
    // Local notification region
    // ------------------------------------------------------------------

    /// The local notification region, or `None` if never set or destroyed.
    pub fn get_local_notification_region(&self) -> Option<NotificationRegionRef> {
        self.local_notification_region.read().clone()
    }

    /// Install `region` as the local notification region, replacing any
    /// prior reference.
    pub fn set_local_notification_region(&self, region: NotificationRegionRef) {
        *self.local_notification_region.write() = Some(region);
    }

    /// Destroy the local notification region and clear the reference.
    ///
    /// Same precondition and semantics as
    /// [`destroy_local_monitoring_region`](Self::destroy_local_monitoring_region).
    pub async fn destroy_local_notification_region(&self) -> Result<(), RepoError> {
        let region = self
            .local_notification_region
            .read()
            .clone()
            .ok_or(RepoError::RegionNotInstalled {
                kind: "notification",
            })?;
        region.destroy_local().await?;
        let mut slot = self.local_notification_region.write();
        if slot
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, &region))
        {
            *slot = None;
        }
        Ok(())
    }

    /// Record one notification in the local notification region.
    ///
    /// Unguarded: assumes a live local notification region and fails with
    /// [`RepoError::RegionNotInstalled`] (or the store's own error)
    /// otherwise.
    pub async fn put_entry_in_local_notification_region(
        &self,
        key: NotificationKey,
        notification: Notification,
    ) -> Result<(), RepoError> {
        let region = self
            .local_notification_region
            .read()
            .clone()
            .ok_or(RepoError::RegionNotInstalled {
                kind: "notification",
            })?;
        region.put(key, notification).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Coordinator-side member registries
    // ------------------------------------------------------------------

    /// Attach `member`'s monitoring region handle, replacing any prior
    /// entry for that member.
    pub fn put_entry_in_monitoring_region_map(
        &self,
        member: MemberId,
        region: MonitoringRegionRef,
    ) {
        debug!(%member, "attached member monitoring region");
        self.monitoring_region_map.insert(member, region);
    }

    /// The monitoring region handle for `member`, or `None` if unknown.
    pub fn get_entry_from_monitoring_region_map(
        &self,
        member: &MemberId,
    ) -> Option<MonitoringRegionRef> {
        self.monitoring_region_map
            .get(member)
            .map(|entry| entry.value().clone())
    }

    /// Detach `member`'s monitoring region handle, returning it if the
    /// member was known.
    pub fn remove_entry_from_monitoring_region_map(
        &self,
        member: &MemberId,
    ) -> Option<MonitoringRegionRef> {
        let removed = self
            .monitoring_region_map
            .remove(member)
            .map(|(_, region)| region);
        if removed.is_some() {
            debug!(%member, "detached member monitoring region");
        }
        removed
    }

    /// Unordered snapshot of every known member's monitoring region
    /// handle.
    pub fn get_monitoring_region_map(&self) -> Vec<(MemberId, MonitoringRegionRef)> {
        self.monitoring_region_map
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect()
    }

    /// Attach `member`'s notification region handle, replacing any prior
    /// entry for that member.
    pub fn put_entry_in_notification_region_map(
        &self,
        member: MemberId,
        region: NotificationRegionRef,
    ) {
        debug!(%member, "attached member notification region");
        self.notification_region_map.insert(member, region);
    }

    /// The notification region handle for `member`, or `None` if unknown.
    pub fn get_entry_from_notification_region_map(
        &self,
        member: &MemberId,
    ) -> Option<NotificationRegionRef> {
        self.notification_region_map
            .get(member)
            .map(|entry| entry.value().clone())
    }

    /// Detach `member`'s notification region handle, returning it if the
    /// member was known.
    pub fn remove_entry_from_notification_region_map(
        &self,
        member: &MemberId,
    ) -> Option<NotificationRegionRef> {
        let removed = self
            .notification_region_map
            .remove(member)
            .map(|(_, region)| region);
        if removed.is_some() {
            debug!(%member, "detached member notification region");
        }
        removed
    }

    /// Unordered snapshot of every known member's notification region
    /// handle.
    pub fn get_notification_region_map(&self) -> Vec<(MemberId, NotificationRegionRef)> {
        self.notification_region_map
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect()
    }
}
