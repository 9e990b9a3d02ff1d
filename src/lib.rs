//! Management-data federation and access-control gate for a distributed
//! in-memory data grid.
//!
//! Every node in the grid caches its own monitoring and eventing state
//! locally and pushes it to a coordinating node, which reads it back as an
//! aggregated cluster view. Every management operation against that state
//! is wrapped in a [`security::ResourceOperationContext`] and checked by an
//! [`security::AccessGate`] before it runs.
//!
//! The crate has three layers:
//!
//! - [`api`] — the keyed store contract ([`api::Region`]) the repository
//!   reads and writes through. The replicated store itself lives outside
//!   this crate; a deterministic in-memory implementation is provided for
//!   tests and simulation.
//! - [`federation`] — the data model and the [`federation::MonitoringRepo`],
//!   which owns the node-local monitoring/notification regions and the
//!   coordinator-side member registries.
//! - [`security`] — the resource/operation vocabulary, the operation
//!   context carrying the `resource:operation:scope` authorization
//!   identity, and the gate that consults an external
//!   [`security::AccessController`].

pub mod api;
pub mod federation;
pub mod security;

pub use api::{DeterministicRegion, Region, RegionError};
pub use federation::{
    FederationComponent, MemberId, MonitoringRepo, Notification, NotificationKey, RepoError,
};
pub use security::{
    AccessController, AccessGate, AllowAll, OperationCode, Resource, ResourceOperationContext,
    SecurityError, ALL_REGIONS,
};
