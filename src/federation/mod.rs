//! Federated monitoring state and the repository that manages it.
//!
//! Every node keeps one local monitoring region (management-entity name →
//! [`FederationComponent`] snapshot) and one local notification region
//! ([`NotificationKey`] → [`Notification`]). A coordinating node
//! additionally tracks, per known member, handles to that member's
//! remotely-visible regions. [`MonitoringRepo`] is the cache-wide
//! repository that owns the local references and the member registries and
//! gives the management and federation layers one consistent view to read
//! and update them through.

mod component;
mod member;
mod notification;
mod repo;

pub use component::FederationComponent;
pub use member::MemberId;
pub use notification::{Notification, NotificationKey};
pub use repo::{MonitoringRegionRef, MonitoringRepo, NotificationRegionRef, RepoError};
