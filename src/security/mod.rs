//! Authorization identity for management operations.
//!
//! Every management call (JMX, CLI, or internal) is wrapped in a
//! [`ResourceOperationContext`] before it runs: a descriptor of what
//! operation is being performed, against which resource, in which region
//! scope. The context renders that triple as a single flat identity
//! string, `resource:operation:scope`, which the access-control layer uses
//! as a hashable permission cache and lock key without knowing the enum
//! types behind it.
//!
//! The decision itself stays external: a policy backend implements
//! [`AccessController`], and the [`AccessGate`] consults it and converts a
//! deny into a typed error. After a permitted operation runs, its result
//! can be attached back to the same context so the gate's caller can
//! filter or audit it without a second round-trip object.

mod context;
mod error;
mod gate;
mod resource;

pub use context::{ContextParts, ResourceOperationContext, ALL_REGIONS};
pub use error::SecurityError;
pub use gate::{AccessController, AccessGate, AllowAll};
pub use resource::{OperationCode, Resource};
