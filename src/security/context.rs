//! The per-operation authorization descriptor.

use serde_json::Value;

use super::{OperationCode, Resource, SecurityError};

/// Region-scope sentinel meaning "all regions".
///
/// A context whose scope was not narrowed explicitly carries this constant
/// rather than an empty string or an absent value, so the identity string
/// always has three well-formed parts.
pub const ALL_REGIONS: &str = "ALL_REGIONS";

/// Identity registration required by the operation-context base layer.
///
/// Holds the flat `resource:operation:scope` key under which the
/// access-control layer caches permission decisions and takes
/// per-operation locks. Registered exactly once per context, at
/// construction; the key never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextParts {
    key: String,
    cacheable: bool,
}

impl ContextParts {
    pub(crate) fn register(key: String, cacheable: bool) -> Self {
        Self { key, cacheable }
    }

    /// The permission cache and lock key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the access layer may cache decisions under this key.
    pub fn is_cacheable(&self) -> bool {
        self.cacheable
    }
}

/// Outcome slot of a context: before the operation runs there is nothing
/// to carry; afterwards there is exactly one result.
///
/// The transition is one-directional: once post-operation, a context never
/// reverts.
#[derive(Debug, Clone, PartialEq)]
enum OperationOutcome {
    Pre,
    Post { result: Value },
}

/// Authorization identity of one management operation.
///
/// Created once per invoked operation (JMX, CLI, or internal), consulted
/// by the access gate before the operation runs, optionally loaded with
/// the operation's result afterwards for result-level filtering and
/// auditing, and then discarded. Never cached or reused across calls.
///
/// The `(resource, operation, scope)` triple is fixed at construction and
/// rendered once into the identity string `resource:operation:scope`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceOperationContext {
    resource: Resource,
    operation: OperationCode,
    region_name: String,
    outcome: OperationOutcome,
    parts: ContextParts,
}

impl ResourceOperationContext {
    /// A fully-defaulted context: `NULL:NULL:ALL_REGIONS`.
    ///
    /// Used when creating a lock around an operation whose identity is not
    /// yet known.
    pub fn new() -> Self {
        Self::build(Resource::Null, OperationCode::Null, ALL_REGIONS.to_string())
    }

    /// A context for `operation` on `resource`, scoped to all regions.
    ///
    /// Selecting a resource/operation pair without naming a region assumes
    /// the operation needs cluster-wide visibility.
    pub fn for_operation(resource: &str, operation: &str) -> Result<Self, SecurityError> {
        Self::from_names(Some(resource), Some(operation), None)
    }

    /// A context from optional names.
    ///
    /// A `None` leaves the corresponding field at its default
    /// ([`Resource::Null`], [`OperationCode::Null`], [`ALL_REGIONS`]). A
    /// `Some` name must match the known vocabulary exactly; anything else
    /// fails with [`SecurityError::UnknownResource`] or
    /// [`SecurityError::UnknownOperation`] rather than silently falling
    /// back.
    pub fn from_names(
        resource: Option<&str>,
        operation: Option<&str>,
        region_name: Option<&str>,
    ) -> Result<Self, SecurityError> {
        let resource = match resource {
            Some(name) => Resource::parse(name)?,
            None => Resource::Null,
        };
        let operation = match operation {
            Some(name) => OperationCode::parse(name)?,
            None => OperationCode::Null,
        };
        let region_name = region_name.unwrap_or(ALL_REGIONS).to_string();
        Ok(Self::build(resource, operation, region_name))
    }

    fn build(resource: Resource, operation: OperationCode, region_name: String) -> Self {
        // The identity is computed once and registered once; every
        // construction path funnels through here.
        let parts = ContextParts::register(
            format!("{}:{}:{}", resource.name(), operation.name(), region_name),
            true,
        );
        Self {
            resource,
            operation,
            region_name,
            outcome: OperationOutcome::Pre,
            parts,
        }
    }

    /// The resource this operation targets.
    pub fn get_resource(&self) -> Resource {
        self.resource
    }

    /// What this operation does.
    pub fn get_operation_code(&self) -> OperationCode {
        self.operation
    }

    /// The region scope, or [`ALL_REGIONS`] when not narrowed.
    pub fn get_region_name(&self) -> &str {
        &self.region_name
    }

    /// Always `false`: contexts of this kind describe management
    /// operations, never client-originated cache updates.
    pub fn is_client_update(&self) -> bool {
        false
    }

    /// Whether a post-operation result has been attached.
    pub fn is_post_operation(&self) -> bool {
        matches!(self.outcome, OperationOutcome::Post { .. })
    }

    /// The attached operation result, or `None` before the operation ran.
    pub fn get_operation_result(&self) -> Option<&Value> {
        match &self.outcome {
            OperationOutcome::Pre => None,
            OperationOutcome::Post { result } => Some(result),
        }
    }

    /// Attach the operation's result, marking the context post-operation.
    ///
    /// A second attach overwrites the stored result; the context stays
    /// post-operation either way.
    pub fn set_post_operation_result(&mut self, result: Value) {
        self.outcome = OperationOutcome::Post { result };
    }

    /// The identity string `resource:operation:scope` — the canonical
    /// permission cache and lock key for this operation.
    pub fn identity(&self) -> &str {
        self.parts.key()
    }

    /// The registered base-layer identity parts.
    pub fn parts(&self) -> &ContextParts {
        &self.parts
    }
}

impl Default for ResourceOperationContext {
    fn default() -> Self {
        Self::new()
    }
}
