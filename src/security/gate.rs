//! The gate every management operation passes through before it runs.

use std::sync::Arc;

use tracing::warn;

use super::{ResourceOperationContext, SecurityError};

/// Decides whether a management operation may proceed.
///
/// Implemented by the authorization backend (for example a policy-file
/// driven one). The backend sees only the context — typically just its
/// [`identity`](ResourceOperationContext::identity) — and answers
/// allow/deny; it performs no side effects on the context.
pub trait AccessController: Send + Sync {
    /// Whether the operation described by `context` is permitted.
    fn allow(&self, context: &ResourceOperationContext) -> bool;
}

/// A controller that permits everything.
///
/// For bootstrap paths and tests where authorization is not under test.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessController for AllowAll {
    fn allow(&self, _context: &ResourceOperationContext) -> bool {
        true
    }
}

/// Checks each wrapped operation against the configured
/// [`AccessController`] and converts a deny into a typed error.
///
/// The gate adds nothing to the decision itself; it is the single place
/// where "denied" becomes [`SecurityError::AccessDenied`], so callers
/// surface authorization failures distinctly from internal faults.
#[derive(Clone)]
pub struct AccessGate {
    controller: Arc<dyn AccessController>,
}

impl AccessGate {
    /// Create a gate consulting `controller` for every operation.
    pub fn new(controller: Arc<dyn AccessController>) -> Self {
        Self { controller }
    }

    /// Check `context` against the controller.
    ///
    /// Returns `Ok(())` when the operation may proceed, and
    /// [`SecurityError::AccessDenied`] carrying the operation identity
    /// otherwise.
    pub fn authorize(&self, context: &ResourceOperationContext) -> Result<(), SecurityError> {
        if self.controller.allow(context) {
            return Ok(());
        }
        warn!(identity = context.identity(), "management operation denied");
        Err(SecurityError::AccessDenied {
            identity: context.identity().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Controller that only permits cluster management.
    struct ClusterManageOnly;

    impl AccessController for ClusterManageOnly {
        fn allow(&self, context: &ResourceOperationContext) -> bool {
            context.identity() == "CLUSTER:MANAGE:ALL_REGIONS"
        }
    }

    #[test]
    fn test_gate_passes_permitted_operations() {
        let gate = AccessGate::new(Arc::new(ClusterManageOnly));
        let context = ResourceOperationContext::for_operation("CLUSTER", "MANAGE")
            .expect("known names should parse");
        assert!(gate.authorize(&context).is_ok());
    }

    #[test]
    fn test_gate_denies_with_identity() {
        let gate = AccessGate::new(Arc::new(ClusterManageOnly));
        let context = ResourceOperationContext::for_operation("DATA", "QUERY")
            .expect("known names should parse");
        assert_eq!(
            gate.authorize(&context),
            Err(SecurityError::AccessDenied {
                identity: "DATA:QUERY:ALL_REGIONS".to_string()
            })
        );
    }

    #[test]
    fn test_allow_all_permits_everything() {
        let gate = AccessGate::new(Arc::new(AllowAll));
        assert!(gate.authorize(&ResourceOperationContext::new()).is_ok());
    }
}
