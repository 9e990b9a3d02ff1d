//! Property-based tests for the operation-context identity using proptest.
//!
//! The identity string is the permission cache and lock key for the whole
//! access-control layer, so its shape must hold for every combination of
//! the vocabulary, not just the handful of pairs the unit tests pick.

use proptest::prelude::*;
use trellis::{OperationCode, Resource, ResourceOperationContext, ALL_REGIONS};

fn arbitrary_resource() -> impl Strategy<Value = Resource> {
    prop::sample::select(Resource::ALL.to_vec())
}

fn arbitrary_operation() -> impl Strategy<Value = OperationCode> {
    prop::sample::select(OperationCode::ALL.to_vec())
}

// Scopes are region names: no colons, so the identity stays three-part.
fn arbitrary_scope() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_-]{0,15}").unwrap()
}

proptest! {
    #[test]
    fn test_two_arg_construction_is_cluster_wide(
        resource in arbitrary_resource(),
        operation in arbitrary_operation(),
    ) {
        let context = ResourceOperationContext::for_operation(resource.name(), operation.name())
            .expect("canonical names always parse");
        prop_assert_eq!(context.get_region_name(), ALL_REGIONS);
        prop_assert_eq!(
            context.identity(),
            format!("{}:{}:{}", resource.name(), operation.name(), ALL_REGIONS)
        );
        prop_assert!(!context.is_post_operation());
    }

    #[test]
    fn test_identity_parts_round_trip(
        resource in arbitrary_resource(),
        operation in arbitrary_operation(),
        scope in arbitrary_scope(),
    ) {
        let context = ResourceOperationContext::from_names(
            Some(resource.name()),
            Some(operation.name()),
            Some(&scope),
        )
        .expect("canonical names always parse");

        let identity = context.identity().to_string();
        let parts: Vec<&str> = identity.splitn(3, ':').collect();
        prop_assert_eq!(parts.len(), 3);
        prop_assert_eq!(Resource::parse(parts[0]), Ok(resource));
        prop_assert_eq!(OperationCode::parse(parts[1]), Ok(operation));
        prop_assert_eq!(parts[2], scope.as_str());
    }

    #[test]
    fn test_noncanonical_names_never_construct(name in "[a-z][a-z0-9_]{0,11}") {
        // The vocabulary is SCREAMING_SNAKE, so any lowercase name is
        // outside it and must be rejected, never defaulted.
        prop_assert!(ResourceOperationContext::for_operation(&name, "MANAGE").is_err());
        prop_assert!(ResourceOperationContext::for_operation("CLUSTER", &name).is_err());
    }

    #[test]
    fn test_post_operation_flag_never_reverts(
        results in prop::collection::vec(any::<u64>(), 1..5),
    ) {
        let mut context = ResourceOperationContext::new();
        for result in &results {
            context.set_post_operation_result(serde_json::json!(result));
            prop_assert!(context.is_post_operation());
        }
        let last = results.last().expect("at least one result");
        prop_assert_eq!(
            context.get_operation_result(),
            Some(&serde_json::json!(last))
        );
    }
}
