//! End-to-end tests: gate-checked management operations flowing through
//! the federated monitoring repository, member side and coordinator side.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use trellis::{
    AccessController, AccessGate, DeterministicRegion, FederationComponent, MemberId,
    MonitoringRepo, Notification, NotificationKey, Region, ResourceOperationContext,
    SecurityError,
};

/// Policy granting cluster management and metric reads, nothing else.
struct OperatorPolicy;

impl AccessController for OperatorPolicy {
    fn allow(&self, context: &ResourceOperationContext) -> bool {
        matches!(
            context.identity(),
            "CLUSTER:MANAGE:ALL_REGIONS" | "CLUSTER:SHOW_METRICS:ALL_REGIONS"
        )
    }
}

fn monitoring_region(name: &str) -> Arc<DeterministicRegion<String, FederationComponent>> {
    DeterministicRegion::new(name)
}

fn stats_component(entry_count: u64) -> FederationComponent {
    let mut component = FederationComponent::new("RegionStats");
    component.set("entryCount", json!(entry_count));
    component
}

#[tokio::test]
async fn test_member_push_and_coordinator_aggregate_view() {
    let gate = AccessGate::new(Arc::new(OperatorPolicy));
    let coordinator = MonitoringRepo::new();

    // Two members push their own state into their local monitoring
    // regions; the coordinator holds a handle per member.
    let mut expected_total = 0u64;
    for (index, entry_count) in [(0u64, 120u64), (1, 34)] {
        let member = MemberId::random();
        let region = monitoring_region(&format!("member-{index}-monitoring"));

        let member_repo = MonitoringRepo::new();
        member_repo.set_local_monitoring_region(region.clone());

        // The federation cycle only sends what is not already published.
        let entity = "RegionStats:orders";
        if !member_repo.is_already_published(entity) {
            let mut batch = HashMap::new();
            batch.insert(entity.to_string(), stats_component(entry_count));
            member_repo
                .put_all_in_local_monitoring_region(batch)
                .await
                .expect("push should succeed");
        }
        expected_total += entry_count;

        // Propagation (external) makes the member's region visible to the
        // coordinator; here the handle itself stands in for the proxy.
        coordinator.put_entry_in_monitoring_region_map(member, region);
    }

    // A management read arrives at the coordinator: wrap, authorize, run.
    let mut context = ResourceOperationContext::for_operation("CLUSTER", "SHOW_METRICS")
        .expect("known names should parse");
    gate.authorize(&context).expect("operator may read metrics");

    let mut total = 0u64;
    for (_, region) in coordinator.get_monitoring_region_map() {
        let component = region
            .get(&"RegionStats:orders".to_string())
            .await
            .expect("member region should be readable")
            .expect("member should have published its stats");
        total += component
            .get("entryCount")
            .and_then(|value| value.as_u64())
            .expect("entryCount should be numeric");
    }
    assert_eq!(total, expected_total);

    // The result rides back on the same context for post-op filtering.
    context.set_post_operation_result(json!({ "entryCount": total }));
    assert!(context.is_post_operation());
    assert_eq!(
        context.get_operation_result(),
        Some(&json!({ "entryCount": expected_total }))
    );
}

#[tokio::test]
async fn test_denied_operation_never_reaches_the_repository() {
    let gate = AccessGate::new(Arc::new(OperatorPolicy));
    let repo = MonitoringRepo::new();
    let region = monitoring_region("monitoring");
    repo.set_local_monitoring_region(region.clone());

    let context = ResourceOperationContext::for_operation("DATA", "QUERY")
        .expect("known names should parse");
    let denial = gate
        .authorize(&context)
        .expect_err("operator policy does not grant data queries");
    assert_eq!(
        denial,
        SecurityError::AccessDenied {
            identity: "DATA:QUERY:ALL_REGIONS".to_string()
        }
    );

    // The caller stopped at the gate, so the monitoring state is untouched.
    assert!(region.is_empty());
}

#[tokio::test]
async fn test_notifications_fan_in_to_coordinator() {
    let coordinator = MonitoringRepo::new();
    let member = MemberId::random();
    let region: Arc<DeterministicRegion<NotificationKey, Notification>> =
        DeterministicRegion::new("member-notifications");

    let member_repo = MonitoringRepo::new();
    member_repo.set_local_notification_region(region.clone());
    coordinator.put_entry_in_notification_region_map(member, region);

    let key = NotificationKey::new(member, 1);
    let event = Notification::new("RegionStats:orders", "region created", 1_700_000_000_000)
        .with_payload(json!({"region": "orders"}));
    member_repo
        .put_entry_in_local_notification_region(key, event.clone())
        .await
        .expect("notification write should succeed");

    let remote = coordinator
        .get_entry_from_notification_region_map(&member)
        .expect("member should be attached");
    let seen = remote
        .get(&key)
        .await
        .expect("remote region should be readable")
        .expect("notification should be visible");
    assert_eq!(seen, event);
}

#[tokio::test]
async fn test_member_departure_detaches_both_registries() {
    let coordinator = MonitoringRepo::new();
    let member = MemberId::random();

    coordinator.put_entry_in_monitoring_region_map(member, monitoring_region("m"));
    let notif: Arc<DeterministicRegion<NotificationKey, Notification>> =
        DeterministicRegion::new("n");
    coordinator.put_entry_in_notification_region_map(member, notif);

    // Membership change: the coordinator detaches the departed member.
    assert!(coordinator
        .remove_entry_from_monitoring_region_map(&member)
        .is_some());
    assert!(coordinator
        .remove_entry_from_notification_region_map(&member)
        .is_some());

    assert!(coordinator
        .get_entry_from_monitoring_region_map(&member)
        .is_none());
    assert!(coordinator
        .get_entry_from_notification_region_map(&member)
        .is_none());
}
