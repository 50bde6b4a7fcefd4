use crate::{HubObserver, HubStats, LeaveReason};

#[test]
fn given_join_and_leave_events_when_snapshotted_then_totals_match() {
    // Given
    let stats = HubStats::new();

    // When
    stats.on_joined(1);
    stats.on_joined(2);
    stats.on_left(1, LeaveReason::Evicted);
    stats.on_left(0, LeaveReason::Disconnected);

    // Then
    let snapshot = stats.snapshot();
    assert_eq!(snapshot.active_connections, 0);
    assert_eq!(snapshot.joined_total, 2);
    assert_eq!(snapshot.left_total, 2);
    assert_eq!(snapshot.evicted_total, 1);
}

#[test]
fn given_broadcasts_and_inbound_when_snapshotted_then_tallied_by_kind() {
    // Given
    let stats = HubStats::new();

    // When
    stats.on_broadcast("aircraft_update", 3);
    stats.on_broadcast("aircraft_update", 2);
    stats.on_broadcast("satellite_update", 1);
    stats.on_inbound("subscribe");

    // Then
    let snapshot = stats.snapshot();
    assert_eq!(snapshot.frames_broadcast, 3);
    assert_eq!(snapshot.frames_delivered, 6);
    assert_eq!(snapshot.broadcast_by_kind.get("aircraft_update"), Some(&2));
    assert_eq!(snapshot.broadcast_by_kind.get("satellite_update"), Some(&1));
    assert_eq!(snapshot.inbound_by_kind.get("subscribe"), Some(&1));
}

#[test]
fn given_snapshot_when_serialized_then_fields_are_snake_case() {
    let stats = HubStats::new();
    stats.on_joined(1);

    let json = serde_json::to_value(stats.snapshot()).unwrap();

    assert_eq!(json["active_connections"], 1);
    assert_eq!(json["joined_total"], 1);
    assert!(json["inbound_by_kind"].is_object());
}
