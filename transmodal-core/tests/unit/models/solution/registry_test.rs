use super::*;

#[test]
fn can_allocate_monotonic_ids_from_one() {
    let mut registry = FleetRegistry::default();

    assert!(registry.is_empty());
    assert_eq!(registry.vehicle_for(0, &[1, 2]), 1);
    assert_eq!(registry.vehicle_for(0, &[2, 3]), 2);
    assert_eq!(registry.vehicle_for(1, &[1, 2]), 3);
    assert_eq!(registry.len(), 3);
}

#[test]
fn can_return_same_id_for_same_key() {
    let mut registry = FleetRegistry::default();

    let first = registry.vehicle_for(0, &[1, 2, 3]);
    let second = registry.vehicle_for(0, &[1, 2, 3]);

    assert_eq!(first, second);
    assert_eq!(registry.len(), 1);
}

#[test]
fn can_distinguish_stop_order() {
    let mut registry = FleetRegistry::default();

    let forward = registry.vehicle_for(0, &[1, 2]);
    let backward = registry.vehicle_for(0, &[2, 1]);

    assert_ne!(forward, backward);
}

#[test]
fn can_handle_stop_sequences_beyond_inline_capacity() {
    let mut registry = FleetRegistry::default();
    let stops = [0, 1, 2, 3, 4, 5];

    let id = registry.vehicle_for(2, &stops);

    assert_eq!(id, 1);
    assert_eq!(registry.vehicle_for(2, &stops), id);
}
