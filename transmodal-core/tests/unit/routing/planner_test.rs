use super::*;
use crate::helpers::*;
use crate::models::common::ServiceTier;
use crate::models::network::NodeKind;

#[test]
fn can_fill_same_day_tier_for_quick_route() {
    let catalog = create_reference_catalog();
    let network = create_reference_network(&catalog);
    let planner = DeliveryPlanner::new(&network, &catalog);

    let options = planner.plan("Madrid", "Zaragoza", 480.).unwrap();

    let plan = options.same_day.as_ref().unwrap();
    assert_eq!(plan.total_time, 320. / 100. * 60. + 5. + 5.);
    assert!(options.one_day.is_none() && options.economy.is_none());
    assert_eq!(options.iter().count(), 1);
}

#[test]
fn can_shift_tier_for_late_start() {
    let catalog = create_reference_catalog();
    let network = create_reference_network(&catalog);
    let planner = DeliveryPlanner::new(&network, &catalog);

    // 17:30 start arrives past the 18:00 same day deadline
    let options = planner.plan("Madrid", "Zaragoza", 1050.).unwrap();

    assert!(options.same_day.is_none());
    assert!(options.one_day.is_some());
    assert!(options.economy.is_none());
}

#[test]
fn can_keep_distinct_paths_across_tiers() {
    let catalog = create_reference_catalog();
    let network = create_reference_network(&catalog);
    let planner = DeliveryPlanner::new(&network, &catalog);
    let madrid = network.resolve("Madrid").unwrap();
    let barcelona = network.resolve("Barcelona").unwrap();
    let valencia = network.resolve("Valencia").unwrap();
    let palma = network.resolve("Palma").unwrap();

    let options = planner.plan("Madrid", "Palma", 480.).unwrap();

    // the cheapest route makes it before the same day deadline, the fastest one
    // takes the next tier and its economy duplicate is dropped
    assert_eq!(options.same_day.as_ref().unwrap().path, vec![madrid, valencia, palma]);
    assert_eq!(options.one_day.as_ref().unwrap().path, vec![madrid, barcelona, palma]);
    assert!(options.economy.is_none());
    assert!(options.get(ServiceTier::SameDay).is_some());
    assert!(!options.is_empty());
}

#[test]
fn can_classify_slow_route_as_economy() {
    let catalog = create_reference_catalog();
    let network = create_custom_network(
        &catalog,
        &[("A", NodeKind::Warehouse), ("B", NodeKind::City)],
        &[("A", "B", 2000., &["maritime"])],
    );
    let planner = DeliveryPlanner::new(&network, &catalog);

    let options = planner.plan("A", "B", 0.).unwrap();

    let plan = options.economy.as_ref().unwrap();
    assert_eq!(plan.total_time, 2440.);
    assert!(options.same_day.is_none() && options.one_day.is_none());
}

#[test]
fn can_drop_duplicate_path_even_when_modes_differ() {
    let catalog = create_reference_catalog();
    let network = create_custom_network(
        &catalog,
        &[("A", NodeKind::Warehouse), ("B", NodeKind::City)],
        &[("A", "B", 2000., &["road", "maritime"])],
    );
    let planner = DeliveryPlanner::new(&network, &catalog);
    let road = catalog.mode_index("road").unwrap();

    let options = planner.plan("A", "B", 0.).unwrap();

    // the cheap maritime option lands in economy, but shares its node sequence
    // with the faster road option, so only the higher tier survives
    let plan = options.one_day.as_ref().unwrap();
    assert_eq!(plan.legs[0].mode, road);
    assert!(options.same_day.is_none() && options.economy.is_none());
}

#[test]
fn can_meet_deadline_exactly() {
    let catalog = create_reference_catalog();
    let network = create_custom_network(
        &catalog,
        &[("A", NodeKind::Warehouse), ("B", NodeKind::City)],
        &[("A", "B", 5200., &["aerial"])],
    );
    let planner = DeliveryPlanner::new(&network, &catalog);

    // 520 travel plus two 40 handling stops arrives at 18:00 sharp
    let options = planner.plan("A", "B", 480.).unwrap();

    assert_eq!(options.same_day.as_ref().unwrap().total_time, 600.);
    assert!(options.one_day.is_none() && options.economy.is_none());
}

#[test]
fn can_anchor_deadlines_to_start_day() {
    let catalog = create_reference_catalog();
    let network = create_reference_network(&catalog);
    let planner = DeliveryPlanner::new(&network, &catalog);

    // same request on day three behaves like on day zero
    let options = planner.plan("Madrid", "Zaragoza", 3. * 1440. + 480.).unwrap();

    assert!(options.same_day.is_some());
    assert_eq!(options.iter().count(), 1);
}

#[test]
fn can_respect_custom_deadlines() {
    let catalog = create_reference_catalog();
    let network = create_reference_network(&catalog);
    let config = PlannerConfig { dispatch_cutoff: 660., cutoff_margin: 0., next_day_cutoff: 0. };
    let planner = DeliveryPlanner::with_config(&network, &catalog, config);

    let options = planner.plan("Madrid", "Zaragoza", 480.).unwrap();

    // the route misses the tightened 11:00 cutoff it meets under default rules
    assert!(options.same_day.is_none());
    assert!(options.one_day.is_some());
}

#[test]
fn can_propagate_search_errors() {
    let catalog = create_reference_catalog();
    let network = create_reference_network(&catalog);
    let planner = DeliveryPlanner::new(&network, &catalog);

    assert!(matches!(planner.plan("Madrid", "Atlantis", 480.), Err(RoutingError::InvalidEndpoint(_))));
    assert!(matches!(planner.plan("Madrid", "Valencia", 480.), Err(RoutingError::InvalidEndpoint(_))));

    let network = create_custom_network(
        &catalog,
        &[("A", NodeKind::Warehouse), ("B", NodeKind::City), ("C", NodeKind::City)],
        &[("A", "B", 100., &["road"])],
    );
    let planner = DeliveryPlanner::new(&network, &catalog);

    assert!(matches!(planner.plan("A", "C", 480.), Err(RoutingError::NoViableRoute { .. })));
}
