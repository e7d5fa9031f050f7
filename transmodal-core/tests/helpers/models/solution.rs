use crate::models::common::{Location, ServiceTier, TransportMode};
use crate::models::solution::*;

/// Creates a route leg with simple defaults: distance 100, one hour travel, no handling.
pub fn create_test_leg(from: Location, to: Location, mode: TransportMode) -> RouteLeg {
    RouteLeg {
        from,
        to,
        mode,
        distance: 100.,
        load_time: 0.,
        unload_time: 0.,
        travel_time: 60.,
        total_time: 60.,
        total_cost: 1.,
    }
}

/// Creates a route plan with totals derived from the given legs.
pub fn create_test_plan(path: Vec<Location>, legs: Vec<RouteLeg>) -> RoutePlan {
    let total_cost = legs.iter().map(|leg| leg.total_cost).sum();
    let total_time = legs.iter().map(|leg| leg.total_time).sum();

    RoutePlan { path, total_cost, total_time, legs }
}

/// Creates delivery options with a single tier populated.
pub fn create_test_options(tier: ServiceTier, plan: RoutePlan) -> DeliveryOptions {
    let mut options = DeliveryOptions::default();
    match tier {
        ServiceTier::SameDay => options.same_day = Some(plan),
        ServiceTier::OneDay => options.one_day = Some(plan),
        ServiceTier::Economy => options.economy = Some(plan),
    }

    options
}
