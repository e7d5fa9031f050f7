#[cfg(test)]
#[path = "../../../tests/unit/models/solution/route_test.rs"]
mod route_test;

use crate::models::common::{Cost, Distance, Duration, Float, Location, TransportMode};

/// A single mode-homogeneous hop of a computed route.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteLeg {
    /// A start location.
    pub from: Location,
    /// An end location.
    pub to: Location,
    /// A transport mode used on the leg.
    pub mode: TransportMode,
    /// A distance between leg locations.
    pub distance: Distance,
    /// Loading time charged at the leg start. Non-zero on the first leg and on mode switches.
    pub load_time: Duration,
    /// Unloading time charged at the leg end. Non-zero on mode switches and on the final leg.
    pub unload_time: Duration,
    /// Pure travel time of the leg.
    pub travel_time: Duration,
    /// Total leg time: travel plus handling.
    pub total_time: Duration,
    /// Travel cost of the leg. Handling adds time, but no cost.
    pub total_cost: Cost,
}

/// A computed route with accumulated totals.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutePlan {
    /// Visited locations, origin first.
    pub path: Vec<Location>,
    /// A total route cost.
    pub total_cost: Cost,
    /// A total route time including all handling overhead.
    pub total_time: Duration,
    /// Route legs. Empty when origin and destination are the same.
    pub legs: Vec<RouteLeg>,
}

impl RoutePlan {
    /// Calculates aggregated figures over the plan legs.
    pub fn statistic(&self) -> RouteStatistic {
        let distance = self.legs.iter().map(|leg| leg.distance).sum::<Distance>();
        let mode_changes = self.legs.windows(2).filter(|pair| pair[0].mode != pair[1].mode).count();
        let speed = if self.total_time > 0. { distance / (self.total_time / 60.) } else { 0. };

        RouteStatistic { distance, mode_changes, speed }
    }
}

/// Aggregated figures derived from a route plan.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteStatistic {
    /// A total distance of the route.
    pub distance: Distance,
    /// An amount of transport mode switches along the route.
    pub mode_changes: usize,
    /// An average speed in distance units per hour.
    pub speed: Float,
}
