//! A delivery tier planner built on top of the route search.

#[cfg(test)]
#[path = "../../tests/unit/routing/planner_test.rs"]
mod planner_test;

use crate::models::common::{Duration, Location, Timestamp};
use crate::models::network::{NetworkView, TransportCatalog};
use crate::models::solution::{DeliveryOptions, RoutePlan};
use crate::routing::{RouteFinder, RoutingError};
use rustc_hash::FxHashSet;

/// An amount of minutes in one day.
const MINUTES_PER_DAY: Duration = 24. * 60.;

/// Specifies tier deadline rules relative to the day when delivery starts.
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// A dispatch cutoff in minutes from midnight. The same day deadline is this cutoff
    /// reduced by the margin below.
    pub dispatch_cutoff: Duration,
    /// A safety margin in minutes subtracted from the dispatch cutoff.
    pub cutoff_margin: Duration,
    /// A next day delivery cutoff in minutes from midnight.
    pub next_day_cutoff: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { dispatch_cutoff: 19. * 60., cutoff_margin: 60., next_day_cutoff: 14. * 60. }
    }
}

/// Builds per-tier delivery options for a shipment request.
///
/// The cheapest route fills the tier matching its arrival time. The fastest route fills
/// every tier whose deadline it meets, but replaces an occupant only when strictly
/// cheaper. When several tiers end up with the same node sequence, only the one with
/// the highest priority is kept.
pub struct DeliveryPlanner<'a> {
    finder: RouteFinder<'a>,
    config: PlannerConfig,
}

impl<'a> DeliveryPlanner<'a> {
    /// Creates a new instance of `DeliveryPlanner` with default deadline rules.
    pub fn new(network: &'a dyn NetworkView, catalog: &'a TransportCatalog) -> Self {
        Self::with_config(network, catalog, PlannerConfig::default())
    }

    /// Creates a new instance of `DeliveryPlanner` with custom deadline rules.
    pub fn with_config(network: &'a dyn NetworkView, catalog: &'a TransportCatalog, config: PlannerConfig) -> Self {
        Self { finder: RouteFinder::new(network, catalog), config }
    }

    /// Plans delivery options for the given origin/destination pair and start time.
    pub fn plan(
        &self,
        origin: &str,
        destination: &str,
        start_time: Timestamp,
    ) -> Result<DeliveryOptions, RoutingError> {
        let cheapest = self.finder.cheapest_route(origin, destination)?;
        let fastest = self.finder.fastest_route(origin, destination)?;

        let day_start = (start_time / MINUTES_PER_DAY).floor() * MINUTES_PER_DAY;
        let same_day_deadline = day_start + self.config.dispatch_cutoff - self.config.cutoff_margin;
        let one_day_deadline = day_start + MINUTES_PER_DAY + self.config.next_day_cutoff;

        let mut options = DeliveryOptions::default();

        let arrival = start_time + cheapest.total_time;
        if arrival <= same_day_deadline {
            options.same_day = Some(cheapest);
        } else if arrival <= one_day_deadline {
            options.one_day = Some(cheapest);
        } else {
            options.economy = Some(cheapest);
        }

        let arrival = start_time + fastest.total_time;
        let is_cheaper = |candidate: &RoutePlan, occupant: &Option<RoutePlan>| {
            occupant.as_ref().map_or(true, |plan| candidate.total_cost < plan.total_cost)
        };

        if arrival <= same_day_deadline && is_cheaper(&fastest, &options.same_day) {
            options.same_day = Some(fastest.clone());
        }

        if arrival <= one_day_deadline && is_cheaper(&fastest, &options.one_day) {
            options.one_day = Some(fastest.clone());
        }

        if is_cheaper(&fastest, &options.economy) {
            options.economy = Some(fastest);
        }

        dedup_paths(&mut options);

        Ok(options)
    }
}

/// Keeps only the highest priority tier for each distinct node sequence.
fn dedup_paths(options: &mut DeliveryOptions) {
    let mut used: FxHashSet<Vec<Location>> = FxHashSet::default();

    for slot in [&mut options.same_day, &mut options.one_day, &mut options.economy] {
        if let Some(plan) = slot {
            if !used.insert(plan.path.clone()) {
                *slot = None;
            }
        }
    }
}
