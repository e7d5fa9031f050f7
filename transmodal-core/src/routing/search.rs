//! A route search over the transport network which accounts for per-mode travel rates
//! and load/unload overhead on transport switches.

#[cfg(test)]
#[path = "../../tests/unit/routing/search_test.rs"]
mod search_test;

use crate::models::common::{Cost, Duration, Float, Location};
use crate::models::network::{NetworkView, NodeKind, TransportCatalog};
use crate::models::solution::{RouteLeg, RoutePlan};
use crate::utils::compare_floats;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

/// Scale of per-100-unit catalog rates.
const RATE_SCALE: Float = 100.;

/// An error returned by the route search.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RoutingError {
    /// An origin or destination cannot be used for the route request.
    InvalidEndpoint(String),
    /// No path connects origin and destination.
    NoViableRoute {
        /// A requested origin id.
        origin: String,
        /// A requested destination id.
        destination: String,
    },
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::InvalidEndpoint(message) => write!(f, "invalid endpoint: {message}"),
            RoutingError::NoViableRoute { origin, destination } => {
                write!(f, "no viable route between '{origin}' and '{destination}'")
            }
        }
    }
}

impl std::error::Error for RoutingError {}

/// Specifies the objective of a single search run.
#[derive(Clone, Copy)]
enum SearchObjective {
    Cost,
    Time,
}

/// Computes cheapest and fastest routes over the transport network.
///
/// The search space is the cross product of network nodes and the transport mode used
/// to arrive there, which makes handling overhead on mode switches part of the metric.
/// Ties between equally good states are resolved by ascending node and mode index, so
/// repeated searches return the same route.
pub struct RouteFinder<'a> {
    network: &'a dyn NetworkView,
    catalog: &'a TransportCatalog,
}

impl<'a> RouteFinder<'a> {
    /// Creates a new instance of `RouteFinder`.
    pub fn new(network: &'a dyn NetworkView, catalog: &'a TransportCatalog) -> Self {
        Self { network, catalog }
    }

    /// Finds a route with the lowest accumulated travel cost.
    /// Handling overhead affects reported times, but adds no cost.
    pub fn cheapest_route(&self, origin: &str, destination: &str) -> Result<RoutePlan, RoutingError> {
        self.search(origin, destination, SearchObjective::Cost)
    }

    /// Finds a route with the lowest total time, including load/unload overhead
    /// spent on the first hop and on every transport switch.
    pub fn fastest_route(&self, origin: &str, destination: &str) -> Result<RoutePlan, RoutingError> {
        self.search(origin, destination, SearchObjective::Time)
    }

    fn search(&self, origin: &str, destination: &str, objective: SearchObjective) -> Result<RoutePlan, RoutingError> {
        let origin_loc = self.resolve(origin)?;
        let destination_loc = self.resolve(destination)?;

        if self.network.record(destination_loc).kind == NodeKind::Intermediate {
            return Err(RoutingError::InvalidEndpoint(format!(
                "cannot deliver to intermediate platform: '{destination}'"
            )));
        }

        if origin_loc == destination_loc {
            return Ok(RoutePlan { path: vec![origin_loc], total_cost: 0., total_time: 0., legs: Vec::default() });
        }

        self.run(origin_loc, destination_loc, objective).ok_or_else(|| RoutingError::NoViableRoute {
            origin: origin.to_string(),
            destination: destination.to_string(),
        })
    }

    fn resolve(&self, id: &str) -> Result<Location, RoutingError> {
        self.network.resolve(id).ok_or_else(|| RoutingError::InvalidEndpoint(format!("unknown node id: '{id}'")))
    }

    fn run(&self, origin: Location, destination: Location, objective: SearchObjective) -> Option<RoutePlan> {
        // state encoding: node * slots + slot, where slot 0 means no incoming mode
        let slots = self.catalog.len() + 1;
        let mut labels = vec![Label::default(); self.network.size() * slots];
        let mut queue = BinaryHeap::new();

        let start = origin * slots;
        labels[start].key = 0.;
        queue.push(Reverse(QueueEntry { key: 0., node: origin, slot: 0 }));

        while let Some(Reverse(entry)) = queue.pop() {
            let state = entry.node * slots + entry.slot;
            if labels[state].done {
                continue;
            }
            labels[state].done = true;

            if entry.node == destination {
                let (total_cost, total_time) = match objective {
                    SearchObjective::Cost => (labels[state].key, labels[state].other),
                    SearchObjective::Time => (labels[state].other, labels[state].key),
                };
                return Some(self.create_plan(&labels, slots, state, total_cost, total_time));
            }

            let prev_mode = entry.slot.checked_sub(1);
            let (base_key, base_other) = (labels[state].key, labels[state].other);

            for link in self.network.links(entry.node) {
                for mode in link.modes.iter() {
                    let profile = self.catalog.profile(mode);

                    let (load_time, unload_time) = match prev_mode {
                        Some(prev) if prev != mode => {
                            (profile.load_unload_time, self.catalog.profile(prev).load_unload_time)
                        }
                        Some(_) => (0., 0.),
                        None => (profile.load_unload_time, 0.),
                    };

                    let travel_time = link.distance / RATE_SCALE * profile.time_per_100;
                    let travel_cost = link.distance / RATE_SCALE * profile.cost_per_100;
                    let total_time = travel_time + load_time + unload_time;

                    let (key_delta, other_delta) = match objective {
                        SearchObjective::Cost => (travel_cost, total_time),
                        SearchObjective::Time => (total_time, travel_cost),
                    };

                    let next = link.to * slots + mode + 1;
                    let candidate = base_key + key_delta;

                    if compare_floats(candidate, labels[next].key) == Ordering::Less {
                        labels[next] = Label {
                            key: candidate,
                            other: base_other + other_delta,
                            parent: state,
                            leg: Some(RouteLeg {
                                from: entry.node,
                                to: link.to,
                                mode,
                                distance: link.distance,
                                load_time,
                                unload_time,
                                travel_time,
                                total_time,
                                total_cost: travel_cost,
                            }),
                            done: false,
                        };
                        queue.push(Reverse(QueueEntry { key: candidate, node: link.to, slot: mode + 1 }));
                    }
                }
            }
        }

        None
    }

    fn create_plan(
        &self,
        labels: &[Label],
        slots: usize,
        state: usize,
        total_cost: Cost,
        mut total_time: Duration,
    ) -> RoutePlan {
        let (mut path, mut legs) = (Vec::new(), Vec::new());

        let mut current = state;
        loop {
            path.push(current / slots);
            match &labels[current].leg {
                Some(leg) => {
                    legs.push(leg.clone());
                    current = labels[current].parent;
                }
                None => break,
            }
        }

        path.reverse();
        legs.reverse();

        // arrival at the destination always pays the final unload
        if let Some(last) = legs.last_mut() {
            let unload_time = self.catalog.profile(last.mode).load_unload_time;
            last.unload_time += unload_time;
            last.total_time += unload_time;
            total_time += unload_time;
        }

        RoutePlan { path, total_cost, total_time, legs }
    }
}

#[derive(Clone)]
struct Label {
    key: Float,
    other: Float,
    parent: usize,
    leg: Option<RouteLeg>,
    done: bool,
}

impl Default for Label {
    fn default() -> Self {
        Self { key: Float::INFINITY, other: 0., parent: usize::MAX, leg: None, done: false }
    }
}

#[derive(Clone, Copy)]
struct QueueEntry {
    key: Float,
    node: Location,
    slot: usize,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_floats(self.key, other.key)
            .then_with(|| self.node.cmp(&other.node))
            .then_with(|| self.slot.cmp(&other.slot))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}
