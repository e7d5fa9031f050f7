#[cfg(test)]
#[path = "../../../tests/unit/models/solution/registry_test.rs"]
mod registry_test;

use crate::models::common::{Location, TransportMode};
use rustc_hash::FxHashMap;
use tinyvec::TinyVec;

/// A vehicle identifier unique within a fleet registry.
pub type VehicleId = usize;

/// A stop sequence inlined up to a typical segment size.
type StopSequence = TinyVec<[Location; 4]>;

/// Assigns stable vehicle identifiers to transport mode and stop sequence pairs.
/// The first allocated identifier is 1 and identifiers grow monotonically.
#[derive(Debug)]
pub struct FleetRegistry {
    vehicles: FxHashMap<(TransportMode, StopSequence), VehicleId>,
    next_id: VehicleId,
}

impl Default for FleetRegistry {
    fn default() -> Self {
        Self { vehicles: FxHashMap::default(), next_id: 1 }
    }
}

impl FleetRegistry {
    /// Returns the vehicle assigned to the given mode and stop sequence, allocating
    /// the next identifier when the key is seen for the first time.
    pub fn vehicle_for(&mut self, mode: TransportMode, stops: &[Location]) -> VehicleId {
        let key = (mode, stops.iter().copied().collect::<StopSequence>());
        *self.vehicles.entry(key).or_insert_with(|| {
            let id = self.next_id;
            self.next_id += 1;
            id
        })
    }

    /// Returns the amount of allocated vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns true if no vehicle has been allocated yet.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
