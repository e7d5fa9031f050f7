#[cfg(test)]
#[path = "../../tests/unit/scheduling/consolidation_test.rs"]
mod consolidation_test;

use crate::models::common::{Location, Timestamp, TransportMode};
use crate::models::solution::VehicleId;
use crate::scheduling::{PackageId, PackageScheduler};
use crate::utils::{Timer, compare_floats};
use rustc_hash::FxHashMap;

type FirstSegmentKey = (TransportMode, Location, Location);

impl PackageScheduler {
    /// Assigns vehicles to registered packages in two passes.
    ///
    /// The first pass clusters packages by their first route segment: a package joins the
    /// earliest cluster anchor within the time threshold, otherwise it opens a new cluster
    /// with a fresh vehicle. The second pass detects groups with identical full routes
    /// where all start times fit the threshold: such groups keep one vehicle end to end.
    pub fn assign_initial_vehicles(&mut self) {
        let timer = Timer::start();

        let mut first_segments: FxHashMap<FirstSegmentKey, Vec<(PackageId, Timestamp)>> = FxHashMap::default();
        let mut key_order = Vec::new();

        for package_id in 1..self.next_package_id {
            let Some(package) = self.packages.get(&package_id) else { continue };
            // a route without legs has nothing to drive
            let Some(first) = package.legs.first() else { continue };

            let key = (first.mode, first.from, first.to);
            first_segments
                .entry(key)
                .or_insert_with(|| {
                    key_order.push(key);
                    Vec::new()
                })
                .push((package_id, package.start_time));
        }

        for key in key_order {
            let Some(mut entries) = first_segments.remove(&key) else { continue };
            entries.sort_by(|a, b| compare_floats(a.1, b.1));

            let mut anchors: Vec<(VehicleId, Timestamp)> = Vec::new();
            for (package_id, start_time) in entries {
                let joined = anchors
                    .iter()
                    .find(|(_, anchor_time)| (start_time - anchor_time).abs() <= self.time_threshold)
                    .map(|(vehicle, _)| *vehicle);

                let vehicle = joined.unwrap_or_else(|| {
                    let (mode, from, to) = key;
                    let vehicle = self.registry.vehicle_for(mode, &[from, to]);
                    anchors.push((vehicle, start_time));
                    vehicle
                });

                if let Some(package) = self.packages.get_mut(&package_id) {
                    package.initial_vehicle = Some(vehicle);
                }
            }
        }

        let threshold = self.time_threshold;
        let mut shared_groups = 0;

        for entries in self.full_route_map.values_mut() {
            if entries.len() < 2 {
                continue;
            }

            entries.sort_by(|a, b| compare_floats(a.1, b.1));

            let (first_id, base_time) = entries[0];
            let all_within = entries[1..].iter().all(|(_, time)| (time - base_time).abs() <= threshold);
            if !all_within {
                continue;
            }

            let group_vehicle = self.packages.get(&first_id).and_then(|package| package.initial_vehicle);
            for (package_id, _) in entries.iter() {
                if let Some(group) = self.groups.get_mut(package_id) {
                    group.full_route_shared = true;
                    group.group_vehicle = group_vehicle;
                }
            }

            shared_groups += 1;
        }

        self.log(
            format!(
                "assigned vehicles to {} packages ({} vehicles, {} shared groups) in {}ms",
                self.packages.len(),
                self.registry.len(),
                shared_groups,
                timer.elapsed_millis()
            )
            .as_str(),
        );
    }
}
