#[cfg(test)]
#[path = "../../tests/unit/scheduling/timeline_test.rs"]
mod timeline_test;

use crate::models::common::{Cost, Distance, Duration, Location, ServiceTier, Timestamp, TransportMode};
use crate::models::solution::VehicleId;
use crate::scheduling::{PackageMap, PackageScheduler, ScheduleError};
use crate::utils::Timer;

/// A single scheduled route segment with absolute timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct LegSchedule {
    /// A start location.
    pub from: Location,
    /// An end location.
    pub to: Location,
    /// A transport mode of the segment.
    pub mode: TransportMode,
    /// A time when the segment starts. Matches the previous segment end.
    pub segment_start: Timestamp,
    /// A time when loading starts. Matches the segment start.
    pub load_start: Timestamp,
    /// A departure time: load start plus loading time.
    pub depart_time: Timestamp,
    /// An arrival time: departure plus travel time.
    pub arrival_time: Timestamp,
    /// A segment end time: arrival plus unloading time.
    pub segment_end: Timestamp,
    /// A vehicle serving the segment.
    pub vehicle: VehicleId,
    /// A distance of the segment.
    pub distance: Distance,
    /// A loading duration of the segment.
    pub load_time: Duration,
    /// An unloading duration of the segment.
    pub unload_time: Duration,
    /// A travel duration of the segment.
    pub travel_time: Duration,
    /// A total segment duration.
    pub total_time: Duration,
    /// A travel cost of the segment.
    pub total_cost: Cost,
}

impl PackageScheduler {
    /// Creates the final timetable for all registered packages.
    ///
    /// Every package timeline starts at its effective start time and chains segments
    /// without gaps. Vehicles come from the consolidation pass: shared full route groups
    /// keep their group vehicle, other packages use the initial vehicle on the first
    /// segment and registry assignments on later ones.
    pub fn create_schedule(&mut self) -> Result<PackageMap<PackageTimetable>, ScheduleError> {
        let timer = Timer::start();
        let mut schedule = PackageMap::default();

        for package_id in 1..self.next_package_id {
            let Some(package) = self.packages.get(&package_id) else { continue };
            let Some(group) = self.groups.get(&package_id) else { continue };

            let mut current_time = package.start_time;
            let mut legs = Vec::with_capacity(package.legs.len());

            for (leg_idx, leg) in package.legs.iter().enumerate() {
                let vehicle = if group.full_route_shared {
                    group.group_vehicle.ok_or(ScheduleError::UnknownVehicleKey(package_id))?
                } else if leg_idx == 0 {
                    package.initial_vehicle.ok_or(ScheduleError::UnknownVehicleKey(package_id))?
                } else {
                    self.registry.vehicle_for(leg.mode, &[leg.from, leg.to])
                };

                let segment_start = current_time;
                let load_start = segment_start;
                let depart_time = load_start + leg.load_time;
                let arrival_time = depart_time + leg.travel_time;
                let segment_end = arrival_time + leg.unload_time;
                current_time = segment_end;

                legs.push(LegSchedule {
                    from: leg.from,
                    to: leg.to,
                    mode: leg.mode,
                    segment_start,
                    load_start,
                    depart_time,
                    arrival_time,
                    segment_end,
                    vehicle,
                    distance: leg.distance,
                    load_time: leg.load_time,
                    unload_time: leg.unload_time,
                    travel_time: leg.travel_time,
                    total_time: leg.total_time,
                    total_cost: leg.total_cost,
                });
            }

            schedule.insert(
                package_id,
                PackageTimetable {
                    delivery_type: package.delivery_type,
                    final_start_time: package.start_time,
                    delay: package.delay,
                    route: package.route.clone(),
                    legs,
                },
            );
        }

        self.log(format!("created schedule for {} packages in {}ms", schedule.len(), timer.elapsed_millis()).as_str());

        Ok(schedule)
    }
}

/// A package timetable: the final delivery schedule of a single package.
#[derive(Clone, Debug, PartialEq)]
pub struct PackageTimetable {
    /// A tier the package was registered with.
    pub delivery_type: ServiceTier,
    /// An effective start time with all delays applied.
    pub final_start_time: Timestamp,
    /// An accumulated delay in minutes.
    pub delay: Duration,
    /// A node sequence of the package route.
    pub route: Vec<Location>,
    /// Scheduled route segments.
    pub legs: Vec<LegSchedule>,
}
