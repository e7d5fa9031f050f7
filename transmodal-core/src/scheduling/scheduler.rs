#[cfg(test)]
#[path = "../../tests/unit/scheduling/scheduler_test.rs"]
mod scheduler_test;

use crate::models::common::{Duration, Location, ServiceTier, Timestamp};
use crate::models::solution::{DeliveryOptions, FleetRegistry, RouteLeg, VehicleId};
use crate::utils::{InfoLogger, create_stdout_logger};
use nohash_hasher::BuildNoHashHasher;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

/// A package identifier assigned by the scheduler starting from 1.
pub type PackageId = usize;

/// A hash map keyed by package id.
pub type PackageMap<V> = HashMap<PackageId, V, BuildNoHashHasher<PackageId>>;

/// A default time threshold in minutes within which package departures are considered
/// close enough to share a vehicle.
pub const DEFAULT_TIME_THRESHOLD: Duration = 10.;

/// An error returned by scheduling operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    /// A requested tier has no delivery option.
    UnknownTier(ServiceTier),
    /// A package id is not registered.
    UnknownPackage(PackageId),
    /// A package reached schedule generation without an assigned vehicle.
    UnknownVehicleKey(PackageId),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::UnknownTier(tier) => write!(f, "no delivery option for tier: '{tier}'"),
            ScheduleError::UnknownPackage(id) => write!(f, "package {id} is not registered"),
            ScheduleError::UnknownVehicleKey(id) => write!(f, "package {id} has no assigned vehicle"),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// A registered package with its planned route.
#[derive(Clone, Debug)]
pub struct Package {
    /// A tier the package was registered with.
    pub delivery_type: ServiceTier,
    /// A planned node sequence.
    pub route: Vec<Location>,
    /// Planned route legs.
    pub legs: Vec<RouteLeg>,
    /// An effective start time with all delays applied.
    pub start_time: Timestamp,
    /// An accumulated delay in minutes.
    pub delay: Duration,
    /// A vehicle assigned to the first route segment.
    pub initial_vehicle: Option<VehicleId>,
}

/// Keeps full route sharing state of a package.
#[derive(Clone, Debug, Default)]
pub(super) struct GroupState {
    pub(super) full_route_shared: bool,
    pub(super) group_vehicle: Option<VehicleId>,
}

/// Registers packages, consolidates them onto shared vehicles and generates the final
/// delivery timetable.
pub struct PackageScheduler {
    pub(super) registry: FleetRegistry,
    pub(super) packages: PackageMap<Package>,
    pub(super) groups: PackageMap<GroupState>,
    pub(super) full_route_map: FxHashMap<Vec<Location>, Vec<(PackageId, Timestamp)>>,
    pub(super) next_package_id: PackageId,
    pub(super) time_threshold: Duration,
    pub(super) logger: InfoLogger,
}

impl Default for PackageScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_THRESHOLD)
    }
}

impl PackageScheduler {
    /// Creates a new instance of `PackageScheduler` with the given time threshold in minutes.
    pub fn new(time_threshold: Duration) -> Self {
        Self::with_logger(time_threshold, create_stdout_logger())
    }

    /// Creates a new instance of `PackageScheduler` with a custom logger.
    pub fn with_logger(time_threshold: Duration, logger: InfoLogger) -> Self {
        Self {
            registry: FleetRegistry::default(),
            packages: PackageMap::default(),
            groups: PackageMap::default(),
            full_route_map: FxHashMap::default(),
            next_package_id: 1,
            time_threshold,
            logger,
        }
    }

    /// Registers a package for the given tier of delivery options.
    /// Returns a new package id, the first registered package gets id 1.
    pub fn register(
        &mut self,
        options: &DeliveryOptions,
        delivery_type: ServiceTier,
        start_time: Timestamp,
    ) -> Result<PackageId, ScheduleError> {
        let plan = options.get(delivery_type).ok_or(ScheduleError::UnknownTier(delivery_type))?;

        let package_id = self.next_package_id;
        self.next_package_id += 1;

        self.packages.insert(
            package_id,
            Package {
                delivery_type,
                route: plan.path.clone(),
                legs: plan.legs.clone(),
                start_time,
                delay: 0.,
                initial_vehicle: None,
            },
        );
        self.full_route_map.entry(plan.path.clone()).or_default().push((package_id, start_time));
        self.groups.insert(package_id, GroupState::default());

        self.log(format!("registered package {package_id} ({delivery_type} tier, {} legs)", plan.legs.len()).as_str());

        Ok(package_id)
    }

    /// Shifts the package start time by the given amount of minutes. Delays accumulate.
    pub fn apply_delay(&mut self, package_id: PackageId, minutes: Duration) -> Result<(), ScheduleError> {
        let package = self.packages.get_mut(&package_id).ok_or(ScheduleError::UnknownPackage(package_id))?;

        package.delay += minutes;
        package.start_time += minutes;

        if let Some(entries) = self.full_route_map.get_mut(&package.route) {
            if let Some(entry) = entries.iter_mut().find(|(id, _)| *id == package_id) {
                entry.1 = package.start_time;
            }
        }

        self.log(format!("delayed package {package_id} by {minutes} minutes").as_str());

        Ok(())
    }

    /// Gets a registered package.
    pub fn package(&self, package_id: PackageId) -> Option<&Package> {
        self.packages.get(&package_id)
    }

    /// Returns a read-only view of the fleet registry.
    pub fn registry(&self) -> &FleetRegistry {
        &self.registry
    }

    pub(super) fn log(&self, message: &str) {
        self.logger.deref()(message);
    }
}
