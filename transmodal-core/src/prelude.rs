//! This module reimports commonly used types.

pub use crate::models::Problem;

pub use crate::models::common::{
    Cost, Dimensions, Distance, Duration, Float, Location, ServiceTier, Timestamp, TransportMode,
};

pub use crate::models::network::{
    Link, ModeProfile, ModeSet, NetworkSnapshot, NetworkSnapshotBuilder, NetworkView, NodeIdDimension, NodeKind,
    NodeRecord, TransportCatalog, TransportCatalogBuilder,
};

pub use crate::models::solution::{DeliveryOptions, FleetRegistry, RouteLeg, RoutePlan, RouteStatistic, VehicleId};

pub use crate::routing::{DeliveryPlanner, PlannerConfig, RouteFinder, RoutingError};

pub use crate::scheduling::{
    LegSchedule, Package, PackageId, PackageMap, PackageScheduler, PackageTimetable, ScheduleError,
};

pub use crate::utils::{GenericError, GenericResult, InfoLogger, Timer, compare_floats};
