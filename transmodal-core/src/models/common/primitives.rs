pub use crate::utils::Float;

/// Represents a time unit: minutes since the Unix epoch.
pub type Timestamp = Float;

/// Represents a duration in minutes.
pub type Duration = Float;

/// Represents a distance in abstract units. Catalog rates are defined per 100 such units.
pub type Distance = Float;

/// Represents a cost in abstract units.
pub type Cost = Float;
