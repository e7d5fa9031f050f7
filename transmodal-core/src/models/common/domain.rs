use std::fmt;

/// Represents a location in the transport network as an index into its node table.
pub type Location = usize;

/// Represents a transport mode as an index into the transport catalog.
pub type TransportMode = usize;

/// Specifies a delivery service tier.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ServiceTier {
    /// Delivery before the same day cutoff.
    SameDay,
    /// Delivery before the next day cutoff.
    OneDay,
    /// Delivery without any deadline.
    Economy,
}

impl ServiceTier {
    /// Returns all tiers in their fixed priority order.
    pub const fn all() -> [ServiceTier; 3] {
        [ServiceTier::SameDay, ServiceTier::OneDay, ServiceTier::Economy]
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tier = match self {
            ServiceTier::SameDay => "same-day",
            ServiceTier::OneDay => "one-day",
            ServiceTier::Economy => "economy",
        };
        write!(f, "{tier}")
    }
}
