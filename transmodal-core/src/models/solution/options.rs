use crate::models::common::ServiceTier;
use crate::models::solution::RoutePlan;

/// Keeps per-tier delivery options. Populated tiers always have pairwise distinct paths.
#[derive(Clone, Debug, Default)]
pub struct DeliveryOptions {
    /// A same day delivery option.
    pub same_day: Option<RoutePlan>,
    /// A next day delivery option.
    pub one_day: Option<RoutePlan>,
    /// An economy delivery option.
    pub economy: Option<RoutePlan>,
}

impl DeliveryOptions {
    /// Gets the option assigned to the given tier.
    pub fn get(&self, tier: ServiceTier) -> Option<&RoutePlan> {
        match tier {
            ServiceTier::SameDay => self.same_day.as_ref(),
            ServiceTier::OneDay => self.one_day.as_ref(),
            ServiceTier::Economy => self.economy.as_ref(),
        }
    }

    /// Iterates over populated tiers in their priority order.
    pub fn iter(&self) -> impl Iterator<Item = (ServiceTier, &RoutePlan)> + '_ {
        ServiceTier::all().into_iter().filter_map(|tier| self.get(tier).map(|plan| (tier, plan)))
    }

    /// Returns true if no tier is populated.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
