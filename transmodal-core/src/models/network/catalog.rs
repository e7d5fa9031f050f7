#[cfg(test)]
#[path = "../../../tests/unit/models/network/catalog_test.rs"]
mod catalog_test;

use crate::models::common::{Cost, Duration, TransportMode};
use crate::utils::GenericResult;
use rustc_hash::FxHashMap;

/// A maximum amount of transport modes a catalog can hold.
/// The limit comes from the network link mode set which is stored as a 64 bit mask.
pub const MAX_TRANSPORT_MODES: usize = 64;

/// Specifies per-mode transport parameters applied per 100 distance units.
#[derive(Clone, Debug, PartialEq)]
pub struct ModeProfile {
    /// Travel time in minutes per 100 distance units.
    pub time_per_100: Duration,
    /// Travel cost per 100 distance units.
    pub cost_per_100: Cost,
    /// Time in minutes spent to load (or unload) a shipment onto this mode.
    pub load_unload_time: Duration,
}

/// An immutable table of transport modes available to the network.
#[derive(Clone, Debug)]
pub struct TransportCatalog {
    profiles: Vec<ModeProfile>,
    names: Vec<String>,
    index: FxHashMap<String, TransportMode>,
}

impl TransportCatalog {
    /// Returns the amount of transport modes.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns true if the catalog has no modes.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Returns the profile of the given mode.
    pub fn profile(&self, mode: TransportMode) -> &ModeProfile {
        &self.profiles[mode]
    }

    /// Resolves a mode name to its index.
    pub fn mode_index(&self, name: &str) -> Option<TransportMode> {
        self.index.get(name).copied()
    }

    /// Returns the name of the given mode.
    pub fn mode_name(&self, mode: TransportMode) -> &str {
        self.names[mode].as_str()
    }
}

/// Provides a way to build a transport catalog.
#[derive(Default)]
pub struct TransportCatalogBuilder {
    modes: Vec<(String, ModeProfile)>,
}

impl TransportCatalogBuilder {
    /// Adds a transport mode with the given name and profile. Mode indices follow insertion order.
    pub fn with_mode(mut self, name: &str, profile: ModeProfile) -> Self {
        self.modes.push((name.to_string(), profile));
        self
    }

    /// Builds a transport catalog.
    pub fn build(self) -> GenericResult<TransportCatalog> {
        if self.modes.is_empty() {
            return Err("a transport catalog requires at least one mode".into());
        }

        if self.modes.len() > MAX_TRANSPORT_MODES {
            return Err(format!("too many transport modes: at most {MAX_TRANSPORT_MODES} are allowed").into());
        }

        let mut index = FxHashMap::default();
        let (mut profiles, mut names) = (Vec::with_capacity(self.modes.len()), Vec::with_capacity(self.modes.len()));

        for (mode_idx, (name, profile)) in self.modes.into_iter().enumerate() {
            if profile.time_per_100 <= 0. || profile.cost_per_100 < 0. || profile.load_unload_time < 0. {
                return Err(format!("invalid parameters for transport mode: '{name}'").into());
            }

            if index.insert(name.clone(), mode_idx).is_some() {
                return Err(format!("duplicate transport mode: '{name}'").into());
            }

            names.push(name);
            profiles.push(profile);
        }

        Ok(TransportCatalog { profiles, names, index })
    }
}
