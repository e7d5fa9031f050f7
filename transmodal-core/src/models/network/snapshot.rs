#[cfg(test)]
#[path = "../../../tests/unit/models/network/snapshot_test.rs"]
mod snapshot_test;

use crate::models::common::{Dimensions, Distance, Location, TransportMode};
use crate::models::network::TransportCatalog;
use crate::utils::GenericResult;
use rustc_hash::FxHashMap;
use std::fmt;

custom_dimension!(NodeId typeof String);

/// Node classification within the transport network.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    /// A dispatch origin.
    Warehouse,
    /// A transfer platform which cannot be a delivery point.
    Intermediate,
    /// A delivery destination.
    City,
}

/// A set of transport modes stored as a bit mask over catalog indices.
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct ModeSet(u64);

impl ModeSet {
    /// Adds the given mode to the set.
    pub fn insert(&mut self, mode: TransportMode) {
        debug_assert!(mode < super::MAX_TRANSPORT_MODES);
        self.0 |= 1 << mode;
    }

    /// Returns true if the set contains the given mode.
    pub fn contains(&self, mode: TransportMode) -> bool {
        self.0 & (1 << mode) != 0
    }

    /// Returns true if the set has no modes.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the amount of modes in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over modes in the set in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = TransportMode> + '_ {
        let mask = self.0;
        (0..super::MAX_TRANSPORT_MODES).filter(move |mode| mask & (1 << mode) != 0)
    }
}

impl fmt::Debug for ModeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A directed arc of the transport network.
#[derive(Clone, Debug)]
pub struct Link {
    /// A target location.
    pub to: Location,
    /// A distance between endpoints.
    pub distance: Distance,
    /// Transport modes allowed on the arc.
    pub modes: ModeSet,
}

/// Keeps node classification together with its dimensions.
#[derive(Clone, Debug)]
pub struct NodeRecord {
    /// A node kind.
    pub kind: NodeKind,
    /// Node dimensions: id and any display metadata.
    pub dimens: Dimensions,
}

/// Provides read-only access to the transport network used by route search.
pub trait NetworkView {
    /// Returns the total amount of nodes.
    fn size(&self) -> usize;

    /// Returns the node record at the given location.
    fn record(&self, location: Location) -> &NodeRecord;

    /// Returns outgoing links of the given location.
    fn links(&self, location: Location) -> &[Link];

    /// Resolves a node id to its location.
    fn resolve(&self, id: &str) -> Option<Location>;
}

/// An owned immutable snapshot of the transport network.
pub struct NetworkSnapshot {
    records: Vec<NodeRecord>,
    links: Vec<Vec<Link>>,
    index: FxHashMap<String, Location>,
}

impl NetworkSnapshot {
    /// Returns the id of the node at the given location.
    pub fn node_id(&self, location: Location) -> &str {
        self.records[location].dimens.get_node_id().expect("cannot get node id")
    }
}

impl NetworkView for NetworkSnapshot {
    fn size(&self) -> usize {
        self.records.len()
    }

    fn record(&self, location: Location) -> &NodeRecord {
        &self.records[location]
    }

    fn links(&self, location: Location) -> &[Link] {
        self.links[location].as_slice()
    }

    fn resolve(&self, id: &str) -> Option<Location> {
        self.index.get(id).copied()
    }
}

struct EdgeDef {
    from: String,
    to: String,
    distance: Distance,
    modes: Vec<String>,
}

/// Provides a way to build a network snapshot on top of a transport catalog.
/// Edges are undirected: each of them is expanded into two directed arcs.
pub struct NetworkSnapshotBuilder<'a> {
    catalog: &'a TransportCatalog,
    nodes: Vec<(String, NodeKind, Dimensions)>,
    edges: Vec<EdgeDef>,
}

impl<'a> NetworkSnapshotBuilder<'a> {
    /// Creates a new instance of `NetworkSnapshotBuilder`.
    pub fn new(catalog: &'a TransportCatalog) -> Self {
        Self { catalog, nodes: Vec::default(), edges: Vec::default() }
    }

    /// Adds a node with the given id and kind. Locations follow insertion order.
    pub fn with_node(self, id: &str, kind: NodeKind) -> Self {
        self.with_node_dimens(id, kind, Dimensions::default())
    }

    /// Adds a node with extra dimensions attached.
    pub fn with_node_dimens(mut self, id: &str, kind: NodeKind, dimens: Dimensions) -> Self {
        self.nodes.push((id.to_string(), kind, dimens));
        self
    }

    /// Adds an undirected edge between two nodes with the given mode names.
    pub fn with_edge<I, S>(mut self, from: &str, to: &str, distance: Distance, modes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.edges.push(EdgeDef {
            from: from.to_string(),
            to: to.to_string(),
            distance,
            modes: modes.into_iter().map(|mode| mode.as_ref().to_string()).collect(),
        });
        self
    }

    /// Builds a network snapshot.
    pub fn build(self) -> GenericResult<NetworkSnapshot> {
        let mut index = FxHashMap::default();
        let mut records = Vec::with_capacity(self.nodes.len());

        for (location, (id, kind, mut dimens)) in self.nodes.into_iter().enumerate() {
            if index.insert(id.clone(), location).is_some() {
                return Err(format!("duplicate node id: '{id}'").into());
            }

            dimens.set_node_id(id);
            records.push(NodeRecord { kind, dimens });
        }

        let mut links: Vec<Vec<Link>> = vec![Vec::default(); records.len()];

        for edge in self.edges.into_iter() {
            let resolve = |id: &str| index.get(id).copied().ok_or_else(|| format!("unknown edge endpoint: '{id}'"));
            let (from, to) = (resolve(edge.from.as_str())?, resolve(edge.to.as_str())?);

            if from == to {
                return Err(format!("self loop edge at: '{}'", edge.from).into());
            }

            if edge.distance <= 0. {
                return Err(format!("non-positive distance between: '{}' and '{}'", edge.from, edge.to).into());
            }

            if edge.modes.is_empty() {
                return Err(format!("no transport modes between: '{}' and '{}'", edge.from, edge.to).into());
            }

            let mut modes = ModeSet::default();
            for name in edge.modes.iter() {
                let mode = self
                    .catalog
                    .mode_index(name)
                    .ok_or_else(|| format!("unknown transport mode: '{name}'"))?;
                modes.insert(mode);
            }

            links[from].push(Link { to, distance: edge.distance, modes });
            links[to].push(Link { to: from, distance: edge.distance, modes });
        }

        Ok(NetworkSnapshot { records, links, index })
    }
}
