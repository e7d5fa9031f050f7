use crate::models::network::{NetworkSnapshot, TransportCatalog};

/// Defines a complete routing problem as a transport network with its mode catalog.
pub struct Problem {
    /// A transport network snapshot.
    pub network: NetworkSnapshot,
    /// A transport mode catalog.
    pub catalog: TransportCatalog,
}
