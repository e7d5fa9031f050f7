//! Defines the transport network model.

mod catalog;
pub use self::catalog::*;

mod snapshot;
pub use self::snapshot::*;
