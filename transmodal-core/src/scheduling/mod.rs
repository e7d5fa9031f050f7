//! Provides package registration, shipment consolidation and schedule generation logic.

mod consolidation;

mod scheduler;
pub use self::scheduler::*;

mod timeline;
pub use self::timeline::*;
