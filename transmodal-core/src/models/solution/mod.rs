//! Defines route plans, delivery options and the fleet registry.

mod options;
pub use self::options::*;

mod registry;
pub use self::registry::*;

mod route;
pub use self::route::*;
