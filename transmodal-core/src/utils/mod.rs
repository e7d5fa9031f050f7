//! A collection of various utility helpers.

mod comparison;
pub use self::comparison::*;

mod error;
pub use self::error::*;

mod logging;
pub use self::logging::*;

mod timing;
pub use self::timing::*;

mod types;
pub use self::types::*;
