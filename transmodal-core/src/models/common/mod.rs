//! Common types shared by the whole domain model.

mod dimens;
pub use self::dimens::*;

mod domain;
pub use self::domain::*;

mod primitives;
pub use self::primitives::*;
