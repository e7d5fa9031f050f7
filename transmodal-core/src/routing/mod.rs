//! Provides route search and delivery tier planning logic.

mod planner;
pub use self::planner::*;

mod search;
pub use self::search::*;
