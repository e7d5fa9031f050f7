//! Defines the domain model of the engine.

pub mod common;
pub mod network;
pub mod solution;

mod domain;
pub use self::domain::*;
