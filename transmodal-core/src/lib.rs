//! A core crate of the transmodal project.
//!
//! It provides building blocks to describe a multi-modal transport network, search cheapest
//! and fastest delivery routes over it, classify them into service tiers and consolidate
//! registered packages onto shared vehicles with a final delivery timetable.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[macro_use]
mod macros;

pub mod models;
pub mod prelude;
pub mod routing;
pub mod scheduling;
pub mod utils;
