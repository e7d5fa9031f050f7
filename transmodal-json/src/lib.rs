//! A json extension crate of the transmodal project.
//!
//! It reads a transport problem definition from a custom json format, maps it onto the
//! core domain model and writes the computed delivery schedule back to json with absolute
//! timestamps in RFC3339 format.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/generator/mod.rs"]
pub mod generator;

pub mod format;
pub mod utils;
pub mod validation;

pub use transmodal_core as core;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use transmodal_core::models::common::Timestamp;

const SECONDS_PER_MINUTE: Timestamp = 60.;

/// Formats a timestamp in minutes since the Unix epoch as an RFC3339 string.
pub(crate) fn format_time(time: Timestamp) -> String {
    OffsetDateTime::from_unix_timestamp((time * SECONDS_PER_MINUTE) as i64)
        .ok()
        .and_then(|time| time.format(&Rfc3339).ok())
        .expect("cannot format time")
}

/// Parses an RFC3339 string into a timestamp in minutes since the Unix epoch.
pub(crate) fn parse_time(time: &str) -> Timestamp {
    parse_time_safe(time).expect("cannot parse time")
}

/// Parses an RFC3339 string into a timestamp without panic.
pub(crate) fn parse_time_safe(time: &str) -> Result<Timestamp, time::error::Parse> {
    OffsetDateTime::parse(time, &Rfc3339).map(|time| time.unix_timestamp() as Timestamp / SECONDS_PER_MINUTE)
}
