//! This module defines the transmodal json format: a problem definition with a transport
//! network and a mode catalog on the input side, a delivery schedule on the output side.

extern crate serde_json;

use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::io::BufWriter;

mod entities;
pub use self::entities::*;

pub mod problem;
pub mod solution;

/// An error type which represents an issue with the format of input data.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` with details.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Serializes error into json.
    pub fn to_json(&self) -> String {
        let mut buffer = String::new();
        let writer = unsafe { BufWriter::new(buffer.as_mut_vec()) };
        serde_json::to_writer_pretty(writer, &self).unwrap();

        buffer
    }

    /// Formats multiple format errors into string.
    pub fn format_many(errors: &[Self], separator: &str) -> String {
        errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join(separator)
    }

    /// Serializes multiple format errors into json.
    pub fn format_many_to_json(errors: &[Self]) -> String {
        let mut buffer = String::new();
        let writer = unsafe { BufWriter::new(buffer.as_mut_vec()) };
        serde_json::to_writer_pretty(writer, errors).unwrap();

        buffer
    }
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
    }
}

/// A wrapper over multiple format errors.
#[derive(Clone, Debug)]
pub struct MultiFormatError {
    /// Actual format errors.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Serializes all errors into json.
    pub fn to_json(&self) -> String {
        FormatError::format_many_to_json(self.errors.as_slice())
    }
}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        Self { errors }
    }
}

impl Display for MultiFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", FormatError::format_many(self.errors.as_slice(), "\n"))
    }
}

impl std::error::Error for MultiFormatError {}
