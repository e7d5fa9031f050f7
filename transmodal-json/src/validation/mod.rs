//! This module provides functionality to validate the problem definition for logical
//! correctness before it is mapped onto the core model.
//!
//! Each rule is identified by a stable error code: `E11xx` codes cover the transport
//! network, `E12xx` codes cover the mode catalog.

use crate::format::problem::{Edge, Node, Problem};
use crate::format::{FormatError, MultiFormatError};

pub(crate) mod common;

mod catalog;
use self::catalog::validate_catalog;

mod network;
use self::network::validate_network;

/// A validation context which keeps essential information.
pub struct ValidationContext<'a> {
    /// An original problem.
    pub problem: &'a Problem,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// Validates the problem on the set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let errors = validate_catalog(self)
            .err()
            .into_iter()
            .chain(validate_network(self).err())
            .flat_map(|err| err.errors)
            .collect::<Vec<_>>();

        if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
    }

    fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.problem.network.nodes.iter()
    }

    fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.problem.network.edges.iter()
    }
}
