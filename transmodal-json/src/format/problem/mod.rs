//! Specifies logic to read a problem definition and map it onto the core domain model.

#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

use super::*;
use std::io::{BufReader, Read};
use transmodal_core::models::Problem as CoreProblem;

mod model;
pub use self::model::*;

mod problem_reader;
use self::problem_reader::map_to_problem;

pub(crate) type ApiProblem = Problem;

/// Reads the transport problem in transmodal json format from different sources.
pub trait TransmodalProblem {
    /// Reads the problem definition and returns the core problem model.
    fn read_transmodal(self) -> Result<CoreProblem, MultiFormatError>;
}

impl<R: Read> TransmodalProblem for BufReader<R> {
    fn read_transmodal(self) -> Result<CoreProblem, MultiFormatError> {
        let problem = deserialize_problem(self)?;

        map_to_problem(problem)
    }
}

impl TransmodalProblem for String {
    fn read_transmodal(self) -> Result<CoreProblem, MultiFormatError> {
        let problem = deserialize_problem(BufReader::new(self.as_bytes()))?;

        map_to_problem(problem)
    }
}

impl TransmodalProblem for ApiProblem {
    fn read_transmodal(self) -> Result<CoreProblem, MultiFormatError> {
        map_to_problem(self)
    }
}
