use std::fmt::{Display, Formatter};

/// Represents any possible error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenericError(String);

/// A type alias for result with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(value: String) -> Self {
        GenericError(value)
    }
}

impl From<&str> for GenericError {
    fn from(value: &str) -> Self {
        GenericError(value.to_string())
    }
}
