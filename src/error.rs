//! Errors
//!
//! Matching never fails. Only turning configuration text into an
//! [`Algorithm`](crate::Algorithm) can.

extern crate alloc;
use alloc::string::{String, ToString};

/// Unrecognized algorithm name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown search algorithm \"{name}\"")]
pub struct ParseAlgorithmError {
    name: String,
}

impl ParseAlgorithmError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}
