use thiserror::Error;

/// Errors raised while building a [`Swarm`](`crate::swarm::Swarm`).
///
/// Both variants are construction-time conditions. Once a swarm exists, advancing it cannot fail.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SwarmError {
    /// The configuration is unusable, e.g. an empty swarm, missing or inverted bounds, negative
    /// coefficients, or bounds whose dimension disagrees with the objective.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A vector supplied at construction (a start position or a velocity limit) has the wrong
    /// number of components.
    #[error("invalid dimension: expected {expected} components, found {actual}")]
    InvalidDimension {
        /// The dimension of the search space.
        expected: usize,
        /// The length of the offending vector.
        actual: usize,
    },
}

impl SwarmError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub(crate) fn check_dimension(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::InvalidDimension { expected, actual })
        }
    }
}
