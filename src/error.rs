//! Errors raised by network operations

use thiserror::Error;

use crate::network::GateKind;

/// Error returned by the operations on a [`Network`](crate::Network)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The signal name was never declared
    #[error("signal {0} is not declared")]
    NotFound(char),

    /// A gate was declared with the wrong number of inputs for its kind
    #[error("{kind} gate expects {expected} input(s), got {got}")]
    InvalidArity {
        /// Kind of the gate being declared
        kind: GateKind,
        /// Number of inputs required by this kind
        expected: usize,
        /// Number of inputs given
        got: usize,
    },

    /// The gate keyword is not one of the supported kinds
    #[error("unknown gate type {0}")]
    UnknownGate(String),
}
