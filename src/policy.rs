use serde::{Deserialize, Serialize};

/// How a [`BigInteger`](crate::BigInteger) reacts to malformed input and to
/// division or modulo by zero.
///
/// The policy travels with the value: results of an operation take the policy
/// of the left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Failures are returned as [`BigIntegerError`](crate::BigIntegerError)s.
    /// The `/` and `%` operators panic on a zero divisor, like the native
    /// integer types do.
    Raise,
    /// Failures produce the NaN value, which then propagates through every
    /// later operation.
    #[default]
    Sentinel,
}

impl ErrorPolicy {
    pub fn is_raise(self) -> bool {
        self == ErrorPolicy::Raise
    }
}
