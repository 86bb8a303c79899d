//! Contains the error type used throughout the library.

use std::io::Error as IoError;

use thiserror::Error as ThisError;

use crate::NumberBase;

//		BigIntegerError
/// Represents all failures a [`BigInteger`](crate::BigInteger) operation can
/// report under [`ErrorPolicy::Raise`](crate::ErrorPolicy::Raise).
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum BigIntegerError {
    /// The digit run starts with a character that is not a digit of the
    /// detected base.
    #[error("Invalid digit for {base} number: {digit:?}")]
    InvalidDigit { digit: char, base: NumberBase },

    /// The digit run ends with a `'` or `_` separator.
    #[error("Digit run ends with separator {0:?}")]
    TrailingSeparator(char),

    /// A digit vector contains a value outside the digit set of its base.
    #[error("Invalid digit value for {base} number: {value}")]
    InvalidDigitValue { value: i32, base: NumberBase },

    /// A digit vector mixes positive and negative digits.
    #[error("Digits do not share the sign of the leading digit")]
    MixedDigitSigns,

    /// A value assigned under the raise policy converted to NaN.
    #[error("Value is not a number")]
    NotANumber,

    /// Division or modulo of a non-zero value by zero.
    #[error("Division by zero is not allowed!")]
    DivisionByZero,

    /// Division or modulo of zero by zero.
    #[error("Zero divided by zero is not allowed!")]
    ZeroDividedByZero,

    /// Digit access past the most significant digit.
    #[error("Digit index {index} out of range for a {len} digit number")]
    IndexOutOfRange { index: usize, len: usize },

    /// Reading a token from an input stream failed.
    #[error("Failed to read input: {0}")]
    Io(String),
}

impl BigIntegerError {
    /// Whether the error comes from rejecting malformed input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            BigIntegerError::InvalidDigit { .. }
                | BigIntegerError::TrailingSeparator(_)
                | BigIntegerError::InvalidDigitValue { .. }
                | BigIntegerError::MixedDigitSigns
                | BigIntegerError::NotANumber
        )
    }

    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, BigIntegerError::DivisionByZero | BigIntegerError::ZeroDividedByZero)
    }
}

impl From<IoError> for BigIntegerError {
    fn from(err: IoError) -> Self {
        BigIntegerError::Io(err.to_string())
    }
}
