//! Big Integer \
//! This crate provides:
//! - [`BigInteger`]: a sign-magnitude arbitrary-precision integer that keeps its
//!   decimal and binary digits in sync and renders itself in binary, octal,
//!   decimal and hexadecimal.
//! - [`ErrorPolicy`]: whether malformed input and division by zero produce a
//!   NaN value or an error.
//!
//! ```
//! use big_integer::{BigInteger, ErrorPolicy};
//!
//! let a: BigInteger = "-0x1F".into();
//! assert_eq!(a.get_binary_number("", "", 8), "-0b00011111");
//! assert!((&a / &BigInteger::zero()).is_nan());
//!
//! let strict = a.with_policy(ErrorPolicy::Raise);
//! assert!(strict.try_div(&BigInteger::zero()).is_err());
//! ```

// 去除前导零, 全为零时保留一个零
macro_rules! skip_leading_zero {
    ($vec: expr, $zero: expr) => {
        {
            let trimmed: Vec<_> = $vec
                .into_iter()
                .skip_while(|x| *x == $zero)
                .collect();
            if trimmed.is_empty() {
                vec![$zero]
            } else {
                trimmed
            }
        }
    };
}

mod arithmetic;
mod big_integer;
mod big_integer_cache;
mod big_integer_constants;
mod conversion;
mod errors;
mod number_base;
mod parser;
mod policy;
mod representation;

pub use big_integer::BigInteger;
pub use errors::BigIntegerError;
pub use number_base::NumberBase;
pub use policy::ErrorPolicy;
pub use representation::Representations;
