use lazy_static::*;

use crate::BigInteger;

lazy_static! {
    pub static ref ZERO: BigInteger = BigInteger::zero_state();
    pub static ref PLUS_ONE: BigInteger = BigInteger::one_state(false);
    pub static ref MINUS_ONE: BigInteger = BigInteger::one_state(true);
    pub static ref NAN: BigInteger = BigInteger::nan_state();
}
