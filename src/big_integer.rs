//! # BigInteger
//! Sign-magnitude arbitrary-precision integers that keep their decimal and
//! binary digits in sync and render themselves in binary, octal, decimal and
//! hexadecimal.
//! # Example
//! ```
//! use big_integer::BigInteger;
//!
//! let a: BigInteger = "0b11111111".into();
//! assert_eq!(a.to_string(), "255");
//! assert_eq!(a.get_octal_number("", "", 0), "0o377");
//! assert_eq!(a.get_hexadecimal_number("", "", 0), "0xFF");
//!
//! let b = BigInteger::from(123);
//! assert_eq!((&a * &b).to_string(), "31365");
//! assert_eq!((&a / &b).to_string(), "2");
//! assert_eq!((&a % &b).to_string(), "9");
//! assert_eq!((&a << 4).to_string(), "4080");
//! ```
//!

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::io::BufRead;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Index, Neg,
};
use std::str::FromStr;

use serde::de::{Error as SerdeError, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::arithmetic::*;
use crate::big_integer_cache::*;
use crate::big_integer_constants::NAN_STR;
use crate::conversion::*;
use crate::errors::BigIntegerError;
use crate::parser::{self, ParsedNumber};
use crate::representation::Representations;
use crate::{ErrorPolicy, NumberBase};

/// An arbitrary-precision signed integer, or the NaN sentinel.
///
/// The magnitude is held twice, as decimal digits and as binary digits, and
/// both are kept free of leading zeros. Zero is never negative. NaN has empty
/// digit arrays and renders as `"NaN"` in every base.
///
/// Every operation returns a fully built value; the assigning operators
/// replace the whole state of the left operand.
#[derive(Debug, Clone)]
pub struct BigInteger {
    negative: bool,
    decimal_digits: Vec<u8>,
    binary_digits: Vec<bool>,
    base: NumberBase,
    policy: ErrorPolicy,
    representations: Representations,
}

// 实现构造
impl BigInteger {
    fn from_canonical(
        negative: bool,
        decimal_digits: Vec<u8>,
        binary_digits: Vec<bool>,
        base: NumberBase,
    ) -> Self {
        let negative = negative && decimal_digits.iter().any(|&d| d != 0);
        let representations = Representations::render(negative, &decimal_digits, &binary_digits);
        BigInteger {
            negative,
            decimal_digits,
            binary_digits,
            base,
            policy: ErrorPolicy::default(),
            representations,
        }
    }

    fn from_decimal_magnitude(negative: bool, decimal_digits: Vec<u8>) -> Self {
        let binary_digits = decimal_to_bits(&decimal_digits);
        BigInteger::from_canonical(negative, decimal_digits, binary_digits, NumberBase::Decimal)
    }

    fn from_binary_magnitude(negative: bool, binary_digits: Vec<bool>, base: NumberBase) -> Self {
        let decimal_digits = bits_to_decimal(&binary_digits);
        BigInteger::from_canonical(negative, decimal_digits, binary_digits, base)
    }

    fn from_parsed(parsed: ParsedNumber) -> Self {
        match parsed {
            ParsedNumber::Zero => ZERO.clone(),
            ParsedNumber::One { negative } => {
                trace!(negative, "unit fast path");
                if negative { MINUS_ONE.clone() } else { PLUS_ONE.clone() }
            }
            ParsedNumber::Digits { negative, base: NumberBase::Decimal, digits } => {
                BigInteger::from_decimal_magnitude(negative, digits)
            }
            ParsedNumber::Digits { negative, base, digits } => {
                let binary_digits = digits_to_bits(&digits, base);
                BigInteger::from_binary_magnitude(negative, binary_digits, base)
            }
        }
    }

    pub(crate) fn zero_state() -> Self {
        BigInteger::from_canonical(false, vec![0], vec![false], NumberBase::Decimal)
    }

    pub(crate) fn one_state(negative: bool) -> Self {
        BigInteger::from_canonical(negative, vec![1], vec![true], NumberBase::Decimal)
    }

    pub(crate) fn nan_state() -> Self {
        BigInteger {
            negative: false,
            decimal_digits: vec![],
            binary_digits: vec![],
            base: NumberBase::Decimal,
            policy: ErrorPolicy::default(),
            representations: Representations::nan(),
        }
    }

    fn nan_with(policy: ErrorPolicy) -> Self {
        NAN.clone().with_policy(policy)
    }

    /// Applies `policy` to the outcome of a fallible step: errors become NaN
    /// under [`ErrorPolicy::Sentinel`] and are passed on under
    /// [`ErrorPolicy::Raise`].
    fn resolve(result: Result<Self, BigIntegerError>, policy: ErrorPolicy) -> Result<Self, BigIntegerError> {
        match result {
            Ok(value) => Ok(value.with_policy(policy)),
            Err(err) if !policy.is_raise() => {
                debug!(%err, "replacing failed result with NaN");
                Ok(BigInteger::nan_with(policy))
            }
            Err(err) => Err(err),
        }
    }

    /// Zero.
    pub fn new() -> Self {
        ZERO.clone()
    }

    pub fn zero() -> Self {
        ZERO.clone()
    }

    pub fn one() -> Self {
        PLUS_ONE.clone()
    }

    pub fn minus_one() -> Self {
        MINUS_ONE.clone()
    }

    pub fn nan() -> Self {
        NAN.clone()
    }

    /// Returns the same value carrying `policy`.
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parses text such as `-1'024`, `0xFF`, `b1010` or `0o777`.
    ///
    /// Malformed input is always reported as an error; the value carries the
    /// default policy.
    pub fn parse(text: &str) -> Result<Self, BigIntegerError> {
        parser::parse_text(text).map(BigInteger::from_parsed)
    }

    /// Parses text, resolving malformed input through `policy`.
    pub fn parse_with_policy(text: &str, policy: ErrorPolicy) -> Result<Self, BigIntegerError> {
        BigInteger::resolve(BigInteger::parse(text), policy)
    }

    /// Builds a value from per-digit integers of `base`, most significant
    /// first. All non-zero digits carry the sign of the number, e.g.
    /// `[-1, -0xF]` in hexadecimal is `-0x1F`.
    pub fn from_digits(digits: &[i32], base: NumberBase) -> Result<Self, BigIntegerError> {
        parser::parse_digits(digits, base).map(BigInteger::from_parsed)
    }

    pub fn from_digits_with_policy(
        digits: &[i32],
        base: NumberBase,
        policy: ErrorPolicy,
    ) -> Result<Self, BigIntegerError> {
        BigInteger::resolve(BigInteger::from_digits(digits, base), policy)
    }

    /// Builds a non-negative value from bits, most significant first.
    pub fn from_bits(bits: &[bool]) -> Self {
        BigInteger::from_parsed(parser::parse_bits(bits))
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        BigInteger::new()
    }
}

// 实现解析
impl FromStr for BigInteger {
    type Err = BigIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInteger::parse(s)
    }
}

/// Malformed text gives NaN.
impl From<&str> for BigInteger {
    fn from(val: &str) -> Self {
        BigInteger::parse(val).unwrap_or_else(|err| {
            debug!(%err, input = val, "malformed input, using NaN");
            BigInteger::nan()
        })
    }
}

impl From<String> for BigInteger {
    fn from(val: String) -> Self {
        BigInteger::from(val.as_str())
    }
}

impl From<&String> for BigInteger {
    fn from(val: &String) -> Self {
        BigInteger::from(val.as_str())
    }
}

impl From<Vec<bool>> for BigInteger {
    fn from(val: Vec<bool>) -> Self {
        BigInteger::from_bits(&val)
    }
}

impl From<&[bool]> for BigInteger {
    fn from(val: &[bool]) -> Self {
        BigInteger::from_bits(val)
    }
}

macro_rules! impl_integer_to_big_integer {
    ($($t: ty),*) => {
    $(
    impl From<$t> for BigInteger {
        fn from(val: $t) -> Self {
            BigInteger::from(val.to_string().as_str())
        }
    }
    )*
    };
}

macro_rules! impl_float_to_big_integer {
    ($($f: ty),*) => {
    $(
    /// Truncates toward zero. NaN and infinities give NaN.
    impl From<$f> for BigInteger {
        fn from(val: $f) -> Self {
            BigInteger::from(val.trunc().to_string().as_str())
        }
    }
    )*
    };
}

impl_integer_to_big_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_to_big_integer!(f32, f64);

// 实现重新赋值
impl BigInteger {
    /// Replaces the value, keeping this value's policy.
    ///
    /// Conversions that fail (malformed text, non-finite floats) yield NaN.
    /// Under [`ErrorPolicy::Raise`] a NaN is rejected with
    /// [`BigIntegerError::NotANumber`] and the current value is kept.
    pub fn assign<T: Into<BigInteger>>(&mut self, value: T) -> Result<(), BigIntegerError> {
        let value = value.into();
        if value.is_nan() && self.policy.is_raise() {
            return Err(BigIntegerError::NotANumber);
        }
        *self = value.with_policy(self.policy);
        Ok(())
    }

    /// Re-parses from text. Under [`ErrorPolicy::Raise`] a malformed input is
    /// returned as an error and the current value is kept.
    pub fn reset(&mut self, text: &str) -> Result<(), BigIntegerError> {
        *self = BigInteger::parse_with_policy(text, self.policy)?;
        Ok(())
    }

    pub fn assign_digits(&mut self, digits: &[i32], base: NumberBase) -> Result<(), BigIntegerError> {
        *self = BigInteger::from_digits_with_policy(digits, base, self.policy)?;
        Ok(())
    }

    pub fn assign_bits(&mut self, bits: &[bool]) {
        let policy = self.policy;
        *self = BigInteger::from_bits(bits).with_policy(policy);
    }

    /// Reads the next whitespace-delimited token from `reader` and resets
    /// from it. An exhausted reader yields an empty token, i.e. zero.
    pub fn read_token<R: BufRead>(&mut self, reader: &mut R) -> Result<(), BigIntegerError> {
        let mut token: Vec<u8> = Vec::new();
        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut consumed = 0;
            let mut complete = false;
            for &byte in buf {
                consumed += 1;
                if byte.is_ascii_whitespace() {
                    if token.is_empty() {
                        continue;
                    }
                    complete = true;
                    break;
                }
                token.push(byte);
            }
            reader.consume(consumed);
            if complete {
                break;
            }
        }
        self.reset(&String::from_utf8_lossy(&token))
    }

    pub fn swap(&mut self, other: &mut BigInteger) {
        std::mem::swap(self, other);
    }
}

// 实现读取
impl BigInteger {
    /// Decimal rendering, e.g. `get_decimal_number("", "", 6)` gives `-000042`
    /// for -42. See [`Representations::format`] for the option rules.
    pub fn get_decimal_number(&self, prefix: &str, postfix: &str, min_digits: usize) -> String {
        self.representations.format(NumberBase::Decimal, prefix, postfix, min_digits)
    }

    pub fn get_binary_number(&self, prefix: &str, postfix: &str, min_digits: usize) -> String {
        self.representations.format(NumberBase::Binary, prefix, postfix, min_digits)
    }

    pub fn get_octal_number(&self, prefix: &str, postfix: &str, min_digits: usize) -> String {
        self.representations.format(NumberBase::Octal, prefix, postfix, min_digits)
    }

    pub fn get_hexadecimal_number(&self, prefix: &str, postfix: &str, min_digits: usize) -> String {
        self.representations.format(NumberBase::Hexadecimal, prefix, postfix, min_digits)
    }

    /// Default rendering in `base`.
    pub fn get_big_integer(&self, base: NumberBase) -> String {
        self.representations.get(base).to_string()
    }

    /// Borrowed view of the decimal rendering.
    pub fn as_str(&self) -> &str {
        self.representations.decimal()
    }

    pub fn representations(&self) -> &Representations {
        &self.representations
    }

    /// Decimal magnitude, most significant digit first. Empty for NaN.
    pub fn get_decimal_digits(&self) -> &[u8] {
        &self.decimal_digits
    }

    /// Binary magnitude, most significant bit first. Empty for NaN.
    pub fn get_binary_digits(&self) -> &[bool] {
        &self.binary_digits
    }

    pub fn base(&self) -> NumberBase {
        self.base
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Number of decimal digits, 0 for NaN.
    pub fn len(&self) -> usize {
        self.decimal_digits.len()
    }

    /// Same as [`is_nan`](BigInteger::is_nan): only NaN has no digits, every
    /// number including zero has at least one.
    pub fn is_empty(&self) -> bool {
        self.decimal_digits.is_empty()
    }

    /// Decimal digit at `index`, counted from the least significant end.
    pub fn at(&self, index: usize) -> Result<u8, BigIntegerError> {
        let len = self.decimal_digits.len();
        if index < len {
            Ok(self.decimal_digits[len - 1 - index])
        } else {
            Err(BigIntegerError::IndexOutOfRange { index, len })
        }
    }

    pub fn is_nan(&self) -> bool {
        self.decimal_digits.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.decimal_digits == [0u8]
    }

    pub fn is_positive_one(&self) -> bool {
        !self.negative && self.decimal_digits == [1u8]
    }

    pub fn is_negative_one(&self) -> bool {
        self.negative && self.decimal_digits == [1u8]
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True for every value except zero and NaN.
    pub fn to_bool(&self) -> bool {
        !self.is_nan() && !self.is_zero()
    }
}

/// Out of range positions read as `0`.
impl Index<usize> for BigInteger {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        let len = self.decimal_digits.len();
        if index < len {
            &self.decimal_digits[len - 1 - index]
        } else {
            &0
        }
    }
}

impl From<&BigInteger> for bool {
    fn from(val: &BigInteger) -> Self {
        val.to_bool()
    }
}

impl From<BigInteger> for String {
    fn from(val: BigInteger) -> Self {
        val.as_str().to_string()
    }
}

// 实现打印
impl Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 实现大小比较
impl BigInteger {
    fn compare_values(&self, other: &BigInteger) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => compare_magnitudes(&self.decimal_digits, &other.decimal_digits),
            (true, true) => compare_magnitudes(&self.decimal_digits, &other.decimal_digits).reverse(),
        }
    }
}

/// Two NaNs are equal; NaN is unequal to every number.
impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.decimal_digits == other.decimal_digits
    }
}

impl Eq for BigInteger {}

/// NaN is unordered against numbers, so `<`, `<=`, `>`, `>=` are all false
/// when exactly one side is NaN.
impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_nan(), other.is_nan()) {
            (false, false) => Some(self.compare_values(other)),
            (true, true) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl Hash for BigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.decimal_digits.hash(state);
    }
}

// 实现绝对值与取反
impl BigInteger {
    fn with_sign(&self, negative: bool) -> BigInteger {
        if self.is_nan() {
            return self.clone();
        }
        BigInteger::from_canonical(
            negative,
            self.decimal_digits.clone(),
            self.binary_digits.clone(),
            self.base,
        )
        .with_policy(self.policy)
    }

    pub fn abs(&self) -> BigInteger {
        self.with_sign(false)
    }

    /// Flips the sign in place. Zero and NaN are unaffected.
    pub fn invert_sign(&mut self) {
        *self = self.with_sign(!self.negative);
    }
}

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        self.with_sign(!self.negative)
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        self.with_sign(!self.negative)
    }
}

// 实现加减乘
impl BigInteger {
    fn add_impl(&self, rhs: &BigInteger) -> BigInteger {
        if self.is_nan() || rhs.is_nan() {
            return BigInteger::nan_with(self.policy);
        }
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return rhs.clone().with_policy(self.policy);
        }

        let result = if self.negative == rhs.negative {
            BigInteger::from_decimal_magnitude(
                self.negative,
                add_digits(&self.decimal_digits, &rhs.decimal_digits),
            )
        } else {
            match compare_magnitudes(&self.decimal_digits, &rhs.decimal_digits) {
                Ordering::Equal => ZERO.clone(),
                Ordering::Greater => BigInteger::from_decimal_magnitude(
                    self.negative,
                    sub_digits(&self.decimal_digits, &rhs.decimal_digits),
                ),
                Ordering::Less => BigInteger::from_decimal_magnitude(
                    rhs.negative,
                    sub_digits(&rhs.decimal_digits, &self.decimal_digits),
                ),
            }
        };
        result.with_policy(self.policy)
    }

    fn sub_impl(&self, rhs: &BigInteger) -> BigInteger {
        self.add_impl(&-rhs)
    }

    fn mul_impl(&self, rhs: &BigInteger) -> BigInteger {
        if self.is_nan() || rhs.is_nan() {
            return BigInteger::nan_with(self.policy);
        }
        if self.is_zero() || rhs.is_zero() {
            return ZERO.clone().with_policy(self.policy);
        }
        if self.is_positive_one() {
            return rhs.clone().with_policy(self.policy);
        }
        if self.is_negative_one() {
            return (-rhs).with_policy(self.policy);
        }
        if rhs.is_positive_one() {
            return self.clone();
        }
        if rhs.is_negative_one() {
            return -self;
        }

        let negative = self.negative != rhs.negative;
        BigInteger::from_decimal_magnitude(negative, mul_digits(&self.decimal_digits, &rhs.decimal_digits))
            .with_policy(self.policy)
    }
}

// 实现除法与求余
impl BigInteger {
    /// Truncating division of two numbers, before the policy is applied.
    fn div_rem_impl(&self, rhs: &BigInteger) -> Result<(BigInteger, BigInteger), BigIntegerError> {
        if rhs.is_zero() {
            return Err(if self.is_zero() {
                BigIntegerError::ZeroDividedByZero
            } else {
                BigIntegerError::DivisionByZero
            });
        }
        if self.is_zero() {
            return Ok((BigInteger::zero(), BigInteger::zero()));
        }

        let quotient_negative = self.negative != rhs.negative;

        if compare_magnitudes(&self.decimal_digits, &rhs.decimal_digits) == Ordering::Less {
            return Ok((BigInteger::zero(), self.clone()));
        }
        if rhs.decimal_digits == [1u8] {
            return Ok((self.with_sign(quotient_negative), BigInteger::zero()));
        }

        trace!(
            dividend_bits = self.binary_digits.len(),
            divisor_bits = rhs.binary_digits.len(),
            "shift-subtract division"
        );
        let (quotient, remainder) = div_rem_bits(&self.binary_digits, &rhs.binary_digits);
        Ok((
            BigInteger::from_binary_magnitude(quotient_negative, quotient, NumberBase::Decimal),
            BigInteger::from_binary_magnitude(self.negative, remainder, NumberBase::Decimal),
        ))
    }

    /// Quotient and remainder with truncation toward zero; the remainder takes
    /// the sign of the dividend.
    ///
    /// A zero divisor is an error under [`ErrorPolicy::Raise`] and gives NaN
    /// for both parts under [`ErrorPolicy::Sentinel`]. A NaN operand gives NaN.
    pub fn try_div_rem(&self, rhs: &BigInteger) -> Result<(BigInteger, BigInteger), BigIntegerError> {
        if self.is_nan() || rhs.is_nan() {
            return Ok((BigInteger::nan_with(self.policy), BigInteger::nan_with(self.policy)));
        }
        match self.div_rem_impl(rhs) {
            Ok((quotient, remainder)) => Ok((quotient.with_policy(self.policy), remainder.with_policy(self.policy))),
            Err(err) => {
                let nan = BigInteger::resolve(Err(err), self.policy)?;
                Ok((nan.clone(), nan))
            }
        }
    }

    pub fn try_div(&self, rhs: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        self.try_div_rem(rhs).map(|(quotient, _)| quotient)
    }

    pub fn try_rem(&self, rhs: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        self.try_div_rem(rhs).map(|(_, remainder)| remainder)
    }

    fn div_or_panic(&self, rhs: &BigInteger) -> BigInteger {
        match self.try_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }

    fn rem_or_panic(&self, rhs: &BigInteger) -> BigInteger {
        match self.try_rem(rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

// 实现位运算
impl BigInteger {
    /// Bitwise operations work on the magnitudes and give a non-negative result.
    fn bitwise_impl<F>(&self, rhs: &BigInteger, op: F) -> BigInteger
    where
        F: Fn(bool, bool) -> bool,
    {
        if self.is_nan() || rhs.is_nan() {
            return BigInteger::nan_with(self.policy);
        }
        let bits = bitwise(&self.binary_digits, &rhs.binary_digits, op);
        BigInteger::from_binary_magnitude(false, bits, NumberBase::Binary).with_policy(self.policy)
    }

    fn and_impl(&self, rhs: &BigInteger) -> BigInteger {
        self.bitwise_impl(rhs, |x, y| x && y)
    }

    fn or_impl(&self, rhs: &BigInteger) -> BigInteger {
        self.bitwise_impl(rhs, |x, y| x || y)
    }

    fn xor_impl(&self, rhs: &BigInteger) -> BigInteger {
        self.bitwise_impl(rhs, |x, y| x != y)
    }

    /// Multiplies the magnitude by `2^count`, keeping the sign.
    ///
    /// Like native integer shifts this panics on an impossible count, here one
    /// whose bit length overflows `usize`.
    fn shl_impl(&self, count: usize) -> BigInteger {
        if self.is_nan() || self.is_zero() || count == 0 {
            return self.clone();
        }
        let bits = shift_left_bits(&self.binary_digits, count);
        BigInteger::from_binary_magnitude(self.negative, bits, NumberBase::Binary).with_policy(self.policy)
    }

    /// Divides the magnitude by `2^count` toward zero, keeping the sign.
    fn shr_impl(&self, count: usize) -> BigInteger {
        if self.is_nan() || count == 0 {
            return self.clone();
        }
        if count >= self.binary_digits.len() {
            return ZERO.clone().with_policy(self.policy);
        }
        let bits = shift_right_bits(&self.binary_digits, count);
        BigInteger::from_binary_magnitude(self.negative, bits, NumberBase::Binary).with_policy(self.policy)
    }
}

// 实现自增自减
impl BigInteger {
    /// `++x`: adds one in place and returns the updated value. NaN is left
    /// unchanged.
    pub fn increment(&mut self) -> &mut Self {
        if !self.is_nan() {
            *self = self.add_impl(&PLUS_ONE);
        }
        self
    }

    /// `x++`: adds one in place and returns the value from before.
    pub fn post_increment(&mut self) -> BigInteger {
        let previous = self.clone();
        self.increment();
        previous
    }

    pub fn decrement(&mut self) -> &mut Self {
        if !self.is_nan() {
            *self = self.add_impl(&MINUS_ONE);
        }
        self
    }

    pub fn post_decrement(&mut self) -> BigInteger {
        let previous = self.clone();
        self.decrement();
        previous
    }
}

macro_rules! impl_binary_operator {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $func: ident) => {
        impl $imp<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> Self::Output {
                self.$func(rhs)
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> Self::Output {
                self.$func(&rhs)
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> Self::Output {
                self.$func(rhs)
            }
        }

        impl $imp for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> Self::Output {
                self.$func(&rhs)
            }
        }

        impl $assign_imp<&BigInteger> for BigInteger {
            fn $assign_method(&mut self, rhs: &BigInteger) {
                *self = self.$func(rhs);
            }
        }

        impl $assign_imp for BigInteger {
            fn $assign_method(&mut self, rhs: BigInteger) {
                *self = self.$func(&rhs);
            }
        }
    };
}

impl_binary_operator!(Add, add, AddAssign, add_assign, add_impl);
impl_binary_operator!(Sub, sub, SubAssign, sub_assign, sub_impl);
impl_binary_operator!(Mul, mul, MulAssign, mul_assign, mul_impl);
impl_binary_operator!(Div, div, DivAssign, div_assign, div_or_panic);
impl_binary_operator!(Rem, rem, RemAssign, rem_assign, rem_or_panic);
impl_binary_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, and_impl);
impl_binary_operator!(BitOr, bitor, BitOrAssign, bitor_assign, or_impl);
impl_binary_operator!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor_impl);

// 实现移位
impl Shl<usize> for BigInteger {
    type Output = BigInteger;

    fn shl(self, n: usize) -> Self::Output {
        self.shl_impl(n)
    }
}

impl Shl<usize> for &BigInteger {
    type Output = BigInteger;

    fn shl(self, n: usize) -> Self::Output {
        self.shl_impl(n)
    }
}

impl ShlAssign<usize> for BigInteger {
    fn shl_assign(&mut self, n: usize) {
        *self = self.shl_impl(n);
    }
}

impl Shr<usize> for BigInteger {
    type Output = BigInteger;

    fn shr(self, n: usize) -> Self::Output {
        self.shr_impl(n)
    }
}

impl Shr<usize> for &BigInteger {
    type Output = BigInteger;

    fn shr(self, n: usize) -> Self::Output {
        self.shr_impl(n)
    }
}

impl ShrAssign<usize> for BigInteger {
    fn shr_assign(&mut self, n: usize) {
        *self = self.shr_impl(n);
    }
}

impl Sum for BigInteger {
    fn sum<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInteger {
    fn product<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, x| acc * x)
    }
}

// 实现序列化
impl Serialize for BigInteger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Accepts any textual form accepted by [`BigInteger::parse`], `"NaN"`, or a
/// native integer of up to 128 bits. Formats that decode larger numeric
/// literals as floats (JSON without arbitrary precision) need the value sent
/// as a string.
impl<'de> Deserialize<'de> for BigInteger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BigIntegerVisitor)
    }
}

struct BigIntegerVisitor;

impl<'de> Visitor<'de> for BigIntegerVisitor {
    type Value = BigInteger;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an integer or a string containing an integer")
    }

    fn visit_str<E: SerdeError>(self, v: &str) -> Result<Self::Value, E> {
        if v == NAN_STR {
            return Ok(BigInteger::nan());
        }
        BigInteger::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: SerdeError>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BigInteger::from(v))
    }

    fn visit_u64<E: SerdeError>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BigInteger::from(v))
    }

    fn visit_i128<E: SerdeError>(self, v: i128) -> Result<Self::Value, E> {
        Ok(BigInteger::from(v))
    }

    fn visit_u128<E: SerdeError>(self, v: u128) -> Result<Self::Value, E> {
        Ok(BigInteger::from(v))
    }
}

#[test]
fn test_from_primitive() {
    assert_eq!(BigInteger::from(0u8).as_str(), "0");
    assert_eq!(BigInteger::from(-1i32).as_str(), "-1");
    assert_eq!(BigInteger::from(i64::MIN).as_str(), "-9223372036854775808");
    assert_eq!(BigInteger::from(u128::MAX).as_str(), "340282366920938463463374607431768211455");
    assert_eq!(BigInteger::from(-12.99f64).as_str(), "-12");
    assert_eq!(BigInteger::from(-0.5f64).as_str(), "0");
    assert!(!BigInteger::from(-0.5f64).is_negative());
    assert_eq!(BigInteger::from(1e20f64).as_str(), "100000000000000000000");
    assert!(BigInteger::from(f64::NAN).is_nan());
    assert!(BigInteger::from(f32::INFINITY).is_nan());
}

#[test]
fn test_canonical_state() {
    let a: BigInteger = "-0o17".into();
    assert_eq!(a.get_decimal_digits(), &[1, 5]);
    assert_eq!(a.get_binary_digits(), &[true, true, true, true]);
    assert_eq!(a.base(), NumberBase::Octal);
    assert!(a.is_negative());

    let zero: BigInteger = "-0".into();
    assert_eq!(zero.get_decimal_digits(), &[0]);
    assert_eq!(zero.get_binary_digits(), &[false]);
    assert!(!zero.is_negative());

    let nan = BigInteger::nan();
    assert!(nan.get_decimal_digits().is_empty());
    assert!(nan.get_binary_digits().is_empty());
    assert!(nan.is_empty());
    assert!(!zero.is_empty());
    assert_eq!(zero.len(), 1);
}

#[test]
fn test_div_rem_signs() {
    let cases: [(i64, i64); 6] = [(7, 2), (-7, 2), (7, -2), (-7, -2), (2, 7), (-2, 7)];
    for (a, b) in cases {
        let (q, r) = BigInteger::from(a).try_div_rem(&BigInteger::from(b)).unwrap();
        assert_eq!(q, BigInteger::from(a / b), "{} / {}", a, b);
        assert_eq!(r, BigInteger::from(a % b), "{} % {}", a, b);
    }
}

#[test]
fn test_div_one() {
    let a = BigInteger::from(-123456);
    assert_eq!(&a / &BigInteger::one(), a);
    assert_eq!(&a / &BigInteger::minus_one(), BigInteger::from(123456));
    assert_eq!(&a % &BigInteger::minus_one(), BigInteger::zero());
}

#[test]
fn test_read_token() {
    let mut input = std::io::Cursor::new("  0x1F   -42\n");
    let mut value = BigInteger::new();
    value.read_token(&mut input).unwrap();
    assert_eq!(value.as_str(), "31");
    value.read_token(&mut input).unwrap();
    assert_eq!(value.as_str(), "-42");
    value.read_token(&mut input).unwrap();
    assert!(value.is_zero());
}
