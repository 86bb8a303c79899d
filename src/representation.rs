use std::iter::repeat;

use crate::big_integer_constants::{DIGITS, NAN_STR};
use crate::conversion::bits_to_radix_digits;
use crate::NumberBase;

/// The four textual renderings of a value, produced together by a single
/// render step whenever the canonical digits change.
///
/// Each rendering carries its base prefix (`0b`, `0o`, `0x`, none for decimal)
/// and a leading `-` for negative values. Hexadecimal digits are upper case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Representations {
    decimal: String,
    binary: String,
    octal: String,
    hexadecimal: String,
}

impl Representations {
    pub(crate) fn render(negative: bool, decimal_digits: &[u8], binary_digits: &[bool]) -> Self {
        let octal_digits = bits_to_radix_digits(binary_digits, NumberBase::Octal.bits_per_digit());
        let hex_digits = bits_to_radix_digits(binary_digits, NumberBase::Hexadecimal.bits_per_digit());

        Representations {
            decimal: render_digits(negative, NumberBase::Decimal, decimal_digits.iter().copied()),
            binary: render_digits(negative, NumberBase::Binary, binary_digits.iter().map(|&b| b as u8)),
            octal: render_digits(negative, NumberBase::Octal, octal_digits.into_iter()),
            hexadecimal: render_digits(negative, NumberBase::Hexadecimal, hex_digits.into_iter()),
        }
    }

    pub(crate) fn nan() -> Self {
        Representations {
            decimal: NAN_STR.to_string(),
            binary: NAN_STR.to_string(),
            octal: NAN_STR.to_string(),
            hexadecimal: NAN_STR.to_string(),
        }
    }

    pub fn get(&self, base: NumberBase) -> &str {
        match base {
            NumberBase::Binary => &self.binary,
            NumberBase::Octal => &self.octal,
            NumberBase::Decimal => &self.decimal,
            NumberBase::Hexadecimal => &self.hexadecimal,
        }
    }

    pub fn decimal(&self) -> &str {
        &self.decimal
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn octal(&self) -> &str {
        &self.octal
    }

    pub fn hexadecimal(&self) -> &str {
        &self.hexadecimal
    }

    pub fn is_nan(&self) -> bool {
        self.decimal == NAN_STR
    }

    /// Renders `base` with a caller supplied prefix, postfix and minimum digit
    /// count.
    ///
    /// An empty `prefix` keeps the base's default prefix, any other prefix
    /// replaces it. A non-empty `postfix` is appended unless the rendering
    /// already ends with it. The digits are zero-padded on the left, after sign
    /// and prefix, up to `min_digits`. NaN is always rendered as `NaN`.
    pub fn format(&self, base: NumberBase, prefix: &str, postfix: &str, min_digits: usize) -> String {
        let rendered = self.get(base);
        if self.is_nan() {
            return rendered.to_string();
        }

        let (sign, unsigned) = match rendered.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rendered),
        };
        let default_prefix = base.prefix();
        let digits = &unsigned[default_prefix.len()..];
        let prefix = if prefix.is_empty() { default_prefix } else { prefix };
        let padding = min_digits.saturating_sub(digits.len());

        let mut result = String::with_capacity(
            sign.len() + prefix.len() + padding + digits.len() + postfix.len(),
        );
        result.push_str(sign);
        result.push_str(prefix);
        result.extend(repeat('0').take(padding));
        result.push_str(digits);
        if !postfix.is_empty() && !result.ends_with(postfix) {
            result.push_str(postfix);
        }
        result
    }
}

fn render_digits<I>(negative: bool, base: NumberBase, digits: I) -> String
where
    I: Iterator<Item = u8>,
{
    let mut s = String::new();
    if negative {
        s.push('-');
    }
    s.push_str(base.prefix());
    s.extend(digits.map(|d| DIGITS[d as usize]));
    s
}
