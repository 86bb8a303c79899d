//! Parser / validator: turns text, digit vectors and bit vectors into a
//! canonical sign + base + digit run.

use crate::big_integer_constants::SEPARATORS;
use crate::errors::BigIntegerError;
use crate::NumberBase;

/// Outcome of validating an input.
///
/// Zero and ±1 are recognised up front so constructors can skip the
/// conversion pipeline for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedNumber {
    Zero,
    One { negative: bool },
    /// Digit values of `base`, most significant first, first digit non-zero.
    Digits { negative: bool, base: NumberBase, digits: Vec<u8> },
}

/// Parses `[+-]? (b|0b|0x|0o|o)? [0\s]* digit (digit|'|_)*`, ignoring whatever
/// follows the digit run.
pub(crate) fn parse_text(text: &str) -> Result<ParsedNumber, BigIntegerError> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut cursor: usize = 0;
    let mut negative = false;

    if let Some(&sign) = chars.first() {
        if sign == '+' || sign == '-' {
            negative = sign == '-';
            cursor += 1;
        }
    }

    let (base, marker_len) = detect_base(&chars[cursor..]);
    cursor += marker_len;

    // skip redundant zeros and whitespace
    while cursor < len && (chars[cursor] == '0' || chars[cursor].is_whitespace()) {
        cursor += 1;
    }

    if cursor == len {
        return Ok(ParsedNumber::Zero);
    }

    let first = chars[cursor];
    if !base.is_digit_char(first) {
        return Err(BigIntegerError::InvalidDigit { digit: first, base });
    }

    let run_len = 1 + chars[cursor + 1..]
        .iter()
        .take_while(|&&c| base.is_digit_char(c) || SEPARATORS.contains(&c))
        .count();
    let run = &chars[cursor..cursor + run_len];

    if let Some(&last) = run.last() {
        if SEPARATORS.contains(&last) {
            return Err(BigIntegerError::TrailingSeparator(last));
        }
    }

    let digits: Vec<u8> = run.iter().filter_map(|&c| base.digit_value(c)).collect();
    Ok(classify(negative, base, digits))
}

fn detect_base(rest: &[char]) -> (NumberBase, usize) {
    match rest {
        ['b' | 'B', ..] => (NumberBase::Binary, 1),
        ['0', 'b' | 'B', ..] => (NumberBase::Binary, 2),
        ['0', 'x' | 'X', ..] => (NumberBase::Hexadecimal, 2),
        ['0', 'o' | 'O', ..] => (NumberBase::Octal, 2),
        ['o' | 'O', ..] => (NumberBase::Octal, 1),
        _ => (NumberBase::Decimal, 0),
    }
}

/// Validates a digit vector whose digits all carry the sign of the number.
pub(crate) fn parse_digits(digits: &[i32], base: NumberBase) -> Result<ParsedNumber, BigIntegerError> {
    let significant = match digits.iter().position(|&d| d != 0) {
        Some(pos) => &digits[pos..],
        None => return Ok(ParsedNumber::Zero),
    };
    let negative = significant[0] < 0;

    let mut magnitude = Vec::with_capacity(significant.len());
    for &digit in significant {
        if !base.is_digit_value(digit.unsigned_abs()) {
            return Err(BigIntegerError::InvalidDigitValue { value: digit, base });
        }
        if digit != 0 && (digit < 0) != negative {
            return Err(BigIntegerError::MixedDigitSigns);
        }
        magnitude.push(digit.unsigned_abs() as u8);
    }

    Ok(classify(negative, base, magnitude))
}

/// Bit vectors are always non-negative and can not be malformed.
pub(crate) fn parse_bits(bits: &[bool]) -> ParsedNumber {
    let significant: Vec<u8> = bits
        .iter()
        .skip_while(|&&bit| !bit)
        .map(|&bit| bit as u8)
        .collect();
    if significant.is_empty() {
        ParsedNumber::Zero
    } else {
        classify(false, NumberBase::Binary, significant)
    }
}

fn classify(negative: bool, base: NumberBase, digits: Vec<u8>) -> ParsedNumber {
    if digits.is_empty() {
        ParsedNumber::Zero
    } else if digits == [1u8] {
        ParsedNumber::One { negative }
    } else {
        ParsedNumber::Digits { negative, base, digits }
    }
}
