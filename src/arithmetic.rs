//! Arithmetic engine on unsigned magnitudes.
//!
//! Decimal magnitudes are `&[u8]` digits, binary magnitudes `&[bool]` bits,
//! both most significant first and free of leading zeros. Signs are handled
//! by the caller.

use std::cmp::Ordering;
use std::iter::repeat;

/// Orders two canonical magnitudes: digit count first, then digit by digit
/// from the most significant end.
pub(crate) fn compare_magnitudes<T: Ord>(a: &[T], b: &[T]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

// 十进制加法
pub(crate) fn add_digits(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut a_index = a.len();
    let mut b_index = b.len();
    let mut result = Vec::with_capacity(a_index.max(b_index) + 1);
    let mut carry = 0;

    while a_index > 0 || b_index > 0 || carry != 0 {
        let mut sum = carry;
        if a_index > 0 {
            a_index -= 1;
            sum += a[a_index];
        }
        if b_index > 0 {
            b_index -= 1;
            sum += b[b_index];
        }
        result.push(sum % 10);
        carry = sum / 10;
    }

    result.reverse();
    skip_leading_zero!(result, 0)
}

// 十进制减法, 要求 big >= little
pub(crate) fn sub_digits(big: &[u8], little: &[u8]) -> Vec<u8> {
    let mut little_index = little.len();
    let mut result = Vec::with_capacity(big.len());
    let mut borrow = 0;

    for &digit in big.iter().rev() {
        let mut difference = digit as i8 - borrow;
        if little_index > 0 {
            little_index -= 1;
            difference -= little[little_index] as i8;
        }
        if difference < 0 {
            difference += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        result.push(difference as u8);
    }

    result.reverse();
    skip_leading_zero!(result, 0)
}

/// Schoolbook long multiplication. Every digit pair product is accumulated
/// into a buffer of `a.len() + b.len()` digits with per-position carries.
pub(crate) fn mul_digits(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut result: Vec<u32> = vec![0; a.len() + b.len()];

    for i in (0..b.len()).rev() {
        let mut carry: u32 = 0;
        for j in (0..a.len()).rev() {
            let total = result[i + j + 1] + a[j] as u32 * b[i] as u32 + carry;
            result[i + j + 1] = total % 10;
            carry = total / 10;
        }
        result[i] += carry;
    }

    let result: Vec<u8> = result.into_iter().map(|d| d as u8).collect();
    skip_leading_zero!(result, 0)
}

/// Appends `count` zero bits.
///
/// Panics when the shifted length does not fit in `usize`.
pub(crate) fn shift_left_bits(bits: &[bool], count: usize) -> Vec<bool> {
    let len = match bits.len().checked_add(count) {
        Some(len) => len,
        None => panic!("shift left by {} overflows the bit length", count),
    };
    let mut shifted = Vec::with_capacity(len);
    shifted.extend_from_slice(bits);
    shifted.extend(repeat(false).take(count));
    shifted
}

/// Drops the `count` least significant bits; zero if nothing is left.
pub(crate) fn shift_right_bits(bits: &[bool], count: usize) -> Vec<bool> {
    if count >= bits.len() {
        return vec![false];
    }
    bits[..bits.len() - count].to_vec()
}

// 二进制减法, 要求 big >= little
pub(crate) fn sub_bits(big: &[bool], little: &[bool]) -> Vec<bool> {
    let mut little_index = little.len();
    let mut result = Vec::with_capacity(big.len());
    let mut borrow = false;

    for &bit in big.iter().rev() {
        let subtrahend = if little_index > 0 {
            little_index -= 1;
            little[little_index]
        } else {
            false
        };
        let difference = bit as i8 - subtrahend as i8 - borrow as i8;
        borrow = difference < 0;
        result.push(difference.rem_euclid(2) == 1);
    }

    result.reverse();
    skip_leading_zero!(result, false)
}

/// Shift-subtract long division of binary magnitudes, `divisor` non-zero.
///
/// Each round finds the largest `s` with `divisor << s <= remainder`, sets bit
/// `s` of the quotient and subtracts `divisor << s` from the remainder.
/// Returns `(quotient, remainder)`.
pub(crate) fn div_rem_bits(dividend: &[bool], divisor: &[bool]) -> (Vec<bool>, Vec<bool>) {
    let mut remainder = dividend.to_vec();
    if compare_magnitudes(&remainder, divisor) == Ordering::Less {
        return (vec![false], remainder);
    }

    let mut quotient = vec![false; dividend.len() - divisor.len() + 1];
    let quotient_len = quotient.len();

    while compare_magnitudes(&remainder, divisor) != Ordering::Less {
        let mut shift = remainder.len() - divisor.len();
        let mut shifted = shift_left_bits(divisor, shift);
        if compare_magnitudes(&shifted, &remainder) == Ordering::Greater {
            shift -= 1;
            shifted.pop();
        }
        quotient[quotient_len - 1 - shift] = true;
        remainder = sub_bits(&remainder, &shifted);
    }

    (skip_leading_zero!(quotient, false), remainder)
}

/// Applies `op` bit by bit with both operands right aligned; the shorter one
/// is zero-extended on the left.
pub(crate) fn bitwise<F>(a: &[bool], b: &[bool], op: F) -> Vec<bool>
where
    F: Fn(bool, bool) -> bool,
{
    let len = a.len().max(b.len());
    let result: Vec<bool> = zero_extend(a, len)
        .zip(zero_extend(b, len))
        .map(|(x, y)| op(x, y))
        .collect();
    skip_leading_zero!(result, false)
}

fn zero_extend(bits: &[bool], len: usize) -> impl Iterator<Item = bool> + '_ {
    repeat(false).take(len - bits.len()).chain(bits.iter().copied())
}
