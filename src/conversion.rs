//! Base converter. Decimal digits and binary digits are the two canonical
//! forms of a magnitude; everything else is derived from the bits.

use std::iter::repeat;

use crate::NumberBase;

/// Expands digit values of `base` into a most-significant-first bit sequence.
///
/// Every non-decimal digit becomes its fixed-width pattern (1, 3 or 4 bits).
/// Decimal digits go through repeated halving instead, as their 4 bit BCD
/// pattern is not a positional binary encoding.
pub(crate) fn digits_to_bits(digits: &[u8], base: NumberBase) -> Vec<bool> {
    if base == NumberBase::Decimal {
        return decimal_to_bits(digits);
    }
    let width = base.bits_per_digit();
    let bits: Vec<bool> = digits
        .iter()
        .flat_map(|&digit| (0..width).rev().map(move |i| (digit >> i) & 1 == 1))
        .collect();
    skip_leading_zero!(bits, false)
}

/// Double-dabble (shift and add 3).
///
/// The BCD buffer holds one nibble per `u8`, most significant first. For each
/// input bit every nibble >= 5 is corrected by adding 3, then the buffer is
/// shifted left by one bit with the input bit entering at the bottom.
pub(crate) fn bits_to_decimal(bits: &[bool]) -> Vec<u8> {
    let nibbles = (bits.len() + 2) / 3 + 1;
    let mut bcd: Vec<u8> = vec![0; nibbles];

    for &bit in bits {
        for nibble in bcd.iter_mut() {
            if *nibble >= 5 {
                *nibble += 3;
            }
        }

        let mut carry = bit as u8;
        for nibble in bcd.iter_mut().rev() {
            let shifted = (*nibble << 1) | carry;
            carry = shifted >> 4;
            *nibble = shifted & 0x0f;
        }
    }

    skip_leading_zero!(bcd, 0)
}

/// Repeated halving of a decimal digit sequence, collecting the parity of each
/// intermediate value as the next less significant bit.
pub(crate) fn decimal_to_bits(digits: &[u8]) -> Vec<bool> {
    let mut number = digits.to_vec();
    let mut bits = Vec::with_capacity(digits.len() * NumberBase::Decimal.bits_per_digit());

    while !is_zero_digits(&number) {
        bits.push(number.last().map_or(false, |d| d % 2 == 1));
        number = div_by_two(&number);
    }

    if bits.is_empty() {
        return vec![false];
    }
    bits.reverse();
    bits
}

/// Halves a decimal digit sequence, most significant digit first.
pub(crate) fn div_by_two(number: &[u8]) -> Vec<u8> {
    let mut halved = Vec::with_capacity(number.len());
    let mut add = 0;
    for &digit in number {
        halved.push(digit / 2 + add);
        add = (digit % 2) * 5;
    }
    skip_leading_zero!(halved, 0)
}

/// Groups bits into octal (`width` 3) or hexadecimal (`width` 4) digits.
/// The bits are left-padded with zeros to a multiple of `width`.
pub(crate) fn bits_to_radix_digits(bits: &[bool], width: usize) -> Vec<u8> {
    let pad = (width - bits.len() % width) % width;
    let padded: Vec<bool> = repeat(false).take(pad).chain(bits.iter().copied()).collect();
    let digits: Vec<u8> = padded
        .chunks(width)
        .map(|group| group.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8))
        .collect();
    skip_leading_zero!(digits, 0)
}

fn is_zero_digits(digits: &[u8]) -> bool {
    digits.iter().all(|&d| d == 0)
}
