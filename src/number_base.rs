use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::big_integer_constants::*;

/// The four radices a [`BigInteger`](crate::BigInteger) can be read from and rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberBase {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hexadecimal,
}

impl NumberBase {
    pub const ALL: [NumberBase; 4] = [
        NumberBase::Binary,
        NumberBase::Octal,
        NumberBase::Decimal,
        NumberBase::Hexadecimal,
    ];

    pub fn radix(self) -> u32 {
        match self {
            NumberBase::Binary => 2,
            NumberBase::Octal => 8,
            NumberBase::Decimal => 10,
            NumberBase::Hexadecimal => 16,
        }
    }

    /// Width of the bit pattern one digit of this base expands to.
    /// Decimal digits are BCD encoded, hence 4.
    pub fn bits_per_digit(self) -> usize {
        BITS_PER_DIGIT[self.index()]
    }

    /// Prefix used by the default rendering (`""` for decimal).
    pub fn prefix(self) -> &'static str {
        PREFIXES[self.index()]
    }

    /// Characters allowed inside a digit run of this base, separators excluded.
    pub fn digit_chars(self) -> &'static str {
        DIGIT_CHARS[self.index()]
    }

    pub fn is_digit_char(self, c: char) -> bool {
        self.digit_chars().contains(c)
    }

    pub fn is_digit_value(self, value: u32) -> bool {
        value < self.radix()
    }

    /// Numeric value of a digit character, `None` if it does not belong to this base.
    pub fn digit_value(self, c: char) -> Option<u8> {
        if !self.is_digit_char(c) {
            return None;
        }
        c.to_digit(16).map(|d| d as u8)
    }

    fn index(self) -> usize {
        match self {
            NumberBase::Binary => 0,
            NumberBase::Octal => 1,
            NumberBase::Decimal => 2,
            NumberBase::Hexadecimal => 3,
        }
    }
}

impl Display for NumberBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(BASE_NAMES[self.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_value() {
        assert_eq!(NumberBase::Binary.digit_value('1'), Some(1));
        assert_eq!(NumberBase::Binary.digit_value('2'), None);
        assert_eq!(NumberBase::Octal.digit_value('7'), Some(7));
        assert_eq!(NumberBase::Octal.digit_value('8'), None);
        assert_eq!(NumberBase::Decimal.digit_value('9'), Some(9));
        assert_eq!(NumberBase::Decimal.digit_value('a'), None);
        assert_eq!(NumberBase::Hexadecimal.digit_value('a'), Some(10));
        assert_eq!(NumberBase::Hexadecimal.digit_value('F'), Some(15));
        assert_eq!(NumberBase::Hexadecimal.digit_value('g'), None);
        assert_eq!(NumberBase::Decimal.digit_value('_'), None);
    }

    #[test]
    fn test_tables() {
        let widths: Vec<usize> = NumberBase::ALL.iter().map(|b| b.bits_per_digit()).collect();
        assert_eq!(widths, vec![1, 3, 4, 4]);
        let prefixes: Vec<&str> = NumberBase::ALL.iter().map(|b| b.prefix()).collect();
        assert_eq!(prefixes, vec!["0b", "0o", "", "0x"]);
        assert!(NumberBase::Hexadecimal.is_digit_value(15));
        assert!(!NumberBase::Octal.is_digit_value(8));
        assert_eq!(NumberBase::Hexadecimal.to_string(), "hexadecimal");
        assert_eq!(NumberBase::default(), NumberBase::Decimal);
    }
}
