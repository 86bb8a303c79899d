// Tables below are indexed in `NumberBase` order: binary, octal, decimal, hexadecimal.

pub const BITS_PER_DIGIT: [usize; 4] = [1, 3, 4, 4];

pub const PREFIXES: [&str; 4] = ["0b", "0o", "", "0x"];

pub const DIGIT_CHARS: [&str; 4] = [
    "01",
    "01234567",
    "0123456789",
    "0123456789abcdefABCDEF",
];

pub const BASE_NAMES: [&str; 4] = ["binary", "octal", "decimal", "hexadecimal"];

/// Upper case digit characters used when rendering.
pub const DIGITS: [char; 16] = [
    '0', '1', '2', '3',
    '4', '5', '6', '7',
    '8', '9', 'A', 'B',
    'C', 'D', 'E', 'F',
];

pub const SEPARATORS: [char; 2] = ['\'', '_'];

pub const NAN_STR: &str = "NaN";
