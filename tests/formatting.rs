use std::io::Cursor;

use big_integer::{BigInteger, NumberBase};

#[test]
fn test_renderings_of_parsed_input() {
    let a: BigInteger = "0b11111111".into();
    assert_eq!(a.get_decimal_number("", "", 0), "255");
    assert_eq!(a.get_binary_number("", "", 0), "0b11111111");
    assert_eq!(a.get_octal_number("", "", 0), "0o377");
    assert_eq!(a.get_hexadecimal_number("", "", 0), "0xFF");
    assert_eq!(a.get_big_integer(NumberBase::Octal), "0o377");
    assert_eq!(a.representations().hexadecimal(), "0xFF");

    let b: BigInteger = "-1'000'000".into();
    assert_eq!(b.as_str(), "-1000000");
    assert_eq!(b.get_hexadecimal_number("", "", 0), "-0xF4240");

    let c = BigInteger::parse(&format!("0x{}", "f".repeat(32))).unwrap();
    assert_eq!(c.as_str(), "340282366920938463463374607431768211455");
    assert_eq!(c, BigInteger::from(u128::MAX));

    let d = BigInteger::one() << 100;
    assert_eq!(d.get_octal_number("", "", 0), "0o2000000000000000000000000000000000");
}

#[test]
fn test_prefix_postfix_padding() {
    let a = BigInteger::from(255);
    assert_eq!(a.get_hexadecimal_number("#", "h", 4), "#00FFh");
    assert_eq!(a.get_hexadecimal_number("0x", "", 1), "0xFF");
    assert_eq!(a.get_binary_number("", "", 12), "0b000011111111");
    assert_eq!(a.get_decimal_number("", "5", 0), "255");
    assert_eq!(a.get_decimal_number("", " units", 0), "255 units");

    let b = BigInteger::from(-42);
    assert_eq!(b.get_decimal_number("", "", 6), "-000042");
    assert_eq!(b.get_octal_number("o", "", 4), "-o0052");

    let zero = BigInteger::zero();
    assert_eq!(zero.get_binary_number("", "", 4), "0b0000");
    assert_eq!(zero.get_hexadecimal_number("", "", 0), "0x0");
}

#[test]
fn test_digit_and_bit_constructors() {
    let a = BigInteger::from_digits(&[-1, -15], NumberBase::Hexadecimal).unwrap();
    assert_eq!(a.get_hexadecimal_number("", "", 0), "-0x1F");
    assert_eq!(a.as_str(), "-31");

    let b = BigInteger::from_digits(&[0, 0, 7, 7, 7], NumberBase::Octal).unwrap();
    assert_eq!(b.as_str(), "511");
    assert_eq!(b.base(), NumberBase::Octal);

    let c = BigInteger::from_bits(&[false, true, false, true]);
    assert_eq!(c.as_str(), "5");
    assert_eq!(BigInteger::from(vec![false; 3]), BigInteger::zero());
    assert!(BigInteger::from(vec![true]).is_positive_one());
}

#[test]
fn test_display_and_parse() {
    let a: BigInteger = "-  0012".parse().unwrap();
    assert_eq!(format!("{}", a), "-12");
    assert_eq!(String::from(a), "-12");

    let values: Vec<BigInteger> = "7 0x7 0o7 0b111 b111 o7".split(' ').map(BigInteger::from).collect();
    assert!(values.iter().all(|v| v.as_str() == "7"));
}

#[test]
fn test_read_token_from_stream() {
    let mut input = Cursor::new("0b1010\n  +99\t-0o10 junk");
    let mut x = BigInteger::new();

    x.read_token(&mut input).unwrap();
    assert_eq!(x.as_str(), "10");
    x.read_token(&mut input).unwrap();
    assert_eq!(x.as_str(), "99");
    x.read_token(&mut input).unwrap();
    assert_eq!(x.as_str(), "-8");
    x.read_token(&mut input).unwrap();
    assert!(x.is_nan());
}
