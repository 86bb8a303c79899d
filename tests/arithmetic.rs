use std::collections::HashSet;

use big_integer::{BigInteger, NumberBase};

fn big(text: &str) -> BigInteger {
    text.parse().unwrap()
}

#[test]
fn test_add_sub() {
    assert_eq!(big("-1") + big("1"), BigInteger::zero());
    assert!(!(big("-1") + big("1")).is_negative());
    assert_eq!(big("999") + big("1"), big("1000"));
    assert_eq!(big("-999") - big("1"), big("-1000"));
    assert_eq!(big("5") - big("12"), big("-7"));
    assert_eq!(big("-5") - big("-12"), big("7"));
    assert_eq!(big("0x10") + big("0o10"), big("24"));
    assert_eq!(big("0") - big("0b101"), big("-5"));
}

#[test]
fn test_mul() {
    assert_eq!(big("123") * big("0b11111111"), big("31365"));
    assert_eq!(big("-4") * big("25"), big("-100"));
    assert_eq!(big("-4") * big("-25"), big("100"));
    assert_eq!(big("-4") * big("0"), BigInteger::zero());
    assert!(!(big("-4") * big("0")).is_negative());
    assert_eq!(big("-1") * big("-77"), big("77"));
    assert_eq!(
        big("123456789012345678901234567890") * big("987654321098765432109876543210"),
        big("121932631137021795226185032733622923332237463801111263526900")
    );
}

#[test]
fn test_div_rem() {
    assert_eq!(big("7") / big("2"), big("3"));
    assert_eq!(big("7") % big("2"), big("1"));
    assert_eq!(big("-7") / big("2"), big("-3"));
    assert_eq!(big("-7") % big("2"), big("-1"));
    assert_eq!(big("7") % big("-2"), big("1"));
    assert_eq!(big("0") / big("5"), BigInteger::zero());
    assert_eq!(big("0") % big("5"), BigInteger::zero());
    assert_eq!(big("3") / big("5"), BigInteger::zero());
    assert_eq!(big("3") % big("5"), big("3"));

    let a = big("987654321098765432109876543210");
    let b = big("123456789012345678901234567890");
    assert_eq!(&a / &b, big("8"));
    assert_eq!(&a % &b, big("9000000000900000000090"));
    assert_eq!(&(&a / &b) * &b + &a % &b, a);
}

#[test]
fn test_shifts() {
    assert_eq!(BigInteger::one() << 200, big("1606938044258990275541962092341162602522202993782792835301376"));
    assert_eq!(big("-5") << 2, big("-20"));
    assert_eq!(big("-5") >> 1, big("-2"));
    assert_eq!(big("5") >> 10, BigInteger::zero());
    assert_eq!(big("0") << 10, BigInteger::zero());

    let mut x = big("0xFF");
    x <<= 4;
    assert_eq!(x.get_hexadecimal_number("", "", 0), "0xFF0");
    x >>= 8;
    assert_eq!(x, big("15"));
}

#[test]
#[should_panic(expected = "overflows the bit length")]
fn test_shift_count_overflow_panics() {
    let _ = BigInteger::from(3) << usize::MAX;
}

#[test]
fn test_bitwise() {
    assert_eq!(big("12") & big("10"), big("8"));
    assert_eq!(big("12") | big("3"), big("15"));
    assert_eq!(big("12") ^ big("10"), big("6"));
    assert_eq!(big("12") ^ big("12"), BigInteger::zero());
    // magnitudes only, result is never negative
    assert_eq!(big("-12") & big("10"), big("8"));
    assert_eq!(big("-12") | big("-3"), big("15"));

    let mut x = big("0b1010");
    x |= big("0b0101");
    assert_eq!(x, big("15"));
    x &= &big("0b0110");
    assert_eq!(x, big("6"));
    x ^= big("6");
    assert!(x.is_zero());
}

#[test]
fn test_increment_decrement() {
    let mut x = big("9");
    assert_eq!(x.increment().as_str(), "10");
    assert_eq!(x.post_increment(), big("10"));
    assert_eq!(x, big("11"));

    let mut y = BigInteger::zero();
    y.decrement();
    assert!(y.is_negative_one());
    assert_eq!(y.post_decrement(), big("-1"));
    assert_eq!(y, big("-2"));
    y.increment().increment();
    assert!(y.is_zero());
}

#[test]
fn test_compare() {
    let mut values: Vec<BigInteger> = ["3", "-10", "0x10", "0", "-0b11", "100000000000000000000"]
        .iter()
        .map(|s| big(s))
        .collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let sorted: Vec<&str> = values.iter().map(|v| v.as_str()).collect();
    assert_eq!(sorted, ["-10", "-3", "0", "3", "16", "100000000000000000000"]);

    assert!(big("-100") < big("-99"));
    assert!(big("99") < big("100"));
    assert!(big("-0") == big("0"));
    assert!(big("0x1F") == big("31"));
    assert!(big("0x1F") != big("-31"));
}

#[test]
fn test_sign_helpers() {
    let mut x = big("-42");
    assert_eq!(x.abs(), big("42"));
    x.invert_sign();
    assert_eq!(x, big("42"));
    assert_eq!(-&x, big("-42"));

    let mut zero = BigInteger::zero();
    zero.invert_sign();
    assert!(!zero.is_negative());

    let mut a = big("1");
    let mut b = big("2");
    a.swap(&mut b);
    assert!(a == big("2") && b.is_positive_one());
}

#[test]
fn test_sum_product_hash() {
    let factorial: BigInteger = (1..=30).map(BigInteger::from).product();
    assert_eq!(factorial, big("265252859812191058636308480000000"));

    let values = vec![big("10"), big("-3"), big("0x10")];
    let total: BigInteger = values.iter().sum();
    assert_eq!(total, big("23"));

    let set: HashSet<BigInteger> = ["16", "0x10", "0o20", "0b10000", "-16"].iter().map(|s| big(s)).collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_digit_access() {
    let x = big("1234");
    assert_eq!(x[0], 4);
    assert_eq!(x[3], 1);
    assert_eq!(x[10], 0);
    assert_eq!(x.at(1), Ok(3));
    assert!(x.at(4).is_err());
    assert_eq!(x.len(), 4);
    assert_eq!(big("0x10").base(), NumberBase::Hexadecimal);
}
