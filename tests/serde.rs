use big_integer::{BigInteger, ErrorPolicy, NumberBase};
use serde::de::value::{Error as ValueError, I128Deserializer, U128Deserializer};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Ledger {
    balance: BigInteger,
    base: NumberBase,
    policy: ErrorPolicy,
}

#[test]
fn test_serialize_as_decimal_string() {
    let a: BigInteger = "-0xFF".into();
    assert_eq!(serde_json::to_string(&a).unwrap(), "\"-255\"");
    assert_eq!(serde_json::to_string(&BigInteger::nan()).unwrap(), "\"NaN\"");
}

#[test]
fn test_deserialize() {
    let a: BigInteger = serde_json::from_str("\"0xFF\"").unwrap();
    assert_eq!(a, BigInteger::from(255));
    let b: BigInteger = serde_json::from_str("-7").unwrap();
    assert_eq!(b, BigInteger::from(-7));
    let c: BigInteger = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(c, BigInteger::from(u64::MAX));
    let nan: BigInteger = serde_json::from_str("\"NaN\"").unwrap();
    assert!(nan.is_nan());

    let err = serde_json::from_str::<BigInteger>("\"12_\"").unwrap_err();
    assert!(err.to_string().contains("separator"));
}

#[test]
fn test_deserialize_128_bit_integers() {
    let de: U128Deserializer<ValueError> = u128::MAX.into_deserializer();
    let a = BigInteger::deserialize(de).unwrap();
    assert_eq!(a.as_str(), "340282366920938463463374607431768211455");
    let de: I128Deserializer<ValueError> = i128::MIN.into_deserializer();
    let b = BigInteger::deserialize(de).unwrap();
    assert_eq!(b.as_str(), "-170141183460469231731687303715884105728");

    // JSON numbers past u64 arrive as floats, the string form carries them
    let c: BigInteger = serde_json::from_str("\"123456789012345678901234567890\"").unwrap();
    assert_eq!(c.as_str(), "123456789012345678901234567890");
}

#[test]
fn test_struct_round_trip() {
    let ledger = Ledger {
        balance: "123456789012345678901234567890".into(),
        base: NumberBase::Hexadecimal,
        policy: ErrorPolicy::Raise,
    };
    let json = serde_json::to_string(&ledger).unwrap();
    assert_eq!(
        json,
        r#"{"balance":"123456789012345678901234567890","base":"hexadecimal","policy":"raise"}"#
    );
    let back: Ledger = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ledger);
}
