#![cfg(feature = "json")]
use serde_json::json;
use toon_codec::{DecodeOptions, EncodeOptions};

fn encode(v: &serde_json::Value) -> String {
    toon_codec::encode_json(v, &EncodeOptions::default()).unwrap()
}

fn decode(s: &str) -> serde_json::Value {
    toon_codec::decode_to_json(s, &DecodeOptions::default()).unwrap()
}

#[test]
fn integral_floats_lose_the_fraction() {
    assert_eq!(encode(&json!({"x": 1.0})), "x: 1\n");
    assert_eq!(encode(&json!({"x": -3.0})), "x: -3\n");
    assert_eq!(encode(&json!({"x": 0.0})), "x: 0\n");
}

#[test]
fn negative_zero_collapses_to_zero() {
    assert_eq!(encode(&json!({"x": -0.0})), "x: 0\n");
}

#[test]
fn fractions_keep_their_shortest_form() {
    assert_eq!(encode(&json!({"x": 1.5})), "x: 1.5\n");
    assert_eq!(encode(&json!({"x": -0.25})), "x: -0.25\n");
    assert_eq!(encode(&json!({"x": 0.1})), "x: 0.1\n");
}

#[test]
fn exponents_expand_to_plain_decimal() {
    assert_eq!(encode(&json!({"x": 1e21})), "x: 1000000000000000000000\n");
    assert_eq!(encode(&json!({"x": 1.5e3})), "x: 1500\n");
    assert_eq!(encode(&json!({"x": 1e-4})), "x: 0.0001\n");
}

#[test]
fn integer_extremes_roundtrip() {
    let v = json!({"max_u": u64::MAX, "min_i": i64::MIN, "max_i": i64::MAX});
    let s = encode(&v);
    assert!(s.contains("max_u: 18446744073709551615\n"));
    assert!(s.contains("min_i: -9223372036854775808\n"));
    assert_eq!(decode(&s), v);
}

#[test]
fn decode_numeric_tokens() {
    assert_eq!(decode("x: 42\n"), json!({"x": 42}));
    assert_eq!(decode("x: -7\n"), json!({"x": -7}));
    assert_eq!(decode("x: 2.5\n"), json!({"x": 2.5}));
    assert_eq!(decode("x: 1e3\n"), json!({"x": 1000.0}));
    assert_eq!(decode("x: -1.5e-2\n"), json!({"x": -0.015}));
}

#[test]
fn leading_zeros_stay_strings() {
    assert_eq!(decode("x: 05\n"), json!({"x": "05"}));
    assert_eq!(decode("x: -012\n"), json!({"x": "-012"}));
    // A single zero and a zero-led fraction are real numbers
    assert_eq!(decode("x: 0\n"), json!({"x": 0}));
    assert_eq!(decode("x: 0.5\n"), json!({"x": 0.5}));
}

#[test]
fn numeric_looking_words_stay_strings() {
    assert_eq!(decode("x: 1.2.3\n"), json!({"x": "1.2.3"}));
    assert_eq!(decode("x: 12abc\n"), json!({"x": "12abc"}));
    assert_eq!(decode("x: e5\n"), json!({"x": "e5"}));
}

#[test]
fn quoted_numbers_stay_strings_both_ways() {
    assert_eq!(encode(&json!({"x": "42"})), "x: \"42\"\n");
    assert_eq!(decode("x: \"42\"\n"), json!({"x": "42"}));
}

#[test]
fn float_roundtrip_is_exact() {
    let v = json!({"a": 0.1, "b": 1.0e-10, "c": 123456.789});
    let s = encode(&v);
    let back = decode(&s);
    assert_eq!(back["a"], json!(0.1));
    assert_eq!(back["c"], json!(123456.789));
    assert_eq!(back["b"].as_f64(), Some(1.0e-10));
}
