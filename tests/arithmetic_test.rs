mod common;
use common::*;
use stacker::lang::{ErrorCode, Value};

#[test]
fn test_operand_order() {
    assert_eq!(number("3 2 -"), 1.0);
    assert_eq!(number("6 3 /"), 2.0);
    assert_eq!(number("2 5 ^"), 32.0);
    assert_eq!(number("7 4 %"), 3.0);
    assert_eq!(number("1.5 2 *"), 3.0);
    assert_eq!(number("1 2 + 4 *"), 12.0);
}

#[test]
fn test_ieee_results() {
    assert_eq!(number("1 0 /"), f64::INFINITY);
    assert!(number("0 0 /").is_nan());
    assert_eq!(stack("-1 0 /"), "-Infinity");
}

#[test]
fn test_xor() {
    assert_eq!(number("12 10 xor"), 6.0);
    assert_eq!(number("1 -1 xor"), -2.0);
}

#[test]
fn test_comparison() {
    assert_eq!(value("1 2 <"), Some(Value::Boolean(true)));
    assert_eq!(value("2 2 <="), Some(Value::Boolean(true)));
    assert_eq!(value("1 2 >"), Some(Value::Boolean(false)));
    assert_eq!(value("3 2 >="), Some(Value::Boolean(true)));
    assert_eq!(value("'a 'a =="), Some(Value::Boolean(true)));
    assert_eq!(value("1 true =="), Some(Value::Boolean(false)));
}

#[test]
fn test_logic() {
    assert_eq!(value("0 not"), Some(Value::Boolean(true)));
    assert_eq!(value("\"\" not"), Some(Value::Boolean(true)));
    assert_eq!(value("true 5 and"), Some(Value::Number(5.0)));
    assert_eq!(value("false 5 and"), Some(Value::Boolean(false)));
    assert_eq!(value("0 'x or"), Some(Value::from("x")));
}

#[test]
fn test_string_concatenation() {
    assert_eq!(value("\"n=\" 4 +"), Some(Value::from("n=4")));
    assert_eq!(value("'ab 'cd +"), Some(Value::from("abcd")));
}

#[test]
fn test_type_mismatch() {
    let e = fail("1 true -");
    assert_eq!(e.code(), ErrorCode::TypeMismatch);
    assert_eq!(e.location(), Some(2));
    assert_eq!(e.length(), Some(4));
    let e = fail("(1) 2 *");
    assert_eq!(e.code(), ErrorCode::TypeMismatch);
    assert_eq!(e.location(), Some(1));
}
