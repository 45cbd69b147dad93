mod common;
use common::*;
use stacker::lang::ErrorCode;

#[test]
fn test_ascending() {
    assert_eq!(numbers("0 5 1 range"), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_descending() {
    assert_eq!(numbers("5 0 1 range"), vec![5.0, 4.0, 3.0, 2.0, 1.0]);
    assert_eq!(numbers("5 0 -1 range"), vec![5.0, 4.0, 3.0, 2.0, 1.0]);
}

#[test]
fn test_count_is_floored() {
    assert_eq!(numbers("0 6 2 range"), vec![0.0, 2.0, 4.0]);
    assert_eq!(numbers("0 5 2 range"), vec![0.0, 2.0]);
    assert_eq!(numbers("0 1 0.25 range"), vec![0.0, 0.25, 0.5, 0.75]);
}

#[test]
fn test_empty() {
    assert_eq!(numbers("3 3 1 range"), Vec::<f64>::new());
}

#[test]
fn test_type_errors() {
    let e = fail("'a 5 1 range");
    assert_eq!(e.code(), ErrorCode::TypeMismatch);
    assert_eq!(e.text(), "range operator expects numerical value for start");
    assert_eq!(e.location(), Some(0));
    let e = fail("0 true 1 range");
    assert_eq!(e.text(), "range operator expects numerical value for end");
    let e = fail("0 5 (1) range");
    assert_eq!(e.text(), "range operator expects numerical value for step");
}

#[test]
fn test_zero_step() {
    let e = fail("0 5 0 range");
    assert_eq!(e.code(), ErrorCode::ContractViolation);
    assert_eq!(e.location(), Some(4));
}

#[test]
fn test_too_many_values() {
    let e = fail("0 1e20 1 range");
    assert_eq!(e.code(), ErrorCode::ContractViolation);
    assert_eq!(e.location(), Some(7));
}
