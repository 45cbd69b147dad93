mod common;
use common::*;
use stacker::lang::{ErrorCode, Value};

const FACT: &str = "'fact 1 (@n store (@n load 1 <=) (1) (@n load 1 - fact @n load *) if) define-op ";

#[test]
fn test_define_and_call() {
    assert_eq!(number("'sq 1 (dup *) define-op 7 sq"), 49.0);
    assert_eq!(number("'seven 0 (7) define-op seven seven +"), 14.0);
}

#[test]
fn test_operands_restored_before_body() {
    assert_eq!(stack("'pair 2 (swap) define-op 1 2 3 pair"), "1 3 2");
}

#[test]
fn test_defined_underflow_is_checked_first() {
    let e = fail("'pair 2 (swap) define-op 1 pair");
    assert_eq!(e.code(), ErrorCode::StackUnderflow);
    assert_eq!(e.location(), Some(27));
}

#[test]
fn test_variadic_definition() {
    assert_eq!(
        value("'count \"none\" (pack) define-op 1 2 3 count"),
        Some(Value::from("1 2 3"))
    );
}

#[test]
fn test_recursive_factorial() {
    assert_eq!(number(&format!("{}3 fact", FACT)), 6.0);
    assert_eq!(number(&format!("{}4 fact", FACT)), 24.0);
    assert_eq!(number(&format!("{}10 fact", FACT)), 3_628_800.0);
}

#[test]
fn test_locals_do_not_collide() {
    let outcome = run("'setx 0 \"2 @x store\" define-op 1 @x store setx @x load");
    assert_eq!(outcome.value, Some(Value::Number(1.0)));
    assert_eq!(outcome.memory.len(), 2);
}

#[test]
fn test_redefinition_and_delete() {
    assert_eq!(number("'f 0 (1) define-op 'f 0 (2) define-op f"), 2.0);
    assert_eq!(stack("'f 0 (1) define-op 'f del-op f"), "(f)");
    assert_eq!(stack("'missing del-op"), "");
}

#[test]
fn test_builtins_can_be_replaced() {
    assert_eq!(number("'+ 2 (*) define-op 3 4 +"), 12.0);
    assert_eq!(stack("'+ del-op 1 2 +"), "1 2 (+)");
}

#[test]
fn test_alias() {
    assert_eq!(number("'+ 'plus alias-op 1 2 plus"), 3.0);
    assert_eq!(
        number("'f 0 (1) define-op 'f 'g alias-op 'f 0 (2) define-op g"),
        1.0
    );
}

#[test]
fn test_invalid_arity() {
    let e = fail("'f -1 (1) define-op");
    assert_eq!(e.code(), ErrorCode::TypeMismatch);
    assert_eq!(e.location(), Some(3));
}
