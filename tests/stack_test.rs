mod common;
use common::*;
use stacker::lang::ErrorCode;

#[test]
fn test_dup_pop() {
    assert_eq!(stack("1 2 dup pop"), "1 2");
    assert_eq!(stack("1 2 dup"), "1 2 2");
}

#[test]
fn test_swap_over_pick() {
    assert_eq!(stack("1 2 swap"), "2 1");
    assert_eq!(stack("1 2 swap swap"), "1 2");
    assert_eq!(stack("1 2 over"), "1 2 1");
    assert_eq!(stack("1 2 3 pick"), "1 2 3 1");
}

#[test]
fn test_pop_and_clear_on_empty() {
    assert_eq!(stack("pop pop"), "");
    assert_eq!(stack("1 2 3 clear"), "");
    assert_eq!(run("clear").value, None);
}

#[test]
fn test_noop() {
    assert_eq!(stack("1 noop 2"), "1 2");
}

#[test]
fn test_literals() {
    assert_eq!(
        stack("1 -2.5 1e2 true 'sym \"a \\\"q\\\"\" (x y)"),
        "1 -2.5 100 true (sym) (a \"q\") (x y)"
    );
}

#[test]
fn test_comments() {
    assert_eq!(stack("1 // 2\n3 /* 4\n5 */ 6"), "1 3 6");
}

#[test]
fn test_unknown_words_are_symbols() {
    assert_eq!(stack("hello world"), "(hello) (world)");
}

#[test]
fn test_underflow() {
    let e = fail("1 swap");
    assert_eq!(e.code(), ErrorCode::StackUnderflow);
    assert_eq!(e.location(), Some(2));
    assert_eq!(e.length(), Some(4));
    assert!(e.text().ends_with("Last item was: 1"));
}

#[test]
fn test_lexical_errors() {
    let e = fail("1 (2 (3)");
    assert_eq!(e.code(), ErrorCode::UnmatchedParentheses);
    assert_eq!(e.location(), Some(2));
    assert_eq!(e.length(), Some(1));
    let e = fail("1 2 )");
    assert_eq!(e.code(), ErrorCode::UnrecognizedInput);
    assert_eq!(e.location(), Some(4));
}
