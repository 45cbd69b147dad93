//! # stacker
//!
//! A small concatenative language. Programs are sequences of values and
//! operator names; values are pushed onto a stack and operators consume
//! and produce values on it. Parenthesized text is quoted code which
//! operators such as `if`, `map` and `eval` run later, and new operators
//! are defined from quoted code while a program runs.
//!
//! ```
//! use stacker::lang::Value;
//!
//! let outcome = stacker::run("1 2 + 4 *").unwrap();
//! assert_eq!(outcome.value, Some(Value::Number(12.0)));
//! ```
//!
//! Running the `stacker` executable with no arguments starts an interactive
//! prompt where the stack, operators and registers persist from line to line.
//! ```text
//! > 'sq 1 (dup *) define-op
//! stack:
//! > 1 5 1 range 'sq map
//! stack: 1 4 9 16
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/operators.rs"]
#[allow(non_snake_case)]
pub mod __Operators;

pub mod lang;
pub mod mach;

pub use mach::{run, Outcome, Runtime};
