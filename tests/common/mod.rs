#![allow(dead_code)]
use stacker::lang::{Error, Value};
use stacker::Outcome;

pub fn run(source: &str) -> Outcome {
    match stacker::run(source) {
        Ok(outcome) => outcome,
        Err(error) => panic!("{:?} failed: {}", source, error),
    }
}

pub fn value(source: &str) -> Option<Value> {
    run(source).value
}

pub fn number(source: &str) -> f64 {
    match value(source) {
        Some(Value::Number(n)) => n,
        other => panic!("{:?} left {:?}", source, other),
    }
}

pub fn numbers(source: &str) -> Vec<f64> {
    run(source).stack.iter().filter_map(|t| t.number()).collect()
}

/// The stack as program text, bottom first.
pub fn stack(source: &str) -> String {
    run(source)
        .stack
        .iter()
        .map(|t| t.serialize())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn fail(source: &str) -> Error {
    match stacker::run(source) {
        Ok(outcome) => panic!("{:?} succeeded with {:?}", source, outcome.value),
        Err(error) => error,
    }
}
