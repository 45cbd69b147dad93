use super::*;
use crate::lang::{ErrorCode, Kind, Token, Tokenizer, Value};


fn interpreter() -> Interpreter {
    Interpreter::new(table(), Tokenizer::default())
}

fn numbers(interpreter: &Interpreter) -> Vec<f64> {
    interpreter.stack().iter().filter_map(Token::number).collect()
}
