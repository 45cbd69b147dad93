use super::{builtin, Interpreter};
use crate::lang::{Error, Token, Tokenizer, Value};
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Persistent session
///
/// Keeps one interpreter alive across many entered programs so the
/// stack, operator table and registers carry over from one line to the
/// next. This is what the interactive prompt runs.

pub struct Runtime {
    interpreter: Interpreter,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            interpreter: Interpreter::new(builtin::table(), Tokenizer::default()),
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// Evaluates a program against the current state. On error the state
    /// is left as the failing operator found it.
    pub fn enter(&mut self, source: &str) -> Result<Option<Token>> {
        self.interpreter.evaluate(source)
    }

    pub fn stack(&self) -> Vec<Token> {
        self.interpreter.stack().to_vec()
    }

    pub fn memory(&self) -> &BTreeMap<String, Token> {
        self.interpreter.memory()
    }

    pub fn take_output(&mut self) -> Vec<String> {
        self.interpreter.take_output()
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }
}

/// Everything a finished program leaves behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Value on top of the stack, if any.
    pub value: Option<Value>,
    /// Bottom to top.
    pub stack: Vec<Token>,
    pub memory: BTreeMap<String, Token>,
    /// Lines written by `print`.
    pub output: Vec<String>,
}

/// Runs a program with fresh built-ins, an empty stack and no registers.
pub fn run(source: &str) -> Result<Outcome> {
    let mut runtime = Runtime::new();
    let top = runtime.enter(source)?;
    Ok(Outcome {
        value: top.map(Token::into_value),
        stack: runtime.stack(),
        memory: runtime.memory().clone(),
        output: runtime.take_output(),
    })
}
