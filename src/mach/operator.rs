use super::Interpreter;
use crate::error;
use crate::lang::{Error, Token, Vocabulary};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Operands popped and checked before the behavior runs.
    Fixed(usize),
    /// The behavior pops what it needs, usually the whole stack.
    Variadic,
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "{}", n),
            Arity::Variadic => write!(f, "none"),
        }
    }
}

pub type Native = dyn Fn(&mut Call) -> Result<Yield>;

#[derive(Clone)]
pub enum Behavior {
    Native(Rc<Native>),
    /// Quoted code captured by `define-op`, evaluated on every call.
    Defined(Token),
}

/// ## Named action
///
/// Built-in and user-defined operators live side by side in the
/// [`OpTable`]. Cloning is cheap and detaches the clone from later
/// changes to the table.

#[derive(Clone)]
pub struct Operator {
    arity: Arity,
    behavior: Behavior,
}

impl std::fmt::Debug for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.behavior {
            Behavior::Native(_) => write!(f, "Operator {{ native, arity: {} }}", self.arity),
            Behavior::Defined(code) => {
                write!(f, "Operator {{ {}, arity: {} }}", code.serialize(), self.arity)
            }
        }
    }
}

impl Operator {
    pub fn native<F>(arity: Arity, f: F) -> Operator
    where
        F: Fn(&mut Call) -> Result<Yield> + 'static,
    {
        Operator {
            arity,
            behavior: Behavior::Native(Rc::new(f)),
        }
    }

    pub fn defined(arity: Arity, code: Token) -> Operator {
        Operator {
            arity,
            behavior: Behavior::Defined(code),
        }
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }
}

/// What a behavior leaves for the wrapper to push.
#[derive(Debug, PartialEq)]
pub enum Yield {
    Nothing,
    One(Token),
    Many(Vec<Token>),
}

impl From<()> for Yield {
    fn from(_: ()) -> Yield {
        Yield::Nothing
    }
}

impl From<Token> for Yield {
    fn from(t: Token) -> Yield {
        Yield::One(t)
    }
}

impl From<Option<Token>> for Yield {
    fn from(t: Option<Token>) -> Yield {
        match t {
            Some(t) => Yield::One(t),
            None => Yield::Nothing,
        }
    }
}

impl From<Vec<Token>> for Yield {
    fn from(v: Vec<Token>) -> Yield {
        Yield::Many(v)
    }
}

/// ## One operator invocation
///
/// The stack view handed to a behavior. Fixed-arity operands have already
/// been popped; variadic behaviors pop through the methods here, which
/// report failures against the calling token.

pub struct Call<'a> {
    interpreter: &'a mut Interpreter,
    caller: &'a Token,
    operands: Vec<Token>,
    last: Option<Token>,
}

impl<'a> Call<'a> {
    pub fn new(interpreter: &'a mut Interpreter, caller: &'a Token) -> Call<'a> {
        Call {
            interpreter,
            caller,
            operands: vec![],
            last: None,
        }
    }

    pub fn caller(&self) -> &Token {
        self.caller
    }

    pub fn interpreter(&mut self) -> &mut Interpreter {
        &mut *self.interpreter
    }

    pub fn len(&self) -> usize {
        self.interpreter.stack().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push(&mut self, token: Token) {
        self.interpreter.stack_mut().push(token)
    }

    fn name(&self) -> String {
        self.caller.serialize()
    }

    fn underflow(&self, message: String) -> Error {
        let message = match &self.last {
            Some(last) => format!("{}\nLast item was: {}", message, last.serialize()),
            None => message,
        };
        error!(StackUnderflow, ..self.caller.span().cloned(); "{}", message)
    }

    pub fn pop(&mut self) -> Result<Token> {
        match self.interpreter.stack_mut().pop() {
            Some(token) => {
                self.last = Some(token.clone());
                Ok(token)
            }
            None => Err(self.underflow(format!(
                "\"{}\" expected another item on the stack, but it was empty.",
                self.name()
            ))),
        }
    }

    /// Pops one item; an empty stack is not an error.
    pub fn pop_or_none(&mut self) -> Option<Token> {
        let token = self.interpreter.stack_mut().pop();
        if token.is_some() {
            self.last = token.clone();
        }
        token
    }

    /// Pops one item per name, returned in the order named: the first
    /// name is the deepest item.
    pub fn pop_args(&mut self, names: &[&str]) -> Result<Vec<Token>> {
        let len = self.len();
        match self.interpreter.stack_mut().pop_n(names.len()) {
            Some(args) => {
                self.last = args.first().cloned();
                Ok(args)
            }
            None => {
                let list = names
                    .iter()
                    .map(|n| format!("\"{}\"", n))
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(error!(MissingArguments, ..self.caller.span().cloned();
                    "\"{}\" expected at least {} items on the stack, but only {} items were present.\nIt expects arguments {}.",
                    self.name(), names.len(), len, list))
            }
        }
    }

    /// Pops everything, oldest first.
    pub fn pop_all(&mut self) -> Vec<Token> {
        self.interpreter.stack_mut().drain()
    }

    /// Pops the operands of a fixed-arity operator, one at a time from
    /// the top, then restores their declared order.
    pub(super) fn collect(&mut self, arity: usize) -> Result<()> {
        let mut operands = Vec::with_capacity(arity);
        while operands.len() < arity {
            match self.interpreter.stack_mut().pop() {
                Some(token) => {
                    self.last = Some(token.clone());
                    operands.push(token);
                }
                None => {
                    let present = operands.len();
                    return Err(self.underflow(format!(
                        "\"{}\" expected {} {} on the stack, but only {} {} present.",
                        self.name(),
                        arity,
                        if arity == 1 { "item" } else { "items" },
                        present,
                        if present == 1 { "was" } else { "were" },
                    )));
                }
            }
        }
        operands.reverse();
        self.operands = operands;
        Ok(())
    }

    /// Fixed-arity operands in declared order.
    pub fn operands<const N: usize>(&mut self) -> Result<[Token; N]> {
        let operands = std::mem::take(&mut self.operands);
        let found = operands.len();
        operands.try_into().map_err(|_| {
            error!(InternalError, ..self.caller.span().cloned();
                "\"{}\" was given {} operands but reads {}", self.name(), found, N)
        })
    }

    pub(super) fn restore_operands(&mut self) {
        let operands = std::mem::take(&mut self.operands);
        self.interpreter.stack_mut().extend(operands);
    }
}

/// ## Operator table
///
/// Live mapping from name to operator. Mutated by programs while they run,
/// so lookups always go through the table rather than a cached copy.

#[derive(Default, Clone)]
pub struct OpTable {
    ops: HashMap<String, Operator>,
}

impl OpTable {
    pub fn new() -> OpTable {
        OpTable::default()
    }

    pub fn get(&self, name: &str) -> Option<&Operator> {
        self.ops.get(name)
    }

    pub fn insert(&mut self, name: &str, op: Operator) -> Option<Operator> {
        self.ops.insert(name.to_string(), op)
    }

    pub fn remove(&mut self, name: &str) -> Option<Operator> {
        self.ops.remove(name)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ops.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Vocabulary for OpTable {
    fn contains(&self, word: &str) -> bool {
        self.ops.contains_key(word)
    }
}
