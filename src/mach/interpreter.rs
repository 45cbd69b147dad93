use super::{Arity, Behavior, Call, OpTable, Operator, Stack, Yield};
use crate::error;
use crate::lang::{Edits, Error, Kind, Origin, Token, Tokenizer};
use log::{debug, trace};
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Evaluator
///
/// Owns the operand stack, the live operator table, the registers and the
/// tokenizer. Nested evaluations from `eval`, `if`, the combinators and
/// user-defined operators re-enter [`Interpreter::evaluate_token`] and share
/// all of this state; only local names are isolated per evaluation.

pub struct Interpreter {
    stack: Stack<Token>,
    ops: OpTable,
    tokenizer: Tokenizer,
    memory: BTreeMap<String, Token>,
    output: Vec<String>,
    uid: usize,
}

impl Interpreter {
    pub fn new(ops: OpTable, tokenizer: Tokenizer) -> Interpreter {
        Interpreter {
            stack: Stack::new(),
            ops,
            tokenizer,
            memory: BTreeMap::new(),
            output: vec![],
            uid: 0,
        }
    }

    pub fn stack(&self) -> &Stack<Token> {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack<Token> {
        &mut self.stack
    }

    pub fn ops(&self) -> &OpTable {
        &self.ops
    }

    pub fn ops_mut(&mut self) -> &mut OpTable {
        &mut self.ops
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn memory(&self) -> &BTreeMap<String, Token> {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut BTreeMap<String, Token> {
        &mut self.memory
    }

    /// Lines written by `print`.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    pub fn print(&mut self, line: String) {
        debug!("print {:?}", line);
        self.output.push(line);
    }

    /// Installs a host operator. This is the hook for embedding programs
    /// which need operators the language itself does not provide.
    pub fn define_native<F>(&mut self, name: &str, arity: Arity, f: F)
    where
        F: Fn(&mut Call) -> Result<Yield> + 'static,
    {
        self.ops.insert(name, Operator::native(arity, f));
    }

    /// Looks up the operator a token names in the current table.
    pub fn operator(&self, token: &Token) -> Result<Operator> {
        let name = token.text();
        match self.ops.get(&name) {
            Some(op) => Ok(op.clone()),
            None => Err(error!(NotAnOperator, ..token.span().cloned();
                "\"{}\" is not an operator", name)),
        }
    }

    /// Evaluates program text. Returns the top of the stack afterwards.
    pub fn evaluate(&mut self, text: &str) -> Result<Option<Token>> {
        self.evaluate_in(text, Rc::new(Origin::Source))
    }

    /// Evaluates the text of a token: quoted code, a string, or the
    /// serialized form of any other value.
    pub fn evaluate_token(&mut self, token: &Token) -> Result<Option<Token>> {
        let origin = match (token.origin(), token.span()) {
            (Some(origin), _) => origin.clone(),
            (None, Some(span)) => Rc::new(Origin::Anchored(span.clone())),
            (None, None) => Rc::new(Origin::Detached),
        };
        self.evaluate_in(&token.source(), origin)
    }

    fn evaluate_in(&mut self, text: &str, origin: Rc<Origin>) -> Result<Option<Token>> {
        let uid = self.uid;
        self.uid += 1;
        let (text, edits) = self.hygiene(text, uid, &origin)?;
        debug!("evaluate #{}: {:?}", uid, text);

        let edits = Rc::new(edits);
        let here = Origin::Within {
            offset: 0,
            edits: edits.clone(),
            parent: origin.clone(),
        };
        let mut lexer = crate::lang::Lexer::new(&text);
        while let Some(token) = lexer.next_token(&self.tokenizer, &self.ops) {
            let token = token.map_err(|e| e.relocate(|s| here.locate(s)))?;
            let span = token.span().cloned();
            let located = span.clone().and_then(|s| here.locate(s));
            let token = if token.is_code() {
                let nested = span.map(|s| {
                    Rc::new(Origin::Within {
                        offset: s.start,
                        edits: edits.clone(),
                        parent: origin.clone(),
                    })
                });
                token.at(located).from_origin(nested)
            } else {
                token.at(located)
            };
            match token.kind() {
                Kind::Symbol => self.stack.push(token),
                Kind::Operator => {
                    let op = self.operator(&token)?;
                    trace!("#{} {} {:?}", uid, token.text(), op.arity());
                    self.invoke(&op, &token)?;
                }
                Kind::Local => {
                    return Err(error!(InternalError, ..token.span().cloned();
                        "Internal error: unreplaced local {}", token.text()))
                }
            }
        }
        Ok(self.stack.last().cloned())
    }

    /// Renames every local used at the top level of `text`, including its
    /// uses inside quoted code, to `name@uid`. Locals which only appear
    /// inside quoted code belong to that code and are renamed when it runs.
    fn hygiene(&self, text: &str, uid: usize, origin: &Origin) -> Result<(String, Edits)> {
        let mut locals = HashSet::new();
        for token in self.tokenizer.tokenize(text, &self.ops) {
            let token = token.map_err(|e| e.relocate(|s| origin.locate(s)))?;
            if token.kind() == Kind::Local {
                locals.insert(token.text());
            }
        }
        if locals.is_empty() {
            return Ok((text.to_string(), Edits::default()));
        }
        debug!("evaluate #{}: renaming {:?}", uid, locals);
        let mut rename = |token: &Token| {
            let name = token.text();
            if token.kind() == Kind::Local && locals.contains(&name) {
                Some(format!("{}@{}", name, uid))
            } else {
                None
            }
        };
        self.tokenizer
            .edit(text, &self.ops, &mut rename, true)
            .map_err(|e| e.relocate(|s| origin.locate(s)))
    }

    /// Runs an operator on behalf of `caller`, which is used for
    /// diagnostics: fixed operands are popped and checked first, and the
    /// behavior's results are pushed afterwards.
    pub fn invoke(&mut self, op: &Operator, caller: &Token) -> Result<()> {
        let result = {
            let mut call = Call::new(self, caller);
            if let Arity::Fixed(n) = op.arity() {
                call.collect(n)?;
            }
            match op.behavior() {
                Behavior::Native(f) => f(&mut call)?,
                Behavior::Defined(code) => {
                    call.restore_operands();
                    call.interpreter().evaluate_token(code)?;
                    Yield::Nothing
                }
            }
        };
        match result {
            Yield::Nothing => {}
            Yield::One(token) => self.stack.push(token),
            Yield::Many(tokens) => self.stack.extend(tokens),
        }
        Ok(())
    }
}
