/*!
## Rust Machine Module

This Rust module evaluates stacker programs. Tokens are executed as
they are scanned: symbols are pushed onto the operand stack and
operators are looked up in the live operator table and invoked.

*/

mod builtin;
mod interpreter;
mod operation;
mod operator;
mod runtime;
mod stack;

pub use builtin::table;
pub use interpreter::Interpreter;
pub use operation::Operation;
pub use operator::{Arity, Behavior, Call, Native, OpTable, Operator, Yield};
pub use runtime::{run, Outcome, Runtime};
pub use stack::Stack;

#[cfg(test)]
mod tests;
