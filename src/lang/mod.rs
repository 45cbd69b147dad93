/*!
# Rust Language Module

This Rust module provides lexical analysis of the stacker language:
tokens, the longest-match tokenizer, and the text rewriting used for
hygienic renaming of locals.

*/

/// Byte range into a program's text.
pub type Span = std::ops::Range<usize>;

#[macro_use]
mod error;
mod edit;
mod lex;
mod origin;
mod token;

pub use edit::Edits;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::{Build, Lexer, Rule, Tokenizer, Tokens, Vocabulary};
pub use origin::Origin;
pub use token::{Kind, Tag, Tags, Token, Value};

#[cfg(test)]
mod tests;
