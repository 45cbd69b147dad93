use super::{Error, Kind, Span, Tag, Tags, Token, Value};
use regex::{Captures, Regex};
use std::collections::HashSet;

type Result<T> = std::result::Result<T, Error>;

/// Words which lex as operators. Identifiers are classified against the
/// live operator table at the moment they are scanned.
pub trait Vocabulary {
    fn contains(&self, word: &str) -> bool;
}

impl Vocabulary for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

/// Builds a token from a rule match. `None` consumes the text silently.
pub type Build = fn(&Captures, Span, &dyn Vocabulary) -> Option<Token>;

pub struct Rule {
    pattern: Regex,
    build: Build,
}

impl Rule {
    pub fn new(pattern: &str, build: Build) -> std::result::Result<Rule, regex::Error> {
        Ok(Rule {
            pattern: Regex::new(&format!(r"\A(?:{})", pattern))?,
            build,
        })
    }
}

/// ## Longest-match tokenizer
///
/// Every rule is tried at the current position and the longest match
/// wins; earlier rules win ties. An opening parenthesis is never given to
/// the rules: the balanced text up to its matching close becomes one
/// quoted code token.

pub struct Tokenizer {
    rules: Vec<Rule>,
}

impl Default for Tokenizer {
    fn default() -> Tokenizer {
        Tokenizer::new(standard_rules())
    }
}

impl Tokenizer {
    pub fn new(rules: Vec<Rule>) -> Tokenizer {
        Tokenizer { rules }
    }

    pub fn tokenize<'a>(&'a self, text: &'a str, words: &'a dyn Vocabulary) -> Tokens<'a> {
        Tokens {
            lexer: Lexer::new(text),
            tokenizer: self,
            words,
        }
    }

    fn longest<'t>(&self, rest: &'t str) -> Option<(&Rule, Captures<'t>)> {
        let mut best: Option<(&Rule, Captures<'t>)> = None;
        for rule in &self.rules {
            if let Some(caps) = rule.pattern.captures(rest) {
                let len = caps.get(0).map_or(0, |m| m.end());
                let best_len = best
                    .as_ref()
                    .and_then(|(_, c)| c.get(0))
                    .map_or(0, |m| m.end());
                if len > best_len {
                    best = Some((rule, caps));
                }
            }
        }
        best
    }
}

/// Scanning position over one text. Holds no borrow of the tokenizer or
/// the operator table so the table can change between tokens.
pub struct Lexer<'a> {
    text: &'a str,
    location: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Lexer<'a> {
        Lexer { text, location: 0 }
    }

    pub fn next_token(
        &mut self,
        tokenizer: &Tokenizer,
        words: &dyn Vocabulary,
    ) -> Option<Result<Token>> {
        while self.location < self.text.len() {
            let r = self.scan(tokenizer, words);
            if r.is_err() {
                self.location = self.text.len();
            }
            match r {
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }

    fn scan(&mut self, tokenizer: &Tokenizer, words: &dyn Vocabulary) -> Result<Option<Token>> {
        if self.text.as_bytes()[self.location] == b'(' {
            return self.paren().map(Some);
        }
        let rest = &self.text[self.location..];
        let (rule, caps) = match tokenizer.longest(rest) {
            Some(best) => best,
            None => {
                let len = rest.chars().next().map_or(1, char::len_utf8);
                let preview: String = rest.chars().take(32).collect();
                return Err(error!(UnrecognizedInput, ..Some(self.location..self.location + len);
                    "Unrecognized grammar starting here: {}", preview));
            }
        };
        let len = caps.get(0).map_or(0, |m| m.end());
        let span = self.location..self.location + len;
        self.location += len;
        Ok((rule.build)(&caps, span, words))
    }

    fn paren(&mut self) -> Result<Token> {
        let start = self.location;
        let bytes = self.text.as_bytes();
        let mut depth = 0;
        let mut location = start;
        loop {
            match bytes.get(location).copied() {
                None => {
                    return Err(error!(UnmatchedParentheses, ..Some(start..start + 1);
                        "Unmatched parentheses"))
                }
                Some(b'(') => depth += 1,
                Some(b')') => depth -= 1,
                Some(_) => {}
            }
            location += 1;
            if depth == 0 {
                break;
            }
        }
        self.location = location;
        let span = start + 1..location - 1;
        let code = self.text[span.clone()].to_string();
        Ok(Token::new(Kind::Symbol, Value::String(code))
            .at(Some(span))
            .tagged(Tags::empty().with(Tag::String).with(Tag::Code)))
    }
}

pub struct Tokens<'a> {
    lexer: Lexer<'a>,
    tokenizer: &'a Tokenizer,
    words: &'a dyn Vocabulary,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lexer.next_token(self.tokenizer, self.words)
    }
}

pub const WHITESPACE: &str = r"\s+";
pub const COMMENT_LINE: &str = r"(?m)//.*?$";
pub const COMMENT_BLOCK: &str = r"/\*+[^*]*\*+(?:[^/*][^*]*\*+)*/";
pub const STRING_QUOTES: &str = r#""((?:[^"\\]|\\.)*?)""#;
pub const STRING_SYMBOL: &str = r"'([^\s')]+)";
pub const LOCAL_NAME: &str = r"@[^@\s()]+";
pub const BOOLEAN: &str = r"true|false";
pub const NUMBER: &str = r"[+-]?[0-9]*\.?[0-9]+(?:[eE][+-]?[0-9]+)?";
pub const IDENTIFIER: &str = r"[^\s()]+";

pub fn standard_rules() -> Vec<Rule> {
    let table: [(&str, Build); 9] = [
        (WHITESPACE, silent),
        (COMMENT_LINE, silent),
        (COMMENT_BLOCK, silent),
        (STRING_QUOTES, quoted),
        (STRING_SYMBOL, quoted),
        (LOCAL_NAME, local),
        (BOOLEAN, boolean),
        (NUMBER, number),
        (IDENTIFIER, identifier),
    ];
    table
        .iter()
        .map(|(pattern, build)| Rule::new(pattern, *build).expect("standard pattern"))
        .collect()
}

fn silent(_: &Captures, _: Span, _: &dyn Vocabulary) -> Option<Token> {
    None
}

fn string_tags() -> Tags {
    Tags::empty().with(Tag::String)
}

fn quoted(caps: &Captures, span: Span, _: &dyn Vocabulary) -> Option<Token> {
    let raw = caps.get(1).map_or("", |m| m.as_str());
    Some(
        Token::new(Kind::Symbol, Value::String(unescape(raw)))
            .at(Some(span))
            .tagged(string_tags()),
    )
}

fn local(caps: &Captures, span: Span, _: &dyn Vocabulary) -> Option<Token> {
    Some(
        Token::new(Kind::Local, Value::from(&caps[0]))
            .at(Some(span))
            .tagged(string_tags()),
    )
}

fn boolean(caps: &Captures, span: Span, _: &dyn Vocabulary) -> Option<Token> {
    Some(
        Token::new(Kind::Symbol, Value::Boolean(&caps[0] == "true"))
            .at(Some(span))
            .tagged(Tags::empty().with(Tag::Boolean)),
    )
}

fn number(caps: &Captures, span: Span, _: &dyn Vocabulary) -> Option<Token> {
    let n = caps[0].parse::<f64>().unwrap_or(f64::NAN);
    Some(
        Token::new(Kind::Symbol, Value::Number(n))
            .at(Some(span))
            .tagged(Tags::empty().with(Tag::Number)),
    )
}

fn identifier(caps: &Captures, span: Span, words: &dyn Vocabulary) -> Option<Token> {
    let word = &caps[0];
    if words.contains(word) {
        Some(Token::operator(word).at(Some(span)))
    } else {
        Some(
            Token::new(Kind::Symbol, Value::from(word))
                .at(Some(span))
                .tagged(string_tags()),
        )
    }
}

/// Collapses backslash escapes: `\x` becomes `x`.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('\n') => out.push_str("\\\n"),
                Some(next) => out.push(next),
                None => out.push(ch),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r#"a\"b"#), "a\"b");
        assert_eq!(unescape(r"a\\b"), r"a\b");
        assert_eq!(unescape(r"\n"), "n");
    }

    #[test]
    fn test_longest_match_wins() {
        let t = Tokenizer::default();
        let (rule, caps) = t.longest("12abc rest").unwrap();
        assert_eq!(&caps[0], "12abc");
        assert!(std::ptr::eq(rule, &t.rules[8]));
    }
}
