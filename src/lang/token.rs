use super::{Origin, Span};
use std::rc::Rc;

/// ## Lexical and semantic unit
///
/// Tokens are values once they reach the operand stack. The `span` is
/// only used for diagnostics and is absent for synthesized tokens such as
/// the result of `+`.

#[derive(Debug, Clone)]
pub struct Token {
    kind: Kind,
    value: Value,
    span: Option<Span>,
    tags: Tags,
    origin: Option<Rc<Origin>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Pushed onto the stack when evaluated.
    Symbol,
    /// Reference into the operator table.
    Operator,
    /// Hygienic placeholder, renamed away before execution.
    Local,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    String(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    String = 1,
    Code = 2,
    Boolean = 4,
    Number = 8,
}

const ALL_TAGS: [Tag; 4] = [Tag::String, Tag::Code, Tag::Boolean, Tag::Number];

/// Small set of [`Tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tags(u8);

impl Tags {
    pub fn empty() -> Tags {
        Tags(0)
    }

    pub fn with(self, tag: Tag) -> Tags {
        Tags(self.0 | tag as u8)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.0 & tag as u8 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        ALL_TAGS.iter().copied().filter(move |t| self.contains(*t))
    }
}

impl From<&[Tag]> for Tags {
    fn from(tags: &[Tag]) -> Tags {
        tags.iter().fold(Tags::empty(), |acc, t| acc.with(*t))
    }
}

impl Token {
    pub fn new(kind: Kind, value: Value) -> Token {
        Token {
            kind,
            value,
            span: None,
            tags: Tags::empty(),
            origin: None,
        }
    }

    /// A synthesized value, tagged by the type of its value.
    pub fn symbol(value: Value) -> Token {
        let tags = Tags::empty().with(match value {
            Value::Number(_) => Tag::Number,
            Value::Boolean(_) => Tag::Boolean,
            Value::String(_) => Tag::String,
        });
        Token::new(Kind::Symbol, value).tagged(tags)
    }

    pub fn operator(name: &str) -> Token {
        Token::new(Kind::Operator, Value::String(name.to_string()))
    }

    pub fn at(self, span: Option<Span>) -> Token {
        Token { span, ..self }
    }

    pub fn tagged(self, tags: Tags) -> Token {
        Token { tags, ..self }
    }

    pub fn from_origin(self, origin: Option<Rc<Origin>>) -> Token {
        Token { origin, ..self }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn span(&self) -> Option<&Span> {
        self.span.as_ref()
    }

    pub fn tags(&self) -> Tags {
        self.tags
    }

    /// Where the text of a quoted code token came from.
    pub fn origin(&self) -> Option<&Rc<Origin>> {
        self.origin.as_ref()
    }

    pub fn is_code(&self) -> bool {
        self.tags.contains(Tag::Code)
    }

    pub fn number(&self) -> Option<f64> {
        match self.value {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn truthy(&self) -> bool {
        self.value.truthy()
    }

    /// The value as plain text, used for names, registers and `print`.
    pub fn text(&self) -> String {
        self.value.to_string()
    }

    /// Program text which evaluates back to this token.
    pub fn serialize(&self) -> String {
        match (&self.kind, &self.value) {
            (Kind::Operator, v) => v.to_string(),
            (_, Value::String(s)) => format!("({})", s),
            (_, v) => v.to_string(),
        }
    }

    /// Program text executed when this token is evaluated as code.
    pub fn source(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            _ => self.serialize(),
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Token) -> bool {
        self.kind == other.kind
            && self.value == other.value
            && self.span == other.span
            && self.tags == other.tags
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.serialize())
    }
}

impl Value {
    pub fn truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Boolean(b) => *b,
            Value::String(s) => !s.is_empty(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Value::Number(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    write!(f, "{}Infinity", if *n < 0.0 { "-" } else { "" })
                } else if *n == 0.0 {
                    write!(f, "0")
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        assert_eq!(Token::symbol(3.0.into()).serialize(), "3");
        assert_eq!(Token::symbol(0.5.into()).serialize(), "0.5");
        assert_eq!(Token::symbol(true.into()).serialize(), "true");
        assert_eq!(Token::symbol("1 2 +".into()).serialize(), "(1 2 +)");
        assert_eq!(Token::operator("dup").serialize(), "dup");
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Value::Number(-0.0).to_string(), "0");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::Number(-2.25).to_string(), "-2.25");
    }

    #[test]
    fn test_truthy() {
        assert!(!Value::Number(0.0).truthy());
        assert!(!Value::Number(f64::NAN).truthy());
        assert!(Value::Number(-1.0).truthy());
        assert!(!Value::String(String::new()).truthy());
        assert!(Value::String("false".into()).truthy());
    }

    #[test]
    fn test_tags() {
        let tags = Tags::from(&[Tag::String, Tag::Code][..]);
        assert!(tags.contains(Tag::Code));
        assert!(!tags.contains(Tag::Number));
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec![Tag::String, Tag::Code]);
        assert!(Token::symbol(1.0.into()).tags().contains(Tag::Number));
    }
}
