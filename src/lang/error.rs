use super::Span;

pub struct Error {
    code: ErrorCode,
    span: Option<Span>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$span:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_span($span)
    };
    ($err:ident; $($msg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message(format!($($msg)+))
    };
    ($err:ident, ..$span:expr; $($msg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_span($span)
            .message(format!($($msg)+))
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            span: None,
            message: String::new(),
        }
    }

    pub fn in_span(self, span: Option<Span>) -> Error {
        debug_assert!(self.span.is_none());
        Error { span, ..self }
    }

    pub fn message(self, message: String) -> Error {
        debug_assert!(self.message.is_empty());
        Error { message, ..self }
    }

    /// Rewrites the span, used when text positions of a nested or
    /// rewritten program are mapped back onto the original program.
    pub fn relocate<F>(self, locate: F) -> Error
    where
        F: FnOnce(Span) -> Option<Span>,
    {
        let span = self.span.clone().and_then(locate);
        Error { span, ..self }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> Option<&Span> {
        self.span.as_ref()
    }

    pub fn location(&self) -> Option<usize> {
        self.span.as_ref().map(|s| s.start)
    }

    pub fn length(&self) -> Option<usize> {
        self.span.as_ref().map(|s| s.len())
    }

    /// Failures of the interpreter itself, never caused by a user program.
    pub fn is_internal(&self) -> bool {
        self.code == ErrorCode::InternalError
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnmatchedParentheses,
    UnrecognizedInput,
    NotAnOperator,
    StackUnderflow,
    MissingArguments,
    ArityMismatch,
    ContractViolation,
    TypeMismatch,
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self {
            UnmatchedParentheses => "unmatched parentheses",
            UnrecognizedInput => "unrecognized input",
            NotAnOperator => "not an operator",
            StackUnderflow => "stack underflow",
            MissingArguments => "missing arguments",
            ArityMismatch => "arity mismatch",
            ContractViolation => "contract violation",
            TypeMismatch => "type mismatch",
            InternalError => "internal error",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(span) = &self.span {
            write!(f, " at {}..{}", span.start, span.end)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
