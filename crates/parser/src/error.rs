use std::fmt;

use global_common::Span;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub span: Span,
    pub kind: SyntaxError,
}

impl Error {
    pub fn new(span: Span, kind: SyntaxError) -> Self {
        Error { span, kind }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxError {
    UnexpectedEof,
    UnexpectedToken { got: String },
    Expected { expected: &'static str, got: String },
    UnterminatedString,
    UnterminatedRegex,
    UnterminatedComment,
    InvalidNumber,
    InvalidAssignTarget,
    InvalidForInTarget,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnexpectedEof => write!(f, "unexpected end of input"),
            SyntaxError::UnexpectedToken { got } => write!(f, "unexpected token `{}`", got),
            SyntaxError::Expected { expected, got } => {
                write!(f, "expected {}, got `{}`", expected, got)
            }
            SyntaxError::UnterminatedString => write!(f, "unterminated string literal"),
            SyntaxError::UnterminatedRegex => write!(f, "unterminated regular expression"),
            SyntaxError::UnterminatedComment => write!(f, "unterminated block comment"),
            SyntaxError::InvalidNumber => write!(f, "invalid numeric literal"),
            SyntaxError::InvalidAssignTarget => write!(f, "invalid assignment target"),
            SyntaxError::InvalidForInTarget => write!(f, "invalid for-in target"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
