//! Parse error types.
//!
//! Errors are collected, never fatal: the parser records one and resumes
//! at the next unit (definition, declaration or module end).

use std::fmt;
use tla_ir::Span;
use tla_lexer::{LexError, TokenKind};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// A specific token or construct was required.
    Expected {
        expected: &'static str,
        found: TokenKind,
    },
    /// An expression was required but the next token ends one.
    ExpectedExpression { found: TokenKind },
    /// A unit-level token that starts no definition or declaration.
    ExpectedDefinition { found: TokenKind },
    /// `(`, `[`, `{` or `<<` without its closer.
    Unclosed { open: TokenKind },
    /// Error reported by the lexer.
    Lex(LexError),
}

impl ParseError {
    pub fn expected(expected: &'static str, found: TokenKind, span: Span) -> Self {
        ParseError {
            span,
            kind: ParseErrorKind::Expected { expected, found },
        }
    }

    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { span, kind }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            span: err.span,
            kind: ParseErrorKind::Lex(err),
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Expected { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            ParseErrorKind::ExpectedExpression { found } => {
                write!(f, "expected an expression, found {found}")
            }
            ParseErrorKind::ExpectedDefinition { found } => {
                write!(f, "expected a definition or declaration, found {found}")
            }
            ParseErrorKind::Unclosed { open } => write!(f, "unclosed {open}"),
            ParseErrorKind::Lex(err) => write!(f, "{}", err.kind),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests;
