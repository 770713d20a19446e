//! Lexer errors.

use std::fmt;
use tla_ir::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// `(*` without a matching `*)`.
    UnterminatedComment,
    /// `"` without a closing quote on the same line.
    UnterminatedString,
    /// A character that starts no TLA+ token.
    UnexpectedCharacter(char),
}

impl LexError {
    /// Classify an error slice produced by the raw lexer.
    pub(crate) fn from_slice(span: Span, slice: &str) -> Self {
        let kind = if slice.starts_with("(*") {
            LexErrorKind::UnterminatedComment
        } else if slice.starts_with('"') {
            LexErrorKind::UnterminatedString
        } else {
            LexErrorKind::UnexpectedCharacter(slice.chars().next().unwrap_or('\0'))
        };
        LexError { span, kind }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnterminatedComment => write!(f, "unterminated block comment"),
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::UnexpectedCharacter(c) => write!(f, "unexpected character {c:?}"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

impl std::error::Error for LexError {}
