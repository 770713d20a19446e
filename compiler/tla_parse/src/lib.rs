//! Recursive descent parser for TLA+ modules.
//!
//! Only constructs that introduce or reference names get their own nodes:
//! definitions, declarations, binders, LET, LAMBDA, INSTANCE and
//! identifier references. Everything else in an expression is consumed as
//! opaque tokens inside an `Expr` group. Expression extent follows TLA+
//! layout rules: a body runs until the next definition header, a unit
//! keyword, a closing delimiter, or a token left of an enclosing junction
//! bullet.

mod cursor;
mod error;
mod grammar;
mod stack;

pub use error::{ParseError, ParseErrorKind};

use grammar::Parser;
use tla_ir::{StringInterner, SyntaxTree};

/// Syntax tree plus the errors met while building it.
///
/// The tree is always usable: malformed regions become `Error` nodes.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub tree: SyntaxTree,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex and parse one module.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str, interner: &StringInterner) -> ParseOutput {
    let lexed = tla_lexer::lex(source, interner);
    let mut parser = Parser::new(source, &lexed.tokens, interner);
    parser.module();
    let (tree, mut errors) = parser.finish();
    errors.extend(lexed.errors.into_iter().map(ParseError::from));
    errors.sort_by_key(|e| e.span.start);
    tracing::debug!(nodes = tree.len(), errors = errors.len(), "parsed module");
    ParseOutput { tree, errors }
}

#[cfg(test)]
mod tests;
