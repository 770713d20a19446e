//! Grammar productions.
//!
//! - `mod.rs`: parser state, module header, unit loop and recovery
//! - `unit.rs`: definitions and module-level declarations
//! - `expr.rs`: expression extent, references, groups, junction lists
//! - `binder.rs`: quantifiers, CHOOSE, comprehensions, function
//!   constructors, LAMBDA

mod binder;
mod expr;
mod unit;

pub(crate) use expr::ExprCtx;

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};
use tla_ir::{DeclKind, Name, NodeId, NodeKind, Span, StringInterner, SyntaxTree, TreeBuilder};
use tla_lexer::{Keyword, TokenKind, TokenList};

/// Shape of a definition header, found by lookahead.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum DefShape {
    /// `Op == ...`
    Plain,
    /// `Op(a, b) == ...`
    Params,
    /// `f[x \in S] == ...`
    Function,
    /// `a ++ b == ...`
    Infix,
    /// `-. a == ...`
    Prefix,
    /// `a ^+ == ...`
    Postfix,
}

/// Parser state.
pub(crate) struct Parser<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
    interner: &'a StringInterner,
    builder: TreeBuilder,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(source: &'a str, tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            source,
            cursor: Cursor::new(tokens),
            interner,
            builder: TreeBuilder::with_capacity(source.len()),
            errors: Vec::new(),
        }
    }

    pub(crate) fn finish(self) -> (SyntaxTree, Vec<ParseError>) {
        (self.builder.build(), self.errors)
    }

    /// Parse the whole file as one module.
    ///
    /// The root spans the entire source. Text before the header and after
    /// the closing `====` is ignored; a file without a header still has
    /// its units parsed under a nameless root.
    pub(crate) fn module(&mut self) {
        let root = self.builder.start(NodeKind::Module, 0);
        if self.seek_header() {
            self.header(root);
        }
        self.units();
        let end = u32::try_from(self.source.len()).unwrap_or(u32::MAX);
        self.builder.finish(root, end);
    }

    fn seek_header(&mut self) -> bool {
        let mut n = 0;
        loop {
            match self.cursor.peek_kind(n) {
                TokenKind::Eof => return false,
                TokenKind::Separator if self.cursor.peek_kind(n + 1).is_keyword(Keyword::Module) => {
                    self.cursor.set_position(self.cursor.position() + n);
                    return true;
                }
                _ => n += 1,
            }
        }
    }

    fn header(&mut self, root: NodeId) {
        self.cursor.advance();
        self.cursor.advance();
        let tok = self.cursor.current();
        if let TokenKind::Ident(name) = tok.kind {
            self.builder.set_name(root, name);
            self.cursor.advance();
        } else {
            self.error_expected("module name");
        }
        if !self.cursor.eat(TokenKind::Separator) {
            self.error_expected("`----`");
        }
    }

    fn units(&mut self) {
        loop {
            let tok = self.cursor.current();
            match tok.kind {
                TokenKind::Eof => break,
                TokenKind::ModuleEnd => {
                    self.cursor.advance();
                    break;
                }
                TokenKind::Separator => {
                    if self.cursor.peek_kind(1).is_keyword(Keyword::Module) {
                        self.skip_nested_module();
                    } else {
                        self.cursor.advance();
                    }
                }
                TokenKind::Keyword(Keyword::Extends) => self.extends(),
                TokenKind::Keyword(Keyword::Variable) => {
                    self.declarations(NodeKind::Variables, DeclKind::Variable);
                }
                TokenKind::Keyword(Keyword::Constant) => {
                    self.declarations(NodeKind::Constants, DeclKind::Constant);
                }
                TokenKind::Keyword(Keyword::Recursive) => self.recursive(),
                TokenKind::Keyword(Keyword::Local) => self.local(),
                TokenKind::Keyword(Keyword::Instance) => {
                    self.instance(tla_ir::NodeFlags::empty(), tok.span.start);
                }
                TokenKind::Keyword(Keyword::Assume) => self.assertion(NodeKind::Assume),
                TokenKind::Keyword(Keyword::Theorem) => self.assertion(NodeKind::Theorem),
                TokenKind::Keyword(Keyword::Proof) => self.skip_proof(),
                _ => match self.def_shape() {
                    Some(shape) => {
                        self.definition(
                            shape,
                            tla_ir::NodeFlags::empty(),
                            tok.span.start,
                            ExprCtx::default(),
                        );
                    }
                    None => {
                        self.errors.push(ParseError::new(
                            ParseErrorKind::ExpectedDefinition { found: tok.kind },
                            tok.span,
                        ));
                        self.recover(false);
                    }
                },
            }
        }
    }

    /// Lookahead for a definition header at the current token.
    pub(crate) fn def_shape(&self) -> Option<DefShape> {
        let c = &self.cursor;
        match c.peek_kind(0) {
            TokenKind::Ident(_) => match c.peek_kind(1) {
                TokenKind::DefEq => Some(DefShape::Plain),
                TokenKind::LParen => {
                    let after = c.matching_close(1)?;
                    (c.peek_kind(after) == TokenKind::DefEq).then_some(DefShape::Params)
                }
                TokenKind::LBracket => {
                    let after = c.matching_close(1)?;
                    (c.peek_kind(after) == TokenKind::DefEq).then_some(DefShape::Function)
                }
                TokenKind::Op => match c.peek_kind(2) {
                    TokenKind::Ident(_) if c.peek_kind(3) == TokenKind::DefEq => {
                        Some(DefShape::Infix)
                    }
                    TokenKind::DefEq => Some(DefShape::Postfix),
                    _ => None,
                },
                _ => None,
            },
            TokenKind::Op => (matches!(c.peek_kind(1), TokenKind::Ident(_))
                && c.peek_kind(2) == TokenKind::DefEq)
                .then_some(DefShape::Prefix),
            _ => None,
        }
    }

    /// Tokens that end any unit, nested or not.
    pub(crate) fn at_unit_boundary(&self) -> bool {
        let kind = self.cursor.current_kind();
        matches!(
            kind,
            TokenKind::Eof | TokenKind::ModuleEnd | TokenKind::Separator
        ) || is_unit_keyword(kind)
            || self.def_shape().is_some()
    }

    /// Skip to the next unit, wrapping the skipped tokens in an `Error` node.
    ///
    /// Always consumes at least one token. Inside a LET (`in_let`), `IN`
    /// also ends the skip.
    pub(crate) fn recover(&mut self, in_let: bool) {
        let start = self.cursor.current().span.start;
        let node = self.builder.start(NodeKind::Error, start);
        self.cursor.advance();
        while !self.at_unit_boundary()
            && !self.cursor.check_keyword(Keyword::Proof)
            && !(in_let && self.cursor.check_keyword(Keyword::In))
        {
            self.cursor.advance();
        }
        self.builder.finish(node, self.cursor.previous_end());
        tracing::trace!(start, end = self.cursor.previous_end(), "recovered");
    }

    /// Skip a proof or an `ASSUME ... PROVE` block.
    ///
    /// Proofs carry no definitions this parser tracks. The skip ends at a
    /// module delimiter, or at a unit keyword or definition header that
    /// starts in column 1.
    pub(crate) fn skip_proof(&mut self) {
        loop {
            let tok = self.cursor.current();
            if matches!(
                tok.kind,
                TokenKind::Eof | TokenKind::ModuleEnd | TokenKind::Separator
            ) {
                return;
            }
            if tok.line_start
                && tok.column == 1
                && (is_unit_keyword(tok.kind) || self.def_shape().is_some())
            {
                return;
            }
            self.cursor.advance();
        }
    }

    fn skip_nested_module(&mut self) {
        let start = self.cursor.current().span.start;
        let mut depth = 0usize;
        loop {
            match self.cursor.current_kind() {
                TokenKind::Eof => break,
                TokenKind::Separator if self.cursor.peek_kind(1).is_keyword(Keyword::Module) => {
                    depth += 1;
                }
                TokenKind::ModuleEnd => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.cursor.advance();
                        break;
                    }
                }
                _ => {}
            }
            self.cursor.advance();
        }
        tracing::debug!(start, end = self.cursor.previous_end(), "skipped nested module");
    }

    /// Consume the current identifier as a declaring occurrence.
    pub(crate) fn decl(&mut self, kind: DeclKind) -> Option<NodeId> {
        let tok = self.cursor.current();
        if let TokenKind::Ident(name) = tok.kind {
            self.cursor.advance();
            Some(self.builder.leaf(NodeKind::Decl(kind), name, tok.span))
        } else {
            self.error_expected("identifier");
            None
        }
    }

    /// Intern the source text of a token (operator symbols).
    pub(crate) fn symbol_name(&self, span: Span) -> Name {
        let text = self.source.get(span.to_range()).unwrap_or_default();
        self.interner.intern(text)
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> bool {
        if self.cursor.eat(kind) {
            true
        } else {
            self.error_expected(kind.describe());
            false
        }
    }

    pub(crate) fn expect_keyword(&mut self, kw: Keyword) -> bool {
        self.expect(TokenKind::Keyword(kw))
    }

    /// Consume the closer of a delimiter opened at `open_span`.
    pub(crate) fn expect_close(&mut self, close: TokenKind, open: TokenKind, open_span: Span) {
        if !self.cursor.eat(close) {
            self.errors.push(ParseError::new(
                ParseErrorKind::Unclosed { open },
                open_span,
            ));
        }
    }

    pub(crate) fn error_expected(&mut self, expected: &'static str) {
        let tok = self.cursor.current();
        self.errors
            .push(ParseError::expected(expected, tok.kind, tok.span));
    }

    /// Skip a balanced `( ... )` (arity markers like `Op(_, _)`).
    pub(crate) fn skip_parens(&mut self) {
        let open = self.cursor.current();
        if let Some(after) = self.cursor.matching_close(0) {
            self.cursor.set_position(self.cursor.position() + after);
        } else {
            self.cursor.advance();
            self.errors.push(ParseError::new(
                ParseErrorKind::Unclosed { open: open.kind },
                open.span,
            ));
        }
    }
}

/// Keywords that can only start a module-level unit.
pub(crate) fn is_unit_keyword(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Keyword(
            Keyword::Module
                | Keyword::Extends
                | Keyword::Variable
                | Keyword::Constant
                | Keyword::Recursive
                | Keyword::Local
                | Keyword::Instance
                | Keyword::Assume
                | Keyword::Theorem
        )
    )
}
