//! Expression extent.
//!
//! Operator precedence is irrelevant to scoping, so expressions are read
//! as a flat run of atoms. What matters is where each expression ends,
//! because that bounds the scope of every binder it contains.

use super::{is_unit_keyword, Parser};
use crate::error::{ParseError, ParseErrorKind};
use crate::stack::ensure_sufficient_stack;
use tla_ir::NodeKind;
use tla_lexer::{Keyword, Token, TokenKind};

/// Layout context inherited by nested expressions.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ExprCtx {
    /// Column of the innermost enclosing junction bullet (0 for none).
    /// A token starting a line at or left of it ends the expression.
    pub(crate) bullet_column: u32,
}

impl Parser<'_> {
    /// Parse one expression into an `Expr` node.
    pub(crate) fn expr(&mut self, ctx: ExprCtx) {
        ensure_sufficient_stack(|| self.expr_inner(ctx));
    }

    fn expr_inner(&mut self, ctx: ExprCtx) {
        let first = self.cursor.current();
        let start_offset = if self.ends_expr(ctx, true) {
            self.cursor.previous_end()
        } else {
            first.span.start
        };
        let node = self.builder.start(NodeKind::Expr, start_offset);
        let start = self.cursor.position();
        let mut operand = true;
        while !self.ends_expr(ctx, operand) {
            operand = self.atom(ctx, operand);
        }
        if self.cursor.position() == start {
            self.errors.push(ParseError::new(
                ParseErrorKind::ExpectedExpression { found: first.kind },
                first.span,
            ));
        }
        self.builder.finish(node, self.cursor.previous_end());
    }

    /// Whether the current token ends the expression being read.
    ///
    /// `operand` is set while an operand is expected, which is when `[]`
    /// reads as the temporal "always" rather than a CASE separator.
    pub(crate) fn ends_expr(&self, ctx: ExprCtx, operand: bool) -> bool {
        let tok = self.cursor.current();
        if ctx.bullet_column > 0 && tok.line_start && tok.column <= ctx.bullet_column {
            return true;
        }
        match tok.kind {
            TokenKind::Eof
            | TokenKind::ModuleEnd
            | TokenKind::Separator
            | TokenKind::RParen
            | TokenKind::RBracket
            | TokenKind::RBrace
            | TokenKind::RTuple
            | TokenKind::Comma
            | TokenKind::Colon
            | TokenKind::MapsTo
            | TokenKind::Arrow
            | TokenKind::LeftArrow
            | TokenKind::DefEq => true,
            TokenKind::Keyword(
                Keyword::In
                | Keyword::Then
                | Keyword::Else
                | Keyword::Other
                | Keyword::With
                | Keyword::Proof,
            ) => true,
            TokenKind::Keyword(_) => is_unit_keyword(tok.kind),
            TokenKind::Box => !operand,
            TokenKind::Ident(_) | TokenKind::Op => self.def_shape().is_some(),
            _ => false,
        }
    }

    /// Consume one atom; returns whether an operand is expected next.
    fn atom(&mut self, ctx: ExprCtx, operand: bool) -> bool {
        match self.cursor.current_kind() {
            TokenKind::And | TokenKind::Or if operand => {
                self.junction_list();
                false
            }
            TokenKind::Ident(_) => {
                self.reference();
                false
            }
            TokenKind::Forall
            | TokenKind::Exists
            | TokenKind::TemporalForall
            | TokenKind::TemporalExists => {
                self.quantifier(ctx);
                false
            }
            TokenKind::Keyword(Keyword::Choose) => {
                self.choose(ctx);
                false
            }
            TokenKind::Keyword(Keyword::Let) => {
                self.let_in(ctx);
                false
            }
            TokenKind::Keyword(Keyword::Lambda) => {
                self.lambda(ctx);
                false
            }
            TokenKind::Keyword(Keyword::If) => {
                self.if_then_else(ctx);
                false
            }
            TokenKind::Keyword(Keyword::Case) => {
                self.case(ctx);
                false
            }
            TokenKind::LBrace => {
                self.braces();
                false
            }
            TokenKind::LBracket => {
                self.brackets();
                false
            }
            TokenKind::LParen => {
                self.group(TokenKind::RParen);
                false
            }
            TokenKind::LTuple => {
                self.group(TokenKind::RTuple);
                false
            }
            TokenKind::Dot => {
                // `r.field`: the field name is not a reference
                self.cursor.advance();
                if matches!(self.cursor.current_kind(), TokenKind::Ident(_)) {
                    self.cursor.advance();
                }
                false
            }
            TokenKind::Number
            | TokenKind::String
            | TokenKind::Prime
            | TokenKind::Keyword(Keyword::Builtin) => {
                self.cursor.advance();
                false
            }
            _ => {
                self.cursor.advance();
                true
            }
        }
    }

    /// Identifier use, possibly qualified: `x`, `P!Q!Op`, `P(a)!Op`.
    ///
    /// The node is named after the last segment; each preceding segment
    /// becomes a `Qualifier` child.
    fn reference(&mut self) {
        let first = self.cursor.advance();
        let TokenKind::Ident(mut name) = first.kind else {
            return;
        };
        let node = self.builder.start(NodeKind::Ident, first.span.start);
        let mut name_span = first.span;
        loop {
            if self.cursor.check(TokenKind::LParen) && self.instance_args_ahead() {
                self.group(TokenKind::RParen);
            }
            if self.cursor.check(TokenKind::Bang) {
                if let TokenKind::Ident(next) = self.cursor.peek_kind(1) {
                    self.builder.leaf(NodeKind::Qualifier, name, name_span);
                    self.cursor.advance();
                    let tok = self.cursor.advance();
                    name = next;
                    name_span = tok.span;
                    continue;
                }
            }
            break;
        }
        self.builder.set_name(node, name);
        self.builder.finish(node, name_span.end);
    }

    /// `(args)!` after a name: arguments of a parameterized instance.
    fn instance_args_ahead(&self) -> bool {
        self.cursor.matching_close(0).is_some_and(|after| {
            self.cursor.peek_kind(after) == TokenKind::Bang
                && matches!(self.cursor.peek_kind(after + 1), TokenKind::Ident(_))
        })
    }

    /// `/\ a /\ b` or `\/ a \/ b` with aligned bullets.
    fn junction_list(&mut self) {
        let bullet = self.cursor.current();
        let ctx = ExprCtx {
            bullet_column: bullet.column,
        };
        loop {
            self.cursor.advance();
            self.expr(ctx);
            let next = self.cursor.current();
            if !(next.kind == bullet.kind && next.column == bullet.column && next.line_start) {
                break;
            }
        }
    }

    /// Delimited group: `( )`, `<< >>` or a non-constructor `[ ]`.
    ///
    /// Separators inside are consumed without structure; record field
    /// names (`[a |-> 1]`, `[a : S]`) are skipped.
    pub(crate) fn group(&mut self, close: TokenKind) {
        let open = self.cursor.advance();
        loop {
            let tok = self.cursor.current();
            if tok.kind == close {
                self.cursor.advance();
                return;
            }
            match tok.kind {
                TokenKind::Comma
                | TokenKind::Colon
                | TokenKind::MapsTo
                | TokenKind::Arrow
                | TokenKind::LeftArrow => {
                    self.cursor.advance();
                    continue;
                }
                TokenKind::Ident(_)
                    if close == TokenKind::RBracket
                        && matches!(
                            self.cursor.peek_kind(1),
                            TokenKind::MapsTo | TokenKind::Colon
                        ) =>
                {
                    self.cursor.advance();
                    continue;
                }
                _ => {}
            }
            if self.at_group_break(tok) {
                self.errors.push(ParseError::new(
                    ParseErrorKind::Unclosed { open: open.kind },
                    open.span,
                ));
                return;
            }
            if self.ends_expr(ExprCtx::default(), true) {
                self.error_expected(close.describe());
                self.cursor.advance();
                continue;
            }
            self.expr(ExprCtx::default());
        }
    }

    fn at_group_break(&self, tok: Token) -> bool {
        matches!(
            tok.kind,
            TokenKind::Eof
                | TokenKind::ModuleEnd
                | TokenKind::Separator
                | TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::RBrace
                | TokenKind::RTuple
        ) || is_unit_keyword(tok.kind)
            || self.def_shape().is_some()
    }

    /// `LET defs IN body`
    fn let_in(&mut self, ctx: ExprCtx) {
        let kw = self.cursor.advance();
        let node = self.builder.start(NodeKind::Let, kw.span.start);
        loop {
            let tok = self.cursor.current();
            if tok.kind.is_keyword(Keyword::In) {
                break;
            }
            if tok.kind.is_keyword(Keyword::Recursive) {
                self.recursive();
                continue;
            }
            if let Some(shape) = self.def_shape() {
                self.definition(shape, tla_ir::NodeFlags::empty(), tok.span.start, ctx);
                continue;
            }
            if self.at_unit_boundary() {
                break;
            }
            self.errors.push(ParseError::new(
                ParseErrorKind::ExpectedDefinition { found: tok.kind },
                tok.span,
            ));
            self.recover(true);
        }
        if self.expect_keyword(Keyword::In) {
            self.expr(ctx);
        }
        self.builder.finish(node, self.cursor.previous_end());
    }

    /// `IF c THEN a ELSE b`
    fn if_then_else(&mut self, ctx: ExprCtx) {
        self.cursor.advance();
        self.expr(ctx);
        if self.expect_keyword(Keyword::Then) {
            self.expr(ctx);
            if self.expect_keyword(Keyword::Else) {
                self.expr(ctx);
            }
        }
    }

    /// `CASE p -> e [] q -> f [] OTHER -> g`
    fn case(&mut self, ctx: ExprCtx) {
        self.cursor.advance();
        loop {
            if !self.cursor.eat(TokenKind::Keyword(Keyword::Other)) {
                self.expr(ctx);
            }
            if !self.expect(TokenKind::Arrow) {
                return;
            }
            self.expr(ctx);
            if !self.cursor.eat(TokenKind::Box) {
                return;
            }
        }
    }
}
