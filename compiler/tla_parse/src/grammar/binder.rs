//! Binding constructs.
//!
//! Every binder has the same layout: `Bound` children holding the bound
//! names and their domains, plus a body expression. The body is the only
//! place the bound names are visible.

use super::{ExprCtx, Parser};
use tla_ir::{DeclKind, NodeFlags, NodeKind};
use tla_lexer::TokenKind;

impl Parser<'_> {
    /// `\A x \in S : P`, `\E x, y : P`, `\AA x : P`, `\EE x : P`
    pub(crate) fn quantifier(&mut self, ctx: ExprCtx) {
        let tok = self.cursor.advance();
        let node = self.builder.start(NodeKind::Quantifier, tok.span.start);
        let flags = match tok.kind {
            TokenKind::Exists => NodeFlags::EXISTENTIAL,
            TokenKind::TemporalForall => NodeFlags::TEMPORAL,
            TokenKind::TemporalExists => NodeFlags::EXISTENTIAL | NodeFlags::TEMPORAL,
            _ => NodeFlags::empty(),
        };
        self.builder.add_flags(node, flags);
        self.bounds();
        if self.expect(TokenKind::Colon) {
            self.expr(ctx);
        }
        self.builder.finish(node, self.cursor.previous_end());
    }

    /// `CHOOSE x \in S : P`
    pub(crate) fn choose(&mut self, ctx: ExprCtx) {
        let kw = self.cursor.advance();
        let node = self.builder.start(NodeKind::Choose, kw.span.start);
        self.bound();
        if self.expect(TokenKind::Colon) {
            self.expr(ctx);
        }
        self.builder.finish(node, self.cursor.previous_end());
    }

    /// `LAMBDA x, y : body`
    pub(crate) fn lambda(&mut self, ctx: ExprCtx) {
        let kw = self.cursor.advance();
        let node = self.builder.start(NodeKind::Lambda, kw.span.start);
        let params = self
            .builder
            .start(NodeKind::Params, self.cursor.current().span.start);
        loop {
            if self.decl(DeclKind::Parameter).is_none() || !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.builder.finish(params, self.cursor.previous_end());
        if self.expect(TokenKind::Colon) {
            self.expr(ctx);
        }
        self.builder.finish(node, self.cursor.previous_end());
    }

    /// `{...}`: set filter, set map, or enumeration.
    pub(crate) fn braces(&mut self) {
        let open = self.cursor.advance();
        let node = self.builder.start(NodeKind::Expr, open.span.start);
        if !self.cursor.check(TokenKind::RBrace) {
            if self.set_filter_ahead() {
                // {x \in S : P}
                self.builder.set_kind(node, NodeKind::SetFilter);
                self.bound();
                if self.expect(TokenKind::Colon) {
                    self.expr(ExprCtx::default());
                }
            } else {
                self.expr(ExprCtx::default());
                if self.cursor.eat(TokenKind::Colon) {
                    // {e : x \in S}
                    self.builder.set_kind(node, NodeKind::SetMap);
                    self.bounds();
                } else {
                    while self.cursor.eat(TokenKind::Comma) {
                        self.expr(ExprCtx::default());
                    }
                }
            }
        }
        self.expect_close(TokenKind::RBrace, open.kind, open.span);
        self.builder.finish(node, self.cursor.previous_end());
    }

    /// `[x \in S |-> e]` or any other bracket form.
    pub(crate) fn brackets(&mut self) {
        if !self.function_ctor_ahead() {
            self.group(TokenKind::RBracket);
            return;
        }
        let open = self.cursor.advance();
        let node = self.builder.start(NodeKind::FunctionCtor, open.span.start);
        self.bounds();
        if self.expect(TokenKind::MapsTo) {
            self.expr(ExprCtx::default());
        }
        self.expect_close(TokenKind::RBracket, open.kind, open.span);
        self.builder.finish(node, self.cursor.previous_end());
    }

    /// Comma-separated bounds: `x, y \in S, z \in T` is two `Bound`s.
    pub(crate) fn bounds(&mut self) {
        loop {
            self.bound();
            let continues = self.cursor.check(TokenKind::Comma)
                && matches!(
                    self.cursor.peek_kind(1),
                    TokenKind::Ident(_) | TokenKind::LTuple
                );
            if !continues {
                break;
            }
            self.cursor.advance();
        }
    }

    /// One `Bound`: names (or a tuple of names) and an optional domain.
    fn bound(&mut self) {
        let node = self
            .builder
            .start(NodeKind::Bound, self.cursor.current().span.start);
        if self.cursor.check(TokenKind::LTuple) {
            let open = self.cursor.advance();
            while self.decl(DeclKind::BoundName).is_some() && self.cursor.eat(TokenKind::Comma) {}
            self.expect_close(TokenKind::RTuple, open.kind, open.span);
        } else {
            while self.decl(DeclKind::BoundName).is_some()
                && self.cursor.check(TokenKind::Comma)
                && matches!(self.cursor.peek_kind(1), TokenKind::Ident(_))
            {
                self.cursor.advance();
            }
        }
        if self.cursor.eat(TokenKind::ElementOf) {
            self.expr(ExprCtx::default());
        }
        self.builder.finish(node, self.cursor.previous_end());
    }

    /// `{` followed by `x \in` or `<<x, y>> \in`, with a `:` before `}`.
    fn set_filter_ahead(&self) -> bool {
        let c = &self.cursor;
        let after_binder = match c.peek_kind(1) {
            TokenKind::Ident(_) => 2,
            TokenKind::LTuple => match c.matching_close(1) {
                Some(after) => after,
                None => return false,
            },
            _ => return false,
        };
        c.peek_kind(after_binder) == TokenKind::ElementOf
            && self.depth_one_before_close(TokenKind::Colon)
    }

    /// `[` followed by a binder whose `\in` precedes the first `|->`.
    fn function_ctor_ahead(&self) -> bool {
        if !matches!(
            self.cursor.peek_kind(1),
            TokenKind::Ident(_) | TokenKind::LTuple
        ) {
            return false;
        }
        let mut depth = 0usize;
        let mut seen_in = false;
        let mut n = 0;
        loop {
            match self.cursor.peek_kind(n) {
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace | TokenKind::LTuple => {
                    depth += 1;
                }
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace | TokenKind::RTuple => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return false;
                    }
                }
                TokenKind::ElementOf if depth == 1 => seen_in = true,
                TokenKind::MapsTo if depth == 1 => return seen_in,
                TokenKind::Eof | TokenKind::ModuleEnd | TokenKind::Separator => return false,
                _ => {}
            }
            n += 1;
        }
    }

    /// Whether `kind` occurs directly inside the delimiter at the cursor.
    fn depth_one_before_close(&self, kind: TokenKind) -> bool {
        let mut depth = 0usize;
        let mut n = 0;
        loop {
            let next = self.cursor.peek_kind(n);
            match next {
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace | TokenKind::LTuple => {
                    depth += 1;
                }
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace | TokenKind::RTuple => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return false;
                    }
                }
                TokenKind::Eof | TokenKind::ModuleEnd | TokenKind::Separator => return false,
                _ if next == kind && depth == 1 => return true,
                _ => {}
            }
            n += 1;
        }
    }
}
