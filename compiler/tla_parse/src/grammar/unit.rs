//! Definitions and module-level declarations.

use super::{DefShape, ExprCtx, Parser};
use crate::error::{ParseError, ParseErrorKind};
use tla_ir::{DeclKind, NodeFlags, NodeId, NodeKind};
use tla_lexer::{Keyword, TokenKind};

impl Parser<'_> {
    /// `EXTENDS M1, M2, ...`
    pub(crate) fn extends(&mut self) {
        let kw = self.cursor.advance();
        let node = self.builder.start(NodeKind::Extends, kw.span.start);
        self.module_refs(node);
        self.builder.finish(node, self.cursor.previous_end());
    }

    fn module_refs(&mut self, node: NodeId) {
        let mut after_comma = false;
        loop {
            let tok = self.cursor.current();
            // `EXTENDS A,` followed by the next definition
            let name = match tok.kind {
                TokenKind::Ident(name) if self.def_shape().is_none() => name,
                _ => {
                    self.error_expected("module name");
                    if after_comma {
                        self.builder.add_flags(node, NodeFlags::TRAILING_COMMA);
                    }
                    return;
                }
            };
            self.cursor.advance();
            self.builder.leaf(NodeKind::ModuleRef, name, tok.span);
            if !self.cursor.eat(TokenKind::Comma) {
                return;
            }
            after_comma = true;
        }
    }

    /// `VARIABLES x, y` / `CONSTANTS N, Op(_, _)`
    pub(crate) fn declarations(&mut self, kind: NodeKind, decl_kind: DeclKind) {
        let kw = self.cursor.advance();
        let node = self.builder.start(kind, kw.span.start);
        loop {
            match self.cursor.current_kind() {
                TokenKind::Ident(_) => {
                    self.decl(decl_kind);
                    if self.cursor.check(TokenKind::LParen) {
                        self.skip_parens();
                    } else if self.cursor.check(TokenKind::Op) {
                        // `c ^+`, `c + _`
                        self.cursor.advance();
                        self.cursor.eat(TokenKind::Underscore);
                    }
                }
                // `_ + _` / `-. _`
                TokenKind::Underscore | TokenKind::Op => {
                    while matches!(
                        self.cursor.current_kind(),
                        TokenKind::Underscore | TokenKind::Op
                    ) {
                        self.cursor.advance();
                    }
                }
                _ => {
                    self.error_expected("identifier");
                    break;
                }
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.builder.finish(node, self.cursor.previous_end());
    }

    /// `RECURSIVE Op(_), F(_, _)`
    ///
    /// The names are recorded as references so that they resolve to (and
    /// rename with) the definitions they announce.
    pub(crate) fn recursive(&mut self) {
        let kw = self.cursor.advance();
        let node = self.builder.start(NodeKind::Recursive, kw.span.start);
        loop {
            let tok = self.cursor.current();
            let TokenKind::Ident(name) = tok.kind else {
                self.error_expected("operator name");
                break;
            };
            self.cursor.advance();
            self.builder.leaf(NodeKind::Ident, name, tok.span);
            if self.cursor.check(TokenKind::LParen) {
                self.skip_parens();
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.builder.finish(node, self.cursor.previous_end());
    }

    /// `LOCAL <definition>` / `LOCAL INSTANCE M`
    pub(crate) fn local(&mut self) {
        let kw = self.cursor.advance();
        if self.cursor.check_keyword(Keyword::Instance) {
            self.instance(NodeFlags::LOCAL, kw.span.start);
        } else if let Some(shape) = self.def_shape() {
            self.definition(shape, NodeFlags::LOCAL, kw.span.start, ExprCtx::default());
        } else {
            self.error_expected("definition or INSTANCE after LOCAL");
            if !self.at_unit_boundary() {
                self.recover(false);
            }
        }
    }

    /// `INSTANCE M WITH a <- e, b <- f`
    pub(crate) fn instance(&mut self, flags: NodeFlags, start: u32) -> NodeId {
        let node = self.builder.start(NodeKind::Instance, start);
        self.builder.add_flags(node, flags);
        self.cursor.advance();

        let tok = self.cursor.current();
        if let TokenKind::Ident(name) = tok.kind {
            self.cursor.advance();
            self.builder.leaf(NodeKind::ModuleRef, name, tok.span);
        } else {
            self.error_expected("module name");
        }

        if self.cursor.eat(TokenKind::Keyword(Keyword::With)) {
            self.substitutions();
        }
        self.builder.finish(node, self.cursor.previous_end());
        node
    }

    fn substitutions(&mut self) {
        loop {
            let tok = self.cursor.current();
            let name = match tok.kind {
                TokenKind::Ident(name) => name,
                TokenKind::Op | TokenKind::And | TokenKind::Or => self.symbol_name(tok.span),
                _ => {
                    self.error_expected("substituted parameter");
                    return;
                }
            };
            let sub = self.builder.start(NodeKind::Substitution, tok.span.start);
            self.builder.set_name(sub, name);
            self.cursor.advance();
            if self.expect(TokenKind::LeftArrow) {
                self.expr(ExprCtx::default());
            }
            self.builder.finish(sub, self.cursor.previous_end());
            if !self.cursor.eat(TokenKind::Comma) {
                return;
            }
        }
    }

    /// `ASSUME [Name ==] e` / `THEOREM [Name ==] e [proof]`
    pub(crate) fn assertion(&mut self, kind: NodeKind) {
        let kw = self.cursor.advance();
        let node = self.builder.start(kind, kw.span.start);
        if matches!(self.cursor.current_kind(), TokenKind::Ident(_))
            && self.cursor.peek_kind(1) == TokenKind::DefEq
        {
            self.decl(DeclKind::Operator);
            self.cursor.advance();
        }
        if self.cursor.check_keyword(Keyword::Assume) {
            // ASSUME ... PROVE ...
            self.skip_proof();
        } else {
            self.expr(ExprCtx::default());
        }
        self.builder.finish(node, self.cursor.previous_end());

        if kind == NodeKind::Theorem && self.cursor.check_keyword(Keyword::Proof) {
            self.skip_proof();
        }
    }

    /// Operator, function or module-instance definition.
    ///
    /// The header shape was established by [`Parser::def_shape`]; `start`
    /// includes a preceding `LOCAL`.
    pub(crate) fn definition(
        &mut self,
        shape: DefShape,
        flags: NodeFlags,
        start: u32,
        ctx: ExprCtx,
    ) -> NodeId {
        let def = self.builder.start(NodeKind::OperatorDef, start);
        self.builder.add_flags(def, flags);

        let decl = match shape {
            DefShape::Plain => self.decl(DeclKind::Operator),
            DefShape::Params => {
                let decl = self.decl(DeclKind::Operator);
                self.params();
                decl
            }
            DefShape::Function => {
                self.builder.set_kind(def, NodeKind::FunctionDef);
                let decl = self.decl(DeclKind::Function);
                let open = self.cursor.advance();
                self.bounds();
                self.expect_close(TokenKind::RBracket, open.kind, open.span);
                decl
            }
            DefShape::Infix => {
                let op = self.cursor.peek(1);
                let decl = self.symbol_decl(op.span);
                let params = self.builder.start(NodeKind::Params, self.cursor.current().span.start);
                self.decl(DeclKind::Parameter);
                self.cursor.advance();
                self.decl(DeclKind::Parameter);
                self.builder.finish(params, self.cursor.previous_end());
                Some(decl)
            }
            DefShape::Prefix => {
                let op = self.cursor.advance();
                let decl = self.symbol_decl(op.span);
                let params = self.builder.start(NodeKind::Params, self.cursor.current().span.start);
                self.decl(DeclKind::Parameter);
                self.builder.finish(params, self.cursor.previous_end());
                Some(decl)
            }
            DefShape::Postfix => {
                let op = self.cursor.peek(1);
                let decl = self.symbol_decl(op.span);
                let params = self.builder.start(NodeKind::Params, self.cursor.current().span.start);
                self.decl(DeclKind::Parameter);
                self.builder.finish(params, self.cursor.previous_end());
                self.cursor.advance();
                Some(decl)
            }
        };

        self.expect(TokenKind::DefEq);

        if self.cursor.check_keyword(Keyword::Instance) && shape != DefShape::Function {
            self.builder.set_kind(def, NodeKind::ModuleDef);
            if let Some(decl) = decl {
                self.builder
                    .set_kind(decl, NodeKind::Decl(DeclKind::ModuleInstance));
            }
            let start = self.cursor.current().span.start;
            self.instance(NodeFlags::empty(), start);
        } else {
            self.expr(ctx);
        }

        self.builder.finish(def, self.cursor.previous_end());
        def
    }

    fn symbol_decl(&mut self, span: tla_ir::Span) -> NodeId {
        let name = self.symbol_name(span);
        self.builder
            .leaf(NodeKind::Decl(DeclKind::Operator), name, span)
    }

    /// `(a, F(_), _ + _)` after an operator name.
    fn params(&mut self) {
        let open = self.cursor.advance();
        let node = self.builder.start(NodeKind::Params, open.span.start);
        loop {
            match self.cursor.current_kind() {
                TokenKind::Ident(_) => {
                    self.decl(DeclKind::Parameter);
                    if self.cursor.check(TokenKind::LParen) {
                        self.skip_parens();
                    }
                }
                TokenKind::Underscore | TokenKind::Op => self.symbol_param(),
                _ => {
                    self.error_expected("parameter");
                    break;
                }
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        if !self.cursor.eat(TokenKind::RParen) {
            self.errors.push(ParseError::new(
                ParseErrorKind::Unclosed { open: open.kind },
                open.span,
            ));
        }
        self.builder.finish(node, self.cursor.previous_end());
    }

    /// Operator parameter written as `_ + _`, `-. _` or `_ ^+`.
    fn symbol_param(&mut self) {
        let start = self.cursor.position();
        let mut op_span = None;
        while matches!(
            self.cursor.current_kind(),
            TokenKind::Underscore | TokenKind::Op
        ) {
            let tok = self.cursor.advance();
            if tok.kind == TokenKind::Op {
                op_span = Some(tok.span);
            }
        }
        if let Some(span) = op_span {
            let name = self.symbol_name(span);
            self.builder
                .leaf(NodeKind::Decl(DeclKind::Parameter), name, span);
        }
        debug_assert!(self.cursor.position() > start);
    }
}
