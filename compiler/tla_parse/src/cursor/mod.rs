//! Token cursor for navigating the token stream.

use tla_lexer::{Keyword, Token, TokenKind, TokenList};

/// Position in a [`TokenList`].
///
/// Reading past the end keeps returning the trailing EOF token, so the
/// parser never has to bounds-check.
pub(crate) struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn set_position(&mut self, pos: usize) {
        debug_assert!(pos <= self.tokens.len(), "cursor position out of bounds");
        self.pos = pos;
    }

    #[inline]
    pub(crate) fn current(&self) -> Token {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Token `n` positions ahead of the current one.
    #[inline]
    pub(crate) fn peek(&self, n: usize) -> Token {
        self.tokens.get(self.pos + n)
    }

    #[inline]
    pub(crate) fn peek_kind(&self, n: usize) -> TokenKind {
        self.peek(n).kind
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub(crate) fn check_keyword(&self, kw: Keyword) -> bool {
        self.current_kind().is_keyword(kw)
    }

    /// Consume the current token; EOF is never consumed.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// End offset of the last consumed token (0 before the first).
    pub(crate) fn previous_end(&self) -> u32 {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens.get(prev).span.end,
            None => 0,
        }
    }

    /// Lookahead index just past the bracket closing the one at `open_at`.
    ///
    /// Both indices are relative to the current token. Returns `None` when
    /// the module ends first.
    pub(crate) fn matching_close(&self, open_at: usize) -> Option<usize> {
        let mut depth = 0usize;
        let mut n = open_at;
        loop {
            match self.peek_kind(n) {
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace | TokenKind::LTuple => {
                    depth += 1;
                }
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace | TokenKind::RTuple => {
                    depth = depth.checked_sub(1)?;
                    if depth == 0 {
                        return Some(n + 1);
                    }
                }
                TokenKind::Eof | TokenKind::ModuleEnd | TokenKind::Separator => return None,
                _ => {}
            }
            n += 1;
        }
    }
}
