//! Lexer for TLA+ modules.
//!
//! Two layers: logos produces raw tokens, then a cooking pass drops
//! comments and newlines, records each token's column and whether it opens
//! its line, interns identifiers and resolves reserved words. The output
//! always ends with an EOF token, even for empty or malformed input.

mod keywords;
mod lex_error;
mod raw_token;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use token::{Keyword, Token, TokenKind, TokenList};

use logos::Logos;
use raw_token::RawToken;
use tla_ir::{Span, StringInterner};

/// Tokens plus the errors met while producing them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

/// Layout state of the cooking pass.
struct Cooker<'a> {
    interner: &'a StringInterner,
    output: LexOutput,
    /// Byte offset where the current line begins.
    line_start: usize,
    /// No token has been emitted on the current line yet.
    fresh_line: bool,
}

impl Cooker<'_> {
    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        let column = to_u32(start - self.line_start) + 1;
        let span = Span::new(to_u32(start), to_u32(end));
        self.output
            .tokens
            .push(Token::new(kind, span, column, self.fresh_line));
        self.fresh_line = false;
    }

    /// `]_vars` and `>>_vars` subscripts: the `_` directly follows a closer.
    fn follows_closer(&self, start: usize) -> bool {
        self.output.tokens.as_slice().last().is_some_and(|last| {
            matches!(last.kind, TokenKind::RBracket | TokenKind::RTuple)
                && last.span.end as usize == start
        })
    }

    fn newline(&mut self, after: usize) {
        self.line_start = after;
        self.fresh_line = true;
    }

    fn ident(&mut self, slice: &str, start: usize, end: usize) {
        if slice.len() > 1 && slice.starts_with('_') && self.follows_closer(start) {
            self.push(TokenKind::Underscore, start, start + 1);
            self.ident(&slice[1..], start + 1, end);
            return;
        }
        if let Some(subscript) = keywords::fairness_prefix(slice) {
            let split = start + 3;
            self.push(TokenKind::Keyword(Keyword::Fairness), start, split);
            self.ident(subscript, split, end);
            return;
        }
        let kind = match keywords::lookup(slice) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident(self.interner.intern(slice)),
        };
        self.push(kind, start, end);
    }
}

/// Lex a TLA+ source text.
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut cooker = Cooker {
        interner,
        output: LexOutput {
            tokens: TokenList::with_capacity(source.len()),
            errors: Vec::new(),
        },
        line_start: 0,
        fresh_line: true,
    };
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let range = logos.span();
        let slice = logos.slice();
        let (start, end) = (range.start, range.end);

        let kind = match result {
            Ok(RawToken::Newline) => {
                cooker.newline(end);
                continue;
            }
            Ok(RawToken::LineComment) => continue,
            Ok(RawToken::BlockComment) => {
                if let Some(nl) = memchr::memrchr(b'\n', slice.as_bytes()) {
                    cooker.line_start = start + nl + 1;
                }
                continue;
            }
            Ok(RawToken::Ident) => {
                cooker.ident(slice, start, end);
                continue;
            }
            Ok(raw) => convert_token(raw, slice),
            Err(()) => {
                let span = Span::new(to_u32(start), to_u32(end));
                cooker.output.errors.push(LexError::from_slice(span, slice));
                TokenKind::Error
            }
        };
        cooker.push(kind, start, end);
    }

    let eof = source.len();
    let column = to_u32(eof - cooker.line_start) + 1;
    let fresh_line = cooker.fresh_line;
    cooker.output.tokens.push(Token::new(
        TokenKind::Eof,
        Span::point(to_u32(eof)),
        column,
        fresh_line,
    ));
    cooker.output
}

fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Separator => TokenKind::Separator,
        RawToken::ModuleEnd => TokenKind::ModuleEnd,
        RawToken::DefEq => TokenKind::DefEq,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LTuple => TokenKind::LTuple,
        RawToken::RTuple => TokenKind::RTuple,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Bang => TokenKind::Bang,
        RawToken::LeftArrow => TokenKind::LeftArrow,
        RawToken::MapsTo => TokenKind::MapsTo,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Box => TokenKind::Box,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::Underscore => TokenKind::Underscore,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Prime => TokenKind::Prime,
        RawToken::Op => TokenKind::Op,
        RawToken::Number => TokenKind::Number,
        RawToken::String => TokenKind::String,
        RawToken::BackslashWord => backslash_word(slice),
        // Trivia and identifiers are handled by the caller.
        RawToken::Newline
        | RawToken::LineComment
        | RawToken::BlockComment
        | RawToken::Ident => TokenKind::Error,
    }
}

fn backslash_word(slice: &str) -> TokenKind {
    match slice {
        "\\A" | "\\forall" => TokenKind::Forall,
        "\\E" | "\\exists" => TokenKind::Exists,
        "\\AA" => TokenKind::TemporalForall,
        "\\EE" => TokenKind::TemporalExists,
        "\\in" => TokenKind::ElementOf,
        "\\land" => TokenKind::And,
        "\\lor" => TokenKind::Or,
        _ => TokenKind::Op,
    }
}

#[inline]
fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| panic!("source file exceeds {} bytes", u32::MAX))
}

#[cfg(test)]
mod tests;
