//! Cooked tokens handed to the parser.

use std::fmt;
use tla_ir::{Name, Span};

/// A lexed token with layout information.
///
/// `column` is the 1-based byte column of the token start and `line_start`
/// is set when no other token precedes it on its line. The parser uses both
/// to delimit junction lists and to find the start of the next unit.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub column: u32,
    pub line_start: bool,
}

tla_ir::static_assert_size!(Token, 24);

impl Token {
    pub fn new(kind: TokenKind, span: Span, column: u32, line_start: bool) -> Self {
        Token {
            kind,
            span,
            column,
            line_start,
        }
    }
}

/// Token kinds.
///
/// Only tokens that carry scoping structure are distinguished. All other
/// operators collapse to [`TokenKind::Op`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Ident(Name),
    Number,
    String,
    Keyword(Keyword),

    /// `----` (four or more dashes).
    Separator,
    /// `====` (four or more equals signs).
    ModuleEnd,
    /// `==`
    DefEq,

    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    /// `<<`
    LTuple,
    /// `>>`
    RTuple,
    Comma,
    Colon,
    Bang,
    /// `<-`
    LeftArrow,
    /// `|->`
    MapsTo,
    /// `->`
    Arrow,
    /// `[]`
    Box,
    /// `/\` or `\land`
    And,
    /// `\/` or `\lor`
    Or,
    /// `\in`
    ElementOf,
    /// `\A` / `\forall`
    Forall,
    /// `\E` / `\exists`
    Exists,
    /// `\AA`
    TemporalForall,
    /// `\EE`
    TemporalExists,
    Underscore,
    /// `.` (record field access).
    Dot,
    /// `'` (priming).
    Prime,

    /// Any other operator symbol.
    Op,
    Error,
    Eof,
}

impl TokenKind {
    /// Short description for parse errors.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Keyword(kw) => kw.as_str(),
            TokenKind::Separator => "`----`",
            TokenKind::ModuleEnd => "`====`",
            TokenKind::DefEq => "`==`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LTuple => "`<<`",
            TokenKind::RTuple => "`>>`",
            TokenKind::Comma => "`,`",
            TokenKind::Colon => "`:`",
            TokenKind::Bang => "`!`",
            TokenKind::LeftArrow => "`<-`",
            TokenKind::MapsTo => "`|->`",
            TokenKind::Arrow => "`->`",
            TokenKind::Box => "`[]`",
            TokenKind::And => "`/\\`",
            TokenKind::Or => "`\\/`",
            TokenKind::ElementOf => "`\\in`",
            TokenKind::Forall => "`\\A`",
            TokenKind::Exists => "`\\E`",
            TokenKind::TemporalForall => "`\\AA`",
            TokenKind::TemporalExists => "`\\EE`",
            TokenKind::Underscore => "`_`",
            TokenKind::Dot => "`.`",
            TokenKind::Prime => "`'`",
            TokenKind::Op => "operator",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
        }
    }

    #[inline]
    pub fn is_keyword(self, kw: Keyword) -> bool {
        self == TokenKind::Keyword(kw)
    }

    #[inline]
    pub fn ident(self) -> Option<Name> {
        match self {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Reserved words.
///
/// Synonyms share one variant (`VARIABLE`/`VARIABLES`,
/// `THEOREM`/`LEMMA`/...). Proof-language words are grouped under
/// [`Keyword::Proof`] since proofs carry no definitions the engine tracks.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Keyword {
    Module,
    Extends,
    Variable,
    Constant,
    Recursive,
    Local,
    Instance,
    With,
    Let,
    In,
    Lambda,
    Choose,
    Assume,
    Theorem,
    If,
    Then,
    Else,
    Case,
    Other,
    Except,
    Domain,
    Subset,
    Union,
    Enabled,
    Unchanged,
    /// `WF_` / `SF_` prefix.
    Fairness,
    /// `TRUE`, `FALSE`, `BOOLEAN`, `STRING`.
    Builtin,
    Proof,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Module => "MODULE",
            Keyword::Extends => "EXTENDS",
            Keyword::Variable => "VARIABLE",
            Keyword::Constant => "CONSTANT",
            Keyword::Recursive => "RECURSIVE",
            Keyword::Local => "LOCAL",
            Keyword::Instance => "INSTANCE",
            Keyword::With => "WITH",
            Keyword::Let => "LET",
            Keyword::In => "IN",
            Keyword::Lambda => "LAMBDA",
            Keyword::Choose => "CHOOSE",
            Keyword::Assume => "ASSUME",
            Keyword::Theorem => "THEOREM",
            Keyword::If => "IF",
            Keyword::Then => "THEN",
            Keyword::Else => "ELSE",
            Keyword::Case => "CASE",
            Keyword::Other => "OTHER",
            Keyword::Except => "EXCEPT",
            Keyword::Domain => "DOMAIN",
            Keyword::Subset => "SUBSET",
            Keyword::Union => "UNION",
            Keyword::Enabled => "ENABLED",
            Keyword::Unchanged => "UNCHANGED",
            Keyword::Fairness => "WF_/SF_",
            Keyword::Builtin => "built-in constant",
            Keyword::Proof => "proof keyword",
        }
    }
}

/// Tokens of one source file, always terminated by [`TokenKind::Eof`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate based on source length (~1 token per 4 bytes).
    pub fn with_capacity(source_len: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(source_len / 4 + 1),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Token at `index`, or the trailing EOF when past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Token {
        match self.tokens.get(index) {
            Some(&token) => token,
            None => self.eof(),
        }
    }

    fn eof(&self) -> Token {
        self.tokens.last().copied().map_or_else(
            || Token::new(TokenKind::Eof, Span::point(0), 1, true),
            |last| Token::new(TokenKind::Eof, Span::point(last.span.end), 1, true),
        )
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Token kinds, for tests and debugging.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}
