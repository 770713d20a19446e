//! Raw token definitions driven by logos.
//!
//! Identifiers come out as one `Ident` class; reserved words are split off
//! by [`crate::keywords::lookup`] when the token is cooked. Backslash
//! operators (`\A`, `\in`, `\cup`, ...) are likewise one `BackslashWord`
//! class.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+")]
pub(crate) enum RawToken {
    #[token("\n")]
    Newline,
    #[regex(r"\\\*[^\n]*")]
    LineComment,
    #[token("(*", block_comment)]
    BlockComment,

    // Module delimiters
    #[regex(r"-{4,}")]
    Separator,
    #[regex(r"={4,}")]
    ModuleEnd,

    #[token("==")]
    DefEq,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("<<")]
    LTuple,
    #[token(">>")]
    RTuple,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("!")]
    Bang,
    #[token("<-")]
    LeftArrow,
    #[token("|->")]
    MapsTo,
    #[token("->")]
    Arrow,
    #[token("[]")]
    Box,
    #[token(r"/\")]
    And,
    #[token(r"\/")]
    Or,
    #[token("_")]
    Underscore,
    #[token(".")]
    Dot,
    #[token("'")]
    Prime,

    // Symbolic operators the scope engine treats as opaque
    #[token("=")]
    #[token("#")]
    #[token("/=")]
    #[token("<")]
    #[token(">")]
    #[token("<=")]
    #[token("=<")]
    #[token(">=")]
    #[token("+")]
    #[token("-")]
    #[token("-.")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("^")]
    #[token("^+")]
    #[token("^*")]
    #[token("^#")]
    #[token("..")]
    #[token("...")]
    #[token("=>")]
    #[token("<=>")]
    #[token("<>")]
    #[token("~")]
    #[token("~>")]
    #[token("-+->")]
    #[token("@")]
    #[token("@@")]
    #[token(":=")]
    #[token("::=")]
    #[token("::")]
    #[token(":>")]
    #[token("++")]
    #[token("**")]
    #[token("//")]
    #[token("^^")]
    #[token("|-")]
    #[token("-|")]
    #[token("|=")]
    #[token("=|")]
    #[token("|")]
    #[token("||")]
    #[token("&")]
    #[token("&&")]
    #[token("$")]
    #[token("$$")]
    #[token("?")]
    #[token("??")]
    #[token("%%")]
    #[token("##")]
    Op,

    #[regex(r"\\[a-zA-Z]+")]
    BackslashWord,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r"[A-Za-z0-9_]*[A-Za-z][A-Za-z0-9_]*")]
    Ident,
}

/// Skip a `(* ... *)` comment; TLA+ block comments nest.
///
/// Returns `false` (an error token) if the input ends inside the comment.
fn block_comment(lex: &mut logos::Lexer<'_, RawToken>) -> bool {
    let rest = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut pos = 0;
    while let Some(found) = memchr::memchr2(b'(', b'*', &rest[pos..]) {
        let at = pos + found;
        match (rest[at], rest.get(at + 1)) {
            (b'(', Some(b'*')) => {
                depth += 1;
                pos = at + 2;
            }
            (b'*', Some(b')')) => {
                depth -= 1;
                pos = at + 2;
                if depth == 0 {
                    lex.bump(pos);
                    return true;
                }
            }
            _ => pos = at + 1,
        }
    }
    lex.bump(rest.len());
    false
}
