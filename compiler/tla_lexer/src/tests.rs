use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str, interner: &StringInterner) -> Vec<TokenKind> {
    lex(source, interner).tokens.kinds()
}

#[test]
fn test_lex_module_header() {
    let interner = StringInterner::new();
    let m = interner.intern("M");
    assert_eq!(
        kinds("---- MODULE M ----\n====", &interner),
        vec![
            TokenKind::Separator,
            TokenKind::Keyword(Keyword::Module),
            TokenKind::Ident(m),
            TokenKind::Separator,
            TokenKind::ModuleEnd,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_definition() {
    let interner = StringInterner::new();
    let op = interner.intern("Op");
    let x = interner.intern("x");
    assert_eq!(
        kinds(r"Op(x) == x /\ TRUE", &interner),
        vec![
            TokenKind::Ident(op),
            TokenKind::LParen,
            TokenKind::Ident(x),
            TokenKind::RParen,
            TokenKind::DefEq,
            TokenKind::Ident(x),
            TokenKind::And,
            TokenKind::Keyword(Keyword::Builtin),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_binders() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let s = interner.intern("S");
    assert_eq!(
        kinds(r"\A x \in S : \E y : [x |-> y]", &interner)[..6],
        [
            TokenKind::Forall,
            TokenKind::Ident(x),
            TokenKind::ElementOf,
            TokenKind::Ident(s),
            TokenKind::Colon,
            TokenKind::Exists,
        ]
    );
    assert!(kinds(r"[x |-> 1]", &interner).contains(&TokenKind::MapsTo));
    assert_eq!(kinds(r"\AA", &interner)[0], TokenKind::TemporalForall);
    assert_eq!(kinds(r"\exists", &interner)[0], TokenKind::Exists);
}

#[test]
fn test_lex_qualified_reference() {
    let interner = StringInterner::new();
    let p = interner.intern("P");
    let q = interner.intern("Q");
    assert_eq!(
        kinds("P!Q", &interner),
        vec![
            TokenKind::Ident(p),
            TokenKind::Bang,
            TokenKind::Ident(q),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let b = interner.intern("b");
    let source = "a \\* line comment\n(* block (* nested *) still *) b";
    assert_eq!(
        kinds(source, &interner),
        vec![TokenKind::Ident(a), TokenKind::Ident(b), TokenKind::Eof]
    );
}

#[test]
fn test_unterminated_block_comment() {
    let interner = StringInterner::new();
    let out = lex("a (* never closed", &interner);
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, LexErrorKind::UnterminatedComment);
    assert_eq!(out.tokens.kinds().last(), Some(&TokenKind::Eof));
}

#[test]
fn test_unexpected_character() {
    let interner = StringInterner::new();
    let out = lex("a \\ b", &interner);
    assert_eq!(
        out.errors[0].kind,
        LexErrorKind::UnexpectedCharacter('\\')
    );
    assert!(out.tokens.kinds().contains(&TokenKind::Error));
}

#[test]
fn test_columns_and_line_starts() {
    let interner = StringInterner::new();
    let out = lex("Op ==\n  /\\ a\n  /\\ b", &interner);
    let tokens = out.tokens.as_slice();

    assert_eq!((tokens[0].column, tokens[0].line_start), (1, true));
    assert_eq!((tokens[1].column, tokens[1].line_start), (4, false));
    assert_eq!(tokens[2].kind, TokenKind::And);
    assert_eq!((tokens[2].column, tokens[2].line_start), (3, true));
    assert_eq!((tokens[3].column, tokens[3].line_start), (6, false));
    assert_eq!((tokens[4].column, tokens[4].line_start), (3, true));
}

#[test]
fn test_fairness_subscript_split() {
    let interner = StringInterner::new();
    let vars = interner.intern("vars");
    let out = lex("WF_vars(Next)", &interner);
    let tokens = out.tokens.as_slice();
    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Fairness));
    assert_eq!(tokens[0].span, Span::new(0, 3));
    assert_eq!(tokens[1].kind, TokenKind::Ident(vars));
    assert_eq!(tokens[1].span, Span::new(3, 7));
}

#[test]
fn test_action_subscript_split() {
    let interner = StringInterner::new();
    let vars = interner.intern("vars");
    let kinds = kinds("[][Next]_vars", &interner);
    assert_eq!(
        kinds[kinds.len() - 3..],
        [TokenKind::Underscore, TokenKind::Ident(vars), TokenKind::Eof]
    );
    assert_eq!(kinds[0], TokenKind::Box);
}

#[test]
fn test_prime_and_field_access() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let r = interner.intern("r");
    let f = interner.intern("f");
    assert_eq!(
        kinds("x' = r.f", &interner),
        vec![
            TokenKind::Ident(x),
            TokenKind::Prime,
            TokenKind::Op,
            TokenKind::Ident(r),
            TokenKind::Dot,
            TokenKind::Ident(f),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_range_is_not_a_decimal() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("1..5", &interner),
        vec![
            TokenKind::Number,
            TokenKind::Op,
            TokenKind::Number,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_empty_source() {
    let interner = StringInterner::new();
    let out = lex("", &interner);
    assert_eq!(out.tokens.kinds(), vec![TokenKind::Eof]);
    assert!(out.errors.is_empty());
    assert_eq!(out.tokens.get(10).kind, TokenKind::Eof);
}

proptest! {
    #[test]
    fn lexing_never_panics(source in "\\PC{0,200}") {
        let interner = StringInterner::new();
        let out = lex(&source, &interner);
        let tokens = out.tokens.as_slice();

        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        let mut prev_end = 0;
        for token in tokens {
            prop_assert!(token.span.start >= prev_end);
            prop_assert!(token.span.end as usize <= source.len());
            prop_assert!(token.column >= 1);
            prev_end = token.span.end;
        }
    }

    #[test]
    fn tla_like_text_has_spans_on_char_boundaries(
        source in r"[A-Za-z_ \n=\-/\\(){}\[\]<>!:,*]{0,120}"
    ) {
        let interner = StringInterner::new();
        let out = lex(&source, &interner);
        for token in out.tokens.iter() {
            prop_assert!(source.is_char_boundary(token.span.start as usize));
            prop_assert!(source.is_char_boundary(token.span.end as usize));
        }
    }
}
