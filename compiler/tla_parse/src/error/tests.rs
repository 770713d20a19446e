use super::*;
use tla_lexer::Keyword;

#[test]
fn test_expected_message() {
    let err = ParseError::expected(
        "`IN`",
        TokenKind::Keyword(Keyword::Let),
        Span::new(4, 7),
    );
    assert_eq!(err.to_string(), "expected `IN`, found LET at 4..7");
}

#[test]
fn test_unclosed_message() {
    let err = ParseError::new(
        ParseErrorKind::Unclosed {
            open: TokenKind::LBracket,
        },
        Span::new(0, 1),
    );
    assert_eq!(err.to_string(), "unclosed `[` at 0..1");
}

#[test]
fn test_expected_expression_message() {
    let err = ParseError::new(
        ParseErrorKind::ExpectedExpression {
            found: TokenKind::Eof,
        },
        Span::point(9),
    );
    assert_eq!(err.to_string(), "expected an expression, found end of file at 9..9");
}
