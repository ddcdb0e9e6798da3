//! Тесты потока токенов

use crate::common::config::LexerConfig;
use crate::common::error::LexError;
use crate::lexer::{Lexer, Position, TokenKind, TokenStream};

fn stream(sql: &str) -> TokenStream {
    TokenStream::new(Lexer::new(sql))
}

#[test]
fn test_peek_does_not_consume() {
    let mut stream = stream("SELECT a, b FROM t");

    assert_eq!(stream.peek().unwrap().kind, TokenKind::Select);
    assert_eq!(stream.peek_nth(2).unwrap().kind, TokenKind::Comma);
    assert_eq!(stream.peek_nth(4).unwrap().kind, TokenKind::From);

    assert_eq!(stream.next_token().unwrap().kind, TokenKind::Select);
    assert_eq!(stream.next_token().unwrap().text, "a");
    assert_eq!(stream.peek().unwrap().kind, TokenKind::Comma);
}

#[test]
fn test_peek_past_end_returns_eof() {
    let mut stream = stream("a");
    assert!(stream.peek_nth(5).unwrap().is_eof());
    assert_eq!(stream.next_token().unwrap().text, "a");
    assert!(stream.next_token().unwrap().is_eof());
    assert!(stream.next_token().unwrap().is_eof());
}

#[test]
fn test_position_of_next_token() {
    let mut stream = stream("SELECT\n  name");
    assert_eq!(stream.position().unwrap(), Position::start());
    stream.next_token().unwrap();
    assert_eq!(stream.position().unwrap(), Position::new(2, 3, 9));
}

#[test]
fn test_check_and_next_if() {
    let mut stream = stream("SELECT *");
    assert!(stream.check(TokenKind::Select).unwrap());
    assert!(stream.next_if(TokenKind::From).unwrap().is_none());
    assert!(stream.next_if(TokenKind::Select).unwrap().is_some());
    assert_eq!(stream.next_if(TokenKind::Star).unwrap().unwrap().text, "*");
    assert!(stream.check(TokenKind::Eof).unwrap());
}

#[test]
fn test_hidden_tokens_are_kept() {
    let mut stream = stream("a /* x */ b -- y\n");
    let visible: Vec<_> = stream.by_ref().map(|t| t.unwrap().text).collect();
    assert_eq!(visible, vec!["a", "b"]);

    let hidden: Vec<_> = stream.hidden_tokens().iter().map(|t| t.kind).collect();
    assert_eq!(
        hidden,
        vec![
            TokenKind::Whitespace,
            TokenKind::BlockComment,
            TokenKind::Whitespace,
            TokenKind::Whitespace,
            TokenKind::LineComment,
        ]
    );

    assert_eq!(stream.take_hidden().len(), 5);
    assert!(stream.hidden_tokens().is_empty());
}

#[test]
fn test_diagnostics_through_stream() {
    let mut stream = stream("a /* open");
    stream.next_token().unwrap();
    assert!(stream.next_token().unwrap().is_eof());
    assert_eq!(stream.diagnostics().len(), 1);
    assert_eq!(stream.diagnostics()[0].position, Position::new(1, 3, 2));
}

#[test]
fn test_iterator_collects_visible_tokens() {
    let tokens: Result<Vec<_>, _> = stream("a + 1").collect();
    let kinds: Vec<_> = tokens.unwrap().into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::DecimalLiteral,
        ]
    );
}

#[test]
fn test_iterator_stops_after_error() {
    let items: Vec<_> = stream("a @ b").collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(matches!(items[1], Err(LexError::NoViableToken { ch: '@', .. })));
}

#[test]
fn test_error_is_sticky() {
    let mut stream = stream("a @ b");
    stream.next_token().unwrap();

    let first = stream.next_token().unwrap_err();
    let second = stream.peek().unwrap_err();
    assert_eq!(first, second);
    assert_eq!(stream.error(), Some(&first));
}

#[test]
fn test_synchronize_skips_to_statement_end() {
    let mut stream = stream("SELECT @; SELECT b");
    assert_eq!(stream.next_token().unwrap().kind, TokenKind::Select);
    assert!(stream.next_token().is_err());

    let resume = stream.synchronize();
    assert_eq!(resume, Position::new(1, 10, 9));
    assert!(stream.error().is_none());

    let rest: Vec<_> = stream.map(|t| t.unwrap().text).collect();
    assert_eq!(rest, vec!["SELECT", "b"]);
}

#[test]
fn test_synchronize_uses_buffered_semicolon() {
    let mut stream = stream("a b ; c");
    assert_eq!(stream.peek_nth(3).unwrap().text, "c");

    let resume = stream.synchronize();
    assert_eq!(resume, Position::new(1, 7, 6));
    assert_eq!(stream.next_token().unwrap().text, "c");
}

#[test]
fn test_synchronize_without_semicolon_reaches_end() {
    let mut stream = stream("a @ b");
    stream.next_token().unwrap();
    assert!(stream.next_token().is_err());

    stream.synchronize();
    assert!(stream.next_token().unwrap().is_eof());
}

#[test]
fn test_stream_in_upper_mode() {
    let mut stream = TokenStream::from_source("select @x from t", LexerConfig::upper());
    let kinds: Vec<_> = stream.by_ref().map(|t| t.unwrap().kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Select,
            TokenKind::Passthrough,
            TokenKind::Identifier,
            TokenKind::From,
            TokenKind::Identifier,
        ]
    );
    assert!(stream.into_lexer().is_finished());
}
