//! Утилиты для тестирования sqlscan

use crate::common::config::LexerConfig;
use crate::lexer::{Lexer, Token, TokenKind};

/// Включает вывод логов в тестах (`RUST_LOG=debug cargo test`)
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Все токены полного лексера, включая скрытые, без EOF
pub fn scan_all(sql: &str) -> Vec<Token> {
    scan_all_with(sql, LexerConfig::full())
}

/// Все токены с заданной конфигурацией, включая скрытые, без EOF
pub fn scan_all_with(sql: &str, config: LexerConfig) -> Vec<Token> {
    init_test_logging();
    let mut lexer = Lexer::with_config(sql, config);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token().unwrap();
        if token.is_eof() {
            break;
        }
        tokens.push(token);
    }
    tokens
}

/// Виды видимых токенов полного лексера, без EOF
pub fn kinds(sql: &str) -> Vec<TokenKind> {
    scan_all(sql)
        .into_iter()
        .filter(|t| !t.kind.should_skip())
        .map(|t| t.kind)
        .collect()
}

/// Пары (вид, текст) видимых токенов полного лексера, без EOF
pub fn pairs(sql: &str) -> Vec<(TokenKind, String)> {
    scan_all(sql)
        .into_iter()
        .filter(|t| !t.kind.should_skip())
        .map(|t| (t.kind, t.text))
        .collect()
}
