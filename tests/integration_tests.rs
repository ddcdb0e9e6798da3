//! Интеграционные тесты sqlscan
//!
//! Проверяют библиотеку через публичный API: сканирование скриптов,
//! разбиение на выражения, пакетную обработку, смену регистра и конфигурацию.

use sqlscan::{
    split_statements, tokenize, tokenize_batch, uppercase_keywords, AppConfig, Channel,
    CommentPolicy, Error, LexError, Lexer, LexerConfig, LexerMode, Token, TokenKind, TokenStream,
};
use tempfile::TempDir;

const SCRIPT: &str = "\
-- справочник городов
CREATE TABLE cities (
    id INTEGER AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(64) NOT NULL,
    label NCHAR(16),
    founded DATE
);
INSERT INTO cities VALUES (1, '서울', '首都', 01/01/1394);
SELECT name, \"/export/cities\" FROM cities /* все */ WHERE id >= 1;
";

fn visible_kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).filter(|k| *k != TokenKind::Eof).collect()
}

/// Тест полного цикла: скрипт -> выражения -> токены
#[test]
fn test_script_lifecycle() {
    let statements = split_statements(SCRIPT).unwrap();
    assert_eq!(statements.len(), 3);
    assert!(statements[0].starts_with("-- справочник городов\nCREATE TABLE"));
    assert!(statements[1].starts_with("INSERT INTO"));
    assert!(statements[2].ends_with("WHERE id >= 1"));

    let results = tokenize_batch(&statements, &LexerConfig::full());
    assert_eq!(results.len(), 3);
    for result in &results {
        let tokens = result.as_ref().unwrap();
        assert!(tokens.last().unwrap().is_eof());
    }

    let insert = results[1].as_ref().unwrap();
    assert_eq!(
        visible_kinds(insert),
        vec![
            TokenKind::Insert,
            TokenKind::Into,
            TokenKind::Identifier,
            TokenKind::Values,
            TokenKind::LeftParen,
            TokenKind::DecimalLiteral,
            TokenKind::Comma,
            TokenKind::StringLiteral,
            TokenKind::Comma,
            TokenKind::StringLiteral,
            TokenKind::Comma,
            TokenKind::DateFormat,
            TokenKind::RightParen,
        ]
    );

    let select = results[2].as_ref().unwrap();
    assert_eq!(select[2].kind, TokenKind::Comma);
    assert_eq!(select[3].kind, TokenKind::Path);
    assert_eq!(select[8].kind, TokenKind::GreaterEqual);
}

#[test]
fn test_type_lengths_in_script() {
    let tokens = tokenize(SCRIPT).unwrap();
    let lengths: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Length)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(lengths, vec!["(64)", "(16)"]);
}

#[test]
fn test_lossless_scan_of_script() {
    let tokens = Lexer::new(SCRIPT).tokenize_all().unwrap();
    let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(rebuilt, SCRIPT);

    let hidden = tokens.iter().filter(|t| t.channel() == Channel::Hidden).count();
    let comments = tokens.iter().filter(|t| t.kind.is_comment()).count();
    assert_eq!(comments, 2);
    assert!(hidden > comments);
}

#[test]
fn test_uppercase_modes() {
    let sql = "select name from cities where id = 1";

    let upper = uppercase_keywords(sql, &LexerConfig::upper()).unwrap();
    assert_eq!(upper, "SELECT name FROM cities where id = 1");

    let full = uppercase_keywords(sql, &LexerConfig::full()).unwrap();
    assert_eq!(full, "SELECT name FROM cities WHERE id = 1");
}

#[test]
fn test_error_reporting() {
    let err = tokenize("SELECT *\nFROM t WHERE a != 1").unwrap_err();
    assert_eq!(err.position().line, 2);
    assert_eq!(err.position().column, 16);
    assert_eq!(err.to_string(), "2:16: no viable token at '!'");

    let err: Error = tokenize("'open").unwrap_err().into();
    assert!(matches!(
        err,
        Error::Lex(LexError::UnterminatedLiteral { quote: '\'', .. })
    ));
}

#[test]
fn test_stream_recovery() {
    let mut stream = TokenStream::from_source("SELECT @; SELECT 1;", LexerConfig::full());
    let mut statements = 0;
    let mut errors = 0;

    loop {
        match stream.next_token() {
            Ok(token) if token.is_eof() => break,
            Ok(token) if token.kind == TokenKind::Semicolon => statements += 1,
            Ok(_) => {}
            Err(_) => {
                errors += 1;
                stream.synchronize();
            }
        }
    }

    assert_eq!(errors, 1);
    assert_eq!(statements, 1);
}

#[test]
fn test_config_file_drives_lexer() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sqlscan.toml");
    std::fs::write(
        &path,
        "[lexer]\nmode = \"full\"\nunterminated_comment = \"error\"\n\n[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(config.lexer.mode, LexerMode::Full);
    assert_eq!(config.lexer.unterminated_comment, CommentPolicy::Error);
    assert_eq!(config.logging.level, "debug");
    config.validate().unwrap();

    let mut lexer = Lexer::with_config("SELECT /* open", config.lexer);
    assert!(matches!(
        lexer.tokenize(),
        Err(LexError::UnterminatedComment { .. })
    ));
}

#[test]
fn test_tokens_serialize_to_json() {
    let tokens = tokenize("SELECT 'x'").unwrap();
    let json = serde_json::to_value(&tokens).unwrap();

    assert_eq!(json[0]["kind"], "Select");
    assert_eq!(json[1]["text"], "'x'");
    assert_eq!(json[1]["start"]["column"], 8);
    assert_eq!(json[2]["kind"], "Eof");
}
