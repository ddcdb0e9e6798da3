//! Смена регистра ключевых слов
//!
//! Переписывает исходный текст, меняя регистр только у ключевых слов.
//! Все остальные токены, включая пробелы и комментарии, выводятся как есть.
//! С конфигурацией [`LexerConfig::upper`] затрагиваются только SELECT и FROM.

use crate::common::config::LexerConfig;
use crate::common::error::LexError;
use crate::lexer::lexer::Lexer;
use serde::{Deserialize, Serialize};

/// Целевой регистр ключевых слов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCase {
    Upper,
    Lower,
}

/// Переписывает ключевые слова в заданном регистре
pub fn rewrite_keyword_case(
    input: &str,
    config: &LexerConfig,
    case: KeywordCase,
) -> Result<String, LexError> {
    let mut lexer = Lexer::with_config(input, config.clone());
    let mut output = String::with_capacity(input.len());

    loop {
        let token = lexer.next_token()?;
        if token.is_eof() {
            break;
        }
        if token.kind.is_keyword() {
            match case {
                KeywordCase::Upper => output.push_str(&token.text.to_ascii_uppercase()),
                KeywordCase::Lower => output.push_str(&token.text.to_ascii_lowercase()),
            }
        } else {
            output.push_str(&token.text);
        }
    }

    Ok(output)
}

/// Переводит ключевые слова в верхний регистр
pub fn uppercase_keywords(input: &str, config: &LexerConfig) -> Result<String, LexError> {
    rewrite_keyword_case(input, config, KeywordCase::Upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_mode_touches_only_select_from() {
        let sql = "select name, 'select' from users where id = 1";
        let result = uppercase_keywords(sql, &LexerConfig::upper()).unwrap();
        assert_eq!(result, "SELECT name, 'select' FROM users where id = 1");
    }

    #[test]
    fn test_full_mode_uppercases_all_keywords() {
        let sql = "select name from users where id = 1 -- select\n";
        let result = uppercase_keywords(sql, &LexerConfig::full()).unwrap();
        assert_eq!(result, "SELECT name FROM users WHERE id = 1 -- select\n");
    }

    #[test]
    fn test_upper_mode_passes_unknown_characters() {
        let sql = "select @x, #tmp from t!";
        let result = uppercase_keywords(sql, &LexerConfig::upper()).unwrap();
        assert_eq!(result, "SELECT @x, #tmp FROM t!");
    }

    #[test]
    fn test_upper_mode_keeps_broken_quotes() {
        let sql = "select 'it''s' from \"t\" where x = 'open";
        let result = uppercase_keywords(sql, &LexerConfig::upper()).unwrap();
        assert_eq!(result, "SELECT 'it''s' FROM \"t\" where x = 'open");
    }

    #[test]
    fn test_lowercase() {
        let sql = "SELECT A FROM B";
        let result = rewrite_keyword_case(sql, &LexerConfig::full(), KeywordCase::Lower).unwrap();
        assert_eq!(result, "select A from B");
    }

    #[test]
    fn test_full_mode_reports_errors() {
        assert!(uppercase_keywords("select 'abc", &LexerConfig::full()).is_err());
    }
}
