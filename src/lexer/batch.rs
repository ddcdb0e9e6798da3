//! Пакетное сканирование независимых выражений
//!
//! Каждое выражение сканируется своим экземпляром лексера; общими остаются
//! только статические таблицы ключевых слов, поэтому выражения разбираются
//! параллельно без синхронизации.

use crate::common::config::LexerConfig;
use crate::common::error::LexError;
use crate::lexer::lexer::Lexer;
use crate::lexer::token::{Token, TokenKind};
use rayon::prelude::*;

/// Сканирует выражения параллельно; результаты идут в порядке входа
pub fn tokenize_batch(
    sources: &[&str],
    config: &LexerConfig,
) -> Vec<Result<Vec<Token>, LexError>> {
    let span = tracing::debug_span!("tokenize_batch", statements = sources.len());
    let _guard = span.enter();

    sources
        .par_iter()
        .map(|source| Lexer::with_config(source, config.clone()).tokenize())
        .collect()
}

/// Делит текст на выражения по `;` верхнего уровня.
///
/// Точки с запятой внутри строк и комментариев разделителями не считаются.
/// Возвращаются обрезанные по краям непустые фрагменты исходного текста
/// без завершающей `;`.
pub fn split_statements(input: &str) -> Result<Vec<&str>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut statements = Vec::new();
    let mut start = 0;
    let mut has_content = false;

    loop {
        let token = lexer.next_token()?;
        match token.kind {
            TokenKind::Eof | TokenKind::Semicolon => {
                if has_content {
                    statements.push(input[start..token.start_offset()].trim());
                }
                if token.is_eof() {
                    break;
                }
                start = token.end_offset();
                has_content = false;
            }
            kind if kind.should_skip() => {}
            _ => has_content = true,
        }
    }

    log::debug!("split input into {} statements", statements.len());
    Ok(statements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_statements() {
        let sql = "SELECT 1; -- a;b\nSELECT 'x;y' ;;  /* ; */ ; UPDATE t SET a = 1";
        let statements = split_statements(sql).unwrap();
        assert_eq!(
            statements,
            vec!["SELECT 1", "-- a;b\nSELECT 'x;y'", "UPDATE t SET a = 1"]
        );
    }

    #[test]
    fn test_split_reports_lex_errors() {
        let err = split_statements("SELECT 1; SELECT 'open").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedLiteral { .. }));
    }

    #[test]
    fn test_batch_preserves_order() {
        let sources = ["SELECT a FROM t", "DELETE FROM t", "SELECT @", "INSERT INTO t"];
        let results = tokenize_batch(&sources, &LexerConfig::full());

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap()[0].kind, TokenKind::Select);
        assert_eq!(results[1].as_ref().unwrap()[0].kind, TokenKind::Delete);
        assert!(results[2].is_err());
        assert_eq!(results[3].as_ref().unwrap()[0].kind, TokenKind::Insert);
    }

    #[test]
    fn test_batch_matches_sequential_scan() {
        let sources: Vec<String> = (0..64)
            .map(|i| format!("SELECT col{} FROM t WHERE id <= {} AND d = 12/25", i, i))
            .collect();
        let refs: Vec<&str> = sources.iter().map(String::as_str).collect();

        let parallel = tokenize_batch(&refs, &LexerConfig::full());
        for (source, result) in refs.iter().zip(parallel) {
            let sequential = Lexer::new(source).tokenize().unwrap();
            assert_eq!(result.unwrap(), sequential);
        }
    }
}
