//! sqlscan - лексический анализатор SQL диалекта
//!
//! Преобразует текст запроса в поток классифицированных токенов: ключевые слова,
//! идентификаторы, литералы (строки, колонки, пути, числа, дата и время),
//! операторы, разделители, символы корейского, китайского и японского алфавитов
//! и комментарии. Построение AST, семантический анализ и выполнение запросов
//! в задачи библиотеки не входят.
//!
//! ```
//! use sqlscan::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("SELECT name FROM users WHERE id <= 10");
//! let tokens = lexer.tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Select);
//! assert_eq!(tokens[6].kind, TokenKind::LessEqual);
//! ```

pub mod cli;
pub mod common;
pub mod lexer;

pub use common::config::{AppConfig, CommentPolicy, LexerConfig, LexerMode, LoggingConfig};
pub use common::error::{Diagnostic, DiagnosticKind, Error, LexError, Result};
pub use lexer::{
    split_statements, tokenize_batch, uppercase_keywords, Channel, KeywordSet, Lexer, Position,
    Token, TokenKind, TokenStream,
};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Сканирует текст полным лексером и возвращает видимые токены с EOF
pub fn tokenize(input: &str) -> std::result::Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}
