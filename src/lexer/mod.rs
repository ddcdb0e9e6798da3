//! Лексический анализ SQL для sqlscan

pub mod batch;
pub mod case;
pub mod classifier;
pub mod keywords;
pub mod lexer;
pub mod stream;
pub mod token;

#[cfg(test)]
mod tests;

// Переэкспортируем основные типы
pub use batch::{split_statements, tokenize_batch};
pub use case::{rewrite_keyword_case, uppercase_keywords, KeywordCase};
pub use keywords::{keyword_kind, KeywordSet};
pub use lexer::Lexer;
pub use stream::TokenStream;
pub use token::{Channel, Position, Token, TokenKind};
