//! Обработка ошибок для sqlscan

use crate::lexer::token::Position;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Ошибка лексического анализа
///
/// Всегда указывает позицию, на которой сканирование остановилось.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Строка или идентификатор в кавычках не закрыт до конца ввода
    #[error("{position}: unterminated literal starting with {quote}")]
    UnterminatedLiteral { position: Position, quote: char },

    /// Блочный комментарий без `*/` (только при политике `error`)
    #[error("{position}: unterminated block comment")]
    UnterminatedComment { position: Position },

    /// Ни одна альтернатива не начинается с этого символа
    #[error("{position}: no viable token at {ch:?}")]
    NoViableToken { position: Position, ch: char },
}

impl LexError {
    /// Позиция, к которой относится ошибка
    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedLiteral { position, .. }
            | LexError::UnterminatedComment { position }
            | LexError::NoViableToken { position, .. } => *position,
        }
    }
}

/// Основной тип ошибки для sqlscan
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка лексического анализа
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Внутренняя ошибка
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Тип результата для sqlscan
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Создает внутреннюю ошибку
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Позиция в исходном тексте, если ошибка лексическая
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::Lex(err) => Some(err.position()),
            _ => None,
        }
    }
}

/// Вид нефатального замечания лексера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Блочный комментарий продлен до конца ввода
    UnterminatedComment,
}

/// Нефатальное замечание, собранное во время сканирования
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub position: Position,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, position: Position) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnterminatedComment => {
                write!(f, "{}: block comment is not closed before end of input", self.position)
            }
        }
    }
}
