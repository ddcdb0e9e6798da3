//! Лексический анализатор SQL для sqlscan
//!
//! Преобразует входной SQL текст в последовательность классифицированных токенов.
//! Поддерживает полный словарь ключевых слов диалекта, литералы в кавычках
//! с символами корейского, китайского и японского алфавитов, сокращенные
//! литералы даты и времени, составные операторы и оба вида комментариев.
//!
//! Выбор токена детерминирован: по первому символу выбирается группа
//! альтернатив, затем просмотр вперед без потребления символов определяет
//! самую длинную подходящую. Курсор сдвигается только после выбора.

use crate::common::config::{CommentPolicy, LexerConfig};
use crate::common::error::{Diagnostic, DiagnosticKind, LexError};
use crate::lexer::classifier::{self, Script};
use crate::lexer::keywords::KeywordSet;
use crate::lexer::token::{Position, Token, TokenKind};

/// Лексический анализатор SQL
#[derive(Debug)]
pub struct Lexer {
    /// Исходный текст
    input: Vec<char>,
    /// Текущая позиция в тексте (индекс символа)
    position: usize,
    /// Текущая позиция для отображения ошибок
    current_position: Position,
    /// Настройки
    config: LexerConfig,
    /// Набор ключевых слов режима
    keywords: KeywordSet,
    /// Вид последнего видимого токена, нужен для поиска размера типа
    last_significant: Option<TokenKind>,
    /// Нефатальные замечания
    diagnostics: Vec<Diagnostic>,
    /// Выдан маркер конца ввода
    finished: bool,
}

impl Lexer {
    /// Создает лексер полного диалекта
    pub fn new(input: &str) -> Self {
        Self::with_config(input, LexerConfig::full())
    }

    /// Создает лексер с заданными настройками
    pub fn with_config(input: &str, config: LexerConfig) -> Self {
        let keywords = config.keyword_set();
        log::debug!(
            "lexer created: mode={}, {} bytes of input",
            config.mode,
            input.len()
        );
        Self {
            input: input.chars().collect(),
            position: 0,
            current_position: Position::start(),
            config,
            keywords,
            last_significant: None,
            diagnostics: Vec::new(),
            finished: false,
        }
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Позиция курсора (начало следующего токена)
    pub fn position(&self) -> Position {
        self.current_position
    }

    /// Выдан ли уже маркер конца ввода
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Нефатальные замечания, собранные к этому моменту
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Забирает накопленные замечания
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

// Подключаем методы из отдельных файлов
include!("lexer_methods.rs");
include!("lexer_readers.rs");
