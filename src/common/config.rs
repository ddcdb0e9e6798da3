//! Конфигурация для sqlscan
//!
//! Предоставляет настройки лексера (режим, набор ключевых слов, включаемые
//! альтернативы) и логирования. Загружается из TOML файла и переменных окружения.

use crate::common::error::{Error, Result};
use crate::lexer::keywords::KeywordSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Режим работы лексера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LexerMode {
    /// Полный словарь и все виды литералов
    Full,
    /// Упрощенный режим для смены регистра: SELECT/FROM и сквозные символы
    Upper,
}

impl Default for LexerMode {
    fn default() -> Self {
        LexerMode::Full
    }
}

impl std::fmt::Display for LexerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexerMode::Full => write!(f, "full"),
            LexerMode::Upper => write!(f, "upper"),
        }
    }
}

impl FromStr for LexerMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(LexerMode::Full),
            "upper" | "uppercase" => Ok(LexerMode::Upper),
            _ => Err(format!("Unsupported lexer mode: {}", s)),
        }
    }
}

/// Что делать с незакрытым блочным комментарием
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentPolicy {
    /// Комментарий продлевается до конца ввода, замечание сохраняется
    Diagnostic,
    /// Сканирование завершается ошибкой `UnterminatedComment`
    Error,
}

impl Default for CommentPolicy {
    fn default() -> Self {
        CommentPolicy::Diagnostic
    }
}

/// Настройки лексического анализатора
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LexerConfigFile")]
pub struct LexerConfig {
    /// Режим (определяет набор ключевых слов и значения по умолчанию)
    pub mode: LexerMode,
    /// Ключевые слова распознаются без учета регистра
    pub case_insensitive_keywords: bool,
    /// Составные операторы `<=`, `+=`, `||` и т.д.
    pub compound_operators: bool,
    /// Сокращенные литералы даты и времени
    pub date_time_literals: bool,
    /// Литералы в двойных кавычках (колонки и пути)
    pub quoted_identifiers: bool,
    /// Поиск размера `(N)` после типов с размером
    pub length_after_types: bool,
    /// Проверять допустимость символов внутри кавычек
    pub strict_literal_chars: bool,
    /// Пропускать неизвестные символы как отдельные токены
    pub pass_through_unknown: bool,
    /// Поведение при незакрытом блочном комментарии
    pub unterminated_comment: CommentPolicy,
}

impl LexerConfig {
    /// Полный лексер диалекта
    pub fn full() -> Self {
        Self {
            mode: LexerMode::Full,
            case_insensitive_keywords: true,
            compound_operators: true,
            date_time_literals: true,
            quoted_identifiers: true,
            length_after_types: true,
            strict_literal_chars: true,
            pass_through_unknown: false,
            unterminated_comment: CommentPolicy::Diagnostic,
        }
    }

    /// Упрощенный лексер для смены регистра SELECT/FROM
    pub fn upper() -> Self {
        Self {
            mode: LexerMode::Upper,
            case_insensitive_keywords: true,
            compound_operators: false,
            date_time_literals: false,
            quoted_identifiers: false,
            length_after_types: false,
            strict_literal_chars: true,
            pass_through_unknown: true,
            unterminated_comment: CommentPolicy::Diagnostic,
        }
    }

    /// Значения по умолчанию для режима
    pub fn for_mode(mode: LexerMode) -> Self {
        match mode {
            LexerMode::Full => Self::full(),
            LexerMode::Upper => Self::upper(),
        }
    }

    /// Набор ключевых слов текущего режима
    pub fn keyword_set(&self) -> KeywordSet {
        match self.mode {
            LexerMode::Full => KeywordSet::Full,
            LexerMode::Upper => KeywordSet::SelectFrom,
        }
    }

    /// Объединяет конфигурацию с другой: берутся поля `other`,
    /// отличающиеся от значений по умолчанию его режима
    pub fn merge(mut self, other: Self) -> Self {
        let base = Self::for_mode(other.mode);
        if other.mode != LexerMode::default() && other.mode != self.mode {
            self = Self::for_mode(other.mode);
        }
        if other.case_insensitive_keywords != base.case_insensitive_keywords {
            self.case_insensitive_keywords = other.case_insensitive_keywords;
        }
        if other.compound_operators != base.compound_operators {
            self.compound_operators = other.compound_operators;
        }
        if other.date_time_literals != base.date_time_literals {
            self.date_time_literals = other.date_time_literals;
        }
        if other.quoted_identifiers != base.quoted_identifiers {
            self.quoted_identifiers = other.quoted_identifiers;
        }
        if other.length_after_types != base.length_after_types {
            self.length_after_types = other.length_after_types;
        }
        if other.strict_literal_chars != base.strict_literal_chars {
            self.strict_literal_chars = other.strict_literal_chars;
        }
        if other.pass_through_unknown != base.pass_through_unknown {
            self.pass_through_unknown = other.pass_through_unknown;
        }
        if other.unterminated_comment != base.unterminated_comment {
            self.unterminated_comment = other.unterminated_comment;
        }
        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        if self.length_after_types && self.keyword_set() != KeywordSet::Full {
            return Err(Error::configuration(
                "length_after_types requires the full keyword set",
            ));
        }
        Ok(())
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self::full()
    }
}

/// Представление настроек лексера в файле: незаданные поля
/// берутся из значений по умолчанию выбранного режима
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LexerConfigFile {
    mode: Option<LexerMode>,
    case_insensitive_keywords: Option<bool>,
    compound_operators: Option<bool>,
    date_time_literals: Option<bool>,
    quoted_identifiers: Option<bool>,
    length_after_types: Option<bool>,
    strict_literal_chars: Option<bool>,
    pass_through_unknown: Option<bool>,
    unterminated_comment: Option<CommentPolicy>,
}

impl From<LexerConfigFile> for LexerConfig {
    fn from(file: LexerConfigFile) -> Self {
        let base = LexerConfig::for_mode(file.mode.unwrap_or_default());
        Self {
            mode: base.mode,
            case_insensitive_keywords: file
                .case_insensitive_keywords
                .unwrap_or(base.case_insensitive_keywords),
            compound_operators: file.compound_operators.unwrap_or(base.compound_operators),
            date_time_literals: file.date_time_literals.unwrap_or(base.date_time_literals),
            quoted_identifiers: file.quoted_identifiers.unwrap_or(base.quoted_identifiers),
            length_after_types: file.length_after_types.unwrap_or(base.length_after_types),
            strict_literal_chars: file.strict_literal_chars.unwrap_or(base.strict_literal_chars),
            pass_through_unknown: file.pass_through_unknown.unwrap_or(base.pass_through_unknown),
            unterminated_comment: file.unterminated_comment.unwrap_or(base.unterminated_comment),
        }
    }
}

/// Конфигурация логирования
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень логирования (директива `EnvFilter`)
    pub level: String,
    /// Цветной вывод
    pub ansi: bool,
    /// Печатать модуль-источник записи
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            ansi: true,
            with_target: false,
        }
    }
}

impl LoggingConfig {
    fn merge(mut self, other: Self) -> Self {
        let base = Self::default();
        if other.level != base.level {
            self.level = other.level;
        }
        if other.ansi != base.ansi {
            self.ansi = other.ansi;
        }
        if other.with_target != base.with_target {
            self.with_target = other.with_target;
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(Error::configuration("Log level cannot be empty"));
        }
        Ok(())
    }
}

/// Основная конфигурация приложения
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub lexer: LexerConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Разбирает конфигурацию из TOML строки
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::configuration(e.to_string()))
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::configuration(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Применяет заданные переменные окружения поверх конфигурации.
    ///
    /// Незаданная переменная ничего не меняет.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Применяет переопределения из переданного источника переменных
    pub(crate) fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(mode) = var("SQLSCAN_MODE") {
            let mode: LexerMode = mode.parse().map_err(Error::configuration)?;
            if mode != self.lexer.mode {
                self.lexer = LexerConfig::for_mode(mode);
            }
        }

        if let Some(strict) = var("SQLSCAN_STRICT_LITERALS") {
            self.lexer.strict_literal_chars = strict.parse().map_err(|_| {
                Error::configuration(format!("Invalid SQLSCAN_STRICT_LITERALS: {}", strict))
            })?;
        }

        if let Some(level) = var("SQLSCAN_LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(self)
    }

    /// Объединяет конфигурацию с другой
    pub fn merge(self, other: Self) -> Self {
        Self {
            lexer: self.lexer.merge(other.lexer),
            logging: self.logging.merge(other.logging),
        }
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        self.lexer.validate()?;
        self.logging.validate()
    }
}
