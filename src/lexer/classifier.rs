//! Классификация символов для лексера
//!
//! Чистые функции без состояния: отвечают на вопрос, к какому классу относится
//! отдельный символ. Используются сканерами литералов и разбором идентификаторов.

/// Класс национального алфавита
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Korean,
    Chinese,
    Japanese,
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_ascii_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Буква, цифра или подчеркивание
pub fn is_identifier_char(ch: char) -> bool {
    is_ascii_letter(ch) || is_digit(ch) || ch == '_'
}

/// Хангыль: слоги, джамо и совместимые джамо
pub fn is_korean_block(ch: char) -> bool {
    matches!(ch, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}')
}

/// Унифицированные иероглифы CJK
pub fn is_chinese_block(ch: char) -> bool {
    matches!(ch, '\u{4E00}'..='\u{9FA5}')
}

/// Кана и смежные блоки.
///
/// Диапазон пересекается с совместимыми джамо хангыля; такие символы
/// классифицируются как корейские (см. [`script_of`]).
pub fn is_japanese_block(ch: char) -> bool {
    matches!(ch, '\u{3040}'..='\u{31FF}')
}

/// Скобки всех видов: `( ) [ ] { }`
pub fn is_bracket_mark(ch: char) -> bool {
    matches!(ch, '(' | ')' | '[' | ']' | '{' | '}')
}

/// Пробельные символы диалекта
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Допустимый символ тела строки в кавычках
pub fn is_string_body_char(ch: char) -> bool {
    is_identifier_char(ch)
        || matches!(ch, ' ' | '.' | ',' | '/' | '\\' | ':' | '-')
        || is_bracket_mark(ch)
        || script_of(ch).is_some()
}

/// Определяет национальный алфавит символа
pub fn script_of(ch: char) -> Option<Script> {
    if is_korean_block(ch) {
        Some(Script::Korean)
    } else if is_chinese_block(ch) {
        Some(Script::Chinese)
    } else if is_japanese_block(ch) {
        Some(Script::Japanese)
    } else {
        None
    }
}

/// Разделитель пути в двойных кавычках
pub fn is_path_separator(ch: char) -> bool {
    matches!(ch, '/' | ':' | '\\')
}
