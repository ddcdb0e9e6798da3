//! Таблицы ключевых слов
//!
//! Статические неизменяемые отображения из написания в верхнем регистре
//! в вид токена. Строятся один раз при первом обращении и разделяются
//! всеми экземплярами лексера без синхронизации.

use crate::lexer::token::TokenKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Набор ключевых слов, с которым работает лексер
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordSet {
    /// Полный словарь диалекта
    Full,
    /// Только SELECT и FROM (режим смены регистра)
    SelectFrom,
}

/// Дополнительные написания ключевых слов.
///
/// Грамматика редактора запросов записывает EXCEPT как `EXCET`;
/// оба написания дают [`TokenKind::Except`].
const KEYWORD_ALIASES: [(&str, TokenKind); 1] = [("EXCET", TokenKind::Except)];

lazy_static::lazy_static! {
    static ref FULL_KEYWORDS: HashMap<&'static str, TokenKind> = TokenKind::KEYWORDS
        .iter()
        .filter_map(|kind| kind.keyword_spelling().map(|spelling| (spelling, *kind)))
        .chain(KEYWORD_ALIASES.iter().copied())
        .collect();

    static ref SELECT_FROM_KEYWORDS: HashMap<&'static str, TokenKind> = [
        ("SELECT", TokenKind::Select),
        ("FROM", TokenKind::From),
    ]
    .into_iter()
    .collect();
}

impl KeywordSet {
    fn table(&self) -> &'static HashMap<&'static str, TokenKind> {
        match self {
            KeywordSet::Full => &FULL_KEYWORDS,
            KeywordSet::SelectFrom => &SELECT_FROM_KEYWORDS,
        }
    }

    /// Ищет готовую лексему целиком.
    ///
    /// При `case_insensitive` лексема приводится к верхнему регистру,
    /// иначе ключевым словом считается только точное написание из таблицы.
    pub fn lookup(&self, word: &str, case_insensitive: bool) -> Option<TokenKind> {
        let table = self.table();
        if case_insensitive {
            table.get(word.to_ascii_uppercase().as_str()).copied()
        } else {
            table.get(word).copied()
        }
    }

    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    /// Все написания набора (в произвольном порядке)
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> {
        self.table().keys().copied()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        KeywordSet::Full
    }
}

/// Поиск в полном словаре без учета регистра
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    KeywordSet::Full.lookup(word, true)
}
