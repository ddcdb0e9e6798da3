//! Поток токенов для потребителя (парсера или подсветки)
//!
//! Отдает только токены основного канала, сохраняя пробелы и комментарии
//! отдельно, и поддерживает просмотр вперед на произвольное число токенов.

use crate::common::config::LexerConfig;
use crate::common::error::{Diagnostic, LexError};
use crate::lexer::lexer::Lexer;
use crate::lexer::token::{Position, Token, TokenKind};
use std::collections::VecDeque;

/// Буферизованный поток видимых токенов
#[derive(Debug)]
pub struct TokenStream {
    lexer: Lexer,
    /// Уже прочитанные, но еще не выданные токены
    lookahead: VecDeque<Token>,
    /// Скрытые токены в порядке появления
    hidden: Vec<Token>,
    /// Ошибка, на которой остановился лексер
    pending_error: Option<LexError>,
    /// Итератор завершен (конец ввода или ошибка)
    exhausted: bool,
}

impl TokenStream {
    pub fn new(lexer: Lexer) -> Self {
        Self {
            lexer,
            lookahead: VecDeque::new(),
            hidden: Vec::new(),
            pending_error: None,
            exhausted: false,
        }
    }

    /// Создает поток сразу из исходного текста
    pub fn from_source(input: &str, config: LexerConfig) -> Self {
        Self::new(Lexer::with_config(input, config))
    }

    /// Дочитывает буфер до `count` видимых токенов.
    ///
    /// После конца ввода буфер дополняется повторными маркерами EOF.
    fn fill(&mut self, count: usize) -> Result<(), LexError> {
        while self.lookahead.len() < count {
            if let Some(err) = &self.pending_error {
                return Err(err.clone());
            }
            match self.lexer.next_token() {
                Ok(token) if token.kind.should_skip() => self.hidden.push(token),
                Ok(token) => self.lookahead.push_back(token),
                Err(err) => {
                    log::debug!("token stream stopped: {}", err);
                    self.pending_error = Some(err.clone());
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Возвращает следующий видимый токен
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.fill(1)?;
        Ok(self
            .lookahead
            .pop_front()
            .unwrap_or_else(|| Token::eof(self.lexer.position())))
    }

    /// Следующий видимый токен без потребления
    pub fn peek(&mut self) -> Result<&Token, LexError> {
        self.peek_nth(0)
    }

    /// Видимый токен на `n` позиций впереди (0 - следующий)
    pub fn peek_nth(&mut self, n: usize) -> Result<&Token, LexError> {
        self.fill(n + 1)?;
        Ok(&self.lookahead[n])
    }

    /// Проверяет вид следующего видимого токена
    pub fn check(&mut self, kind: TokenKind) -> Result<bool, LexError> {
        Ok(self.peek()?.kind == kind)
    }

    /// Потребляет следующий токен, если он заданного вида
    pub fn next_if(&mut self, kind: TokenKind) -> Result<Option<Token>, LexError> {
        if self.check(kind)? {
            self.next_token().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Позиция начала следующего видимого токена
    pub fn position(&mut self) -> Result<Position, LexError> {
        Ok(self.peek()?.start)
    }

    /// Пробелы и комментарии, прочитанные к этому моменту
    pub fn hidden_tokens(&self) -> &[Token] {
        &self.hidden
    }

    /// Забирает накопленные скрытые токены
    pub fn take_hidden(&mut self) -> Vec<Token> {
        std::mem::take(&mut self.hidden)
    }

    /// Нефатальные замечания лексера
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.lexer.diagnostics()
    }

    /// Ошибка, на которой остановилось сканирование
    pub fn error(&self) -> Option<&LexError> {
        self.pending_error.as_ref()
    }

    /// Восстановление после ошибки: пропускает ввод до `;` включительно.
    ///
    /// Если `;` уже есть среди прочитанных токенов, отбрасываются только
    /// токены до него. Иначе буфер и ошибка сбрасываются, а лексер
    /// пропускает исходный текст до ближайшей `;` или конца ввода.
    /// Возвращает позицию, с которой продолжится сканирование.
    pub fn synchronize(&mut self) -> Position {
        self.exhausted = false;

        if let Some(index) = self
            .lookahead
            .iter()
            .position(|token| token.kind == TokenKind::Semicolon)
        {
            self.lookahead.drain(..=index);
            return self
                .lookahead
                .front()
                .map(|token| token.start)
                .unwrap_or_else(|| self.lexer.position());
        }

        self.lookahead.clear();
        if let Some(err) = self.pending_error.take() {
            log::debug!("resynchronizing after {}", err);
        }
        let skipped = self.lexer.skip_through(';');
        log::debug!("skipped {} characters up to statement end", skipped);
        self.lexer.position()
    }

    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    pub fn into_lexer(self) -> Lexer {
        self.lexer
    }
}

impl Iterator for TokenStream {
    type Item = Result<Token, LexError>;

    /// Выдает видимые токены до EOF (не включая) или до первой ошибки
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.exhausted = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
        }
    }
}
