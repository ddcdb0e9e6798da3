// Методы лексического анализатора: выбор альтернативы и работа с курсором

impl Lexer {
    /// Возвращает следующий токен, включая пробелы и комментарии.
    ///
    /// После конца ввода каждый вызов возвращает маркер `Eof` нулевой длины.
    /// При ошибке курсор остается на начале несостоявшегося токена.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let current_char = match self.peek() {
            Some(ch) => ch,
            None => {
                self.finished = true;
                return Ok(Token::eof(self.current_position));
            }
        };

        let start_index = self.position;
        let start_position = self.current_position;

        // Определяем вид токена по первому символу
        let kind = match current_char {
            // Пробелы и комментарии
            ch if classifier::is_whitespace(ch) => self.read_whitespace(),
            '/' if self.peek_ahead(1) == Some('*') => self.read_block_comment()?,
            '-' if self.peek_ahead(1) == Some('-') => self.read_line_comment(),

            // Литералы в кавычках
            '\'' => self.read_string_literal()?,
            '"' if self.config.quoted_identifiers => self.read_quoted_identifier()?,

            // Числа, дата и время
            '0'..='9' => self.read_number_or_shape(),

            // Идентификаторы и ключевые слова
            'a'..='z' | 'A'..='Z' | '_' => self.read_identifier_or_keyword(),

            // Символы национальных алфавитов
            ch if classifier::script_of(ch).is_some() => self.read_script_run(),

            // Операторы с возможным вторым символом
            '<' | '>' | '+' | '-' | '*' | '/' | '&' | '|' | '^' | '%' => self.read_operator(),

            // Размер типа или обычная скобка
            '(' if self.should_probe_length() => match self.match_length() {
                Some(len) => {
                    self.advance_by(len);
                    TokenKind::Length
                }
                None => self.read_single_char_token(TokenKind::LeftParen),
            },

            // Разделители
            '(' => self.read_single_char_token(TokenKind::LeftParen),
            ')' => self.read_single_char_token(TokenKind::RightParen),
            '[' => self.read_single_char_token(TokenKind::LeftBracket),
            ']' => self.read_single_char_token(TokenKind::RightBracket),
            '{' => self.read_single_char_token(TokenKind::LeftBrace),
            '}' => self.read_single_char_token(TokenKind::RightBrace),
            '=' => self.read_single_char_token(TokenKind::Equal),
            ';' => self.read_single_char_token(TokenKind::Semicolon),
            ',' => self.read_single_char_token(TokenKind::Comma),
            '.' => self.read_single_char_token(TokenKind::Dot),
            ':' => self.read_single_char_token(TokenKind::Colon),
            '$' => self.read_single_char_token(TokenKind::Dollar),
            '?' => self.read_single_char_token(TokenKind::Question),

            // Неизвестный символ
            ch => self.read_unknown(ch)?,
        };

        let token = self.finish_token(kind, start_index, start_position);
        if !kind.should_skip() {
            self.last_significant = Some(kind);
        }
        log::trace!("{}", token);
        Ok(token)
    }

    /// Возвращает все видимые токены входного текста, последним идет EOF
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();

            // Пропускаем пробелы и комментарии в финальном списке токенов
            if !token.kind.should_skip() {
                tokens.push(token);
            }

            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    /// Возвращает все токены, включая пробелы и комментарии, последним идет EOF
    pub fn tokenize_all(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    /// Пытается прочитать размер типа `(N)` прямо с позиции курсора.
    ///
    /// Если форма не совпадает, ничего не потребляет и возвращает `None`.
    pub fn scan_length(&mut self) -> Option<Token> {
        let len = self.match_length()?;
        let start_index = self.position;
        let start_position = self.current_position;
        self.advance_by(len);
        self.last_significant = Some(TokenKind::Length);
        Some(self.finish_token(TokenKind::Length, start_index, start_position))
    }

    /// Пропускает символы до `terminator` включительно или до конца ввода.
    ///
    /// Низкоуровневый примитив для восстановления после ошибки на уровне
    /// вызывающего кода; возвращает число пропущенных символов.
    pub fn skip_through(&mut self, terminator: char) -> usize {
        let mut skipped = 0;
        while let Some(ch) = self.peek() {
            self.advance();
            skipped += 1;
            if ch == terminator {
                break;
            }
        }
        self.last_significant = None;
        skipped
    }

    // === Вспомогательные методы ===

    /// Собирает токен из символов от `start_index` до курсора
    fn finish_token(&self, kind: TokenKind, start_index: usize, start: Position) -> Token {
        let text: String = self.input[start_index..self.position].iter().collect();
        Token::new(kind, text, start, self.current_position)
    }

    /// Возвращает текущий символ и продвигает позицию
    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = *self.input.get(self.position)?;
        self.position += 1;

        if ch == '\n' {
            self.current_position.line += 1;
            self.current_position.column = 1;
        } else {
            self.current_position.column += 1;
        }
        self.current_position.offset += ch.len_utf8();

        Some(ch)
    }

    /// Продвигает позицию на `count` символов
    pub(crate) fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Возвращает следующий символ без продвижения позиции
    pub(crate) fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Возвращает символ на определенном расстоянии от текущей позиции
    pub(crate) fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Проверяет символ впереди предикатом
    fn peek_is(&self, offset: usize, predicate: impl Fn(char) -> bool) -> bool {
        self.peek_ahead(offset).map_or(false, predicate)
    }

    /// Позиция символа, находящегося на `ahead` символов впереди курсора
    fn position_ahead(&self, ahead: usize) -> Position {
        let mut position = self.current_position;
        for &ch in self.input[self.position..].iter().take(ahead) {
            if ch == '\n' {
                position.line += 1;
                position.column = 1;
            } else {
                position.column += 1;
            }
            position.offset += ch.len_utf8();
        }
        position
    }

    /// Читает токен из одного символа
    fn read_single_char_token(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Нужно ли сейчас искать размер типа
    fn should_probe_length(&self) -> bool {
        self.config.length_after_types
            && self.last_significant.map_or(false, |kind| kind.takes_length())
    }

    /// Символ, с которого не начинается ни одна альтернатива
    fn read_unknown(&mut self, ch: char) -> Result<TokenKind, LexError> {
        if self.config.pass_through_unknown {
            self.advance();
            Ok(TokenKind::Passthrough)
        } else {
            Err(LexError::NoViableToken {
                position: self.current_position,
                ch,
            })
        }
    }
}
