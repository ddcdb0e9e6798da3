// Методы чтения отдельных видов токенов для лексического анализатора.
//
// Каждый метод вызывается, когда курсор стоит на первом символе токена,
// и возвращает его вид, сдвинув курсор ровно за последний символ.

impl Lexer {
    /// Читает последовательность пробельных символов
    fn read_whitespace(&mut self) -> TokenKind {
        while self.peek_is(0, classifier::is_whitespace) {
            self.advance();
        }
        TokenKind::Whitespace
    }

    /// Читает блочный комментарий до первого `*/`
    fn read_block_comment(&mut self) -> Result<TokenKind, LexError> {
        // "/*" занимает два символа, поэтому "/*/" комментарий не закрывает
        let mut offset = 2;
        loop {
            match self.peek_ahead(offset) {
                Some('*') if self.peek_ahead(offset + 1) == Some('/') => {
                    self.advance_by(offset + 2);
                    return Ok(TokenKind::BlockComment);
                }
                Some(_) => offset += 1,
                None => break,
            }
        }

        let start = self.current_position;
        match self.config.unterminated_comment {
            CommentPolicy::Error => Err(LexError::UnterminatedComment { position: start }),
            CommentPolicy::Diagnostic => {
                log::warn!("{}: block comment runs to end of input", start);
                self.diagnostics
                    .push(Diagnostic::new(DiagnosticKind::UnterminatedComment, start));
                self.advance_by(offset);
                Ok(TokenKind::BlockComment)
            }
        }
    }

    /// Читает однострочный комментарий вместе с завершающим переводом строки
    fn read_line_comment(&mut self) -> TokenKind {
        self.advance_by(2);
        while let Some(ch) = self.advance() {
            if ch == '\n' {
                break;
            }
        }
        TokenKind::LineComment
    }

    /// Читает строковый литерал в одинарных кавычках
    fn read_string_literal(&mut self) -> Result<TokenKind, LexError> {
        match self.match_quoted('\'') {
            Ok((len, _)) => {
                self.advance_by(len);
                Ok(TokenKind::StringLiteral)
            }
            Err(_) if self.config.pass_through_unknown => {
                self.advance();
                Ok(TokenKind::Passthrough)
            }
            Err(err) => Err(err),
        }
    }

    /// Читает колонку или путь в двойных кавычках
    fn read_quoted_identifier(&mut self) -> Result<TokenKind, LexError> {
        match self.match_quoted('"') {
            Ok((len, has_path_separator)) => {
                self.advance_by(len);
                Ok(if has_path_separator {
                    TokenKind::Path
                } else {
                    TokenKind::Column
                })
            }
            Err(_) if self.config.pass_through_unknown => {
                self.advance();
                Ok(TokenKind::Passthrough)
            }
            Err(err) => Err(err),
        }
    }

    /// Находит закрывающую кавычку того же вида, что и открывающая.
    ///
    /// Экранирование кавычки не поддерживается: первая же такая кавычка
    /// закрывает литерал. Возвращает длину литерала с кавычками и признак
    /// наличия разделителей пути в теле.
    fn match_quoted(&self, quote: char) -> Result<(usize, bool), LexError> {
        let mut close = 1;
        loop {
            match self.peek_ahead(close) {
                Some(ch) if ch == quote => break,
                Some(_) => close += 1,
                None => {
                    return Err(LexError::UnterminatedLiteral {
                        position: self.current_position,
                        quote,
                    })
                }
            }
        }

        let mut has_path_separator = false;
        for offset in 1..close {
            let ch = self.input[self.position + offset];
            if self.config.strict_literal_chars && !classifier::is_string_body_char(ch) {
                return Err(LexError::NoViableToken {
                    position: self.position_ahead(offset),
                    ch,
                });
            }
            has_path_separator |= classifier::is_path_separator(ch);
        }

        Ok((close + 1, has_path_separator))
    }

    /// Читает число, дату или время, либо идентификатор, начинающийся с цифры
    fn read_number_or_shape(&mut self) -> TokenKind {
        let shape = if self.config.date_time_literals {
            self.match_date()
                .map(|len| (len, TokenKind::DateFormat))
                .or_else(|| self.match_time().map(|len| (len, TokenKind::TimeFormat)))
        } else {
            None
        };

        let digits = self.run_length(0, classifier::is_digit);
        let word = self.run_length(0, classifier::is_identifier_char);

        let (len, kind) = match shape {
            Some((len, kind)) if len >= word => (len, kind),
            _ if word > digits => (word, TokenKind::Identifier),
            _ => (digits, TokenKind::DecimalLiteral),
        };
        self.advance_by(len);
        kind
    }

    /// Дата: `d[0-2]/dd` с необязательным `/dddd`
    fn match_date(&self) -> Option<usize> {
        if !self.match_two_digit_head('/') {
            return None;
        }
        let with_year = self.peek_ahead(5) == Some('/') && self.digits_at(6, 4);
        if with_year && !self.peek_is(10, classifier::is_digit) {
            return Some(10);
        }
        if !self.peek_is(5, classifier::is_digit) {
            return Some(5);
        }
        None
    }

    /// Время: `d[0-2]:dd` с необязательными `:dd` и `am`/`pm`
    fn match_time(&self) -> Option<usize> {
        if !self.match_two_digit_head(':') {
            return None;
        }
        let mut candidates = Vec::with_capacity(2);
        if self.peek_ahead(5) == Some(':') && self.digits_at(6, 2) {
            candidates.push(8);
        }
        candidates.push(5);

        candidates.into_iter().find_map(|len| {
            let suffix = (self.peek_ahead(len), self.peek_ahead(len + 1));
            let has_suffix = matches!(suffix, (Some('a'), Some('m')) | (Some('p'), Some('m')))
                && !self.peek_is(len + 2, classifier::is_identifier_char);
            if has_suffix {
                Some(len + 2)
            } else if !self.peek_is(len, classifier::is_digit) {
                Some(len)
            } else {
                None
            }
        })
    }

    /// Общее начало даты и времени: цифра, цифра 0-2, разделитель, две цифры
    fn match_two_digit_head(&self, separator: char) -> bool {
        self.peek_is(0, classifier::is_digit)
            && self.peek_is(1, |ch| matches!(ch, '0'..='2'))
            && self.peek_ahead(2) == Some(separator)
            && self.digits_at(3, 2)
    }

    fn digits_at(&self, offset: usize, count: usize) -> bool {
        (offset..offset + count).all(|i| self.peek_is(i, classifier::is_digit))
    }

    /// Длина серии символов, удовлетворяющих предикату, начиная с `offset`
    fn run_length(&self, offset: usize, predicate: impl Fn(char) -> bool) -> usize {
        self.input[(self.position + offset).min(self.input.len())..]
            .iter()
            .take_while(|&&ch| predicate(ch))
            .count()
    }

    /// Размер типа: `(` цифры `)`
    fn match_length(&self) -> Option<usize> {
        if self.peek() != Some('(') {
            return None;
        }
        let digits = self.run_length(1, classifier::is_digit);
        if digits > 0 && self.peek_ahead(digits + 1) == Some(')') {
            Some(digits + 2)
        } else {
            None
        }
    }

    /// Читает идентификатор или ключевое слово.
    ///
    /// Ключевое слово распознается только по лексеме целиком:
    /// `SELECTOR` остается идентификатором.
    fn read_identifier_or_keyword(&mut self) -> TokenKind {
        let len = self.run_length(0, classifier::is_identifier_char);
        let word: String = self.input[self.position..self.position + len].iter().collect();
        self.advance_by(len);

        self.keywords
            .lookup(&word, self.config.case_insensitive_keywords)
            .unwrap_or(TokenKind::Identifier)
    }

    /// Читает серию символов одного национального алфавита
    fn read_script_run(&mut self) -> TokenKind {
        let Some(script) = self.peek().and_then(classifier::script_of) else {
            self.advance();
            return TokenKind::Passthrough;
        };
        while self.peek().and_then(classifier::script_of) == Some(script) {
            self.advance();
        }
        match script {
            Script::Korean => TokenKind::Korean,
            Script::Chinese => TokenKind::Chinese,
            Script::Japanese => TokenKind::Japanese,
        }
    }

    /// Читает оператор: составной вариант имеет приоритет над односимвольным
    fn read_operator(&mut self) -> TokenKind {
        let first = self.peek();
        let second = if self.config.compound_operators {
            self.peek_ahead(1)
        } else {
            None
        };

        let (len, kind) = match (first, second) {
            (Some('<'), Some('=')) => (2, TokenKind::LessEqual),
            (Some('<'), Some('>')) => (2, TokenKind::NotEqual),
            (Some('<'), _) => (1, TokenKind::Less),
            (Some('>'), Some('=')) => (2, TokenKind::GreaterEqual),
            (Some('>'), _) => (1, TokenKind::Greater),
            (Some('+'), Some('=')) => (2, TokenKind::PlusAssign),
            (Some('+'), _) => (1, TokenKind::Plus),
            (Some('-'), Some('=')) => (2, TokenKind::MinusAssign),
            (Some('-'), _) => (1, TokenKind::Minus),
            (Some('*'), Some('=')) => (2, TokenKind::StarAssign),
            (Some('*'), _) => (1, TokenKind::Star),
            (Some('/'), Some('=')) => (2, TokenKind::SlashAssign),
            (Some('/'), _) => (1, TokenKind::Slash),
            (Some('&'), Some('=')) => (2, TokenKind::AmpAssign),
            (Some('&'), _) => (1, TokenKind::Amp),
            (Some('|'), Some('=')) => (2, TokenKind::PipeAssign),
            (Some('|'), Some('|')) => (2, TokenKind::Connect),
            (Some('|'), _) => (1, TokenKind::Pipe),
            (Some('^'), Some('=')) => (2, TokenKind::CaretAssign),
            (Some('^'), _) => (1, TokenKind::Caret),
            (Some('%'), Some('=')) => (2, TokenKind::PercentAssign),
            (Some('%'), _) => (1, TokenKind::Percent),
            _ => (1, TokenKind::Passthrough),
        };
        self.advance_by(len);
        kind
    }
}
