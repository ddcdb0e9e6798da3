//! Токены для SQL лексера sqlscan
//!
//! Определяет все виды токенов, которые может распознать лексический анализатор:
//! ключевые слова диалекта, идентификаторы, литералы, операторы, разделители,
//! классы символов национальных алфавитов, пробелы и комментарии.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Позиция в исходном тексте
///
/// Строка и колонка считаются с единицы (колонка в символах),
/// смещение - в байтах от начала исходного текста.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Канал, в который попадает токен
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Основной поток токенов для парсера и подсветки
    Default,
    /// Пробелы и комментарии: сканируются, но скрыты от потребителя
    Hidden,
}

/// Токен с позицией и исходным текстом
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Точная подстрока исходного текста (регистр сохраняется)
    pub text: String,
    pub start: Position,
    pub end: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: String, start: Position, end: Position) -> Self {
        Self {
            kind,
            text,
            start,
            end,
        }
    }

    /// Маркер конца ввода нулевой длины
    pub fn eof(position: Position) -> Self {
        Self::new(TokenKind::Eof, String::new(), position, position)
    }

    pub fn start_offset(&self) -> usize {
        self.start.offset
    }

    pub fn end_offset(&self) -> usize {
        self.end.offset
    }

    pub fn line(&self) -> usize {
        self.start.line
    }

    pub fn column(&self) -> usize {
        self.start.column
    }

    /// Длина токена в байтах
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn channel(&self) -> Channel {
        self.kind.channel()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}('{}') at {}", self.kind, self.text, self.start)
    }
}

/// Виды токенов SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenKind {
    // === Ключевые слова ===
    Action,
    Add,
    All,
    Alter,
    Am,
    And,
    As,
    Asc,
    Attribute,
    Autocommit,
    AutoIncrement,
    Between,
    Bit,
    By,
    Call,
    Case,
    Cache,
    Cascade,
    Change,
    Char,
    Character,
    Check,
    Class,
    Commit,
    Constraint,
    Create,
    Date,
    Decimal,
    Deferred,
    Desc,
    Default,
    Delete,
    Difference,
    Distinct,
    Double,
    Drop,
    Else,
    End,
    Except,
    Exists,
    File,
    Float,
    Foreign,
    From,
    Function,
    Group,
    Having,
    In,
    Index,
    Inherit,
    Inner,
    Insert,
    Int,
    Integer,
    Intersection,
    Into,
    Is,
    Join,
    Key,
    Like,
    List,
    Left,
    Method,
    Monetary,
    Multiset,
    MultisetOf,
    Nchar,
    No,
    Not,
    Null,
    Numeric,
    Object,
    Of,
    Off,
    On,
    Only,
    Option,
    Or,
    Order,
    Outer,
    Pm,
    Precision,
    Primary,
    Query,
    Real,
    References,
    Rename,
    Restrict,
    Right,
    Rollback,
    Select,
    Sequence,
    SequenceOf,
    Set,
    Share,
    Smallint,
    Reverse,
    /// Тип STRING (не путать со строковым литералом)
    StringType,
    Subclass,
    Superclass,
    Table,
    Time,
    Timestamp,
    Then,
    Trigger,
    Triggers,
    To,
    Values,
    Union,
    Unique,
    Update,
    Using,
    Varchar,
    Varying,
    Vclass,
    View,
    When,
    Where,
    With,
    Work,

    // === Разделители ===
    Semicolon,    // ;
    Comma,        // ,
    Dot,          // .
    Colon,        // :
    Dollar,       // $
    Question,     // ?
    LeftParen,    // (
    RightParen,   // )
    LeftBracket,  // [
    RightBracket, // ]
    LeftBrace,    // {
    RightBrace,   // }

    // === Операторы ===
    Equal,         // =
    NotEqual,      // <>
    Less,          // <
    Greater,       // >
    LessEqual,     // <=
    GreaterEqual,  // >=
    Plus,          // +
    Minus,         // -
    Star,          // *
    Slash,         // /
    Percent,       // %
    Amp,           // &
    Pipe,          // |
    Caret,         // ^
    Connect,       // ||
    PlusAssign,    // +=
    MinusAssign,   // -=
    StarAssign,    // *=
    SlashAssign,   // /=
    AmpAssign,     // &=
    PipeAssign,    // |=
    CaretAssign,   // ^=
    PercentAssign, // %=

    // === Идентификаторы и литералы ===
    Identifier,
    /// Последовательность цифр без разделителей
    DecimalLiteral,
    /// Строка в одинарных кавычках
    StringLiteral,
    /// Идентификатор (колонка) в двойных кавычках
    Column,
    /// Путь в двойных кавычках (содержит `/`, `:` или `\`)
    Path,
    /// Размер типа вида `(10)`
    Length,
    /// Дата вида `12/25` или `12/25/2024`
    DateFormat,
    /// Время вида `12:30`, `12:30:15`, `11:45pm`
    TimeFormat,

    // === Национальные алфавиты вне кавычек ===
    Korean,
    Chinese,
    Japanese,

    // === Специальные токены ===
    Whitespace,
    BlockComment,
    LineComment,
    /// Нераспознанный символ, пропущенный как есть (упрощенный режим)
    Passthrough,
    Eof,
}

impl TokenKind {
    /// Все ключевые слова полного словаря
    pub const KEYWORDS: [TokenKind; 120] = [
        TokenKind::Action,
        TokenKind::Add,
        TokenKind::All,
        TokenKind::Alter,
        TokenKind::Am,
        TokenKind::And,
        TokenKind::As,
        TokenKind::Asc,
        TokenKind::Attribute,
        TokenKind::Autocommit,
        TokenKind::AutoIncrement,
        TokenKind::Between,
        TokenKind::Bit,
        TokenKind::By,
        TokenKind::Call,
        TokenKind::Case,
        TokenKind::Cache,
        TokenKind::Cascade,
        TokenKind::Change,
        TokenKind::Char,
        TokenKind::Character,
        TokenKind::Check,
        TokenKind::Class,
        TokenKind::Commit,
        TokenKind::Constraint,
        TokenKind::Create,
        TokenKind::Date,
        TokenKind::Decimal,
        TokenKind::Deferred,
        TokenKind::Desc,
        TokenKind::Default,
        TokenKind::Delete,
        TokenKind::Difference,
        TokenKind::Distinct,
        TokenKind::Double,
        TokenKind::Drop,
        TokenKind::Else,
        TokenKind::End,
        TokenKind::Except,
        TokenKind::Exists,
        TokenKind::File,
        TokenKind::Float,
        TokenKind::Foreign,
        TokenKind::From,
        TokenKind::Function,
        TokenKind::Group,
        TokenKind::Having,
        TokenKind::In,
        TokenKind::Index,
        TokenKind::Inherit,
        TokenKind::Inner,
        TokenKind::Insert,
        TokenKind::Int,
        TokenKind::Integer,
        TokenKind::Intersection,
        TokenKind::Into,
        TokenKind::Is,
        TokenKind::Join,
        TokenKind::Key,
        TokenKind::Like,
        TokenKind::List,
        TokenKind::Left,
        TokenKind::Method,
        TokenKind::Monetary,
        TokenKind::Multiset,
        TokenKind::MultisetOf,
        TokenKind::Nchar,
        TokenKind::No,
        TokenKind::Not,
        TokenKind::Null,
        TokenKind::Numeric,
        TokenKind::Object,
        TokenKind::Of,
        TokenKind::Off,
        TokenKind::On,
        TokenKind::Only,
        TokenKind::Option,
        TokenKind::Or,
        TokenKind::Order,
        TokenKind::Outer,
        TokenKind::Pm,
        TokenKind::Precision,
        TokenKind::Primary,
        TokenKind::Query,
        TokenKind::Real,
        TokenKind::References,
        TokenKind::Rename,
        TokenKind::Restrict,
        TokenKind::Right,
        TokenKind::Rollback,
        TokenKind::Select,
        TokenKind::Sequence,
        TokenKind::SequenceOf,
        TokenKind::Set,
        TokenKind::Share,
        TokenKind::Smallint,
        TokenKind::Reverse,
        TokenKind::StringType,
        TokenKind::Subclass,
        TokenKind::Superclass,
        TokenKind::Table,
        TokenKind::Time,
        TokenKind::Timestamp,
        TokenKind::Then,
        TokenKind::Trigger,
        TokenKind::Triggers,
        TokenKind::To,
        TokenKind::Values,
        TokenKind::Union,
        TokenKind::Unique,
        TokenKind::Update,
        TokenKind::Using,
        TokenKind::Varchar,
        TokenKind::Varying,
        TokenKind::Vclass,
        TokenKind::View,
        TokenKind::When,
        TokenKind::Where,
        TokenKind::With,
        TokenKind::Work,
    ];

    /// Написание ключевого слова в верхнем регистре
    pub fn keyword_spelling(&self) -> Option<&'static str> {
        let spelling = match self {
            TokenKind::Action => "ACTION",
            TokenKind::Add => "ADD",
            TokenKind::All => "ALL",
            TokenKind::Alter => "ALTER",
            TokenKind::Am => "AM",
            TokenKind::And => "AND",
            TokenKind::As => "AS",
            TokenKind::Asc => "ASC",
            TokenKind::Attribute => "ATTRIBUTE",
            TokenKind::Autocommit => "AUTOCOMMIT",
            TokenKind::AutoIncrement => "AUTO_INCREMENT",
            TokenKind::Between => "BETWEEN",
            TokenKind::Bit => "BIT",
            TokenKind::By => "BY",
            TokenKind::Call => "CALL",
            TokenKind::Case => "CASE",
            TokenKind::Cache => "CACHE",
            TokenKind::Cascade => "CASCADE",
            TokenKind::Change => "CHANGE",
            TokenKind::Char => "CHAR",
            TokenKind::Character => "CHARACTER",
            TokenKind::Check => "CHECK",
            TokenKind::Class => "CLASS",
            TokenKind::Commit => "COMMIT",
            TokenKind::Constraint => "CONSTRAINT",
            TokenKind::Create => "CREATE",
            TokenKind::Date => "DATE",
            TokenKind::Decimal => "DECIMAL",
            TokenKind::Deferred => "DEFERRED",
            TokenKind::Desc => "DESC",
            TokenKind::Default => "DEFAULT",
            TokenKind::Delete => "DELETE",
            TokenKind::Difference => "DIFFERENCE",
            TokenKind::Distinct => "DISTINCT",
            TokenKind::Double => "DOUBLE",
            TokenKind::Drop => "DROP",
            TokenKind::Else => "ELSE",
            TokenKind::End => "END",
            TokenKind::Except => "EXCEPT",
            TokenKind::Exists => "EXISTS",
            TokenKind::File => "FILE",
            TokenKind::Float => "FLOAT",
            TokenKind::Foreign => "FOREIGN",
            TokenKind::From => "FROM",
            TokenKind::Function => "FUNCTION",
            TokenKind::Group => "GROUP",
            TokenKind::Having => "HAVING",
            TokenKind::In => "IN",
            TokenKind::Index => "INDEX",
            TokenKind::Inherit => "INHERIT",
            TokenKind::Inner => "INNER",
            TokenKind::Insert => "INSERT",
            TokenKind::Int => "INT",
            TokenKind::Integer => "INTEGER",
            TokenKind::Intersection => "INTERSECTION",
            TokenKind::Into => "INTO",
            TokenKind::Is => "IS",
            TokenKind::Join => "JOIN",
            TokenKind::Key => "KEY",
            TokenKind::Like => "LIKE",
            TokenKind::List => "LIST",
            TokenKind::Left => "LEFT",
            TokenKind::Method => "METHOD",
            TokenKind::Monetary => "MONETARY",
            TokenKind::Multiset => "MULTISET",
            TokenKind::MultisetOf => "MULTISET_OF",
            TokenKind::Nchar => "NCHAR",
            TokenKind::No => "NO",
            TokenKind::Not => "NOT",
            TokenKind::Null => "NULL",
            TokenKind::Numeric => "NUMERIC",
            TokenKind::Object => "OBJECT",
            TokenKind::Of => "OF",
            TokenKind::Off => "OFF",
            TokenKind::On => "ON",
            TokenKind::Only => "ONLY",
            TokenKind::Option => "OPTION",
            TokenKind::Or => "OR",
            TokenKind::Order => "ORDER",
            TokenKind::Outer => "OUTER",
            TokenKind::Pm => "PM",
            TokenKind::Precision => "PRECISION",
            TokenKind::Primary => "PRIMARY",
            TokenKind::Query => "QUERY",
            TokenKind::Real => "REAL",
            TokenKind::References => "REFERENCES",
            TokenKind::Rename => "RENAME",
            TokenKind::Restrict => "RESTRICT",
            TokenKind::Right => "RIGHT",
            TokenKind::Rollback => "ROLLBACK",
            TokenKind::Select => "SELECT",
            TokenKind::Sequence => "SEQUENCE",
            TokenKind::SequenceOf => "SEQUENCE_OF",
            TokenKind::Set => "SET",
            TokenKind::Share => "SHARE",
            TokenKind::Smallint => "SMALLINT",
            TokenKind::Reverse => "REVERSE",
            TokenKind::StringType => "STRING",
            TokenKind::Subclass => "SUBCLASS",
            TokenKind::Superclass => "SUPERCLASS",
            TokenKind::Table => "TABLE",
            TokenKind::Time => "TIME",
            TokenKind::Timestamp => "TIMESTAMP",
            TokenKind::Then => "THEN",
            TokenKind::Trigger => "TRIGGER",
            TokenKind::Triggers => "TRIGGERS",
            TokenKind::To => "TO",
            TokenKind::Values => "VALUES",
            TokenKind::Union => "UNION",
            TokenKind::Unique => "UNIQUE",
            TokenKind::Update => "UPDATE",
            TokenKind::Using => "USING",
            TokenKind::Varchar => "VARCHAR",
            TokenKind::Varying => "VARYING",
            TokenKind::Vclass => "VCLASS",
            TokenKind::View => "VIEW",
            TokenKind::When => "WHEN",
            TokenKind::Where => "WHERE",
            TokenKind::With => "WITH",
            TokenKind::Work => "WORK",
            _ => return None,
        };
        Some(spelling)
    }

    /// Проверяет, является ли токен ключевым словом
    pub fn is_keyword(&self) -> bool {
        self.keyword_spelling().is_some()
    }

    /// Проверяет, является ли токен оператором
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::Less
                | TokenKind::Greater
                | TokenKind::LessEqual
                | TokenKind::GreaterEqual
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Amp
                | TokenKind::Pipe
                | TokenKind::Caret
                | TokenKind::Connect
                | TokenKind::PlusAssign
                | TokenKind::MinusAssign
                | TokenKind::StarAssign
                | TokenKind::SlashAssign
                | TokenKind::AmpAssign
                | TokenKind::PipeAssign
                | TokenKind::CaretAssign
                | TokenKind::PercentAssign
        )
    }

    /// Проверяет, является ли токен разделителем
    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            TokenKind::Semicolon
                | TokenKind::Comma
                | TokenKind::Dot
                | TokenKind::Colon
                | TokenKind::Dollar
                | TokenKind::Question
                | TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::LeftBracket
                | TokenKind::RightBracket
                | TokenKind::LeftBrace
                | TokenKind::RightBrace
        )
    }

    /// Проверяет, является ли токен литералом
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::DecimalLiteral
                | TokenKind::StringLiteral
                | TokenKind::Column
                | TokenKind::Path
                | TokenKind::Length
                | TokenKind::DateFormat
                | TokenKind::TimeFormat
        )
    }

    /// Символы национальных алфавитов вне кавычек
    pub fn is_script(&self) -> bool {
        matches!(self, TokenKind::Korean | TokenKind::Chinese | TokenKind::Japanese)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::BlockComment | TokenKind::LineComment)
    }

    /// Канал токена: пробелы и комментарии скрыты от потребителя
    pub fn channel(&self) -> Channel {
        match self {
            TokenKind::Whitespace | TokenKind::BlockComment | TokenKind::LineComment => {
                Channel::Hidden
            }
            _ => Channel::Default,
        }
    }

    /// Проверяет, следует ли пропустить токен при разборе
    pub fn should_skip(&self) -> bool {
        self.channel() == Channel::Hidden
    }

    /// Типы, после которых лексер ищет размер вида `(10)`
    pub fn takes_length(&self) -> bool {
        matches!(
            self,
            TokenKind::Char
                | TokenKind::Character
                | TokenKind::Varchar
                | TokenKind::Nchar
                | TokenKind::Bit
                | TokenKind::Varying
                | TokenKind::Numeric
                | TokenKind::Decimal
                | TokenKind::Float
                | TokenKind::Double
                | TokenKind::Precision
                | TokenKind::StringType
        )
    }

    /// Каноническое написание вида токена
    pub fn as_str(&self) -> &'static str {
        if let Some(spelling) = self.keyword_spelling() {
            return spelling;
        }
        match self {
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Colon => ":",
            TokenKind::Dollar => "$",
            TokenKind::Question => "?",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Equal => "=",
            TokenKind::NotEqual => "<>",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LessEqual => "<=",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Amp => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Connect => "||",
            TokenKind::PlusAssign => "+=",
            TokenKind::MinusAssign => "-=",
            TokenKind::StarAssign => "*=",
            TokenKind::SlashAssign => "/=",
            TokenKind::AmpAssign => "&=",
            TokenKind::PipeAssign => "|=",
            TokenKind::CaretAssign => "^=",
            TokenKind::PercentAssign => "%=",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::DecimalLiteral => "DECIMAL_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Column => "COLUMN",
            TokenKind::Path => "PATH",
            TokenKind::Length => "LENGTH",
            TokenKind::DateFormat => "DATE_FORMAT",
            TokenKind::TimeFormat => "TIME_FORMAT",
            TokenKind::Korean => "KOREAN",
            TokenKind::Chinese => "CHINESE",
            TokenKind::Japanese => "JAPANESE",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::BlockComment => "BLOCK_COMMENT",
            TokenKind::LineComment => "LINE_COMMENT",
            TokenKind::Passthrough => "PASSTHROUGH",
            TokenKind::Eof => "EOF",
            // ключевые слова обработаны выше
            _ => "KEYWORD",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
