//! CLI интерфейс для sqlscan
//!
//! Тонкая обертка над библиотекой для отладки: вывод токенов, смена регистра
//! ключевых слов и проверка текста на лексические ошибки.

use crate::common::config::{AppConfig, LexerConfig, LexerMode};
use crate::common::error::{Error, Result};
use crate::lexer::case::uppercase_keywords;
use crate::lexer::lexer::Lexer;
use crate::lexer::token::Token;
use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Файл конфигурации, который ищется в текущем каталоге
pub const DEFAULT_CONFIG_FILE: &str = "sqlscan.toml";

/// sqlscan - лексический анализатор SQL
#[derive(Parser, Debug)]
#[command(name = "sqlscan")]
#[command(about = "sqlscan - a lexical analyzer for a SQL dialect")]
#[command(version = crate::VERSION)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Режим лексера (full, upper)
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Вывести токены
    Tokens {
        /// Файл с SQL или `-` для stdin
        input: String,

        /// Выводить также пробелы и комментарии
        #[arg(long)]
        all: bool,

        /// Вывод в JSON
        #[arg(long)]
        json: bool,
    },

    /// Перевести ключевые слова в верхний регистр
    Upper {
        /// Файл с SQL или `-` для stdin
        input: String,
    },

    /// Проверить текст на лексические ошибки
    Check {
        /// Файл с SQL или `-` для stdin
        input: String,
    },
}

impl Cli {
    /// Загружает конфигурацию: файл, затем переменные окружения, затем аргументы
    pub fn load_config(&self) -> Result<AppConfig> {
        self.load_config_with(|name| std::env::var(name).ok())
    }

    /// Загружает конфигурацию с заданным источником переменных окружения
    pub(crate) fn load_config_with(
        &self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<AppConfig> {
        let config = if let Some(config_path) = &self.config {
            AppConfig::from_file(config_path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            AppConfig::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            AppConfig::default()
        };

        let mut config = config.with_overrides(var)?;

        if let Some(mode) = &self.mode {
            let mode: LexerMode = mode.parse().map_err(Error::configuration)?;
            if mode != config.lexer.mode {
                config.lexer = LexerConfig::for_mode(mode);
            }
        }

        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Выполняет команду, выводя результат в `out`
    pub fn execute(&self, config: &AppConfig, out: &mut impl Write) -> Result<()> {
        match &self.command {
            Commands::Tokens { input, all, json } => {
                let source = read_input(input)?;
                self.print_tokens(&source, config, *all, *json, out)
            }
            Commands::Upper { input } => {
                let source = read_input(input)?;
                let rewritten = uppercase_keywords(&source, &config.lexer)?;
                out.write_all(rewritten.as_bytes())?;
                Ok(())
            }
            Commands::Check { input } => {
                let source = read_input(input)?;
                let mut lexer = Lexer::with_config(&source, config.lexer.clone());
                let tokens = lexer.tokenize()?;
                for diagnostic in lexer.diagnostics() {
                    writeln!(out, "warning: {}", diagnostic)?;
                }
                writeln!(out, "ok: {} tokens", tokens.len().saturating_sub(1))?;
                Ok(())
            }
        }
    }

    fn print_tokens(
        &self,
        source: &str,
        config: &AppConfig,
        all: bool,
        json: bool,
        out: &mut impl Write,
    ) -> Result<()> {
        let mut lexer = Lexer::with_config(source, config.lexer.clone());
        let tokens: Vec<Token> = if all {
            lexer.tokenize_all()?
        } else {
            lexer.tokenize()?
        };

        if json {
            serde_json::to_writer_pretty(&mut *out, &tokens)?;
            writeln!(out)?;
            return Ok(());
        }

        for token in tokens.iter().filter(|t| !t.is_eof()) {
            writeln!(out, "{}\t{:?}\t{}", token.kind, token.text, token.start)?;
        }
        Ok(())
    }
}

/// Читает исходный текст из файла или stdin (`-`)
pub fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str], sql: &str) -> Result<String> {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("query.sql");
        std::fs::write(&path, sql).unwrap();

        let mut argv = vec!["sqlscan"];
        argv.extend_from_slice(args);
        let path_str = path.to_str().unwrap().to_string();
        argv.push(&path_str);

        let cli = Cli::try_parse_from(argv).unwrap();
        let config = AppConfig::default();
        let mut out = Vec::new();
        cli.execute(&config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_tokens_command() {
        let output = run(&["tokens"], "SELECT a").unwrap();
        assert_eq!(output, "SELECT\t\"SELECT\"\t1:1\nIDENTIFIER\t\"a\"\t1:8\n");
    }

    #[test]
    fn test_tokens_json() {
        let output = run(&["tokens", "--json"], "a;").unwrap();
        let parsed: Vec<Token> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 3);
        assert!(parsed[2].is_eof());
    }

    #[test]
    fn test_upper_command() {
        let output = run(&["upper"], "select x from y where z").unwrap();
        assert_eq!(output, "SELECT x FROM y WHERE z");
    }

    #[test]
    fn test_check_command_reports_error() {
        let err = run(&["check"], "SELECT\n  'abc").unwrap_err();
        assert_eq!(err.position().map(|p| (p.line, p.column)), Some((2, 3)));
    }

    #[test]
    fn test_check_command_warns_on_open_comment() {
        let output = run(&["check"], "SELECT 1 /* open").unwrap();
        assert!(output.starts_with("warning: 1:10:"));
        assert!(output.ends_with("ok: 2 tokens\n"));
    }

    /// Пишет конфигурацию во временный каталог и разбирает аргументы с `--config`
    fn cli_with_config(toml: &str, args: &[&str]) -> (tempfile::TempDir, Cli) {
        let dir = tempfile::TempDir::new().unwrap();
        let path: PathBuf = dir.path().join("sqlscan.toml");
        std::fs::write(&path, toml).unwrap();

        let path_str = path.to_str().unwrap().to_string();
        let mut argv = vec!["sqlscan", "--config", path_str.as_str()];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["upper", "-"]);
        let cli = Cli::try_parse_from(argv).unwrap();
        (dir, cli)
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_mode_flag() {
        let (_dir, cli) = cli_with_config("", &["--mode", "upper"]);
        let config = cli.load_config_with(no_env).unwrap();
        assert_eq!(config.lexer, LexerConfig::upper());

        let (_dir, cli) = cli_with_config("", &["--mode", "weird"]);
        assert!(cli.load_config_with(no_env).is_err());
    }

    #[test]
    fn test_config_file_selects_mode() {
        let (_dir, cli) = cli_with_config("[lexer]\nmode = \"upper\"\n", &[]);
        let config = cli.load_config_with(no_env).unwrap();
        assert_eq!(config.lexer, LexerConfig::upper());
    }

    #[test]
    fn test_config_precedence() {
        let toml = "[lexer]\nmode = \"upper\"\ncase_insensitive_keywords = false\n\
                    [logging]\nlevel = \"info\"\n";

        // Переменные окружения дополняют файл
        let (_dir, cli) = cli_with_config(toml, &[]);
        let config = cli
            .load_config_with(|name| (name == "SQLSCAN_STRICT_LITERALS").then(|| "false".into()))
            .unwrap();
        assert_eq!(config.lexer.mode, LexerMode::Upper);
        assert!(!config.lexer.case_insensitive_keywords);
        assert!(!config.lexer.strict_literal_chars);
        assert_eq!(config.logging.level, "info");

        // Режим из окружения переопределяет файл
        let (_dir, cli) = cli_with_config(toml, &[]);
        let config = cli
            .load_config_with(|name| (name == "SQLSCAN_MODE").then(|| "full".into()))
            .unwrap();
        assert_eq!(config.lexer, LexerConfig::full());

        // Аргументы переопределяют окружение
        let (_dir, cli) = cli_with_config(toml, &["--mode", "upper", "--log-level", "debug"]);
        let config = cli
            .load_config_with(|name| match name {
                "SQLSCAN_MODE" => Some("full".into()),
                "SQLSCAN_LOG_LEVEL" => Some("warn".into()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.lexer, LexerConfig::upper());
        assert_eq!(config.logging.level, "debug");
    }
}
