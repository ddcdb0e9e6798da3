//! Настройка логирования для sqlscan
//!
//! Библиотека пишет через фасад `log`; исполняемый файл устанавливает
//! подписчика `tracing-subscriber` и перенаправляет в него записи `log`.

use crate::common::config::LoggingConfig;
use crate::common::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Строит фильтр: `RUST_LOG` имеет приоритет над уровнем из конфигурации
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(&config.level),
    }
    .map_err(|e| Error::configuration(format!("Invalid log filter: {}", e)))
}

/// Устанавливает глобального подписчика.
///
/// Повторный вызов возвращает ошибку вместо паники.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    tracing_log::LogTracer::init()
        .map_err(|e| Error::internal(format!("Failed to bridge log records: {}", e)))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(config.with_target)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::internal(format!("Failed to install subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_levels() {
        for level in ["trace", "debug", "info", "warn", "error", "off", "sqlscan=debug"] {
            let config = LoggingConfig {
                level: level.to_string(),
                ..LoggingConfig::default()
            };
            if std::env::var(EnvFilter::DEFAULT_ENV).is_err() {
                assert!(build_filter(&config).is_ok(), "{}", level);
            }
        }
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
