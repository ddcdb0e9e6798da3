//! Общие типы и утилиты для sqlscan

pub mod config;
pub mod error;
pub mod logging;

#[cfg(test)]
pub mod test_utils;

pub use config::*;
pub use error::{Diagnostic, DiagnosticKind, Error, LexError, Result};
pub use logging::init_logging;
