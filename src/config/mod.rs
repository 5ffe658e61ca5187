//! Process-level configuration: logging verbosity and format.
//!
//! The command language itself has no configuration surface: every
//! behavior it defines is fixed by the contract. This module only covers
//! the ambient flags layered on top of the stdin command loop.

use clap::ValueEnum;

/// How log lines are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, ANSI-colored when stderr is a tty.
    Pretty,
    /// Newline-delimited JSON, for harness capture.
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        Self::Pretty
    }
}

/// Resolved logging configuration, combining CLI flags with the
/// `RUST_LOG` environment variable.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default filter applied when `RUST_LOG` is unset.
    pub log_level: String,
    /// Output encoding for log lines.
    pub log_format: LogFormat,
}

impl Config {
    /// Builds a configuration from explicit CLI flag values.
    #[must_use]
    pub fn new(log_level: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            log_level: log_level.into(),
            log_format,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("warn", LogFormat::default())
    }
}
