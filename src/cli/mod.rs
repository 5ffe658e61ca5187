//! Command-line entry surface: flag parsing and the stdin command loop.

mod dispatch;

pub use dispatch::run;

use clap::Parser;

use crate::config::{Config, LogFormat};

/// `relindex`: an incremental maximum in-degree index driven by a stream
/// of commands read from stdin.
#[derive(Debug, Parser)]
#[command(name = "relindex", version, about)]
pub struct Cli {
    /// Default log filter, overridden by `RUST_LOG` if set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Log output encoding.
    #[arg(long, value_enum, default_value = "pretty")]
    pub log_format: LogFormat,
}

impl Cli {
    /// Extracts the logging configuration carried by these flags.
    #[must_use]
    pub fn config(&self) -> Config {
        Config::new(self.log_level.clone(), self.log_format)
    }
}
