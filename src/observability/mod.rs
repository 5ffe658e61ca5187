//! Structured logging setup.
//!
//! The command loop never logs command contents or report output:
//! everything observable on stdout stays byte-exact regardless of log
//! level. Diagnostics (entity/type counts, recompute triggers) go to
//! stderr at `trace`/`debug`, so they're invisible at the default level.

use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat};

/// Initializes the global `tracing` subscriber from `config`.
///
/// Honors `RUST_LOG` if set; otherwise falls back to `config.log_level`.
/// All output goes to stderr, leaving stdout free for `report`.
pub fn init(config: &Config) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(config.log_level.clone())
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time();

    match config.log_format {
        LogFormat::Pretty => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }
}
