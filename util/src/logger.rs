//! `tracing` bootstrap for the grader binaries.
//!
//! Standard output carries the grading report, so log lines go to a daily
//! rolling file and, when enabled, to stderr.

use std::fs;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::AppConfig;

/// Installs the global subscriber. Keep the returned guard alive until exit so
/// buffered file lines are flushed. Returns `None` when the log directory
/// cannot be created; grading proceeds without file logs in that case.
pub fn init_logging(config: &AppConfig) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = config.log_to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(true)
    });

    let (file_layer, guard) = match fs::create_dir_all(&config.log_dir) {
        Ok(()) => {
            let appender = rolling::daily(&config.log_dir, &config.log_file);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("could not create log directory {}: {e}", config.log_dir);
            (None, None)
        }
    };

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    guard
}
