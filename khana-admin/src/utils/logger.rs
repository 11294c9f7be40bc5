//! Logging Infrastructure
//!
//! Console output (pretty or JSON) plus an optional daily rolling file under
//! `{log_dir}/khana-admin.YYYY-MM-DD`. `RUST_LOG` overrides the configured level.

use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "khana_admin=debug")
/// * `json_format` - JSON lines instead of the human format
/// * `log_dir` - Optional directory for the daily rolling log file
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> std::io::Result<()> {
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    // Console layer (stderr, so command output on stdout stays clean)
    if json_format {
        layers.push(
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_writer(std::io::stderr)
                .with_filter(filter(level))
                .boxed(),
        );
    } else {
        layers.push(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(filter(level))
                .boxed(),
        );
    }

    if let Some(dir) = log_dir {
        let dir = Path::new(dir);
        fs::create_dir_all(dir)?;
        let appender = RollingFileAppender::new(Rotation::DAILY, dir, "khana-admin");

        if json_format {
            layers.push(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_writer(Mutex::new(appender))
                    .with_filter(filter(level))
                    .boxed(),
            );
        } else {
            layers.push(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(Mutex::new(appender))
                    .with_filter(filter(level))
                    .boxed(),
            );
        }
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(std::io::Error::other)
}

/// Initialize the logging system (console only)
pub fn init_logger(level: &str, json_format: bool) -> std::io::Result<()> {
    init_logger_with_file(level, json_format, None)
}
