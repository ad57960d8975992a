//! Logging setup.
//!
//! - Human-readable stdout output, filtered by `RUST_LOG`
//! - Optional one-line JSON log file, rotated daily
//!
//! Library code logs through the `log` facade; `LogTracer` forwards those
//! records into `tracing`.

use log::LevelFilter;
use std::path::Path;
use std::sync::OnceLock;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "skland-checkin.log";
const DEFAULT_FILTER: &str = "info,skland=debug";

/// Initialize the logging system
///
/// Always writes to stdout; with `log_dir` also writes JSON to
/// `<log_dir>/skland-checkin.log.<date>`.
pub fn init_logger(log_dir: Option<&Path>) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    // Forward `log` records to tracing
    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_timer(fmt::time::ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_filter(default_filter());

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;

            let file_appender = rolling::daily(dir, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = FILE_GUARD.set(guard);

            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .json()
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_target(true)
                    .with_timer(fmt::time::ChronoLocal::new(
                        "%Y-%m-%dT%H:%M:%S%.3f%:z".to_string(), // ISO 8601 with offset and millis
                    ))
                    .with_filter(default_filter()),
            )
        }
        None => None,
    };

    let subscriber = Registry::default().with(stdout_layer).with(file_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::debug!(
        target: "skland::logging",
        log_dir = ?log_dir.map(|d| d.display().to_string()),
        version = env!("CARGO_PKG_VERSION"),
        "Logger initialized"
    );

    Ok(())
}

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_FILTER`]
fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
