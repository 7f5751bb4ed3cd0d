//! Relay-bot logging: one plain-text line per event, written to the console and appended to
//! `LOG_FILE` so a restarted bot keeps its history.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::{format::Writer, time::FormatTime, writer::MakeWriterExt},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Used when `RUST_LOG` is unset or invalid. HTTP client internals stay quiet at `info`.
pub const DEFAULT_LOG_FILTER: &str = "info,hyper=warn,reqwest=warn";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock stamp at the start of each line.
struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// Opens `path` for appending, creating the file and any missing parent directories.
pub fn open_log_file(path: &str) -> io::Result<File> {
    match Path::new(path).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)?,
        _ => {}
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// `RUST_LOG` if it parses, else [`DEFAULT_LOG_FILTER`].
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber: `YYYY-MM-DD HH:MM:SS LEVEL target: message key=value ...`
/// on stdout and in `log_file`, without ANSI colours. Call after `.env` is loaded.
pub fn init_tracing(log_file: &str) -> anyhow::Result<()> {
    let file = Arc::new(open_log_file(log_file)?);

    let layer = tracing_subscriber::fmt::layer()
        .with_timer(LocalTimestamp)
        .with_target(true)
        .with_ansi(false)
        .with_writer(io::stdout.and(file));

    Registry::default()
        .with(log_filter())
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
