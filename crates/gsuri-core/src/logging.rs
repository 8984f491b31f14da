//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! The debug level picks the default filter; `RUST_LOG` overrides it.

use anyhow::Result;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "gsuri.log";

/// Default filter directives for a debug level (0..=3).
pub fn default_directives(level: u8) -> &'static str {
    match level {
        0 => "warn,gsuri=info,gsuri_core=info",
        1 => "info,gsuri=debug,gsuri_core=debug",
        _ => "debug,gsuri=trace,gsuri_core=trace",
    }
}

/// Filter for `level`, unless `RUST_LOG` is set.
pub fn filter_for_level(level: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// `~/.local/state/gsuri/gsuri.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gsuri")?;
    Ok(xdg_dirs.get_state_home().join("gsuri").join(LOG_FILE_NAME))
}

/// Per-event writer: a clone of the log file, or stderr if cloning failed.
enum LogWriter {
    File(File),
    Stderr,
}

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogWriter::File(f) => f.write(buf),
            LogWriter::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogWriter::File(f) => f.flush(),
            LogWriter::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// Append-only log file shared by all events.
struct SharedLogFile(File);

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogWriter::File)
            .unwrap_or(LogWriter::Stderr)
    }
}

fn install(level: u8, writer: BoxMakeWriter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for_level(level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))
}

/// Initialize structured logging to the XDG state log file.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging(level: u8) -> Result<()> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    install(level, BoxMakeWriter::new(SharedLogFile(file)))?;
    tracing::info!(debug_level = level, "gsuri logging initialized at {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only. Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr(level: u8) {
    // A subscriber may already be installed; keep it.
    let _ = install(level, BoxMakeWriter::new(io::stderr));
}
