// src/logging.rs
// =============================================================================
// Progress and diagnostic output.
//
// The checking engine never talks to a global logger. Instead it gets a
// `LogSink` passed in and writes human-readable lines to it, each tagged with
// a severity. The binary decides where those lines go:
// - TracingSink: forwards to `tracing` (printed to stderr by tracing-subscriber)
// - FileSink: same, plus a copy of each line in a log file
// - NullSink: drops everything (tests)
// =============================================================================

use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Severity of a progress line, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
}

/// Receives progress lines from the engine.
pub trait LogSink {
    fn log(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }
}

/// Forwards every line to the matching `tracing` macro.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::Debug => tracing::debug!("{}", message),
            Level::Info => tracing::info!("{}", message),
            Level::Warn => tracing::warn!("{}", message),
        }
    }
}

/// Drops every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _level: Level, _message: &str) {}
}

/// Mirrors lines at or above `threshold` into a log file and forwards all of
/// them to tracing.
pub struct FileSink {
    file: Mutex<LineWriter<File>>,
    threshold: Level,
}

impl FileSink {
    /// Creates (or truncates) the log file at `path`.
    pub fn create(path: &Path, threshold: Level) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("cannot create log directory {}", parent.display()))?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;

        Ok(Self {
            file: Mutex::new(LineWriter::new(file)),
            threshold,
        })
    }
}

impl LogSink for FileSink {
    fn log(&self, level: Level, message: &str) {
        TracingSink.log(level, message);

        if level < self.threshold {
            return;
        }
        // A failing log file never fails the run
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", message);
        }
    }
}

/// Installs the global tracing subscriber for the binary.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug or info.
/// Output goes to stderr so that `--json` on stdout stays machine-readable.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[cfg(test)]
pub mod testing {
    // A sink that remembers what it was told, for assertions in tests.

    use super::{Level, LogSink};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingSink {
        lines: Mutex<Vec<(Level, String)>>,
    }

    impl RecordingSink {
        pub fn lines(&self) -> Vec<(Level, String)> {
            self.lines.lock().unwrap().clone()
        }

        pub fn contains(&self, level: Level, needle: &str) -> bool {
            self.lines()
                .iter()
                .any(|(l, line)| *l == level && line.contains(needle))
        }
    }

    impl LogSink for RecordingSink {
        fn log(&self, level: Level, message: &str) {
            self.lines.lock().unwrap().push((level, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
    }

    #[test]
    fn test_file_sink_respects_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("links.log");

        let sink = FileSink::create(&path, Level::Info).unwrap();
        sink.debug("hidden detail");
        sink.info("Processing File: a.html");
        sink.warn("Processed 1 files with 0 bad links.");
        drop(sink);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Processing File: a.html\nProcessed 1 files with 0 bad links.\n"
        );
    }

    #[test]
    fn test_recording_sink_keeps_levels() {
        let sink = testing::RecordingSink::default();
        sink.warn("Cannot connect to URL: http://x.invalid/");
        assert!(sink.contains(Level::Warn, "Cannot connect"));
        assert!(!sink.contains(Level::Info, "Cannot connect"));
    }
}
