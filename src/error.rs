// src/error.rs
// =============================================================================
// Error types for the link checker.
//
// Two kinds of errors live here:
// - CheckError: fatal problems that abort a run (bad start path, unreadable
//   HTML file)
// - ConfigError: problems with the validation policy before a run starts
//
// Everything else that can go wrong with a single link (missing file, dead
// URL, ...) is NOT an error: it is recorded as a bad link and the walk goes on.
// See BadLinkReason in crawl/engine.rs.
// =============================================================================

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that stop a link-checking run.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The start file or directory does not exist.
    #[error("Starting Dir/File '{}' does NOT exist", path.display())]
    InvalidStart { path: PathBuf },

    /// An existing local file could not be read as HTML.
    #[error("file cannot be read: {}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors in the validation policy (config file or CLI flags).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid host pattern '{pattern}': {source}")]
    InvalidHostPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid HTTP method '{0}'")]
    InvalidMethod(String),

    #[error("at least one HTTP method must be configured")]
    NoMethods,

    #[error("cannot read config file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse config file {}: {source}", path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
