// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Every policy flag is optional: when it is not given, the value from the
// --config file (or the built-in default) is kept.
// =============================================================================

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::ValidationPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "html-link-checker",
    version = "0.1.0",
    about = "Checks every link reachable from a local HTML file",
    long_about = "html-link-checker starts at a local HTML file (or directory), follows every \
                  local link it finds, and probes every remote URL. Missing files and, \
                  depending on the policy, dead URLs are reported together with the files \
                  that reference them."
)]
pub struct Cli {
    /// File or directory to start from
    ///
    /// Relative paths are resolved against --input-dir (default: current directory)
    #[arg(default_value = "index.html")]
    pub start: PathBuf,

    /// Directory that relative start paths are resolved against
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// TOML file with policy settings; flags given here override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// File served when a link points at a directory (default: index.html)
    #[arg(long, value_name = "NAME")]
    pub default_file: Option<String>,

    /// Report links to localhost as bad (default: true)
    #[arg(long, value_name = "BOOL")]
    pub fail_on_localhost: Option<bool>,

    /// Report links to ignored hosts as bad (default: false)
    #[arg(long, value_name = "BOOL")]
    pub fail_on_ignored_host: Option<bool>,

    /// Report malformed or unreachable URLs as bad (default: false)
    #[arg(long, value_name = "BOOL")]
    pub fail_on_bad_urls: Option<bool>,

    /// Connect timeout in milliseconds: <0 system default, 0 infinite
    #[arg(long, value_name = "MS", allow_negative_numbers = true)]
    pub timeout: Option<i64>,

    /// Regex for hosts that are never contacted (repeatable, whole-host match)
    #[arg(long = "ignore-host", value_name = "REGEX")]
    pub ignore_hosts: Vec<String>,

    /// HTTP method to try, in order (repeatable, default: HEAD)
    #[arg(long = "method", value_name = "METHOD")]
    pub methods: Vec<String>,

    /// Report bad links but exit successfully
    #[arg(long)]
    pub report_only: bool,

    /// Also write progress lines to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Output results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,

    /// Show debug-level progress lines
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Applies the flags that were actually given on top of `policy`.
    pub fn apply_overrides(&self, policy: &mut ValidationPolicy) {
        if let Some(default_file) = &self.default_file {
            policy.default_file = default_file.clone();
        }
        if let Some(value) = self.fail_on_localhost {
            policy.fail_on_localhost = value;
        }
        if let Some(value) = self.fail_on_ignored_host {
            policy.fail_on_ignored_host = value;
        }
        if let Some(value) = self.fail_on_bad_urls {
            policy.fail_on_bad_urls = value;
        }
        if let Some(timeout) = self.timeout {
            policy.timeout_ms = timeout;
        }
        // Extra patterns add to the config file's list
        policy
            .ignore_host_regexes
            .extend(self.ignore_hosts.iter().cloned());
        // Methods replace it: the order matters
        if !self.methods.is_empty() {
            policy.methods = self.methods.clone();
        }
    }

    /// The start path, made absolute against the input directory.
    pub fn start_path(&self, current_dir: &Path) -> PathBuf {
        if self.start.is_absolute() {
            return self.start.clone();
        }
        let base = match &self.input_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => current_dir.join(dir),
            None => current_dir.to_path_buf(),
        };
        base.join(&self.start)
    }
}
