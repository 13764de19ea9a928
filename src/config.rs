// src/config.rs
// =============================================================================
// The validation policy: every knob that changes how links are judged.
//
// ValidationPolicy is the user-facing form. It can come from a TOML file
// (--config) and is then overridden by CLI flags. Before a run it is
// compiled into a CompiledPolicy, where regexes are built, HTTP methods are
// parsed and the timeout is turned into a ConnectTimeout.
//
// Example config file:
//
//   default_file = "index.html"
//   fail_on_localhost = true
//   fail_on_bad_urls = true
//   timeout_ms = 5000
//   ignore_host_regexes = [".*\\.corp\\.example\\.com"]
//   methods = ["HEAD", "GET"]
//   report_only = false
// =============================================================================

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::checker::HostExclusions;
use crate::error::ConfigError;

/// How links are validated. Every field has a default (see `Default`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// File served for a link that points at a directory, like a web server
    /// serving `foo/index.html` for `foo/`.
    pub default_file: String,
    /// Report links to the literal host `localhost` as bad.
    pub fail_on_localhost: bool,
    /// Report links to hosts matched by `ignore_host_regexes` as bad.
    pub fail_on_ignored_host: bool,
    /// Report malformed or unreachable URLs as bad.
    pub fail_on_bad_urls: bool,
    /// Connect timeout in milliseconds: <0 uses the system default, 0 waits
    /// forever, >0 is an explicit limit.
    pub timeout_ms: i64,
    /// Hosts (whole-string regex match) that are never contacted.
    pub ignore_host_regexes: Vec<String>,
    /// HTTP methods tried in order until one succeeds.
    pub methods: Vec<String>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            default_file: "index.html".to_string(),
            fail_on_localhost: true,
            fail_on_ignored_host: false,
            fail_on_bad_urls: false,
            timeout_ms: -1,
            ignore_host_regexes: Vec::new(),
            methods: vec!["HEAD".to_string()],
        }
    }
}

/// Contents of a `--config` file: the policy plus host-side settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    #[serde(flatten)]
    pub policy: ValidationPolicy,
    /// Report bad links without failing the process.
    pub report_only: bool,
    /// Where to mirror progress lines.
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    /// Reads a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Connect timeout applied to every remote probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectTimeout {
    /// Leave the client's own default in place.
    SystemDefault,
    /// Wait as long as it takes.
    Infinite,
    /// Give up connecting after this long.
    Limit(Duration),
}

impl ConnectTimeout {
    pub fn from_millis(millis: i64) -> Self {
        match millis {
            m if m < 0 => ConnectTimeout::SystemDefault,
            0 => ConnectTimeout::Infinite,
            m => ConnectTimeout::Limit(Duration::from_millis(m as u64)),
        }
    }

    /// The explicit duration to configure, if any.
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            ConnectTimeout::Limit(d) => Some(*d),
            ConnectTimeout::SystemDefault | ConnectTimeout::Infinite => None,
        }
    }
}

/// A validated policy, ready for the engine.
#[derive(Debug, Clone)]
pub struct CompiledPolicy {
    pub default_file: String,
    pub fail_on_localhost: bool,
    pub fail_on_ignored_host: bool,
    pub fail_on_bad_urls: bool,
    pub timeout: ConnectTimeout,
    pub ignored_hosts: HostExclusions,
    pub methods: Vec<Method>,
}

impl ValidationPolicy {
    /// Builds regexes, parses methods and the timeout.
    pub fn compile(&self) -> Result<CompiledPolicy, ConfigError> {
        if self.methods.is_empty() {
            return Err(ConfigError::NoMethods);
        }

        let methods = self
            .methods
            .iter()
            .map(|name| parse_method(name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CompiledPolicy {
            default_file: self.default_file.clone(),
            fail_on_localhost: self.fail_on_localhost,
            fail_on_ignored_host: self.fail_on_ignored_host,
            fail_on_bad_urls: self.fail_on_bad_urls,
            timeout: ConnectTimeout::from_millis(self.timeout_ms),
            ignored_hosts: HostExclusions::new(&self.ignore_host_regexes)?,
            methods,
        })
    }
}

// Method names are case-insensitive on the command line ("head" == "HEAD")
fn parse_method(name: &str) -> Result<Method, ConfigError> {
    let upper = name.trim().to_ascii_uppercase();
    if upper.is_empty() {
        return Err(ConfigError::InvalidMethod(name.to_string()));
    }
    Method::from_bytes(upper.as_bytes()).map_err(|_| ConfigError::InvalidMethod(name.to_string()))
}
