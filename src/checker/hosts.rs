// src/checker/hosts.rs
// =============================================================================
// Host rules applied before any network traffic.
//
// - `localhost` (the literal name only) marks a link that depends on the
//   machine running the check. `127.0.0.1` and `::1` are NOT matched: only the
//   hostname is treated as an environment dependency.
// - Host exclusions are user regexes; a matching host is never contacted.
//   Each pattern has to match the WHOLE host, so "example\.com" does not
//   exclude "www.example.com".
//
// Both rules look at the host exactly as it is written in the link.
// `url::Url` lowercases hosts, which would make "LOCALHOST" count as
// localhost and every exclusion pattern case-insensitive, so the host is cut
// out of the raw link text instead.
// =============================================================================

use regex::Regex;

use crate::error::ConfigError;

/// True only for the literal hostname `localhost`.
pub fn is_localhost(host: &str) -> bool {
    host == "localhost"
}

/// The host part of `link`, with the case it was written in.
///
/// Userinfo (`user@`) and the port are dropped; an IPv6 literal keeps its
/// brackets. Returns None when the link has no `scheme://` prefix.
///
/// "http://User@Example.COM:8080/a" -> "Example.COM"
pub fn host_as_written(link: &str) -> Option<&str> {
    let (_, rest) = link.split_once("://")?;
    let authority = rest.split(['/', '\\', '?', '#']).next().unwrap_or(rest);

    let host_and_port = match authority.rfind('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    };

    let host = if host_and_port.starts_with('[') {
        match host_and_port.find(']') {
            Some(end) => &host_and_port[..=end],
            None => host_and_port,
        }
    } else {
        host_and_port.split(':').next().unwrap_or(host_and_port)
    };

    Some(host)
}

/// Compiled host-exclusion patterns, kept in configuration order.
#[derive(Debug, Clone, Default)]
pub struct HostExclusions {
    patterns: Vec<Regex>,
}

impl HostExclusions {
    pub fn new(patterns: &[String]) -> Result<Self, ConfigError> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Regex::new(&format!("^(?:{})$", pattern)).map_err(|source| {
                    ConfigError::InvalidHostPattern {
                        pattern: pattern.clone(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// True when any pattern matches the whole host.
    pub fn is_excluded(&self, host: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(host))
    }
}
