// src/crawl/engine.rs
// =============================================================================
// The link-checking walk.
//
// How it works:
// 1. Put the start file in the frontier
// 2. Pop the oldest link and decide what it is (classify)
//    - Local file: read it, pull out its links, queue the new ones and
//      remember which file referenced each link
//    - Remote URL: apply the host rules, then probe it over HTTP
// 3. Repeat until the frontier is empty
//
// Bad links are collected in discovery order together with the reason they
// are bad. Whether a remote failure counts as "bad" depends on the policy
// (fail_on_localhost, fail_on_ignored_host, fail_on_bad_urls). A missing
// local file is always bad.
//
// Only two things abort the walk: a start path that does not exist, and an
// existing HTML file that cannot be read.
// =============================================================================

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use serde::Serialize;
use url::Url;

use super::frontier::Frontier;
use crate::checker::{
    check_liveness, classify, extract_html_links, host_as_written, is_localhost, is_remote_url,
    resolve_local_link, LinkKind, Liveness, ProbeResponse, UrlProbe,
};
use crate::config::CompiledPolicy;
use crate::error::CheckError;
use crate::logging::LogSink;

/// Why a link ended up in the bad-link list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadLinkReason {
    /// A local file or directory that does not exist.
    MissingLocalTarget,
    /// Looked like a URL but could not be parsed.
    MalformedUrl,
    /// Points at the literal host `localhost`.
    Localhost,
    /// Host matched an exclusion pattern.
    IgnoredHost,
    /// Could not connect with any configured method.
    UnreachableHost,
    /// Every configured method got an unacceptable status code.
    NonSuccessStatus,
}

impl BadLinkReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadLinkReason::MissingLocalTarget => "missing local target",
            BadLinkReason::MalformedUrl => "malformed URL",
            BadLinkReason::Localhost => "localhost",
            BadLinkReason::IgnoredHost => "ignored host",
            BadLinkReason::UnreachableHost => "unreachable host",
            BadLinkReason::NonSuccessStatus => "non-success status",
        }
    }
}

/// One entry of the bad-link list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadLink {
    pub link: String,
    pub reason: BadLinkReason,
}

/// Target link -> local files that reference it.
pub type AttributionIndex = HashMap<String, BTreeSet<PathBuf>>;

/// Everything a finished walk hands back to the caller.
#[derive(Debug, Default)]
pub struct CheckOutcome {
    /// Number of distinct links processed, the start file included.
    pub total: usize,
    /// Bad links in the order they were found.
    pub bad_links: Vec<BadLink>,
    pub attribution: AttributionIndex,
}

impl CheckOutcome {
    /// Files that reference `link`, if any.
    pub fn referrers(&self, link: &str) -> Option<&BTreeSet<PathBuf>> {
        self.attribution.get(link)
    }

    /// Just the bad link strings, in order.
    pub fn bad_link_ids(&self) -> Vec<&str> {
        self.bad_links.iter().map(|bad| bad.link.as_str()).collect()
    }
}

// Mutable state of one run; never outlives `LinkChecker::run`
#[derive(Default)]
struct Walk {
    frontier: Frontier,
    bad_links: Vec<BadLink>,
    attribution: AttributionIndex,
}

impl Walk {
    fn mark_bad(&mut self, link: &str, reason: BadLinkReason) {
        self.bad_links.push(BadLink {
            link: link.to_string(),
            reason,
        });
    }
}

/// Walks the links reachable from a start file.
///
/// Holds no state between runs: every call to `run` starts from scratch.
pub struct LinkChecker<'a> {
    policy: &'a CompiledPolicy,
    probe: &'a dyn UrlProbe,
    sink: &'a dyn LogSink,
}

impl<'a> LinkChecker<'a> {
    pub fn new(policy: &'a CompiledPolicy, probe: &'a dyn UrlProbe, sink: &'a dyn LogSink) -> Self {
        Self {
            policy,
            probe,
            sink,
        }
    }

    /// Checks every link reachable from `start` (a file or directory).
    pub async fn run(&self, start: &Path) -> Result<CheckOutcome, CheckError> {
        if start.as_os_str().is_empty() {
            return Err(CheckError::InvalidStart {
                path: start.to_path_buf(),
            });
        }
        let start = tokio::fs::canonicalize(start)
            .await
            .map_err(|_| CheckError::InvalidStart {
                path: start.to_path_buf(),
            })?;

        self.sink.info(&format!(
            "Checking links starting from: {}",
            start.display()
        ));

        let mut walk = Walk::default();
        walk.frontier.push(path_id(&start));

        while let Some(link) = walk.frontier.pop() {
            match classify(&link) {
                LinkKind::RemoteUrl => self.process_url(&mut walk, &link).await,
                LinkKind::LocalFile => self.process_file(&mut walk, &link).await?,
            }
        }

        Ok(CheckOutcome {
            total: walk.frontier.seen_count(),
            bad_links: walk.bad_links,
            attribution: walk.attribution,
        })
    }

    async fn process_file(&self, walk: &mut Walk, link: &str) -> Result<(), CheckError> {
        self.sink.info(&format!("Processing File: {}", link));

        let mut file = PathBuf::from(link);
        if matches!(tokio::fs::metadata(&file).await, Ok(meta) if meta.is_dir()) {
            file.push(&self.policy.default_file);
        }
        self.sink.debug(&format!("file = {}", file.display()));

        if tokio::fs::metadata(&file).await.is_err() {
            self.sink.debug("file does NOT exist");
            // Report the link as written, not the default-file candidate
            walk.mark_bad(link, BadLinkReason::MissingLocalTarget);
            return Ok(());
        }

        let bytes = tokio::fs::read(&file)
            .await
            .map_err(|source| CheckError::UnreadableFile {
                path: file.clone(),
                source,
            })?;
        let html = String::from_utf8_lossy(&bytes);
        let extracted = extract_html_links(&html);

        for ignored in &extracted.ignored {
            self.sink.debug(&format!("Ignoring: {}", ignored));
        }

        for raw in extracted.links {
            let target = if is_remote_url(&raw) {
                raw
            } else {
                path_id(&resolve_local_link(&file, &raw))
            };

            if !walk.frontier.push(target.clone()) {
                self.sink.debug(&format!("Already marked: {}", target));
            }
            walk.attribution
                .entry(target)
                .or_default()
                .insert(file.clone());
        }

        Ok(())
    }

    async fn process_url(&self, walk: &mut Walk, link: &str) {
        self.sink.info(&format!("Processing URL: {}", link));

        let url = match Url::parse(link) {
            Ok(url) => url,
            // classify() already parsed this link; kept for direct callers
            Err(error) => {
                self.sink.warn(&format!("Bad URL: {} ({})", link, error));
                if self.policy.fail_on_bad_urls {
                    walk.mark_bad(link, BadLinkReason::MalformedUrl);
                }
                return;
            }
        };

        // Matches https as well
        if !url.scheme().starts_with("http") {
            self.sink.info(&format!(
                "Only http* supported; not handling URL: {}",
                url
            ));
            return;
        }

        // Host rules see the host as written, not url's lowercased form
        let host = host_as_written(link).unwrap_or_else(|| url.host_str().unwrap_or_default());

        if is_localhost(host) {
            self.sink.info(&format!(
                "URL of localhost indicates suspicious environment dependency: {}",
                url
            ));
            if self.policy.fail_on_localhost {
                walk.mark_bad(link, BadLinkReason::Localhost);
            }
            return;
        }

        if self.policy.ignored_hosts.is_excluded(host) {
            self.sink.info(&format!(
                "The host destination is configured to be ignored: {}",
                host
            ));
            if self.policy.fail_on_ignored_host {
                walk.mark_bad(link, BadLinkReason::IgnoredHost);
            }
            return;
        }

        match check_liveness(self.probe, &self.policy.methods, &url, self.sink).await {
            Liveness::Live { .. } => {}
            Liveness::Dead { last } => {
                let reason = match last {
                    ProbeResponse::Status(_) => BadLinkReason::NonSuccessStatus,
                    ProbeResponse::CannotConnect(_) | ProbeResponse::Problem(_) => {
                        BadLinkReason::UnreachableHost
                    }
                };
                if self.policy.fail_on_bad_urls {
                    walk.mark_bad(link, reason);
                } else {
                    self.sink.debug(&format!(
                        "Not recording {} ({}) as configured",
                        link,
                        reason.as_str()
                    ));
                }
            }
        }
    }
}

fn path_id(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
