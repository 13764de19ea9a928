// src/checker/mod.rs
// =============================================================================
// This module contains the rules for judging a single link.
//
// Submodules (leaves first):
// - classify: Is this link a remote URL or a local file?
// - hosts: localhost detection and host-exclusion patterns
// - http: Liveness probe for remote URLs
// - html: Extracts raw links from a local HTML file
// - local: Resolves local links to canonical paths
//
// The crawl module strings these together into the full walk.
// =============================================================================

mod classify;
mod hosts;
mod html;
mod http;
mod local;

pub use classify::{classify, is_remote_url, LinkKind};
pub use hosts::{host_as_written, is_localhost, HostExclusions};
pub use html::extract_html_links;
pub use http::{check_liveness, HttpProbe, Liveness, ProbeResponse, UrlProbe};
pub use local::resolve_local_link;

#[cfg(test)]
pub use http::testing::ScriptedProbe;
