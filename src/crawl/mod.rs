// src/crawl/mod.rs
// =============================================================================
// This module walks the link graph that starts at a local HTML file.
//
// Features:
// - Breadth-first walk in discovery order (FIFO work queue)
// - Every link is processed exactly once, no matter how often it appears
// - Local files are parsed for more links; remote URLs are only probed,
//   never parsed
// - Bad links are remembered together with the files that reference them
//
// Rust concepts:
// - Collections: HashSet for tracking seen links, VecDeque for the queue
// - Lifetimes: LinkChecker borrows its policy, probe and sink
// =============================================================================

mod engine;
mod frontier;

pub use engine::{BadLinkReason, CheckOutcome, LinkChecker};

#[cfg(test)]
pub use engine::BadLink;
