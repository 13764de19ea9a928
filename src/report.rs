// src/report.rs
// =============================================================================
// Turns a finished walk into something people (or CI scripts) can read.
//
// For each bad link we look up the files that reference it. A bad link
// nobody references (the start path itself, for example) is reported without
// a referrer list.
//
// Output formats:
// - Summary lines through the LogSink (and so into the log file)
// - A table on stdout, or JSON with --json
// =============================================================================

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::crawl::{BadLinkReason, CheckOutcome};
use crate::logging::LogSink;

/// One bad link and where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadLinkEntry {
    pub link: String,
    pub reason: BadLinkReason,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub referenced_from: Vec<PathBuf>,
}

/// The full report of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total: usize,
    pub bad_links: Vec<BadLinkEntry>,
}

impl Report {
    pub fn from_outcome(outcome: &CheckOutcome) -> Self {
        let bad_links = outcome
            .bad_links
            .iter()
            .map(|bad| BadLinkEntry {
                link: bad.link.clone(),
                reason: bad.reason,
                referenced_from: outcome
                    .referrers(&bad.link)
                    .map(|files| files.iter().cloned().collect())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            total: outcome.total,
            bad_links,
        }
    }

    pub fn has_bad_links(&self) -> bool {
        !self.bad_links.is_empty()
    }

    /// Writes the summary and every bad link with its referrers to `sink`.
    pub fn log_summary(&self, sink: &dyn LogSink) {
        sink.warn("");
        sink.warn(&format!(
            "Processed {} files with {} bad links.",
            self.total,
            self.bad_links.len()
        ));

        for entry in &self.bad_links {
            sink.warn(&format!("\t{}", entry.link));
            if !entry.referenced_from.is_empty() {
                sink.warn("\tbad link referenced from:");
                for file in &entry.referenced_from {
                    sink.warn(&format!("\t\t{}", file.display()));
                }
            }
        }
    }

    /// Prints the report to stdout, as a table or as JSON.
    pub fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
        } else {
            self.print_table();
        }
        Ok(())
    }

    fn print_table(&self) {
        if self.bad_links.is_empty() {
            println!("✅ No bad links found");
        } else {
            println!("{:<70} {:<22}", "LINK", "REASON");
            println!("{}", "=".repeat(92));

            for entry in &self.bad_links {
                println!("{:<70} {:<22}", truncate(&entry.link, 67), entry.reason.as_str());
                for file in &entry.referenced_from {
                    println!("    ↳ {}", file.display());
                }
            }
        }

        println!();
        println!("📊 Summary:");
        println!("   📋 Processed: {}", self.total);
        println!("   ❌ Bad links: {}", self.bad_links.len());
    }
}

// Shortens long links for the table, keeping char boundaries intact
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}
